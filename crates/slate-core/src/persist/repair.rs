//! Field-by-field repair of persisted entries.
//!
//! Policy: coerce each field to a usable value instead of rejecting the
//! record. Only an entry with no usable id (or no object shape at all) is
//! dropped. Repair is structural, not a re-validation: it can reintroduce
//! values the add/edit path would reject, and those records are kept.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::domain::{Task, TaskId, normalize_due};

/// A persisted entry after coercion, still carrying its pre-reconcile rank.
///
/// `rank` stays a float here: the slot may hold any finite JSON number and
/// only the relative order matters before renumbering.
pub(super) struct RepairedEntry {
    id: TaskId,
    title: String,
    due: Option<NaiveDate>,
    done: bool,
    pub(super) rank: f64,
}

impl RepairedEntry {
    pub(super) fn into_task(self) -> Task {
        Task {
            id: self.id,
            title: self.title,
            due: self.due,
            done: self.done,
            // Placeholder; the caller renumbers the whole collection next.
            order: 0,
        }
    }
}

/// Coerce one raw entry. `index` is its 0-based position in the source array,
/// used as the rank fallback and in discard logs.
pub(super) fn repair_entry(index: usize, entry: &Value) -> Option<RepairedEntry> {
    let Value::Object(fields) = entry else {
        debug!(index, "dropping non-object entry");
        return None;
    };
    let Some(id) = coerce_id(fields.get("id")) else {
        debug!(index, "dropping entry without a usable id");
        return None;
    };

    Some(RepairedEntry {
        id: TaskId::new(id),
        title: coerce_title(fields.get("title")),
        due: fields
            .get("dueDate")
            .and_then(Value::as_str)
            .and_then(normalize_due),
        done: coerce_done(fields.get("done")),
        rank: coerce_rank(index, fields.get("order")),
    })
}

/// Strings pass through; numeric ids become their decimal string form.
fn coerce_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Missing or unusable titles default to empty.
fn coerce_title(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Only a JSON boolean or the literal string "true" counts as done; any
/// other truthy-looking value ("yes", 1, ...) reads as not done.
fn coerce_done(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

/// Finite numbers are taken as-is; everything else falls back to the entry's
/// 1-based position in the source array.
fn coerce_rank(index: usize, value: Option<&Value>) -> f64 {
    match value.and_then(Value::as_f64) {
        Some(rank) if rank.is_finite() => rank,
        _ => (index + 1) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn well_formed_entries_pass_through() {
        let entry = json!({
            "id": "t1",
            "title": "buy milk",
            "dueDate": "2026-01-10",
            "done": true,
            "order": 4
        });
        let repaired = repair_entry(0, &entry).unwrap();
        let task = repaired.into_task();

        assert_eq!(task.id, TaskId::new("t1"));
        assert_eq!(task.title, "buy milk");
        assert_eq!(task.due, NaiveDate::from_ymd_opt(2026, 1, 10));
        assert!(task.done);
    }

    #[test]
    fn numeric_ids_are_coerced_to_strings() {
        let entry = json!({ "id": 42, "title": "t" });
        let task = repair_entry(0, &entry).unwrap().into_task();
        assert_eq!(task.id, TaskId::new("42"));
    }

    #[rstest]
    #[case::missing(json!({ "title": "no id" }))]
    #[case::null(json!({ "id": null, "title": "t" }))]
    #[case::object(json!({ "id": {}, "title": "t" }))]
    #[case::not_an_object(json!("just a string"))]
    fn unusable_entries_are_dropped(#[case] entry: Value) {
        assert!(repair_entry(0, &entry).is_none());
    }

    #[test]
    fn missing_title_defaults_to_empty() {
        let entry = json!({ "id": "t1" });
        let task = repair_entry(0, &entry).unwrap().into_task();
        assert_eq!(task.title, "");
    }

    #[rstest]
    #[case::bool_true(json!(true), true)]
    #[case::bool_false(json!(false), false)]
    #[case::string_true(json!("true"), true)]
    #[case::string_yes(json!("yes"), false)]
    #[case::number_one(json!(1), false)]
    #[case::null(json!(null), false)]
    fn done_coercion_is_strict(#[case] done: Value, #[case] expected: bool) {
        let entry = json!({ "id": "t1", "done": done });
        assert_eq!(repair_entry(0, &entry).unwrap().into_task().done, expected);
    }

    #[rstest]
    #[case::impossible("2024-02-30")]
    #[case::free_text("next week")]
    fn malformed_due_dates_become_none(#[case] due: &str) {
        let entry = json!({ "id": "t1", "dueDate": due });
        assert_eq!(repair_entry(0, &entry).unwrap().into_task().due, None);
    }

    #[test]
    fn non_string_due_dates_become_none() {
        let entry = json!({ "id": "t1", "dueDate": 20260110 });
        assert_eq!(repair_entry(0, &entry).unwrap().into_task().due, None);
    }

    #[test]
    fn missing_order_falls_back_to_source_position() {
        let entry = json!({ "id": "t1" });
        assert_eq!(repair_entry(4, &entry).unwrap().rank, 5.0);
    }

    #[rstest]
    #[case::fractional(json!(2.5), 2.5)]
    #[case::negative(json!(-3), -3.0)]
    #[case::string(json!("7"), 1.0)]
    fn order_must_be_a_finite_number(#[case] order: Value, #[case] expected: f64) {
        let entry = json!({ "id": "t1", "order": order });
        assert_eq!(repair_entry(0, &entry).unwrap().rank, expected);
    }
}
