use std::io::Write as _;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use slate_core::app::{StoreBuilder, TaskStore};
use slate_core::domain::{FilterMode, SortMode, TaskId};
use slate_core::impls::FileSlot;

const HELP: &str = "\
commands:
  add <title> [@YYYY-MM-DD]    add a task
  edit <n> <title> [@date]     rewrite task n from the last listing
  done <n> / undo <n>          set / clear the completion mark
  rm <n>                       delete task n
  mv <n> <m>                   move task n into task m's slot
  find <text>                  set the search query (no text clears it)
  filter all|done|todo         set the status filter
  sort manual|asc|desc         set the sort mode
  ls                           rerender the current view
  help                         this text
  quit
";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // (A) wire the store against a file slot
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "slate.json".to_string());
    let slot = Arc::new(FileSlot::new(&path));
    let mut store = match StoreBuilder::new().slot(slot).load().await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("failed to start: {e}");
            return;
        }
    };

    println!("slate: {} task(s) loaded from {path}", store.len());
    print!("{HELP}");

    // (B) rendered row number -> TaskId, refreshed after every render
    let mut rows = render(&store);

    // (C) command loop: one user action at a time, rerender after each
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => print!("{HELP}"),
            "ls" => {}
            "add" => {
                let (title, due) = split_due(rest);
                store.add(title, due).await;
            }
            "edit" => {
                if let Some((id, args)) = pick_with_args(&rows, rest) {
                    let (title, due) = split_due(args);
                    store.edit(&id, title, due).await;
                }
            }
            "done" => {
                if let Some(id) = pick(&rows, rest) {
                    store.toggle_done(&id, true).await;
                }
            }
            "undo" => {
                if let Some(id) = pick(&rows, rest) {
                    store.toggle_done(&id, false).await;
                }
            }
            "rm" => {
                if let Some(id) = pick(&rows, rest) {
                    store.remove(&id).await;
                }
            }
            "mv" => {
                let mut parts = rest.split_whitespace();
                let from = parts.next().and_then(|n| pick(&rows, n));
                let to = parts.next().and_then(|n| pick(&rows, n));
                if let (Some(from), Some(to)) = (from, to) {
                    store.move_before(&from, &to).await;
                }
            }
            "find" => store.set_query(rest),
            "filter" => match rest {
                "all" => store.set_filter(FilterMode::All),
                "done" => store.set_filter(FilterMode::Done),
                "todo" => store.set_filter(FilterMode::Todo),
                _ => println!("filter all|done|todo"),
            },
            "sort" => match rest {
                "manual" => store.set_sort(SortMode::Manual),
                "asc" => store.set_sort(SortMode::DateAscending),
                "desc" => store.set_sort(SortMode::DateDescending),
                _ => println!("sort manual|asc|desc"),
            },
            other => println!("unknown command: {other} (try help)"),
        }

        rows = render(&store);
        prompt();
    }
}

/// Print the projected view and return the row -> id mapping the numeric
/// commands resolve against. Row numbers always refer to the last render.
fn render(store: &TaskStore) -> Vec<TaskId> {
    if store.is_empty() {
        println!("(no tasks yet, add the first one)");
        return Vec::new();
    }

    let view = store.view();
    if view.is_empty() {
        println!("(nothing matches the current view)");
        return Vec::new();
    }

    let mut rows = Vec::with_capacity(view.len());
    for (n, row) in view.iter().enumerate() {
        let mark = if row.done { "x" } else { " " };
        match row.due_date {
            Some(due) => println!("{:>3}. [{mark}] {} @{due}", n + 1, row.title),
            None => println!("{:>3}. [{mark}] {}", n + 1, row.title),
        }
        rows.push(TaskId::new(row.id.clone()));
    }
    rows
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Resolve a 1-based row number from the last listing.
fn pick(rows: &[TaskId], raw: &str) -> Option<TaskId> {
    let n: usize = raw.trim().parse().ok()?;
    rows.get(n.checked_sub(1)?).cloned()
}

/// Like `pick`, for commands with trailing arguments ("edit 2 new title").
fn pick_with_args<'a>(rows: &[TaskId], rest: &'a str) -> Option<(TaskId, &'a str)> {
    let (number, args) = rest.split_once(' ')?;
    Some((pick(rows, number)?, args.trim()))
}

/// Split a trailing "@YYYY-MM-DD" token off a title. The store normalizes the
/// date itself; this only separates the two fields.
fn split_due(input: &str) -> (&str, &str) {
    match input.rsplit_once(" @") {
        Some((title, due)) if !due.contains(' ') => (title.trim(), due),
        _ => (input.trim(), ""),
    }
}
