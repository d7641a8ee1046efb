//! Due-date normalization.

use chrono::NaiveDate;

/// Parse raw user input into an optional due date.
///
/// Contract:
/// - empty or whitespace-only input means "no due date", not an error
/// - anything that is not exactly `YYYY-MM-DD` degrades to None
/// - the components must form a real calendar date (leap years included)
///
/// Callers never see a failure; a malformed date is the same as no date.
pub fn normalize_due(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_ymd(trimmed)
}

/// Strict `YYYY-MM-DD` shape check before the calendar check.
///
/// chrono's `%m`/`%d` accept one-digit components, so the literal 4-2-2 digit
/// layout is enforced here first.
fn parse_ymd(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let year = parse_digits(&s[0..4])? as i32;
    let month = parse_digits(&s[5..7])?;
    let day = parse_digits(&s[8..10])?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_digits(part: &str) -> Option<u32> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("2026-01-10", 2026, 1, 10)]
    #[case::leap_day("2024-02-29", 2024, 2, 29)]
    #[case::year_end("2025-12-31", 2025, 12, 31)]
    fn real_dates_pass_through(
        #[case] raw: &str,
        #[case] y: i32,
        #[case] m: u32,
        #[case] d: u32,
    ) {
        assert_eq!(normalize_due(raw), NaiveDate::from_ymd_opt(y, m, d));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert!(normalize_due(" 2026-01-10 ").is_some());
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    fn absent_input_is_none_not_an_error(#[case] raw: &str) {
        assert_eq!(normalize_due(raw), None);
    }

    #[rstest]
    #[case::impossible_day("2024-02-30")]
    #[case::non_leap_feb_29("2023-02-29")]
    #[case::month_zero("2024-00-10")]
    #[case::month_thirteen("2024-13-01")]
    #[case::day_zero("2024-05-00")]
    #[case::one_digit_month("2024-2-03")]
    #[case::no_dashes("20240229")]
    #[case::wrong_separator("2024/02/29")]
    #[case::trailing_noise("2024-02-28x")]
    #[case::garbage("soon")]
    fn malformed_input_degrades_to_none(#[case] raw: &str) {
        assert_eq!(normalize_due(raw), None);
    }
}
