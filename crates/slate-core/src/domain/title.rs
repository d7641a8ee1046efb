//! Title normalization.

use thiserror::Error;

/// Upper bound on a title after trimming, in Unicode scalar values.
pub const MAX_TITLE_CHARS: usize = 80;

/// A trimmed, validated task title.
///
/// Validation applies at the add/edit boundary only. A rehydrated task may
/// carry a title this type would reject (repair keeps the record anyway), so
/// the task record itself stores a plain `String`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("title is empty after trimming")]
    Empty,

    #[error("title exceeds {MAX_TITLE_CHARS} characters after trimming")]
    TooLong,
}

impl TaskTitle {
    /// Trim raw input and check the length bounds.
    pub fn normalize(raw: &str) -> Result<Self, TitleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TitleError::Empty);
        }
        if trimmed.chars().count() > MAX_TITLE_CHARS {
            return Err(TitleError::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn trims_surrounding_whitespace() {
        let title = TaskTitle::normalize("  do homework \t").unwrap();
        assert_eq!(title.as_str(), "do homework");
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace_only("   \t  ")]
    fn empty_input_is_rejected(#[case] raw: &str) {
        assert_eq!(TaskTitle::normalize(raw), Err(TitleError::Empty));
    }

    #[test]
    fn exactly_eighty_chars_is_accepted() {
        let raw = "x".repeat(MAX_TITLE_CHARS);
        assert!(TaskTitle::normalize(&raw).is_ok());
    }

    #[test]
    fn eighty_one_chars_is_rejected() {
        let raw = "x".repeat(MAX_TITLE_CHARS + 1);
        assert_eq!(TaskTitle::normalize(&raw), Err(TitleError::TooLong));
    }

    #[test]
    fn length_counts_scalar_values_not_bytes() {
        // 80 Cyrillic letters are 160 bytes but still within the cap.
        let raw = "я".repeat(MAX_TITLE_CHARS);
        assert!(TaskTitle::normalize(&raw).is_ok());
    }

    #[test]
    fn trailing_whitespace_does_not_count_against_the_cap() {
        let raw = format!("  {}  ", "x".repeat(MAX_TITLE_CHARS));
        assert!(TaskTitle::normalize(&raw).is_ok());
    }
}
