//! Parsing of user-typed target dates.
//!
//! Input that does not parse is kept as [`TargetDate::Invalid`] rather than
//! an error, so a display layer can show an "invalid" state without ever
//! calling the week functions on it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::WeekError;

/// The format accepted by [`parse_target_date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A target date as typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TargetDate {
    Valid { date: NaiveDate },
    Invalid { input: String },
}

impl TargetDate {
    /// The parsed date, or `None` for invalid input.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            TargetDate::Valid { date } => Some(*date),
            TargetDate::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, TargetDate::Valid { .. })
    }

    /// Convert to a `Result`, for callers that want to bail on bad input.
    pub fn into_result(self) -> Result<NaiveDate, WeekError> {
        match self {
            TargetDate::Valid { date } => Ok(date),
            TargetDate::Invalid { input } => Err(WeekError::InvalidDate(format!(
                "'{}': expected YYYY-MM-DD",
                input
            ))),
        }
    }
}

impl From<NaiveDate> for TargetDate {
    fn from(date: NaiveDate) -> Self {
        TargetDate::Valid { date }
    }
}

/// Parse a `YYYY-MM-DD` string, surrounding whitespace ignored.
///
/// The shape is strict: four-digit year, two-digit month and day, no sign
/// and no inner padding.
///
/// # Examples
///
/// ```
/// use week_engine::input::{parse_target_date, TargetDate};
///
/// assert!(parse_target_date("2024-01-01").is_valid());
/// assert!(!parse_target_date("").is_valid());
/// assert!(!parse_target_date("2023-02-29").is_valid());
/// ```
pub fn parse_target_date(input: &str) -> TargetDate {
    let trimmed = input.trim();
    if !has_date_shape(trimmed) {
        return TargetDate::Invalid {
            input: input.to_string(),
        };
    }

    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => TargetDate::Valid { date },
        Err(_) => TargetDate::Invalid {
            input: input.to_string(),
        },
    }
}

/// `DDDD-DD-DD`, ASCII digits only.
fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let t = parse_target_date("2024-01-01");
        assert_eq!(t.date(), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert!(t.is_valid());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_target_date("  2020-12-31\n").is_valid());
    }

    #[test]
    fn test_parse_empty_is_invalid() {
        assert_eq!(
            parse_target_date(""),
            TargetDate::Invalid {
                input: String::new()
            }
        );
        assert!(!parse_target_date("   ").is_valid());
    }

    #[test]
    fn test_parse_malformed_is_invalid() {
        for s in ["2024/01/01", "01-01-2024", "2024-13-01", "2023-02-29", "tomorrow", "2024-01"] {
            assert!(!parse_target_date(s).is_valid(), "{s}");
        }
    }

    #[test]
    fn test_parse_rejects_loose_fields() {
        for s in [
            "2024-1-1",
            "+2024-01-01",
            "2024-01- 1",
            "024-01-01",
            "02024-01-01",
            "2024-01-1",
            "２０２４-01-01",
        ] {
            assert!(!parse_target_date(s).is_valid(), "{s:?}");
        }
    }

    #[test]
    fn test_parse_early_years_need_four_digits() {
        assert_eq!(parse_target_date("0024-01-01").date(), NaiveDate::from_ymd_opt(24, 1, 1));
    }

    #[test]
    fn test_into_result() {
        assert!(parse_target_date("2024-02-29").into_result().is_ok());
        assert!(matches!(
            parse_target_date("nope").into_result(),
            Err(WeekError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_serialize_invalid() {
        let json = serde_json::to_value(parse_target_date("x")).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["input"], "x");
    }
}
