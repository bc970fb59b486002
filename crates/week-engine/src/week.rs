//! Week-number computation.
//!
//! Both conventions are pure functions of the calendar date: the time of day
//! and the UTC offset of the input only matter insofar as they already
//! determined which calendar date the caller is holding. Any
//! [`chrono::Datelike`] value works, so callers can pass a `NaiveDate`, a
//! `NaiveDateTime`, or a zoned `DateTime` that was converted to the
//! timezone of interest first.
//!
//! All arithmetic runs on day-of-year ordinals, so neither function can fail
//! for a date `chrono` can represent.
//!
//! # Functions
//!
//! - [`iso_week_number`] — ISO-8601 week (Monday start, week 1 holds the first Thursday)
//! - [`us_week_number`] — US week (Sunday start, week 1 holds January 1)

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::WeekError;

// ── Calculation standard ────────────────────────────────────────────────────

/// Which week-numbering convention to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationStandard {
    /// ISO 8601: weeks start on Monday, week 1 holds the year's first Thursday.
    #[default]
    Iso8601,
    /// US convention: weeks start on Sunday, week 1 holds January 1.
    Us,
}

impl CalculationStandard {
    /// Human-readable label, e.g. for a card footer.
    pub fn label(self) -> &'static str {
        match self {
            CalculationStandard::Iso8601 => "ISO-8601",
            CalculationStandard::Us => "US (Sunday Start)",
        }
    }

    /// Compute the week number of `date` under this convention.
    pub fn week_number<D: Datelike>(self, date: &D) -> u32 {
        match self {
            CalculationStandard::Iso8601 => iso_week_number(date),
            CalculationStandard::Us => us_week_number(date),
        }
    }
}

impl std::fmt::Display for CalculationStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for CalculationStandard {
    type Err = WeekError;

    /// Accepts `iso`, `iso8601`, `iso-8601` and `us` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" | "iso8601" | "iso-8601" => Ok(CalculationStandard::Iso8601),
            "us" => Ok(CalculationStandard::Us),
            _ => Err(WeekError::InvalidStandard(format!("'{}'", s))),
        }
    }
}

// ── iso_week_number ─────────────────────────────────────────────────────────

/// ISO-8601 week number of `date`, in `1..=53`.
///
/// The date is shifted to the Thursday of its own (Monday-starting) week;
/// the week number is then the count of weeks between that Thursday and the
/// first Thursday of the Thursday's year. Dates in late December can land in
/// week 1 of the following year and dates in early January in week 52 or 53
/// of the previous one. Only the ordinal is returned, not the week-year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use week_engine::week::iso_week_number;
///
/// let d = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
/// assert_eq!(iso_week_number(&d), 53);
///
/// // Sunday, January 1 2023 belongs to the last week of 2022
/// let d = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// assert_eq!(iso_week_number(&d), 52);
/// ```
pub fn iso_week_number<D: Datelike>(date: &D) -> u32 {
    // Monday = 0 … Sunday = 6
    let day_nr = date.weekday().num_days_from_monday() as i32;

    // Ordinal (0-based) of this week's Thursday, relative to its own year.
    let mut year = date.year();
    let mut thursday = date.ordinal0() as i32 - day_nr + 3;
    let mut jan1 = jan1_weekday(date);

    if thursday < 0 {
        year -= 1;
        let len = days_in_year(year);
        thursday += len;
        jan1 = (jan1 - len).rem_euclid(7);
    } else if thursday >= days_in_year(year) {
        let len = days_in_year(year);
        year += 1;
        thursday -= len;
        jan1 = (jan1 + len).rem_euclid(7);
    }

    let first_thursday = (4 - jan1 + 7) % 7;
    let elapsed = thursday - first_thursday;
    debug_assert!(elapsed >= 0 && elapsed % 7 == 0, "year {year}: {elapsed}");

    1 + (elapsed as u32).div_ceil(7)
}

// ── us_week_number ──────────────────────────────────────────────────────────

/// US (Sunday-start) week number of `date`.
///
/// The partial week holding January 1 is week 1; every Sunday after it opens
/// a new week. The result is not clamped: a leap year starting on a Saturday
/// reaches week 54 on December 31.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use week_engine::week::us_week_number;
///
/// // Saturday, Jan 6 2024 closes week 1; Sunday Jan 7 opens week 2
/// let sat = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// let sun = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(us_week_number(&sat), 1);
/// assert_eq!(us_week_number(&sun), 2);
/// ```
pub fn us_week_number<D: Datelike>(date: &D) -> u32 {
    let past_days = date.ordinal0();
    let first_day_of_year = jan1_weekday(date) as u32;
    (past_days + first_day_of_year + 1).div_ceil(7)
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Weekday of January 1 of `date`'s year (Sunday = 0 … Saturday = 6).
fn jan1_weekday<D: Datelike>(date: &D) -> i32 {
    let weekday = date.weekday().num_days_from_sunday() as i32;
    (weekday - date.ordinal0() as i32).rem_euclid(7)
}

fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
