//! # week-engine
//!
//! Deterministic week-number computation.
//!
//! The engine answers "which week is this date in?" under two conventions,
//! ISO-8601 (Monday start) and US (Sunday start), and produces the localized
//! labels a display needs alongside the number. All computation is pure:
//! callers supply the date (or the "now" anchor) explicitly.
//!
//! ## Modules
//!
//! - [`week`] — ISO-8601 and US week numbers, [`CalculationStandard`]
//! - [`format`] — Localized long date and weekday name
//! - [`timezone`] — Host timezone detection and zoned "now"
//! - [`input`] — `YYYY-MM-DD` parsing with an explicit invalid state
//! - [`card`] — Live/static week cards built from the above
//! - [`error`] — Error types

pub mod card;
pub mod error;
pub mod format;
pub mod input;
pub mod timezone;
pub mod week;

pub use card::{CardMode, CardOptions, WeekCard, WeekData};
pub use error::WeekError;
pub use format::{format_long_date, parse_locale, weekday_name, DisplayLocale};
pub use input::{parse_target_date, TargetDate};
pub use timezone::{detect_timezone, now_in, parse_timezone, FALLBACK_TIMEZONE};
pub use week::{iso_week_number, us_week_number, CalculationStandard};
