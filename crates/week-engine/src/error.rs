//! Error types for week-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeekError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid calculation standard: {0}")]
    InvalidStandard(String),
}

pub type Result<T> = std::result::Result<T, WeekError>;
