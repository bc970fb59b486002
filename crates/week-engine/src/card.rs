//! The week card: one date with its week number and localized labels.
//!
//! A single parameterized card covers both the live "now" view and the
//! static view of a queried date. A card built from invalid input carries
//! no [`WeekData`] and renders a placeholder week instead.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::format::{format_long_date, weekday_name, DisplayLocale};
use crate::input::TargetDate;
use crate::week::CalculationStandard;

/// Footer shown when no timezone label is available.
pub const LOCAL_TIME_LABEL: &str = "Local device time";

/// Options shared by every card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardOptions {
    /// Locale for the date and weekday labels.
    pub locale: DisplayLocale,
    /// Week-numbering convention.
    pub standard: CalculationStandard,
}

/// Everything computed for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekData {
    pub date: NaiveDate,
    pub week_number: u32,
    /// Calendar year of `date` (not the ISO week-year).
    pub year: i32,
    pub day_of_week: String,
    pub formatted_date: String,
}

impl WeekData {
    pub fn compute(date: NaiveDate, options: &CardOptions) -> Self {
        use chrono::Datelike;

        Self {
            date,
            week_number: options.standard.week_number(&date),
            year: date.year(),
            day_of_week: weekday_name(date, &options.locale),
            formatted_date: format_long_date(date, &options.locale),
        }
    }

    /// Week number zero-padded to two digits.
    pub fn week_label(&self) -> String {
        format!("{:02}", self.week_number)
    }
}

/// Whether a card tracks the running clock or shows a fixed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardMode {
    Live { timezone: Option<String> },
    Static,
}

/// A rendered-ready card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekCard {
    pub title: String,
    pub mode: CardMode,
    /// Time of day, for live cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// `None` when the card was built from invalid input.
    pub data: Option<WeekData>,
    /// The rejected input, for invalid cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_input: Option<String>,
    /// Convention the week number in `data` was computed with.
    pub standard: CalculationStandard,
}

impl WeekCard {
    /// Card for the current instant, already expressed in local time.
    pub fn live(
        title: impl Into<String>,
        now: NaiveDateTime,
        timezone: Option<String>,
        options: &CardOptions,
    ) -> Self {
        Self {
            title: title.into(),
            mode: CardMode::Live { timezone },
            time: Some(now.time()),
            data: Some(WeekData::compute(now.date(), options)),
            invalid_input: None,
            standard: options.standard,
        }
    }

    /// Card for a user-chosen date. Invalid targets produce an invalid card.
    pub fn for_target(title: impl Into<String>, target: &TargetDate, options: &CardOptions) -> Self {
        let (data, invalid_input) = match target {
            TargetDate::Valid { date } => (Some(WeekData::compute(*date, options)), None),
            TargetDate::Invalid { input } => (None, Some(input.clone())),
        };

        Self {
            title: title.into(),
            mode: CardMode::Static,
            time: None,
            data,
            invalid_input,
            standard: options.standard,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.mode, CardMode::Live { .. })
    }

    pub fn is_valid(&self) -> bool {
        self.data.is_some()
    }

    /// Week number for display: two digits, or `"--"` for invalid cards.
    pub fn week_label(&self) -> String {
        self.data
            .as_ref()
            .map(WeekData::week_label)
            .unwrap_or_else(|| "--".to_string())
    }

    /// Footer label: the live timezone, or the local-time fallback.
    pub fn timezone_label(&self) -> &str {
        match &self.mode {
            CardMode::Live {
                timezone: Some(tz),
            } if !tz.is_empty() => tz,
            _ => LOCAL_TIME_LABEL,
        }
    }
}

impl fmt::Display for WeekCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if self.is_live() {
            write!(f, " [live]")?;
        }
        writeln!(f)?;

        match (&self.data, &self.invalid_input) {
            (Some(data), _) => {
                write!(f, "  {} {}", data.formatted_date, data.day_of_week)?;
                if let Some(time) = self.time {
                    write!(f, " {}", time.format("%H:%M:%S"))?;
                }
                writeln!(f)?;
            }
            (None, Some(input)) => writeln!(f, "  Invalid date: {:?}", input)?,
            (None, None) => writeln!(f, "  Invalid date")?,
        }

        writeln!(f, "  Week {} · {}", self.week_label(), self.standard)?;
        write!(f, "  {}", self.timezone_label())
    }
}
