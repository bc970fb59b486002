//! Localized date labels.
//!
//! Month and weekday names come from the locale database bundled with
//! `chrono` (`unstable-locales`); the order of year, month and day follows
//! the conventions of the locale's language. Output is meant for display
//! only and is not guaranteed to parse back.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
pub use chrono::Locale;

use crate::error::WeekError;

/// A parsed locale together with its normalized POSIX tag (e.g. `zh_CN`).
#[derive(Debug, Clone)]
pub struct DisplayLocale {
    tag: String,
    locale: Locale,
}

impl PartialEq for DisplayLocale {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for DisplayLocale {}

impl DisplayLocale {
    /// The normalized tag, e.g. `"en_US"`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The BCP-47 form of the tag, e.g. `"en-US"`.
    pub fn bcp47(&self) -> String {
        self.tag.replace('_', "-")
    }

    /// The underlying `chrono` locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Lowercase language subtag, e.g. `"en"`.
    pub fn language(&self) -> &str {
        self.tag.split('_').next().unwrap_or(&self.tag)
    }

    /// Region subtag if the tag has one, e.g. `Some("US")`.
    pub fn region(&self) -> Option<&str> {
        self.tag.split('_').nth(1)
    }
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self {
            tag: "zh_CN".to_string(),
            locale: Locale::zh_CN,
        }
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bcp47())
    }
}

impl std::str::FromStr for DisplayLocale {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_locale(s)
    }
}

/// Parse a locale tag.
///
/// Accepts BCP-47 (`zh-CN`), POSIX (`zh_CN`, `en_US.UTF-8`) and bare language
/// tags (`de`), which are expanded to the language's most common region.
/// Script subtags (`zh-Hans-CN`) are skipped.
///
/// # Errors
///
/// Returns [`WeekError::InvalidLocale`] if the tag is empty or names a locale
/// with no bundled data.
///
/// # Examples
///
/// ```
/// use week_engine::format::parse_locale;
///
/// assert_eq!(parse_locale("zh-CN").unwrap().tag(), "zh_CN");
/// assert_eq!(parse_locale("en_US.UTF-8").unwrap().tag(), "en_US");
/// assert_eq!(parse_locale("de").unwrap().tag(), "de_DE");
/// assert!(parse_locale("xx-YY").is_err());
/// ```
pub fn parse_locale(tag: &str) -> Result<DisplayLocale, WeekError> {
    let normalized = normalize_tag(tag)
        .ok_or_else(|| WeekError::InvalidLocale(format!("'{}'", tag.trim())))?;

    let locale = Locale::try_from(normalized.as_str())
        .map_err(|_| WeekError::InvalidLocale(format!("'{}'", tag.trim())))?;

    Ok(DisplayLocale {
        tag: normalized,
        locale,
    })
}

/// Long-form date: full year, month, numeric day, in the locale's natural order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use week_engine::format::{format_long_date, parse_locale};
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(format_long_date(d, &parse_locale("zh-CN").unwrap()), "2024年1月1日");
/// assert_eq!(format_long_date(d, &parse_locale("en-US").unwrap()), "January 1, 2024");
/// ```
pub fn format_long_date(date: NaiveDate, locale: &DisplayLocale) -> String {
    localized(date, long_date_pattern(locale), locale)
}

/// Full weekday name of `date` in `locale`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use week_engine::format::{parse_locale, weekday_name};
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(weekday_name(d, &parse_locale("en-US").unwrap()), "Monday");
/// assert_eq!(weekday_name(d, &parse_locale("zh-CN").unwrap()), "星期一");
/// ```
pub fn weekday_name(date: NaiveDate, locale: &DisplayLocale) -> String {
    localized(date, "%A", locale)
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn localized(date: NaiveDate, pattern: &str, locale: &DisplayLocale) -> String {
    date.and_time(NaiveTime::default())
        .and_utc()
        .format_localized(pattern, locale.locale())
        .to_string()
}

/// strftime pattern for a long date in the locale's language.
fn long_date_pattern(locale: &DisplayLocale) -> &'static str {
    match locale.language() {
        "zh" | "ja" => "%Y年%-m月%-d日",
        "ko" => "%Y년 %-m월 %-d일",
        "hu" => "%Y. %B %-d.",
        "en" => match locale.region() {
            Some("US") | Some("PH") | None => "%B %-d, %Y",
            _ => "%-d %B %Y",
        },
        "de" | "da" | "nb" | "nn" | "fi" | "cs" | "sk" | "sl" | "hr" | "et" => "%-d. %B %Y",
        "es" | "pt" => "%-d de %B de %Y",
        _ => "%-d %B %Y",
    }
}

/// Normalize a user-supplied tag to `ll_RR`.
fn normalize_tag(tag: &str) -> Option<String> {
    // Drop POSIX encoding and modifier suffixes: en_US.UTF-8@euro
    let base = tag.trim().split(['.', '@']).next()?;
    let mut parts = base.split(['-', '_']).filter(|p| !p.is_empty());

    let language = parts.next()?.to_ascii_lowercase();
    if language.len() < 2
        || language.len() > 3
        || !language.chars().all(|c| c.is_ascii_alphabetic())
    {
        return None;
    }

    // Skip a 4-letter script subtag (zh-Hans-CN)
    let region = parts.find(|p| p.len() != 4).map(|p| p.to_ascii_uppercase());

    let region = match region {
        Some(r) => r,
        None => default_region(&language)?.to_string(),
    };

    Some(format!("{language}_{region}"))
}

fn default_region(language: &str) -> Option<&'static str> {
    let region = match language {
        "zh" => "CN",
        "en" => "US",
        "ja" => "JP",
        "ko" => "KR",
        "de" => "DE",
        "fr" => "FR",
        "es" => "ES",
        "pt" => "PT",
        "it" => "IT",
        "ru" => "RU",
        "nl" => "NL",
        "sv" => "SE",
        "da" => "DK",
        "nb" => "NO",
        "fi" => "FI",
        "pl" => "PL",
        "cs" => "CZ",
        "hu" => "HU",
        "tr" => "TR",
        "uk" => "UA",
        "el" => "GR",
        _ => return None,
    };
    Some(region)
}
