//! Host timezone lookup and zoned "now".
//!
//! The detected name is a display convenience only. Week numbers are
//! always computed from a calendar date the caller has already resolved.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::error::WeekError;

/// Returned by [`detect_timezone`] when the host cannot name its timezone.
pub const FALLBACK_TIMEZONE: &str = "Unknown Timezone";

/// The host's configured IANA timezone identifier (e.g. `"Asia/Shanghai"`).
///
/// Never fails: if the host cannot resolve a timezone, a warning is logged
/// and [`FALLBACK_TIMEZONE`] is returned.
pub fn detect_timezone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(name) => {
            debug!(timezone = %name, "detected host timezone");
            name
        }
        Err(e) => {
            warn!(error = %e, fallback = FALLBACK_TIMEZONE, "cannot resolve host timezone");
            FALLBACK_TIMEZONE.to_string()
        }
    }
}

/// Parse an IANA timezone name into `Tz`.
///
/// # Errors
///
/// Returns [`WeekError::InvalidTimezone`] if the name is not in the IANA database.
pub fn parse_timezone(name: &str) -> Result<Tz, WeekError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| WeekError::InvalidTimezone(format!("'{}'", name)))
}

/// Express the instant `now` in `tz`.
///
/// Takes the anchor explicitly so callers control the clock.
pub fn now_in(now: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    now.with_timezone(&tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_detect_timezone_never_empty() {
        let tz = detect_timezone();
        assert!(!tz.is_empty());
    }

    #[test]
    fn test_parse_timezone_valid() {
        let tz = parse_timezone("Asia/Shanghai").unwrap();
        assert_eq!(tz.name(), "Asia/Shanghai");
        assert!(parse_timezone(" UTC ").is_ok());
    }

    #[test]
    fn test_parse_timezone_invalid() {
        assert!(matches!(
            parse_timezone("Mars/Olympus_Mons"),
            Err(WeekError::InvalidTimezone(_))
        ));
        assert!(parse_timezone("").is_err());
    }

    #[test]
    fn test_now_in_crosses_date_line() {
        // 2023-12-31 20:00 UTC is already Jan 1 in Shanghai (UTC+8)
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 20, 0, 0).single().unwrap();
        let local = now_in(now, parse_timezone("Asia/Shanghai").unwrap());
        assert_eq!(local.year(), 2024);
        assert_eq!(local.day(), 1);
        assert_eq!(local.hour(), 4);
    }
}
