//! WASM bindings for week-engine.
//!
//! Dates cross the boundary as `YYYY-MM-DD` strings, the value of an HTML
//! `<input type="date">`. Invalid dates never reach the week functions: the
//! numeric exports return `0` and `weekCard` returns an invalid card.

use wasm_bindgen::prelude::*;

use week_engine::{
    format_long_date, iso_week_number, parse_locale, parse_target_date, us_week_number,
    weekday_name, CalculationStandard, CardOptions, WeekCard, WeekError,
};

/// ISO-8601 week number of a `YYYY-MM-DD` date, or `0` if it does not parse.
#[wasm_bindgen(js_name = "isoWeekNumber")]
pub fn iso_week_number_js(date: &str) -> u32 {
    parse_target_date(date)
        .date()
        .map(|d| iso_week_number(&d))
        .unwrap_or(0)
}

/// US (Sunday-start) week number of a `YYYY-MM-DD` date, or `0` if it does not parse.
#[wasm_bindgen(js_name = "usWeekNumber")]
pub fn us_week_number_js(date: &str) -> u32 {
    parse_target_date(date)
        .date()
        .map(|d| us_week_number(&d))
        .unwrap_or(0)
}

/// Localized long date.
#[wasm_bindgen(js_name = "formatLongDate")]
pub fn format_long_date_js(date: &str, locale: &str) -> Result<String, JsError> {
    long_date(date, locale).map_err(to_js_error)
}

/// Localized weekday name.
#[wasm_bindgen(js_name = "weekdayName")]
pub fn weekday_name_js(date: &str, locale: &str) -> Result<String, JsError> {
    day_name(date, locale).map_err(to_js_error)
}

/// The host timezone as seen by the browser.
#[wasm_bindgen(js_name = "detectTimezone")]
pub fn detect_timezone_js() -> String {
    week_engine::detect_timezone()
}

/// A static week card as JSON.
///
/// `standard` is `"iso"` or `"us"`. An unparseable `date` yields a card with
/// `data: null`; an unknown locale or standard is an error.
#[wasm_bindgen(js_name = "weekCard")]
pub fn week_card_js(date: &str, locale: &str, standard: &str) -> Result<String, JsError> {
    let card = build_card(date, locale, standard).map_err(to_js_error)?;
    serde_json::to_string(&card).map_err(|e| JsError::new(&e.to_string()))
}

// ── Native-testable core ────────────────────────────────────────────────────

fn long_date(date: &str, locale: &str) -> Result<String, WeekError> {
    let locale = parse_locale(locale)?;
    let date = parse_target_date(date).into_result()?;
    Ok(format_long_date(date, &locale))
}

fn day_name(date: &str, locale: &str) -> Result<String, WeekError> {
    let locale = parse_locale(locale)?;
    let date = parse_target_date(date).into_result()?;
    Ok(weekday_name(date, &locale))
}

fn build_card(date: &str, locale: &str, standard: &str) -> Result<WeekCard, WeekError> {
    let options = CardOptions {
        locale: parse_locale(locale)?,
        standard: standard.parse::<CalculationStandard>()?,
    };
    Ok(WeekCard::for_target("", &parse_target_date(date), &options))
}

fn to_js_error(e: WeekError) -> JsError {
    JsError::new(&e.to_string())
}
