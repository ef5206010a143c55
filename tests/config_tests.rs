use chrono::{Local, NaiveDate};
use vuorovahti::config::{Config, DEFAULT_DATA_PATH, DEFAULT_PORT};
use vuorovahti::schedule::time::weekly_date_range;

fn config(default_start: Option<&str>, default_end: Option<&str>) -> Config {
    Config {
        data_path: DEFAULT_DATA_PATH.to_string(),
        port: DEFAULT_PORT,
        default_start: default_start.map(str::to_string),
        default_end: default_end.map(str::to_string),
    }
}

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

/// A fully configured fixed range wins over the current week
#[test]
fn test_default_range_uses_configured_bounds() {
    let config = config(Some("2025-08-31"), Some("2025-09-05"));
    assert_eq!(
        config.default_range(),
        (date("2025-08-31"), date("2025-09-05"))
    );
}

/// With no configured bounds the range is the current week
#[test]
fn test_default_range_falls_back_to_current_week() {
    let config = config(None, None);
    assert_eq!(config.default_range(), weekly_date_range(&Local::now()));
}

/// A single configured bound is not enough; the week is used instead
#[test]
fn test_default_range_requires_both_bounds() {
    let week = weekly_date_range(&Local::now());
    assert_eq!(config(Some("2025-08-31"), None).default_range(), week);
    assert_eq!(config(None, Some("2025-09-05")).default_range(), week);
}

/// An unparseable bound falls back to the current week as well
#[test]
fn test_default_range_ignores_unparseable_bounds() {
    let config = config(Some("next monday"), Some("2025-09-05"));
    assert_eq!(config.default_range(), weekly_date_range(&Local::now()));
}
