use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

/// Parse a timestamp in YYYY-MM-DDTHH:MM format, with or without seconds
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(ts);
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

/// Hour of day of a timestamp, 0..=23
pub fn hour_of(ts: &NaiveDateTime) -> u32 {
    ts.hour()
}

/// Calendar-date portion of a timestamp, used as a grouping key
pub fn date_of(ts: &NaiveDateTime) -> NaiveDate {
    ts.date()
}

/// Signed duration from start to end in hours, fractional
///
/// Negative when end precedes start; inverted intervals are a data
/// precondition violation upstream and are not clamped here.
pub fn duration_hours(start: &NaiveDateTime, end: &NaiveDateTime) -> f64 {
    let diff = end.signed_duration_since(*start);
    diff.num_seconds() as f64 / 3600.0
}

/// Get date range for the current week (Monday to Sunday)
pub fn weekly_date_range(now: &DateTime<Local>) -> (NaiveDate, NaiveDate) {
    // Calculate Monday of the current week
    let monday = now
        .date_naive()
        .checked_sub_signed(chrono::Duration::days(
            (now.weekday().num_days_from_monday() % 7) as i64,
        ))
        .unwrap_or_else(|| now.date_naive());

    // Calculate Sunday of the current week (Monday + 6 days)
    let sunday = monday
        .checked_add_signed(chrono::Duration::days(6))
        .unwrap_or(monday);

    (monday, sunday)
}
