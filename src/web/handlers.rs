use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use super::view;
use super::AppState;
use crate::schedule::grid::build_grid;

/// Selected date range, as submitted by the filter form
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Parse a YYYY-MM-DD query value, falling back to the default range bound
/// when the value is missing or unparseable
pub fn parse_date(value: Option<&str>, fallback: NaiveDate) -> NaiveDate {
    match value {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                warn!("Ignoring unparseable date parameter: {}", raw);
                fallback
            }
        },
        None => fallback,
    }
}

/// Handler for the schedule page
pub async fn schedule_handler(
    State(state): State<AppState>,
    Query(range): Query<RangeQuery>,
) -> impl IntoResponse {
    let (default_start, default_end) = state.default_range;
    let start_date = parse_date(range.start.as_deref(), default_start);
    let end_date = parse_date(range.end.as_deref(), default_end);

    let html = match state.schedule.as_ref() {
        Some(data) => {
            let rows = build_grid(data, start_date, end_date);
            view::render_schedule_page(&rows, start_date, end_date)
        }
        None => view::render_load_failure_page(start_date, end_date),
    };

    Html(html)
}

/// Handler for API health check
pub async fn health_handler() -> &'static str {
    "OK"
}
