pub mod handlers;
pub mod view;

use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::NaiveDate;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::schedule::models::ScheduleData;

/// Shared state of the web server
///
/// The dataset is loaded once at startup and never mutated; `None` records a
/// load failure and degrades every page render to the error state.
#[derive(Clone)]
pub struct AppState {
    pub schedule: Arc<Option<ScheduleData>>,
    pub default_range: (NaiveDate, NaiveDate),
}

impl AppState {
    pub fn new(schedule: Option<ScheduleData>, default_range: (NaiveDate, NaiveDate)) -> Self {
        Self {
            schedule: Arc::new(schedule),
            default_range,
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::schedule_handler))
        .route("/health", get(handlers::health_handler))
        // Serve static files
        .nest_service("/assets", ServeDir::new("assets"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
