pub mod anomaly;
pub mod grid;
pub mod models;
pub mod time;

use crate::error::{schedule_data_error, AppResult};
use models::ScheduleData;
use tracing::info;

/// Load the schedule payload from a JSON file
///
/// Read once at startup; the dataset is immutable afterwards. Missing file
/// and malformed JSON (including malformed timestamps) both surface as
/// errors for the caller to degrade on, with no retry.
pub async fn load_schedule(path: &str) -> AppResult<ScheduleData> {
    let content = tokio::fs::read_to_string(path).await?;
    let data: ScheduleData = serde_json::from_str(&content)
        .map_err(|e| schedule_data_error(&format!("Malformed schedule payload: {}", e)))?;

    info!(
        "Loaded schedule from {}: {} planned, {} actual shifts",
        path,
        data.plan.len(),
        data.fact.len()
    );

    Ok(data)
}
