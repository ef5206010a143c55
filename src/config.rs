use crate::error::{config_error, AppResult};
use crate::schedule::time::weekly_date_range;
use chrono::{Local, NaiveDate};
use dotenvy::dotenv;
use std::env;

/// Default path of the schedule payload
pub const DEFAULT_DATA_PATH: &str = "data/schedule.json";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Main configuration structure for the application
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON schedule payload
    pub data_path: String,
    /// Port the web server listens on
    pub port: u16,
    /// Fixed default range start (YYYY-MM-DD), current week when unset
    pub default_start: Option<String>,
    /// Fixed default range end (YYYY-MM-DD), current week when unset
    pub default_end: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let data_path =
            env::var("SCHEDULE_DATA_PATH").unwrap_or_else(|_| String::from(DEFAULT_DATA_PATH));

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| config_error("Invalid PORT format"))?,
            Err(_) => DEFAULT_PORT,
        };

        let default_start = env::var("SCHEDULE_DEFAULT_START").ok();
        let default_end = env::var("SCHEDULE_DEFAULT_END").ok();

        Ok(Config {
            data_path,
            port,
            default_start,
            default_end,
        })
    }

    /// Resolve the default display range
    ///
    /// Uses the configured fixed range when both bounds parse, otherwise the
    /// current week (Monday to Sunday).
    pub fn default_range(&self) -> (NaiveDate, NaiveDate) {
        let parsed = |value: &Option<String>| {
            value
                .as_deref()
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        };

        match (parsed(&self.default_start), parsed(&self.default_end)) {
            (Some(start), Some(end)) => (start, end),
            _ => weekly_date_range(&Local::now()),
        }
    }
}
