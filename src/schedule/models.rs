use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::time::{date_of, duration_hours, hour_of};

/// One planned or actual work interval
///
/// Ids are unique only within their own list; plan and fact ids are
/// independent namespaces. The employee name is the grouping key and is not
/// normalized. `start < end` is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub employee: String,
    pub store: String,
    pub role: String,
    #[serde(with = "timestamp")]
    pub start: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub end: NaiveDateTime,
}

impl Shift {
    /// Planned or worked duration in hours, negative for inverted intervals
    pub fn duration_hours(&self) -> f64 {
        duration_hours(&self.start, &self.end)
    }

    /// Whether this shift covers the given display hour
    ///
    /// Hour-granular, same midnight-crossing limitation as the overlap test
    /// in the anomaly detector.
    pub fn covers_hour(&self, hour: u32) -> bool {
        hour >= hour_of(&self.start) && hour < hour_of(&self.end)
    }

    /// Grouping key of the row this shift belongs to
    pub fn row_key(&self) -> String {
        format!("{}_{}", self.employee, date_of(&self.start))
    }
}

/// The full payload: expected shifts and recorded attendance
///
/// No relational link exists between a planned and an actual shift other than
/// matching employee and temporal overlap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleData {
    #[serde(default)]
    pub plan: Vec<Shift>,
    #[serde(default)]
    pub fact: Vec<Shift>,
}

/// Serde adapter for YYYY-MM-DDTHH:MM timestamp strings
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::schedule::time::parse_timestamp;

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.format("%Y-%m-%dT%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}
