use std::fmt;

use serde::Serialize;

use super::models::Shift;
use super::time::hour_of;

/// Attendance discrepancy between a planned shift and recorded attendance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Anomaly {
    Absence,
    LateArrival,
    EarlyDeparture,
    Overtime,
}

impl Anomaly {
    /// Display label of the anomaly
    pub fn label(&self) -> &'static str {
        match self {
            Anomaly::Absence => "Absence",
            Anomaly::LateArrival => "Late arrival",
            Anomaly::EarlyDeparture => "Early departure",
            Anomaly::Overtime => "Overtime",
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detect anomalies for one planned shift against the actual shifts of the
/// same employee and day
///
/// The overlap test compares hour-of-day only, so shifts crossing midnight or
/// spanning multiple days are not matched correctly. Only the first
/// overlapping actual shift (in list order) is used for the timestamp
/// comparisons; later overlaps are ignored. Both are deliberate carryovers
/// from the source data's semantics.
pub fn detect_anomalies(planned: &Shift, actuals: &[Shift]) -> Vec<Anomaly> {
    let matched = actuals.iter().find(|actual| {
        hour_of(&actual.start) < hour_of(&planned.end)
            && hour_of(&actual.end) > hour_of(&planned.start)
    });

    let Some(actual) = matched else {
        return vec![Anomaly::Absence];
    };

    let mut anomalies = Vec::new();
    if actual.start > planned.start {
        anomalies.push(Anomaly::LateArrival);
    }
    if actual.end < planned.end {
        anomalies.push(Anomaly::EarlyDeparture);
    }
    // One overtime label even when both boundaries are exceeded
    if actual.start < planned.start || actual.end > planned.end {
        anomalies.push(Anomaly::Overtime);
    }

    anomalies
}
