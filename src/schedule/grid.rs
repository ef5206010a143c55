use std::collections::HashMap;

use chrono::NaiveDate;

use super::anomaly::{detect_anomalies, Anomaly};
use super::models::{ScheduleData, Shift};
use super::time::date_of;

/// One employee/date combination of the displayed grid
///
/// Either list may be empty: a row exists as soon as one side has a shift on
/// that day. Within a row all planned shifts share the employee and calendar
/// date by construction of the grouping key; same for actual shifts.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub employee: String,
    pub date: NaiveDate,
    pub planned: Vec<Shift>,
    pub actual: Vec<Shift>,
}

impl GridRow {
    fn new(employee: String, date: NaiveDate) -> Self {
        Self {
            employee,
            date,
            planned: Vec::new(),
            actual: Vec::new(),
        }
    }

    /// Anomaly notes of the row, concatenated over its planned shifts in
    /// planned order
    pub fn notes(&self) -> Vec<Anomaly> {
        self.planned
            .iter()
            .flat_map(|planned| detect_anomalies(planned, &self.actual))
            .collect()
    }
}

/// Build the display grid for a closed date range
///
/// Shifts whose start date falls within `[start_date, end_date]` (inclusive
/// both ends, compared as calendar dates) are grouped by employee and date.
/// Rows keep insertion order: keys first seen in the plan list, in plan
/// order, then actual-only keys in fact order. An inverted range filters
/// everything out and yields an empty grid rather than an error.
pub fn build_grid(data: &ScheduleData, start_date: NaiveDate, end_date: NaiveDate) -> Vec<GridRow> {
    let in_range =
        |shift: &Shift| date_of(&shift.start) >= start_date && date_of(&shift.start) <= end_date;

    let mut rows: Vec<GridRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for shift in data.plan.iter().filter(|shift| in_range(shift)) {
        let position = row_position(&mut rows, &mut index, shift);
        rows[position].planned.push(shift.clone());
    }

    for shift in data.fact.iter().filter(|shift| in_range(shift)) {
        let position = row_position(&mut rows, &mut index, shift);
        rows[position].actual.push(shift.clone());
    }

    rows
}

/// Find the row a shift belongs to, creating it at the tail on first sight
fn row_position(
    rows: &mut Vec<GridRow>,
    index: &mut HashMap<String, usize>,
    shift: &Shift,
) -> usize {
    let key = shift.row_key();
    if let Some(&position) = index.get(&key) {
        return position;
    }

    rows.push(GridRow::new(shift.employee.clone(), date_of(&shift.start)));
    let position = rows.len() - 1;
    index.insert(key, position);
    position
}
