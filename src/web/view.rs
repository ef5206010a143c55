use chrono::NaiveDate;

use crate::schedule::anomaly::Anomaly;
use crate::schedule::grid::GridRow;
use crate::schedule::models::Shift;

/// Display hours of the grid, one column per hour of day
pub const HOURS: std::ops::Range<u32> = 0..24;

/// Escape text for interpolation into HTML content and attributes
fn html_escape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            '\n' => result.push_str("&#10;"),
            _ => result.push(c),
        }
    }
    result
}

/// Row-click summary of the planned shifts, one paragraph per shift
fn row_summary(planned: &[Shift]) -> String {
    if planned.is_empty() {
        return String::from("No planned shifts");
    }

    planned
        .iter()
        .map(|shift| {
            format!(
                "{} - {} ({})\nPlanned duration: {} h",
                shift.employee,
                shift.role,
                shift.store,
                shift.duration_hours()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_cell(row: &GridRow, hour: u32) -> String {
    let mut cell = String::from("<td class=\"cell\">");
    for shift in row.planned.iter().filter(|shift| shift.covers_hour(hour)) {
        cell.push_str(&format!("<div class=\"plan\" data-id=\"{}\"></div>", shift.id));
    }
    for shift in row.actual.iter().filter(|shift| shift.covers_hour(hour)) {
        cell.push_str(&format!("<div class=\"fact\" data-id=\"{}\"></div>", shift.id));
    }
    cell.push_str("</td>");
    cell
}

fn render_notes(notes: &[Anomaly]) -> String {
    notes
        .iter()
        .map(|note| {
            let class = match note {
                Anomaly::Overtime => "note-overtime",
                _ => "note-anomaly",
            };
            format!("<span class=\"{}\">{}</span>", class, note.label())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_row(row: &GridRow) -> String {
    let mut html = format!(
        "<tr data-summary=\"{}\"><td class=\"employee\">{}</td><td class=\"date\">{}</td>",
        html_escape(&row_summary(&row.planned)),
        html_escape(&row.employee),
        row.date
    );
    for hour in HOURS {
        html.push_str(&render_cell(row, hour));
    }
    html.push_str(&format!(
        "<td class=\"notes\">{}</td></tr>",
        render_notes(&row.notes())
    ));
    html
}

fn render_table(rows: &[GridRow]) -> String {
    let mut html = String::from(
        "<table class=\"schedule\"><thead><tr><th>Employee</th><th>Date</th>",
    );
    for hour in HOURS {
        html.push_str(&format!("<th class=\"hour\">{}</th>", hour));
    }
    html.push_str("<th>Notes</th></tr></thead><tbody>");
    for row in rows {
        html.push_str(&render_row(row));
    }
    html.push_str("</tbody></table>");
    html
}

fn render_page(body: &str, start_date: NaiveDate, end_date: NaiveDate) -> String {
    include_str!("../../assets/schedule/index.html")
        .replace("__START_DATE__", &start_date.to_string())
        .replace("__END_DATE__", &end_date.to_string())
        .replace("<!-- SCHEDULE_TABLE -->", body)
}

/// Render the schedule page for the given grid and range
pub fn render_schedule_page(rows: &[GridRow], start_date: NaiveDate, end_date: NaiveDate) -> String {
    render_page(&render_table(rows), start_date, end_date)
}

/// Render the degraded page shown when the payload failed to load
pub fn render_load_failure_page(start_date: NaiveDate, end_date: NaiveDate) -> String {
    render_page(
        "<p class=\"load-error\">Failed to load schedule data.</p>",
        start_date,
        end_date,
    )
}
