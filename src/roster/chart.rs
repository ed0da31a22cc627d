//! Jump history as a chart series.

use crate::cli::types::JumpMetric;
use crate::storage::JumpTestData;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

/// One bar group of the jump history chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Axis label, e.g. `May 01`.
    pub label: String,
    pub date: DateTime<Utc>,
    pub flight_time: f64,
    pub jump_height: f64,
    pub repetition_index: f64,
    pub contact_time: f64,
}

impl ChartPoint {
    pub fn value(&self, metric: JumpMetric) -> f64 {
        match metric {
            JumpMetric::FlightTime => self.flight_time,
            JumpMetric::JumpHeight => self.jump_height,
            JumpMetric::RepetitionIndex => self.repetition_index,
            JumpMetric::ContactTime => self.contact_time,
        }
    }
}

/// Points in chronological order (oldest first), whatever order the input
/// history is in.
pub fn chart_series(jump_data: &[JumpTestData]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = jump_data
        .iter()
        .map(|jump| ChartPoint {
            label: jump.date.format("%b %d").to_string(),
            date: jump.date,
            flight_time: jump.flight_time,
            jump_height: jump.jump_height,
            repetition_index: jump.repetition_index,
            contact_time: jump.contact_time,
        })
        .collect();
    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}

/// Horizontal text bars for one metric, scaled so the largest value spans
/// `width` cells.
pub fn render_bar_chart(points: &[ChartPoint], metric: JumpMetric, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", metric.label());

    let max = points
        .iter()
        .map(|p| p.value(metric))
        .fold(0.0_f64, f64::max);

    for point in points {
        let value = point.value(metric);
        let cells = if max > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "  {:<6} | {:<width$} {}",
            point.label,
            "█".repeat(cells),
            format_value(value),
            width = width
        );
    }
    out
}

/// Trim trailing zeros so `35.20` prints as `35.2` and `1.0` as `1`.
pub fn format_value(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
