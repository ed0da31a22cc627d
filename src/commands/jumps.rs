//! Jump test command implementations

use std::io::Write;

use crate::{
    cli::types::{JumpMetric, PlayerId},
    roster::{chart::format_value, chart_series, render_bar_chart, RosterStore},
    storage::{JumpMeasurement, JumpTestData, KeyValueStorage},
    Result,
};

/// Handle `jump add`
pub fn handle_jump_add<S: KeyValueStorage>(
    store: &mut RosterStore<S>,
    player_id: &PlayerId,
    measurement: JumpMeasurement,
    out: &mut impl Write,
) -> Result<JumpTestData> {
    let entry = store.add_jump_measurement(player_id, measurement)?;
    writeln!(
        out,
        "✓ Jump test recorded for player {} at {}",
        player_id,
        entry.date.format("%Y-%m-%d %H:%M")
    )?;
    Ok(entry)
}

/// Handle `jump list`
pub fn handle_jump_list<S: KeyValueStorage>(
    store: &RosterStore<S>,
    player_id: &PlayerId,
    as_json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if store.find_player(player_id)?.is_none() {
        writeln!(out, "Player not found: {}", player_id)?;
        return Ok(());
    }
    let jumps = store.jump_data_for_player(player_id)?;

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(jumps)?)?;
        return Ok(());
    }

    if jumps.is_empty() {
        writeln!(out, "No jump test data available for this player yet.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<17} {:>11} {:>11} {:>16} {:>12}",
        "Date", "Flight Time", "Jump Height", "Repetition Index", "Contact Time"
    )?;
    for jump in jumps {
        writeln!(
            out,
            "{:<17} {:>11} {:>11} {:>16} {:>12}",
            jump.date.format("%Y-%m-%d %H:%M"),
            format_value(jump.flight_time),
            format_value(jump.jump_height),
            format_value(jump.repetition_index),
            format_value(jump.contact_time)
        )?;
    }
    Ok(())
}

/// Handle `jump chart`
pub fn handle_jump_chart<S: KeyValueStorage>(
    store: &RosterStore<S>,
    player_id: &PlayerId,
    metrics: Option<Vec<JumpMetric>>,
    width: usize,
    as_json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if store.find_player(player_id)?.is_none() {
        writeln!(out, "Player not found: {}", player_id)?;
        return Ok(());
    }
    let series = chart_series(store.jump_data_for_player(player_id)?);

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&series)?)?;
        return Ok(());
    }

    if series.is_empty() {
        writeln!(out, "No jump test data available for this player yet.")?;
        writeln!(out, "Add jump data to see the chart.")?;
        return Ok(());
    }

    let metrics = metrics.unwrap_or_else(|| JumpMetric::ALL.to_vec());
    for (i, metric) in metrics.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{}", render_bar_chart(&series, *metric, width.max(1)))?;
    }
    Ok(())
}
