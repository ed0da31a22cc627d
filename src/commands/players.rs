//! Player command implementations

use std::io::Write;

use chrono::NaiveDate;

use super::common::{player_row, PlayerSummary};
use crate::{
    cli::types::{PlayerId, TeamId},
    roster::RosterStore,
    storage::{KeyValueStorage, Player, PlayerInput, PlayerUpdate},
    Result,
};

/// Handle `player add`
pub fn handle_player_add<S: KeyValueStorage>(
    store: &mut RosterStore<S>,
    input: PlayerInput,
    out: &mut impl Write,
) -> Result<Player> {
    let player = store.create_player(input)?;
    writeln!(
        out,
        "✓ Player {} added successfully ({})",
        player.full_name(),
        player.id
    )?;
    Ok(player)
}

/// Handle `player update`
pub fn handle_player_update<S: KeyValueStorage>(
    store: &mut RosterStore<S>,
    player_id: &PlayerId,
    update: PlayerUpdate,
    out: &mut impl Write,
) -> Result<()> {
    if store.find_player(player_id)?.is_none() {
        writeln!(out, "No player with id {}; nothing updated", player_id)?;
        return Ok(());
    }
    if update.is_empty() {
        writeln!(out, "No fields given; nothing updated")?;
        return Ok(());
    }

    store.update_player(player_id, update)?;
    writeln!(out, "✓ Player {} updated", player_id)?;
    Ok(())
}

/// Handle `player delete`
pub fn handle_player_delete<S: KeyValueStorage>(
    store: &mut RosterStore<S>,
    player_id: &PlayerId,
    out: &mut impl Write,
) -> Result<()> {
    let Some(name) = store.find_player(player_id)?.map(Player::full_name) else {
        writeln!(out, "No player with id {}; nothing deleted", player_id)?;
        return Ok(());
    };

    store.delete_player(player_id)?;
    writeln!(out, "✓ Player {} deleted", name)?;
    Ok(())
}

/// Handle `player list`
pub fn handle_player_list<S: KeyValueStorage>(
    store: &RosterStore<S>,
    team_id: &TeamId,
    as_json: bool,
    today: NaiveDate,
    out: &mut impl Write,
) -> Result<()> {
    let Some(team) = store.find_team(team_id)? else {
        writeln!(out, "Team not found: {}", team_id)?;
        return Ok(());
    };
    let players = store.list_players_by_team(team_id)?;

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&players)?)?;
        return Ok(());
    }

    writeln!(out, "{} ({} players)", team.name, players.len())?;
    if players.is_empty() {
        writeln!(out, "  No players on this team yet.")?;
    }
    for player in players {
        writeln!(out, "  {}", player_row(player, today))?;
    }
    Ok(())
}

/// Handle `player show`
pub fn handle_player_show<S: KeyValueStorage>(
    store: &RosterStore<S>,
    player_id: &PlayerId,
    as_json: bool,
    today: NaiveDate,
    out: &mut impl Write,
) -> Result<()> {
    let Some(player) = store.find_player(player_id)? else {
        writeln!(out, "Player not found: {}", player_id)?;
        return Ok(());
    };
    let summary = PlayerSummary::new(player, store.find_team(&player.team_id)?, today);

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    for line in summary.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
