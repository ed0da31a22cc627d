//! Team command implementations

use std::io::Write;

use crate::{
    cli::types::TeamId,
    roster::RosterStore,
    storage::{KeyValueStorage, Team},
    Result,
};

/// Handle `team add`
pub fn handle_team_add<S: KeyValueStorage>(
    store: &mut RosterStore<S>,
    name: &str,
    out: &mut impl Write,
) -> Result<Team> {
    let team = store.create_team(name)?;
    writeln!(out, "✓ Team '{}' created ({})", team.name, team.id)?;
    Ok(team)
}

/// Handle `team rename`
pub fn handle_team_rename<S: KeyValueStorage>(
    store: &mut RosterStore<S>,
    team_id: &TeamId,
    name: &str,
    out: &mut impl Write,
) -> Result<()> {
    if store.find_team(team_id)?.is_none() {
        writeln!(out, "No team with id {}; nothing renamed", team_id)?;
        return Ok(());
    }

    store.rename_team(team_id, name)?;
    writeln!(out, "✓ Team {} renamed to '{}'", team_id, name.trim())?;
    Ok(())
}

/// Handle `team delete`
pub fn handle_team_delete<S: KeyValueStorage>(
    store: &mut RosterStore<S>,
    team_id: &TeamId,
    out: &mut impl Write,
) -> Result<()> {
    let Some(team) = store.find_team(team_id)?.cloned() else {
        writeln!(out, "No team with id {}; nothing deleted", team_id)?;
        return Ok(());
    };
    let player_count = store.list_players_by_team(team_id)?.len();

    store.delete_team(team_id)?;
    writeln!(
        out,
        "✓ Team '{}' deleted along with {} player(s)",
        team.name, player_count
    )?;
    Ok(())
}

/// Handle `team list`
pub fn handle_team_list<S: KeyValueStorage>(
    store: &RosterStore<S>,
    as_json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let teams = store.teams()?;

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(teams)?)?;
        return Ok(());
    }

    if teams.is_empty() {
        writeln!(out, "No teams yet. Create one with `astro-stats team add <name>`.")?;
        return Ok(());
    }

    for team in teams {
        let players = store.list_players_by_team(&team.id)?.len();
        writeln!(out, "{:<28} {:>3} players  {}", team.name, players, team.id)?;
    }
    Ok(())
}
