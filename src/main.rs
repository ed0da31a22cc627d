//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use astro_stats::{
    cli::{AstroStats, Commands, JumpCmd, PlayerCmd, TeamCmd},
    commands::{
        jumps::{handle_jump_add, handle_jump_chart, handle_jump_list},
        open_store,
        players::{
            handle_player_add, handle_player_delete, handle_player_list, handle_player_show,
            handle_player_update,
        },
        teams::{handle_team_add, handle_team_delete, handle_team_list, handle_team_rename},
    },
    storage::{JumpMeasurement, PlayerInput, PlayerUpdate},
};
use chrono::Local;
use clap::Parser;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = AstroStats::parse();
    let backend = app.storage.backend;

    let mut store = open_store(backend, app.storage.data_dir)
        .await
        .with_context(|| format!("failed to open {} roster storage", backend))?;

    let today = Local::now().date_naive();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match app.command {
        Commands::Team { cmd } => match cmd {
            TeamCmd::Add { name } => {
                handle_team_add(&mut store, &name, &mut out)?;
            }
            TeamCmd::Rename { team_id, name } => {
                handle_team_rename(&mut store, &team_id, &name, &mut out)?
            }
            TeamCmd::Delete { team_id } => handle_team_delete(&mut store, &team_id, &mut out)?,
            TeamCmd::List { json } => handle_team_list(&store, json, &mut out)?,
        },

        Commands::Player { cmd } => match cmd {
            PlayerCmd::Add {
                team,
                first_name,
                last_name,
                dob,
                sex,
                height,
                weight,
            } => {
                handle_player_add(
                    &mut store,
                    PlayerInput {
                        first_name,
                        last_name,
                        dob,
                        sex,
                        height,
                        weight,
                        team_id: team,
                    },
                    &mut out,
                )?;
            }

            PlayerCmd::Update {
                player_id,
                first_name,
                last_name,
                dob,
                sex,
                height,
                weight,
                clear_height,
                clear_weight,
            } => {
                let update = PlayerUpdate {
                    first_name,
                    last_name,
                    dob,
                    sex,
                    height: if clear_height { Some(None) } else { height.map(Some) },
                    weight: if clear_weight { Some(None) } else { weight.map(Some) },
                };
                handle_player_update(&mut store, &player_id, update, &mut out)?
            }

            PlayerCmd::Delete { player_id } => {
                handle_player_delete(&mut store, &player_id, &mut out)?
            }
            PlayerCmd::List { team, json } => {
                handle_player_list(&store, &team, json, today, &mut out)?
            }
            PlayerCmd::Show { player_id, json } => {
                handle_player_show(&store, &player_id, json, today, &mut out)?
            }
        },

        Commands::Jump { cmd } => match cmd {
            JumpCmd::Add {
                player_id,
                flight_time,
                jump_height,
                repetition_index,
                contact_time,
            } => {
                handle_jump_add(
                    &mut store,
                    &player_id,
                    JumpMeasurement {
                        flight_time,
                        jump_height,
                        repetition_index,
                        contact_time,
                    },
                    &mut out,
                )?;
            }
            JumpCmd::List { player_id, json } => {
                handle_jump_list(&store, &player_id, json, &mut out)?
            }
            JumpCmd::Chart {
                player_id,
                metrics,
                width,
                json,
            } => handle_jump_chart(&store, &player_id, metrics, width, json, &mut out)?,
        },
    }

    Ok(())
}
