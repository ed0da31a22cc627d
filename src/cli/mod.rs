//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{JumpMetric, PlayerId, Sex, StorageBackend, TeamId};

/// Storage options shared by every command
#[derive(Debug, Args)]
pub struct StorageArgs {
    /// Data directory (or set `ASTRO_STATS_DATA_DIR` env var).
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage backend: file | sqlite | memory
    #[clap(long, global = true, default_value_t = StorageBackend::default())]
    pub backend: StorageBackend,
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Create a team
    Add {
        /// Team name.
        name: String,
    },

    /// Rename a team
    Rename {
        team_id: TeamId,

        /// New name.
        name: String,
    },

    /// Delete a team together with all of its players
    Delete { team_id: TeamId },

    /// List all teams
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Add a player to a team
    Add {
        /// Team the player belongs to.
        #[clap(long, short)]
        team: TeamId,

        #[clap(long)]
        first_name: String,

        #[clap(long)]
        last_name: String,

        /// Date of birth (YYYY-MM-DD).
        #[clap(long)]
        dob: String,

        /// Male | Female | Other
        #[clap(long)]
        sex: Sex,

        /// Height in cm.
        #[clap(long)]
        height: Option<f64>,

        /// Weight in kg.
        #[clap(long)]
        weight: Option<f64>,
    },

    /// Update a player's details; only the given fields change
    Update {
        player_id: PlayerId,

        #[clap(long)]
        first_name: Option<String>,

        #[clap(long)]
        last_name: Option<String>,

        /// Date of birth (YYYY-MM-DD).
        #[clap(long)]
        dob: Option<String>,

        /// Male | Female | Other
        #[clap(long)]
        sex: Option<Sex>,

        /// Height in cm.
        #[clap(long, conflicts_with = "clear_height")]
        height: Option<f64>,

        /// Weight in kg.
        #[clap(long, conflicts_with = "clear_weight")]
        weight: Option<f64>,

        /// Remove the recorded height.
        #[clap(long)]
        clear_height: bool,

        /// Remove the recorded weight.
        #[clap(long)]
        clear_weight: bool,
    },

    /// Delete a player
    Delete { player_id: PlayerId },

    /// List the players of a team
    List {
        #[clap(long, short)]
        team: TeamId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a player's details
    Show {
        player_id: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum JumpCmd {
    /// Record a jump test, stamped with the current time
    Add {
        player_id: PlayerId,

        /// Flight time (s).
        #[clap(long)]
        flight_time: f64,

        /// Jump height (cm).
        #[clap(long)]
        jump_height: f64,

        #[clap(long)]
        repetition_index: f64,

        /// Contact time (s).
        #[clap(long)]
        contact_time: f64,
    },

    /// List a player's jump tests, most recent first
    List {
        player_id: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Bar chart of a player's jump history, oldest first
    Chart {
        player_id: PlayerId,

        /// Metric to chart (repeatable): `-m jump-height -m flight-time`. Defaults to all.
        #[clap(short = 'm', long = "metric")]
        metrics: Option<Vec<JumpMetric>>,

        /// Width of the longest bar.
        #[clap(long, default_value_t = 40)]
        width: usize,

        /// Output the chart series as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "astro-stats", about = "Team roster and jump test tracker")]
pub struct AstroStats {
    #[clap(flatten)]
    pub storage: StorageArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage teams
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Manage players
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Record and view jump tests
    Jump {
        #[clap(subcommand)]
        cmd: JumpCmd,
    },
}
