//! Astro Stats Library
//!
//! A team roster and performance tracker: teams, the players on them, and the
//! jump tests recorded for each player, persisted locally.
//!
//! ## Features
//!
//! - **Roster Store**: Create, rename and delete teams; deleting a team removes its players
//! - **Player Records**: Date of birth, sex, height and weight, with age derived on read
//! - **Jump Tests**: Flight time, jump height, repetition index and contact time, newest first
//! - **Charts**: Jump history as a chronological series and text bar chart
//! - **Local Persistence**: One JSON document in a file, a SQLite table, or memory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use astro_stats::{roster::RosterStore, storage::*, Sex};
//!
//! # async fn example() -> astro_stats::Result<()> {
//! let mut store = RosterStore::open(FileStorage::new("./data")).await?;
//!
//! let rockets = store.create_team("Rockets")?;
//! let leo = store.create_player(PlayerInput {
//!     first_name: "Leo".to_string(),
//!     last_name: "M".to_string(),
//!     dob: "2005-06-24".to_string(),
//!     sex: Sex::Male,
//!     height: Some(170.0),
//!     weight: Some(68.0),
//!     team_id: rockets.id.clone(),
//! })?;
//! store.add_jump_measurement(
//!     &leo.id,
//!     JumpMeasurement {
//!         flight_time: 0.45,
//!         jump_height: 35.2,
//!         repetition_index: 1.0,
//!         contact_time: 0.22,
//!     },
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a data directory instead of the platform default:
//! ```bash
//! export ASTRO_STATS_DATA_DIR=~/roster
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod roster;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{JumpId, JumpMetric, PlayerId, Sex, StorageBackend, TeamId};
pub use error::{Result, RosterError};
pub use roster::{RosterStore, SharedRoster, STORAGE_KEY};
pub use storage::{JumpTestData, Player, RosterState, Team};

pub const DATA_DIR_ENV_VAR: &str = "ASTRO_STATS_DATA_DIR";
