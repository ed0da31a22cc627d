//! Roster store and the computations derived from it
//!
//! - `store`: teams, players and jump history with persistence
//! - `shared`: lock-protected handle for concurrent callers
//! - `age`: age from a date of birth
//! - `chart`: jump history as a chronological chart series
//! - `clock`: time source used to stamp jump tests

pub mod age;
pub mod chart;
pub mod clock;
pub mod shared;
pub mod store;
mod validate;


pub use age::{age_today, calculate_age, parse_date, MAX_PLAUSIBLE_AGE};
pub use chart::{chart_series, render_bar_chart, ChartPoint};
pub use clock::{Clock, FixedClock, SystemClock};
pub use shared::SharedRoster;
pub use store::{ListenerId, RosterStore, STORAGE_KEY};
