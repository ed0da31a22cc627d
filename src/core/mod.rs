//! Core utilities for the astro-stats CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `paths`: Data directory resolution and file helpers

pub mod paths;

// Re-export commonly used items for convenience
pub use paths::{default_data_dir, read_optional, remove_if_exists, sqlite_path, write_string};
