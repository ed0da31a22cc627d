//! Type-safe wrappers and enums for roster data.

pub mod ids;
pub mod metric;
pub mod sex;

pub use ids::{JumpId, PlayerId, TeamId};
pub use metric::{JumpMetric, StorageBackend};
pub use sex::Sex;
