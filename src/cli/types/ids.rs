//! ID types for teams, players and jump tests.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap an existing id string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random (v4 UUID) id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// First eight characters followed by `...`, as shown on detail pages.
            pub fn short(&self) -> String {
                let prefix: String = self.0.chars().take(8).collect();
                format!("{}...", prefix)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Type-safe wrapper for team ids.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use astro_stats::TeamId;
    ///
    /// let id = TeamId::new("rockets");
    /// assert_eq!(id.as_str(), "rockets");
    /// assert_ne!(TeamId::generate(), TeamId::generate());
    /// ```
    TeamId
);

string_id!(
    /// Type-safe wrapper for player ids.
    PlayerId
);

string_id!(
    /// Type-safe wrapper for jump test entry ids.
    JumpId
);
