//! Player sex values.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex recorded for a player.
///
/// `Unset` is the stored empty value (`""`) for records that never had one
/// chosen; new players must pick one of the other three.
///
/// # Examples
///
/// ```rust
/// use astro_stats::Sex;
///
/// let sex: Sex = "female".parse().unwrap();
/// assert_eq!(sex, Sex::Female);
/// assert_eq!(Sex::Unset.to_string(), "");
/// assert!("robot".parse::<Sex>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl Sex {
    /// Whether this is one of the values a new player may be created with.
    pub fn is_set(&self) -> bool {
        !matches!(self, Sex::Unset)
    }

    /// Display label, with `N/A` standing in for the unset value.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
            Sex::Unset => "N/A",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
            Sex::Unset => "",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Sex {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            "other" | "o" => Ok(Sex::Other),
            "" => Ok(Sex::Unset),
            other => Err(RosterError::validation(format!(
                "Unknown sex '{}' (expected Male, Female or Other)",
                other
            ))),
        }
    }
}
