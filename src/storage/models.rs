//! Data models for the storage layer

use crate::cli::types::{JumpId, PlayerId, Sex, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named collection of players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// One timestamped set of jump test measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpTestData {
    pub id: JumpId,
    pub date: DateTime<Utc>,
    pub flight_time: f64,
    pub jump_height: f64,
    pub repetition_index: f64,
    pub contact_time: f64,
}

/// A tracked athlete belonging to exactly one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    /// Date of birth as stored (`YYYY-MM-DD` or an RFC 3339 timestamp).
    pub dob: String,
    #[serde(default)]
    pub sex: Sex,
    /// Height in cm.
    #[serde(default, with = "optional_number")]
    pub height: Option<f64>,
    /// Weight in kg.
    #[serde(default, with = "optional_number")]
    pub weight: Option<f64>,
    pub team_id: TeamId,
    /// Most recent first.
    #[serde(default)]
    pub jump_data: Vec<JumpTestData>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The whole persisted document: every team and player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterState {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
}

/// Fields supplied when creating a player. The store assigns the id and
/// starts with an empty jump history.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInput {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub sex: Sex,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team_id: TeamId,
}

/// Partial update of a player's editable fields. `None` leaves a field as is;
/// `Some(None)` clears height or weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<String>,
    pub sex: Option<Sex>,
    pub height: Option<Option<f64>>,
    pub weight: Option<Option<f64>>,
}

impl PlayerUpdate {
    pub fn is_empty(&self) -> bool {
        self == &PlayerUpdate::default()
    }
}

/// The four values captured by one jump test.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpMeasurement {
    pub flight_time: f64,
    pub jump_height: f64,
    pub repetition_index: f64,
    pub contact_time: f64,
}

/// Serde adapter for `number | ""` fields.
///
/// Reads a number, `""`, `null` or a missing key (the last three as `None`)
/// and writes `None` back as `""`.
pub(crate) mod optional_number {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(n) => serializer.serialize_f64(*n),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptionalNumber;

        impl<'de> Visitor<'de> for OptionalNumber {
            type Value = Option<f64>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number, an empty string or null")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(Some(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Some(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Some(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(OptionalNumber)
    }
}
