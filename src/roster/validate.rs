//! Input checks shared by the store's mutations.

use super::age::parse_date;
use crate::cli::types::Sex;
use crate::error::{Result, RosterError};
use crate::storage::{JumpMeasurement, PlayerInput, PlayerUpdate};

/// Trimmed, non-empty text.
pub(crate) fn required_text(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RosterError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn date_of_birth(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if parse_date(trimmed).is_none() {
        return Err(RosterError::validation(format!(
            "Date of birth is not a valid date: {:?}",
            value
        )));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn sex(value: Sex) -> Result<Sex> {
    if !value.is_set() {
        return Err(RosterError::validation(
            "Sex is required (Male, Female or Other)",
        ));
    }
    Ok(value)
}

/// Height/weight: absent, or a finite positive number.
pub(crate) fn body_measure(value: Option<f64>, field: &str) -> Result<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(RosterError::validation(format!(
            "{} must be a positive number",
            field
        ))),
        other => Ok(other),
    }
}

pub(crate) fn measurement(m: &JumpMeasurement) -> Result<()> {
    let fields = [
        ("Flight time", m.flight_time),
        ("Jump height", m.jump_height),
        ("Repetition index", m.repetition_index),
        ("Contact time", m.contact_time),
    ];
    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(RosterError::validation(format!(
                "{} must be a non-negative number",
                field
            )));
        }
    }
    Ok(())
}

/// Normalized copy of a new player's fields. Team existence is checked by the
/// store.
pub(crate) fn player_input(input: PlayerInput) -> Result<PlayerInput> {
    Ok(PlayerInput {
        first_name: required_text(&input.first_name, "First name")?,
        last_name: required_text(&input.last_name, "Last name")?,
        dob: date_of_birth(&input.dob)?,
        sex: sex(input.sex)?,
        height: body_measure(input.height, "Height")?,
        weight: body_measure(input.weight, "Weight")?,
        team_id: input.team_id,
    })
}

/// Normalized copy of an update; only the provided fields are checked.
pub(crate) fn player_update(update: PlayerUpdate) -> Result<PlayerUpdate> {
    Ok(PlayerUpdate {
        first_name: update
            .first_name
            .map(|v| required_text(&v, "First name"))
            .transpose()?,
        last_name: update
            .last_name
            .map(|v| required_text(&v, "Last name"))
            .transpose()?,
        dob: update.dob.map(|v| date_of_birth(&v)).transpose()?,
        sex: update.sex.map(sex).transpose()?,
        height: update
            .height
            .map(|v| body_measure(v, "Height"))
            .transpose()?,
        weight: update
            .weight
            .map(|v| body_measure(v, "Weight"))
            .transpose()?,
    })
}
