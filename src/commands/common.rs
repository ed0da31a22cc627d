//! Formatting helpers shared across commands.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    roster::{calculate_age, chart::format_value, parse_date},
    storage::{Player, Team},
};

const NOT_AVAILABLE: &str = "N/A";

/// What the player detail view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: String,
    pub short_id: String,
    pub name: String,
    pub team: String,
    pub date_of_birth: String,
    pub age: Option<u32>,
    pub sex: String,
    pub height: String,
    pub weight: String,
    pub jump_tests: usize,
}

impl PlayerSummary {
    pub fn new(player: &Player, team: Option<&Team>, today: NaiveDate) -> Self {
        Self {
            id: player.id.to_string(),
            short_id: player.id.short(),
            name: player.full_name(),
            team: team
                .map(|t| t.name.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            date_of_birth: format_dob(&player.dob),
            age: calculate_age(Some(&player.dob), today),
            sex: player.sex.label().to_string(),
            height: format_optional(player.height, "cm"),
            weight: format_optional(player.weight, "kg"),
            jump_tests: player.jump_data.len(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format!("Team:          {}", self.team),
            format!(
                "Date of Birth: {} ({} years)",
                self.date_of_birth,
                format_age(self.age)
            ),
            format!("Sex:           {}", self.sex),
            format!("Height:        {}", self.height),
            format!("Weight:        {}", self.weight),
            format!("Jump tests:    {}", self.jump_tests),
            format!("Player ID:     {}", self.short_id),
        ]
    }
}

/// `YYYY-MM-DD`, or `N/A` when the stored value does not parse.
pub fn format_dob(dob: &str) -> String {
    parse_date(dob)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_age(age: Option<u32>) -> String {
    age.map(|a| a.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `170 cm`, or `N/A` when absent.
pub fn format_optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{} {}", format_value(v), unit),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// One line of the team roster view.
pub fn player_row(player: &Player, today: NaiveDate) -> String {
    format!(
        "{:<28} {:>3} yrs  {:<6}  {:>3} tests  {}",
        player.full_name(),
        format_age(calculate_age(Some(&player.dob), today)),
        player.sex.label(),
        player.jump_data.len(),
        player.id
    )
}
