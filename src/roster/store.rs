//! The roster store: canonical teams and players, their mutations, and
//! persistence of the whole state as one JSON document.

use super::clock::{Clock, SystemClock};
use super::validate;
use crate::cli::types::{JumpId, PlayerId, TeamId};
use crate::error::{Result, RosterError};
use crate::storage::{
    JumpMeasurement, JumpTestData, KeyValueStorage, Player, PlayerInput, PlayerUpdate,
    RosterState, Team,
};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Storage key the roster document lives under.
pub const STORAGE_KEY: &str = "astro-stats-storage";

/// Handle returned by [`RosterStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&RosterState) + Send + Sync>;

/// In-memory roster backed by durable key-value storage.
///
/// Constructed empty and not ready; [`hydrate`](Self::hydrate) loads the
/// persisted document once. Until then every read and write fails with
/// [`RosterError::NotReady`] rather than reporting an empty roster.
///
/// Every successful mutation notifies listeners and rewrites the whole
/// document. A failed write is returned to the caller but the in-memory
/// change stays.
pub struct RosterStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    state: RosterState,
    ready: bool,
    clock: Box<dyn Clock>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<S: KeyValueStorage> RosterStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: STORAGE_KEY.to_string(),
            state: RosterState::default(),
            ready: false,
            clock: Box::new(SystemClock),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Store under a different storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Use `clock` to timestamp jump tests.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Construct and hydrate in one step.
    pub async fn open(storage: S) -> Result<Self> {
        let mut store = Self::new(storage);
        store.hydrate().await?;
        Ok(store)
    }

    /// Load the persisted document and mark the store ready.
    ///
    /// Runs once; later calls are no-ops. A missing document starts an empty
    /// roster. A corrupt one is an error and the store stays not ready.
    pub async fn hydrate(&mut self) -> Result<()> {
        if self.ready {
            debug!(key = %self.key, "roster already hydrated");
            return Ok(());
        }

        let state = match self.storage.get_item(&self.key)? {
            Some(doc) => decode_document(&doc)?,
            None => {
                debug!(key = %self.key, "no stored roster, starting empty");
                RosterState::default()
            }
        };

        info!(
            teams = state.teams.len(),
            players = state.players.len(),
            "roster hydrated"
        );
        self.state = state;
        self.ready = true;
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // --- Listeners ---

    /// Register `listener`; it receives the new state after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&RosterState) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    // --- Reads ---

    pub fn state(&self) -> Result<&RosterState> {
        self.ensure_ready()?;
        Ok(&self.state)
    }

    pub fn teams(&self) -> Result<&[Team]> {
        self.ensure_ready()?;
        Ok(&self.state.teams)
    }

    pub fn players(&self) -> Result<&[Player]> {
        self.ensure_ready()?;
        Ok(&self.state.players)
    }

    pub fn find_team(&self, team_id: &TeamId) -> Result<Option<&Team>> {
        self.ensure_ready()?;
        Ok(self.state.teams.iter().find(|t| &t.id == team_id))
    }

    pub fn find_player(&self, player_id: &PlayerId) -> Result<Option<&Player>> {
        self.ensure_ready()?;
        Ok(self.state.players.iter().find(|p| &p.id == player_id))
    }

    /// Players of a team in insertion order.
    pub fn list_players_by_team(&self, team_id: &TeamId) -> Result<Vec<&Player>> {
        self.ensure_ready()?;
        Ok(self
            .state
            .players
            .iter()
            .filter(|p| &p.team_id == team_id)
            .collect())
    }

    /// A player's jump history, most recent first. Empty for unknown players.
    pub fn jump_data_for_player(&self, player_id: &PlayerId) -> Result<&[JumpTestData]> {
        Ok(self
            .find_player(player_id)?
            .map(|p| p.jump_data.as_slice())
            .unwrap_or_default())
    }

    pub fn team_of_player(&self, player_id: &PlayerId) -> Result<Option<&Team>> {
        match self.find_player(player_id)? {
            Some(player) => self.find_team(&player.team_id),
            None => Ok(None),
        }
    }

    // --- Teams ---

    pub fn create_team(&mut self, name: &str) -> Result<Team> {
        self.ensure_ready()?;
        let name = validate::required_text(name, "Team name")?;

        let team = Team {
            id: TeamId::generate(),
            name,
        };
        self.state.teams.push(team.clone());
        info!(team_id = %team.id, name = %team.name, "team created");

        self.commit()?;
        Ok(team)
    }

    /// Rename in place. Unknown ids are a no-op.
    pub fn rename_team(&mut self, team_id: &TeamId, name: &str) -> Result<()> {
        self.ensure_ready()?;
        let Some(index) = self.state.teams.iter().position(|t| &t.id == team_id) else {
            debug!(team_id = %team_id, "rename of unknown team ignored");
            return Ok(());
        };
        let name = validate::required_text(name, "Team name")?;

        self.state.teams[index].name = name;
        self.commit()
    }

    /// Remove a team and every player on it. Unknown ids are a no-op.
    pub fn delete_team(&mut self, team_id: &TeamId) -> Result<()> {
        self.ensure_ready()?;
        let teams_before = self.state.teams.len();
        let players_before = self.state.players.len();

        self.state.teams.retain(|t| &t.id != team_id);
        self.state.players.retain(|p| &p.team_id != team_id);

        let removed_players = players_before - self.state.players.len();
        if teams_before == self.state.teams.len() && removed_players == 0 {
            debug!(team_id = %team_id, "delete of unknown team ignored");
            return Ok(());
        }

        info!(team_id = %team_id, removed_players, "team deleted");
        self.commit()
    }

    // --- Players ---

    pub fn create_player(&mut self, input: PlayerInput) -> Result<Player> {
        self.ensure_ready()?;
        if !self.state.teams.iter().any(|t| t.id == input.team_id) {
            return Err(RosterError::validation(format!(
                "Team does not exist: {}",
                input.team_id
            )));
        }
        let input = validate::player_input(input)?;

        let player = Player {
            id: PlayerId::generate(),
            first_name: input.first_name,
            last_name: input.last_name,
            dob: input.dob,
            sex: input.sex,
            height: input.height,
            weight: input.weight,
            team_id: input.team_id,
            jump_data: Vec::new(),
        };
        self.state.players.push(player.clone());
        info!(player_id = %player.id, team_id = %player.team_id, "player created");

        self.commit()?;
        Ok(player)
    }

    /// Merge the provided fields into a player. Unknown ids are a no-op.
    pub fn update_player(&mut self, player_id: &PlayerId, update: PlayerUpdate) -> Result<()> {
        self.ensure_ready()?;
        let Some(index) = self.player_index(player_id) else {
            debug!(player_id = %player_id, "update of unknown player ignored");
            return Ok(());
        };
        let update = validate::player_update(update)?;
        if update.is_empty() {
            return Ok(());
        }

        let player = &mut self.state.players[index];
        if let Some(first_name) = update.first_name {
            player.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            player.last_name = last_name;
        }
        if let Some(dob) = update.dob {
            player.dob = dob;
        }
        if let Some(sex) = update.sex {
            player.sex = sex;
        }
        if let Some(height) = update.height {
            player.height = height;
        }
        if let Some(weight) = update.weight {
            player.weight = weight;
        }

        self.commit()
    }

    /// Remove a player. Unknown ids are a no-op.
    pub fn delete_player(&mut self, player_id: &PlayerId) -> Result<()> {
        self.ensure_ready()?;
        let Some(index) = self.player_index(player_id) else {
            debug!(player_id = %player_id, "delete of unknown player ignored");
            return Ok(());
        };

        self.state.players.remove(index);
        info!(player_id = %player_id, "player deleted");
        self.commit()
    }

    // --- Jump data ---

    /// Record a jump test stamped with the current time. The player's history
    /// stays sorted most recent first.
    pub fn add_jump_measurement(
        &mut self,
        player_id: &PlayerId,
        measurement: JumpMeasurement,
    ) -> Result<JumpTestData> {
        self.ensure_ready()?;
        let index = self
            .player_index(player_id)
            .ok_or_else(|| RosterError::NotFound {
                entity: "Player",
                id: player_id.to_string(),
            })?;
        validate::measurement(&measurement)?;

        let entry = JumpTestData {
            id: JumpId::generate(),
            date: self.clock.now(),
            flight_time: measurement.flight_time,
            jump_height: measurement.jump_height,
            repetition_index: measurement.repetition_index,
            contact_time: measurement.contact_time,
        };

        let jumps = &mut self.state.players[index].jump_data;
        jumps.push(entry.clone());
        jumps.sort_by(|a, b| b.date.cmp(&a.date));
        debug!(player_id = %player_id, jump_id = %entry.id, total = jumps.len(), "jump test recorded");

        self.commit()?;
        Ok(entry)
    }

    // --- Internals ---

    fn ensure_ready(&self) -> Result<()> {
        if self.ready {
            Ok(())
        } else {
            Err(RosterError::NotReady)
        }
    }

    fn player_index(&self, player_id: &PlayerId) -> Option<usize> {
        self.state.players.iter().position(|p| &p.id == player_id)
    }

    fn commit(&mut self) -> Result<()> {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let doc = serde_json::to_string(&self.state)?;
        if let Err(e) = self.storage.set_item(&self.key, &doc) {
            warn!(key = %self.key, error = %e, "failed to persist roster");
            return Err(e);
        }
        Ok(())
    }
}

/// Parse a stored roster document.
///
/// Accepts the bare `{teams, players}` layout and the `{state, version}`
/// envelope older builds wrote.
fn decode_document(doc: &str) -> Result<RosterState> {
    let value: Value = serde_json::from_str(doc)?;
    let value = match value {
        Value::Object(mut map) if !map.contains_key("teams") && !map.contains_key("players") => {
            match map.remove("state") {
                Some(inner) => inner,
                None => Value::Object(map),
            }
        }
        other => other,
    };
    Ok(serde_json::from_value(value)?)
}
