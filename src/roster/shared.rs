//! A cloneable, lock-protected roster for concurrent callers.

use super::store::RosterStore;
use crate::cli::types::{PlayerId, TeamId};
use crate::error::Result;
use crate::storage::{
    JumpMeasurement, JumpTestData, KeyValueStorage, Player, PlayerInput, PlayerUpdate,
    RosterState, Team,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Every operation holds the lock for its whole read-modify-write, including
/// the persistence write, so cascades and merges are never interleaved.
/// Reads hand back owned copies.
pub struct SharedRoster<S: KeyValueStorage> {
    inner: Arc<Mutex<RosterStore<S>>>,
}

impl<S: KeyValueStorage> Clone for SharedRoster<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStorage> SharedRoster<S> {
    pub fn new(store: RosterStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Build a store over `storage`, hydrate it and share it.
    pub async fn open(storage: S) -> Result<Self> {
        Ok(Self::new(RosterStore::open(storage).await?))
    }

    pub async fn hydrate(&self) -> Result<()> {
        self.inner.lock().await.hydrate().await
    }

    pub async fn is_ready(&self) -> bool {
        self.inner.lock().await.is_ready()
    }

    /// Run `f` with exclusive access to the underlying store.
    pub async fn with_store<R>(&self, f: impl FnOnce(&mut RosterStore<S>) -> R) -> R {
        let mut store = self.inner.lock().await;
        f(&mut store)
    }

    pub async fn snapshot(&self) -> Result<RosterState> {
        Ok(self.inner.lock().await.state()?.clone())
    }

    pub async fn teams(&self) -> Result<Vec<Team>> {
        Ok(self.inner.lock().await.teams()?.to_vec())
    }

    pub async fn find_player(&self, player_id: &PlayerId) -> Result<Option<Player>> {
        Ok(self.inner.lock().await.find_player(player_id)?.cloned())
    }

    pub async fn list_players_by_team(&self, team_id: &TeamId) -> Result<Vec<Player>> {
        let store = self.inner.lock().await;
        Ok(store
            .list_players_by_team(team_id)?
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn create_team(&self, name: &str) -> Result<Team> {
        self.inner.lock().await.create_team(name)
    }

    pub async fn rename_team(&self, team_id: &TeamId, name: &str) -> Result<()> {
        self.inner.lock().await.rename_team(team_id, name)
    }

    pub async fn delete_team(&self, team_id: &TeamId) -> Result<()> {
        self.inner.lock().await.delete_team(team_id)
    }

    pub async fn create_player(&self, input: PlayerInput) -> Result<Player> {
        self.inner.lock().await.create_player(input)
    }

    pub async fn update_player(&self, player_id: &PlayerId, update: PlayerUpdate) -> Result<()> {
        self.inner.lock().await.update_player(player_id, update)
    }

    pub async fn delete_player(&self, player_id: &PlayerId) -> Result<()> {
        self.inner.lock().await.delete_player(player_id)
    }

    pub async fn add_jump_measurement(
        &self,
        player_id: &PlayerId,
        measurement: JumpMeasurement,
    ) -> Result<JumpTestData> {
        self.inner
            .lock()
            .await
            .add_jump_measurement(player_id, measurement)
    }
}
