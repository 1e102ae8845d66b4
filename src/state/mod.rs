//! Shared application state and the live match aggregate.

/// Live match aggregate.
pub mod live_match;
/// Match lifecycle state machine.
pub mod state_machine;

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::{config::AppConfig, error::ServiceError};

pub use self::live_match::{LiveMatch, Participant};
pub use self::state_machine::{InvalidTransition, MatchEvent, MatchPhase, Snapshot};

/// Shared handle passed to every route and service.
pub type SharedState = Arc<AppState>;

/// Central application state holding the live matches currently being scored.
///
/// Nothing is persisted: matches live as long as the process does.
pub struct AppState {
    config: AppConfig,
    matches: DashMap<Uuid, LiveMatch>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            config,
            matches: DashMap::new(),
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Registry of live matches keyed by their identifier.
    pub fn matches(&self) -> &DashMap<Uuid, LiveMatch> {
        &self.matches
    }

    /// Run `f` against a borrow of the match `id`.
    pub fn read_match<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&LiveMatch) -> T,
    ) -> Result<T, ServiceError> {
        let entry = self.matches.get(&id).ok_or_else(|| not_found(id))?;
        Ok(f(entry.value()))
    }

    /// Mutate the match `id` under its entry lock.
    ///
    /// The closure must not await or touch other matches.
    pub fn with_match_mut<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut LiveMatch) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let mut entry = self.matches.get_mut(&id).ok_or_else(|| not_found(id))?;
        f(entry.value_mut())
    }

    /// Clone every live match, ordered by creation time then id.
    pub fn match_snapshot(&self) -> Vec<LiveMatch> {
        let mut matches: Vec<LiveMatch> = self
            .matches
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        matches
    }
}

fn not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("match `{id}` not found"))
}
