//! Service helpers that expose read-only public projections of live matches.

use uuid::Uuid;

use crate::{dto::public::PublicMatchView, error::ServiceError, state::SharedState};

/// Return the spectator view of one live match.
pub fn get_public_match(state: &SharedState, id: Uuid) -> Result<PublicMatchView, ServiceError> {
    state.read_match(id, |live| PublicMatchView::from(live))
}

/// Return the spectator view of every live match, oldest first.
pub fn list_public_matches(state: &SharedState) -> Vec<PublicMatchView> {
    state
        .match_snapshot()
        .iter()
        .map(PublicMatchView::from)
        .collect()
}
