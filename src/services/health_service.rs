use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a static health payload including the live match count.
pub fn health_status(state: &SharedState) -> HealthResponse {
    let live_matches = state.matches().len();
    debug!(live_matches, "health check");
    HealthResponse::ok(live_matches)
}
