use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI document.
pub mod docs;
/// Health check.
pub mod health;
/// Operator scoring endpoints.
pub mod matches;
/// Spectator endpoints.
pub mod public;
/// Standings over a supplied snapshot.
pub mod standings;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(matches::router())
        .merge(public::router())
        .merge(standings::router());

    api_router.merge(docs::router()).with_state(state)
}
