use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::{
        public::{PublicMatchView, StandingsQuery},
        standings::StandingsResponse,
    },
    error::AppError,
    services::{public_service, standings_service},
    state::SharedState,
};

/// Public read-only endpoints polled by spectator screens.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/public/matches", get(list_matches))
        .route("/public/matches/{id}", get(get_match))
        .route("/public/standings", get(get_standings))
}

#[utoipa::path(
    get,
    path = "/public/matches",
    operation_id = "public_list_matches",
    tag = "public",
    responses((status = 200, description = "Live matches", body = [PublicMatchView]))
)]
/// Return every live match as seen by spectators.
pub async fn list_matches(State(state): State<SharedState>) -> Json<Vec<PublicMatchView>> {
    Json(public_service::list_public_matches(&state))
}

#[utoipa::path(
    get,
    path = "/public/matches/{id}",
    operation_id = "public_get_match",
    tag = "public",
    params(("id" = String, Path, description = "Identifier of the match")),
    responses(
        (status = 200, description = "Live match", body = PublicMatchView),
        (status = 404, description = "Unknown match")
    )
)]
/// Return the live score of one match.
pub async fn get_match(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PublicMatchView>, AppError> {
    Ok(Json(public_service::get_public_match(&state, id)?))
}

#[utoipa::path(
    get,
    path = "/public/standings",
    operation_id = "public_get_standings",
    tag = "public",
    params(StandingsQuery),
    responses((status = 200, description = "Group table", body = StandingsResponse))
)]
/// Return the group table built from the live matches of a bracket.
pub async fn get_standings(
    State(state): State<SharedState>,
    Query(query): Query<StandingsQuery>,
) -> Json<StandingsResponse> {
    Json(standings_service::live_group_standings(
        &state,
        query.bracket_type,
    ))
}
