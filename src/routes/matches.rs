use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::matches::{CreateMatchRequest, MatchSummary, ScorePointRequest, ScorePointResponse},
    error::AppError,
    services::live_scoring_service,
    state::SharedState,
};

/// Operator endpoints driving live scoring.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/matches", get(list_matches).post(create_match))
        .route("/matches/{id}", get(get_match).delete(delete_match))
        .route("/matches/{id}/start", post(start_match))
        .route("/matches/{id}/point", post(score_point))
        .route("/matches/{id}/reset", post(reset_score))
}

/// List every live match held in memory.
#[utoipa::path(
    get,
    path = "/matches",
    tag = "matches",
    responses((status = 200, description = "Live matches", body = [MatchSummary]))
)]
pub async fn list_matches(State(state): State<SharedState>) -> Json<Vec<MatchSummary>> {
    Json(live_scoring_service::list_matches(&state))
}

/// Open a new live match at 0-0.
#[utoipa::path(
    post,
    path = "/matches",
    tag = "matches",
    request_body = CreateMatchRequest,
    responses(
        (status = 200, description = "Match created", body = MatchSummary),
        (status = 400, description = "Invalid participants or ruleset")
    )
)]
pub async fn create_match(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<CreateMatchRequest>>,
) -> Result<Json<MatchSummary>, AppError> {
    Ok(Json(live_scoring_service::create_match(&state, payload)?))
}

/// Fetch one live match.
#[utoipa::path(
    get,
    path = "/matches/{id}",
    tag = "matches",
    params(("id" = String, Path, description = "Identifier of the match")),
    responses(
        (status = 200, description = "Match", body = MatchSummary),
        (status = 404, description = "Unknown match")
    )
)]
pub async fn get_match(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchSummary>, AppError> {
    Ok(Json(live_scoring_service::get_match(&state, id)?))
}

/// Remove a live match from memory.
#[utoipa::path(
    delete,
    path = "/matches/{id}",
    tag = "matches",
    params(("id" = String, Path, description = "Identifier of the match to delete")),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 404, description = "Unknown match")
    )
)]
pub async fn delete_match(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    live_scoring_service::delete_match(&state, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Open scoring on a scheduled match.
#[utoipa::path(
    post,
    path = "/matches/{id}/start",
    tag = "matches",
    params(("id" = String, Path, description = "Identifier of the match")),
    responses(
        (status = 200, description = "Match started", body = MatchSummary),
        (status = 409, description = "Match already started")
    )
)]
pub async fn start_match(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchSummary>, AppError> {
    Ok(Json(live_scoring_service::start_match(&state, id)?))
}

/// Award one point to a side.
#[utoipa::path(
    post,
    path = "/matches/{id}/point",
    tag = "matches",
    params(("id" = String, Path, description = "Identifier of the match")),
    request_body = ScorePointRequest,
    responses(
        (status = 200, description = "Point recorded", body = ScorePointResponse),
        (status = 409, description = "Match already completed")
    )
)]
pub async fn score_point(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ScorePointRequest>,
) -> Result<Json<ScorePointResponse>, AppError> {
    Ok(Json(live_scoring_service::score_point_for(
        &state,
        id,
        payload.side,
    )?))
}

/// Restart scoring from 0-0.
#[utoipa::path(
    post,
    path = "/matches/{id}/reset",
    tag = "matches",
    params(("id" = String, Path, description = "Identifier of the match")),
    responses(
        (status = 200, description = "Score reset", body = MatchSummary),
        (status = 409, description = "Match has not started")
    )
)]
pub async fn reset_score(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchSummary>, AppError> {
    Ok(Json(live_scoring_service::reset_match_score(&state, id)?))
}
