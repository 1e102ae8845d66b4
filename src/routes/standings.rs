use axum::{Json, Router, routing::post};
use axum_valid::Valid;

use crate::{
    dto::standings::{StandingsRequest, StandingsResponse},
    services::standings_service,
    state::SharedState,
};

/// Stateless standings computation over a caller-supplied snapshot.
pub fn router() -> Router<SharedState> {
    Router::new().route("/standings", post(compute_standings))
}

/// Rank a round-robin group from the supplied matches and roster.
#[utoipa::path(
    post,
    path = "/standings",
    tag = "standings",
    request_body = StandingsRequest,
    responses(
        (status = 200, description = "Group table", body = StandingsResponse),
        (status = 400, description = "Empty roster")
    )
)]
pub async fn compute_standings(
    Valid(Json(payload)): Valid<Json<StandingsRequest>>,
) -> Json<StandingsResponse> {
    Json(standings_service::compute_standings(payload))
}
