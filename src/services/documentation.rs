use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI document for Courtside Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::matches::list_matches,
        crate::routes::matches::create_match,
        crate::routes::matches::get_match,
        crate::routes::matches::delete_match,
        crate::routes::matches::start_match,
        crate::routes::matches::score_point,
        crate::routes::matches::reset_score,
        crate::routes::public::list_matches,
        crate::routes::public::get_match,
        crate::routes::public::get_standings,
        crate::routes::standings::compute_standings,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::matches::CreateMatchRequest,
            crate::dto::matches::ParticipantInput,
            crate::dto::matches::ScorePointRequest,
            crate::dto::matches::ScorePointResponse,
            crate::dto::matches::MatchSummary,
            crate::dto::matches::ParticipantSummary,
            crate::dto::matches::ScoreView,
            crate::dto::matches::VisibleMatchPhase,
            crate::dto::public::PublicMatchView,
            crate::dto::standings::StandingsRequest,
            crate::dto::standings::StandingsResponse,
            crate::dto::standings::StandingRow,
            crate::scoring::BracketType,
            crate::scoring::CompletionPolicy,
            crate::scoring::MatchRecord,
            crate::scoring::ScoreLine,
            crate::scoring::Side,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "matches", description = "Live scoring operations for court operators"),
        (name = "public", description = "Read-only views for spectators"),
        (name = "standings", description = "Round-robin standings computation"),
    )
)]
pub struct ApiDoc;
