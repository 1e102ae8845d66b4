/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Operator-driven live scoring of matches.
pub mod live_scoring_service;
/// Public service for read-only match information.
pub mod public_service;
/// Round-robin standings over supplied or live matches.
pub mod standings_service;
