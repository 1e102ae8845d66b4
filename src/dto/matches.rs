//! DTO definitions for the operator-facing live scoring API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::{
        format_system_time,
        validation::{validate_display_name, validate_participant_id},
    },
    scoring::{BracketType, CompletionPolicy, MatchScore, Side, points_display},
    state::{LiveMatch, MatchPhase, Participant},
};

/// Incoming participant definition for a new match.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ParticipantInput {
    /// Team or player id from the tournament backend.
    pub id: String,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Validate for ParticipantInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_participant_id(&self.id) {
            errors.add("id", e);
        }

        if let Some(ref name) = self.name {
            if let Err(e) = validate_display_name(name) {
                errors.add("name", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<ParticipantInput> for Participant {
    fn from(value: ParticipantInput) -> Self {
        Self {
            id: value.id,
            name: value.name.map(|name| name.trim().to_string()),
        }
    }
}

/// Payload used to open a live match for scoring.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateMatchRequest {
    /// Side A.
    #[validate(nested)]
    pub participant_a: ParticipantInput,
    /// Side B.
    #[validate(nested)]
    pub participant_b: ParticipantInput,
    /// Round number within the bracket.
    #[serde(default)]
    pub round: Option<u32>,
    /// Bracket, also used as the round-robin group marker.
    #[serde(default)]
    pub bracket_type: Option<BracketType>,
    /// Court label.
    #[serde(default)]
    #[validate(length(min = 1, max = 40))]
    pub court: Option<String>,
    /// Scheduled start (RFC 3339), stored as given.
    #[serde(default)]
    pub scheduled_at: Option<String>,
    /// Completion rule; the configured default applies when omitted.
    #[serde(default)]
    pub ruleset: Option<CompletionPolicy>,
}

/// Request awarding one point to a side.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScorePointRequest {
    /// Side that won the point.
    pub side: Side,
}

/// Score with display labels for the current game.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ScoreView {
    /// Games won by side A.
    pub games_a: u32,
    /// Games won by side B.
    pub games_b: u32,
    /// Raw points of side A in the current game.
    pub points_a: u8,
    /// Raw points of side B in the current game.
    pub points_b: u8,
    /// Label for `points_a`.
    pub points_a_display: String,
    /// Label for `points_b`.
    pub points_b_display: String,
}

impl From<MatchScore> for ScoreView {
    fn from(score: MatchScore) -> Self {
        Self {
            games_a: score.games_a,
            games_b: score.games_b,
            points_a: score.points_a,
            points_b: score.points_b,
            points_a_display: points_display(score.points_a),
            points_b_display: points_display(score.points_b),
        }
    }
}

/// Publicly visible match phase.
#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisibleMatchPhase {
    /// Waiting for the first point.
    Scheduled,
    /// Points are being recorded.
    InProgress,
    /// A winner has been declared.
    Completed,
}

impl From<MatchPhase> for VisibleMatchPhase {
    fn from(value: MatchPhase) -> Self {
        match value {
            MatchPhase::Scheduled => VisibleMatchPhase::Scheduled,
            MatchPhase::InProgress => VisibleMatchPhase::InProgress,
            MatchPhase::Completed { .. } => VisibleMatchPhase::Completed,
        }
    }
}

/// Participant as shown to the operator.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ParticipantSummary {
    /// Participant id.
    pub id: String,
    /// Display name, when supplied.
    pub name: Option<String>,
}

impl From<&Participant> for ParticipantSummary {
    fn from(value: &Participant) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
        }
    }
}

/// Full projection of a live match for the scoring operator.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct MatchSummary {
    /// Match id.
    pub id: Uuid,
    /// Side A.
    pub participant_a: ParticipantSummary,
    /// Side B.
    pub participant_b: ParticipantSummary,
    /// Round number.
    pub round: Option<u32>,
    /// Bracket or group marker.
    pub bracket_type: Option<BracketType>,
    /// Court label.
    pub court: Option<String>,
    /// Scheduled start as supplied.
    pub scheduled_at: Option<String>,
    /// Completion rule in force.
    pub ruleset: CompletionPolicy,
    /// Lifecycle phase.
    pub phase: VisibleMatchPhase,
    /// Current score.
    pub score: ScoreView,
    /// Winning side once completed.
    pub winner: Option<Side>,
    /// Winning participant id once completed.
    pub winner_id: Option<String>,
    /// Changes on every point and phase change; pollers compare it to skip redraws.
    pub version: u64,
    /// Creation time (RFC 3339).
    pub created_at: String,
    /// Last change (RFC 3339).
    pub updated_at: String,
}

impl From<&LiveMatch> for MatchSummary {
    fn from(live: &LiveMatch) -> Self {
        let snapshot = live.machine.snapshot();
        let winner = live.winner();
        Self {
            id: live.id,
            participant_a: (&live.participant_a).into(),
            participant_b: (&live.participant_b).into(),
            round: live.round,
            bracket_type: live.bracket_type,
            court: live.court.clone(),
            scheduled_at: live.scheduled_at.clone(),
            ruleset: live.ruleset,
            phase: snapshot.phase.into(),
            score: live.score.into(),
            winner,
            winner_id: winner.map(|side| live.participant(side).id.clone()),
            version: snapshot.version,
            created_at: format_system_time(live.created_at),
            updated_at: format_system_time(live.updated_at),
        }
    }
}

/// Result of a scored point.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScorePointResponse {
    /// Side that took the game with this point, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_won_by: Option<Side>,
    /// Whether this point ended the match.
    pub match_completed: bool,
    /// Match after the point.
    #[serde(rename = "match")]
    pub live_match: MatchSummary,
}
