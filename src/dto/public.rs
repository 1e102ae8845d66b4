//! Read-only payloads for spectator screens.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    dto::matches::{ScoreView, VisibleMatchPhase},
    scoring::{BracketType, Side, standings::placeholder_name},
    state::{LiveMatch, Participant},
};

/// Read-only view of a live match for spectators.
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicMatchView {
    /// Match id.
    pub id: Uuid,
    /// Name of side A, or its placeholder.
    pub participant_a_name: String,
    /// Name of side B, or its placeholder.
    pub participant_b_name: String,
    /// Court label.
    pub court: Option<String>,
    /// Lifecycle phase.
    pub phase: VisibleMatchPhase,
    /// Current score.
    pub score: ScoreView,
    /// Winning side once completed.
    pub winner: Option<Side>,
    /// Change counter; unchanged means nothing to redraw.
    pub version: u64,
}

impl From<&LiveMatch> for PublicMatchView {
    fn from(live: &LiveMatch) -> Self {
        let snapshot = live.machine.snapshot();
        Self {
            id: live.id,
            participant_a_name: display_name(&live.participant_a),
            participant_b_name: display_name(&live.participant_b),
            court: live.court.clone(),
            phase: snapshot.phase.into(),
            score: live.score.into(),
            winner: live.winner(),
            version: snapshot.version,
        }
    }
}

/// Query selecting which group table to compute.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StandingsQuery {
    /// Bracket used as group marker (`winners` = group A, `losers` = group B).
    pub bracket_type: BracketType,
}

fn display_name(participant: &Participant) -> String {
    participant
        .name
        .clone()
        .unwrap_or_else(|| placeholder_name(&participant.id))
}
