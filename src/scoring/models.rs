//! Match records exchanged with the tournament backend.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bracket a match belongs to; round-robin views use it as the group A/B marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BracketType {
    /// Winners bracket, or group A in round-robin play.
    Winners,
    /// Losers bracket, or group B in round-robin play.
    Losers,
}

/// Final or running games tally of a match, from each participant's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreLine {
    /// Games of `participant_a`.
    pub a: u32,
    /// Games of `participant_b`.
    pub b: u32,
}

/// Match result as supplied by the tournament backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchRecord {
    /// Identifier of the match.
    pub id: String,
    /// First participant (team or player) id.
    pub participant_a: String,
    /// Second participant id.
    pub participant_b: String,
    /// Display name of the first participant, when known.
    #[serde(default)]
    pub participant_a_name: Option<String>,
    /// Display name of the second participant, when known.
    #[serde(default)]
    pub participant_b_name: Option<String>,
    /// Games tally; absent until the match has been scored.
    #[serde(default)]
    pub score: Option<ScoreLine>,
    /// Whether the result is final.
    #[serde(default)]
    pub completed: bool,
    /// Id of the winning participant.
    #[serde(default)]
    pub winner: Option<String>,
    /// Id of the losing participant.
    #[serde(default)]
    pub loser: Option<String>,
    /// Round number within the bracket.
    #[serde(default)]
    pub round: Option<u32>,
    /// Bracket (or group proxy) of the match.
    #[serde(default)]
    pub bracket_type: Option<BracketType>,
    /// Scheduled start, as provided by the scheduler (RFC 3339).
    #[serde(default)]
    pub scheduled_at: Option<String>,
    /// Court assignment.
    #[serde(default)]
    pub court: Option<String>,
}

impl MatchRecord {
    /// Whether the match was played between `first` and `second`, in any order.
    pub fn is_between(&self, first: &str, second: &str) -> bool {
        (self.participant_a == first && self.participant_b == second)
            || (self.participant_a == second && self.participant_b == first)
    }
}
