use std::time::SystemTime;

use uuid::Uuid;

use crate::{
    scoring::{BracketType, CompletionPolicy, MatchRecord, MatchScore, ScoreLine, Side},
    state::state_machine::{MatchPhase, MatchStateMachine},
};

/// One participant of a live match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Team or player id as known by the tournament backend.
    pub id: String,
    /// Display name, when supplied.
    pub name: Option<String>,
}

/// In-memory record of a match being scored.
#[derive(Debug, Clone)]
pub struct LiveMatch {
    /// Primary key of the match.
    pub id: Uuid,
    /// Side A participant.
    pub participant_a: Participant,
    /// Side B participant.
    pub participant_b: Participant,
    /// Round number within the bracket.
    pub round: Option<u32>,
    /// Bracket, doubling as round-robin group marker.
    pub bracket_type: Option<BracketType>,
    /// Court assignment.
    pub court: Option<String>,
    /// Scheduled start (RFC 3339), passed through untouched.
    pub scheduled_at: Option<String>,
    /// Completion rule applied after each point.
    pub ruleset: CompletionPolicy,
    /// Current score.
    pub score: MatchScore,
    /// Lifecycle of the match.
    pub machine: MatchStateMachine,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last time the score or phase changed.
    pub updated_at: SystemTime,
}

impl LiveMatch {
    /// Build a scheduled match at 0-0 with a fresh identifier.
    pub fn new(
        participant_a: Participant,
        participant_b: Participant,
        ruleset: CompletionPolicy,
    ) -> Self {
        let now = SystemTime::now();
        Self {
            id: Uuid::new_v4(),
            participant_a,
            participant_b,
            round: None,
            bracket_type: None,
            court: None,
            scheduled_at: None,
            ruleset,
            score: MatchScore::new(),
            machine: MatchStateMachine::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Participant playing on `side`.
    pub fn participant(&self, side: Side) -> &Participant {
        match side {
            Side::A => &self.participant_a,
            Side::B => &self.participant_b,
        }
    }

    /// Winning side once the match is completed.
    pub fn winner(&self) -> Option<Side> {
        match self.machine.phase() {
            MatchPhase::Completed { winner } => Some(winner),
            _ => None,
        }
    }

    /// Mark the match as modified now.
    pub fn touch(&mut self) {
        self.updated_at = SystemTime::now();
    }
}

impl From<&LiveMatch> for MatchRecord {
    fn from(live: &LiveMatch) -> Self {
        let winner = live.winner();
        let started = live.machine.phase() != MatchPhase::Scheduled;
        Self {
            id: live.id.to_string(),
            participant_a: live.participant_a.id.clone(),
            participant_b: live.participant_b.id.clone(),
            participant_a_name: live.participant_a.name.clone(),
            participant_b_name: live.participant_b.name.clone(),
            score: started.then_some(ScoreLine {
                a: live.score.games_a,
                b: live.score.games_b,
            }),
            completed: live.machine.is_completed(),
            winner: winner.map(|side| live.participant(side).id.clone()),
            loser: winner.map(|side| live.participant(side.opponent()).id.clone()),
            round: live.round,
            bracket_type: live.bracket_type,
            scheduled_at: live.scheduled_at.clone(),
            court: live.court.clone(),
        }
    }
}
