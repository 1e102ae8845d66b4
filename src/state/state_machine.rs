use serde::Serialize;
use thiserror::Error;

use crate::scoring::Side;

/// Lifecycle phases of a live match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchPhase {
    /// Created but no point scored yet.
    Scheduled,
    /// Points are being recorded.
    InProgress,
    /// The ruleset declared a winner; the score is frozen.
    Completed {
        /// Side that won the match.
        winner: Side,
    },
}

/// Events that can be applied to the match state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// Operator opens scoring (or the first point arrives).
    Start,
    /// The ruleset reports the match is over.
    Complete(Side),
    /// Operator restarts scoring from 0-0.
    Reset,
}

/// Error returned when attempting to apply an invalid transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transition: {event:?} cannot be applied while in {from:?}")]
pub struct InvalidTransition {
    /// The phase the state machine was in when the invalid event was received.
    pub from: MatchPhase,
    /// The event that cannot be applied from this phase.
    pub event: MatchEvent,
}

/// Snapshot of the current state machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase of the match.
    pub phase: MatchPhase,
    /// Increments on every transition and every recorded point.
    pub version: u64,
}

/// Versioned lifecycle of a single live match.
#[derive(Debug, Clone)]
pub struct MatchStateMachine {
    phase: MatchPhase,
    version: u64,
}

impl Default for MatchStateMachine {
    fn default() -> Self {
        Self {
            phase: MatchPhase::Scheduled,
            version: 0,
        }
    }
}

impl MatchStateMachine {
    /// Create a new state machine in the scheduled phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Current version counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the score is frozen.
    pub fn is_completed(&self) -> bool {
        matches!(self.phase, MatchPhase::Completed { .. })
    }

    /// Create a snapshot of the current state machine state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            version: self.version,
        }
    }

    /// Apply `event`, returning the new phase.
    pub fn apply(&mut self, event: MatchEvent) -> Result<MatchPhase, InvalidTransition> {
        let next = self.compute_transition(event)?;
        self.phase = next;
        self.version += 1;
        Ok(next)
    }

    /// Record a change that keeps the phase, such as a point scored.
    pub fn touch(&mut self) -> u64 {
        self.version += 1;
        self.version
    }

    fn compute_transition(&self, event: MatchEvent) -> Result<MatchPhase, InvalidTransition> {
        let next = match (self.phase, event) {
            (MatchPhase::Scheduled, MatchEvent::Start) => MatchPhase::InProgress,
            (MatchPhase::InProgress, MatchEvent::Complete(winner)) => {
                MatchPhase::Completed { winner }
            }
            (MatchPhase::InProgress | MatchPhase::Completed { .. }, MatchEvent::Reset) => {
                MatchPhase::InProgress
            }
            (from, event) => return Err(InvalidTransition { from, event }),
        };

        Ok(next)
    }
}
