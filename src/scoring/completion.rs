//! Match completion rules evaluated on top of [`score_point`](super::engine::score_point).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::scoring::engine::{MatchScore, Side};

/// Games needed to take a match under the default no-ad format.
pub const DEFAULT_TARGET_GAMES: u32 = 4;
/// Games needed to take a set under the two-game-lead format.
pub const DEFAULT_SET_GAMES: u32 = 6;
/// Games at which a two-game-lead set ends regardless of margin (7-5, 7-6).
pub const DEFAULT_SET_MAX_GAMES: u32 = 7;

/// Rule deciding when a match is over and who won it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// First side to `target` games wins (3-3 is settled by the next game).
    FirstToGames {
        /// Games required to win.
        target: u32,
    },
    /// A side wins with at least `games` games and a two-game lead, or on
    /// reaching `max_games`.
    SetWithTwoGameLead {
        /// Games required before a two-game lead closes the set.
        games: u32,
        /// Games that close the set whatever the margin.
        max_games: u32,
    },
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        CompletionPolicy::FirstToGames {
            target: DEFAULT_TARGET_GAMES,
        }
    }
}

impl CompletionPolicy {
    /// Standard six-game set with a two-game lead, capped at seven games.
    pub fn standard_set() -> Self {
        CompletionPolicy::SetWithTwoGameLead {
            games: DEFAULT_SET_GAMES,
            max_games: DEFAULT_SET_MAX_GAMES,
        }
    }

    /// Whether the match has reached its end under this policy.
    pub fn is_complete(&self, score: &MatchScore) -> bool {
        self.winner(score).is_some()
    }

    /// Winning side once the match is over.
    pub fn winner(&self, score: &MatchScore) -> Option<Side> {
        let (leader, leading, trailing) = leader(score)?;
        let done = match *self {
            CompletionPolicy::FirstToGames { target } => leading >= target,
            CompletionPolicy::SetWithTwoGameLead { games, max_games } => {
                (leading >= games && leading - trailing >= 2) || leading >= max_games
            }
        };
        done.then_some(leader)
    }

    /// Check the policy parameters describe a match that can end.
    pub fn check(&self) -> Result<(), String> {
        match *self {
            CompletionPolicy::FirstToGames { target } if target == 0 => {
                Err("target must be at least 1 game".into())
            }
            CompletionPolicy::SetWithTwoGameLead { games, .. } if games == 0 => {
                Err("games must be at least 1".into())
            }
            CompletionPolicy::SetWithTwoGameLead { games, max_games } if max_games < games => Err(
                format!("max_games ({max_games}) must not be lower than games ({games})"),
            ),
            _ => Ok(()),
        }
    }
}

/// Side ahead in games with both totals, or `None` when level.
fn leader(score: &MatchScore) -> Option<(Side, u32, u32)> {
    match score.games_a.cmp(&score.games_b) {
        std::cmp::Ordering::Greater => Some((Side::A, score.games_a, score.games_b)),
        std::cmp::Ordering::Less => Some((Side::B, score.games_b, score.games_a)),
        std::cmp::Ordering::Equal => None,
    }
}
