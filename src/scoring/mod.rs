//! Pure scoring core: live point/game advancement, match completion rules and
//! round-robin standings. Nothing here performs I/O or keeps state between calls.

/// Match completion rules.
pub mod completion;
/// Point and game advancement.
pub mod engine;
/// Match records consumed by the standings calculator.
pub mod models;
/// Group standings.
pub mod standings;

pub use self::completion::CompletionPolicy;
pub use self::engine::{MatchScore, Side, points_display, reset_score, score_point};
pub use self::models::{BracketType, MatchRecord, ScoreLine};
pub use self::standings::{
    TeamStanding, calculate_group_standings, format_games_differential, format_win_percentage,
};
