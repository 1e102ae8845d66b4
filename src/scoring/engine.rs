//! No-ad tennis scoring: advances the point/game state of a match by one point.
//!
//! The engine never decides when a match is over; callers pair it with a
//! [`CompletionPolicy`](crate::scoring::completion::CompletionPolicy).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Point levels a side walks through during a game, in order.
pub const POINT_LADDER: [u8; 4] = [0, 15, 30, 40];

/// Highest point level; scoring again from here wins the game.
const GAME_POINT: u8 = 40;

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Side {
    /// First listed participant.
    A,
    /// Second listed participant.
    B,
}

impl Side {
    /// The other side of the net.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Live scoring state of one match.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
pub struct MatchScore {
    /// Games won by side A.
    pub games_a: u32,
    /// Games won by side B.
    pub games_b: u32,
    /// Current-game points of side A (0, 15, 30 or 40).
    pub points_a: u8,
    /// Current-game points of side B (0, 15, 30 or 40).
    pub points_b: u8,
}

impl MatchScore {
    /// Fresh 0-0 / 0-0 score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by `side`.
    pub fn games(&self, side: Side) -> u32 {
        match side {
            Side::A => self.games_a,
            Side::B => self.games_b,
        }
    }

    /// Current-game points of `side`.
    pub fn points(&self, side: Side) -> u8 {
        match side {
            Side::A => self.points_a,
            Side::B => self.points_b,
        }
    }

    /// Total games played so far.
    pub fn total_games(&self) -> u32 {
        self.games_a + self.games_b
    }

    fn games_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::A => &mut self.games_a,
            Side::B => &mut self.games_b,
        }
    }

    fn points_mut(&mut self, side: Side) -> &mut u8 {
        match side {
            Side::A => &mut self.points_a,
            Side::B => &mut self.points_b,
        }
    }
}

/// Award one point to `side` and return the resulting score.
///
/// From 40 the next point always wins the game, whatever the opponent holds,
/// so 40-40 is decided by a single point. Winning a game resets both sides to
/// 0 points. Off-ladder point values are moved up to the next ladder step;
/// anything above 40 is treated as 40.
pub fn score_point(state: MatchScore, side: Side) -> MatchScore {
    let mut next = state;
    match next_point_level(state.points(side)) {
        Some(points) => *next.points_mut(side) = points,
        None => {
            let games = next.games_mut(side);
            *games = games.saturating_add(1);
            next.points_a = 0;
            next.points_b = 0;
        }
    }
    next
}

/// Zero every field, used when an operator restarts scoring for a match.
pub fn reset_score(_state: MatchScore) -> MatchScore {
    MatchScore::new()
}

/// Label shown for a point value: the ladder value itself, or the plain
/// number for anything off the ladder.
pub fn points_display(points: u8) -> String {
    match points {
        0 => "0".to_string(),
        15 => "15".to_string(),
        30 => "30".to_string(),
        40 => "40".to_string(),
        other => other.to_string(),
    }
}

/// Side that won a game between `before` and `after`, if any.
pub fn game_won(before: &MatchScore, after: &MatchScore) -> Option<Side> {
    if after.games_a > before.games_a {
        Some(Side::A)
    } else if after.games_b > before.games_b {
        Some(Side::B)
    } else {
        None
    }
}

/// Next ladder step above `points`, or `None` when the side is on game point.
fn next_point_level(points: u8) -> Option<u8> {
    if points >= GAME_POINT {
        return None;
    }
    POINT_LADDER.iter().copied().find(|level| *level > points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(games_a: u32, games_b: u32, points_a: u8, points_b: u8) -> MatchScore {
        MatchScore {
            games_a,
            games_b,
            points_a,
            points_b,
        }
    }

    #[test]
    fn points_climb_the_ladder_then_win_the_game() {
        let mut state = MatchScore::new();
        let mut seen = Vec::new();
        for _ in 0..3 {
            state = score_point(state, Side::A);
            seen.push(state.points_a);
        }
        assert_eq!(seen, vec![15, 30, 40]);
        assert_eq!(state.games_a, 0);

        state = score_point(state, Side::A);
        assert_eq!(state, score(1, 0, 0, 0));
    }

    #[test]
    fn scoring_leaves_the_opponent_points_alone() {
        let state = score(2, 1, 15, 30);
        let next = score_point(state, Side::B);
        assert_eq!(next.points_a, 15);
        assert_eq!(next.points_b, 40);
        assert_eq!(next.total_games(), 3);
    }

    #[test]
    fn deuce_is_decided_by_the_next_point_for_either_side() {
        let deuce = score(1, 2, 40, 40);
        assert_eq!(score_point(deuce, Side::A), score(2, 2, 0, 0));
        assert_eq!(score_point(deuce, Side::B), score(1, 3, 0, 0));
    }

    #[test]
    fn game_point_wins_even_when_trailing_opponent_is_at_40() {
        let state = score(0, 0, 40, 0);
        assert_eq!(score_point(state, Side::A), score(1, 0, 0, 0));
        let state = score(0, 0, 0, 40);
        assert_eq!(score_point(state, Side::A), score(0, 0, 15, 40));
    }

    #[test]
    fn games_are_conserved_over_long_sequences() {
        let mut state = MatchScore::new();
        let mut games_won = 0;
        let mut seed: u32 = 17;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let side = if (seed >> 16) & 1 == 0 { Side::A } else { Side::B };
            let next = score_point(state, side);
            assert!(next.points_a <= 40 && next.points_b <= 40);
            assert!(next.total_games() <= state.total_games() + 1);
            if let Some(winner) = game_won(&state, &next) {
                assert_eq!(winner, side);
                games_won += 1;
            }
            state = next;
        }
        assert_eq!(state.total_games(), games_won);
    }

    #[test]
    fn off_ladder_points_move_up_to_the_next_level() {
        assert_eq!(score_point(score(0, 0, 20, 0), Side::A).points_a, 30);
        assert_eq!(score_point(score(0, 0, 1, 0), Side::A).points_a, 15);
        assert_eq!(score_point(score(0, 0, 41, 7), Side::A), score(1, 0, 0, 0));
    }

    #[test]
    fn reset_zeroes_everything() {
        assert_eq!(reset_score(score(3, 2, 40, 15)), MatchScore::new());
    }

    #[test]
    fn display_labels() {
        assert_eq!(points_display(0), "0");
        assert_eq!(points_display(15), "15");
        assert_eq!(points_display(30), "30");
        assert_eq!(points_display(40), "40");
        assert_eq!(points_display(7), "7");
    }

    #[test]
    fn opponent_flips_sides() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
    }
}
