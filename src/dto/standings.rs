//! Standings request and ranked table payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::scoring::{
    MatchRecord, TeamStanding, format_games_differential, format_win_percentage,
};

/// Snapshot of a group supplied by the caller for a standings computation.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct StandingsRequest {
    /// Every match known for the tournament; only completed, scored ones count.
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    /// Display names keyed by participant id.
    #[serde(default)]
    pub names: HashMap<String, String>,
    /// Members of the group to rank.
    #[validate(length(min = 1))]
    pub group_participant_ids: Vec<String>,
}

/// One ranked row, with display strings next to the raw numbers.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct StandingRow {
    /// 1-based position.
    pub rank: usize,
    /// Participant id.
    pub team_id: String,
    /// Resolved display name.
    pub team_name: String,
    /// Completed matches counted.
    pub matches_played: u32,
    /// Matches won.
    pub wins: u32,
    /// Matches lost.
    pub losses: u32,
    /// Games won.
    pub games_won: u32,
    /// Games conceded.
    pub games_lost: u32,
    /// Games won minus games lost.
    pub games_differential: i64,
    /// Signed differential, e.g. `+3`.
    pub games_differential_display: String,
    /// Wins over matches played.
    pub win_percentage: f64,
    /// Win percentage with three decimals.
    pub win_percentage_display: String,
}

impl From<TeamStanding> for StandingRow {
    fn from(standing: TeamStanding) -> Self {
        Self {
            rank: standing.rank,
            games_differential_display: format_games_differential(standing.games_differential),
            win_percentage_display: format_win_percentage(standing.win_percentage),
            team_id: standing.team_id,
            team_name: standing.team_name,
            matches_played: standing.matches_played,
            wins: standing.wins,
            losses: standing.losses,
            games_won: standing.games_won,
            games_lost: standing.games_lost,
            games_differential: standing.games_differential,
            win_percentage: standing.win_percentage,
        }
    }
}

/// Ranked group table.
#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsResponse {
    /// Rows ordered by rank.
    pub standings: Vec<StandingRow>,
}

impl From<Vec<TeamStanding>> for StandingsResponse {
    fn from(standings: Vec<TeamStanding>) -> Self {
        Self {
            standings: standings.into_iter().map(Into::into).collect(),
        }
    }
}
