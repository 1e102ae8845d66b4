//! Round-robin group standings with cascading tie-breaks.
//!
//! Standings are rebuilt from the full match list on every call. Ordering:
//!
//! 1. more games won,
//! 2. more match wins,
//! 3. head-to-head result, only when exactly two teams share 1 and 2,
//! 4. better games differential,
//! 5. fewer matches played,
//! 6. team id, ascending.

use std::{cmp::Ordering, collections::HashMap};

use indexmap::IndexMap;
use serde::Serialize;

use crate::scoring::models::MatchRecord;

/// Number of id characters kept in the placeholder name of an unknown team.
const PLACEHOLDER_ID_CHARS: usize = 8;

/// One row of a group table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    /// Participant id.
    pub team_id: String,
    /// Resolved display name.
    pub team_name: String,
    /// Completed matches counted for the team.
    pub matches_played: u32,
    /// Matches where the team is the recorded winner.
    pub wins: u32,
    /// Every other counted match.
    pub losses: u32,
    /// Games won across counted matches.
    pub games_won: u32,
    /// Games conceded across counted matches.
    pub games_lost: u32,
    /// `games_won - games_lost`.
    pub games_differential: i64,
    /// `wins / matches_played`, 0 without matches.
    pub win_percentage: f64,
    /// 1-based position in the table.
    pub rank: usize,
}

impl TeamStanding {
    fn new(team_id: &str, team_name: String) -> Self {
        Self {
            team_id: team_id.to_string(),
            team_name,
            matches_played: 0,
            wins: 0,
            losses: 0,
            games_won: 0,
            games_lost: 0,
            games_differential: 0,
            win_percentage: 0.0,
            rank: 0,
        }
    }

    fn record(&mut self, own_games: u32, opponent_games: u32, won: bool) {
        self.matches_played = self.matches_played.saturating_add(1);
        self.games_won = self.games_won.saturating_add(own_games);
        self.games_lost = self.games_lost.saturating_add(opponent_games);
        if won {
            self.wins = self.wins.saturating_add(1);
        } else {
            self.losses = self.losses.saturating_add(1);
        }
    }

    fn finalize(&mut self) {
        self.games_differential = i64::from(self.games_won) - i64::from(self.games_lost);
        self.win_percentage = if self.matches_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.matches_played)
        };
    }

    fn primary_key(&self) -> (u32, u32) {
        (self.games_won, self.wins)
    }
}

/// Build the ranked table for one round-robin group.
///
/// Every id of `group_participant_ids` gets a row, whether or not it played.
/// Only completed matches carrying a score are counted, and only for the
/// participants that belong to the group. A participant is credited a win
/// when the match `winner` equals its id; any other outcome, including a
/// missing winner, counts as a loss.
pub fn calculate_group_standings(
    matches: &[MatchRecord],
    name_lookup: &HashMap<String, String>,
    group_participant_ids: &[String],
) -> Vec<TeamStanding> {
    let mut table: IndexMap<&str, TeamStanding> = IndexMap::new();
    for id in group_participant_ids {
        table
            .entry(id.as_str())
            .or_insert_with(|| TeamStanding::new(id, resolve_team_name(id, name_lookup)));
    }

    for record in matches.iter().filter(|record| record.completed) {
        let Some(score) = record.score else {
            continue;
        };
        let winner = record.winner.as_deref();

        if let Some(standing) = table.get_mut(record.participant_a.as_str()) {
            standing.record(score.a, score.b, winner == Some(record.participant_a.as_str()));
        }
        if let Some(standing) = table.get_mut(record.participant_b.as_str()) {
            standing.record(score.b, score.a, winner == Some(record.participant_b.as_str()));
        }
    }

    let mut standings: Vec<TeamStanding> = table
        .into_values()
        .map(|mut standing| {
            standing.finalize();
            standing
        })
        .collect();

    let mut tie_sizes: HashMap<(u32, u32), usize> = HashMap::new();
    for standing in &standings {
        *tie_sizes.entry(standing.primary_key()).or_default() += 1;
    }

    standings.sort_by(|a, b| compare_standings(a, b, &tie_sizes, matches));

    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index + 1;
    }

    standings
}

/// Display name for `id`, or a stable placeholder built from its first characters.
pub fn resolve_team_name(id: &str, name_lookup: &HashMap<String, String>) -> String {
    match name_lookup.get(id) {
        Some(name) => name.clone(),
        None => placeholder_name(id),
    }
}

/// `"Team " + first 8 characters of the id + "..."`.
pub fn placeholder_name(id: &str) -> String {
    let prefix: String = id.chars().take(PLACEHOLDER_ID_CHARS).collect();
    format!("Team {prefix}...")
}

/// Win percentage with three decimals, e.g. `0.667`.
pub fn format_win_percentage(value: f64) -> String {
    format!("{value:.3}")
}

/// Signed games differential, e.g. `+3`, `-2`, `0`.
pub fn format_games_differential(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

fn compare_standings(
    a: &TeamStanding,
    b: &TeamStanding,
    tie_sizes: &HashMap<(u32, u32), usize>,
    matches: &[MatchRecord],
) -> Ordering {
    b.games_won
        .cmp(&a.games_won)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| {
            if tie_sizes.get(&a.primary_key()).copied() == Some(2) {
                head_to_head(a, b, matches)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| b.games_differential.cmp(&a.games_differential))
        .then_with(|| a.matches_played.cmp(&b.matches_played))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Order two teams by the winner of the completed match they played.
fn head_to_head(a: &TeamStanding, b: &TeamStanding, matches: &[MatchRecord]) -> Ordering {
    let direct = matches
        .iter()
        .find(|record| record.completed && record.is_between(&a.team_id, &b.team_id));

    match direct.and_then(|record| record.winner.as_deref()) {
        Some(winner) if winner == a.team_id => Ordering::Less,
        Some(winner) if winner == b.team_id => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
