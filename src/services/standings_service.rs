//! Adapters feeding match snapshots into the standings calculator.

use std::collections::HashMap;

use indexmap::IndexSet;
use tracing::debug;

use crate::{
    dto::standings::{StandingsRequest, StandingsResponse},
    scoring::{BracketType, MatchRecord, calculate_group_standings},
    state::SharedState,
};

/// Rank a caller-supplied group snapshot.
pub fn compute_standings(request: StandingsRequest) -> StandingsResponse {
    let StandingsRequest {
        matches,
        names,
        group_participant_ids,
    } = request;

    let standings = calculate_group_standings(&matches, &names, &group_participant_ids);
    debug!(
        matches = matches.len(),
        participants = standings.len(),
        "computed standings from snapshot"
    );
    standings.into()
}

/// Rank the group formed by the live matches of `bracket_type`.
///
/// The roster is every participant seen in those matches, in first-seen
/// order; names come from the matches themselves.
pub fn live_group_standings(state: &SharedState, bracket_type: BracketType) -> StandingsResponse {
    let records: Vec<MatchRecord> = state
        .match_snapshot()
        .iter()
        .filter(|live| live.bracket_type == Some(bracket_type))
        .map(MatchRecord::from)
        .collect();

    let mut roster: IndexSet<String> = IndexSet::new();
    let mut names: HashMap<String, String> = HashMap::new();
    for record in &records {
        let sides = [
            (&record.participant_a, &record.participant_a_name),
            (&record.participant_b, &record.participant_b_name),
        ];
        for (id, name) in sides {
            roster.insert(id.clone());
            if let Some(name) = name {
                names.entry(id.clone()).or_insert_with(|| name.clone());
            }
        }
    }
    let roster: Vec<String> = roster.into_iter().collect();

    let standings = calculate_group_standings(&records, &names, &roster);
    debug!(
        bracket_type = ?bracket_type,
        matches = records.len(),
        participants = roster.len(),
        "computed live group standings"
    );
    standings.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        dto::matches::{CreateMatchRequest, ParticipantInput},
        scoring::{ScoreLine, Side},
        services::live_scoring_service::{create_match, score_point_for},
        state::AppState,
    };

    fn create(
        state: &SharedState,
        a: (&str, Option<&str>),
        b: (&str, Option<&str>),
        bracket_type: BracketType,
    ) -> uuid::Uuid {
        let request = CreateMatchRequest {
            participant_a: ParticipantInput {
                id: a.0.into(),
                name: a.1.map(Into::into),
            },
            participant_b: ParticipantInput {
                id: b.0.into(),
                name: b.1.map(Into::into),
            },
            round: None,
            bracket_type: Some(bracket_type),
            court: None,
            scheduled_at: None,
            ruleset: None,
        };
        create_match(state, request).unwrap().id
    }

    fn play_out(state: &SharedState, id: uuid::Uuid, winner: Side) {
        for _ in 0..16 {
            score_point_for(state, id, winner).unwrap();
        }
    }

    #[test]
    fn snapshot_request_is_ranked_with_display_strings() {
        let request: StandingsRequest = serde_json::from_value(serde_json::json!({
            "matches": [
                {
                    "id": "m1",
                    "participant_a": "a",
                    "participant_b": "b",
                    "score": {"a": 4, "b": 1},
                    "completed": true,
                    "winner": "a"
                }
            ],
            "names": {"a": "Aces"},
            "group_participant_ids": ["b", "a"]
        }))
        .unwrap();

        let response = compute_standings(request);
        let first = &response.standings[0];
        assert_eq!(first.team_name, "Aces");
        assert_eq!(first.rank, 1);
        assert_eq!(first.games_differential_display, "+3");
        assert_eq!(first.win_percentage_display, "1.000");
        let second = &response.standings[1];
        assert_eq!(second.team_name, "Team b...");
        assert_eq!(second.games_differential_display, "-3");
    }

    #[test]
    fn oversized_game_counts_in_a_snapshot_do_not_panic() {
        let request: StandingsRequest = serde_json::from_value(serde_json::json!({
            "matches": [
                {
                    "id": "m1",
                    "participant_a": "a",
                    "participant_b": "b",
                    "score": {"a": 4294967295u32, "b": 0},
                    "completed": true,
                    "winner": "a"
                },
                {
                    "id": "m2",
                    "participant_a": "a",
                    "participant_b": "c",
                    "score": {"a": 1, "b": 4},
                    "completed": true,
                    "winner": "c"
                }
            ],
            "group_participant_ids": ["a", "b", "c"]
        }))
        .unwrap();

        let response = compute_standings(request);
        let first = &response.standings[0];
        assert_eq!(first.team_id, "a");
        assert_eq!(first.games_won, u32::MAX);
        assert_eq!(first.matches_played, 2);
    }

    #[test]
    fn live_standings_only_use_the_requested_bracket() {
        let state = AppState::new(AppConfig::default());
        let m1 = create(&state, ("a", Some("Aces")), ("b", None), BracketType::Winners);
        let m2 = create(&state, ("b", None), ("c", Some("Cats")), BracketType::Winners);
        let m3 = create(&state, ("x", None), ("y", None), BracketType::Losers);
        play_out(&state, m1, Side::A);
        play_out(&state, m2, Side::B);
        play_out(&state, m3, Side::A);

        let response = live_group_standings(&state, BracketType::Winners);
        let ids: Vec<&str> = response
            .standings
            .iter()
            .map(|row| row.team_id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
        assert_eq!(response.standings[0].team_name, "Aces");
        assert_eq!(response.standings[1].team_name, "Cats");
        assert_eq!(response.standings[2].losses, 2);
    }

    #[test]
    fn unfinished_live_matches_list_players_without_results() {
        let state = AppState::new(AppConfig::default());
        let id = create(&state, ("a", None), ("b", None), BracketType::Losers);
        score_point_for(&state, id, Side::A).unwrap();

        let response = live_group_standings(&state, BracketType::Losers);
        assert_eq!(response.standings.len(), 2);
        assert!(response.standings.iter().all(|row| row.matches_played == 0));
    }

    #[test]
    fn exported_live_record_matches_the_score() {
        let state = AppState::new(AppConfig::default());
        let id = create(&state, ("a", None), ("b", None), BracketType::Winners);
        play_out(&state, id, Side::B);
        let record = state
            .read_match(id, |live| MatchRecord::from(live))
            .unwrap();
        assert_eq!(record.score, Some(ScoreLine { a: 0, b: 4 }));
        assert_eq!(record.winner.as_deref(), Some("b"));
    }
}
