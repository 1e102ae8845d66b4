//! Live scoring operations driven by the court-side operator. Each call
//! mutates a single match under its entry lock and projects the result.

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    dto::matches::{CreateMatchRequest, MatchSummary, ScorePointResponse},
    error::ServiceError,
    scoring::{Side, engine::game_won, reset_score, score_point},
    state::{LiveMatch, MatchEvent, MatchPhase, SharedState},
};

/// Open a new live match at 0-0 in the scheduled phase.
pub fn create_match(
    state: &SharedState,
    request: CreateMatchRequest,
) -> Result<MatchSummary, ServiceError> {
    let CreateMatchRequest {
        participant_a,
        participant_b,
        round,
        bracket_type,
        court,
        scheduled_at,
        ruleset,
    } = request;

    if participant_a.id == participant_b.id {
        return Err(ServiceError::InvalidInput(format!(
            "participant `{}` cannot play against itself",
            participant_a.id
        )));
    }

    let ruleset = ruleset.unwrap_or_else(|| state.config().default_ruleset());
    ruleset.check().map_err(ServiceError::InvalidInput)?;

    let mut live = LiveMatch::new(participant_a.into(), participant_b.into(), ruleset);
    live.round = round;
    live.bracket_type = bracket_type;
    live.court = court;
    live.scheduled_at = scheduled_at;

    let summary = MatchSummary::from(&live);
    info!(
        match_id = %live.id,
        participant_a = %live.participant_a.id,
        participant_b = %live.participant_b.id,
        ruleset = ?live.ruleset,
        "live match created"
    );
    state.matches().insert(live.id, live);

    Ok(summary)
}

/// Open scoring on a scheduled match.
pub fn start_match(state: &SharedState, id: Uuid) -> Result<MatchSummary, ServiceError> {
    state.with_match_mut(id, |live| {
        live.machine.apply(MatchEvent::Start)?;
        live.touch();
        info!(match_id = %id, "live match started");
        Ok(MatchSummary::from(&*live))
    })
}

/// Award one point to `side`, completing the match when its ruleset says so.
///
/// A scheduled match is started by its first point. Completed matches are
/// frozen and reject further points until reset.
pub fn score_point_for(
    state: &SharedState,
    id: Uuid,
    side: Side,
) -> Result<ScorePointResponse, ServiceError> {
    state.with_match_mut(id, |live| {
        if let MatchPhase::Completed { winner } = live.machine.phase() {
            return Err(ServiceError::InvalidState(format!(
                "match `{id}` is already completed (won by side {winner:?})"
            )));
        }
        if live.machine.phase() == MatchPhase::Scheduled {
            live.machine.apply(MatchEvent::Start)?;
        }

        let before = live.score;
        live.score = score_point(before, side);
        live.machine.touch();
        let game_won_by = game_won(&before, &live.score);

        let match_winner = live.ruleset.winner(&live.score);
        if let Some(winner) = match_winner {
            live.machine.apply(MatchEvent::Complete(winner))?;
            info!(
                match_id = %id,
                winner = ?winner,
                games_a = live.score.games_a,
                games_b = live.score.games_b,
                "live match completed"
            );
        }
        live.touch();

        debug!(
            match_id = %id,
            side = ?side,
            games_a = live.score.games_a,
            games_b = live.score.games_b,
            points_a = live.score.points_a,
            points_b = live.score.points_b,
            version = live.machine.version(),
            "point recorded"
        );

        Ok(ScorePointResponse {
            game_won_by,
            match_completed: match_winner.is_some(),
            live_match: MatchSummary::from(&*live),
        })
    })
}

/// Restart scoring from 0-0, reopening a completed match.
pub fn reset_match_score(state: &SharedState, id: Uuid) -> Result<MatchSummary, ServiceError> {
    state.with_match_mut(id, |live| {
        live.machine.apply(MatchEvent::Reset)?;
        live.score = reset_score(live.score);
        live.touch();
        info!(match_id = %id, "live match score reset");
        Ok(MatchSummary::from(&*live))
    })
}

/// Return one live match.
pub fn get_match(state: &SharedState, id: Uuid) -> Result<MatchSummary, ServiceError> {
    state.read_match(id, |live| MatchSummary::from(live))
}

/// Return every live match, oldest first.
pub fn list_matches(state: &SharedState) -> Vec<MatchSummary> {
    state
        .match_snapshot()
        .iter()
        .map(MatchSummary::from)
        .collect()
}

/// Drop a live match from memory.
pub fn delete_match(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    match state.matches().remove(&id) {
        Some(_) => {
            info!(match_id = %id, "live match deleted");
            Ok(())
        }
        None => Err(ServiceError::NotFound(format!("match `{id}` not found"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        dto::matches::{ParticipantInput, VisibleMatchPhase},
        scoring::CompletionPolicy,
        state::AppState,
    };

    fn request(ruleset: Option<CompletionPolicy>) -> CreateMatchRequest {
        CreateMatchRequest {
            participant_a: ParticipantInput {
                id: "team-a".into(),
                name: Some("Aces".into()),
            },
            participant_b: ParticipantInput {
                id: "team-b".into(),
                name: None,
            },
            round: Some(1),
            bracket_type: None,
            court: Some("Court 2".into()),
            scheduled_at: None,
            ruleset,
        }
    }

    fn win_games(state: &SharedState, id: Uuid, side: Side, games: usize) -> ScorePointResponse {
        let mut last = None;
        for _ in 0..games * 4 {
            last = Some(score_point_for(state, id, side).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn created_match_uses_configured_default_ruleset() {
        let state = AppState::new(AppConfig::with_default_ruleset(
            CompletionPolicy::standard_set(),
        ));
        let summary = create_match(&state, request(None)).unwrap();
        assert_eq!(summary.ruleset, CompletionPolicy::standard_set());
        assert_eq!(summary.phase, VisibleMatchPhase::Scheduled);
        assert_eq!(summary.version, 0);
        assert_eq!(list_matches(&state).len(), 1);
    }

    #[test]
    fn same_participant_on_both_sides_is_rejected() {
        let state = AppState::new(AppConfig::default());
        let mut req = request(None);
        req.participant_b.id = "team-a".into();
        assert!(matches!(
            create_match(&state, req),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn unreachable_ruleset_is_rejected() {
        let state = AppState::new(AppConfig::default());
        let req = request(Some(CompletionPolicy::FirstToGames { target: 0 }));
        assert!(matches!(
            create_match(&state, req),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn first_point_starts_the_match() {
        let state = AppState::new(AppConfig::default());
        let id = create_match(&state, request(None)).unwrap().id;
        let response = score_point_for(&state, id, Side::A).unwrap();
        assert_eq!(response.live_match.phase, VisibleMatchPhase::InProgress);
        assert_eq!(response.live_match.score.points_a, 15);
        assert!(response.game_won_by.is_none());
        assert!(!response.match_completed);
    }

    #[test]
    fn fourth_game_completes_and_freezes_the_match() {
        let state = AppState::new(AppConfig::default());
        let id = create_match(&state, request(None)).unwrap().id;

        let response = win_games(&state, id, Side::B, 4);
        assert_eq!(response.game_won_by, Some(Side::B));
        assert!(response.match_completed);
        assert_eq!(response.live_match.winner, Some(Side::B));
        assert_eq!(response.live_match.winner_id.as_deref(), Some("team-b"));
        assert_eq!(response.live_match.score.games_b, 4);

        let err = score_point_for(&state, id, Side::A).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
        assert_eq!(get_match(&state, id).unwrap().score.games_a, 0);
    }

    #[test]
    fn set_ruleset_plays_past_four_games() {
        let state = AppState::new(AppConfig::default());
        let id = create_match(&state, request(Some(CompletionPolicy::standard_set())))
            .unwrap()
            .id;

        win_games(&state, id, Side::A, 5);
        win_games(&state, id, Side::B, 5);
        let at_six_five = win_games(&state, id, Side::A, 1);
        assert!(!at_six_five.match_completed);
        let at_seven_five = win_games(&state, id, Side::A, 1);
        assert!(at_seven_five.match_completed);
        assert_eq!(at_seven_five.live_match.score.games_a, 7);
        assert_eq!(at_seven_five.live_match.score.games_b, 5);
        assert_eq!(at_seven_five.live_match.winner, Some(Side::A));
    }

    #[test]
    fn reset_reopens_a_completed_match() {
        let state = AppState::new(AppConfig::default());
        let id = create_match(&state, request(None)).unwrap().id;
        win_games(&state, id, Side::A, 4);

        let summary = reset_match_score(&state, id).unwrap();
        assert_eq!(summary.phase, VisibleMatchPhase::InProgress);
        assert_eq!(summary.score.games_a, 0);
        assert!(summary.winner.is_none());
        assert!(score_point_for(&state, id, Side::B).is_ok());
    }

    #[test]
    fn reset_before_start_is_a_conflict() {
        let state = AppState::new(AppConfig::default());
        let id = create_match(&state, request(None)).unwrap().id;
        assert!(matches!(
            reset_match_score(&state, id),
            Err(ServiceError::InvalidState(_))
        ));
    }

    #[test]
    fn start_twice_is_a_conflict() {
        let state = AppState::new(AppConfig::default());
        let id = create_match(&state, request(None)).unwrap().id;
        assert!(start_match(&state, id).is_ok());
        assert!(matches!(
            start_match(&state, id),
            Err(ServiceError::InvalidState(_))
        ));
    }

    #[test]
    fn version_moves_with_every_point() {
        let state = AppState::new(AppConfig::default());
        let id = create_match(&state, request(None)).unwrap().id;
        let first = score_point_for(&state, id, Side::A).unwrap().live_match.version;
        let second = score_point_for(&state, id, Side::B).unwrap().live_match.version;
        assert!(second > first);
    }

    #[test]
    fn unknown_match_is_not_found() {
        let state = AppState::new(AppConfig::default());
        let id = Uuid::new_v4();
        assert!(matches!(get_match(&state, id), Err(ServiceError::NotFound(_))));
        assert!(matches!(
            score_point_for(&state, id, Side::A),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(delete_match(&state, id), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn deleted_match_disappears() {
        let state = AppState::new(AppConfig::default());
        let id = create_match(&state, request(None)).unwrap().id;
        delete_match(&state, id).unwrap();
        assert!(list_matches(&state).is_empty());
    }
}
