//! Self-play integration tests.
//!
//! Two perfect players share one search; the outcome must match the
//! solved value of the starting position.

use nim_solver::core::{PileState, Score};
use nim_solver::games::{Nim, SplitPile, TakeAway};
use nim_solver::play::{self_play, GameRecord, Side};
use nim_solver::rules::RulesEngine;
use nim_solver::search::{MinimaxSearch, SearchConfig};
use nim_solver::SolverError;

/// Checks every recorded move is legal and alternates seats.
fn assert_well_formed<R: RulesEngine>(rules: &R, record: &GameRecord) {
    let mut expected_side = Side::First;
    let mut state = record.start.clone();

    for turn in &record.turns {
        assert_eq!(turn.side, expected_side);
        assert_eq!(turn.from, state);
        assert!(
            rules.successors(&turn.from).any(|s| s == turn.to),
            "{} -> {} is not a legal move",
            turn.from,
            turn.to
        );
        state = turn.to.clone();
        expected_side = expected_side.other();
    }

    assert_eq!(state, record.final_state);
    assert!(rules.is_terminal(&record.final_state, true).is_some());
}

// =============================================================================
// Outcomes
// =============================================================================

#[test]
fn test_take_away_outcomes() {
    let mut search = MinimaxSearch::new(TakeAway::new(), SearchConfig::default());

    for n in 0..=21u32 {
        let record = self_play(&mut search, &PileState::single(n)).unwrap();
        assert_well_formed(search.engine(), &record);

        let expected = if n % 4 == 0 { Side::Second } else { Side::First };
        assert_eq!(record.winner, expected, "pile {n}");
    }
}

#[test]
fn test_nim_outcome_follows_solve() {
    let starts = [[1, 2, 3], [3, 4, 5], [2, 2, 0], [1, 5, 7], [0, 0, 1]];

    for counts in starts {
        let start = PileState::from_piles(&counts);
        let mut search = MinimaxSearch::new(Nim::new(), SearchConfig::default());

        let solved = search.solve(&start, true);
        let record = self_play(&mut search, &start).unwrap();
        assert_well_formed(search.engine(), &record);

        let expected = if solved.is_win() { Side::First } else { Side::Second };
        assert_eq!(record.winner, expected, "start {start}");
    }
}

#[test]
fn test_winner_predictions_are_all_wins() {
    let mut search = MinimaxSearch::new(Nim::new(), SearchConfig::default());
    let record = self_play(&mut search, &PileState::from_piles(&[3, 4, 5])).unwrap();

    assert_eq!(record.winner, Side::First);
    assert!(record
        .turns_by(Side::First)
        .all(|t| t.predicted == Score::MaximizerWins));
    assert!(record
        .turns_by(Side::Second)
        .all(|t| t.predicted == Score::MinimizerWins));
}

#[test]
fn test_split_pile_game() {
    let mut search = MinimaxSearch::new(SplitPile::new(), SearchConfig::default());

    let record = self_play(&mut search, &PileState::single(7)).unwrap();
    assert_well_formed(search.engine(), &record);
    assert_eq!(record.winner, Side::Second);

    let record = self_play(&mut search, &PileState::single(8)).unwrap();
    assert_well_formed(search.engine(), &record);
    assert_eq!(record.winner, Side::First);
}

#[test]
fn test_misere_last_taker_loses() {
    let mut search = MinimaxSearch::new(Nim::misere(), SearchConfig::default());
    let record = self_play(&mut search, &PileState::from_piles(&[1, 1, 1])).unwrap();

    // Three single counters: first, second, first; the first player takes the last one.
    assert_eq!(record.len(), 3);
    assert_eq!(record.turns[2].side, Side::First);
    assert_eq!(record.winner, Side::Second);
}

// =============================================================================
// Errors and Serialization
// =============================================================================

#[test]
fn test_invalid_start_rejected() {
    let mut search = MinimaxSearch::new(TakeAway::new(), SearchConfig::default());
    let err = self_play(&mut search, &PileState::from_piles(&[3, 3])).unwrap_err();
    assert!(matches!(err, SolverError::InvalidState { .. }));
}

#[test]
fn test_record_serialization() {
    let mut search = MinimaxSearch::new(Nim::new(), SearchConfig::default());
    let record = self_play(&mut search, &PileState::from_piles(&[2, 3])).unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let deserialized: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, deserialized);
}
