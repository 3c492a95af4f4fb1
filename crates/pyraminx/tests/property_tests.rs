//! Property-based tests for the move engine.
//!
//! These tests use proptest to check that puzzle invariants hold across
//! arbitrary move sequences.

use proptest::prelude::*;
use pyraminx::{Color, FaceId, Move, Puzzle, MOVE_COUNT};

prop_compose! {
    fn move_sequence(max_len: usize)(ids in prop::collection::vec(0..MOVE_COUNT, 0..max_len)) -> Vec<u32> {
        ids
    }
}

fn scrambled(ids: &[u32]) -> Puzzle {
    let mut puzzle = Puzzle::new();
    for &id in ids {
        puzzle.apply_move_id(id).unwrap();
    }
    puzzle
}

proptest! {
    #[test]
    fn facelets_are_conserved(ids in move_sequence(60)) {
        let puzzle = scrambled(&ids);
        let mut total = 0;
        for id in FaceId::ALL {
            let count = puzzle.face(id).facelets().len();
            prop_assert_eq!(count, 16);
            total += count;
        }
        prop_assert_eq!(total, 64);
    }

    #[test]
    fn color_multiset_is_conserved(ids in move_sequence(60)) {
        let puzzle = scrambled(&ids);
        prop_assert_eq!(puzzle.color_counts(), [16, 16, 16, 16]);
    }

    #[test]
    fn occupancy_stays_a_bijection(ids in move_sequence(60)) {
        let puzzle = scrambled(&ids);
        prop_assert!(puzzle.check_invariants().is_ok());
    }

    #[test]
    fn inverse_restores_state(ids in move_sequence(30), id in 0..MOVE_COUNT) {
        let mut puzzle = scrambled(&ids);
        let before = puzzle.snapshot();
        let mv = puzzle.apply_move_id(id).unwrap();
        puzzle.apply_move(mv.inverse()).unwrap();
        prop_assert_eq!(puzzle.snapshot(), before);
    }

    #[test]
    fn reversed_inverse_sequence_solves(ids in move_sequence(40)) {
        let mut puzzle = scrambled(&ids);
        for &id in ids.iter().rev() {
            let mv = Move::from_id(id).unwrap();
            puzzle.apply_move(mv.inverse()).unwrap();
        }
        prop_assert!(puzzle.is_solved());
        prop_assert_eq!(puzzle.snapshot(), Puzzle::new().snapshot());
        prop_assert_eq!(puzzle.heuristic(), 0);
    }

    #[test]
    fn history_grows_with_each_touch(ids in move_sequence(20)) {
        let puzzle = scrambled(&ids);
        for face in puzzle.faces() {
            for facelet in face.facelets() {
                prop_assert!(!facelet.history().is_empty());
                prop_assert!(facelet.history().len() <= ids.len() + 1);
            }
        }
    }

    #[test]
    fn history_limit_is_respected(ids in move_sequence(40), limit in 1usize..5) {
        let mut puzzle = Puzzle::with_history_limit(Some(limit));
        for &id in &ids {
            puzzle.apply_move_id(id).unwrap();
        }
        for face in puzzle.faces() {
            for facelet in face.facelets() {
                prop_assert!(facelet.history().len() <= limit);
                prop_assert!(facelet.current_position().is_some());
            }
        }
        // Bounding history never changes colors or current positions
        prop_assert_eq!(puzzle.snapshot(), scrambled(&ids).snapshot());
    }

    #[test]
    fn heuristic_is_bounded(ids in move_sequence(60)) {
        let puzzle = scrambled(&ids);
        // At most 12 misplaced per face (dominant color holds at least 4)
        prop_assert!(puzzle.heuristic() <= 3);
    }

    #[test]
    fn out_of_range_ids_are_rejected(id in MOVE_COUNT..u32::MAX) {
        let mut puzzle = Puzzle::new();
        prop_assert!(puzzle.apply_move_id(id).is_err());
        prop_assert!(puzzle.is_solved());
    }
}

#[test]
fn single_moves_score_at_most_one() {
    for id in 0..MOVE_COUNT {
        let mut puzzle = Puzzle::new();
        puzzle.apply_move_id(id).unwrap();
        assert!(puzzle.heuristic() <= 1, "move {id}");
        for face in FaceId::ALL {
            assert_eq!(puzzle.face(face).dominant_color(), face.home_color());
        }
    }
}

#[test]
fn solved_state_scenario() {
    let puzzle = Puzzle::new();
    assert_eq!(puzzle.heuristic(), 0);
    for id in FaceId::ALL {
        let face = puzzle.face(id);
        assert_eq!(face.dominant_color(), id.home_color());
        assert_eq!(face.count_misplaced(), 0);
    }
    assert_eq!(puzzle.face(FaceId::Front).dominant_color(), Color::Red);
}
