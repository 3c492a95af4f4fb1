//! Scramble driver: draws move ids from a selector and applies them.
//!
//! The driver does not care where move ids come from. [`RandomSelector`] is
//! the uniform source used by the CLI; tests feed fixed sequences.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::PuzzleError;
use crate::moves::{apply_id, Move, MOVE_COUNT};
use crate::puzzle::Puzzle;

/// Source of move ids.
///
/// Ids are not validated here: the driver passes every id to [`apply_id`],
/// which rejects anything outside `0..32`. A finite source signals that it
/// has run dry by returning such an id ([`SequenceSelector`] returns
/// [`MOVE_COUNT`]), which ends the run with
/// [`PuzzleError::MoveIdOutOfRange`].
pub trait MoveSelector {
    fn next_move_id(&mut self) -> u32;
}

/// Uniform random move ids
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Seeded selector; the same seed always yields the same ids
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn next_move_id(&mut self) -> u32 {
        self.rng.gen_range(0..MOVE_COUNT)
    }
}

/// Replays a fixed list of ids, then reports an out-of-range id.
#[derive(Debug, Clone)]
pub struct SequenceSelector {
    ids: Vec<u32>,
    next: usize,
}

impl SequenceSelector {
    pub fn new(ids: Vec<u32>) -> Self {
        Self { ids, next: 0 }
    }
}

impl MoveSelector for SequenceSelector {
    fn next_move_id(&mut self) -> u32 {
        let id = self.ids.get(self.next).copied().unwrap_or(MOVE_COUNT);
        self.next += 1;
        id
    }
}

/// Configuration for a scramble run
#[derive(Debug, Clone, Default)]
pub struct ScrambleConfig {
    /// Number of moves to apply
    pub count: usize,
    /// Seed for the random selector; fresh entropy when `None`
    pub seed: Option<u64>,
    /// Maximum history entries kept per facelet; unbounded when `None`
    pub history_limit: Option<usize>,
}

impl ScrambleConfig {
    pub fn selector(&self) -> RandomSelector {
        match self.seed {
            Some(seed) => RandomSelector::seeded(seed),
            None => RandomSelector::from_entropy(),
        }
    }

    pub fn puzzle(&self) -> Puzzle {
        Puzzle::with_history_limit(self.history_limit)
    }
}

/// One applied move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub id: u32,
    pub name: String,
}

/// Result of a scramble run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrambleReport {
    pub heuristic_before: usize,
    pub heuristic_after: usize,
    pub moves: Vec<MoveRecord>,
}

/// Upper bound on the records reserved up front; longer runs grow on demand.
const RESERVE_LIMIT: usize = 1024;

/// Apply `count` moves drawn from `selector`. Stops at the first rejected id;
/// moves applied before it stay applied.
pub fn scramble<S: MoveSelector>(
    puzzle: &mut Puzzle,
    selector: &mut S,
    count: usize,
) -> Result<ScrambleReport, PuzzleError> {
    let heuristic_before = puzzle.heuristic();
    let mut moves = Vec::with_capacity(count.min(RESERVE_LIMIT));

    for step in 0..count {
        let id = selector.next_move_id();
        let mv: Move = apply_id(puzzle, id)?;
        debug!("step {step}: {mv} (id {id})");
        moves.push(MoveRecord {
            id,
            name: mv.to_string(),
        });
    }

    let heuristic_after = puzzle.heuristic();
    debug!("scramble of {count} moves: heuristic {heuristic_before} -> {heuristic_after}");

    Ok(ScrambleReport {
        heuristic_before,
        heuristic_after,
        moves,
    })
}
