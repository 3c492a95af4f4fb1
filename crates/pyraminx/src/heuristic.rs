//! Coarse scramble-distance estimate.
//!
//! Each face elects its dominant color, every facelet that disagrees with it
//! counts as misplaced, and the puzzle-wide total is divided by
//! [`HEURISTIC_DIVISOR`] rounding up. The result is a progress signal only; it
//! is not an admissible bound for a search.

use crate::puzzle::{Face, Puzzle};

/// Normalization constant for the misplaced-facelet total. Empirical.
pub const HEURISTIC_DIVISOR: usize = 21;

/// Misplaced facelets over all four faces
pub fn misplaced_total(puzzle: &Puzzle) -> usize {
    puzzle.faces().iter().map(Face::count_misplaced).sum()
}

/// Heuristic score: `ceil(misplaced_total / 21)`. Zero exactly when every face
/// is monochrome.
pub fn estimate(puzzle: &Puzzle) -> usize {
    misplaced_total(puzzle).div_ceil(HEURISTIC_DIVISOR)
}

impl Puzzle {
    pub fn heuristic(&self) -> usize {
        estimate(self)
    }
}
