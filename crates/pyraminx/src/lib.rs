//! Pyraminx puzzle model and move engine.
//!
//! This crate models the four faces of a Pyraminx, applies the 32 directed
//! moves through a static wiring table and scores scrambles with a coarse
//! misplaced-facelet heuristic. Rendering and random move selection live in
//! their own modules and are only used by the CLI.

pub mod error;
pub mod heuristic;
pub mod moves;
pub mod puzzle;
pub mod render;
pub mod scramble;
pub mod topology;

// Re-export main types
pub use error::PuzzleError;
pub use heuristic::{estimate, HEURISTIC_DIVISOR};
pub use moves::{apply, apply_id, Direction, Move, MoveFamily, MOVE_COUNT};
pub use puzzle::{
    Color, Face, FaceId, FaceSnapshot, Facelet, PositionId, Puzzle, PuzzleSnapshot, Slot,
};
pub use scramble::{
    scramble, MoveRecord, MoveSelector, RandomSelector, ScrambleConfig, ScrambleReport,
    SequenceSelector,
};
