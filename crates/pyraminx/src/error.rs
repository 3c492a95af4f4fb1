//! Error types for move dispatch and puzzle consistency checks.

use thiserror::Error;

use crate::puzzle::{FaceId, PositionId};

/// Errors raised by the move engine and by invariant checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// A move id outside `0..=31` reached the dispatch boundary.
    #[error("move id {id} out of range (expected 0..=31)")]
    MoveIdOutOfRange { id: u32 },

    /// A facelet had no recorded position. Construction always seeds one,
    /// so this is a defect rather than a recoverable condition.
    #[error("facelet at {position} has an empty position history")]
    EmptyHistory { position: PositionId },

    #[error("{face} face holds {count} facelets (expected 16)")]
    FaceletCount { face: FaceId, count: usize },

    #[error("position id {position} is outside the 64 slots")]
    InvalidPosition { position: PositionId },

    #[error("position id {position} is claimed by more than one slot")]
    DuplicatePosition { position: PositionId },
}
