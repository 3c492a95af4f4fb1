//! Move engine: the 16 move families, their two directions and the
//! table-driven application of a move to a puzzle.
//!
//! A move first captures the color and current position of every slot it
//! touches, then rewrites them all. Nothing is written if the capture fails,
//! so a move is never observed half applied.

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::PuzzleError;
use crate::puzzle::{Color, PositionId, Puzzle, FACELETS_PER_FACE};
use crate::topology::{face_slots, MoveWiring, WIRING};

/// Number of directed moves; valid move ids are `0..MOVE_COUNT`.
pub const MOVE_COUNT: u32 = 32;

/// Turn direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Direction::Clockwise => "cw",
            Direction::CounterClockwise => "ccw",
        }
    }
}

/// Move family, in dispatch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveFamily {
    TopTip,
    LeftTip,
    RightTip,
    BackTip,
    FrontSecondRow,
    LeftSecondRow,
    RightSecondRow,
    BottomSecondRow,
    FrontThirdRow,
    LeftThirdRow,
    RightThirdRow,
    BottomThirdRow,
    FrontFourthRow,
    LeftFourthRow,
    RightFourthRow,
    BottomFourthRow,
}

impl MoveFamily {
    pub const ALL: [MoveFamily; 16] = [
        MoveFamily::TopTip,
        MoveFamily::LeftTip,
        MoveFamily::RightTip,
        MoveFamily::BackTip,
        MoveFamily::FrontSecondRow,
        MoveFamily::LeftSecondRow,
        MoveFamily::RightSecondRow,
        MoveFamily::BottomSecondRow,
        MoveFamily::FrontThirdRow,
        MoveFamily::LeftThirdRow,
        MoveFamily::RightThirdRow,
        MoveFamily::BottomThirdRow,
        MoveFamily::FrontFourthRow,
        MoveFamily::LeftFourthRow,
        MoveFamily::RightFourthRow,
        MoveFamily::BottomFourthRow,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn wiring(self) -> &'static MoveWiring {
        &WIRING[self.index()]
    }

    /// Check if this family also turns a whole face
    pub fn is_fourth_row(self) -> bool {
        self.wiring().twist.is_some()
    }

    pub fn short_name(self) -> &'static str {
        match self {
            MoveFamily::TopTip => "top-tip",
            MoveFamily::LeftTip => "left-tip",
            MoveFamily::RightTip => "right-tip",
            MoveFamily::BackTip => "back-tip",
            MoveFamily::FrontSecondRow => "front-2",
            MoveFamily::LeftSecondRow => "left-2",
            MoveFamily::RightSecondRow => "right-2",
            MoveFamily::BottomSecondRow => "bottom-2",
            MoveFamily::FrontThirdRow => "front-3",
            MoveFamily::LeftThirdRow => "left-3",
            MoveFamily::RightThirdRow => "right-3",
            MoveFamily::BottomThirdRow => "bottom-3",
            MoveFamily::FrontFourthRow => "front-4",
            MoveFamily::LeftFourthRow => "left-4",
            MoveFamily::RightFourthRow => "right-4",
            MoveFamily::BottomFourthRow => "bottom-4",
        }
    }
}

/// A directed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub family: MoveFamily,
    pub direction: Direction,
}

impl Move {
    pub fn new(family: MoveFamily, direction: Direction) -> Self {
        Self { family, direction }
    }

    /// Decode a move id: `family * 2`, plus one for counter-clockwise.
    pub fn from_id(id: u32) -> Result<Self, PuzzleError> {
        if id >= MOVE_COUNT {
            return Err(PuzzleError::MoveIdOutOfRange { id });
        }
        let direction = if id % 2 == 0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        Ok(Self::new(MoveFamily::ALL[(id / 2) as usize], direction))
    }

    pub fn id(self) -> u32 {
        let offset = match self.direction {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
        };
        self.family.index() as u32 * 2 + offset
    }

    /// The same family turned the other way
    pub fn inverse(self) -> Self {
        Self::new(self.family, self.direction.reverse())
    }

    /// All 32 moves in id order
    pub fn all() -> impl Iterator<Item = Move> {
        MoveFamily::ALL.into_iter().flat_map(|family| {
            [Direction::Clockwise, Direction::CounterClockwise]
                .into_iter()
                .map(move |direction| Move::new(family, direction))
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family.short_name(), self.direction.short_name())
    }
}

/// Contents of one slot captured before a move writes anything
type Captured = (Color, PositionId);

/// Apply a move to the puzzle in place
pub fn apply(puzzle: &mut Puzzle, mv: Move) -> Result<(), PuzzleError> {
    let wiring = mv.family.wiring();
    let [band_a, band_b, band_c] = wiring.bands;

    let mut cycles: SmallVec<[[Captured; 3]; 7]> = SmallVec::with_capacity(wiring.width());
    for i in 0..wiring.width() {
        cycles.push([
            puzzle.read_slot(band_a[i])?,
            puzzle.read_slot(band_b[i])?,
            puzzle.read_slot(band_c[i])?,
        ]);
    }

    let mut twisted: SmallVec<[Captured; FACELETS_PER_FACE]> = SmallVec::new();
    if let Some(twist) = wiring.twist {
        for slot in face_slots(twist.face) {
            twisted.push(puzzle.read_slot(slot)?);
        }
    }

    trace!("applying {mv} (id {})", mv.id());

    for (i, mut values) in cycles.into_iter().enumerate() {
        // Clockwise: A <- C, B <- A, C <- B
        match mv.direction {
            Direction::Clockwise => values.rotate_right(1),
            Direction::CounterClockwise => values.rotate_left(1),
        }
        for (band, (color, position)) in [band_a, band_b, band_c].into_iter().zip(values) {
            puzzle.write_slot(band[i], color, position);
        }
    }

    if let Some(twist) = wiring.twist {
        let table = match mv.direction {
            Direction::Clockwise => twist.clockwise,
            Direction::CounterClockwise => twist.counter_clockwise,
        };
        for (slot, &source) in face_slots(twist.face).zip(table.iter()) {
            let (color, position) = twisted[source];
            puzzle.write_slot(slot, color, position);
        }
    }

    Ok(())
}

/// Decode a move id and apply it. Out-of-range ids are rejected and leave the
/// puzzle untouched.
pub fn apply_id(puzzle: &mut Puzzle, id: u32) -> Result<Move, PuzzleError> {
    let mv = Move::from_id(id)?;
    apply(puzzle, mv)?;
    Ok(mv)
}

impl Puzzle {
    pub fn apply_move(&mut self, mv: Move) -> Result<(), PuzzleError> {
        apply(self, mv)
    }

    pub fn apply_move_id(&mut self, id: u32) -> Result<Move, PuzzleError> {
        apply_id(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{FaceId, Slot};

    fn slot_state(puzzle: &Puzzle, slot: Slot) -> (Color, PositionId) {
        let facelet = puzzle.facelet(slot).unwrap();
        (facelet.color(), facelet.current_position().unwrap())
    }

    /// Puzzle where every slot is distinguishable by position, scrambled a bit
    /// so colors differ across each band.
    fn mixed_puzzle() -> Puzzle {
        let mut puzzle = Puzzle::new();
        for id in [24, 7, 17, 26, 10, 31, 20, 13] {
            puzzle.apply_move_id(id).unwrap();
        }
        puzzle
    }

    #[test]
    fn test_move_id_round_trip() {
        for (expected, mv) in Move::all().enumerate() {
            assert_eq!(mv.id(), expected as u32);
            assert_eq!(Move::from_id(mv.id()).unwrap(), mv);
        }
        assert_eq!(Move::all().count(), 32);
    }

    #[test]
    fn test_dispatch_mapping() {
        let mv = Move::from_id(0).unwrap();
        assert_eq!(mv, Move::new(MoveFamily::TopTip, Direction::Clockwise));

        let mv = Move::from_id(25).unwrap();
        assert_eq!(mv, Move::new(MoveFamily::FrontFourthRow, Direction::CounterClockwise));

        let mv = Move::from_id(31).unwrap();
        assert_eq!(mv, Move::new(MoveFamily::BottomFourthRow, Direction::CounterClockwise));
        assert_eq!(mv.to_string(), "bottom-4 ccw");
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut puzzle = Puzzle::new();
        let before = puzzle.clone();
        assert_eq!(
            puzzle.apply_move_id(32),
            Err(PuzzleError::MoveIdOutOfRange { id: 32 })
        );
        assert_eq!(
            puzzle.apply_move_id(u32::MAX),
            Err(PuzzleError::MoveIdOutOfRange { id: u32::MAX })
        );
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_top_tip_clockwise() {
        let mut puzzle = mixed_puzzle();
        let before = puzzle.clone();

        let front = Slot::new(FaceId::Front, 0, 0);
        let left = Slot::new(FaceId::Left, 3, 0);
        let right = Slot::new(FaceId::Right, 3, 6);

        let mv = puzzle.apply_move_id(0).unwrap();
        assert_eq!(mv, Move::new(MoveFamily::TopTip, Direction::Clockwise));

        assert_eq!(slot_state(&puzzle, left), slot_state(&before, front));
        assert_eq!(slot_state(&puzzle, right), slot_state(&before, left));
        assert_eq!(slot_state(&puzzle, front), slot_state(&before, right));

        let mut unchanged = 0;
        for face in FaceId::ALL {
            for slot in face_slots(face) {
                if slot == front || slot == left || slot == right {
                    continue;
                }
                assert_eq!(puzzle.facelet(slot), before.facelet(slot), "{slot}");
                unchanged += 1;
            }
        }
        assert_eq!(unchanged, 61);
    }

    #[test]
    fn test_top_tip_on_solved_state() {
        let mut puzzle = Puzzle::new();
        puzzle.apply_move_id(0).unwrap();

        let left = puzzle.facelet(Slot::new(FaceId::Left, 3, 0)).unwrap();
        assert_eq!(left.color(), Color::Red);
        assert_eq!(left.history().len(), 2);
        assert_eq!(left.current_position(), Some(PositionId::new(FaceId::Front, 0)));

        let right = puzzle.facelet(Slot::new(FaceId::Right, 3, 6)).unwrap();
        assert_eq!(right.color(), Color::Green);

        let front = puzzle.facelet(Slot::new(FaceId::Front, 0, 0)).unwrap();
        assert_eq!(front.color(), Color::Yellow);
    }

    #[test]
    fn test_counter_clockwise_mirrors() {
        let mut puzzle = mixed_puzzle();
        let before = puzzle.clone();
        puzzle
            .apply_move(Move::new(MoveFamily::FrontSecondRow, Direction::CounterClockwise))
            .unwrap();

        let wiring = MoveFamily::FrontSecondRow.wiring();
        let [a, b, c] = wiring.bands;
        for i in 0..3 {
            assert_eq!(slot_state(&puzzle, a[i]), slot_state(&before, b[i]));
            assert_eq!(slot_state(&puzzle, b[i]), slot_state(&before, c[i]));
            assert_eq!(slot_state(&puzzle, c[i]), slot_state(&before, a[i]));
        }
    }

    #[test]
    fn test_every_move_is_undone_by_its_inverse() {
        for mv in Move::all() {
            let mut puzzle = mixed_puzzle();
            let before = puzzle.snapshot();
            puzzle.apply_move(mv).unwrap();
            puzzle.apply_move(mv.inverse()).unwrap();
            assert_eq!(puzzle.snapshot(), before, "{mv}");
        }
    }

    #[test]
    fn test_front_fourth_row_round_trip() {
        let mut puzzle = mixed_puzzle();
        let before = puzzle.snapshot();
        puzzle.apply_move_id(24).unwrap();
        assert_ne!(puzzle.snapshot(), before);
        puzzle.apply_move_id(25).unwrap();
        assert_eq!(puzzle.snapshot(), before);
    }

    #[test]
    fn test_fourth_row_twists_opposite_face() {
        let mut puzzle = Puzzle::new();
        puzzle.apply_move_id(24).unwrap();

        // Bottom stays monochrome but every slot carries a rotated position
        let bottom = puzzle.face(FaceId::Bottom);
        assert!(bottom.is_solved());
        let tip = bottom.facelet(0, 0).unwrap();
        assert_eq!(tip.current_position(), Some(PositionId::new(FaceId::Bottom, 9)));
        assert_eq!(tip.history().len(), 2);

        // The front base row now holds right-face colors
        let front = puzzle.face(FaceId::Front);
        assert_eq!(front.count_color(Color::Yellow), 7);
        assert_eq!(front.count_color(Color::Red), 9);
    }

    #[test]
    fn test_three_turns_are_identity() {
        for mv in Move::all() {
            let mut puzzle = mixed_puzzle();
            let before = puzzle.snapshot();
            for _ in 0..3 {
                puzzle.apply_move(mv).unwrap();
            }
            assert_eq!(puzzle.snapshot(), before, "{mv}");
        }
    }

    #[test]
    fn test_moves_preserve_invariants() {
        let mut puzzle = Puzzle::new();
        for mv in Move::all() {
            puzzle.apply_move(mv).unwrap();
            assert!(puzzle.check_invariants().is_ok(), "{mv}");
            assert_eq!(puzzle.color_counts(), [16, 16, 16, 16]);
        }
    }

    #[test]
    fn test_empty_history_aborts_whole_move() {
        let mut puzzle = mixed_puzzle();
        let emptied = Slot::new(FaceId::Right, 3, 6);

        // Drain the history of one slot touched by the top tip
        while puzzle.pop_slot_position(emptied).is_some() {}
        let before = puzzle.clone();

        assert_eq!(
            puzzle.apply_move_id(0),
            Err(PuzzleError::EmptyHistory {
                position: emptied.position_id()
            })
        );
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_history_limit_bounds_trail() {
        let mut puzzle = Puzzle::with_history_limit(Some(3));
        for _ in 0..10 {
            puzzle.apply_move_id(0).unwrap();
        }
        let tip = puzzle.facelet(Slot::new(FaceId::Front, 0, 0)).unwrap();
        assert_eq!(tip.history().len(), 3);
        // Ten clockwise tip turns leave the tip one step past solved
        assert_eq!(tip.color(), Color::Yellow);
        assert!(puzzle.check_invariants().is_ok());
    }
}
