//! Static wiring of the puzzle: which slots every move family cycles.
//!
//! Each move family is three bands of `k` slots on three different faces. For
//! row families band A is the turning face's own row and bands B and C are the
//! matching slots on two neighbouring faces, listed so that `A[i]`, `B[i]` and
//! `C[i]` form one 3-cycle. A clockwise turn
//! moves A into B, B into C and C into A.
//!
//! Fourth-row families also turn the whole opposite face by 120 degrees using
//! one of the two shared [`RotationTable`]s.

use crate::puzzle::{FaceId, Slot, FACELETS_PER_FACE};

/// A face permutation over linearized slots: `new[i] = old[table[i]]`.
pub type RotationTable = [usize; FACELETS_PER_FACE];

pub const ROTATE_A: RotationTable = [9, 11, 10, 4, 13, 12, 6, 5, 1, 15, 14, 8, 7, 3, 2, 0];
pub const ROTATE_B: RotationTable = [15, 8, 14, 13, 3, 7, 6, 12, 11, 0, 2, 1, 5, 4, 10, 9];

/// Whole-face rotation performed by a fourth-row move.
#[derive(Debug, Clone, Copy)]
pub struct FaceTwist {
    pub face: FaceId,
    pub clockwise: &'static RotationTable,
    pub counter_clockwise: &'static RotationTable,
}

/// Wiring of one move family.
#[derive(Debug, Clone, Copy)]
pub struct MoveWiring {
    pub bands: [&'static [Slot]; 3],
    pub twist: Option<FaceTwist>,
}

impl MoveWiring {
    /// Facelets per band
    pub fn width(&self) -> usize {
        self.bands[0].len()
    }

    /// Every slot this move rewrites, twist included
    pub fn touched_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        let twisted = self.twist.into_iter().flat_map(|t| face_slots(t.face));
        self.bands.iter().flat_map(|b| b.iter().copied()).chain(twisted)
    }
}

/// Slots of a face in linearized order
pub fn face_slots(face: FaceId) -> impl Iterator<Item = Slot> {
    (0u8..4).flat_map(move |row| (0..2 * row + 1).map(move |col| Slot::new(face, row, col)))
}

const fn f(row: u8, col: u8) -> Slot {
    Slot::new(FaceId::Front, row, col)
}
const fn l(row: u8, col: u8) -> Slot {
    Slot::new(FaceId::Left, row, col)
}
const fn r(row: u8, col: u8) -> Slot {
    Slot::new(FaceId::Right, row, col)
}
const fn b(row: u8, col: u8) -> Slot {
    Slot::new(FaceId::Bottom, row, col)
}

// Tips
const TOP_TIP: MoveWiring = MoveWiring {
    bands: [&[f(0, 0)], &[l(3, 0)], &[r(3, 6)]],
    twist: None,
};
const LEFT_TIP: MoveWiring = MoveWiring {
    bands: [&[l(0, 0)], &[f(3, 0)], &[b(3, 0)]],
    twist: None,
};
const RIGHT_TIP: MoveWiring = MoveWiring {
    bands: [&[b(3, 6)], &[f(3, 6)], &[r(0, 0)]],
    twist: None,
};
const BACK_TIP: MoveWiring = MoveWiring {
    bands: [&[b(0, 0)], &[r(3, 0)], &[l(3, 6)]],
    twist: None,
};

// Second rows
const FRONT_SECOND: MoveWiring = MoveWiring {
    bands: [
        &[f(1, 0), f(1, 1), f(1, 2)],
        &[l(3, 2), l(3, 1), l(2, 0)],
        &[r(2, 4), r(3, 5), r(3, 4)],
    ],
    twist: None,
};
const LEFT_SECOND: MoveWiring = MoveWiring {
    bands: [
        &[l(1, 0), l(1, 1), l(1, 2)],
        &[f(3, 2), f(3, 1), f(2, 0)],
        &[b(2, 0), b(3, 1), b(3, 2)],
    ],
    twist: None,
};
const RIGHT_SECOND: MoveWiring = MoveWiring {
    bands: [
        &[r(1, 0), r(1, 1), r(1, 2)],
        &[b(2, 4), b(3, 5), b(3, 4)],
        &[f(3, 5), f(3, 4), f(2, 4)],
    ],
    twist: None,
};
const BOTTOM_SECOND: MoveWiring = MoveWiring {
    bands: [
        &[b(1, 0), b(1, 1), b(1, 2)],
        &[r(2, 0), r(3, 1), r(3, 2)],
        &[l(2, 4), l(3, 4), l(3, 5)],
    ],
    twist: None,
};

// Third rows
const FRONT_THIRD: MoveWiring = MoveWiring {
    bands: [
        &[f(2, 0), f(2, 1), f(2, 2), f(2, 3), f(2, 4)],
        &[l(3, 4), l(3, 3), l(2, 2), l(2, 1), l(1, 0)],
        &[r(1, 2), r(2, 3), r(2, 2), r(3, 3), r(3, 2)],
    ],
    twist: None,
};
const LEFT_THIRD: MoveWiring = MoveWiring {
    bands: [
        &[l(2, 0), l(2, 1), l(2, 2), l(2, 3), l(2, 4)],
        &[b(3, 4), b(3, 3), b(2, 2), b(2, 1), b(1, 0)],
        &[f(3, 4), f(3, 3), f(2, 2), f(2, 1), f(1, 0)],
    ],
    twist: None,
};
const RIGHT_THIRD: MoveWiring = MoveWiring {
    bands: [
        &[r(2, 0), r(2, 1), r(2, 2), r(2, 3), r(2, 4)],
        &[f(1, 2), f(2, 3), f(2, 2), f(3, 3), f(3, 2)],
        &[b(3, 2), b(3, 3), b(2, 2), b(2, 3), b(1, 2)],
    ],
    twist: None,
};
const BOTTOM_THIRD: MoveWiring = MoveWiring {
    bands: [
        &[b(2, 0), b(2, 1), b(2, 2), b(2, 3), b(2, 4)],
        &[l(3, 2), l(3, 3), l(2, 2), l(2, 3), l(1, 2)],
        &[r(1, 0), r(2, 1), r(2, 2), r(3, 3), r(3, 4)],
    ],
    twist: None,
};

// Fourth rows
const FRONT_FOURTH: MoveWiring = MoveWiring {
    bands: [
        &[f(3, 0), f(3, 1), f(3, 2), f(3, 3), f(3, 4), f(3, 5), f(3, 6)],
        &[l(3, 6), l(3, 5), l(2, 4), l(2, 3), l(1, 2), l(1, 1), l(0, 0)],
        &[r(0, 0), r(1, 1), r(1, 0), r(2, 1), r(2, 0), r(3, 1), r(3, 0)],
    ],
    twist: Some(FaceTwist {
        face: FaceId::Bottom,
        clockwise: &ROTATE_A,
        counter_clockwise: &ROTATE_B,
    }),
};
const LEFT_FOURTH: MoveWiring = MoveWiring {
    bands: [
        &[l(3, 0), l(3, 1), l(3, 2), l(3, 3), l(3, 4), l(3, 5), l(3, 6)],
        &[f(3, 6), f(3, 5), f(2, 4), f(2, 3), f(1, 2), f(1, 1), f(0, 0)],
        &[b(0, 0), b(1, 1), b(1, 2), b(2, 3), b(2, 4), b(3, 5), b(3, 6)],
    ],
    twist: Some(FaceTwist {
        face: FaceId::Right,
        clockwise: &ROTATE_B,
        counter_clockwise: &ROTATE_A,
    }),
};
const RIGHT_FOURTH: MoveWiring = MoveWiring {
    bands: [
        &[r(3, 0), r(3, 1), r(3, 2), r(3, 3), r(3, 4), r(3, 5), r(3, 6)],
        &[b(3, 0), b(3, 1), b(2, 0), b(2, 1), b(1, 0), b(1, 1), b(0, 0)],
        &[f(0, 0), f(1, 1), f(1, 0), f(2, 1), f(2, 0), f(3, 1), f(3, 0)],
    ],
    twist: Some(FaceTwist {
        face: FaceId::Left,
        clockwise: &ROTATE_B,
        counter_clockwise: &ROTATE_A,
    }),
};
const BOTTOM_FOURTH: MoveWiring = MoveWiring {
    bands: [
        &[b(3, 0), b(3, 1), b(3, 2), b(3, 3), b(3, 4), b(3, 5), b(3, 6)],
        &[l(3, 0), l(3, 1), l(2, 0), l(2, 1), l(1, 0), l(1, 1), l(0, 0)],
        &[r(0, 0), r(1, 1), r(1, 2), r(2, 3), r(2, 4), r(3, 5), r(3, 6)],
    ],
    twist: Some(FaceTwist {
        face: FaceId::Front,
        clockwise: &ROTATE_A,
        counter_clockwise: &ROTATE_B,
    }),
};

/// Wiring for every move family, in dispatch order.
pub const WIRING: [MoveWiring; 16] = [
    TOP_TIP,
    LEFT_TIP,
    RIGHT_TIP,
    BACK_TIP,
    FRONT_SECOND,
    LEFT_SECOND,
    RIGHT_SECOND,
    BOTTOM_SECOND,
    FRONT_THIRD,
    LEFT_THIRD,
    RIGHT_THIRD,
    BOTTOM_THIRD,
    FRONT_FOURTH,
    LEFT_FOURTH,
    RIGHT_FOURTH,
    BOTTOM_FOURTH,
];
