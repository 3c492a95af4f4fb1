//! Puzzle representation: colors, faces, slots and the facelets that occupy them.
//!
//! A face holds 16 facelets in four rows of 1, 3, 5 and 7. Facelets are stored
//! in linearized slot order (row-major), so the slot offset of `(row, col)` is
//! `row * row + col`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

/// Number of faces on the puzzle.
pub const FACE_COUNT: usize = 4;
/// Number of rows on each face.
pub const ROW_COUNT: usize = 4;
/// Number of facelets on each face.
pub const FACELETS_PER_FACE: usize = 16;
/// Number of facelets on the whole puzzle.
pub const TOTAL_FACELETS: usize = FACE_COUNT * FACELETS_PER_FACE;

/// Facelet color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Priority used to break ties when electing a face's dominant color.
    pub const TIE_BREAK_ORDER: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Single-letter label
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
        }
    }

    /// ANSI escape code for bright foreground text of this color
    pub fn ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[91m",
            Color::Green => "\x1b[92m",
            Color::Yellow => "\x1b[93m",
            Color::Blue => "\x1b[94m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Canonical face identity. The discriminant is the face index used in
/// position ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceId {
    Front = 0,
    Left = 1,
    Right = 2,
    Bottom = 3,
}

impl FaceId {
    pub const ALL: [FaceId; FACE_COUNT] = [FaceId::Front, FaceId::Left, FaceId::Right, FaceId::Bottom];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Color this face carries in the solved state
    pub fn home_color(self) -> Color {
        match self {
            FaceId::Front => Color::Red,
            FaceId::Left => Color::Green,
            FaceId::Right => Color::Yellow,
            FaceId::Bottom => Color::Blue,
        }
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaceId::Front => "front",
            FaceId::Left => "left",
            FaceId::Right => "right",
            FaceId::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Number of facelets in a row, or `None` for a row index past the base.
pub fn row_len(row: usize) -> Option<usize> {
    (row < ROW_COUNT).then(|| 2 * row + 1)
}

/// A physical slot on the puzzle, addressed by face, row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub face: FaceId,
    pub row: u8,
    pub col: u8,
}

impl Slot {
    pub const fn new(face: FaceId, row: u8, col: u8) -> Self {
        Self { face, row, col }
    }

    /// Offset of this slot within its face's linearized facelets
    pub const fn offset(self) -> usize {
        let row = self.row as usize;
        row * row + self.col as usize
    }

    /// Whether the row and column fall inside the triangular layout
    pub fn is_valid(self) -> bool {
        row_len(self.row as usize).is_some_and(|len| (self.col as usize) < len)
    }

    pub fn position_id(self) -> PositionId {
        PositionId::new(self.face, self.offset())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}][{}]", self.face, self.row, self.col)
    }
}

/// Stable id of one of the 64 facelet slots: `face_index * 16 + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PositionId(u8);

impl PositionId {
    /// Panics in debug builds if `offset` is not below 16.
    pub fn new(face: FaceId, offset: usize) -> Self {
        debug_assert!(offset < FACELETS_PER_FACE);
        Self((face.index() * FACELETS_PER_FACE + offset) as u8)
    }

    pub fn from_raw(raw: u8) -> Option<Self> {
        ((raw as usize) < TOTAL_FACELETS).then_some(Self(raw))
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    pub fn face(self) -> FaceId {
        FaceId::ALL[self.0 as usize / FACELETS_PER_FACE]
    }

    pub fn offset(self) -> usize {
        self.0 as usize % FACELETS_PER_FACE
    }

    /// Slot whose home id this is
    pub fn slot(self) -> Slot {
        let offset = self.offset();
        let row = (0..ROW_COUNT).rev().find(|r| r * r <= offset).unwrap_or(0);
        Slot::new(self.face(), row as u8, (offset - row * row) as u8)
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single colored triangle and the trail of positions it has carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facelet {
    color: Color,
    history: Vec<PositionId>,
}

impl Facelet {
    pub fn new(color: Color, home: PositionId) -> Self {
        Self {
            color,
            history: vec![home],
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Append a new current position; earlier entries are kept.
    pub fn push_position(&mut self, position: PositionId) {
        self.history.push(position);
    }

    /// Remove the current position. No move uses this.
    pub fn pop_position(&mut self) -> Option<PositionId> {
        self.history.pop()
    }

    /// Top of the history, `None` only if the history was emptied by hand.
    pub fn current_position(&self) -> Option<PositionId> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[PositionId] {
        &self.history
    }

    /// Drop the oldest entries so at most `keep` remain (never fewer than one).
    pub fn trim_history(&mut self, keep: usize) {
        let keep = keep.max(1);
        if self.history.len() > keep {
            let excess = self.history.len() - keep;
            self.history.drain(..excess);
        }
    }
}

/// One triangular face: 16 facelets in rows of 1, 3, 5 and 7.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    id: FaceId,
    facelets: Vec<Facelet>,
}

impl Face {
    /// Monochrome face in its home color with every facelet seeded with its
    /// own position id.
    pub fn solved(id: FaceId) -> Self {
        let color = id.home_color();
        let facelets = (0..FACELETS_PER_FACE)
            .map(|offset| Facelet::new(color, PositionId::new(id, offset)))
            .collect();
        Self { id, facelets }
    }

    pub fn id(&self) -> FaceId {
        self.id
    }

    /// Facelets of row `index` (0 = tip, 3 = base)
    pub fn row(&self, index: usize) -> Option<&[Facelet]> {
        let len = row_len(index)?;
        let start = index * index;
        self.facelets.get(start..start + len)
    }

    /// Get the facelet at a row and column (bounds-checked)
    pub fn facelet(&self, row: usize, col: usize) -> Option<&Facelet> {
        self.row(row).and_then(|r| r.get(col))
    }

    /// All facelets in linearized slot order
    pub fn facelets(&self) -> &[Facelet] {
        &self.facelets
    }

    pub(crate) fn facelet_at_offset_mut(&mut self, offset: usize) -> &mut Facelet {
        &mut self.facelets[offset]
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.facelets.iter().filter(|f| f.color == color).count()
    }

    /// Majority color of the face. Ties go to the earlier color in
    /// [`Color::TIE_BREAK_ORDER`].
    pub fn dominant_color(&self) -> Color {
        let mut best = Color::TIE_BREAK_ORDER[0];
        let mut best_count = self.count_color(best);
        for &color in &Color::TIE_BREAK_ORDER[1..] {
            let count = self.count_color(color);
            if count > best_count {
                best = color;
                best_count = count;
            }
        }
        best
    }

    /// Count facelets that do not match the dominant color
    pub fn count_misplaced(&self) -> usize {
        let dominant = self.dominant_color();
        self.facelets.iter().filter(|f| f.color != dominant).count()
    }

    pub fn is_solved(&self) -> bool {
        let first = self.facelets[0].color;
        self.facelets.iter().all(|f| f.color == first)
    }
}

/// The whole puzzle: four faces plus the history retention policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    faces: [Face; FACE_COUNT],
    history_limit: Option<usize>,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl Puzzle {
    /// Solved puzzle with unbounded position history
    pub fn new() -> Self {
        Self::with_history_limit(None)
    }

    /// Solved puzzle keeping at most `limit` history entries per facelet
    pub fn with_history_limit(limit: Option<usize>) -> Self {
        Self {
            faces: FaceId::ALL.map(Face::solved),
            history_limit: limit,
        }
    }

    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    pub fn faces(&self) -> &[Face; FACE_COUNT] {
        &self.faces
    }

    pub fn facelet(&self, slot: Slot) -> Option<&Facelet> {
        if !slot.is_valid() {
            return None;
        }
        self.face(slot.face).facelets.get(slot.offset())
    }

    /// Color and current position of a slot.
    pub(crate) fn read_slot(&self, slot: Slot) -> Result<(Color, PositionId), PuzzleError> {
        let facelet = &self.faces[slot.face.index()].facelets[slot.offset()];
        let position = facelet
            .current_position()
            .ok_or(PuzzleError::EmptyHistory {
                position: slot.position_id(),
            })?;
        Ok((facelet.color, position))
    }

    /// Rewrite a slot: color and position always change together.
    pub(crate) fn write_slot(&mut self, slot: Slot, color: Color, position: PositionId) {
        let limit = self.history_limit;
        let facelet = self.faces[slot.face.index()].facelet_at_offset_mut(slot.offset());
        facelet.set_color(color);
        facelet.push_position(position);
        if let Some(keep) = limit {
            facelet.trim_history(keep);
        }
    }

    #[cfg(test)]
    pub(crate) fn pop_slot_position(&mut self, slot: Slot) -> Option<PositionId> {
        self.faces[slot.face.index()]
            .facelet_at_offset_mut(slot.offset())
            .pop_position()
    }

    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Face::is_solved)
    }

    /// Number of facelets of each color across the puzzle, in [`Color::ALL`] order.
    pub fn color_counts(&self) -> [usize; 4] {
        Color::ALL.map(|c| self.faces.iter().map(|f| f.count_color(c)).sum())
    }

    /// Check facelet conservation, that every current position is one of the
    /// 64 slots, and that current positions form a bijection over them.
    pub fn check_invariants(&self) -> Result<(), PuzzleError> {
        let mut claimed = [false; TOTAL_FACELETS];
        for face in &self.faces {
            if face.facelets.len() != FACELETS_PER_FACE {
                return Err(PuzzleError::FaceletCount {
                    face: face.id,
                    count: face.facelets.len(),
                });
            }
            for (offset, facelet) in face.facelets.iter().enumerate() {
                let position = facelet
                    .current_position()
                    .ok_or(PuzzleError::EmptyHistory {
                        position: PositionId::new(face.id, offset),
                    })?;
                let seen = claimed
                    .get_mut(position.raw() as usize)
                    .ok_or(PuzzleError::InvalidPosition { position })?;
                if *seen {
                    return Err(PuzzleError::DuplicatePosition { position });
                }
                *seen = true;
            }
        }
        Ok(())
    }

    /// Colors and current positions of every slot, without history
    pub fn snapshot(&self) -> PuzzleSnapshot {
        let faces = self
            .faces
            .iter()
            .map(|face| FaceSnapshot {
                face: face.id,
                colors: face.facelets.iter().map(Facelet::color).collect(),
                positions: face
                    .facelets
                    .iter()
                    .map(Facelet::current_position)
                    .collect(),
            })
            .collect();
        PuzzleSnapshot { faces }
    }
}

/// Serializable view of one face, in linearized slot order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceSnapshot {
    pub face: FaceId,
    pub colors: Vec<Color>,
    pub positions: Vec<Option<PositionId>>,
}

/// Comparable, serializable view of the whole puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleSnapshot {
    pub faces: Vec<FaceSnapshot>,
}
