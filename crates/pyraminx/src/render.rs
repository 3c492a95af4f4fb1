//! Unfolded text view of the puzzle.
//!
//! The left, bottom and right faces form the upper band (left and right
//! upside down around the bottom face) and the front face hangs below them:
//!
//! ```text
//! G G G G G G G B Y Y Y Y Y Y Y
//!   G G G G G B B B Y Y Y Y Y
//!     G G G B B B B B Y Y Y
//!       G B B B B B B B Y
//!         R R R R R R R
//!           R R R R R
//!             R R R
//!               R
//! ```
//!
//! Only row accessors and colors are read; position history is not shown.

use crate::puzzle::{FaceId, Facelet, Puzzle, ROW_COUNT};

const ANSI_RESET: &str = "\x1b[0m";

fn push_facelet(out: &mut String, facelet: &Facelet, colored: bool) {
    let color = facelet.color();
    if colored {
        out.push_str(color.ansi_code());
        out.push(color.letter());
        out.push_str(ANSI_RESET);
    } else {
        out.push(color.letter());
    }
}

fn push_line<'a>(
    out: &mut String,
    indent: usize,
    facelets: impl Iterator<Item = &'a Facelet>,
    colored: bool,
) {
    out.extend(std::iter::repeat(' ').take(indent));
    for (i, facelet) in facelets.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_facelet(out, facelet, colored);
    }
    out.push('\n');
}

/// Render the puzzle, one line per row, optionally with ANSI colors
pub fn render(puzzle: &Puzzle, colored: bool) -> String {
    let mut out = String::new();
    let left = puzzle.face(FaceId::Left);
    let bottom = puzzle.face(FaceId::Bottom);
    let right = puzzle.face(FaceId::Right);
    let front = puzzle.face(FaceId::Front);

    for line in 0..ROW_COUNT {
        let base = ROW_COUNT - 1 - line;
        let facelets = [left.row(base), bottom.row(line), right.row(base)]
            .into_iter()
            .flatten()
            .flatten();
        push_line(&mut out, 2 * line, facelets, colored);
    }
    for line in 0..ROW_COUNT {
        let row = front.row(ROW_COUNT - 1 - line).into_iter().flatten();
        push_line(&mut out, 2 * line + 8, row, colored);
    }
    out
}
