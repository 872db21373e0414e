//! Text preview of a canvas for terminal output.

use crate::types::{Canvas, Colour};

/// Render a canvas as text: `.` for background cells, `#` for drawn cells.
///
/// A cell counts as background when it equals the canvas background, or is
/// transparent on a canvas without one. Rows are joined by newlines with no
/// trailing newline.
pub fn preview(canvas: &Canvas) -> String {
    let background = canvas.background().unwrap_or(Colour::TRANSPARENT);
    canvas
        .pixels()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&c| if c == background { '.' } else { '#' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
