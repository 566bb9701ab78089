//! Plain-text rendering for terminal front-ends.
//!
//! A frame is a separator line followed by one line per row, each cell
//! drawn as one glyph between two border characters:
//!
//! ```text
//! -------------------------
//! |    @@@     |
//! |    @ @     |
//! ```

use std::io::{self, Write};

use crate::grid::Grid;

/// Glyphs and delimiters used by [`write_grid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    /// Glyph for a live cell. Default: `@`.
    pub alive: u8,
    /// Glyph for a dead cell. Default: space.
    pub dead: u8,
    /// Character written at both ends of every row. Default: `|`.
    pub border: u8,
    /// Line written before every frame. Default: 25 dashes.
    pub separator: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            alive: b'@',
            dead: b' ',
            border: b'|',
            separator: "-".repeat(25),
        }
    }
}

/// Write one frame for `grid` to `out`.
///
/// Does not flush; buffered writers should be flushed by the caller once
/// per frame.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid, style: &RenderStyle) -> io::Result<()> {
    out.write_all(style.separator.as_bytes())?;
    out.write_all(b"\n")?;
    for row in grid.rows() {
        out.write_all(&[style.border])?;
        for &alive in row {
            out.write_all(&[if alive { style.alive } else { style.dead }])?;
        }
        out.write_all(&[style.border, b'\n'])?;
    }
    Ok(())
}
