//! Text rendering of a cave grid, one glyph per cell.

use std::fmt;

use crate::error::CaveError;
use crate::types::TileKind;

use super::grid::CaveGrid;

impl CaveGrid {
    /// Renders `height` newline-terminated rows of `#` (wall) and `.` (floor).
    pub fn render(&self) -> String {
        let mut rendered = String::with_capacity((self.width() + 1) * self.height());
        for row in self.tiles.chunks(self.width()) {
            rendered.extend(row.iter().map(|tile| tile.glyph()));
            rendered.push('\n');
        }
        rendered
    }

    /// Parses a map in the `render` format. Trailing newlines are optional.
    ///
    /// The border is taken as given; it is not forced to walls.
    pub fn from_glyphs(text: &str) -> Result<Self, CaveError> {
        let mut width = None;
        let mut height = 0;
        let mut tiles = Vec::new();
        for (line_index, line) in text.lines().enumerate() {
            let line_number = line_index + 1;
            let row_start = tiles.len();
            for glyph in line.chars() {
                let tile = TileKind::from_glyph(glyph).ok_or_else(|| CaveError::InvalidGlyphs {
                    line: line_number,
                    reason: format!("unknown glyph {glyph:?}"),
                })?;
                tiles.push(tile);
            }
            let row_width = tiles.len() - row_start;
            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(CaveError::InvalidGlyphs {
                        line: line_number,
                        reason: format!("expected {expected} cells, found {row_width}"),
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        Self::from_tiles(width.unwrap_or(0), height, tiles)
    }
}

impl fmt::Display for CaveGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
