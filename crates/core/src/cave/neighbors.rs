//! Wall counting over rectangular neighborhoods, treating the outside of the grid as solid.

use super::grid::CaveGrid;

pub const NEAR_RADIUS: u32 = 1;
pub const WIDE_RADIUS: u32 = 2;

impl CaveGrid {
    /// Counts walls in the square neighborhood of `radius` around `(x, y)`, center excluded.
    ///
    /// Neighbors outside the grid count as walls, so the result for radius `r` is always
    /// within `0..=(2r + 1)^2 - 1`.
    pub fn count_walls(&self, x: i32, y: i32, radius: u32) -> usize {
        self.count_walls_in_scope(x, y, radius, radius)
    }

    /// Counts walls within `scope_x` columns and `scope_y` rows of `(x, y)`, center excluded.
    pub fn count_walls_in_scope(&self, x: i32, y: i32, scope_x: u32, scope_y: u32) -> usize {
        let (x, y) = (i64::from(x), i64::from(y));
        let (scope_x, scope_y) = (i64::from(scope_x), i64::from(scope_y));

        let mut walls = 0;
        for ny in (y - scope_y)..=(y + scope_y) {
            for nx in (x - scope_x)..=(x + scope_x) {
                if nx == x && ny == y {
                    continue;
                }
                if self.tile_at_wide(nx, ny).is_wall() {
                    walls += 1;
                }
            }
        }
        walls
    }
}
