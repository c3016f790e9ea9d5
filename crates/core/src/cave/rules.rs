//! The automaton rule and the synchronous evolution step.

use log::debug;

use crate::types::{RuleSet, TileKind};

use super::grid::CaveGrid;
use super::neighbors::{NEAR_RADIUS, WIDE_RADIUS};

/// Minimum walls among the 8 neighbors for a wall to survive.
const WALL_SURVIVAL_MIN: usize = 3;
/// Minimum walls among the 8 neighbors for a floor to turn into a wall.
const WALL_GROWTH_MIN: usize = 5;
/// Under `RuleSet::Conservative`, a floor with at most this many walls in its 5x5
/// neighborhood turns into a wall.
const WALL_ACCRETION_MAX: usize = 2;

/// Computes the next state of a single cell.
///
/// `wide_walls` is only evaluated for floor cells under `RuleSet::Conservative` that
/// did not already grow from their near neighbors.
pub fn next_tile(
    rule_set: RuleSet,
    current: TileKind,
    near_walls: usize,
    wide_walls: impl FnOnce() -> usize,
) -> TileKind {
    let becomes_wall = match (current, rule_set) {
        (TileKind::Wall, _) => near_walls >= WALL_SURVIVAL_MIN,
        (TileKind::Floor, RuleSet::Smooth) => near_walls >= WALL_GROWTH_MIN,
        (TileKind::Floor, RuleSet::Conservative) => {
            near_walls >= WALL_GROWTH_MIN || wide_walls() <= WALL_ACCRETION_MAX
        }
    };
    if becomes_wall { TileKind::Wall } else { TileKind::Floor }
}

impl CaveGrid {
    /// Applies `rule_set` to every cell at once.
    ///
    /// All neighbor reads see the grid as it was before the call; the new generation is
    /// written to a separate buffer and swapped in at the end.
    pub fn evolve(&mut self, rule_set: RuleSet) {
        let mut next_tiles = Vec::with_capacity(self.tiles.len());
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let near_walls = self.count_walls(x, y, NEAR_RADIUS);
                next_tiles.push(next_tile(rule_set, self.tile_at(x, y), near_walls, || {
                    self.count_walls(x, y, WIDE_RADIUS)
                }));
            }
        }
        self.tiles = next_tiles;
        debug!("evolved cave with {:?} rules: {} walls", rule_set, self.wall_count());
    }
}
