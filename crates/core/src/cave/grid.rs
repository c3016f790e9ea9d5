//! The cave grid model: storage, construction, and cell queries.

use log::trace;
use rand_chacha::rand_core::Rng;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::CaveError;
use crate::types::TileKind;

use super::seed::seed_tiles;

pub const MAX_FILL_PROBABILITY: u8 = 100;

/// A fixed-size grid of wall and floor cells stored row-major.
///
/// Coordinates outside the grid are never stored; every query treats them as walls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaveGrid {
    width: usize,
    height: usize,
    fill_probability: Option<u8>,
    pub(super) tiles: Vec<TileKind>,
}

impl CaveGrid {
    /// Builds a grid and seeds it from `rng`.
    ///
    /// Border cells become walls, the row at `height / 2` is carved open, and every other
    /// cell is a wall with probability `fill_probability` percent.
    pub fn new<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        fill_probability: u8,
        rng: &mut R,
    ) -> Result<Self, CaveError> {
        Self::validate_parameters(width, height, fill_probability)?;

        let tiles = seed_tiles(width, height, fill_probability, rng);
        let grid = Self { width, height, fill_probability: Some(fill_probability), tiles };
        trace!(
            "seeded {}x{} cave at {}% fill: {} walls",
            width,
            height,
            fill_probability,
            grid.wall_count()
        );
        Ok(grid)
    }

    pub(super) fn from_tiles(
        width: usize,
        height: usize,
        tiles: Vec<TileKind>,
    ) -> Result<Self, CaveError> {
        validate_dimensions(width, height)?;
        debug_assert_eq!(tiles.len(), width * height);
        Ok(Self { width, height, fill_probability: None, tiles })
    }

    /// Checks construction parameters without allocating.
    pub fn validate_parameters(
        width: usize,
        height: usize,
        fill_probability: u8,
    ) -> Result<(), CaveError> {
        validate_dimensions(width, height)?;
        if fill_probability > MAX_FILL_PROBABILITY {
            return Err(CaveError::InvalidProbability { fill_probability });
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The wall percentage used to seed the grid, or `None` for grids parsed from glyphs.
    pub fn fill_probability(&self) -> Option<u8> {
        self.fill_probability
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        self.cell_index(i64::from(x), i64::from(y)).is_none()
    }

    pub fn tile_at(&self, x: i32, y: i32) -> TileKind {
        self.tile_at_wide(i64::from(x), i64::from(y))
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y).is_wall()
    }

    pub fn wall_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_wall()).count()
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.len() - self.wall_count()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                TileKind::Wall => 1,
                TileKind::Floor => 0,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub(super) fn tile_at_wide(&self, x: i64, y: i64) -> TileKind {
        match self.cell_index(x, y) {
            Some(index) => self.tiles[index],
            None => TileKind::Wall,
        }
    }

    fn cell_index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x + y * self.width)
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<(), CaveError> {
    let addressable = |len: usize| len > 0 && i32::try_from(len).is_ok();
    if !addressable(width) || !addressable(height) || width.checked_mul(height).is_none() {
        return Err(CaveError::InvalidDimension { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::seed::seeded_rng;

    #[test]
    fn rejects_zero_dimensions_before_seeding() {
        let mut rng = seeded_rng(1);
        assert_eq!(
            CaveGrid::new(0, 10, 40, &mut rng),
            Err(CaveError::InvalidDimension { width: 0, height: 10 })
        );
        assert_eq!(
            CaveGrid::new(10, 0, 40, &mut rng),
            Err(CaveError::InvalidDimension { width: 10, height: 0 })
        );
    }

    #[test]
    fn rejects_dimensions_outside_coordinate_range() {
        let mut rng = seeded_rng(1);
        let too_wide = i32::MAX as usize + 1;
        assert_eq!(
            CaveGrid::new(too_wide, 1, 40, &mut rng),
            Err(CaveError::InvalidDimension { width: too_wide, height: 1 })
        );
    }

    #[test]
    fn rejects_fill_probability_above_one_hundred() {
        let mut rng = seeded_rng(1);
        assert_eq!(
            CaveGrid::new(10, 10, 101, &mut rng),
            Err(CaveError::InvalidProbability { fill_probability: 101 })
        );
        assert!(CaveGrid::new(10, 10, 100, &mut rng).is_ok());
    }

    #[test]
    fn out_of_bounds_queries_read_as_walls() {
        let grid = CaveGrid::new(5, 5, 0, &mut seeded_rng(7)).expect("valid grid");
        assert!(grid.is_out_of_bounds(-1, 2));
        assert!(grid.is_out_of_bounds(5, 0));
        assert!(!grid.is_out_of_bounds(4, 4));
        assert!(grid.is_wall(-1, -1));
        assert!(grid.is_wall(2, 5));
        assert_eq!(grid.tile_at(i32::MIN, i32::MAX), TileKind::Wall);
        assert!(!grid.is_wall(2, 2));
    }

    #[test]
    fn wall_and_floor_counts_cover_every_cell() {
        let grid = CaveGrid::new(30, 20, 45, &mut seeded_rng(99)).expect("valid grid");
        assert_eq!(grid.wall_count() + grid.floor_count(), 30 * 20);
        assert_eq!(grid.tiles().len(), 30 * 20);
        assert_eq!(grid.fill_probability(), Some(45));
    }

    #[test]
    fn fingerprint_tracks_cell_contents() {
        let a = CaveGrid::new(20, 20, 40, &mut seeded_rng(5)).expect("valid grid");
        let b = CaveGrid::new(20, 20, 40, &mut seeded_rng(5)).expect("valid grid");
        let c = CaveGrid::new(20, 20, 40, &mut seeded_rng(6)).expect("valid grid");
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
