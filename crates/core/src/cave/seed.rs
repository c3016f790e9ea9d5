//! Random seeding policy and random-source construction for cave grids.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::types::TileKind;

const PERCENT_ROLL_RANGE: u32 = 100;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Derives a seed from wall-clock time, process id, and a per-process counter.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub(super) fn seed_tiles<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    fill_probability: u8,
    rng: &mut R,
) -> Vec<TileKind> {
    let middle_row = height / 2;
    let mut tiles = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let tile = if is_border(x, y, width, height) {
                TileKind::Wall
            } else if y == middle_row {
                TileKind::Floor
            } else if roll_percent(rng) < u32::from(fill_probability) {
                TileKind::Wall
            } else {
                TileKind::Floor
            };
            tiles.push(tile);
        }
    }
    tiles
}

pub(super) fn is_border(x: usize, y: usize, width: usize, height: usize) -> bool {
    x == 0 || y == 0 || x == width - 1 || y == height - 1
}

fn roll_percent<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.next_u32() % PERCENT_ROLL_RANGE
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(tiles: &[TileKind], width: usize) -> Vec<&[TileKind]> {
        tiles.chunks(width).collect()
    }

    #[test]
    fn border_cells_are_walls_even_without_fill() {
        let tiles = seed_tiles(6, 4, 0, &mut seeded_rng(3));
        for (y, row) in rows(&tiles, 6).into_iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                assert_eq!(*tile == TileKind::Wall, is_border(x, y, 6, 4), "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn middle_row_is_carved_even_at_full_fill() {
        let tiles = seed_tiles(7, 7, 100, &mut seeded_rng(3));
        let grid_rows = rows(&tiles, 7);
        assert_eq!(grid_rows[3][0], TileKind::Wall);
        assert_eq!(grid_rows[3][6], TileKind::Wall);
        assert!(grid_rows[3][1..6].iter().all(|tile| *tile == TileKind::Floor));
        for y in [1, 2, 4, 5] {
            assert!(grid_rows[y].iter().all(|tile| *tile == TileKind::Wall), "row {y}");
        }
    }

    #[test]
    fn single_row_grid_is_all_border() {
        let tiles = seed_tiles(5, 1, 0, &mut seeded_rng(3));
        assert!(tiles.iter().all(|tile| *tile == TileKind::Wall));
    }

    #[test]
    fn roll_percent_stays_inside_range() {
        let mut rng = seeded_rng(12_345);
        for _ in 0..1_000 {
            assert!(roll_percent(&mut rng) < 100);
        }
    }

    #[test]
    fn fill_probability_roughly_matches_wall_share() {
        let (width, height) = (102, 101);
        let tiles = seed_tiles(width, height, 40, &mut seeded_rng(2_024));
        let mut random_cells = 0_usize;
        let mut random_walls = 0_usize;
        for (y, row) in rows(&tiles, width).into_iter().enumerate() {
            if y == height / 2 {
                continue;
            }
            for (x, tile) in row.iter().enumerate() {
                if is_border(x, y, width, height) {
                    continue;
                }
                random_cells += 1;
                random_walls += usize::from(tile.is_wall());
            }
        }
        let share = random_walls as f64 / random_cells as f64;
        assert!((0.35..0.45).contains(&share), "wall share was {share}");
    }

    #[test]
    fn same_seed_reproduces_tiles() {
        let a = seed_tiles(40, 30, 40, &mut seeded_rng(77));
        let b = seed_tiles(40, 30, 40, &mut seeded_rng(77));
        assert_eq!(a, b);
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
