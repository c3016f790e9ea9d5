//! Cellular-automata cave generation split into grid, seeding, counting, and rule submodules.

mod generator;
mod grid;
mod neighbors;
mod render;
mod rules;
mod seed;

pub use generator::CaveGenerator;
pub use grid::{CaveGrid, MAX_FILL_PROBABILITY};
pub use rules::next_tile;
pub use seed::{generate_runtime_seed, seeded_rng};

use crate::config::GeneratorConfig;
use crate::error::CaveError;

pub fn generate_cave(config: &GeneratorConfig, seed: u64) -> Result<CaveGrid, CaveError> {
    CaveGenerator::new(config.clone()).generate(seed)
}
