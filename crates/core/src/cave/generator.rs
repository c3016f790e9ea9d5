//! Cave generation pipeline: seed a grid, carve with conservative steps, then smooth.

use log::info;
use rand_chacha::rand_core::Rng;

use crate::config::GeneratorConfig;
use crate::error::CaveError;
use crate::types::RuleSet;

use super::grid::CaveGrid;
use super::seed::seeded_rng;

pub struct CaveGenerator {
    config: GeneratorConfig,
}

impl CaveGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self, seed: u64) -> Result<CaveGrid, CaveError> {
        self.generate_with_rng(&mut seeded_rng(seed))
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CaveGrid, CaveError> {
        self.config.validate()?;
        let config = &self.config;
        let mut grid = CaveGrid::new(config.width, config.height, config.fill_probability, rng)?;

        for _ in 0..config.conservative_steps {
            grid.evolve(RuleSet::Conservative);
        }
        for _ in 0..config.smooth_steps {
            grid.evolve(RuleSet::Smooth);
        }

        info!(
            "generated {}x{} cave after {} conservative and {} smooth steps: {} walls, {} floors",
            grid.width(),
            grid.height(),
            config.conservative_steps,
            config.smooth_steps,
            grid.wall_count(),
            grid.floor_count()
        );
        Ok(grid)
    }
}
