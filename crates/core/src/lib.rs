pub mod cave;
pub mod config;
pub mod error;
pub mod types;

pub use cave::{
    CaveGenerator, CaveGrid, MAX_FILL_PROBABILITY, generate_cave, generate_runtime_seed, seeded_rng,
};
pub use config::GeneratorConfig;
pub use error::{CaveError, ConfigError};
pub use types::*;
