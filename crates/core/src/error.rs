//! Error types surfaced by grid construction and configuration loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaveError {
    #[error("grid dimensions must be positive and addressable, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("fill probability must be within 0..=100, got {fill_probability}")]
    InvalidProbability { fill_probability: u8 },
    #[error("glyph map line {line}: {reason}")]
    InvalidGlyphs { line: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] CaveError),
}
