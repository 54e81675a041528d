//! Configuration loading for Chhaya.
//!
//! Loads all configuration from a single TOML file. Every key has a
//! default, so an empty file (or no file) reproduces the reference run:
//! a 301³ lattice, `c = -0.450 - 0.477i + 0.181j + 0.306k`, 30 iterations,
//! 1024 frames of 512×512.
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`LatticeSection`] | Lattice resolution, jitter, spacing, seed |
//! | [`JuliaSection`] | Julia constant, escape radius, iteration budget |
//! | [`RenderSection`] | Frame count, rotation ratio, projection, raster size |
//! | [`OutputSection`] | Output directory and file naming |
//! | [`RuntimeSection`] | Worker thread count |
//!
//! ## Example TOML
//!
//! ```toml
//! [lattice]
//! resolution = 201        # 8.1M points
//! seed = 42               # reproducible jitter
//!
//! [julia]
//! constant = [-0.450, -0.477, 0.181, 0.306]
//! max_iterations = 30
//! boundary = "inclusive"
//!
//! [render]
//! frames = 1024
//! width = 512
//! height = 512
//!
//! [output]
//! directory = "./frames"
//! extension = "pgm"
//! ```

mod chhaya;
mod defaults;
mod error;
mod julia;
mod lattice;
mod output;
mod render;

// Re-export main types
pub use chhaya::{ChhayaConfig, DEFAULT_CONFIG_PATH, RuntimeSection};
pub use error::ConfigError;

// Re-export section types
pub use julia::JuliaSection;
pub use lattice::LatticeSection;
pub use output::OutputSection;
pub use render::RenderSection;
