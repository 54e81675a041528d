//! Shared helpers for Chhaya integration tests.

#![allow(dead_code)]

use std::path::Path;

use chhaya::ChhayaConfig;

/// Small, fully deterministic configuration writing into `dir`.
///
/// With `c = 0` and no jitter the retained set is exactly the lattice
/// points inside the closed unit ball.
pub fn small_config(dir: &Path) -> ChhayaConfig {
    let mut config = ChhayaConfig::default();
    config.lattice.resolution = 11;
    config.lattice.spacing = 5.0;
    config.lattice.jitter = 0.0;
    config.lattice.seed = 3;
    config.julia.constant = [0.0; 4];
    config.render.frames = 4;
    config.render.width = 32;
    config.render.height = 32;
    config.output.directory = dir.to_string_lossy().into_owned();
    config
}

/// Sum of all pixel values in a raster.
pub fn brightness(raster: &chhaya::Raster) -> u64 {
    raster.as_slice().iter().map(|&v| v as u64).sum()
}
