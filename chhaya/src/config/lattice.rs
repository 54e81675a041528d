//! Lattice configuration section.

use serde::{Deserialize, Serialize};

use crate::lattice::LatticeConfig;

use super::defaults;

/// Lattice sampling section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatticeSection {
    /// Points per axis (N). Memory grows as N³.
    #[serde(default = "defaults::lattice_resolution")]
    pub resolution: usize,

    /// Jitter scale applied to every component
    #[serde(default = "defaults::jitter")]
    pub jitter: f64,

    /// Lattice steps per unit of quaternion space
    #[serde(default = "defaults::spacing")]
    pub spacing: f64,

    /// Jitter RNG seed (0 = random)
    #[serde(default)]
    pub seed: u64,
}

impl Default for LatticeSection {
    fn default() -> Self {
        Self {
            resolution: defaults::lattice_resolution(),
            jitter: defaults::jitter(),
            spacing: defaults::spacing(),
            seed: 0,
        }
    }
}

impl LatticeSection {
    /// Convert to LatticeConfig
    pub fn to_lattice_config(&self) -> LatticeConfig {
        LatticeConfig {
            resolution: self.resolution,
            jitter: self.jitter,
            spacing: self.spacing,
            seed: self.seed,
        }
    }
}
