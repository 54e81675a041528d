//! Julia map configuration section.

use serde::{Deserialize, Serialize};

use crate::classify::{EscapeBoundary, EscapeConfig};
use crate::core::Quaternion;

use super::defaults;

/// Julia map and escape test section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JuliaSection {
    /// Julia constant as `[re, i, j, k]`
    #[serde(default = "defaults::julia_constant")]
    pub constant: [f64; 4],

    /// Escape radius
    #[serde(default = "defaults::escape_radius")]
    pub escape_radius: f64,

    /// Iteration budget per seed
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: u32,

    /// Map exponent (2 = `q² + c`)
    #[serde(default = "defaults::power")]
    pub power: u32,

    /// "inclusive" (|q| >= r escapes) or "exclusive" (|q| > r escapes)
    #[serde(default)]
    pub boundary: EscapeBoundary,
}

impl Default for JuliaSection {
    fn default() -> Self {
        Self {
            constant: defaults::julia_constant(),
            escape_radius: defaults::escape_radius(),
            max_iterations: defaults::max_iterations(),
            power: defaults::power(),
            boundary: EscapeBoundary::default(),
        }
    }
}

impl JuliaSection {
    /// Convert to EscapeConfig
    pub fn to_escape_config(&self) -> EscapeConfig {
        EscapeConfig {
            constant: Quaternion::from_array(self.constant),
            escape_radius: self.escape_radius,
            max_iterations: self.max_iterations,
            power: self.power,
            boundary: self.boundary,
        }
    }
}
