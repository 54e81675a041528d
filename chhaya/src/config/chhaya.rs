//! Main ChhayaConfig, validation, and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::EscapeConfig;
use crate::io::FrameNaming;
use crate::lattice::LatticeConfig;
use crate::render::RenderConfig;

use super::error::ConfigError;
use super::julia::JuliaSection;
use super::lattice::LatticeSection;
use super::output::OutputSection;
use super::render::RenderSection;

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "configs/chhaya.toml";

/// Thread pool settings section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RuntimeSection {
    /// Worker threads (0 = one per core)
    #[serde(default)]
    pub threads: usize,
}

/// Full Chhaya configuration loaded from TOML
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChhayaConfig {
    /// Lattice settings
    #[serde(default)]
    pub lattice: LatticeSection,

    /// Julia map settings
    #[serde(default)]
    pub julia: JuliaSection,

    /// Render settings
    #[serde(default)]
    pub render: RenderSection,

    /// Output settings
    #[serde(default)]
    pub output: OutputSection,

    /// Thread pool settings
    #[serde(default)]
    pub runtime: RuntimeSection,
}

impl ChhayaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Load from the default path, falling back to built-in defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let l = &self.lattice;
        ensure(l.resolution >= 1, "lattice.resolution must be at least 1")?;
        ensure(
            l.jitter.is_finite() && l.jitter >= 0.0,
            "lattice.jitter must be finite and non-negative",
        )?;
        ensure(
            l.spacing.is_finite() && l.spacing > 0.0,
            "lattice.spacing must be positive",
        )?;

        let j = &self.julia;
        ensure(
            j.constant.iter().all(|c| c.is_finite()),
            "julia.constant must be finite",
        )?;
        ensure(
            j.escape_radius.is_finite() && j.escape_radius > 0.0,
            "julia.escape_radius must be positive",
        )?;
        ensure(j.max_iterations >= 1, "julia.max_iterations must be at least 1")?;
        ensure(j.power >= 1, "julia.power must be at least 1")?;

        let r = &self.render;
        ensure(r.frames >= 1, "render.frames must be at least 1")?;
        ensure(
            r.width >= 2 && r.height >= 2,
            "render.width and render.height must be at least 2",
        )?;
        if self.render_config().raster_bytes().is_none() {
            return Err(ConfigError::Invalid(format!(
                "render raster {}x{} is too large",
                r.width, r.height
            )));
        }
        ensure(
            r.extent.is_finite() && r.extent > 0.0,
            "render.extent must be positive",
        )?;
        ensure(
            r.scale.is_finite() && r.offset.is_finite() && r.precession_ratio.is_finite(),
            "render.scale, render.offset and render.precession_ratio must be finite",
        )?;
        let frames = r.frame_range();
        if frames.start >= frames.end || frames.end > r.frames {
            return Err(ConfigError::Invalid(format!(
                "render frame range {}..{} must be non-empty and within 0..{}",
                frames.start, frames.end, r.frames
            )));
        }

        let o = &self.output;
        ensure(
            (1..=10).contains(&o.digits),
            "output.digits must be between 1 and 10",
        )?;
        ensure(!o.extension.is_empty(), "output.extension must not be empty")?;
        ensure(
            !o.prefix.contains(['/', '\\']),
            "output.prefix must not contain path separators",
        )?;

        Ok(())
    }

    /// Lattice sampler config
    pub fn lattice_config(&self) -> LatticeConfig {
        self.lattice.to_lattice_config()
    }

    /// Escape classifier config
    pub fn escape_config(&self) -> EscapeConfig {
        self.julia.to_escape_config()
    }

    /// Frame renderer config
    pub fn render_config(&self) -> RenderConfig {
        self.render.to_render_config()
    }

    /// Output file naming
    pub fn frame_naming(&self) -> FrameNaming {
        self.output.to_frame_naming()
    }
}

fn ensure(condition: bool, message: &str) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Invalid(message.to_string()))
    }
}
