//! Render configuration section.

use serde::{Deserialize, Serialize};

use crate::render::RenderConfig;

use super::defaults;

/// Frame rendering section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderSection {
    /// Frames per full revolution
    #[serde(default = "defaults::frames")]
    pub frames: u32,

    /// Precession-to-spin rate ratio
    #[serde(default = "defaults::precession_ratio")]
    pub precession_ratio: f64,

    /// Projection scale
    #[serde(default = "defaults::projection_scale")]
    pub scale: f64,

    /// Projection offset
    #[serde(default = "defaults::projection_offset")]
    pub offset: f64,

    /// Raster width (pixels)
    #[serde(default = "defaults::raster_size")]
    pub width: usize,

    /// Raster height (pixels)
    #[serde(default = "defaults::raster_size")]
    pub height: usize,

    /// Half-size of the visible screen domain
    #[serde(default = "defaults::extent")]
    pub extent: f64,

    /// First frame to render (for resuming long runs)
    #[serde(default)]
    pub start_frame: u32,

    /// One past the last frame to render (defaults to `frames`)
    #[serde(default)]
    pub end_frame: Option<u32>,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            frames: defaults::frames(),
            precession_ratio: defaults::precession_ratio(),
            scale: defaults::projection_scale(),
            offset: defaults::projection_offset(),
            width: defaults::raster_size(),
            height: defaults::raster_size(),
            extent: defaults::extent(),
            start_frame: 0,
            end_frame: None,
        }
    }
}

impl RenderSection {
    /// Convert to RenderConfig
    pub fn to_render_config(&self) -> RenderConfig {
        RenderConfig {
            frame_count: self.frames,
            precession_ratio: self.precession_ratio,
            scale: self.scale,
            offset: self.offset,
            width: self.width,
            height: self.height,
            extent: self.extent,
        }
    }

    /// Frames this run renders.
    pub fn frame_range(&self) -> std::ops::Range<u32> {
        self.start_frame..self.end_frame.unwrap_or(self.frames)
    }
}
