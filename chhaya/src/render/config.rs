//! Configuration types for frame rendering.

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_PRECESSION_RATIO;

/// Frame rendering configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Frames per full revolution (F)
    pub frame_count: u32,

    /// Precession angle per unit of spin angle
    pub precession_ratio: f64,

    /// Projection scale (S)
    pub scale: f64,

    /// Projection offset (δ), added to both screen axes
    pub offset: f64,

    /// Raster width in pixels
    pub width: usize,

    /// Raster height in pixels
    pub height: usize,

    /// Half-size of the visible screen domain: `[-extent, extent]` on each
    /// axis maps onto the full raster.
    pub extent: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_count: 1024,
            precession_ratio: DEFAULT_PRECESSION_RATIO,
            scale: 1.61,
            offset: 0.00010394,
            width: 512,
            height: 512,
            extent: 2.0,
        }
    }
}

impl RenderConfig {
    /// Memory for one raster in bytes, `None` if `width × height` overflows.
    pub fn raster_bytes(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}
