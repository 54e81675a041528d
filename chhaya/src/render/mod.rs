//! Frame rendering: rotation, orthographic projection, rasterization.
//!
//! For frame `f` of `F`, every retained point `(x, y, z)` goes through:
//!
//! ```text
//! precession (x-z plane, φ):  x' = x·cosφ − z·sinφ
//!                             z' = x·sinφ + z·cosφ
//! spin (x'-y plane, θ):       rx = x'·cosθ − y·sinθ
//!                             ry = x'·sinθ + y·cosθ   (discarded)
//!                             rz = z'
//! projection:                 TX = S·rx + δ
//!                             TY = S·rz + δ
//! pixel:                      m = ⌊(TX + E) / 2E · (W − 1)⌋   column
//!                             l = ⌊(TY + E) / 2E · (H − 1)⌋   row
//! ```
//!
//! The `ry` axis is dropped on purpose: each frame is an orthographic
//! "X-ray" shadow along the rotated y-axis, with no depth ordering.
//!
//! The screen domain `[-E, E]` maps exactly onto `[0, W−1]` and the floor
//! rounds toward negative infinity, so anything left of `-E` becomes a
//! negative index and is dropped together with anything past `W − 1`.
//! With the default 512×512 raster and δ = 0.00010394 the 3-D origin lands
//! on pixel (255, 255) in every frame.

mod config;
mod raster;

pub use config::RenderConfig;
pub use raster::Raster;

use crate::cloud::PointCloud;
use crate::core::{FrameAngles, Point3D};

/// Per-frame accumulation statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Contributions that landed inside the raster
    pub plotted: u64,
    /// Contributions projected outside the raster
    pub dropped: u64,
    /// Pixels at the 255 limit after the frame
    pub saturated_pixels: u64,
}

impl std::ops::Add for FrameStats {
    type Output = Self;

    fn add(self, o: Self) -> Self {
        Self {
            plotted: self.plotted + o.plotted,
            dropped: self.dropped + o.dropped,
            saturated_pixels: self.saturated_pixels + o.saturated_pixels,
        }
    }
}

/// One completed frame.
#[derive(Clone, Debug)]
pub struct RenderedFrame {
    /// Frame index
    pub frame: u32,
    /// Accumulated raster
    pub raster: Raster,
    /// Accumulation statistics
    pub stats: FrameStats,
}

/// Renders rotated orthographic shadows of a point cloud.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    config: RenderConfig,
}

impl FrameRenderer {
    /// Create a renderer.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Spin and precession angles for `frame`.
    #[inline]
    pub fn angles(&self, frame: u32) -> FrameAngles {
        FrameAngles::for_frame(frame, self.config.frame_count, self.config.precession_ratio)
    }

    /// Apply precession then spin. Returns `(rx, ry, rz)` as a point.
    #[inline]
    pub fn rotate(&self, p: Point3D, a: &FrameAngles) -> Point3D {
        let xp = p.x * a.cos_phi - p.z * a.sin_phi;
        let zp = p.x * a.sin_phi + p.z * a.cos_phi;
        Point3D::new(
            xp * a.cos_theta - p.y * a.sin_theta,
            xp * a.sin_theta + p.y * a.cos_theta,
            zp,
        )
    }

    /// Pixel `(row, col)` for a point, `None` if it falls off the raster.
    #[inline]
    pub fn project(&self, p: Point3D, a: &FrameAngles) -> Option<(usize, usize)> {
        let r = self.rotate(p, a);
        let tx = self.config.scale * r.x + self.config.offset;
        let ty = self.config.scale * r.z + self.config.offset;
        let col = self.pixel_index(tx, self.config.width)?;
        let row = self.pixel_index(ty, self.config.height)?;
        Some((row, col))
    }

    /// Map a screen coordinate to a pixel index along an axis of `size` pixels.
    #[inline]
    fn pixel_index(&self, t: f64, size: usize) -> Option<usize> {
        let e = self.config.extent;
        let v = ((t + e) / (2.0 * e) * (size as f64 - 1.0)).floor();
        // NaN fails both comparisons
        (v >= 0.0 && v < size as f64).then_some(v as usize)
    }

    /// Accumulate `points` into a fresh raster for `frame`.
    pub fn render_points<I>(&self, frame: u32, points: I) -> RenderedFrame
    where
        I: IntoIterator<Item = Point3D>,
    {
        let angles = self.angles(frame);
        let mut raster = Raster::new(self.config.width, self.config.height);
        let mut stats = FrameStats::default();

        for p in points {
            match self.project(p, &angles) {
                Some((row, col)) if raster.increment(row, col) => stats.plotted += 1,
                _ => stats.dropped += 1,
            }
        }

        stats.saturated_pixels = raster.saturated_count() as u64;
        RenderedFrame {
            frame,
            raster,
            stats,
        }
    }

    /// Render every retained point of `cloud` for `frame`.
    pub fn render_frame(&self, frame: u32, cloud: &PointCloud) -> RenderedFrame {
        self.render_points(frame, cloud.retained())
    }
}
