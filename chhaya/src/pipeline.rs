//! End-to-end run: build the point cloud once, then render every frame.
//!
//! ```text
//! LatticeSampler ──► EscapeClassifier ──► PointCloud      (phase 1, per A-slab)
//!                                             │
//!                        ┌────────────────────┼────────────────────┐
//!                        ▼                    ▼                    ▼
//!                  FrameRenderer(0)    FrameRenderer(1)  …  FrameRenderer(F-1)
//!                        │                    │                    │
//!                        ▼                    ▼                    ▼
//!                     0000.pnm             0001.pnm            (F-1).pnm   (phase 2, per frame)
//! ```
//!
//! Both phases run on rayon. The cloud is immutable once built and every
//! frame owns its raster, so no locks are involved. A shared cancel flag is
//! polled before each slab and each frame.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;

use crate::classify::EscapeClassifier;
use crate::cloud::{Occupancy, PointCloud};
use crate::config::ChhayaConfig;
use crate::error::{Error, Result};
use crate::io::{FrameNaming, save_pgm};
use crate::lattice::LatticeSampler;
use crate::render::{FrameRenderer, FrameStats};

/// Totals over all rendered frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Frames written
    pub frames: usize,
    /// Summed per-frame statistics
    pub stats: FrameStats,
}

/// Outcome of a complete run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Cloud occupancy after classification
    pub occupancy: Occupancy,
    /// Render totals, `None` for a dry run
    pub render: Option<RenderSummary>,
    /// Wall-clock time spent classifying
    pub build_time: Duration,
    /// Wall-clock time spent rendering and writing
    pub render_time: Duration,
}

/// Configured renderer pipeline.
pub struct Pipeline {
    sampler: LatticeSampler,
    classifier: EscapeClassifier,
    renderer: FrameRenderer,
    naming: FrameNaming,
    frames: Range<u32>,
    threads: usize,
}

impl Pipeline {
    /// Validate `config` and assemble every stage.
    pub fn new(config: &ChhayaConfig) -> Result<Self> {
        config.validate()?;

        let sampler = LatticeSampler::new(config.lattice_config())?;
        info!(
            "Lattice: {}³ = {} points, jitter seed {}",
            sampler.resolution(),
            sampler.len(),
            sampler.base_seed()
        );

        let render = config.render_config();
        info!(
            "Raster: {}x{} ({} bytes per frame)",
            render.width,
            render.height,
            render.raster_bytes().unwrap_or_default()
        );

        Ok(Self {
            sampler,
            classifier: EscapeClassifier::new(config.escape_config()),
            renderer: FrameRenderer::new(render),
            naming: config.frame_naming(),
            frames: config.render.frame_range(),
            threads: config.runtime.threads,
        })
    }

    /// Lattice seed generator.
    pub fn sampler(&self) -> &LatticeSampler {
        &self.sampler
    }

    /// Escape-time classifier.
    pub fn classifier(&self) -> &EscapeClassifier {
        &self.classifier
    }

    /// Frame renderer.
    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    /// Output file naming.
    pub fn naming(&self) -> &FrameNaming {
        &self.naming
    }

    /// Classify the whole lattice.
    pub fn build_cloud(&self, cancel: &AtomicBool) -> Result<PointCloud> {
        let cloud = PointCloud::build_parallel(&self.sampler, &self.classifier, cancel)?;
        let occupancy = cloud.occupancy();
        info!(
            "Occupied: {} of {} slots ({:.4}%)",
            occupancy.occupied,
            occupancy.total,
            occupancy.fraction() * 100.0
        );
        Ok(cloud)
    }

    /// Render and write one frame.
    pub fn render_frame(&self, frame: u32, cloud: &PointCloud) -> Result<FrameStats> {
        let rendered = self.renderer.render_frame(frame, cloud);
        let path = self.naming.path_for(frame);
        save_pgm(&rendered.raster, &path).map_err(|source| Error::FrameWrite {
            frame,
            path: path.clone(),
            source,
        })?;
        debug!(
            "Frame {}: {} plotted, {} dropped, {} saturated -> {}",
            frame,
            rendered.stats.plotted,
            rendered.stats.dropped,
            rendered.stats.saturated_pixels,
            path.display()
        );
        Ok(rendered.stats)
    }

    /// Render every configured frame in parallel.
    ///
    /// The first write failure aborts the run.
    pub fn render_frames(&self, cloud: &PointCloud, cancel: &AtomicBool) -> Result<RenderSummary> {
        std::fs::create_dir_all(self.naming.directory())?;

        let stats = self
            .frames
            .clone()
            .into_par_iter()
            .map(|frame| {
                if cancel.load(Ordering::Relaxed) {
                    return Err(Error::Cancelled);
                }
                self.render_frame(frame, cloud)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RenderSummary {
            frames: stats.len(),
            stats: stats.into_iter().fold(FrameStats::default(), |acc, s| acc + s),
        })
    }

    /// Build the cloud and render all frames.
    pub fn run(&self, cancel: &AtomicBool) -> Result<RunSummary> {
        self.in_pool(|| self.execute(cancel, true))
    }

    /// Build the cloud and report occupancy without writing frames.
    pub fn dry_run(&self, cancel: &AtomicBool) -> Result<RunSummary> {
        self.in_pool(|| self.execute(cancel, false))
    }

    fn execute(&self, cancel: &AtomicBool, render: bool) -> Result<RunSummary> {
        let start = Instant::now();
        let cloud = self.build_cloud(cancel)?;
        let build_time = start.elapsed();
        info!("Classification took {:.2?}", build_time);

        let start = Instant::now();
        let render = if render {
            info!(
                "Rendering frames {}..{} into {}",
                self.frames.start,
                self.frames.end,
                self.naming.directory().display()
            );
            Some(self.render_frames(&cloud, cancel)?)
        } else {
            None
        };
        let render_time = start.elapsed();

        Ok(RunSummary {
            occupancy: cloud.occupancy(),
            render,
            build_time,
            render_time,
        })
    }

    /// Run `f` on a dedicated pool when a thread count is configured.
    fn in_pool<T, F>(&self, f: F) -> Result<T>
    where
        T: Send,
        F: FnOnce() -> Result<T> + Send,
    {
        if self.threads == 0 {
            return f();
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("chhaya-{i}"))
            .build()?;
        pool.install(f)
    }
}
