//! Chhaya - quaternion Julia set X-ray renderer
//!
//! Classifies a lattice of quaternion seeds once, then writes one rotated
//! orthographic shadow per frame as a plain-text PGM.
//!
//! ```bash
//! # Reference run (301³ lattice, 1024 frames into ./frames)
//! chhaya
//!
//! # Small preview
//! chhaya --resolution 101 --frames 64 --output ./preview
//!
//! # Occupancy only
//! chhaya --config configs/chhaya.toml --dry-run
//! ```
//!
//! Ctrl-C (or SIGTERM) stops at the next slab or frame boundary.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use log::{error, info, warn};

use chhaya::{ChhayaConfig, Error, Pipeline, Result};

/// Exit status for a run stopped by a signal
const EXIT_CANCELLED: u8 = 130;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to configs/chhaya.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lattice points per axis
    #[arg(short = 'n', long)]
    resolution: Option<usize>,

    /// Frames per full revolution
    #[arg(short, long)]
    frames: Option<u32>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Jitter seed (0 = random)
    #[arg(long)]
    seed: Option<u64>,

    /// Iteration budget per seed
    #[arg(long)]
    max_iterations: Option<u32>,

    /// First frame to render
    #[arg(long)]
    start_frame: Option<u32>,

    /// One past the last frame to render
    #[arg(long)]
    end_frame: Option<u32>,

    /// Classify and report occupancy without writing frames
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn load_config(&self) -> Result<ChhayaConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                ChhayaConfig::load(path)?
            }
            None => ChhayaConfig::load_default()?,
        };

        if let Some(n) = self.resolution {
            config.lattice.resolution = n;
        }
        if let Some(frames) = self.frames {
            config.render.frames = frames;
        }
        if let Some(dir) = &self.output {
            config.output.directory = dir.to_string_lossy().into_owned();
        }
        if let Some(threads) = self.threads {
            config.runtime.threads = threads;
        }
        if let Some(seed) = self.seed {
            config.lattice.seed = seed;
        }
        if let Some(iterations) = self.max_iterations {
            config.julia.max_iterations = iterations;
        }
        if let Some(start) = self.start_frame {
            config.render.start_frame = start;
        }
        if let Some(end) = self.end_frame {
            config.render.end_frame = Some(end);
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("Chhaya v{}", env!("CARGO_PKG_VERSION"));

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal, stopping at next boundary");
        flag.store(true, Ordering::Relaxed);
    }) {
        warn!("Failed to install signal handler: {}", e);
    }

    match run(&args, &cancel) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Cancelled) => {
            warn!("Cancelled");
            ExitCode::from(EXIT_CANCELLED)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, cancel: &AtomicBool) -> Result<()> {
    let config = args.load_config()?;
    let j = &config.julia;
    info!(
        "c = {} {:+}i {:+}j {:+}k, radius {}, {} iterations",
        j.constant[0], j.constant[1], j.constant[2], j.constant[3], j.escape_radius, j.max_iterations
    );

    let pipeline = Pipeline::new(&config)?;

    if args.dry_run {
        let summary = pipeline.dry_run(cancel)?;
        info!(
            "Dry run: {} of {} points retained in {:.2?}",
            summary.occupancy.occupied, summary.occupancy.total, summary.build_time
        );
        return Ok(());
    }

    let summary = pipeline.run(cancel)?;
    if let Some(render) = summary.render {
        info!(
            "Wrote {} frames ({} points plotted, {} off-screen) in {:.2?}",
            render.frames, render.stats.plotted, render.stats.dropped, summary.render_time
        );
    }
    Ok(())
}
