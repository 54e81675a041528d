//! # Chhaya
//!
//! Quaternion Julia set X-ray renderer.
//!
//! ## Overview
//!
//! Chhaya samples a cube of quaternion space on a jittered lattice, keeps
//! every seed whose orbit under `q ← q² + c` stays bounded, and renders the
//! retained volume as a sequence of rotated orthographic shadows. Each
//! frame is a grayscale PGM where a pixel's brightness is the number of
//! retained points stacked behind it (saturating at 255).
//!
//! ## Pipeline
//!
//! - **Lattice** ([`LatticeSampler`]): N³ seeds centered on the origin, `k`
//!   carried only by jitter
//! - **Classification** ([`EscapeClassifier`]): escape-time test per seed
//! - **Point cloud** ([`PointCloud`]): immutable N³ slot store, built once
//! - **Rendering** ([`FrameRenderer`]): spin + precession, orthographic
//!   projection, saturating accumulation
//! - **Output** ([`save_pgm`]): plain-text P2 graymaps, one per frame
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::atomic::AtomicBool;
//! use chhaya::{ChhayaConfig, Pipeline};
//!
//! let mut config = ChhayaConfig::default();
//! config.lattice.resolution = 101;
//! config.render.frames = 64;
//!
//! let summary = Pipeline::new(&config)?.run(&AtomicBool::new(false))?;
//! println!("{} points retained", summary.occupancy.occupied);
//! ```

// Quaternion algebra, points, frame angles
pub mod core;

// Seed generation
pub mod lattice;

// Escape-time test
pub mod classify;

// Retained point storage
pub mod cloud;

// Rotation, projection, rasterization
pub mod render;

// PGM files and frame naming
pub mod io;

// TOML configuration
pub mod config;

// Two-phase driver
pub mod pipeline;

pub mod error;

// Re-export commonly used types
pub use core::{FrameAngles, Point3D, Quaternion, QuaternionError};

pub use lattice::{LatticeConfig, LatticeSampler};

pub use classify::{Classification, EscapeBoundary, EscapeClassifier, EscapeConfig};

pub use cloud::{Occupancy, PointCloud};

pub use render::{FrameRenderer, FrameStats, Raster, RenderConfig, RenderedFrame};

pub use io::{FrameNaming, PgmError, load_pgm, read_pgm, save_pgm, write_pgm};

pub use config::{ChhayaConfig, ConfigError};

pub use pipeline::{Pipeline, RenderSummary, RunSummary};

pub use error::{Error, Result};
