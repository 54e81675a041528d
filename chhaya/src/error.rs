//! Error types for Chhaya

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::core::QuaternionError;
use crate::io::PgmError;

/// Chhaya error type
#[derive(Error, Debug)]
pub enum Error {
    /// Quaternion operation outside its domain
    #[error("Quaternion domain error: {0}")]
    Quaternion(#[from] QuaternionError),

    /// Config file could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Lattice parameters out of range
    #[error("Invalid lattice: {0}")]
    Lattice(String),

    /// Point cloud storage could not be reserved.
    /// Raised before any classification work starts.
    #[error("Failed to allocate point cloud: {slots} slots ({bytes} bytes)")]
    Allocation {
        /// Requested slot count
        slots: usize,
        /// Requested size in bytes
        bytes: usize,
    },

    /// Writing a frame file failed. Aborts the run.
    #[error("Frame {frame}: failed to write {}: {source}", .path.display())]
    FrameWrite {
        /// Frame index
        frame: u32,
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: PgmError,
    },

    /// Output directory could not be created
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dedicated worker pool could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Stopped by the cancel flag
    #[error("Cancelled")]
    Cancelled,
}

/// Result type for Chhaya operations
pub type Result<T> = std::result::Result<T, Error>;
