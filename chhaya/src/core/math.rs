//! Frame angle schedule.
//!
//! Every frame rotates the volume by two composed rotations:
//!
//! ```text
//! spin        θ = 2π · f / F         (one revolution over the animation)
//! precession  φ = ratio · θ          (ratio = e by default)
//! ```
//!
//! An irrational ratio keeps the combined orientation from repeating on a
//! short cycle.

use std::f64::consts::{E, TAU};

/// Default precession-to-spin ratio (Euler's number).
pub const DEFAULT_PRECESSION_RATIO: f64 = E;

/// Pre-computed sines and cosines for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameAngles {
    /// Spin angle θ (radians)
    pub theta: f64,
    /// Precession angle φ (radians)
    pub phi: f64,
    /// sin θ
    pub sin_theta: f64,
    /// cos θ
    pub cos_theta: f64,
    /// sin φ
    pub sin_phi: f64,
    /// cos φ
    pub cos_phi: f64,
}

impl FrameAngles {
    /// Angles for `frame` out of `frame_count` frames.
    ///
    /// `frame_count` of zero is treated as one.
    pub fn for_frame(frame: u32, frame_count: u32, precession_ratio: f64) -> Self {
        let theta = TAU * frame as f64 / frame_count.max(1) as f64;
        Self::from_theta(theta, precession_ratio)
    }

    /// Angles for an explicit spin angle.
    pub fn from_theta(theta: f64, precession_ratio: f64) -> Self {
        let phi = precession_ratio * theta;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Self {
            theta,
            phi,
            sin_theta,
            cos_theta,
            sin_phi,
            cos_phi,
        }
    }
}
