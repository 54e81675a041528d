//! Core value types.
//!
//! - [`Quaternion`]: hyper-complex iteration domain
//! - [`Point3D`]: retained volume point (quaternion with `k` dropped)
//! - [`FrameAngles`]: per-frame spin and precession angles

pub mod math;
mod point;
mod quaternion;

pub use math::{DEFAULT_PRECESSION_RATIO, FrameAngles};
pub use point::Point3D;
pub use quaternion::{Quaternion, QuaternionError};
