//! 3-D point type for the retained volume.

use serde::{Deserialize, Serialize};

use super::Quaternion;

/// A point in the sampled volume.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    /// X coordinate (quaternion real part)
    pub x: f64,
    /// Y coordinate (quaternion `i` part)
    pub y: f64,
    /// Z coordinate (quaternion `j` part)
    pub z: f64,
}

impl Point3D {
    /// Sentinel marking an excluded lattice slot.
    ///
    /// Retained seeds are always finite, so no retained point can compare
    /// equal to this value.
    pub const EXCLUDED: Point3D = Point3D {
        x: f64::NEG_INFINITY,
        y: f64::NEG_INFINITY,
        z: f64::NEG_INFINITY,
    };

    /// The origin.
    pub const ZERO: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project a quaternion into 3-D by dropping its `k` component.
    #[inline]
    pub fn from_quaternion(q: Quaternion) -> Self {
        Self::new(q.re, q.i, q.j)
    }

    /// Is this the excluded-slot sentinel?
    #[inline]
    pub fn is_excluded(&self) -> bool {
        self.x == f64::NEG_INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_k_component() {
        let p = Point3D::from_quaternion(Quaternion::new(0.1, -0.2, 0.3, 0.9));
        assert_eq!(p, Point3D::new(0.1, -0.2, 0.3));
        assert!(!p.is_excluded());
    }

    #[test]
    fn test_sentinel() {
        assert!(Point3D::EXCLUDED.is_excluded());
        assert!(!Point3D::ZERO.is_excluded());
        assert!(!Point3D::new(-23.0, -33.0, -10.0).is_excluded());
    }
}
