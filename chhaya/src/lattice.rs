//! Lattice sampling.
//!
//! Maps every integer triple `(A, B, C) ∈ [0, N)³` to a seed quaternion:
//!
//! ```text
//! re = (A - (N-1)/2) / spacing + J·u1
//! i  = (B - (N-1)/2) / spacing + J·u2
//! j  = (C - (N-1)/2) / spacing + J·u3
//! k  =                           J·u4
//! ```
//!
//! where `u1..u4` are independent uniform draws in `[-1, 0)`. The affine
//! part is injective over the lattice and centered on the origin.
//!
//! ## Random streams
//!
//! Each A-slab (the `N²` points sharing one `A`) draws from its own
//! [`SmallRng`] seeded from the base seed and `A`. Sequential and parallel
//! builds therefore see identical seeds regardless of scheduling.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::Quaternion;
use crate::error::{Error, Result};

/// Lattice configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatticeConfig {
    /// Points per axis (N)
    pub resolution: usize,

    /// Jitter scale (J). Zero disables jitter.
    pub jitter: f64,

    /// Lattice steps per unit of quaternion space
    pub spacing: f64,

    /// RNG seed for jitter. Zero draws a seed from OS entropy.
    pub seed: u64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            resolution: 301, // 27,270,901 points
            jitter: 0.001,
            spacing: 150.0, // covers roughly [-1, 1] per axis
            seed: 0,
        }
    }
}

/// Generates one seed quaternion per lattice point.
#[derive(Clone, Debug)]
pub struct LatticeSampler {
    config: LatticeConfig,
    center: f64,
    base_seed: u64,
    len: usize,
}

impl LatticeSampler {
    /// Create a sampler, rejecting empty or overflowing lattices.
    pub fn new(config: LatticeConfig) -> Result<Self> {
        let n = config.resolution;
        if n == 0 {
            return Err(Error::Lattice("resolution must be at least 1".into()));
        }
        if !(config.spacing.is_finite() && config.spacing > 0.0) {
            return Err(Error::Lattice(format!(
                "spacing must be positive, got {}",
                config.spacing
            )));
        }
        if !(config.jitter.is_finite() && config.jitter >= 0.0) {
            return Err(Error::Lattice(format!(
                "jitter must be non-negative, got {}",
                config.jitter
            )));
        }
        let len = n
            .checked_mul(n)
            .and_then(|n2| n2.checked_mul(n))
            .ok_or_else(|| Error::Lattice(format!("{n}³ lattice points overflow usize")))?;

        let base_seed = if config.seed == 0 {
            rand::random()
        } else {
            config.seed
        };

        Ok(Self {
            center: (n - 1) as f64 / 2.0,
            base_seed,
            len,
            config,
        })
    }

    /// The configuration.
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Points per axis.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.config.resolution
    }

    /// Total lattice points (N³).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a lattice has at least one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Seed actually used for the jitter streams.
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Flat slot index of `(a, b, c)`.
    #[inline]
    pub fn index(&self, a: usize, b: usize, c: usize) -> usize {
        let n = self.config.resolution;
        (a * n + b) * n + c
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize, usize) {
        let n = self.config.resolution;
        (index / (n * n), (index / n) % n, index % n)
    }

    /// Unjittered seed for `(a, b, c)`.
    #[inline]
    pub fn affine(&self, a: usize, b: usize, c: usize) -> Quaternion {
        let s = self.config.spacing;
        Quaternion::new(
            (a as f64 - self.center) / s,
            (b as f64 - self.center) / s,
            (c as f64 - self.center) / s,
            0.0,
        )
    }

    /// Jitter stream for slab `a`.
    pub fn slab_rng(&self, a: usize) -> SmallRng {
        SmallRng::seed_from_u64(self.base_seed ^ (a as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Jittered seed for `(a, b, c)`, drawing four values from `rng`.
    #[inline]
    pub fn seed_at<R: Rng + ?Sized>(&self, a: usize, b: usize, c: usize, rng: &mut R) -> Quaternion {
        let j = self.config.jitter;
        let base = self.affine(a, b, c);
        Quaternion::new(
            base.re + j * draw(rng),
            base.i + j * draw(rng),
            base.j + j * draw(rng),
            j * draw(rng),
        )
    }

    /// All `N²` seeds of slab `a`, in index order.
    pub fn slab_seeds(&self, a: usize) -> impl Iterator<Item = (usize, Quaternion)> + '_ {
        let n = self.config.resolution;
        let offset = a * n * n;
        let mut rng = self.slab_rng(a);
        (0..n * n).map(move |bc| (offset + bc, self.seed_at(a, bc / n, bc % n, &mut rng)))
    }

    /// Every seed of the lattice, in index order.
    pub fn seeds(&self) -> impl Iterator<Item = (usize, Quaternion)> + '_ {
        (0..self.config.resolution).flat_map(move |a| self.slab_seeds(a))
    }
}

/// Uniform draw in `[-1, 0)`.
#[inline]
fn draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>() - 1.0
}
