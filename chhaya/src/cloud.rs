//! Retained point cloud.
//!
//! A flat array of `N³` slots, one per lattice index (`N²·A + N·B + C`).
//! Each slot holds either the retained point or [`Point3D::EXCLUDED`].
//! Every slot starts as the sentinel; classification overwrites only
//! retained slots. After the build the cloud is immutable, so frame
//! renders can share it across threads without synchronization.

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use rayon::prelude::*;

use crate::classify::EscapeClassifier;
use crate::core::Point3D;
use crate::error::{Error, Result};
use crate::lattice::LatticeSampler;

/// Occupancy diagnostic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    /// Retained (non-sentinel) slots
    pub occupied: usize,
    /// All slots
    pub total: usize,
}

impl Occupancy {
    /// Occupied fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.occupied as f64 / self.total as f64
        }
    }
}

/// Immutable store of classified lattice points.
#[derive(Clone, Debug)]
pub struct PointCloud {
    slots: Vec<Point3D>,
    resolution: usize,
}

impl PointCloud {
    /// Build on the calling thread.
    pub fn build(sampler: &LatticeSampler, classifier: &EscapeClassifier) -> Result<Self> {
        let n = sampler.resolution();
        let mut slots = allocate(sampler.len())?;

        for (a, slab) in slots.chunks_mut(n * n).enumerate() {
            fill_slab(sampler, classifier, a, slab);
        }

        Ok(Self {
            slots,
            resolution: n,
        })
    }

    /// Build with one rayon task per A-slab.
    ///
    /// `cancel` is checked before each slab; once set, the build stops and
    /// returns [`Error::Cancelled`].
    pub fn build_parallel(
        sampler: &LatticeSampler,
        classifier: &EscapeClassifier,
        cancel: &AtomicBool,
    ) -> Result<Self> {
        let n = sampler.resolution();
        let mut slots = allocate(sampler.len())?;

        slots
            .par_chunks_mut(n * n)
            .enumerate()
            .try_for_each(|(a, slab)| {
                if cancel.load(Ordering::Relaxed) {
                    return Err(Error::Cancelled);
                }
                fill_slab(sampler, classifier, a, slab);
                Ok(())
            })?;

        Ok(Self {
            slots,
            resolution: n,
        })
    }

    /// Points per lattice axis.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Number of slots (N³).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True only for a zero-slot cloud.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Retained point at `index`, `None` if excluded or out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Point3D> {
        self.slots.get(index).copied().filter(|p| !p.is_excluded())
    }

    /// Every slot, sentinels included.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3D> {
        self.slots.iter()
    }

    /// Retained points only.
    pub fn retained(&self) -> impl Iterator<Item = Point3D> + '_ {
        self.slots.iter().copied().filter(|p| !p.is_excluded())
    }

    /// Count of retained slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|p| !p.is_excluded()).count()
    }

    /// Occupied count and fraction.
    pub fn occupancy(&self) -> Occupancy {
        Occupancy {
            occupied: self.occupied_count(),
            total: self.slots.len(),
        }
    }
}

/// Allocate `len` slots, all set to the sentinel.
fn allocate(len: usize) -> Result<Vec<Point3D>> {
    let bytes = len.saturating_mul(std::mem::size_of::<Point3D>());
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(len)
        .map_err(|_| Error::Allocation { slots: len, bytes })?;
    slots.resize(len, Point3D::EXCLUDED);
    debug!("Allocated {} slots ({:.1} MiB)", len, bytes as f64 / (1024.0 * 1024.0));
    Ok(slots)
}

fn fill_slab(sampler: &LatticeSampler, classifier: &EscapeClassifier, a: usize, slab: &mut [Point3D]) {
    for (slot, (_, seed)) in slab.iter_mut().zip(sampler.slab_seeds(a)) {
        let point = classifier.classify_point(seed);
        if !point.is_excluded() {
            *slot = point;
        }
    }
}
