//! Escape-time classification.
//!
//! Iterates the quaternion Julia map `q ← q^p + c` from a seed and reports
//! whether the orbit stayed inside the escape radius for the full iteration
//! budget. Bounded orbits approximate the filled Julia set.
//!
//! The seed itself is never tested; the first escape test is on `q₁`.
//! Whether `|q| == radius` counts as escaped is set by [`EscapeBoundary`].

use serde::{Deserialize, Serialize};

use crate::core::{Point3D, Quaternion};

/// How an orbit sitting exactly on the escape radius is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeBoundary {
    /// `|q| >= radius` escapes.
    #[default]
    Inclusive,
    /// Only `|q| > radius` escapes.
    Exclusive,
}

/// Escape-time parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EscapeConfig {
    /// Julia constant `c`
    pub constant: Quaternion,

    /// Escape radius (norm threshold)
    pub escape_radius: f64,

    /// Iteration budget
    pub max_iterations: u32,

    /// Exponent of the Julia map (2 for `q² + c`)
    pub power: u32,

    /// Treatment of `|q| == radius`
    pub boundary: EscapeBoundary,
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self {
            constant: Quaternion::new(-0.450, -0.477, 0.181, 0.306),
            escape_radius: 2.0,
            max_iterations: 30,
            power: 2,
            boundary: EscapeBoundary::Inclusive,
        }
    }
}

/// Outcome for a single seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Orbit stayed bounded for the whole budget.
    Retained,
    /// Orbit escaped at this iteration (1-based).
    Excluded {
        /// Iteration whose result failed the escape test
        iteration: u32,
    },
}

impl Classification {
    /// Did the seed survive?
    #[inline]
    pub fn is_retained(&self) -> bool {
        matches!(self, Classification::Retained)
    }
}

/// Julia-map escape classifier.
#[derive(Clone, Debug)]
pub struct EscapeClassifier {
    config: EscapeConfig,
    radius_squared: f64,
}

impl EscapeClassifier {
    /// Create a classifier.
    pub fn new(config: EscapeConfig) -> Self {
        let radius_squared = config.escape_radius * config.escape_radius;
        Self {
            config,
            radius_squared,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &EscapeConfig {
        &self.config
    }

    /// One application of the Julia map.
    #[inline]
    pub fn step(&self, q: Quaternion) -> Quaternion {
        let c = self.config.constant;
        match self.config.power {
            2 => q.square() + c,
            p => q.powi(p) + c,
        }
    }

    /// Escape test in squared form. NaN always counts as escaped.
    #[inline]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn escaped(&self, q: Quaternion) -> bool {
        let n2 = q.norm_squared();
        match self.config.boundary {
            EscapeBoundary::Inclusive => !(n2 < self.radius_squared),
            EscapeBoundary::Exclusive => !(n2 <= self.radius_squared),
        }
    }

    /// Iterate from `seed` until escape or budget exhaustion.
    pub fn classify(&self, seed: Quaternion) -> Classification {
        let mut q = seed;
        for iteration in 1..=self.config.max_iterations {
            q = self.step(q);
            if self.escaped(q) {
                return Classification::Excluded { iteration };
            }
        }
        Classification::Retained
    }

    /// The slot value for `seed`: its 3-D projection if retained, the
    /// sentinel otherwise.
    #[inline]
    pub fn classify_point(&self, seed: Quaternion) -> Point3D {
        if self.classify(seed).is_retained() {
            Point3D::from_quaternion(seed)
        } else {
            Point3D::EXCLUDED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(constant: Quaternion, max_iterations: u32, boundary: EscapeBoundary) -> EscapeClassifier {
        EscapeClassifier::new(EscapeConfig {
            constant,
            max_iterations,
            boundary,
            ..Default::default()
        })
    }

    #[test]
    fn test_origin_retained_for_bounded_constant() {
        for c in [
            Quaternion::new(-0.5, 0.0, 0.0, 0.0),
            Quaternion::new(0.1, 0.1, 0.1, 0.1),
            Quaternion::ZERO,
        ] {
            assert!(c.norm_squared() < 4.0);
            let clf = classifier(c, 30, EscapeBoundary::Inclusive);
            assert_eq!(clf.classify(Quaternion::ZERO), Classification::Retained);
        }
    }

    #[test]
    fn test_far_seed_escapes_immediately() {
        let clf = EscapeClassifier::new(EscapeConfig::default());
        assert_eq!(
            clf.classify(Quaternion::new(100.0, 0.0, 0.0, 0.0)),
            Classification::Excluded { iteration: 1 }
        );
    }

    #[test]
    fn test_zero_constant_end_to_end() {
        for boundary in [EscapeBoundary::Inclusive, EscapeBoundary::Exclusive] {
            let clf = classifier(Quaternion::ZERO, 5, boundary);
            // Zero is a fixed point
            assert_eq!(clf.classify(Quaternion::ZERO), Classification::Retained);
            // 2 → 4 on the first step
            assert_eq!(
                clf.classify(Quaternion::new(2.0, 0.0, 0.0, 0.0)),
                Classification::Excluded { iteration: 1 }
            );
        }
    }

    #[test]
    fn test_boundary_inclusive() {
        // 2 is a fixed point of q² - 2, with |q| == 2 exactly
        let c = Quaternion::new(-2.0, 0.0, 0.0, 0.0);
        let clf = classifier(c, 5, EscapeBoundary::Inclusive);
        assert_eq!(
            clf.classify(Quaternion::new(2.0, 0.0, 0.0, 0.0)),
            Classification::Excluded { iteration: 1 }
        );
    }

    #[test]
    fn test_boundary_exclusive() {
        let c = Quaternion::new(-2.0, 0.0, 0.0, 0.0);
        let clf = classifier(c, 5, EscapeBoundary::Exclusive);
        assert_eq!(
            clf.classify(Quaternion::new(2.0, 0.0, 0.0, 0.0)),
            Classification::Retained
        );
    }

    #[test]
    fn test_seed_is_not_tested() {
        // |seed| > radius but q₁ = seed² + c lands inside
        let c = Quaternion::new(-4.0, 0.0, 0.0, 0.0);
        let clf = classifier(c, 1, EscapeBoundary::Inclusive);
        assert_eq!(
            clf.classify(Quaternion::new(2.2, 0.0, 0.0, 0.0)),
            Classification::Retained
        );
    }

    #[test]
    fn test_nan_never_retained() {
        let clf = EscapeClassifier::new(EscapeConfig::default());
        let seed = Quaternion::new(f64::NAN, 0.0, 0.0, 0.0);
        assert!(!clf.classify(seed).is_retained());
        assert!(clf.classify_point(seed).is_excluded());
    }

    #[test]
    fn test_higher_power() {
        let clf = EscapeClassifier::new(EscapeConfig {
            constant: Quaternion::ZERO,
            power: 3,
            ..Default::default()
        });
        assert_eq!(
            clf.step(Quaternion::new(0.5, 0.0, 0.0, 0.0)),
            Quaternion::new(0.125, 0.0, 0.0, 0.0)
        );
        assert!(clf.classify(Quaternion::new(0.9, 0.0, 0.0, 0.0)).is_retained());
    }

    #[test]
    fn test_classify_point_drops_k() {
        let clf = classifier(Quaternion::ZERO, 10, EscapeBoundary::Inclusive);
        let p = clf.classify_point(Quaternion::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(p, Point3D::new(0.1, 0.2, 0.3));
    }
}
