//! Quaternion algebra.
//!
//! Hamilton quaternions `re + i·î + j·ĵ + k·k̂` over `f64`. The algebra is
//! associative, non-commutative and norm-multiplicative:
//!
//! ```text
//! î² = ĵ² = k̂² = îĵk̂ = -1
//! îĵ = k̂,  ĵk̂ = î,  k̂î = ĵ
//! |a·b| = |a|·|b|
//! ```
//!
//! Operations that divide by the norm (`reciprocal`, `divide`, `normalize`)
//! rescale by the largest component first, so tiny and huge finite inputs
//! keep full precision. A zero quaternion gives [`QuaternionError::ZeroNorm`];
//! non-finite inputs and results that overflow give
//! [`QuaternionError::NonFinite`]. None of them ever return NaN.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Domain errors for quaternion operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuaternionError {
    /// The operation needs a non-zero squared norm.
    #[error("{op} of a zero-norm quaternion")]
    ZeroNorm {
        /// Name of the failing operation
        op: &'static str,
    },

    /// An input component or the result is infinite or NaN.
    #[error("{op} is not representable in f64")]
    NonFinite {
        /// Name of the failing operation
        op: &'static str,
    },
}

/// A quaternion with `f64` components.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Quaternion {
    /// Real (scalar) part
    pub re: f64,
    /// First imaginary component
    pub i: f64,
    /// Second imaginary component
    pub j: f64,
    /// Third imaginary component
    pub k: f64,
}

impl Quaternion {
    /// Additive identity.
    pub const ZERO: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    /// Multiplicative identity.
    pub const ONE: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    /// Unit `î`.
    pub const I: Quaternion = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    /// Unit `ĵ`.
    pub const J: Quaternion = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    /// Unit `k̂`.
    pub const K: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new quaternion.
    #[inline]
    pub const fn new(re: f64, i: f64, j: f64, k: f64) -> Self {
        Self { re, i, j, k }
    }

    /// Build from `[re, i, j, k]`.
    #[inline]
    pub const fn from_array(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Components as `[re, i, j, k]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.re, self.i, self.j, self.k]
    }

    /// Multiply every component by `s`.
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.re * s, self.i * s, self.j * s, self.k * s)
    }

    /// Conjugate: negates the imaginary part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.i, -self.j, -self.k)
    }

    /// Squared norm (avoids sqrt).
    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.re * self.re + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Multiplicative inverse: `conjugate / norm²`.
    pub fn reciprocal(self) -> Result<Self, QuaternionError> {
        self.inverse("reciprocal")
    }

    /// Right division: `self · other⁻¹`.
    pub fn divide(self, other: Quaternion) -> Result<Self, QuaternionError> {
        Ok(self * other.inverse("divide")?)
    }

    /// Scale to unit norm.
    pub fn normalize(self) -> Result<Self, QuaternionError> {
        let (u, _) = self.rescaled("normalize")?;
        Ok(u.scale(1.0 / u.norm()))
    }

    /// Split into `(self / m, m)` where `m` is the largest component
    /// magnitude, so the squared norm of the first part lies in `[1, 4]`.
    fn rescaled(self, op: &'static str) -> Result<(Self, f64), QuaternionError> {
        let c = self.to_array();
        if c.iter().any(|x| !x.is_finite()) {
            return Err(QuaternionError::NonFinite { op });
        }
        let m = c.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
        if m == 0.0 {
            return Err(QuaternionError::ZeroNorm { op });
        }
        Ok((Self::from_array(c.map(|x| x / m)), m))
    }

    fn inverse(self, op: &'static str) -> Result<Self, QuaternionError> {
        let (u, m) = self.rescaled(op)?;
        let inv = u.conjugate().scale(1.0 / u.norm_squared());
        let c = inv.to_array().map(|x| x / m);
        if c.iter().all(|x| x.is_finite()) {
            Ok(Self::from_array(c))
        } else {
            Err(QuaternionError::NonFinite { op })
        }
    }

    /// `self · self`
    #[inline]
    pub fn square(self) -> Self {
        self * self
    }

    /// `self · self · self`
    #[inline]
    pub fn cube(self) -> Self {
        self.square() * self
    }

    /// Integer power by repeated multiplication. `powi(0)` is [`Quaternion::ONE`].
    #[inline]
    pub fn powi(self, n: u32) -> Self {
        match n {
            0 => Self::ONE,
            1 => self,
            2 => self.square(),
            _ => {
                let mut out = self;
                for _ in 1..n {
                    out = out * self;
                }
                out
            }
        }
    }

    /// `a + (b + c)`
    #[inline]
    pub fn sum3(a: Self, b: Self, c: Self) -> Self {
        a + (b + c)
    }

    /// `(a + b) + (c + d)`
    #[inline]
    pub fn sum4(a: Self, b: Self, c: Self, d: Self) -> Self {
        (a + b) + (c + d)
    }

    /// `sum3(a, b, c) + sum3(d, e, f)`
    #[inline]
    pub fn sum6(a: Self, b: Self, c: Self, d: Self, e: Self, f: Self) -> Self {
        Self::sum3(a, b, c) + Self::sum3(d, e, f)
    }

    /// `(a · b) · c`
    #[inline]
    pub fn product3(a: Self, b: Self, c: Self) -> Self {
        (a * b) * c
    }

    /// `(a · b) · (c · d)`
    #[inline]
    pub fn product4(a: Self, b: Self, c: Self, d: Self) -> Self {
        (a * b) * (c * d)
    }

    /// The four unit quaternions `(±î ± ĵ ± k̂)/√3` with an even number of
    /// minus signs. They are the vertices of a regular tetrahedron on the
    /// unit sphere of pure quaternions.
    pub fn tetrahedral_roots() -> Result<[Self; 4], QuaternionError> {
        let (i, j, k) = (Self::I, Self::J, Self::K);
        Ok([
            Self::sum3(i, j, k).normalize()?,
            Self::sum3(-i, -j, k).normalize()?,
            Self::sum3(i, -j, -k).normalize()?,
            Self::sum3(-i, j, -k).normalize()?,
        ])
    }
}

impl Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, o: Self) -> Self {
        Self::new(self.re + o.re, self.i + o.i, self.j + o.j, self.k + o.k)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, o: Self) -> Self {
        Self::new(self.re - o.re, self.i - o.i, self.j - o.j, self.k - o.k)
    }
}

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, n: Self) -> Self {
        let m = self;
        Self::new(
            m.re * n.re - m.i * n.i - m.j * n.j - m.k * n.k,
            m.re * n.i + m.i * n.re + m.j * n.k - m.k * n.j,
            m.re * n.j + m.j * n.re + m.k * n.i - m.i * n.k,
            m.re * n.k + m.k * n.re + m.i * n.j - m.j * n.i,
        )
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, s: f64) -> Self {
        self.scale(s)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_quat_eq(a: Quaternion, b: Quaternion, eps: f64) {
        assert_relative_eq!(a.re, b.re, epsilon = eps);
        assert_relative_eq!(a.i, b.i, epsilon = eps);
        assert_relative_eq!(a.j, b.j, epsilon = eps);
        assert_relative_eq!(a.k, b.k, epsilon = eps);
    }

    fn samples() -> Vec<Quaternion> {
        vec![
            Quaternion::new(1.0, 2.0, 3.0, 4.0),
            Quaternion::new(-0.45, -0.477, 0.181, 0.306),
            Quaternion::new(0.3, -1.7, 0.0, 2.2),
            Quaternion::new(-3.1, 0.01, -0.5, 0.75),
        ]
    }

    #[test]
    fn test_unit_products() {
        let (i, j, k) = (Quaternion::I, Quaternion::J, Quaternion::K);
        assert_eq!(i * i, -Quaternion::ONE);
        assert_eq!(j * j, -Quaternion::ONE);
        assert_eq!(k * k, -Quaternion::ONE);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(Quaternion::product3(i, j, k), -Quaternion::ONE);
    }

    #[test]
    fn test_additive_associativity() {
        let s = samples();
        for a in &s {
            for b in &s {
                for c in &s {
                    assert_quat_eq((*a + *b) + *c, *a + (*b + *c), 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_multiplicative_associativity() {
        let s = samples();
        for a in &s {
            for b in &s {
                for c in &s {
                    assert_quat_eq((*a * *b) * *c, *a * (*b * *c), 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_not_commutative() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-0.5, 0.25, 1.5, -2.0);
        assert_ne!(a * b, b * a);
        // Real quaternions do commute
        let r = Quaternion::new(2.5, 0.0, 0.0, 0.0);
        assert_eq!(a * r, r * a);
    }

    #[test]
    fn test_norm_multiplicative() {
        let s = samples();
        for a in &s {
            for b in &s {
                assert_relative_eq!((*a * *b).norm(), a.norm() * b.norm(), max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_reciprocal_is_inverse() {
        for a in samples() {
            let inv = a.reciprocal().unwrap();
            assert_quat_eq(a * inv, Quaternion::ONE, 1e-12);
            assert_quat_eq(inv * a, Quaternion::ONE, 1e-12);
        }
    }

    #[test]
    fn test_divide() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(0.5, -1.0, 0.0, 2.0);
        let q = a.divide(b).unwrap();
        assert_quat_eq(q * b, a, 1e-12);
    }

    #[test]
    fn test_zero_norm_is_domain_error() {
        let z = Quaternion::ZERO;
        assert_eq!(
            z.reciprocal(),
            Err(QuaternionError::ZeroNorm { op: "reciprocal" })
        );
        assert_eq!(
            Quaternion::ONE.divide(z),
            Err(QuaternionError::ZeroNorm { op: "divide" })
        );
        assert_eq!(
            z.normalize(),
            Err(QuaternionError::ZeroNorm { op: "normalize" })
        );
    }

    #[test]
    fn test_tiny_and_huge_norms() {
        let tiny = Quaternion::new(1e-155, 0.0, 0.0, 0.0);
        let inv = tiny.reciprocal().unwrap();
        assert_relative_eq!(inv.re, 1e155, max_relative = 1e-12);
        assert_eq!((inv.i, inv.j, inv.k), (0.0, 0.0, 0.0));
        assert_eq!(tiny.normalize().unwrap(), Quaternion::ONE);

        let huge = Quaternion::new(1e200, 0.0, 0.0, 0.0);
        assert_eq!(huge.normalize().unwrap(), Quaternion::ONE);
        assert_relative_eq!(huge.reciprocal().unwrap().re, 1e-200, max_relative = 1e-12);

        let mixed = Quaternion::new(3e200, -4e200, 0.0, 0.0).normalize().unwrap();
        assert_relative_eq!(mixed.re, 0.6, epsilon = 1e-15);
        assert_relative_eq!(mixed.i, -0.8, epsilon = 1e-15);
        assert_quat_eq(
            Quaternion::new(2e-160, 0.0, 1e-160, 2e-160).normalize().unwrap(),
            Quaternion::new(2.0 / 3.0, 0.0, 1.0 / 3.0, 2.0 / 3.0),
            1e-15,
        );
    }

    #[test]
    fn test_unrepresentable_results_are_errors() {
        let subnormal = Quaternion::new(1e-310, 0.0, 0.0, 0.0);
        assert_eq!(
            subnormal.reciprocal(),
            Err(QuaternionError::NonFinite { op: "reciprocal" })
        );
        assert_eq!(
            Quaternion::ONE.divide(subnormal),
            Err(QuaternionError::NonFinite { op: "divide" })
        );
        assert_eq!(subnormal.normalize().unwrap(), Quaternion::ONE);

        let nan = Quaternion::new(f64::NAN, 1.0, 0.0, 0.0);
        assert_eq!(
            nan.normalize(),
            Err(QuaternionError::NonFinite { op: "normalize" })
        );
        let inf = Quaternion::new(f64::INFINITY, 0.0, 0.0, 0.0);
        assert_eq!(
            inf.reciprocal(),
            Err(QuaternionError::NonFinite { op: "reciprocal" })
        );
    }

    #[test]
    fn test_subtraction_is_componentwise() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(0.5, 0.25, 8.0, -1.0);
        assert_eq!(a - b, Quaternion::new(0.5, 1.75, -5.0, 5.0));
        assert_eq!(a - a, Quaternion::ZERO);
    }

    #[test]
    fn test_conjugate_product() {
        let a = Quaternion::new(1.0, -2.0, 0.5, 3.0);
        let p = a * a.conjugate();
        assert_quat_eq(p, Quaternion::new(a.norm_squared(), 0.0, 0.0, 0.0), 1e-12);
    }

    #[test]
    fn test_powers() {
        let q = Quaternion::new(0.3, -0.2, 0.5, 0.1);
        assert_eq!(q.powi(0), Quaternion::ONE);
        assert_eq!(q.powi(1), q);
        assert_eq!(q.powi(2), q.square());
        assert_quat_eq(q.powi(3), q.cube(), 1e-15);
        assert_quat_eq(q.powi(4), q.square().square(), 1e-14);
        assert_quat_eq(q.powi(5), q * q.powi(4), 1e-14);
    }

    #[test]
    fn test_fixed_arity_sums() {
        let s = samples();
        let expected = s[0] + s[1] + s[2] + s[3];
        assert_quat_eq(Quaternion::sum4(s[0], s[1], s[2], s[3]), expected, 1e-12);
        assert_quat_eq(
            Quaternion::sum6(s[0], s[1], s[2], s[3], Quaternion::ONE, Quaternion::K),
            expected + Quaternion::ONE + Quaternion::K,
            1e-12,
        );
        assert_quat_eq(
            Quaternion::product4(s[0], s[1], s[2], s[3]),
            s[0] * s[1] * s[2] * s[3],
            1e-9,
        );
    }

    #[test]
    fn test_tetrahedral_roots() {
        let roots = Quaternion::tetrahedral_roots().unwrap();
        for r in &roots {
            assert_relative_eq!(r.norm(), 1.0, epsilon = 1e-12);
            assert_eq!(r.re, 0.0);
        }
        // Distinct vertices sit at equal pairwise angles: dot = -1/3
        for a in 0..4 {
            for b in (a + 1)..4 {
                let (p, q) = (roots[a], roots[b]);
                let dot = p.i * q.i + p.j * q.j + p.k * q.k;
                assert_relative_eq!(dot, -1.0 / 3.0, epsilon = 1e-12);
            }
        }
    }
}
