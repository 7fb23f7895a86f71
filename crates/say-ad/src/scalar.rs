//! [`Scalar`] trait: abstraction over `f64` and [`Dual`](crate::dual::Dual)
//! that lets the bin likelihoods be written once and reused both for plain
//! evaluation **and** for forward-mode gradients inside a fit.

use crate::dual::Dual;
use statrs::function::gamma::ln_gamma;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A scalar type suitable for likelihood computation.
///
/// Implement this for `f64` (plain evaluation) and `Dual` (forward-mode AD).
/// Comparisons act on the primal value only.
pub trait Scalar:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + PartialOrd
    + Sized
{
    /// Wrap an `f64` constant (derivative = 0 for AD types).
    fn from_f64(v: f64) -> Self;

    /// Extract the primal (function) value.
    fn value(&self) -> f64;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Natural log of the gamma function, `ln Γ(x)`.
    fn ln_gamma(self) -> Self;
}

// --- f64 implementation ---

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn ln_gamma(self) -> Self {
        ln_gamma(self)
    }
}

// --- Dual implementation ---

impl Scalar for Dual {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Dual::constant(v)
    }

    #[inline]
    fn value(&self) -> f64 {
        self.val
    }

    #[inline]
    fn ln(self) -> Self {
        Dual::ln(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        Dual::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        Dual::abs(self)
    }

    #[inline]
    fn ln_gamma(self) -> Self {
        Dual::ln_gamma(self)
    }
}
