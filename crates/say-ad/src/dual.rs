//! Forward-mode automatic differentiation via dual numbers.
//!
//! A dual number `Dual { val, dot }` carries a value and its derivative with
//! respect to one fit parameter. A fit engine obtains the full gradient of a
//! bin likelihood by evaluating it once per parameter, seeding that parameter
//! with `dot = 1.0`.

use statrs::function::gamma::{digamma, ln_gamma};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A dual number for forward-mode AD.
///
/// `val` holds the primal value, `dot` holds the derivative (tangent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    /// Primal (function) value.
    pub val: f64,
    /// Tangent (derivative) value.
    pub dot: f64,
}

impl Dual {
    /// Create a constant (derivative = 0).
    #[inline]
    pub fn constant(val: f64) -> Self {
        Self { val, dot: 0.0 }
    }

    /// Create an independent variable (derivative = 1).
    #[inline]
    pub fn var(val: f64) -> Self {
        Self { val, dot: 1.0 }
    }

    /// Create a dual with explicit tangent.
    #[inline]
    pub fn new(val: f64, dot: f64) -> Self {
        Self { val, dot }
    }

    /// Natural logarithm: d/dx ln(x) = 1/x.
    #[inline]
    pub fn ln(self) -> Self {
        Self { val: self.val.ln(), dot: self.dot / self.val }
    }

    /// Square root: d/dx sqrt(x) = 1/(2*sqrt(x)).
    #[inline]
    pub fn sqrt(self) -> Self {
        let s = self.val.sqrt();
        Self { val: s, dot: self.dot / (2.0 * s) }
    }

    /// Absolute value: d/dx |x| = sign(x).
    #[inline]
    pub fn abs(self) -> Self {
        Self { val: self.val.abs(), dot: self.dot * self.val.signum() }
    }

    /// Log-gamma: d/dx ln Γ(x) = ψ(x).
    ///
    /// A constant skips the digamma evaluation, which matters for the
    /// `ln Γ(k + 1)` terms where `k` is observed data.
    #[inline]
    pub fn ln_gamma(self) -> Self {
        let val = ln_gamma(self.val);
        if self.dot == 0.0 {
            return Self::constant(val);
        }
        Self { val, dot: self.dot * digamma(self.val) }
    }
}

// --- Arithmetic: Dual op Dual ---

impl Add for Dual {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { val: self.val + rhs.val, dot: self.dot + rhs.dot }
    }
}

impl Sub for Dual {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self { val: self.val - rhs.val, dot: self.dot - rhs.dot }
    }
}

impl Mul for Dual {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self { val: self.val * rhs.val, dot: self.dot * rhs.val + self.val * rhs.dot }
    }
}

impl Div for Dual {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self {
            val: self.val / rhs.val,
            dot: (self.dot * rhs.val - self.val * rhs.dot) / (rhs.val * rhs.val),
        }
    }
}

impl Neg for Dual {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { val: -self.val, dot: -self.dot }
    }
}

// --- PartialOrd ---

impl PartialOrd for Dual {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.val.partial_cmp(&other.val)
    }
}
