//! # say-ad
//!
//! Automatic differentiation (AD) primitives for the SAY likelihoods.
//!
//! Provides:
//! - **Forward-mode AD** via [`dual::Dual`] numbers (one tangent per evaluation)
//! - [`Scalar`] trait for writing likelihood code once over `f64` and `Dual`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dual;
pub mod scalar;

pub use dual::Dual;
pub use scalar::Scalar;
