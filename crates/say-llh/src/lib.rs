//! Bin likelihoods for weighted Monte Carlo samples.
//!
//! Each bin contributes one log-likelihood computed from its observed count
//! and either the weights of the simulated events in it or their first two
//! moments (`w_sum`, `w2_sum`):
//! - [`poisson`]: the unweighted baseline
//! - [`gamma_poisson`]: Poisson with a gamma-distributed rate
//! - [`say`]: the SAY family (mean, mode and uninformed moment matching)
//! - [`chi2`]: Gaussian approximations
//!
//! Every function is generic over [`say_ad::Scalar`], so the same code runs
//! on `f64` and on forward-mode dual numbers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chi2;
pub mod dispatch;
pub mod gamma_poisson;
pub mod math;
pub mod moments;
pub mod poisson;
pub mod say;

pub use chi2::{chi2_llh, pearson_chi2_llh};
pub use dispatch::BinLikelihood;
pub use gamma_poisson::gamma_prior_poisson_llh;
pub use math::{compensated_sum, log1p};
pub use moments::WeightMoments;
pub use poisson::poisson_llh;
pub use say::{MomentMatching, say_llh, say_mean_llh, say_mode_llh, say_uninformed_llh};
pub use say_core::{Error, LikelihoodKind, Result};
