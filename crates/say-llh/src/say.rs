//! SAY likelihoods: Poisson likelihoods whose rate is marginalized over a
//! gamma prior fitted to the weighted-sample moments of the bin.
//!
//! The three variants share the degenerate-bin handling in [`say_llh`] and
//! differ only in how [`MomentMatching`] turns `(w_sum, w2_sum)` into the
//! gamma shape and rate.

use say_ad::Scalar;
use say_core::Result;

use crate::gamma_poisson::gamma_prior_poisson_llh;
use crate::moments::WeightMoments;
use crate::poisson::{poisson_llh, zero_rate_llh};

/// How the gamma prior is matched to the weight moments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MomentMatching {
    /// Prior mean and variance equal `w_sum` and `w2_sum`.
    Mean,
    /// Prior mode and variance equal `w_sum` and `w2_sum`.
    Mode,
    /// Mean matching with the shape raised by one (flat prior on the rate).
    Uninformed,
}

impl MomentMatching {
    /// Gamma `(shape, rate)` for `mu = w_sum > 0` and `sigma2 = w2_sum > 0`.
    ///
    /// The shape is `mu * beta` for Mean (equal to `mu^2 / sigma2`) and
    /// `mu * beta + 1` for Mode (equal to `(mu root / sigma2 + mu^2 / sigma2 + 2) / 2`)
    /// and Uninformed, so it only overflows when its true value does.
    pub fn gamma_params<T: Scalar>(self, mu: T, sigma2: T) -> (T, T) {
        let one = T::from_f64(1.0);
        let two = T::from_f64(2.0);
        match self {
            MomentMatching::Mean => {
                let beta = mu / sigma2;
                (mu * beta, beta)
            }
            MomentMatching::Mode => {
                // sqrt(mu^2 + 4 sigma2) with mu scaled by sqrt(sigma2); the
                // radicand is > 0 whenever sigma2 > 0.
                let s = sigma2.sqrt();
                let r = mu / s;
                let root = s * (r * r + T::from_f64(4.0)).sqrt();
                let beta = (mu + root) / sigma2 / two;
                (mu * beta + one, beta)
            }
            MomentMatching::Uninformed => {
                let beta = mu / sigma2;
                (mu * beta + one, beta)
            }
        }
    }
}

/// SAY log-likelihood of `k` observed events given the bin's weight moments.
///
/// Degenerate bins are resolved before any prior is built:
/// 1. `w_sum <= 0` or `w2_sum < 0`: `0` if `k == 0`, else `-inf`.
/// 2. `w2_sum == 0`: exactly [`poisson_llh`] with rate `w_sum`.
///
/// Otherwise the prior parameters from `matching` are passed to
/// [`gamma_prior_poisson_llh`]. Priors that f64 cannot represent are
/// replaced by their limits:
/// - shape or rate overflows, or the gamma-prior terms overflow so the value
///   is not finite: the prior is narrower than f64 resolves, and the Poisson
///   likelihood with rate `w_sum` is returned;
/// - shape underflows to zero: all prior mass sits at rate zero, giving `0`
///   for `k == 0` and `-inf` otherwise;
/// - rate underflows to zero with a positive shape: the prior mass escapes
///   to infinite rate and every finite `k` gets `-inf`.
///
/// # Errors
///
/// Propagates the `log1p` domain error from the gamma-prior likelihood. The
/// rate is positive on that path, so in-contract inputs never fail.
pub fn say_llh<T: Scalar>(matching: MomentMatching, k: f64, w_sum: T, w2_sum: T) -> Result<T> {
    let (mu, sigma2) = (w_sum.value(), w2_sum.value());

    if mu <= 0.0 || sigma2 < 0.0 {
        tracing::trace!(k, w_sum = mu, w2_sum = sigma2, branch = "empty", "SAY degenerate bin");
        return Ok(zero_rate_llh(k));
    }

    if sigma2 == 0.0 {
        tracing::trace!(k, w_sum = mu, branch = "poisson", "SAY degenerate bin");
        return Ok(poisson_llh(k, w_sum));
    }

    let (alpha, beta) = matching.gamma_params(w_sum, w2_sum);
    let (a, b) = (alpha.value(), beta.value());

    if !a.is_finite() || !b.is_finite() {
        tracing::trace!(k, w_sum = mu, w2_sum = sigma2, branch = "narrow_prior", "SAY overflow");
        return Ok(poisson_llh(k, w_sum));
    }
    if a <= 0.0 {
        tracing::trace!(k, w_sum = mu, w2_sum = sigma2, branch = "zero_shape", "SAY underflow");
        return Ok(zero_rate_llh(k));
    }
    if b <= 0.0 {
        tracing::trace!(k, w_sum = mu, w2_sum = sigma2, branch = "zero_rate", "SAY underflow");
        return Ok(T::from_f64(f64::NEG_INFINITY));
    }

    let lp = gamma_prior_poisson_llh(k, alpha, beta)?;
    if !lp.value().is_finite() {
        // ln Γ(alpha) and alpha ln(beta) overflowed against each other.
        tracing::trace!(k, w_sum = mu, w2_sum = sigma2, branch = "narrow_prior", "SAY overflow");
        return Ok(poisson_llh(k, w_sum));
    }
    Ok(lp)
}

/// SAY likelihood with the prior mean matched to `w_sum`.
pub fn say_mean_llh<T: Scalar>(k: f64, w_sum: T, w2_sum: T) -> Result<T> {
    say_llh(MomentMatching::Mean, k, w_sum, w2_sum)
}

/// SAY likelihood with the prior mode matched to `w_sum`.
pub fn say_mode_llh<T: Scalar>(k: f64, w_sum: T, w2_sum: T) -> Result<T> {
    say_llh(MomentMatching::Mode, k, w_sum, w2_sum)
}

/// SAY likelihood with a flat prior on the rate (shape shifted by one).
pub fn say_uninformed_llh<T: Scalar>(k: f64, w_sum: T, w2_sum: T) -> Result<T> {
    say_llh(MomentMatching::Uninformed, k, w_sum, w2_sum)
}

/// [`say_mean_llh`] from the raw weights of the bin.
pub fn say_mean_llh_weights<T: Scalar>(k: f64, weights: &[T]) -> Result<T> {
    let m = WeightMoments::from_weights(weights);
    say_mean_llh(k, m.w_sum, m.w2_sum)
}

/// [`say_mode_llh`] from the raw weights of the bin.
pub fn say_mode_llh_weights<T: Scalar>(k: f64, weights: &[T]) -> Result<T> {
    let m = WeightMoments::from_weights(weights);
    say_mode_llh(k, m.w_sum, m.w2_sum)
}

/// [`say_uninformed_llh`] from the raw weights of the bin.
pub fn say_uninformed_llh_weights<T: Scalar>(k: f64, weights: &[T]) -> Result<T> {
    let m = WeightMoments::from_weights(weights);
    say_uninformed_llh(k, m.w_sum, m.w2_sum)
}
