//! Poisson likelihood marginalized over a gamma-distributed rate.

use say_ad::Scalar;
use say_core::Result;

use crate::math::{compensated_sum, log1p};
use crate::poisson::ln_factorial;

/// Log-likelihood of observing `k` events when the Poisson rate follows
/// `Gamma(shape = alpha, rate = beta)`.
///
/// ```text
/// alpha ln(beta) + ln Γ(k + alpha) - ln Γ(k + 1) - (k + alpha) ln(1 + beta) - ln Γ(alpha)
/// ```
///
/// This is a negative binomial with `r = alpha`, `p = beta / (1 + beta)`.
/// The five terms are of similar size and mixed sign, so they are combined
/// with [`compensated_sum`]; `ln(1 + beta)` goes through [`log1p`] because
/// `beta` is often small.
///
/// Valid for `k >= 0`, `alpha > 0`, `beta > 0`.
///
/// # Errors
///
/// Propagates the [`log1p`] domain error for `beta <= -1`.
pub fn gamma_prior_poisson_llh<T: Scalar>(k: f64, alpha: T, beta: T) -> Result<T> {
    let k_alpha = T::from_f64(k) + alpha;
    let terms = [
        alpha * beta.ln(),
        k_alpha.ln_gamma(),
        -T::from_f64(ln_factorial(k)),
        -(k_alpha * log1p(beta)?),
        -alpha.ln_gamma(),
    ];
    Ok(compensated_sum(terms))
}
