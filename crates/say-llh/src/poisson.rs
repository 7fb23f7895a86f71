//! Poisson bin likelihood with real-valued (effective) counts.

use say_ad::Scalar;
use statrs::function::gamma::ln_gamma;

/// `ln(k!)` via `ln Γ(k + 1)`, so fractional effective counts are accepted.
#[inline]
pub(crate) fn ln_factorial(k: f64) -> f64 {
    ln_gamma(k + 1.0)
}

/// Log-likelihood of a bin whose rate is identically zero: certain when
/// nothing was observed, impossible otherwise.
#[inline]
pub(crate) fn zero_rate_llh<T: Scalar>(k: f64) -> T {
    if k == 0.0 { T::from_f64(0.0) } else { T::from_f64(f64::NEG_INFINITY) }
}

/// Log-PMF of a Poisson distribution with rate `lambda` at count `k`.
///
/// `ln(lambda^k e^-lambda / k!)` with the factorial taken through the
/// log-gamma function, so `k` may be fractional. A zero rate gives `0` for
/// `k == 0` and `-inf` otherwise. Negative `k` is outside the contract and
/// yields whatever `ln Γ` produces there.
pub fn poisson_llh<T: Scalar>(k: f64, lambda: T) -> T {
    if lambda.value() == 0.0 {
        return zero_rate_llh(k);
    }
    let norm = lambda + T::from_f64(ln_factorial(k));
    T::from_f64(k) * lambda.ln() - norm
}
