//! Gaussian approximations to the bin likelihood.

use say_ad::Scalar;

use crate::moments::WeightMoments;

/// `-(mu - k)² / (2 mu)` for `mu > 0`, else `0`.
pub fn chi2_llh_moments<T: Scalar>(k: f64, mu: T) -> T {
    if mu.value() > 0.0 {
        let diff = mu - T::from_f64(k);
        return -(diff * diff) / mu / T::from_f64(2.0);
    }
    T::from_f64(0.0)
}

/// `-(mu - k)² / (2 (mu + mu2))` for `mu > 0`, else `0`.
pub fn pearson_chi2_llh_moments<T: Scalar>(k: f64, mu: T, mu2: T) -> T {
    if mu.value() > 0.0 {
        let diff = mu - T::from_f64(k);
        let var = mu + mu2;
        if var.value().is_finite() {
            return -(diff / var) * diff / T::from_f64(2.0);
        }
        // mu + mu2 overflowed; halve both so the denominator stays finite.
        let half = T::from_f64(0.5);
        return -(diff / (mu * half + mu2 * half)) * diff / T::from_f64(4.0);
    }
    T::from_f64(0.0)
}

/// Chi-square log-likelihood of `k` events against the summed `weights`.
///
/// A quadratic approximation to the Poisson log-likelihood around its mean.
pub fn chi2_llh<T: Scalar>(k: u32, weights: &[T]) -> T {
    let m = WeightMoments::from_weights(weights);
    chi2_llh_moments(f64::from(k), m.w_sum)
}

/// Chi-square log-likelihood with the weight variance added to the
/// expected variance (a Pearson/Neyman-style statistic).
pub fn pearson_chi2_llh<T: Scalar>(k: u32, weights: &[T]) -> T {
    let m = WeightMoments::from_weights(weights);
    pearson_chi2_llh_moments(f64::from(k), m.w_sum, m.w2_sum)
}
