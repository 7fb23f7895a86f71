//! Numerically careful primitives shared by the bin likelihoods.

use say_ad::Scalar;
use say_core::{Error, Result};

/// Below this magnitude [`log1p`] switches from `ln(1 + x)` to a power series.
pub const LOG1P_SERIES_THRESHOLD: f64 = 1e-4;

/// Compensated (Neumaier) sum of `values`, in iteration order.
///
/// The rounding error does not grow with the number of terms, unlike a naive
/// running sum. The result still depends on the order of `values`; keep it
/// fixed when comparing or repeating evaluations.
///
/// Once the running sum leaves the finite range the compensation term is
/// frozen and the non-finite sum is returned unchanged.
pub fn compensated_sum<T, I>(values: I) -> T
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    let mut sum = T::from_f64(0.0);
    let mut comp = T::from_f64(0.0);
    for x in values {
        let t = sum + x;
        if t.value().is_finite() {
            // Recover the low-order bits lost by whichever operand was smaller.
            if sum.abs() >= x.abs() {
                comp = comp + ((sum - t) + x);
            } else {
                comp = comp + ((x - t) + sum);
            }
        }
        sum = t;
    }
    if sum.value().is_finite() { sum + comp } else { sum }
}

/// Accurate `ln(1 + x)` for `x > -1`.
///
/// For `|x| > 1e-4` this is the direct `ln(1 + x)`. Closer to zero, where
/// `1 + x` rounds away the digits of `x`, it evaluates
/// `x - x²/2 + x³/3 - x⁴/4`, whose truncation error stays below `x⁵/5`.
///
/// # Errors
///
/// [`Error::Domain`] carrying `x` when `x <= -1`.
pub fn log1p<T: Scalar>(x: T) -> Result<T> {
    let v = x.value();
    if v <= -1.0 {
        tracing::debug!(x = v, "log1p argument out of domain");
        return Err(Error::Domain { value: v });
    }

    if v.abs() > LOG1P_SERIES_THRESHOLD {
        return Ok((T::from_f64(1.0) + x).ln());
    }

    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    Ok(x - x2 / T::from_f64(2.0) + x3 / T::from_f64(3.0) - x4 / T::from_f64(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use say_ad::Dual;

    #[test]
    fn test_sum_empty_is_zero() {
        let s: f64 = compensated_sum(std::iter::empty());
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_sum_recovers_cancelled_units() {
        // Naive left-to-right summation drops the first unit.
        let xs = [1e16, 1.0, -1e16, 1.0];
        assert_eq!(xs.iter().sum::<f64>(), 1.0);
        assert_eq!(compensated_sum(xs), 2.0);
    }

    #[test]
    fn test_sum_many_tenths() {
        let xs = std::iter::repeat_n(0.1_f64, 1_000_000);
        let naive: f64 = std::iter::repeat_n(0.1_f64, 1_000_000).sum();
        let s: f64 = compensated_sum(xs);
        assert!((s - 100_000.0).abs() < 1e-9, "compensated = {}", s);
        assert!((naive - 100_000.0).abs() > (s - 100_000.0).abs());
    }

    #[test]
    fn test_sum_alternating_error_independent_of_length() {
        // Pairs (1.1, -1.0): every pair contributes exactly d = fl(1.1) - 1.
        let d = 1.1_f64 - 1.0;
        for n_pairs in [5_000usize, 500_000] {
            let xs = (0..2 * n_pairs).map(|i| if i % 2 == 0 { 1.1_f64 } else { -1.0 });
            let naive: f64 =
                (0..2 * n_pairs).map(|i| if i % 2 == 0 { 1.1_f64 } else { -1.0 }).sum();
            let reference = n_pairs as f64 * d;
            let s: f64 = compensated_sum(xs);
            let err = (s - reference).abs();
            assert!(err < 1e-9, "n_pairs={} err={}", n_pairs, err);
            assert!(err <= (naive - reference).abs(), "n_pairs={}", n_pairs);
        }
    }

    #[test]
    fn test_sum_infinite_term_does_not_become_nan() {
        let s: f64 = compensated_sum([1.0, f64::NEG_INFINITY, 2.0, -3.0]);
        assert_eq!(s, f64::NEG_INFINITY);
    }

    #[test]
    fn test_sum_carries_tangent() {
        let x = Dual::var(2.0);
        let s = compensated_sum([x, x * Dual::constant(3.0), Dual::constant(1.0)]);
        assert_relative_eq!(s.val, 9.0, epsilon = 1e-12);
        assert_relative_eq!(s.dot, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_log1p_matches_std() {
        let xs: [f64; 6] = [-0.99, -1e-5, 0.0, 1e-5, 1.0, 1000.0];
        for x in xs {
            let got = log1p(x).unwrap();
            assert_relative_eq!(got, x.ln_1p(), max_relative = 1e-8);
        }
    }

    #[test]
    fn test_log1p_series_beats_naive_near_zero() {
        let x = 1e-12_f64;
        let naive = (1.0 + x).ln();
        let got = log1p(x).unwrap();
        assert_relative_eq!(got, x.ln_1p(), max_relative = 1e-14);
        assert!((naive - x).abs() > (got - x).abs());
    }

    #[test]
    fn test_log1p_threshold_boundary() {
        for x in [LOG1P_SERIES_THRESHOLD, -LOG1P_SERIES_THRESHOLD, 1.0001e-4, -1.0001e-4] {
            assert_relative_eq!(log1p(x).unwrap(), x.ln_1p(), max_relative = 1e-8);
        }
    }

    #[test]
    fn test_log1p_domain_error() {
        assert_eq!(log1p(-1.0), Err(Error::Domain { value: -1.0 }));
        assert_eq!(log1p(-2.5), Err(Error::Domain { value: -2.5 }));
        assert!(log1p(Dual::var(-1.0)).is_err());
    }

    #[test]
    fn test_log1p_dual_derivative() {
        // d/dx ln(1 + x) = 1 / (1 + x), on both sides of the threshold
        for x in [3e-5, 0.5] {
            let y = log1p(Dual::var(x)).unwrap();
            assert_relative_eq!(y.dot, 1.0 / (1.0 + x), max_relative = 1e-8);
        }
    }
}
