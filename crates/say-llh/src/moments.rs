//! First and second moments of the per-event weights in a bin.

use say_ad::Scalar;

use crate::math::compensated_sum;

/// Effective yield and effective variance of one bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightMoments<T> {
    /// Sum of the weights.
    pub w_sum: T,
    /// Sum of the squared weights.
    pub w2_sum: T,
}

impl<T: Scalar> WeightMoments<T> {
    /// Wrap precomputed moments.
    pub fn new(w_sum: T, w2_sum: T) -> Self {
        Self { w_sum, w2_sum }
    }

    /// Reduce a weight list, summing both moments with [`compensated_sum`]
    /// in slice order. Squares are formed in `T`, so AD tangents survive.
    pub fn from_weights(weights: &[T]) -> Self {
        Self {
            w_sum: compensated_sum(weights.iter().copied()),
            w2_sum: compensated_sum(weights.iter().map(|&w| w * w)),
        }
    }
}
