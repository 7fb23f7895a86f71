//! Runtime selection of the per-bin likelihood.
//!
//! A fit engine holds one [`LikelihoodKind`] from its configuration and calls
//! [`BinLikelihood::ln_likelihood`] once per bin per iteration.

use say_ad::Scalar;
use say_core::{LikelihoodKind, Result};

use crate::chi2::{chi2_llh_moments, pearson_chi2_llh_moments};
use crate::moments::WeightMoments;
use crate::poisson::poisson_llh;
use crate::say::{MomentMatching, say_llh};

/// A likelihood evaluated from the count and weight moments of one bin.
pub trait BinLikelihood {
    /// Log-likelihood of `k` observed events given `w_sum` and `w2_sum`.
    fn ln_likelihood<T: Scalar>(&self, k: f64, w_sum: T, w2_sum: T) -> Result<T>;

    /// Log-likelihood from the raw weights of the bin.
    fn ln_likelihood_weights<T: Scalar>(&self, k: f64, weights: &[T]) -> Result<T> {
        let m = WeightMoments::from_weights(weights);
        self.ln_likelihood(k, m.w_sum, m.w2_sum)
    }

    /// Negative log-likelihood, for minimizers.
    fn nll<T: Scalar>(&self, k: f64, w_sum: T, w2_sum: T) -> Result<T> {
        Ok(-self.ln_likelihood(k, w_sum, w2_sum)?)
    }
}

impl BinLikelihood for MomentMatching {
    fn ln_likelihood<T: Scalar>(&self, k: f64, w_sum: T, w2_sum: T) -> Result<T> {
        say_llh(*self, k, w_sum, w2_sum)
    }
}

impl BinLikelihood for LikelihoodKind {
    fn ln_likelihood<T: Scalar>(&self, k: f64, w_sum: T, w2_sum: T) -> Result<T> {
        match self {
            LikelihoodKind::Poisson => Ok(poisson_llh(k, w_sum)),
            LikelihoodKind::SayMean => say_llh(MomentMatching::Mean, k, w_sum, w2_sum),
            LikelihoodKind::SayMode => say_llh(MomentMatching::Mode, k, w_sum, w2_sum),
            LikelihoodKind::SayUninformed => {
                say_llh(MomentMatching::Uninformed, k, w_sum, w2_sum)
            }
            LikelihoodKind::Chi2 => Ok(chi2_llh_moments(k, w_sum)),
            LikelihoodKind::PearsonChi2 => Ok(pearson_chi2_llh_moments(k, w_sum, w2_sum)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chi2::{chi2_llh, pearson_chi2_llh};
    use crate::say::{say_mean_llh, say_mode_llh, say_uninformed_llh};
    use say_ad::Dual;

    #[test]
    fn test_kind_matches_free_functions() {
        let (k, w, w2) = (5.0, 4.2, 1.3);
        assert_eq!(LikelihoodKind::Poisson.ln_likelihood(k, w, w2).unwrap(), poisson_llh(k, w));
        assert_eq!(
            LikelihoodKind::SayMean.ln_likelihood(k, w, w2).unwrap(),
            say_mean_llh(k, w, w2).unwrap()
        );
        assert_eq!(
            LikelihoodKind::SayMode.ln_likelihood(k, w, w2).unwrap(),
            say_mode_llh(k, w, w2).unwrap()
        );
        assert_eq!(
            LikelihoodKind::SayUninformed.ln_likelihood(k, w, w2).unwrap(),
            say_uninformed_llh(k, w, w2).unwrap()
        );
    }

    #[test]
    fn test_kind_weights_matches_chi2_functions() {
        let weights = [0.5, 1.5, 2.0, 0.25];
        assert_eq!(
            LikelihoodKind::Chi2.ln_likelihood_weights(3.0, &weights).unwrap(),
            chi2_llh(3, &weights)
        );
        assert_eq!(
            LikelihoodKind::PearsonChi2.ln_likelihood_weights(3.0, &weights).unwrap(),
            pearson_chi2_llh(3, &weights)
        );
    }

    #[test]
    fn test_moment_matching_impl() {
        let lp = MomentMatching::Mode.ln_likelihood(2.0, 3.0, 1.0).unwrap();
        assert_eq!(lp, say_mode_llh(2.0, 3.0, 1.0).unwrap());
    }

    #[test]
    fn test_nll_negates() {
        for kind in LikelihoodKind::ALL {
            let lp = kind.ln_likelihood(4.0, 3.5, 0.7).unwrap();
            let nll = kind.nll(4.0, 3.5, 0.7).unwrap();
            assert_eq!(nll, -lp, "{}", kind);
        }
    }

    #[test]
    fn test_every_kind_accepts_dual() {
        for kind in LikelihoodKind::ALL {
            let d = kind.ln_likelihood(4.0, Dual::var(3.5), Dual::constant(0.7)).unwrap();
            assert!(d.val.is_finite() && d.dot.is_finite(), "{}", kind);
        }
    }
}
