//! Configuration types shared between the likelihood crate and its callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Per-bin likelihood selected by a fit engine.
///
/// Serialized in `snake_case` (`"say_mean"`, `"pearson_chi2"`, ...), so it can be
/// embedded directly in a fit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikelihoodKind {
    /// Plain Poisson likelihood with the weight sum as rate.
    Poisson,
    /// Gamma prior matched to the mean and variance of the weights.
    SayMean,
    /// Gamma prior matched to the mode and variance of the weights.
    SayMode,
    /// Gamma prior with the shape shifted by one (flat prior on the rate).
    SayUninformed,
    /// Gaussian approximation around the expected count.
    Chi2,
    /// Gaussian approximation with the weight variance added to the denominator.
    PearsonChi2,
}

impl LikelihoodKind {
    /// Every available kind, in declaration order.
    pub const ALL: [LikelihoodKind; 6] = [
        LikelihoodKind::Poisson,
        LikelihoodKind::SayMean,
        LikelihoodKind::SayMode,
        LikelihoodKind::SayUninformed,
        LikelihoodKind::Chi2,
        LikelihoodKind::PearsonChi2,
    ];

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            LikelihoodKind::Poisson => "poisson",
            LikelihoodKind::SayMean => "say_mean",
            LikelihoodKind::SayMode => "say_mode",
            LikelihoodKind::SayUninformed => "say_uninformed",
            LikelihoodKind::Chi2 => "chi2",
            LikelihoodKind::PearsonChi2 => "pearson_chi2",
        }
    }

    /// Whether this kind marginalizes the rate over a gamma prior.
    pub fn is_gamma_prior(self) -> bool {
        matches!(
            self,
            LikelihoodKind::SayMean | LikelihoodKind::SayMode | LikelihoodKind::SayUninformed
        )
    }
}

impl fmt::Display for LikelihoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LikelihoodKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "poisson" => Ok(LikelihoodKind::Poisson),
            "say_mean" | "lmean" => Ok(LikelihoodKind::SayMean),
            "say_mode" | "lmode" => Ok(LikelihoodKind::SayMode),
            "say_uninformed" | "leff" => Ok(LikelihoodKind::SayUninformed),
            "chi2" => Ok(LikelihoodKind::Chi2),
            "pearson_chi2" => Ok(LikelihoodKind::PearsonChi2),
            _ => Err(Error::Validation(format!(
                "unknown likelihood '{}', expected one of: {}",
                s,
                LikelihoodKind::ALL.map(LikelihoodKind::name).join(", ")
            ))),
        }
    }
}
