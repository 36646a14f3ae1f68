//! A validated probability in `[0, 1]`.
//!
//! Daily infection probabilities are derived quantities (a mainland curve, or
//! `R0 × prevalence / infectious period`), so they can leave the unit interval
//! or turn into NaN on degenerate inputs.  Every rate reaching a Bernoulli
//! draw goes through this type.

use std::fmt;

use crate::{RigError, RigResult};

#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Probability(f64);

impl Probability {
    pub const ZERO: Probability = Probability(0.0);
    pub const ONE: Probability = Probability(1.0);

    /// Accept `p` only if it already lies in `[0, 1]`.
    pub fn new(p: f64) -> RigResult<Self> {
        if (0.0..=1.0).contains(&p) {
            Ok(Probability(p))
        } else {
            Err(RigError::Domain(format!("probability {p} is outside [0, 1]")))
        }
    }

    /// Clamp a finite `p` into `[0, 1]`.  NaN is rejected.
    pub fn clamped(p: f64) -> RigResult<Self> {
        if p.is_nan() {
            return Err(RigError::Domain("probability is NaN".to_owned()));
        }
        Ok(Probability(p.clamp(0.0, 1.0)))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = RigError;
    fn try_from(p: f64) -> RigResult<Self> {
        Probability::new(p)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
