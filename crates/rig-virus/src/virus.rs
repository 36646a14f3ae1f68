//! The `Virus` parameter bundle.

use rig_exposure::{ExposureResult, GaussianWave};

use crate::{VirusError, VirusResult};

/// Disease and mainland-outbreak parameters for one pathogen.
///
/// Immutable once constructed; [`Virus::new`] is the only way to build one
/// and it validates every field.
#[derive(Clone, Debug, PartialEq)]
pub struct Virus {
    pub name: String,
    pub r0: f64,
    /// Days from exposure to infectiousness.
    pub t_inf: u32,
    /// Days from exposure to recovery.
    pub t_rec: u32,
    /// Days from exposure until a test turns positive.
    pub t_pos: u32,
    /// Fraction of the mainland population infected over the whole wave.
    pub total_prev: f64,
    /// Length of the mainland wave in days.
    pub duration: f64,
    /// Day on which the mainland wave peaks.
    pub peak: f64,
}

impl Virus {
    /// Validate and build.  `t_pos` defaults to `t_inf` when `None`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name:       impl Into<String>,
        r0:         f64,
        t_inf:      u32,
        t_rec:      u32,
        t_pos:      Option<u32>,
        total_prev: f64,
        duration:   f64,
        peak:       f64,
    ) -> VirusResult<Self> {
        let virus = Self {
            name: name.into(),
            r0,
            t_inf,
            t_rec,
            t_pos: t_pos.unwrap_or(t_inf),
            total_prev,
            duration,
            peak,
        };
        virus.validate()?;
        Ok(virus)
    }

    fn validate(&self) -> VirusResult<()> {
        let invalid = |field: &'static str, reason: String| VirusError::Invalid {
            name: self.name.clone(),
            field,
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be empty".to_owned()));
        }
        if !(self.r0.is_finite() && self.r0 >= 0.0) {
            return Err(invalid("r0", format!("must be finite and >= 0, got {}", self.r0)));
        }
        if self.t_rec <= self.t_inf {
            return Err(invalid(
                "t_rec",
                format!("({}) must exceed t_inf ({})", self.t_rec, self.t_inf),
            ));
        }
        if self.t_pos >= self.t_rec {
            return Err(invalid(
                "t_pos",
                format!("({}) must be below t_rec ({})", self.t_pos, self.t_rec),
            ));
        }
        if !(0.0..=1.0).contains(&self.total_prev) {
            return Err(invalid(
                "total_prev",
                format!("must lie in [0, 1], got {}", self.total_prev),
            ));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(invalid(
                "duration",
                format!("must be finite and > 0, got {}", self.duration),
            ));
        }
        if !self.peak.is_finite() {
            return Err(invalid("peak", format!("must be finite, got {}", self.peak)));
        }
        Ok(())
    }

    /// The mainland wave this virus drives.
    pub fn mainland_curve(&self) -> ExposureResult<GaussianWave> {
        GaussianWave::new(self.total_prev, self.duration, self.peak)
    }
}
