//! Time-varying mainland infection curves.
//!
//! A [`MainlandCurve`] maps a simulation day to the daily probability that a
//! worker ashore is infected.  The simulator holds it as
//! `Arc<dyn MainlandCurve>` so one curve can be shared by every replicate in a
//! parallel batch.

use std::f64::consts::PI;
use std::sync::Arc;

use rig_core::Day;

use crate::{ExposureError, ExposureResult};

/// Daily infection probability for workers off site.
///
/// Implementations may return values outside `[0, 1]`; the exposure model
/// clamps them.  They must not return NaN.
pub trait MainlandCurve: Send + Sync {
    fn rate(&self, day: Day) -> f64;
}

impl<C: MainlandCurve + ?Sized> MainlandCurve for Arc<C> {
    fn rate(&self, day: Day) -> f64 {
        (**self).rate(day)
    }
}

impl<C: MainlandCurve + ?Sized> MainlandCurve for Box<C> {
    fn rate(&self, day: Day) -> f64 {
        (**self).rate(day)
    }
}

// ── GaussianWave ──────────────────────────────────────────────────────────────

/// A single epidemic wave with a Gaussian profile.
///
/// ```text
/// σ       = duration / 8
/// rate(d) = total_prev · exp(−((d − peak) / σ)² / 2) / (σ · √(2π))
/// ```
///
/// The curve integrates to roughly `total_prev` over the outbreak, so
/// `total_prev` is the fraction of the mainland population infected over the
/// whole wave.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaussianWave {
    pub total_prev: f64,
    pub duration:   f64,
    pub peak:       f64,
}

impl GaussianWave {
    pub fn new(total_prev: f64, duration: f64, peak: f64) -> ExposureResult<Self> {
        if !(total_prev.is_finite() && total_prev >= 0.0) {
            return Err(ExposureError::Config(format!(
                "total_prev must be finite and >= 0, got {total_prev}"
            )));
        }
        if !(duration.is_finite() && duration > 0.0) {
            return Err(ExposureError::Config(format!(
                "duration must be finite and > 0, got {duration}"
            )));
        }
        if !peak.is_finite() {
            return Err(ExposureError::Config(format!("peak must be finite, got {peak}")));
        }
        Ok(Self { total_prev, duration, peak })
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.duration / 8.0
    }
}

impl MainlandCurve for GaussianWave {
    fn rate(&self, day: Day) -> f64 {
        let sigma = self.sigma();
        let z = (f64::from(day.0) - self.peak) / sigma;
        self.total_prev * (-z * z / 2.0).exp() / (sigma * (2.0 * PI).sqrt())
    }
}

// ── ConstantRate ──────────────────────────────────────────────────────────────

/// The same rate every day.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantRate(pub f64);

impl ConstantRate {
    /// The daily rate that keeps a fraction `prevalence` of the mainland
    /// infected when each infection lasts `t_rec` days: `prevalence / t_rec`.
    pub fn from_prevalence(prevalence: f64, t_rec: u32) -> ExposureResult<Self> {
        if !(0.0..=1.0).contains(&prevalence) {
            return Err(ExposureError::Config(format!(
                "prevalence must be in [0, 1], got {prevalence}"
            )));
        }
        if t_rec == 0 {
            return Err(ExposureError::Config("t_rec must be > 0".to_owned()));
        }
        Ok(ConstantRate(prevalence / f64::from(t_rec)))
    }
}

impl MainlandCurve for ConstantRate {
    fn rate(&self, _day: Day) -> f64 {
        self.0
    }
}

// ── StepRate ──────────────────────────────────────────────────────────────────

/// A piecewise-constant curve.
///
/// Each `(start, rate)` step applies from `start` until the next step begins.
/// Days before the first step have rate 0.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRate {
    steps: Vec<(Day, f64)>,
}

impl StepRate {
    /// Build from steps in any order.
    pub fn new(mut steps: Vec<(Day, f64)>) -> Self {
        steps.sort_unstable_by_key(|&(d, _)| d);
        Self { steps }
    }

    /// `rate` for days before `end`, 0 afterwards.
    pub fn until(rate: f64, end: Day) -> Self {
        Self::new(vec![(Day::ZERO, rate), (end, 0.0)])
    }
}

impl MainlandCurve for StepRate {
    fn rate(&self, day: Day) -> f64 {
        let idx = self.steps.partition_point(|&(start, _)| start <= day);
        if idx == 0 { 0.0 } else { self.steps[idx - 1].1 }
    }
}

// ── FnCurve ───────────────────────────────────────────────────────────────────

/// Adapts any `Fn(Day) -> f64` closure into a [`MainlandCurve`].
pub struct FnCurve<F>(pub F);

impl<F> MainlandCurve for FnCurve<F>
where
    F: Fn(Day) -> f64 + Send + Sync,
{
    fn rate(&self, day: Day) -> f64 {
        (self.0)(day)
    }
}
