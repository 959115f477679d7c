use serde::Serialize;
use tracing::debug;

use crate::error::{FuzzyError, Result};
use crate::linspace::Linspace;
use crate::set::FuzzySet;

/// The closed interval `[start, end]` sampled every `step`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SamplingDomain {
    start: f64,
    end: f64,
    step: f64,
    #[serde(skip)]
    len: usize,
    #[serde(skip)]
    last: f64,
}

impl SamplingDomain {
    pub const DEFAULT_START: f64 = -20.;
    pub const DEFAULT_END: f64 = 50.;
    pub const DEFAULT_STEP: f64 = 0.1;
    /// Upper bound on the number of sample points in one domain
    pub const MAX_POINTS: usize = 1_000_000;

    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        let invalid = |reason| FuzzyError::InvalidDomain {
            start,
            end,
            step,
            reason,
        };

        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return Err(invalid("bounds and step must be finite"));
        }
        if start > end {
            return Err(invalid("start is past end"));
        }
        if step <= 0. {
            return Err(invalid("step must be positive"));
        }

        let (len, last) =
            Self::layout(start, end, step).ok_or_else(|| invalid("step is too fine for the interval"))?;

        Ok(Self {
            start,
            end,
            step,
            len,
            last,
        })
    }

    /// Point count and last sample point, or `None` past `MAX_POINTS`.
    fn layout(start: f64, end: f64, step: f64) -> Option<(usize, f64)> {
        let steps = (end - start) / step;

        if !steps.is_finite() || steps >= Self::MAX_POINTS as f64 {
            return None;
        }

        let nearest = steps.round();

        // Dividing by a step like 0.1 can land a hair off the integer it
        // should be; snap to it so `end` itself is sampled
        let (len, last) = if (steps - nearest).abs() < 1e-9 {
            (nearest as usize + 1, end)
        } else {
            let steps = steps.floor() as usize;

            (steps + 1, start + step * steps as f64)
        };

        (len <= Self::MAX_POINTS).then_some((len, last))
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of sample points, both ends included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A valid domain always holds at least `start`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sample positions in increasing order.
    pub fn points(&self) -> Linspace<f64> {
        Linspace::new(self.start, self.last, self.len)
    }

    pub fn sample(&self, set: &FuzzySet) -> Result<Vec<(f64, f64)>> {
        debug!(start = self.start, end = self.end, step = self.step, "sampling fuzzy set");

        self.points().map(|x| Ok((x, set.try_evaluate(x)?))).collect()
    }

    /// Largest `|lhs(x) - rhs(x)|` over the sample points.
    pub fn max_deviation(&self, lhs: &FuzzySet, rhs: &FuzzySet) -> Result<f64> {
        self.points().try_fold(0f64, |max, x| {
            let deviation = (lhs.try_evaluate(x)? - rhs.try_evaluate(x)?).abs();

            Ok(max.max(deviation))
        })
    }
}

impl Default for SamplingDomain {
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
            step: Self::DEFAULT_STEP,
            len: 701,
            last: Self::DEFAULT_END,
        }
    }
}

/// A labeled, sampled curve ready to hand to a plotting front end.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn sample(label: impl Into<String>, set: &FuzzySet, domain: &SamplingDomain) -> Result<Self> {
        Ok(Self {
            label: label.into(),
            points: domain.sample(set)?,
        })
    }
}

#[test]
fn test_default_domain() {
    use approx::assert_abs_diff_eq;

    let domain = SamplingDomain::default();
    let points: Vec<f64> = domain.points().collect();

    assert_eq!(Ok(domain), SamplingDomain::new(-20., 50., 0.1));
    assert_eq!(domain.len(), 701);
    assert_eq!(points.len(), 701);
    assert_eq!(points[0], -20.);
    assert_eq!(points[700], 50.);
    assert_abs_diff_eq!(points[300], 10., epsilon = 1e-9);
    assert!(points.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_partial_last_step() {
    let domain = SamplingDomain::new(0., 1., 0.3).unwrap();
    let points: Vec<f64> = domain.points().collect();

    assert_eq!(domain.len(), 4);
    assert!((points[3] - 0.9).abs() < 1e-12);

    assert_eq!(SamplingDomain::new(2., 2., 0.5).unwrap().len(), 1);
}

#[test]
fn test_invalid_domains() {
    assert!(matches!(
        SamplingDomain::new(1., 0., 0.1),
        Err(FuzzyError::InvalidDomain { reason: "start is past end", .. })
    ));
    assert!(SamplingDomain::new(0., 1., 0.).is_err());
    assert!(SamplingDomain::new(0., 1., -0.1).is_err());
    assert!(SamplingDomain::new(f64::NEG_INFINITY, 1., 0.1).is_err());
    assert!(SamplingDomain::new(0., 1., f64::NAN).is_err());

    // Too many points, or a step count that is not even finite
    assert!(matches!(
        SamplingDomain::new(-20., 50., 1e-15),
        Err(FuzzyError::InvalidDomain { reason: "step is too fine for the interval", .. })
    ));
    assert!(SamplingDomain::new(0., 1e300, 1e-300).is_err());
    assert!(SamplingDomain::new(0., 1., 1e-7).is_err());
    assert_eq!(SamplingDomain::new(0., 1., 1e-5).unwrap().len(), 100_001);
}

#[test]
fn test_sample_reports_undefined_points() {
    let domain = SamplingDomain::new(-1., 1., 0.5).unwrap();
    let reciprocal = FuzzySet::new(|x| 1. / x);

    assert!(matches!(
        domain.sample(&reciprocal),
        Err(FuzzyError::NonFinite { x, .. }) if x == 0.
    ));
}

#[test]
fn test_max_deviation() {
    let domain = SamplingDomain::new(0., 1., 0.25).unwrap();
    let a = FuzzySet::new(|x| x);
    let b = FuzzySet::new(|_| 0.5);

    assert_eq!(domain.max_deviation(&a, &b), Ok(0.5));
    assert_eq!(domain.max_deviation(&a, &a), Ok(0.));
}
