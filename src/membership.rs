//! The two reference membership functions compared throughout the catalog.

use crate::set::FuzzySet;

/// Set A: `(cos(x) + 1) / 2`, oscillating between zero and one.
pub fn cosine_bump(x: f64) -> f64 {
    (x.cos() + 1.) / 2.
}

/// Set B: rises as `e^x` up to zero, stays at one on `(0, 1)` and decays as
/// `1/x` from one onwards. Piecewise so that `1/x` is never taken at zero.
pub fn exp_plateau_reciprocal(x: f64) -> f64 {
    if x <= 0. {
        x.exp()
    } else if x < 1. {
        1.
    } else {
        1. / x
    }
}

/// The pair of operands every scenario is built from.
#[derive(Clone, Debug)]
pub struct BaseSets {
    pub a: FuzzySet,
    pub b: FuzzySet,
}

impl BaseSets {
    pub fn new(a: FuzzySet, b: FuzzySet) -> Self {
        Self { a, b }
    }

    pub fn reference() -> Self {
        Self::new(FuzzySet::new(cosine_bump), FuzzySet::new(exp_plateau_reciprocal))
    }
}

impl Default for BaseSets {
    fn default() -> Self {
        Self::reference()
    }
}

#[test]
fn test_exp_plateau_reciprocal_boundaries() {
    use approx::assert_abs_diff_eq;

    assert_eq!(exp_plateau_reciprocal(0.), 1.);
    assert_eq!(exp_plateau_reciprocal(1.), 1.);
    assert_eq!(exp_plateau_reciprocal(0.5), 1.);
    assert_eq!(exp_plateau_reciprocal(10.), 0.1);
    assert_abs_diff_eq!(exp_plateau_reciprocal(-1.), (-1f64).exp());

    // Continuous where the branches meet
    for eps in [1e-6, 1e-9, 1e-12] {
        assert_abs_diff_eq!(exp_plateau_reciprocal(-eps), 1., epsilon = 1e-5);
        assert_abs_diff_eq!(exp_plateau_reciprocal(1. - eps), 1., epsilon = 1e-5);
        assert_abs_diff_eq!(exp_plateau_reciprocal(1. + eps), 1., epsilon = 1e-5);
    }
}

#[test]
fn test_cosine_bump() {
    use approx::assert_abs_diff_eq;

    assert_eq!(cosine_bump(0.), 1.);
    assert_abs_diff_eq!(cosine_bump(std::f64::consts::PI), 0.);
    assert_abs_diff_eq!(cosine_bump(-20.), 0.704041030906696, epsilon = 1e-12);
    assert_abs_diff_eq!(cosine_bump(10.), 0.08046423546177378, epsilon = 1e-12);
}

#[test]
fn test_reference_sets() {
    let sets = BaseSets::reference();

    assert_eq!(sets.a.evaluate(0.), 1.);
    assert_eq!(sets.b.evaluate(0.), 1.);
    assert_eq!(sets.b.evaluate(1.), 1.);
}
