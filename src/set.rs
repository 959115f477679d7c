use std::fmt;
use std::sync::Arc;

use crate::error::{FuzzyError, Result};
use crate::ops::{BinaryOp, UnaryOp};

type MembershipFn = dyn Fn(f64) -> f64 + Send + Sync;

/// A fuzzy set over the reals, defined entirely by its membership function.
///
/// Sets are immutable; every operator returns a new set whose membership
/// function calls back into its operands on each evaluation. Nothing is
/// cached, and values are never clamped to `[0, 1]`.
#[derive(Clone)]
pub struct FuzzySet(Arc<MembershipFn>);

impl FuzzySet {
    pub fn new(membership: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        FuzzySet(Arc::new(membership))
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        (self.0)(x)
    }

    /// Like `evaluate`, but fails when the membership function is undefined
    /// (NaN or infinite) at `x`.
    pub fn try_evaluate(&self, x: f64) -> Result<f64> {
        let value = self.evaluate(x);

        if value.is_finite() {
            Ok(value)
        } else {
            Err(FuzzyError::NonFinite { x, value })
        }
    }

    pub fn apply_unary(&self, op: UnaryOp) -> Self {
        let a = self.clone();

        FuzzySet::new(move |x| op.call(a.evaluate(x)))
    }

    pub fn apply_binary(&self, op: BinaryOp, other: &FuzzySet) -> Self {
        let a = self.clone();
        let b = other.clone();

        FuzzySet::new(move |x| op.call(a.evaluate(x), b.evaluate(x)))
    }

    pub fn complement(&self) -> Self {
        self.apply_unary(UnaryOp::Complement)
    }

    pub fn concentration(&self) -> Self {
        self.apply_unary(UnaryOp::Concentration)
    }

    /// Intersection of the first type, `min(A, B)`
    pub fn intersection_min(&self, other: &FuzzySet) -> Self {
        self.apply_binary(BinaryOp::IntersectionMin, other)
    }

    /// Intersection of the second type, `max(0, A + B - 1)`
    pub fn intersection_bounded(&self, other: &FuzzySet) -> Self {
        self.apply_binary(BinaryOp::IntersectionBounded, other)
    }

    /// Intersection of the third type, `A * B`
    pub fn intersection_product(&self, other: &FuzzySet) -> Self {
        self.apply_binary(BinaryOp::IntersectionProduct, other)
    }

    /// Union of the first type, `max(A, B)`
    pub fn union_max(&self, other: &FuzzySet) -> Self {
        self.apply_binary(BinaryOp::UnionMax, other)
    }

    /// Union of the second type, `min(1, A + B)`
    pub fn union_bounded(&self, other: &FuzzySet) -> Self {
        self.apply_binary(BinaryOp::UnionBounded, other)
    }

    /// Union of the third type, `A + B - A * B`
    pub fn union_sum(&self, other: &FuzzySet) -> Self {
        self.apply_binary(BinaryOp::UnionSum, other)
    }

    /// Bounded difference, `max(0, A - B)`
    pub fn difference(&self, other: &FuzzySet) -> Self {
        self.apply_binary(BinaryOp::Difference, other)
    }
}

impl fmt::Debug for FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FuzzySet(<membership fn>)")
    }
}

#[test]
fn test_operators_are_pointwise() {
    use approx::assert_abs_diff_eq;

    let a = FuzzySet::new(|x| x / 10.);
    let b = FuzzySet::new(|x| 1. - x / 10.);

    for x in [0., 2.5, 5., 7.5, 10.] {
        let (u, v) = (a.evaluate(x), b.evaluate(x));

        assert_abs_diff_eq!(a.intersection_min(&b).evaluate(x), u.min(v));
        assert_abs_diff_eq!(a.intersection_bounded(&b).evaluate(x), (u + v - 1.).max(0.));
        assert_abs_diff_eq!(a.intersection_product(&b).evaluate(x), u * v);
        assert_abs_diff_eq!(a.union_max(&b).evaluate(x), u.max(v));
        assert_abs_diff_eq!(a.union_bounded(&b).evaluate(x), (u + v).min(1.));
        assert_abs_diff_eq!(a.union_sum(&b).evaluate(x), u + v - u * v);
        assert_abs_diff_eq!(a.difference(&b).evaluate(x), (u - v).max(0.));
        assert_abs_diff_eq!(a.complement().evaluate(x), 1. - u);
        assert_abs_diff_eq!(a.concentration().evaluate(x), u * u);
    }
}

#[test]
fn test_operands_are_untouched() {
    let a = FuzzySet::new(|x| x);
    let b = FuzzySet::new(|_| 0.25);
    let _ = a.union_max(&b).complement();

    assert_eq!(a.evaluate(0.5), 0.5);
    assert_eq!(b.evaluate(0.5), 0.25);
}

#[test]
fn test_try_evaluate() {
    let reciprocal = FuzzySet::new(|x| 1. / x);

    assert_eq!(reciprocal.try_evaluate(2.), Ok(0.5));
    assert_eq!(
        reciprocal.try_evaluate(0.),
        Err(FuzzyError::NonFinite {
            x: 0.,
            value: f64::INFINITY
        })
    );
    assert!(FuzzySet::new(|x: f64| x.ln()).try_evaluate(-1.).is_err());
}

#[test]
fn test_unclamped() {
    let tall = FuzzySet::new(|x| x);

    assert_eq!(tall.concentration().evaluate(3.), 9.);
    assert_eq!(tall.union_sum(&tall).evaluate(2.), 0.);
    assert_eq!(tall.complement().evaluate(3.), -2.);
}
