//! Property-based tests for the fuzzy set algebra
//!
//! Every operator is checked pointwise against its closed form, over the
//! reference sets and over arbitrary constant membership levels.

use proptest::prelude::*;

use fuzzy_sets::{BaseSets, BinaryKind, BinaryOp, Expr, FuzzySet, OperatorType, UnaryOp};

// ===== Strategies =====

/// Points inside the default sampling domain
fn arb_x() -> impl Strategy<Value = f64> {
    -20.0..=50.0f64
}

/// Membership levels, conventionally in [0, 1]
fn arb_level() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

fn arb_binary_op() -> impl Strategy<Value = BinaryOp> {
    prop::sample::select(BinaryOp::ALL.to_vec())
}

fn arb_operator_type() -> impl Strategy<Value = OperatorType> {
    prop::sample::select(OperatorType::ALL.to_vec())
}

fn constant(level: f64) -> FuzzySet {
    FuzzySet::new(move |_| level)
}

// ===== Property Tests =====

proptest! {
    #[test]
    fn prop_double_complement_is_identity(x in arb_x()) {
        let sets = BaseSets::reference();

        for set in [&sets.a, &sets.b] {
            let twice = set.complement().complement();
            prop_assert!((twice.evaluate(x) - set.evaluate(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn prop_operators_match_closed_forms(x in arb_x()) {
        let BaseSets { a, b } = BaseSets::reference();
        let (u, v) = (a.evaluate(x), b.evaluate(x));

        prop_assert_eq!(a.intersection_min(&b).evaluate(x), u.min(v));
        prop_assert_eq!(a.intersection_min(&b).evaluate(x), b.intersection_min(&a).evaluate(x));
        prop_assert_eq!(a.union_max(&b).evaluate(x), u.max(v));
        prop_assert_eq!(a.union_max(&b).evaluate(x), b.union_max(&a).evaluate(x));
        prop_assert_eq!(a.intersection_product(&b).evaluate(x), u * v);
        prop_assert_eq!(a.union_sum(&b).evaluate(x), u + v - u * v);
        prop_assert_eq!(a.intersection_bounded(&b).evaluate(x), (u + v - 1.).max(0.));
        prop_assert_eq!(a.union_bounded(&b).evaluate(x), (u + v).min(1.));
        prop_assert_eq!(a.difference(&b).evaluate(x), (u - v).max(0.));
        prop_assert_eq!(a.concentration().evaluate(x), u * u);
    }

    #[test]
    fn prop_intersections_and_unions_commute(op in arb_binary_op(), u in arb_level(), v in arb_level()) {
        prop_assume!(op.kind() != BinaryKind::Difference);

        let (a, b) = (constant(u), constant(v));
        let lhs = a.apply_binary(op, &b).evaluate(0.);
        let rhs = b.apply_binary(op, &a).evaluate(0.);

        prop_assert!((lhs - rhs).abs() < 1e-12, "{} is not commutative: {} vs {}", op, lhs, rhs);
    }

    #[test]
    fn prop_min_max_associate(u in arb_level(), v in arb_level(), w in arb_level()) {
        let (a, b, c) = (constant(u), constant(v), constant(w));

        prop_assert_eq!(
            a.intersection_min(&b).intersection_min(&c).evaluate(0.),
            a.intersection_min(&b.intersection_min(&c)).evaluate(0.)
        );
        prop_assert_eq!(
            a.union_max(&b).union_max(&c).evaluate(0.),
            a.union_max(&b.union_max(&c)).evaluate(0.)
        );
    }

    #[test]
    fn prop_min_max_associate_over_reference_sets(x in arb_x()) {
        let BaseSets { a, b } = BaseSets::reference();
        let c = a.complement();

        prop_assert_eq!(
            a.intersection_min(&b).intersection_min(&c).evaluate(x),
            a.intersection_min(&b.intersection_min(&c)).evaluate(x)
        );
        prop_assert_eq!(
            a.union_max(&b).union_max(&c).evaluate(x),
            a.union_max(&b.union_max(&c)).evaluate(x)
        );
    }

    #[test]
    fn prop_algebraic_sum_associates_within_rounding(
        u in arb_level(),
        v in arb_level(),
        w in arb_level(),
        x in arb_x(),
    ) {
        let (a, b, c) = (constant(u), constant(v), constant(w));
        let lhs = a.union_sum(&b).union_sum(&c).evaluate(0.);
        let rhs = a.union_sum(&b.union_sum(&c)).evaluate(0.);

        prop_assert!((lhs - rhs).abs() < 1e-12, "{} vs {}", lhs, rhs);

        let BaseSets { a, b } = BaseSets::reference();
        let c = b.complement();
        let lhs = a.union_sum(&b).union_sum(&c).evaluate(x);
        let rhs = a.union_sum(&b.union_sum(&c)).evaluate(x);

        prop_assert!((lhs - rhs).abs() < 1e-12, "x = {}: {} vs {}", x, lhs, rhs);
    }

    #[test]
    fn prop_matching_types_are_de_morgan_duals(ty in arb_operator_type(), u in arb_level(), v in arb_level()) {
        let sets = BaseSets::new(constant(u), constant(v));
        let lhs = Expr::A.binary(BinaryOp::intersection(ty), Expr::B).complement();
        let rhs = Expr::A.complement().binary(BinaryOp::union(ty), Expr::B.complement());

        let lhs = lhs.build(&sets).evaluate(0.);
        let rhs = rhs.build(&sets).evaluate(0.);

        prop_assert!((lhs - rhs).abs() < 1e-9, "type {:?}: {} vs {}", ty, lhs, rhs);
    }

    #[test]
    fn prop_difference_is_bounded_below(u in -2.0..=2.0f64, v in -2.0..=2.0f64) {
        let value = constant(u).difference(&constant(v)).evaluate(0.);

        prop_assert!(value >= 0.);
        prop_assert_eq!(value, BinaryOp::Difference.call(u, v));
    }

    #[test]
    fn prop_rebuilt_sets_agree(x in arb_x(), op in arb_binary_op()) {
        let sets = BaseSets::reference();
        let expr = Expr::A.binary(op, Expr::B.unary(UnaryOp::Complement));

        prop_assert_eq!(expr.build(&sets).evaluate(x), expr.build(&sets).evaluate(x));
    }
}
