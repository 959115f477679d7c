//! The catalog of comparisons a front end can offer, each a fixed set of
//! operator compositions over sets A and B.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::dsl::Expr;
use crate::error::{FuzzyError, Result};
use crate::membership::BaseSets;
use crate::ops::{BinaryOp, OperatorType};
use crate::sampling::{Curve, SamplingDomain};

const SET_A: &str = "Fuzzy set A";
const SET_B: &str = "Fuzzy set B";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Scenario {
    SetA,
    SetB,
    /// Plots A and `!A`. The desktop tool this catalog comes from labeled the
    /// result "of A" but plotted the complement of B; the operand here
    /// matches the label.
    StandardComplement,
    /// Plots A and `~A`, with the same operand note as `StandardComplement`.
    Concentration,
    Difference,
    Intersection(OperatorType),
    Union(OperatorType),
    /// Plots `!(A iN B)` against `!A uM !B`
    DeMorgan {
        intersection: OperatorType,
        union: OperatorType,
    },
}

/// One curve of a scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub expr: Expr,
}

impl Series {
    fn new(label: impl Into<String>, expr: Expr) -> Self {
        Self {
            label: label.into(),
            expr,
        }
    }
}

impl Scenario {
    /// Every scenario, in menu order
    pub fn all() -> Vec<Scenario> {
        let mut all = vec![
            Scenario::SetA,
            Scenario::SetB,
            Scenario::StandardComplement,
            Scenario::Concentration,
            Scenario::Difference,
        ];

        all.extend(OperatorType::ALL.map(Scenario::Intersection));
        all.extend(OperatorType::ALL.map(Scenario::Union));

        for intersection in OperatorType::ALL {
            for union in OperatorType::ALL {
                all.push(Scenario::DeMorgan { intersection, union });
            }
        }

        all
    }

    pub fn title(&self) -> String {
        match self {
            Scenario::SetA => SET_A.to_owned(),
            Scenario::SetB => SET_B.to_owned(),
            Scenario::StandardComplement => "Standard complement".to_owned(),
            Scenario::Concentration => "Concentration".to_owned(),
            Scenario::Difference => "Difference".to_owned(),
            Scenario::Intersection(ty) => format!("Intersection of {} type", ty.ordinal()),
            Scenario::Union(ty) => format!("Union of {} type", ty.ordinal()),
            Scenario::DeMorgan { intersection, union } => {
                format!("De Morgan I{} U{}", intersection.index(), union.index())
            },
        }
    }

    /// Stable identifier for command lines and menus, e.g. `union-2`
    pub fn slug(&self) -> String {
        match self {
            Scenario::SetA => "set-a".to_owned(),
            Scenario::SetB => "set-b".to_owned(),
            Scenario::StandardComplement => "complement".to_owned(),
            Scenario::Concentration => "concentration".to_owned(),
            Scenario::Difference => "difference".to_owned(),
            Scenario::Intersection(ty) => format!("intersection-{}", ty.index()),
            Scenario::Union(ty) => format!("union-{}", ty.index()),
            Scenario::DeMorgan { intersection, union } => {
                format!("de-morgan-i{}-u{}", intersection.index(), union.index())
            },
        }
    }

    /// Whether the two curves of a De Morgan scenario are expected to
    /// coincide. Only matching types are duals.
    pub fn is_de_morgan_dual(&self) -> bool {
        match self {
            Scenario::DeMorgan { intersection, union } => intersection == union,
            _ => false,
        }
    }

    pub fn series(&self) -> Vec<Series> {
        let a = || Series::new(SET_A, Expr::A);
        let b = || Series::new(SET_B, Expr::B);

        match *self {
            Scenario::SetA => vec![a()],
            Scenario::SetB => vec![b()],
            Scenario::StandardComplement => vec![a(), Series::new("Standard complement of A", Expr::A.complement())],
            Scenario::Concentration => vec![a(), Series::new("Concentration of A", Expr::A.concentration())],
            Scenario::Difference => vec![a(), b(), Series::new("Difference", Expr::A.difference(Expr::B))],
            Scenario::Intersection(ty) => vec![
                a(),
                b(),
                Series::new(self.title(), Expr::A.binary(BinaryOp::intersection(ty), Expr::B)),
            ],
            Scenario::Union(ty) => vec![
                a(),
                b(),
                Series::new(self.title(), Expr::A.binary(BinaryOp::union(ty), Expr::B)),
            ],
            Scenario::DeMorgan { intersection, union } => {
                let lhs = Expr::A.binary(BinaryOp::intersection(intersection), Expr::B).complement();
                let rhs = Expr::A
                    .complement()
                    .binary(BinaryOp::union(union), Expr::B.complement());

                vec![
                    a(),
                    b(),
                    Series::new(lhs.to_string(), lhs),
                    Series::new(rhs.to_string(), rhs),
                ]
            },
        }
    }

    /// Resolve every series against `sets` and sample it over `domain`.
    pub fn curves(&self, sets: &BaseSets, domain: &SamplingDomain) -> Result<Vec<Curve>> {
        debug!(scenario = %self.slug(), points = domain.len(), "resolving scenario");

        self.series()
            .into_iter()
            .map(|series| {
                trace!(label = %series.label, expr = %series.expr, "sampling series");
                Curve::sample(series.label, &series.expr.build(sets), domain)
            })
            .collect()
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

impl FromStr for Scenario {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|scenario| scenario.slug() == s)
            .ok_or_else(|| FuzzyError::UnknownScenario { name: s.to_owned() })
    }
}

#[test]
fn test_unary_scenarios_apply_to_a() {
    let series = Scenario::StandardComplement.series();
    assert_eq!(series[0].expr, Expr::A);
    assert_eq!(series[1].expr, Expr::A.complement());
    assert_eq!(series[1].label, "Standard complement of A");

    let series = Scenario::Concentration.series();
    assert_eq!(series[1].expr, Expr::A.concentration());
    assert_eq!(series[1].label, "Concentration of A");
}

#[test]
fn test_catalog() {
    let all = Scenario::all();

    assert_eq!(all.len(), 20);
    assert_eq!(all[0].title(), "Fuzzy set A");
    assert_eq!(all[9].title(), "Union of second type");
    assert_eq!(all[19].title(), "De Morgan I3 U3");

    for scenario in &all {
        assert_eq!(scenario.slug().parse::<Scenario>(), Ok(*scenario));
    }

    assert_eq!(
        "union-4".parse::<Scenario>(),
        Err(FuzzyError::UnknownScenario { name: "union-4".into() })
    );
}

#[test]
fn test_de_morgan_labels() {
    let scenario: Scenario = "de-morgan-i1-u2".parse().unwrap();
    let labels: Vec<_> = scenario.series().into_iter().map(|s| s.label).collect();

    assert_eq!(labels, ["Fuzzy set A", "Fuzzy set B", "!(A i1 B)", "!A u2 !B"]);
    assert!(!scenario.is_de_morgan_dual());
    assert!("de-morgan-i3-u3".parse::<Scenario>().unwrap().is_de_morgan_dual());
}

#[test]
fn test_de_morgan_pairings() {
    let sets = BaseSets::reference();
    let domain = SamplingDomain::default();

    for scenario in Scenario::all().into_iter().filter(|s| matches!(s, Scenario::DeMorgan { .. })) {
        let series = scenario.series();
        let lhs = series[2].expr.build(&sets);
        let rhs = series[3].expr.build(&sets);
        let deviation = domain.max_deviation(&lhs, &rhs).unwrap();

        if scenario.is_de_morgan_dual() {
            assert!(deviation < 1e-9, "{scenario} deviates by {deviation}");
        } else {
            assert!(deviation > 1e-3, "{scenario} unexpectedly matches");
        }
    }
}

#[test]
fn test_reference_curves() {
    use approx::assert_abs_diff_eq;

    let sets = BaseSets::reference();
    let domain = SamplingDomain::default();

    let curves = Scenario::SetA.curves(&sets, &domain).unwrap();
    assert_eq!(curves.len(), 1);
    assert_eq!(curves[0].points.len(), 701);
    assert_eq!(curves[0].points[0].0, -20.);
    assert_abs_diff_eq!(curves[0].points[0].1, ((-20f64).cos() + 1.) / 2.);
    assert_abs_diff_eq!(curves[0].points[0].1, 0.7040, epsilon = 1e-4);

    let curves = Scenario::Difference.curves(&sets, &domain).unwrap();
    let labels: Vec<_> = curves.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["Fuzzy set A", "Fuzzy set B", "Difference"]);

    // At x = 10, A(10) ~ 0.0805 sits below B(10) = 0.1
    let (x, y) = curves[2].points[300];
    assert_abs_diff_eq!(x, 10., epsilon = 1e-9);
    assert_eq!(y, 0.);

    let difference = Expr::A.difference(Expr::B).build(&sets);
    let x = 4. * std::f64::consts::PI;
    assert_abs_diff_eq!(difference.evaluate(x), 1. - 1. / x, epsilon = 1e-12);
}

#[test]
fn test_every_scenario_samples() {
    let sets = BaseSets::reference();
    let domain = SamplingDomain::new(-5., 5., 0.5).unwrap();

    for scenario in Scenario::all() {
        let curves = scenario.curves(&sets, &domain).unwrap();

        assert_eq!(curves.len(), scenario.series().len());
        assert!(curves.iter().all(|c| c.points.len() == 21));
    }
}
