use std::fmt;
use std::str::FromStr;

use num::Float;

use crate::error::FuzzyError;

/// Operators taking a single fuzzy set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UnaryOp {
    /// Standard complement: `1 - u`
    Complement,
    /// Concentration: `u^2`
    Concentration,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 2] = [UnaryOp::Complement, UnaryOp::Concentration];

    pub fn call<F: Float>(self, u: F) -> F {
        match self {
            Self::Complement => F::one() - u,
            Self::Concentration => u * u,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Complement => "complement",
            Self::Concentration => "concentration",
        }
    }

    /// Prefix used when rendering expressions
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Complement => "!",
            Self::Concentration => "~",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryOp {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| FuzzyError::UnknownOperator { name: s.to_owned() })
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryKind {
    Intersection,
    Union,
    Difference,
}

/// Intersections and unions each come in three types.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum OperatorType {
    /// Zadeh min/max
    First,
    /// Bounded (Lukasiewicz)
    Second,
    /// Algebraic product/sum
    Third,
}

impl OperatorType {
    pub const ALL: [OperatorType; 3] = [OperatorType::First, OperatorType::Second, OperatorType::Third];

    pub fn index(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    pub fn ordinal(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }
}

/// Operators combining two fuzzy sets.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOp {
    IntersectionMin,
    IntersectionBounded,
    IntersectionProduct,
    UnionMax,
    UnionBounded,
    UnionSum,
    Difference,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 7] = [
        BinaryOp::IntersectionMin,
        BinaryOp::IntersectionBounded,
        BinaryOp::IntersectionProduct,
        BinaryOp::UnionMax,
        BinaryOp::UnionBounded,
        BinaryOp::UnionSum,
        BinaryOp::Difference,
    ];

    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::IntersectionMin => F::min(u, v),
            Self::IntersectionBounded => F::max(F::zero(), u + v - F::one()),
            Self::IntersectionProduct => u * v,
            Self::UnionMax => F::max(u, v),
            Self::UnionBounded => F::min(F::one(), u + v),
            Self::UnionSum => u + v - u * v,
            Self::Difference => F::max(F::zero(), u - v),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::IntersectionMin => "intersection-min",
            Self::IntersectionBounded => "intersection-bounded",
            Self::IntersectionProduct => "intersection-product",
            Self::UnionMax => "union-max",
            Self::UnionBounded => "union-bounded",
            Self::UnionSum => "union-sum",
            Self::Difference => "difference",
        }
    }

    pub fn kind(self) -> BinaryKind {
        match self {
            Self::IntersectionMin | Self::IntersectionBounded | Self::IntersectionProduct => BinaryKind::Intersection,
            Self::UnionMax | Self::UnionBounded | Self::UnionSum => BinaryKind::Union,
            Self::Difference => BinaryKind::Difference,
        }
    }

    /// The type of an intersection or union, `None` for the difference
    pub fn operator_type(self) -> Option<OperatorType> {
        match self {
            Self::IntersectionMin | Self::UnionMax => Some(OperatorType::First),
            Self::IntersectionBounded | Self::UnionBounded => Some(OperatorType::Second),
            Self::IntersectionProduct | Self::UnionSum => Some(OperatorType::Third),
            Self::Difference => None,
        }
    }

    pub fn intersection(ty: OperatorType) -> Self {
        match ty {
            OperatorType::First => Self::IntersectionMin,
            OperatorType::Second => Self::IntersectionBounded,
            OperatorType::Third => Self::IntersectionProduct,
        }
    }

    pub fn union(ty: OperatorType) -> Self {
        match ty {
            OperatorType::First => Self::UnionMax,
            OperatorType::Second => Self::UnionBounded,
            OperatorType::Third => Self::UnionSum,
        }
    }

    /// The operator paired with this one under De Morgan's laws:
    /// `!(A iN B) == !A uN !B`.
    pub fn dual(self) -> Option<Self> {
        let ty = self.operator_type()?;

        match self.kind() {
            BinaryKind::Intersection => Some(Self::union(ty)),
            BinaryKind::Union => Some(Self::intersection(ty)),
            BinaryKind::Difference => None,
        }
    }

    /// Infix used when rendering expressions, e.g. `A i2 B`
    pub fn symbol(self) -> &'static str {
        match self {
            Self::IntersectionMin => "i1",
            Self::IntersectionBounded => "i2",
            Self::IntersectionProduct => "i3",
            Self::UnionMax => "u1",
            Self::UnionBounded => "u2",
            Self::UnionSum => "u3",
            Self::Difference => "\\",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BinaryOp {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| FuzzyError::UnknownOperator { name: s.to_owned() })
    }
}

#[test]
fn test_binary_ops() {
    let (u, v) = (0.75f64, 0.5f64);

    assert_eq!(BinaryOp::IntersectionMin.call(u, v), 0.5);
    assert_eq!(BinaryOp::IntersectionBounded.call(u, v), 0.25);
    assert_eq!(BinaryOp::IntersectionProduct.call(u, v), 0.375);
    assert_eq!(BinaryOp::UnionMax.call(u, v), 0.75);
    assert_eq!(BinaryOp::UnionBounded.call(u, v), 1.);
    assert_eq!(BinaryOp::UnionSum.call(u, v), 0.875);
    assert_eq!(BinaryOp::Difference.call(u, v), 0.25);
    assert_eq!(BinaryOp::Difference.call(v, u), 0.);

    // Works for f32 as well
    assert_eq!(BinaryOp::IntersectionBounded.call(0.25f32, 0.5f32), 0.);
}

#[test]
fn test_unary_ops_do_not_clamp() {
    assert_eq!(UnaryOp::Complement.call(0.25f64), 0.75);
    assert_eq!(UnaryOp::Complement.call(2.0f64), -1.);
    assert_eq!(UnaryOp::Concentration.call(0.5f64), 0.25);
    assert_eq!(UnaryOp::Concentration.call(3.0f64), 9.);
}

#[test]
fn test_names_round_trip() {
    for op in BinaryOp::ALL {
        assert_eq!(op.name().parse::<BinaryOp>(), Ok(op));
    }
    for op in UnaryOp::ALL {
        assert_eq!(op.to_string().parse::<UnaryOp>(), Ok(op));
    }

    assert_eq!(
        "xor".parse::<BinaryOp>(),
        Err(FuzzyError::UnknownOperator { name: "xor".into() })
    );
}

#[test]
fn test_duals() {
    assert_eq!(BinaryOp::IntersectionMin.dual(), Some(BinaryOp::UnionMax));
    assert_eq!(BinaryOp::UnionBounded.dual(), Some(BinaryOp::IntersectionBounded));
    assert_eq!(BinaryOp::IntersectionProduct.dual(), Some(BinaryOp::UnionSum));
    assert_eq!(BinaryOp::Difference.dual(), None);

    for op in BinaryOp::ALL.into_iter().filter(|op| op.kind() != BinaryKind::Difference) {
        assert_eq!(op.dual().and_then(BinaryOp::dual), Some(op));
    }
}
