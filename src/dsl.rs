use std::fmt;

use crate::membership::BaseSets;
use crate::ops::{BinaryOp, UnaryOp};
use crate::set::FuzzySet;

/// An operator composition over the two base sets.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    A,
    B,
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn unary(self, op: UnaryOp) -> Self {
        Expr::Unary(op, Box::new(self))
    }

    pub fn binary(self, op: BinaryOp, rhs: Expr) -> Self {
        Expr::Binary(op, Box::new(self), Box::new(rhs))
    }

    pub fn complement(self) -> Self {
        self.unary(UnaryOp::Complement)
    }

    pub fn concentration(self) -> Self {
        self.unary(UnaryOp::Concentration)
    }

    pub fn intersection_min(self, rhs: Expr) -> Self {
        self.binary(BinaryOp::IntersectionMin, rhs)
    }

    pub fn intersection_bounded(self, rhs: Expr) -> Self {
        self.binary(BinaryOp::IntersectionBounded, rhs)
    }

    pub fn intersection_product(self, rhs: Expr) -> Self {
        self.binary(BinaryOp::IntersectionProduct, rhs)
    }

    pub fn union_max(self, rhs: Expr) -> Self {
        self.binary(BinaryOp::UnionMax, rhs)
    }

    pub fn union_bounded(self, rhs: Expr) -> Self {
        self.binary(BinaryOp::UnionBounded, rhs)
    }

    pub fn union_sum(self, rhs: Expr) -> Self {
        self.binary(BinaryOp::UnionSum, rhs)
    }

    pub fn difference(self, rhs: Expr) -> Self {
        self.binary(BinaryOp::Difference, rhs)
    }

    pub fn build(&self, sets: &BaseSets) -> FuzzySet {
        match self {
            Expr::A => sets.a.clone(),
            Expr::B => sets.b.clone(),
            Expr::Unary(op, expr) => expr.build(sets).apply_unary(*op),
            Expr::Binary(op, lhs, rhs) => lhs.build(sets).apply_binary(*op, &rhs.build(sets)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn operand(expr: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match expr {
                Expr::Binary(..) => write!(f, "({expr})"),
                _ => write!(f, "{expr}"),
            }
        }

        match self {
            Expr::A => f.write_str("A"),
            Expr::B => f.write_str("B"),
            Expr::Unary(op, expr) => {
                f.write_str(op.symbol())?;
                operand(expr, f)
            },
            Expr::Binary(op, lhs, rhs) => {
                operand(lhs, f)?;
                write!(f, " {} ", op.symbol())?;
                operand(rhs, f)
            },
        }
    }
}

#[test]
fn test_display() {
    assert_eq!(Expr::A.intersection_min(Expr::B).complement().to_string(), "!(A i1 B)");
    assert_eq!(
        Expr::A.complement().union_bounded(Expr::B.complement()).to_string(),
        "!A u2 !B"
    );
    assert_eq!(Expr::A.difference(Expr::B).to_string(), "A \\ B");
    assert_eq!(
        Expr::A.union_sum(Expr::B).intersection_product(Expr::A.concentration()).to_string(),
        "(A u3 B) i3 ~A"
    );
}

#[test]
fn test_build() {
    let sets = BaseSets::new(FuzzySet::new(|_| 0.75), FuzzySet::new(|_| 0.5));
    let expr = Expr::A.intersection_product(Expr::B).complement();

    assert_eq!(expr.build(&sets).evaluate(0.), 1. - 0.75 * 0.5);
    assert_eq!(Expr::B.build(&sets).evaluate(3.), 0.5);
    assert_eq!(Expr::A.difference(Expr::B).build(&sets).evaluate(0.), 0.25);
}
