//! Fuzzy sets over the reals and the standard operators that combine them.
//!
//! A [`FuzzySet`] is nothing more than a membership function. The operators
//! (complement, concentration, three types of intersection and union, and the
//! bounded difference) build new sets pointwise from existing ones:
//!
//! ```
//! use fuzzy_sets::{BaseSets, SamplingDomain, Scenario};
//!
//! let sets = BaseSets::reference();
//! let a_or_b = sets.a.union_bounded(&sets.b);
//! assert_eq!(a_or_b.evaluate(0.), 1.);
//!
//! let curves = Scenario::Union(fuzzy_sets::OperatorType::Second)
//!     .curves(&sets, &SamplingDomain::default())
//!     .unwrap();
//! assert_eq!(curves.len(), 3);
//! ```

mod dsl;
mod error;
mod linspace;
mod membership;
mod ops;
mod sampling;
mod scenario;
mod set;

pub use dsl::Expr;
pub use error::{FuzzyError, Result};
pub use linspace::Linspace;
pub use membership::{cosine_bump, exp_plateau_reciprocal, BaseSets};
pub use ops::{BinaryKind, BinaryOp, OperatorType, UnaryOp};
pub use sampling::{Curve, SamplingDomain};
pub use scenario::{Scenario, Series};
pub use set::FuzzySet;
