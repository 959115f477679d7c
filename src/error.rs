use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyError {
    #[error("Invalid sampling domain [{start}, {end}] with step {step}: {reason}")]
    InvalidDomain {
        start: f64,
        end: f64,
        step: f64,
        reason: &'static str,
    },
    #[error("Membership function is undefined at x = {x} (evaluated to {value})")]
    NonFinite { x: f64, value: f64 },
    #[error("Unknown operator '{name}'")]
    UnknownOperator { name: String },
    #[error("Unknown scenario '{name}'")]
    UnknownScenario { name: String },
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
