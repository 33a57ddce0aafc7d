use thiserror::Error;

/// Errors raised while parsing or validating a search configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Operand list cannot be empty")]
    EmptyOperands,
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    #[error("Number {0} is outside 0..=127")]
    OperandOutOfRange(i64),
    #[error("Invalid range: min={min}, max={max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("Invalid operator: '{0}'")]
    InvalidOperator(char),
    #[error("Operand count must be at least 1")]
    ZeroSize,
    #[error("Worker count must be at least 1")]
    ZeroJobs,
    #[error("{given} fixed operands do not fit in a list of {size}")]
    TooManyOperands { given: usize, size: usize },
    #[error("{given} fixed operands given for a list of {size} and no range to fill the rest")]
    MissingOperands { given: usize, size: usize },
    #[error("{given} fixed operators do not fit in {slots} operator slots")]
    TooManyOperators { given: usize, slots: usize },
}
