use thiserror::Error;

use crate::expression::ExpressionError;
use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Expression error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Invalid configuration: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
