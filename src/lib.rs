//! Twentyfour - exhaustive search for arithmetic expressions hitting a target
//!
//! Given a multiset of small non-negative integers and the operators
//! `+ - * /`, the solver enumerates every way to combine all operands into
//! one expression whose value equals a target, and reports each distinct
//! expression once in canonical infix form.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{ExpressionError, Operator, Token};
pub use solver::{Group, PruneLevel, SearchConfig, Solver, SolverError};
pub use utils::{UtilsError, validate_config};

/// Validate a configuration and run the search it describes
///
/// # Errors
///
/// This function will return an error if:
/// * The configuration is rejected by [`validate_config`]
/// * The worker pool cannot be started
///
/// # Examples
///
/// ```
/// use twentyfour::{SearchConfig, solve};
///
/// let groups = solve(&SearchConfig::new(24, vec![1, 2, 3, 4]))?;
/// assert!(groups[0].infix_strings().contains(&"1*2*3*4".to_string()));
/// # Ok::<(), twentyfour::SolverError>(())
/// ```
pub fn solve(config: &SearchConfig) -> Result<Vec<Group>, SolverError> {
    validate_config(config)?;
    Solver::new(config.clone()).solve()
}
