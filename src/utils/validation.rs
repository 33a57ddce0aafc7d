use log::{debug, warn};

use crate::expression::MAX_OPERAND;
use crate::solver::SearchConfig;
use crate::utils::errors::UtilsError;

/// Checks that a configuration can be handed to the search engine.
///
/// # Errors
///
/// Returns the first violated constraint: zero operand count or worker count,
/// operands outside `0..=127`, an inverted range, more fixed operands or
/// operators than there are slots, or too few operands without a range.
pub fn validate_config(config: &SearchConfig) -> Result<(), UtilsError> {
    debug!("Validating search configuration: {:?}", config);

    if config.size == 0 {
        warn!("Operand count is zero");
        return Err(UtilsError::ZeroSize);
    }
    if config.jobs == 0 {
        warn!("Worker count is zero");
        return Err(UtilsError::ZeroJobs);
    }
    if let Some(&value) = config.numbers.iter().find(|v| **v > MAX_OPERAND) {
        warn!("Operand {} out of range", value);
        return Err(UtilsError::OperandOutOfRange(value.into()));
    }
    if config.numbers.len() > config.size {
        return Err(UtilsError::TooManyOperands {
            given: config.numbers.len(),
            size: config.size,
        });
    }

    match config.range {
        Some((min, max)) => {
            if min > max {
                warn!("Inverted operand range {}:{}", min, max);
                return Err(UtilsError::InvalidRange {
                    min: min.into(),
                    max: max.into(),
                });
            }
            if max > MAX_OPERAND {
                return Err(UtilsError::OperandOutOfRange(max.into()));
            }
        }
        None => {
            if config.numbers.is_empty() {
                warn!("No operands and no range given");
                return Err(UtilsError::EmptyOperands);
            }
            if config.numbers.len() < config.size {
                return Err(UtilsError::MissingOperands {
                    given: config.numbers.len(),
                    size: config.size,
                });
            }
        }
    }

    let slots = config.size - 1;
    if config.operators.len() > slots {
        return Err(UtilsError::TooManyOperators {
            given: config.operators.len(),
            slots,
        });
    }

    debug!("Search configuration is valid");
    Ok(())
}
