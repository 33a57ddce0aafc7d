use log::debug;

use crate::expression::{MAX_OPERAND, Operator};
use crate::utils::errors::UtilsError;

fn parse_operand(text: &str) -> Result<u8, UtilsError> {
    let value = text
        .trim()
        .parse::<i64>()
        .map_err(|_| UtilsError::InvalidNumber(text.to_string()))?;
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_OPERAND)
        .ok_or(UtilsError::OperandOutOfRange(value))
}

/// Parses a colon separated operand list such as `1:2:3:4`.
///
/// # Errors
///
/// Returns an error for an empty list, a malformed number or a value outside
/// `0..=127`.
pub fn parse_number_list(text: &str) -> Result<Vec<u8>, UtilsError> {
    if text.trim().is_empty() {
        return Err(UtilsError::EmptyOperands);
    }
    let numbers = text
        .split(':')
        .map(parse_operand)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Parsed operand list '{}' as {:?}", text, numbers);
    Ok(numbers)
}

/// Parses an inclusive operand range written `min:max`.
///
/// # Errors
///
/// Returns an error if either bound is malformed or out of bounds, or if
/// `min > max`.
pub fn parse_range(text: &str) -> Result<(u8, u8), UtilsError> {
    let (min, max) = text
        .split_once(':')
        .ok_or_else(|| UtilsError::InvalidNumber(text.to_string()))?;
    let min = parse_operand(min)?;
    let max = parse_operand(max)?;
    if min > max {
        return Err(UtilsError::InvalidRange {
            min: min.into(),
            max: max.into(),
        });
    }
    Ok((min, max))
}

/// Parses an operator list written as symbols, e.g. `+*/`.
///
/// # Errors
///
/// Returns an error on the first character that is not `+`, `-`, `*` or `/`.
pub fn parse_operators(text: &str) -> Result<Vec<Operator>, UtilsError> {
    text.chars()
        .map(|c| Operator::from_symbol(c).ok_or(UtilsError::InvalidOperator(c)))
        .collect()
}
