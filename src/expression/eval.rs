use log::trace;

use crate::expression::ast::{Operator, Token};
use crate::expression::errors::ExpressionError;

/// Reduces a postfix sequence with an explicit stack.
///
/// Operands are lifted with `leaf`; on an operator the right operand is popped
/// first, then the left, and `combine` pushes their result. The stack is
/// cleared before use so callers can keep one around between calls.
pub(crate) fn fold_postfix<T, L, C>(
    tokens: &[Token],
    stack: &mut Vec<T>,
    mut leaf: L,
    mut combine: C,
) -> Result<T, ExpressionError>
where
    L: FnMut(u8) -> T,
    C: FnMut(Operator, T, T) -> T,
{
    stack.clear();
    for (position, token) in tokens.iter().enumerate() {
        match *token {
            Token::Operand(value) => stack.push(leaf(value)),
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    trace!("Stack underflow at position {}", position);
                    return Err(ExpressionError::StackUnderflow(position));
                };
                stack.push(combine(op, left, right));
            }
        }
    }

    match stack.len() {
        0 => Err(ExpressionError::Empty),
        1 => stack.pop().ok_or(ExpressionError::Empty),
        n => Err(ExpressionError::DanglingOperands(n)),
    }
}

/// Evaluates a postfix sequence reusing `stack` as scratch space
///
/// # Errors
///
/// Returns an error if the sequence is not a well-formed postfix expression.
pub fn evaluate_postfix_with(tokens: &[Token], stack: &mut Vec<f64>) -> Result<f64, ExpressionError> {
    fold_postfix(tokens, stack, f64::from, |op, left, right| op.apply(left, right))
}

/// Evaluates a postfix sequence in double precision.
///
/// Division is plain floating point division, so a zero divisor yields an
/// infinite or NaN value rather than an error.
///
/// # Errors
///
/// Returns an error if the sequence is not a well-formed postfix expression.
pub fn evaluate_postfix(tokens: &[Token]) -> Result<f64, ExpressionError> {
    let mut stack = Vec::with_capacity(tokens.len());
    evaluate_postfix_with(tokens, &mut stack)
}
