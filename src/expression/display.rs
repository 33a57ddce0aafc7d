use std::fmt;

use crate::expression::ast::{Operator, Priority, Token};
use crate::expression::errors::ExpressionError;
use crate::expression::eval::fold_postfix;

/// Token of a rendered infix expression.
///
/// The derived ordering (operands by value, then operators, then brackets)
/// decides which operand of a commutative operator is written first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InfixToken {
    Operand(u8),
    Operator(Operator),
    Open,
    Close,
}

/// Minimally parenthesized infix expression
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Infix(Vec<InfixToken>);

impl Infix {
    pub fn tokens(&self) -> &[InfixToken] {
        &self.0
    }
}

impl fmt::Display for InfixToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InfixToken::Operand(value) => write!(f, "{}", value),
            InfixToken::Operator(op) => write!(f, "{}", op),
            InfixToken::Open => write!(f, "("),
            InfixToken::Close => write!(f, ")"),
        }
    }
}

impl fmt::Display for Infix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in &self.0 {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

fn bracket(mut inner: Vec<InfixToken>) -> Vec<InfixToken> {
    inner.insert(0, InfixToken::Open);
    inner.push(InfixToken::Close);
    inner
}

fn combine(
    op: Operator,
    (mut left, left_priority): (Vec<InfixToken>, Priority),
    (mut right, right_priority): (Vec<InfixToken>, Priority),
) -> (Vec<InfixToken>, Priority) {
    let priority = op.priority();
    let commutative = op.is_commutative();

    if left_priority < priority {
        left = bracket(left);
    }
    if right_priority < priority || (right_priority == priority && !commutative) {
        right = bracket(right);
    }
    // Smaller side first, so mirrored postfix forms print identically.
    if commutative && left > right {
        std::mem::swap(&mut left, &mut right);
    }

    left.reserve(right.len() + 1);
    left.push(InfixToken::Operator(op));
    left.append(&mut right);
    (left, priority)
}

/// Converts a postfix solution into its canonical infix form.
///
/// Two postfix sequences that differ only by the operand order of a
/// commutative operator produce the same `Infix`.
///
/// # Errors
///
/// Returns an error if the sequence is not a well-formed postfix expression.
pub fn to_canonical_infix(postfix: &[Token]) -> Result<Infix, ExpressionError> {
    let mut stack = Vec::with_capacity(postfix.len());
    let (tokens, _) = fold_postfix(
        postfix,
        &mut stack,
        |value| (vec![InfixToken::Operand(value)], Priority::Operand),
        combine,
    )?;
    Ok(Infix(tokens))
}
