//! Postfix tokens, their evaluation and canonical infix rendering

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{MAX_OPERAND, Operator, OperatorInfo, Priority, Token, postfix_to_string};
pub use display::{Infix, InfixToken, to_canonical_infix};
pub use errors::ExpressionError;
pub use eval::{evaluate_postfix, evaluate_postfix_with};
