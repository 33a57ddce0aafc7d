use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Empty postfix expression")]
    Empty,
    #[error("Operator at position {0} has fewer than two operands")]
    StackUnderflow(usize),
    #[error("Postfix expression leaves {0} values on the stack")]
    DanglingOperands(usize),
}
