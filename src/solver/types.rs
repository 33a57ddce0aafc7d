use crate::expression::{Operator, Token};

/// Starting arrangement for the permutation search: the operand multiset
/// followed by the operator multiset, `2s - 1` tokens in total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    pub fn new(operands: &[u8], operators: &[Operator]) -> Self {
        let mut tokens = Vec::with_capacity(operands.len() + operators.len());
        tokens.extend(operands.iter().copied().map(Token::Operand));
        tokens.extend(operators.iter().copied().map(Token::Operator));
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// One entry of the flattened candidate stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Opens the group of templates sharing these operands
    Header(Vec<u8>),
    Template(Template),
}

/// One entry of the search output stream.
///
/// Solutions belong to the group opened by the closest preceding header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Header(Vec<u8>),
    Solution(Vec<Token>),
}

impl Record {
    pub fn is_header(&self) -> bool {
        matches!(self, Record::Header(_))
    }
}
