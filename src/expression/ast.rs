use std::fmt;

/// Largest operand value a token can carry
pub const MAX_OPERAND: u8 = 0x7F;

/// Binding strength used when deciding where parentheses are needed.
///
/// Operands always bind tighter than any operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    High,
    Operand,
}

/// The four supported binary operators, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

/// Static metadata attached to an operator kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub symbol: char,
    pub commutative: bool,
    pub priority: Priority,
}

static OPERATOR_TABLE: [OperatorInfo; 4] = [
    OperatorInfo {
        symbol: '+',
        commutative: true,
        priority: Priority::Low,
    },
    OperatorInfo {
        symbol: '-',
        commutative: false,
        priority: Priority::Low,
    },
    OperatorInfo {
        symbol: '*',
        commutative: true,
        priority: Priority::High,
    },
    OperatorInfo {
        symbol: '/',
        commutative: false,
        priority: Priority::High,
    },
];

impl Operator {
    /// Every operator in canonical order
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn info(self) -> &'static OperatorInfo {
        // The discriminant is the table index.
        &OPERATOR_TABLE[self as usize]
    }

    pub fn symbol(self) -> char {
        self.info().symbol
    }

    pub fn is_commutative(self) -> bool {
        self.info().commutative
    }

    pub fn priority(self) -> Priority {
        self.info().priority
    }

    pub fn from_symbol(symbol: char) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            // Plain IEEE division: a zero divisor gives inf or NaN.
            Operator::Div => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Smallest unit of a postfix expression.
///
/// The derived ordering places every operand below every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Operand(u8),
    Operator(Operator),
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    pub fn priority(&self) -> Priority {
        match self {
            Token::Operand(_) => Priority::Operand,
            Token::Operator(op) => op.priority(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

/// Space separated rendering of a postfix sequence, e.g. `1 2 + 3 *`
pub fn postfix_to_string(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.to_string()).collect::<Vec<_>>().join(" ")
}
