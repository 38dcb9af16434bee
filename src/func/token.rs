//! Split expressions into tokens
//!
//! Tokens are separated by whitespace: `( a | b ) & ! c`.
//! Variables are single lowercase letters between `a` and `e`.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    NOT,
    AND,
    OR,
    IMPLIES,
    EQUIV,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Variable(char),
    Operator(Operator),
    LeftParen,
    RightParen,
    /// Unrecognized text, kept as is to be rejected by the parser
    Unknown(String),
}

/// Lookup table from operator symbols to operators, filled on first use
static OPERATORS: Lazy<HashMap<&'static str, Operator>> =
    Lazy::new(|| Operator::ALL.iter().map(|o| (o.symbol(), *o)).collect());

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::NOT,
        Operator::AND,
        Operator::OR,
        Operator::IMPLIES,
        Operator::EQUIV,
    ];

    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        OPERATORS.get(symbol).copied()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::NOT => "!",
            Operator::AND => "&",
            Operator::OR => "|",
            Operator::IMPLIES => "->",
            Operator::EQUIV => "~",
        }
    }

    /// Binding strength: higher values bind tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::NOT => 4,
            Operator::AND => 3,
            Operator::OR => 2,
            Operator::IMPLIES => 1,
            Operator::EQUIV => 0,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Operator::AND | Operator::OR => Associativity::Left,
            Operator::NOT | Operator::IMPLIES | Operator::EQUIV => Associativity::Right,
        }
    }

    pub fn is_unary(self) -> bool {
        self == Operator::NOT
    }

    /// Test if an incoming operator must wait for this one (already on the stack)
    /// to be applied first.
    pub fn yields_to(self, top: Operator) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence() <= top.precedence(),
            Associativity::Right => self.precedence() < top.precedence(),
        }
    }

    /// Apply a binary operator. The NOT operator only looks at its right operand.
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Operator::NOT => !right,
            Operator::AND => left && right,
            Operator::OR => left || right,
            Operator::IMPLIES => !left || right,
            Operator::EQUIV => left == right,
        }
    }
}

impl Token {
    /// Classify a single piece of text
    pub fn classify(text: &str) -> Token {
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if is_variable(c) {
                return Token::Variable(c);
            }
        }

        match text {
            "(" => Token::LeftParen,
            ")" => Token::RightParen,
            _ => match Operator::from_symbol(text) {
                Some(op) => Token::Operator(op),
                None => Token::Unknown(String::from(text)),
            },
        }
    }
}

/// Test if a character is an accepted variable name
pub fn is_variable(c: char) -> bool {
    ('a'..='e').contains(&c)
}

/// Split an expression into a list of tokens
pub fn tokenize(expression: &str) -> Vec<Token> {
    expression.split_whitespace().map(Token::classify).collect()
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Variable(c) => write!(f, "{}", c),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Unknown(s) => write!(f, "{}", s),
        }
    }
}
