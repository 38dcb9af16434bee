//! Simple error types and helpers for consistent error handling.
//!
//! It uses the thiserror crate to reduce boilerplate.
use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogiminError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Too many variables: {0} (at most {max} are supported)", max = crate::func::MAX_VARIABLES)]
    TooManyVariables(usize),

    #[error("Implicants of different sizes can not be combined ({left} and {right})")]
    InvalidImplicantArity { left: usize, right: usize },

    #[error("Term {term} does not fit in {width} variables")]
    TermOutOfRange { term: usize, width: usize },

    #[error("A pattern of width {width} can not be rendered with {variables} variables")]
    VariableMismatch { width: usize, variables: usize },

    #[error("Invalid pattern \"{0}\"")]
    InvalidPattern(String),

    #[error("No value assigned to variable \"{0}\"")]
    UnassignedVariable(char),

    #[error("Karnaugh maps are only available for 2 to 5 variables (got {0})")]
    UnsupportedMapSize(usize),

    #[error("No expression was provided")]
    MissingExpression(),

    #[error(transparent)]
    Generic(#[from] GenericError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid token: \"{0}\"")]
    InvalidToken(String),

    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    #[error("Missing operand for \"{0}\"")]
    MissingOperand(String),

    #[error("{0} operands are not connected by an operator")]
    DanglingOperands(usize),

    #[error("Empty expression")]
    EmptyExpression,
}

#[derive(Error, Debug)]
pub struct GenericError {
    s: String,
}

impl GenericError {
    pub fn new(s: String) -> Self {
        GenericError { s }
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.s)
    }
}

pub type LogiminResult<T> = Result<T, LogiminError>;

pub type EmptyLogiminResult = LogiminResult<()>;

pub fn generic_error(s: String) -> LogiminError {
    LogiminError::Generic(GenericError::new(s))
}

impl LogiminError {
    /// Retrieve the underlying parse error, if any
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            LogiminError::Parse(e) => Some(e),
            _ => None,
        }
    }
}
