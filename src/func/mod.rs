//! Represent, evaluate and minimize Boolean functions
//!
//! The processing chain goes from the textual expression to a minimal normal form:
//! [`token`] splits the text, [`expr`] builds and evaluates its RPN, [`table`] enumerates
//! the truth table and its canonical forms, [`implicant`] searches prime implicants
//! and [`cover`] selects a small subset of them covering all terms.

pub mod analysis;
pub mod cover;
pub mod expr;
pub mod implicant;
pub mod kmap;
pub mod pattern;
pub mod table;
pub mod token;
pub mod variables;

use std::fmt;

/// Maximal number of distinct variables in an expression
pub const MAX_VARIABLES: usize = 5;

/// Normal form targeted by a minimization.
///
/// A sum of products is built on the minterms (rows where the function is true),
/// a product of sums on the maxterms (rows where it is false).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Form {
    Sop,
    Pos,
}

impl Form {
    /// Truth value of the rows used as terms in this form
    pub fn target(self) -> bool {
        match self {
            Form::Sop => true,
            Form::Pos => false,
        }
    }

    /// Constant denoting a form without any term
    pub fn empty(self) -> &'static str {
        match self {
            Form::Sop => "0",
            Form::Pos => "1",
        }
    }

    /// Constant denoting a form where all assignments are terms
    pub fn full(self) -> &'static str {
        match self {
            Form::Sop => "1",
            Form::Pos => "0",
        }
    }

    /// Separator between the literals of a single term
    fn literal_separator(self) -> &'static str {
        match self {
            Form::Sop => " & ",
            Form::Pos => " | ",
        }
    }

    /// Separator between terms
    fn term_separator(self) -> &'static str {
        match self {
            Form::Sop => " | ",
            Form::Pos => " & ",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Form::Sop => write!(f, "SOP"),
            Form::Pos => write!(f, "POS"),
        }
    }
}
