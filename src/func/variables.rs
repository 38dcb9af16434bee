use itertools::Itertools;
use std::fmt;
use std::slice::Iter;

use crate::func::token::{self, Token};

/// Ordered set of distinct variable names.
///
/// The position of a variable in this list is its bit position in truth table
/// indices and implicant patterns: the first variable is the most significant bit.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Variables {
    names: Vec<char>,
}

impl Variables {
    /// Collect the variables used in a list of tokens
    pub fn from_tokens(tokens: &[Token]) -> Self {
        Variables::from_names(tokens.iter().filter_map(|t| match t {
            Token::Variable(c) => Some(*c),
            _ => None,
        }))
    }

    /// Collect the variables of an expression.
    /// Unrecognized tokens are ignored: rejecting them is up to the parser.
    pub fn from_expression(expression: &str) -> Self {
        Variables::from_tokens(&token::tokenize(expression))
    }

    /// Build a sorted list of distinct names.
    pub fn from_names<I: IntoIterator<Item = char>>(names: I) -> Self {
        Variables {
            names: names.into_iter().sorted().dedup().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, uid: usize) -> Option<char> {
        self.names.get(uid).copied()
    }

    pub fn position(&self, name: char) -> Option<usize> {
        self.names.binary_search(&name).ok()
    }

    pub fn iter(&self) -> Iter<char> {
        self.names.iter()
    }

    /// Number of possible assignments of these variables
    pub fn assignments(&self) -> usize {
        1 << self.names.len()
    }
}

impl fmt::Display for Variables {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.names.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_variables() {
        let vars = Variables::from_expression("( c | a ) & ! c -> b");
        assert_eq!(vars.iter().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
        assert_eq!(vars.position('b'), Some(1));
        assert_eq!(vars.position('d'), None);
        assert_eq!(vars.assignments(), 8);
        assert_eq!(format!("{}", vars), "a b c");
    }

    #[test]
    fn ignore_unknown_tokens() {
        let vars = Variables::from_expression("a & x | foo");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get(0), Some('a'));
    }

    #[test]
    fn empty_expression() {
        assert!(Variables::from_expression("").is_empty());
        assert!(Variables::from_expression("   ").is_empty());
    }
}
