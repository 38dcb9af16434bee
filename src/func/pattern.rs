use std::fmt;
use std::str::FromStr;

use crate::func::variables::Variables;
use crate::func::{Form, MAX_VARIABLES};
use crate::helper::error::{LogiminError, LogiminResult};

/// Value of a single position in a pattern
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Bit {
    Zero,
    One,
    /// The variable is free
    Any,
}

/// Patterns are subspaces in which a subset of variables are fixed (true or false).
///
/// Position `i` corresponds to the `i`-th variable, which is also the bit `(n-1-i)`
/// of truth table indices. A pattern with `k` free positions covers `2^k` indices.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Pattern {
    bits: [Bit; MAX_VARIABLES],
    len: usize,
}

impl Bit {
    fn from_char(c: char) -> Option<Bit> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            '-' => Some(Bit::Any),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
            Bit::Any => '-',
        }
    }
}

impl Pattern {
    /// Create a pattern without any fixed variable.
    /// This pattern corresponds to the full state space.
    pub fn universal(len: usize) -> LogiminResult<Pattern> {
        check_width(len)?;
        Ok(Pattern {
            bits: [Bit::Any; MAX_VARIABLES],
            len,
        })
    }

    /// Create a pattern restricted to a single truth table index
    pub fn from_term(term: usize, len: usize) -> LogiminResult<Pattern> {
        check_width(len)?;
        if term >= 1 << len {
            return Err(LogiminError::TermOutOfRange { term, width: len });
        }
        let mut bits = [Bit::Any; MAX_VARIABLES];
        for (i, b) in bits.iter_mut().take(len).enumerate() {
            *b = if term & (1 << (len - 1 - i)) != 0 {
                Bit::One
            } else {
                Bit::Zero
            };
        }
        Ok(Pattern { bits, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bits(&self) -> &[Bit] {
        &self.bits[..self.len]
    }

    /// Number of free positions
    pub fn free_count(&self) -> usize {
        self.bits().iter().filter(|b| **b == Bit::Any).count()
    }

    /// Test if this pattern lacks any restriction.
    pub fn is_universal(&self) -> bool {
        self.bits().iter().all(|b| *b == Bit::Any)
    }

    /// Try to merge two adjacent patterns.
    ///
    /// The merge succeeds if the patterns differ on exactly one position, where both are fixed.
    /// The merged pattern frees this position. A position that is free in a single pattern
    /// prevents the merge, as do identical patterns.
    pub fn combine(&self, other: &Pattern) -> LogiminResult<Option<Pattern>> {
        if self.len != other.len {
            return Err(LogiminError::InvalidImplicantArity {
                left: self.len,
                right: other.len,
            });
        }

        let mut conflict = None;
        for (i, (a, b)) in self.bits().iter().zip(other.bits()).enumerate() {
            match (a, b) {
                _ if a == b => (),
                (Bit::Any, _) | (_, Bit::Any) => return Ok(None),
                _ => {
                    if conflict.is_some() {
                        return Ok(None);
                    }
                    conflict = Some(i);
                }
            }
        }

        Ok(conflict.map(|idx| {
            let mut merged = *self;
            merged.bits[idx] = Bit::Any;
            merged
        }))
    }

    /// Test if a truth table index is contained in this pattern
    pub fn covers(&self, term: usize) -> bool {
        if term >= 1 << self.len {
            return false;
        }
        self.bits().iter().enumerate().all(|(i, b)| {
            let set = term & (1 << (self.len - 1 - i)) != 0;
            match b {
                Bit::Any => true,
                Bit::One => set,
                Bit::Zero => !set,
            }
        })
    }

    /// All truth table indices contained in this pattern, in increasing order
    pub fn terms(&self) -> impl Iterator<Item = usize> + '_ {
        (0..1usize << self.len).filter(move |t| self.covers(*t))
    }

    /// Render the term corresponding to this pattern.
    ///
    /// In a sum of products, the pattern is a product of literals which are negated for
    /// positions fixed at 0. In a product of sums, it is a sum of literals which are
    /// negated for positions fixed at 1.
    /// The list of variables must match the width of the pattern.
    pub fn to_expression(&self, variables: &Variables, form: Form) -> LogiminResult<String> {
        if variables.len() != self.len {
            return Err(LogiminError::VariableMismatch {
                width: self.len,
                variables: variables.len(),
            });
        }

        let negated = match form {
            Form::Sop => Bit::Zero,
            Form::Pos => Bit::One,
        };

        let literals: Vec<String> = self
            .bits()
            .iter()
            .zip(variables.iter())
            .filter(|(b, _)| **b != Bit::Any)
            .map(|(b, name)| {
                if *b == negated {
                    format!("!{}", name)
                } else {
                    format!("{}", name)
                }
            })
            .collect();

        Ok(match (literals.len(), form) {
            (0, _) => String::from(form.full()),
            (1, _) | (_, Form::Sop) => literals.join(form.literal_separator()),
            (_, Form::Pos) => format!("( {} )", literals.join(form.literal_separator())),
        })
    }
}

fn check_width(len: usize) -> LogiminResult<()> {
    if len > MAX_VARIABLES {
        return Err(LogiminError::TooManyVariables(len));
    }
    Ok(())
}

/// Create a pattern from a string of '0', '1' and '-' characters
impl FromStr for Pattern {
    type Err = LogiminError;

    fn from_str(descr: &str) -> Result<Self, Self::Err> {
        let len = descr.chars().count();
        if len > MAX_VARIABLES {
            return Err(LogiminError::InvalidPattern(String::from(descr)));
        }
        let mut p = Pattern::universal(len)?;
        for (idx, c) in descr.chars().enumerate() {
            p.bits[idx] =
                Bit::from_char(c).ok_or_else(|| LogiminError::InvalidPattern(String::from(descr)))?;
        }
        Ok(p)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.bits().iter().map(|b| b.as_char()).collect();
        write!(f, "{}", &s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn test_patterns() {
        let a = Pattern::from_term(5, 3).unwrap();
        assert_eq!(a, p("101"));
        assert_eq!(a.free_count(), 0);
        assert_eq!(Pattern::from_term(1, 4).unwrap().to_string(), "0001");
        assert_eq!(Pattern::universal(3).unwrap().to_string(), "---");
        assert!(Pattern::universal(3).unwrap().is_universal());

        assert!(Pattern::from_term(8, 3).is_err());
        assert!(Pattern::universal(6).is_err());
        assert!("01x".parse::<Pattern>().is_err());
        assert!("010101".parse::<Pattern>().is_err());
    }

    #[test]
    fn test_combine() {
        assert_eq!(p("000").combine(&p("001")).unwrap(), Some(p("00-")));
        assert_eq!(p("0-0").combine(&p("0-1")).unwrap(), Some(p("0--")));
        assert_eq!(p("-01").combine(&p("-11")).unwrap(), Some(p("--1")));

        // identical patterns
        assert_eq!(p("010").combine(&p("010")).unwrap(), None);
        // two differences
        assert_eq!(p("000").combine(&p("011")).unwrap(), None);
        // free position on one side only
        assert_eq!(p("0-0").combine(&p("010")).unwrap(), None);
        assert_eq!(p("-00").combine(&p("001")).unwrap(), None);

        assert!(matches!(
            p("00").combine(&p("000")),
            Err(LogiminError::InvalidImplicantArity { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_coverage() {
        let x = p("-0-");
        assert_eq!(x.terms().collect::<Vec<_>>(), vec![0, 1, 4, 5]);
        assert!(x.covers(4));
        assert!(!x.covers(2));
        assert!(!x.covers(8));
    }

    #[test]
    fn test_expression() {
        let vars = Variables::from_names(vec!['a', 'b', 'c']);
        let render = |s: &str, form: Form| p(s).to_expression(&vars, form).unwrap();
        assert_eq!(render("10-", Form::Sop), "a & !b");
        assert_eq!(render("10-", Form::Pos), "( !a | b )");
        assert_eq!(render("-1-", Form::Sop), "b");
        assert_eq!(render("-1-", Form::Pos), "!b");
        assert_eq!(render("111", Form::Sop), "a & b & c");
        assert_eq!(render("---", Form::Sop), "1");
        assert_eq!(render("---", Form::Pos), "0");
    }

    #[test]
    fn test_expression_width() {
        let vars = Variables::from_names(vec!['a', 'b']);
        assert!(matches!(
            p("10-").to_expression(&vars, Form::Sop),
            Err(LogiminError::VariableMismatch {
                width: 3,
                variables: 2
            })
        ));
        assert!(p("1").to_expression(&vars, Form::Pos).is_err());
    }
}
