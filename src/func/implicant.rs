use std::fmt;
use std::ops::Deref;
use std::vec::Vec;

use bit_set::BitSet;
use itertools::Itertools;
use log::{debug, trace};

use crate::func::pattern::Pattern;
use crate::func::variables::Variables;
use crate::func::Form;
use crate::helper::error::{LogiminError, LogiminResult};

/// A pattern associated to the list of terms (truth table indices) it covers
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Implicant {
    pattern: Pattern,
    covered: BitSet,
    essential: bool,
}

/// Ordered list of implicants
#[derive(Clone, Default, Debug)]
pub struct Implicants {
    implicants: Vec<Implicant>,
}

// Use the deref trick to delegate some functions to the inner vector
impl Deref for Implicants {
    type Target = Vec<Implicant>;
    fn deref(&self) -> &Vec<Implicant> {
        &self.implicants
    }
}

impl Implicant {
    pub fn new(pattern: Pattern, covered: BitSet) -> Self {
        Implicant {
            pattern,
            covered,
            essential: false,
        }
    }

    /// Create the implicant covering a single term
    pub fn from_term(term: usize, len: usize) -> LogiminResult<Self> {
        let pattern = Pattern::from_term(term, len)?;
        let mut covered = BitSet::with_capacity(1 << len);
        covered.insert(term);
        Ok(Implicant::new(pattern, covered))
    }

    /// Create an implicant from its pattern, covering all terms matching this pattern
    pub fn from_pattern(pattern: Pattern) -> Self {
        let covered = pattern.terms().collect();
        Implicant::new(pattern, covered)
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn covered(&self) -> &BitSet {
        &self.covered
    }

    pub fn covers(&self, term: usize) -> bool {
        self.covered.contains(term)
    }

    pub fn is_essential(&self) -> bool {
        self.essential
    }

    pub fn set_essential(&mut self, essential: bool) {
        self.essential = essential;
    }

    /// Merge with an adjacent implicant.
    /// The merged implicant covers the terms of both sources.
    pub fn combine(&self, other: &Implicant) -> LogiminResult<Option<Implicant>> {
        Ok(self.pattern.combine(&other.pattern)?.map(|pattern| {
            let mut covered = self.covered.clone();
            covered.union_with(&other.covered);
            Implicant::new(pattern, covered)
        }))
    }

    pub fn to_expression(&self, variables: &Variables, form: Form) -> LogiminResult<String> {
        self.pattern.to_expression(variables, form)
    }
}

impl Implicants {
    pub fn new() -> Implicants {
        Implicants::default()
    }

    pub fn from_vec(implicants: Vec<Implicant>) -> Implicants {
        Implicants { implicants }
    }

    pub fn push(&mut self, implicant: Implicant) {
        self.implicants.push(implicant);
    }

    /// Add an implicant, or extend the terms of an existing implicant with the same pattern
    fn add_or_merge(&mut self, implicant: Implicant) {
        match self
            .implicants
            .iter_mut()
            .find(|i| i.pattern == implicant.pattern)
        {
            Some(existing) => existing.covered.union_with(&implicant.covered),
            None => self.implicants.push(implicant),
        }
    }

    /// Render each implicant as a term of the selected form
    pub fn to_expressions(&self, variables: &Variables, form: Form) -> LogiminResult<Vec<String>> {
        self.implicants
            .iter()
            .map(|i| i.to_expression(variables, form))
            .collect()
    }
}

/// Compute the prime implicants covering a list of terms (Quine-McCluskey).
///
/// Implicants are merged generation by generation. Implicants which could not be
/// merged with any other member of their generation are prime.
/// The result is ordered by generation, then by order of discovery.
pub fn prime_implicants(terms: &[usize], len: usize) -> LogiminResult<Implicants> {
    let mut primes = Implicants::new();
    if terms.is_empty() {
        return Ok(primes);
    }

    let universal = Pattern::universal(len)?;
    if let Some(t) = terms.iter().find(|t| **t >= 1 << len) {
        return Err(LogiminError::TermOutOfRange {
            term: *t,
            width: len,
        });
    }

    let distinct: Vec<usize> = terms.iter().copied().unique().collect();
    if distinct.len() == 1 << len {
        primes.push(Implicant::from_pattern(universal));
        return Ok(primes);
    }

    let mut current = distinct
        .iter()
        .map(|t| Implicant::from_term(*t, len))
        .collect::<LogiminResult<Vec<Implicant>>>()?;

    let mut generation = 0;
    while !current.is_empty() {
        let mut next = Implicants::new();
        let mut used = BitSet::with_capacity(current.len());

        for ((i, a), (j, b)) in current.iter().enumerate().tuple_combinations() {
            if let Some(merged) = a.combine(b)? {
                trace!("Merge {} and {} into {}", a.pattern, b.pattern, merged.pattern);
                next.add_or_merge(merged);
                used.insert(i);
                used.insert(j);
            }
        }

        debug!(
            "Generation {}: {} implicants, {} merged, {} new",
            generation,
            current.len(),
            used.len(),
            next.len()
        );

        for (i, implicant) in current.into_iter().enumerate() {
            if !used.contains(i) {
                primes.push(implicant);
            }
        }

        current = next.implicants;
        generation += 1;
    }

    Ok(primes)
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{}]", self.pattern, self.covered.iter().join(", "))
    }
}

impl fmt::Display for Implicants {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in &self.implicants {
            writeln!(f, "{}", i)?;
        }
        write!(f, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(primes: &Implicants) -> Vec<String> {
        primes.iter().map(|i| i.pattern().to_string()).collect()
    }

    #[test]
    fn test_combine_implicants() {
        let a = Implicant::from_term(0, 3).unwrap();
        let b = Implicant::from_term(1, 3).unwrap();
        let m = a.combine(&b).unwrap().unwrap();
        assert_eq!(m.pattern().to_string(), "00-");
        assert_eq!(m.covered().iter().collect::<Vec<_>>(), vec![0, 1]);
        assert!(!m.is_essential());

        let c = Implicant::from_term(3, 3).unwrap();
        assert!(a.combine(&c).unwrap().is_none());
    }

    #[test]
    fn maximal_reduction() {
        let primes = prime_implicants(&[0, 1, 4, 5], 3).unwrap();
        assert_eq!(patterns(&primes), vec!["-0-"]);
        assert_eq!(primes[0].covered().iter().collect::<Vec<_>>(), vec![0, 1, 4, 5]);
    }

    #[test]
    fn no_reduction() {
        let primes = prime_implicants(&[0, 3], 2).unwrap();
        assert_eq!(patterns(&primes), vec!["00", "11"]);
    }

    #[test]
    fn degenerate_terms() {
        assert!(prime_implicants(&[], 3).unwrap().is_empty());

        let all: Vec<usize> = (0..8).collect();
        let primes = prime_implicants(&all, 3).unwrap();
        assert_eq!(patterns(&primes), vec!["---"]);
        assert_eq!(primes[0].covered().len(), 8);
    }

    #[test]
    fn mixed_generations() {
        // a & b | !c over (a, b, c)
        let primes = prime_implicants(&[0, 2, 4, 6, 7], 3).unwrap();
        assert_eq!(patterns(&primes), vec!["11-", "--0"]);

        let primes = prime_implicants(&[0, 1, 2, 5, 6, 7], 3).unwrap();
        assert_eq!(
            patterns(&primes),
            vec!["00-", "0-0", "-01", "-10", "1-1", "11-"]
        );
    }

    #[test]
    fn invalid_terms() {
        assert!(prime_implicants(&[9], 3).is_err());
        assert!(prime_implicants(&[0], 6).is_err());
    }
}
