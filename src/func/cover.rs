//! Select a subset of prime implicants covering all terms of a function
//!
//! Essential implicants (the only ones covering some term) are selected first.
//! Remaining terms are then covered greedily: the implicant covering the largest number
//! of uncovered terms wins, ties going to the first one in the list of prime implicants.

use bit_set::BitSet;
use itertools::Itertools;
use log::{debug, warn};
use std::fmt;

use crate::func::implicant::{Implicant, Implicants};
use crate::func::variables::Variables;
use crate::func::Form;
use crate::helper::error::LogiminResult;

/// Implicants selected to cover a list of terms
#[derive(Clone, Debug)]
pub struct Cover {
    expression: String,
    selected: Vec<Implicant>,
    uncovered: BitSet,
}

/// Display the terms covered by each prime implicant
pub struct CoverageTable {
    rows: Vec<(String, String)>,
}

impl Cover {
    fn constant(value: &str) -> Cover {
        Cover {
            expression: String::from(value),
            selected: vec![],
            uncovered: BitSet::new(),
        }
    }

    /// Select prime implicants covering the terms, and render them in the selected form.
    ///
    /// Terms outside of the truth table are never covered.
    pub fn select(
        primes: &Implicants,
        terms: &[usize],
        variables: &Variables,
        form: Form,
    ) -> LogiminResult<Cover> {
        let size = variables.assignments();
        let targets: BitSet = terms.iter().copied().collect();
        if targets.is_empty() {
            return Ok(Cover::constant(form.empty()));
        }
        if targets.len() == size && targets.iter().all(|t| t < size) {
            return Ok(Cover::constant(form.full()));
        }

        // Essential implicants
        let mut selected: Vec<Implicant> = vec![];
        let mut chosen = BitSet::with_capacity(primes.len());
        for t in targets.iter() {
            let mut covering = primes.iter().positions(|p| p.covers(t));
            if let (Some(idx), None) = (covering.next(), covering.next()) {
                if chosen.insert(idx) {
                    let mut essential = primes[idx].clone();
                    essential.set_essential(true);
                    debug!("Essential implicant for term {}: {}", t, essential);
                    selected.push(essential);
                }
            }
        }

        let mut uncovered = targets;
        for s in selected.iter() {
            uncovered.difference_with(s.covered());
        }

        // Greedy completion
        while !uncovered.is_empty() {
            let best = primes
                .iter()
                .enumerate()
                .filter(|(idx, _)| !chosen.contains(*idx))
                .map(|(idx, p)| (idx, p.covered().intersection(&uncovered).count()))
                .filter(|(_, count)| *count > 0)
                .fold(None, |best: Option<(usize, usize)>, (idx, count)| match best {
                    Some((_, c)) if c >= count => best,
                    _ => Some((idx, count)),
                });

            match best {
                None => break,
                Some((idx, count)) => {
                    debug!("Selected implicant {} covering {} more terms", primes[idx], count);
                    chosen.insert(idx);
                    uncovered.difference_with(primes[idx].covered());
                    selected.push(primes[idx].clone());
                }
            }
        }

        if !uncovered.is_empty() {
            warn!(
                "Incomplete cover, remaining terms: {}",
                uncovered.iter().join(", ")
            );
        }

        let expression = if selected.is_empty() {
            String::from(form.empty())
        } else {
            selected
                .iter()
                .map(|i| i.to_expression(variables, form))
                .collect::<LogiminResult<Vec<String>>>()?
                .join(form.term_separator())
        };

        Ok(Cover {
            expression,
            selected,
            uncovered,
        })
    }

    pub fn selected(&self) -> &[Implicant] {
        &self.selected
    }

    /// Terms that no prime implicant could cover
    pub fn uncovered(&self) -> &BitSet {
        &self.uncovered
    }

    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// The selected implicants as a minimal sum of products or product of sums
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Compute the minimal expression of a list of terms from its prime implicants
pub fn minimal_expression(
    primes: &Implicants,
    terms: &[usize],
    variables: &Variables,
    form: Form,
) -> LogiminResult<String> {
    Ok(String::from(
        Cover::select(primes, terms, variables, form)?.expression(),
    ))
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl CoverageTable {
    pub fn new(
        primes: &Implicants,
        terms: &[usize],
        variables: &Variables,
        form: Form,
    ) -> LogiminResult<Self> {
        let rows = primes
            .iter()
            .map(|p| {
                let covered = terms.iter().filter(|t| p.covers(**t)).join(", ");
                Ok((p.to_expression(variables, form)?, covered))
            })
            .collect::<LogiminResult<Vec<(String, String)>>>()?;
        Ok(CoverageTable { rows })
    }
}

impl fmt::Display for CoverageTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No prime implicants.");
        }

        writeln!(f, "{:<17} | Covered terms", "Prime implicant")?;
        writeln!(f, "------------------|--------------")?;
        for (implicant, covered) in self.rows.iter() {
            writeln!(f, "{:<17} | {}", implicant, covered)?;
        }
        Ok(())
    }
}
