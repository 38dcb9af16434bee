//! Truth tables and canonical normal forms
//!
//! Row `i` of a truth table assigns to the `j`-th variable the value of bit `(n-1-j)`
//! of `i`: the first variable is the most significant bit. This order is shared by
//! canonical forms, implicant patterns and Karnaugh maps.

use itertools::Itertools;
use log::debug;
use std::collections::BTreeMap;
use std::fmt;

use crate::func::expr::Expression;
use crate::func::variables::Variables;
use crate::func::{Form, MAX_VARIABLES};
use crate::helper::error::{LogiminError, LogiminResult};

/// Boolean values associated to variable names
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Assignment {
    values: BTreeMap<char, bool>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Row {
    pub assignment: Assignment,
    pub result: bool,
}

#[derive(Clone, Debug)]
pub struct TruthTable {
    variables: Variables,
    rows: Vec<Row>,
}

impl Assignment {
    pub fn from_values<I: IntoIterator<Item = (char, bool)>>(values: I) -> Self {
        Assignment {
            values: values.into_iter().collect(),
        }
    }

    /// Decode a row index into the corresponding assignment
    pub fn from_index(variables: &Variables, index: usize) -> Self {
        let n = variables.len();
        Assignment::from_values(
            variables
                .iter()
                .enumerate()
                .map(|(j, v)| (*v, index & (1 << (n - 1 - j)) != 0)),
        )
    }

    pub fn get(&self, name: char) -> Option<bool> {
        self.values.get(&name).copied()
    }

    /// Iterate over the values in lexicographic order of the variables
    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

impl TruthTable {
    /// Build the truth table of an expression over its own variables
    pub fn build(expr: &Expression) -> LogiminResult<TruthTable> {
        TruthTable::build_with(expr, expr.variables())
    }

    /// Build the truth table of an expression over a given list of variables.
    ///
    /// The list may contain extra variables, but must contain all variables of the expression.
    pub fn build_with(expr: &Expression, variables: &Variables) -> LogiminResult<TruthTable> {
        if variables.len() > MAX_VARIABLES {
            return Err(LogiminError::TooManyVariables(variables.len()));
        }

        let rows = (0..variables.assignments())
            .map(|idx| {
                let assignment = Assignment::from_index(variables, idx);
                let result = expr.eval(&assignment)?;
                Ok(Row { assignment, result })
            })
            .collect::<LogiminResult<Vec<Row>>>()?;

        debug!("Truth table of \"{}\": {} rows", expr, rows.len());
        Ok(TruthTable {
            variables: variables.clone(),
            rows,
        })
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The results of all rows, in index order
    pub fn values(&self) -> Vec<bool> {
        self.rows.iter().map(|r| r.result).collect()
    }

    /// Indices of the rows used as terms of the selected form
    pub fn terms(&self, form: Form) -> Vec<usize> {
        let target = form.target();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.result == target)
            .map(|(i, _)| i)
            .collect()
    }

    /// Numerical form of the PDNF
    pub fn minterms(&self) -> Vec<usize> {
        self.terms(Form::Sop)
    }

    /// Numerical form of the PCNF
    pub fn maxterms(&self) -> Vec<usize> {
        self.terms(Form::Pos)
    }

    /// Perfect disjunctive normal form: one full conjunction per true row
    pub fn pdnf(&self) -> String {
        self.canonical(Form::Sop)
    }

    /// Perfect conjunctive normal form: one full disjunction per false row
    pub fn pcnf(&self) -> String {
        self.canonical(Form::Pos)
    }

    fn canonical(&self, form: Form) -> String {
        let (inner, outer) = match form {
            Form::Sop => (" ∧ ", " ∨ "),
            Form::Pos => (" ∨ ", " ∧ "),
        };
        let target = form.target();
        let terms = self
            .rows
            .iter()
            .filter(|r| r.result == target)
            .map(|r| {
                // A literal is negated when its value differs from the row result
                let literals = r.assignment.iter().map(|(name, value)| {
                    if value == target {
                        format!("{}", name)
                    } else {
                        format!("¬{}", name)
                    }
                });
                format!("({})", literals.format(inner))
            })
            .join(outer);

        if terms.is_empty() {
            String::from(form.empty())
        } else {
            terms
        }
    }

    /// The results read as a binary number, row 0 being the most significant bit.
    ///
    /// Returns both the number and its binary representation.
    pub fn index_form(&self) -> (u32, String) {
        let binary: String = self
            .rows
            .iter()
            .map(|r| if r.result { '1' } else { '0' })
            .collect();
        let index = self
            .rows
            .iter()
            .fold(0u32, |acc, r| (acc << 1) | (r.result as u32));
        (index, binary)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} | F", self.variables)?;
        for r in self.rows.iter() {
            let values = r
                .assignment
                .iter()
                .map(|(_, v)| if v { "1" } else { "0" })
                .join(" ");
            writeln!(f, "{} | {}", values, if r.result { "1" } else { "0" })?;
        }
        Ok(())
    }
}
