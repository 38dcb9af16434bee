//! Text rendering of Karnaugh maps
//!
//! Rows and columns follow the Gray code so that adjacent cells differ by a single variable.
//! Maps with 5 variables are split into two 4-variable maps, one for each value of the
//! first variable.

use itertools::Itertools;
use std::fmt;

use crate::func::variables::Variables;
use crate::func::Form;
use crate::helper::error::{LogiminError, LogiminResult};

pub struct KarnaughMap<'a> {
    values: &'a [bool],
    variables: &'a Variables,
    form: Form,
}

/// Gray code sequence on 1 or 2 bits
fn gray_code(bits: usize) -> &'static [usize] {
    match bits {
        0 => &[0],
        1 => &[0, 1],
        _ => &[0, 1, 3, 2],
    }
}

fn bit_label(value: usize, bits: usize) -> String {
    (0..bits)
        .rev()
        .map(|b| if value & (1 << b) != 0 { '1' } else { '0' })
        .collect()
}

impl<'a> KarnaughMap<'a> {
    /// Prepare a map for a list of truth values (in truth table order).
    ///
    /// Cells are marked when the value matches the target of the selected form:
    /// minterms for a sum of products, maxterms for a product of sums.
    pub fn new(values: &'a [bool], variables: &'a Variables, form: Form) -> LogiminResult<Self> {
        let n = variables.len();
        if !(2..=5).contains(&n) {
            return Err(LogiminError::UnsupportedMapSize(n));
        }
        if values.len() != variables.assignments() {
            return Err(LogiminError::UnsupportedMapSize(n));
        }
        Ok(KarnaughMap {
            values,
            variables,
            form,
        })
    }

    /// Mark of the cell associated to a truth table index, if it is part of the map
    pub fn cell(&self, index: usize) -> Option<bool> {
        self.values.get(index).map(|v| *v == self.form.target())
    }

    fn names(&self, from: usize, to: usize) -> String {
        self.variables.iter().skip(from).take(to - from).collect()
    }

    /// Render a sub-map where the variables before `first` are fixed by `offset`
    fn fmt_map(&self, f: &mut fmt::Formatter, first: usize, offset: usize) -> fmt::Result {
        let n = self.variables.len() - first;
        let row_bits = n / 2;
        let col_bits = n - row_bits;

        let row_title = format!(
            "{}\\{}",
            self.names(first, first + row_bits),
            self.names(first + row_bits, self.variables.len())
        );
        let col_labels: Vec<String> = gray_code(col_bits)
            .iter()
            .map(|c| bit_label(*c, col_bits))
            .collect();
        let width = row_title.len();

        writeln!(f, "{:<w$} | {}", row_title, col_labels.iter().join(" | "), w = width)?;
        writeln!(
            f,
            "{}-+-{}",
            "-".repeat(width),
            col_labels.iter().map(|l| "-".repeat(l.len())).join("-+-")
        )?;

        for r in gray_code(row_bits) {
            let cells = gray_code(col_bits)
                .iter()
                .map(|c| {
                    let idx = offset + (r << col_bits) + c;
                    let mark = if self.cell(idx) == Some(true) { "1" } else { "0" };
                    format!("{:<w$}", mark, w = col_bits)
                })
                .join(" | ");
            writeln!(f, "{:<w$} | {}", bit_label(*r, row_bits), cells, w = width)?;
        }
        Ok(())
    }
}

impl fmt::Display for KarnaughMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.variables.len();
        if n < 5 {
            writeln!(f, "Karnaugh map for {} variables ({})", n, self.form)?;
            return self.fmt_map(f, 0, 0);
        }

        let first = self.names(0, 1);
        for (value, offset) in [(0, 0), (1, 16)].iter() {
            writeln!(
                f,
                "Karnaugh map for {} variables, {}={} ({})",
                n, first, value, self.form
            )?;
            self.fmt_map(f, 1, *offset)?;
        }
        Ok(())
    }
}
