use log::info;

use crate::func::cover::{Cover, CoverageTable};
use crate::func::expr::Expression;
use crate::func::implicant::{self, Implicants};
use crate::func::kmap::KarnaughMap;
use crate::func::table::TruthTable;
use crate::func::variables::Variables;
use crate::func::{Form, MAX_VARIABLES};
use crate::helper::error::{LogiminError, LogiminResult};

/// Full analysis of an expression: truth table, canonical forms and minimal forms
#[derive(Clone, Debug)]
pub struct Analysis {
    expr: Expression,
    table: TruthTable,
    sop_primes: Implicants,
    pos_primes: Implicants,
    sop_cover: Cover,
    pos_cover: Cover,
}

impl Analysis {
    pub fn new(expr: Expression) -> LogiminResult<Analysis> {
        let n = expr.variables().len();
        if n == 0 {
            return Err(LogiminError::MissingExpression());
        }
        if n > MAX_VARIABLES {
            return Err(LogiminError::TooManyVariables(n));
        }

        let table = TruthTable::build(&expr)?;
        let minterms = table.minterms();
        let maxterms = table.maxterms();
        let variables = table.variables();
        let sop_primes = implicant::prime_implicants(&minterms, n)?;
        let pos_primes = implicant::prime_implicants(&maxterms, n)?;
        let sop_cover = Cover::select(&sop_primes, &minterms, variables, Form::Sop)?;
        let pos_cover = Cover::select(&pos_primes, &maxterms, variables, Form::Pos)?;
        info!(
            "\"{}\": {} minterms, {} prime implicants, {} prime implicates",
            expr,
            minterms.len(),
            sop_primes.len(),
            pos_primes.len()
        );

        Ok(Analysis {
            expr,
            table,
            sop_primes,
            pos_primes,
            sop_cover,
            pos_cover,
        })
    }

    pub fn parse(source: &str) -> LogiminResult<Analysis> {
        Analysis::new(Expression::parse(source)?)
    }

    pub fn expression(&self) -> &Expression {
        &self.expr
    }

    pub fn variables(&self) -> &Variables {
        self.table.variables()
    }

    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    pub fn terms(&self, form: Form) -> Vec<usize> {
        self.table.terms(form)
    }

    pub fn primes(&self, form: Form) -> &Implicants {
        match form {
            Form::Sop => &self.sop_primes,
            Form::Pos => &self.pos_primes,
        }
    }

    pub fn cover(&self, form: Form) -> &Cover {
        match form {
            Form::Sop => &self.sop_cover,
            Form::Pos => &self.pos_cover,
        }
    }

    pub fn minimal(&self, form: Form) -> &str {
        self.cover(form).expression()
    }

    pub fn coverage_table(&self, form: Form) -> LogiminResult<CoverageTable> {
        CoverageTable::new(self.primes(form), &self.terms(form), self.variables(), form)
    }

    pub fn karnaugh_map<'a>(
        &'a self,
        values: &'a [bool],
        form: Form,
    ) -> LogiminResult<KarnaughMap<'a>> {
        KarnaughMap::new(values, self.variables(), form)
    }
}
