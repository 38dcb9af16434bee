use std::collections::BTreeSet;

use logimin::func::analysis::Analysis;
use logimin::func::cover::minimal_expression;
use logimin::func::implicant::prime_implicants;
use logimin::func::pattern::Pattern;
use logimin::func::variables::Variables;
use logimin::func::Form;
use proptest::prelude::*;

////////////////////////////////////////////////////////////////////////////////
// Generators

/// Random expressions over the variables a to e, with fully parenthesized operands
fn arb_expression() -> impl Strategy<Value = String> {
    let leaf = prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(String::from);
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("! ( {} )", e)),
            (
                inner.clone(),
                prop::sample::select(vec!["&", "|", "->", "~"]),
                inner
            )
                .prop_map(|(l, op, r)| format!("( {} ) {} ( {} )", l, op, r)),
        ]
    })
}

fn arb_pattern(len: usize) -> impl Strategy<Value = Pattern> {
    prop::collection::vec(prop::sample::select(vec!['0', '1', '-']), len).prop_map(|bits| {
        bits.into_iter()
            .collect::<String>()
            .parse::<Pattern>()
            .unwrap()
    })
}

fn arb_pattern_pair() -> impl Strategy<Value = (Pattern, Pattern)> {
    (1usize..=5).prop_flat_map(|len| (arb_pattern(len), arb_pattern(len)))
}

fn first_variables(n: usize) -> Variables {
    Variables::from_names("abcde".chars().take(n))
}

////////////////////////////////////////////////////////////////////////////////
// Properties

proptest! {
    /// The truth table has one row per assignment, decoded with the first variable as MSB
    #[test]
    fn table_rows_decode_index(expr in arb_expression()) {
        let analysis = Analysis::parse(&expr).unwrap();
        let table = analysis.table();
        let n = analysis.variables().len();
        prop_assert_eq!(table.len(), 1 << n);

        for (i, row) in table.rows().iter().enumerate() {
            for (j, name) in analysis.variables().iter().enumerate() {
                let expected = (i >> (n - 1 - j)) & 1 == 1;
                prop_assert_eq!(row.assignment.get(*name), Some(expected));
            }
        }
    }

    /// Minterms and maxterms partition the row indices
    #[test]
    fn minterms_and_maxterms_partition(expr in arb_expression()) {
        let analysis = Analysis::parse(&expr).unwrap();
        let table = analysis.table();
        let minterms: BTreeSet<usize> = table.minterms().into_iter().collect();
        let maxterms: BTreeSet<usize> = table.maxterms().into_iter().collect();

        prop_assert!(minterms.is_disjoint(&maxterms));
        let all: BTreeSet<usize> = minterms.union(&maxterms).copied().collect();
        prop_assert_eq!(all, (0..table.len()).collect::<BTreeSet<usize>>());
    }

    /// Merging patterns does not depend on their order
    #[test]
    fn combine_is_symmetric((left, right) in arb_pattern_pair()) {
        let lr = left.combine(&right).unwrap();
        let rl = right.combine(&left).unwrap();
        prop_assert_eq!(lr, rl);

        if let Some(merged) = lr {
            prop_assert_eq!(merged.free_count(), left.free_count() + 1);
            for t in left.terms().chain(right.terms()) {
                prop_assert!(merged.covers(t));
            }
        }
    }

    /// Constant functions minimize to constants
    #[test]
    fn degenerate_minimization(n in 1usize..=5) {
        let variables = first_variables(n);
        let all: Vec<usize> = (0..1 << n).collect();
        let primes = prime_implicants(&all, n).unwrap();
        prop_assert_eq!(primes.len(), 1);
        prop_assert_eq!(minimal_expression(&primes, &all, &variables, Form::Sop).unwrap(), "1");
        prop_assert_eq!(minimal_expression(&primes, &all, &variables, Form::Pos).unwrap(), "0");

        let none = prime_implicants(&[], n).unwrap();
        prop_assert!(none.is_empty());
        prop_assert_eq!(minimal_expression(&none, &[], &variables, Form::Sop).unwrap(), "0");
        prop_assert_eq!(minimal_expression(&none, &[], &variables, Form::Pos).unwrap(), "1");
    }

    /// Each prime implicant covers exactly the 2^k terms matching its pattern
    #[test]
    fn prime_implicants_cover_their_pattern(expr in arb_expression()) {
        let analysis = Analysis::parse(&expr).unwrap();

        for form in [Form::Sop, Form::Pos].iter().copied() {
            let terms: BTreeSet<usize> = analysis.terms(form).into_iter().collect();
            for prime in analysis.primes(form).iter() {
                let covered: Vec<usize> = prime.covered().iter().collect();
                let matching: Vec<usize> = prime.pattern().terms().collect();
                prop_assert_eq!(&covered, &matching);
                prop_assert_eq!(prime.covered().len(), 1 << prime.pattern().free_count());
                for t in covered {
                    prop_assert!(terms.contains(&t));
                }
            }
        }
    }

    /// The selected implicants cover exactly the terms of the function
    #[test]
    fn minimal_forms_are_equivalent(expr in arb_expression()) {
        let analysis = Analysis::parse(&expr).unwrap();
        let size = analysis.table().len();

        for form in [Form::Sop, Form::Pos].iter().copied() {
            let terms: BTreeSet<usize> = analysis.terms(form).into_iter().collect();
            let cover = analysis.cover(form);
            prop_assert!(cover.is_complete());

            if terms.is_empty() {
                prop_assert_eq!(cover.expression(), form.empty());
            } else if terms.len() == size {
                prop_assert_eq!(cover.expression(), form.full());
            } else {
                let covered: BTreeSet<usize> = cover
                    .selected()
                    .iter()
                    .flat_map(|i| i.covered().iter())
                    .collect();
                prop_assert_eq!(&covered, &terms);
                for implicant in cover.selected() {
                    for t in implicant.pattern().terms() {
                        prop_assert!(terms.contains(&t));
                    }
                }
            }
        }
    }
}
