//! The `logimin` crate parses small propositional logic expressions, builds their truth table
//! and canonical normal forms, and minimizes them into sums of products or products of sums
//! using prime implicants (Quine-McCluskey).
//!
//! Expressions use whitespace-separated tokens over the variables `a` to `e`,
//! with the operators `!` (not), `&` (and), `|` (or), `->` (implies) and `~` (equivalence).

extern crate thiserror;

pub mod command;
pub mod func;
pub mod helper;
