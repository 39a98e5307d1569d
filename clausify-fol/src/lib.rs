/*! Provides a parser for first-order sentences and the transformations that normalize a
sentence into a set of clauses: implication elimination, negation normal form, variable
standardization, prenex normal form, Skolemization, universal elimination and clause
splitting. */
#[macro_use]
extern crate lalrpop_util;
#[macro_use]
extern crate tracing;

pub mod parser;
pub mod pipeline;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
pub mod trace;
pub mod transform;
