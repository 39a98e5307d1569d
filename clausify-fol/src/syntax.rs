/*! Defines an abstract syntax tree (AST) for first-order terms and formulae, together with
literals and clauses. */

pub mod formula;
mod macros;
mod symbol;
mod term;

pub use formula::{
    clause::{Clause, ClauseSet, Literal},
    fof::Fof,
    qff::Qff,
    Atom, Formula, Quantifier,
};
pub use symbol::{Pred, C, F, V};
pub use term::Term;
