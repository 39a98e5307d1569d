/*! Implements the transformations that take a first-order sentence to a set of clauses.

Each transformation produces a dedicated formula type that captures its result:
[`ToImplicationFree`] yields an implication-free [`Fof`], [`ToNnf`] an [`Nnf`],
[`Nnf::standardize`] an [`Nnf`] with distinct bound variables, [`ToPnf`] a [`Pnf`],
[`ToSnf`] an [`Snf`], [`ToQff`] the quantifier-free matrix [`Qff`] and finally
[`ToClauseSet`] a [`ClauseSet`].

[`Fof`]: crate::syntax::Fof
[`Qff`]: crate::syntax::Qff
[`ClauseSet`]: crate::syntax::ClauseSet
*/
mod cnf;
mod implication;
mod nnf;
mod pnf;
mod snf;
mod standardize;
mod substitution;
mod symbol_table;
mod universal;

pub use cnf::ToClauseSet;
pub use implication::ToImplicationFree;
pub use nnf::{Nnf, ToNnf};
pub use pnf::{Pnf, ToPnf};
pub use snf::{Snf, ToSnf};
pub use substitution::{Substitution, VariableRenaming};
pub use symbol_table::SymbolTable;
pub use universal::ToQff;

use crate::syntax::{Fof, V};
use thiserror::Error;

/// Is the type of errors arising when a formula violates the precondition of a
/// transformation.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when an implication is found where implications are already eliminated.
    #[error("formula `{}` contains an implication", .formula.to_string())]
    Implication { formula: Fof },

    /// Is returned when a negation is applied to a formula that is not atomic.
    #[error("formula `{}` negates a non-atomic formula", .formula.to_string())]
    NotNnf { formula: Fof },

    /// Is returned when a quantifier is found where the formula must be quantifier-free.
    #[error("formula `{}` is quantified", .formula.to_string())]
    Quantifier { formula: Fof },

    /// Is returned when the bound variables of a formula are not standardized apart.
    #[error("variable `{}` is bound more than once or also occurs free in `{}`", .variable.to_string(), .formula.to_string())]
    NotStandardized { formula: Fof, variable: V },
}
