/*! Provides an interface and the implementation for term substitution and variable renaming.*/

use crate::syntax::{Term, V};
use std::collections::HashMap;

/// Is the trait of types that map variables to terms.
pub trait Substitution {
    /// Maps `v` to a [`Term`].
    ///
    /// [`Term`]: crate::syntax::Term
    fn apply(&self, v: &V) -> Term;
}

/// Any function from [`V`] to [`Term`] is a substitution.
///
/// [`V`]: crate::syntax::V
/// [`Term`]: crate::syntax::Term
impl<F> Substitution for F
where
    F: Fn(&V) -> Term,
{
    fn apply(&self, v: &V) -> Term {
        self(v)
    }
}

/// A map from [`V`] to [`Term`] is a substitution that leaves unmapped variables intact.
///
/// [`V`]: crate::syntax::V
/// [`Term`]: crate::syntax::Term
impl Substitution for HashMap<&V, Term> {
    fn apply(&self, v: &V) -> Term {
        self.get(v).cloned().unwrap_or_else(|| v.clone().into())
    }
}

/// Is the trait of types that map variables to variables.
///
/// **Note**: A variable renaming may be regarded as a special case of [`Substitution`].
pub trait VariableRenaming {
    /// Maps `v` to another [`V`].
    ///
    /// [`V`]: crate::syntax::V
    fn apply(&self, v: &V) -> V;
}

/// Any function from [`V`] to [`V`] is a variable renaming.
///
/// [`V`]: crate::syntax::V
impl<F> VariableRenaming for F
where
    F: Fn(&V) -> V,
{
    fn apply(&self, v: &V) -> V {
        self(v)
    }
}

/// A map from [`V`] references to [`V`] is a variable renaming.
///
/// [`V`]: crate::syntax::V
impl VariableRenaming for HashMap<&V, V> {
    fn apply(&self, v: &V) -> V {
        self.get(v).cloned().unwrap_or_else(|| v.clone())
    }
}

// the renaming environment of the standardizer owns its keys
impl VariableRenaming for HashMap<V, V> {
    fn apply(&self, v: &V) -> V {
        self.get(v).cloned().unwrap_or_else(|| v.clone())
    }
}
