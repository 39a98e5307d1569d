/*! Introduces an abstraction for formulae and the connectives that are the ingredients for
constructing formulae. */
pub mod clause;
pub mod fof;
pub mod qff;

use super::{Pred, Term, V};
use crate::transform::{Substitution, VariableRenaming};
use itertools::Itertools;
use std::fmt;

/// Is the trait of formulae, including first-order formulae and their normal forms.
pub trait Formula {
    /// Returns a list of free variable symbols in the receiver formula.
    ///
    /// **Note**: In the list of free variables, each variable symbol appears only once
    /// even if it is present at multiple positions of the receiver formula.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::{V, Fof};
    /// use clausify_fol::syntax::Formula;
    ///
    /// let x = V::from("x");
    /// let y = V::from("y");
    ///
    /// let formula: Fof = "P(x) and Q(x, y)".parse().unwrap();
    /// assert_eq!(vec![&x, &y], formula.free_vars());
    ///
    /// let formula: Fof = "forall x P(x, y)".parse().unwrap();
    /// assert_eq!(vec![&y], formula.free_vars());
    /// ```
    fn free_vars(&self) -> Vec<&V>;

    /// Applies a transformation function `f` on the terms of the receiver.
    ///
    /// **Note**: `f` is also applied on the occurrences of bound variables.
    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self;

    /// Applies a [`VariableRenaming`] on the variable sub-terms of the receiver.
    fn rename_var(&self, renaming: &impl VariableRenaming) -> Self
    where
        Self: Sized,
    {
        self.transform_term(&|t: &Term| t.rename_var(renaming))
    }

    /// Applies a [`Substitution`] on the variable sub-terms of the receiver.
    fn substitute(&self, sub: &impl Substitution) -> Self
    where
        Self: Sized,
    {
        self.transform_term(&|t: &Term| t.substitute(sub))
    }
}

/// Represents an atomic formula, obtained by applying a predicate on a list of terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    pub(crate) predicate: Pred,
    pub(crate) terms: Vec<Term>,
}

impl Atom {
    /// Creates a new atom.
    pub fn new(predicate: Pred, terms: Vec<Term>) -> Self {
        Self { predicate, terms }
    }

    /// Returns the predicate of the receiver.
    #[inline(always)]
    pub fn predicate(&self) -> &Pred {
        &self.predicate
    }

    /// Returns the terms of the receiver.
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl Formula for Atom {
    fn free_vars(&self) -> Vec<&V> {
        self.terms
            .iter()
            .flat_map(|t| t.free_vars())
            .unique()
            .collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Self {
            predicate: self.predicate.clone(),
            terms: self.terms.iter().map(f).collect(),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ts = self.terms.iter().map(|t| t.to_string()).collect_vec();
        write!(f, "{}({})", self.predicate, ts.join(", "))
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ts = self.terms.iter().map(|t| format!("{:?}", t)).collect_vec();
        write!(f, "{}({})", self.predicate, ts.join(", "))
    }
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Not<F: Formula> {
    pub(crate) formula: F,
}

impl<F: Formula> Not<F> {
    /// Wraps `formula` in a new instance of [`Not`].
    pub fn new(formula: F) -> Self {
        Self { formula }
    }

    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Not<F> {
    fn free_vars(&self) -> Vec<&V> {
        self.formula.free_vars()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Not {
            formula: self.formula.transform_term(f),
        }
    }
}

/// Represents the conjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct And<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> And<F> {
    /// Returns the conjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

impl<F: Formula> Formula for And<F> {
    fn free_vars(&self) -> Vec<&V> {
        let mut vs = self.left.free_vars();
        vs.extend(self.right.free_vars());
        vs.into_iter().unique().collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        And {
            left: self.left.transform_term(f),
            right: self.right.transform_term(f),
        }
    }
}

/// Represents the disjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Or<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> Or<F> {
    /// Returns the disjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

impl<F: Formula> Formula for Or<F> {
    fn free_vars(&self) -> Vec<&V> {
        let mut vs = self.left.free_vars();
        vs.extend(self.right.free_vars());
        vs.into_iter().unique().collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Or {
            left: self.left.transform_term(f),
            right: self.right.transform_term(f),
        }
    }
}

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implies<F: Formula> {
    pub(crate) premise: F,
    pub(crate) consequence: F,
}

impl<F: Formula> Implies<F> {
    /// Returns an implication with a `premise` and a `consequence`.
    pub fn new(premise: F, consequence: F) -> Self {
        Self {
            premise,
            consequence,
        }
    }

    /// Returns the premise of the receiver.
    #[inline(always)]
    pub fn premise(&self) -> &F {
        &self.premise
    }

    /// Returns the consequence of the receiver.
    #[inline(always)]
    pub fn consequence(&self) -> &F {
        &self.consequence
    }
}

impl<F: Formula> Formula for Implies<F> {
    fn free_vars(&self) -> Vec<&V> {
        let mut vs = self.premise.free_vars();
        vs.extend(self.consequence.free_vars());
        vs.into_iter().unique().collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Implies {
            premise: self.premise.transform_term(f),
            consequence: self.consequence.transform_term(f),
        }
    }
}

/// Represents an existentially quantified formula, binding a single variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exists<F: Formula> {
    pub(crate) variable: V,
    pub(crate) formula: F,
}

impl<F: Formula> Exists<F> {
    /// Returns an existentially quantified formula with bound `variable` and `formula`.
    pub fn new(variable: V, formula: F) -> Self {
        Self { variable, formula }
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &V {
        &self.variable
    }

    /// Returns the formula of the existentially quantified receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Exists<F> {
    fn free_vars(&self) -> Vec<&V> {
        self.formula
            .free_vars()
            .into_iter()
            .filter(|v| *v != &self.variable)
            .collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Exists {
            variable: self.variable.clone(),
            formula: self.formula.transform_term(f),
        }
    }
}

/// Represents a universally quantified formula, binding a single variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Forall<F: Formula> {
    pub(crate) variable: V,
    pub(crate) formula: F,
}

impl<F: Formula> Forall<F> {
    /// Returns a universally quantified formula with bound `variable` and `formula`.
    pub fn new(variable: V, formula: F) -> Self {
        Self { variable, formula }
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &V {
        &self.variable
    }

    /// Returns the formula of the universally quantified receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Forall<F> {
    fn free_vars(&self) -> Vec<&V> {
        self.formula
            .free_vars()
            .into_iter()
            .filter(|v| *v != &self.variable)
            .collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        Forall {
            variable: self.variable.clone(),
            formula: self.formula.transform_term(f),
        }
    }
}

/// Is a quantifier together with the variable that it binds; the elements of the prefix
/// of a [`Pnf`].
///
/// [`Pnf`]: crate::transform::Pnf
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quantifier {
    /// Is a universal quantifier over a variable.
    Forall(V),

    /// Is an existential quantifier over a variable.
    Exists(V),
}

impl Quantifier {
    /// Returns the variable bound by the receiver.
    pub fn variable(&self) -> &V {
        match self {
            Self::Forall(v) | Self::Exists(v) => v,
        }
    }

    /// Returns true if the receiver is universal.
    pub fn is_universal(&self) -> bool {
        matches!(self, Self::Forall(_))
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Forall(v) => write!(f, "∀ {}", v),
            Self::Exists(v) => write!(f, "∃ {}", v),
        }
    }
}

impl fmt::Debug for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Forall(v) => write!(f, "forall {}", v),
            Self::Exists(v) => write!(f, "exists {}", v),
        }
    }
}
