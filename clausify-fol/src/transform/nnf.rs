/*! Defines formulae in Negation Normal Form (NNF) and implements an algorithm for
transforming an implication-free [`Fof`] to an [`Nnf`].

[`Fof`]: crate::syntax::Fof
*/
use super::Error;
use crate::syntax::{
    formula::{clause::Literal, *},
    Fof, Term, V,
};
use std::{convert::TryFrom, fmt};

/// Represents a formula in Negation Normal Form (NNF).
///
/// **Hint**: An NNF is a formula where negation is applied only to its atomic sub-formulae.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Nnf {
    /// Is a literal, wrapping a [`Literal`].
    Literal(Literal),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And<Nnf>>),

    /// Is a disjunction of two formulae, wrapping an [`Or`].
    Or(Box<Or<Nnf>>),

    /// Is an existentially quantified NNF, wrapping an [`Exists`].
    Exists(Box<Exists<Nnf>>),

    /// Is a universally quantified NNF, wrapping a [`Forall`].
    Forall(Box<Forall<Nnf>>),
}

impl From<Atom> for Nnf {
    fn from(value: Atom) -> Self {
        Self::Literal(value.into())
    }
}

impl From<Literal> for Nnf {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<And<Nnf>> for Nnf {
    fn from(value: And<Nnf>) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or<Nnf>> for Nnf {
    fn from(value: Or<Nnf>) -> Self {
        Self::Or(Box::new(value))
    }
}

impl From<Exists<Nnf>> for Nnf {
    fn from(value: Exists<Nnf>) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl From<Forall<Nnf>> for Nnf {
    fn from(value: Forall<Nnf>) -> Self {
        Self::Forall(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`Nnf`].
pub trait ToNnf: Formula {
    /// Transforms `self` to a Negation Normal Form (NNF) by pushing negations inward.
    ///
    /// **Note**: the receiver must be implication-free; an implication anywhere in the
    /// receiver is reported as [`Error::Implication`].
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::Fof;
    /// use clausify_fol::transform::ToNnf;
    ///
    /// let formula: Fof = "not (exists x (P(x) and not Q(x)))".parse().unwrap();
    /// let nnf = formula.nnf().unwrap();
    ///
    /// assert_eq!("∀ x. ((¬P(x)) ∨ Q(x))", nnf.to_string());
    /// ```
    fn nnf(&self) -> Result<Nnf, Error>;
}

impl ToNnf for Fof {
    fn nnf(&self) -> Result<Nnf, Error> {
        nnf(self)
    }
}

impl Nnf {
    #[inline(always)]
    fn neg(atom: Atom) -> Self {
        Literal::Neg(atom).into()
    }

    #[inline(always)]
    pub(crate) fn and(self, formula: Self) -> Self {
        And {
            left: self,
            right: formula,
        }
        .into()
    }

    #[inline(always)]
    pub(crate) fn or(self, formula: Self) -> Self {
        Or {
            left: self,
            right: formula,
        }
        .into()
    }

    #[inline(always)]
    pub(crate) fn exists(variable: V, formula: Self) -> Self {
        Exists { variable, formula }.into()
    }

    #[inline(always)]
    pub(crate) fn forall(variable: V, formula: Self) -> Self {
        Forall { variable, formula }.into()
    }
}

impl Formula for Nnf {
    fn free_vars(&self) -> Vec<&V> {
        match self {
            Self::Literal(this) => this.free_vars(),
            Self::And(this) => this.free_vars(),
            Self::Or(this) => this.free_vars(),
            Self::Exists(this) => this.free_vars(),
            Self::Forall(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Literal(this) => this.transform_term(f).into(),
            Self::And(this) => this.transform_term(f).into(),
            Self::Or(this) => this.transform_term(f).into(),
            Self::Exists(this) => this.transform_term(f).into(),
            Self::Forall(this) => this.transform_term(f).into(),
        }
    }
}

impl From<Nnf> for Fof {
    fn from(value: Nnf) -> Self {
        match value {
            Nnf::Literal(this) => this.into(),
            Nnf::And(this) => Self::from(this.left).and(this.right.into()),
            Nnf::Or(this) => Self::from(this.left).or(this.right.into()),
            Nnf::Exists(this) => Self::exists(this.variable, this.formula.into()),
            Nnf::Forall(this) => Self::forall(this.variable, this.formula.into()),
        }
    }
}

impl From<&Nnf> for Fof {
    fn from(value: &Nnf) -> Self {
        value.clone().into()
    }
}

/// Accepts formulae that are already in NNF, without rewriting them.
impl TryFrom<Fof> for Nnf {
    type Error = Error;

    fn try_from(value: Fof) -> Result<Self, Self::Error> {
        match value {
            Fof::Atom(this) => Ok(this.into()),
            Fof::Not(this) => match this.formula {
                Fof::Atom(atom) => Ok(Nnf::neg(atom)),
                formula => Err(Error::NotNnf {
                    formula: Fof::not(formula),
                }),
            },
            Fof::And(this) => Ok(Nnf::try_from(this.left)?.and(Nnf::try_from(this.right)?)),
            Fof::Or(this) => Ok(Nnf::try_from(this.left)?.or(Nnf::try_from(this.right)?)),
            Fof::Implies(_) => Err(Error::Implication { formula: value }),
            Fof::Exists(this) => Ok(Nnf::exists(this.variable, Nnf::try_from(this.formula)?)),
            Fof::Forall(this) => Ok(Nnf::forall(this.variable, Nnf::try_from(this.formula)?)),
        }
    }
}

impl fmt::Display for Nnf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Fof::from(self).fmt(f)
    }
}

impl fmt::Debug for Nnf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&Fof::from(self), f)
    }
}

// Returns the NNF of the negation of `formula`.
fn push_not(formula: &Fof) -> Result<Nnf, Error> {
    match formula {
        Fof::Atom(this) => Ok(Nnf::neg(this.clone())),
        Fof::Not(this) => nnf(&this.formula),
        Fof::And(this) => Ok(push_not(&this.left)?.or(push_not(&this.right)?)),
        Fof::Or(this) => Ok(push_not(&this.left)?.and(push_not(&this.right)?)),
        Fof::Implies(_) => Err(Error::Implication {
            formula: formula.clone(),
        }),
        Fof::Exists(this) => Ok(Nnf::forall(
            this.variable.clone(),
            push_not(&this.formula)?,
        )),
        Fof::Forall(this) => Ok(Nnf::exists(
            this.variable.clone(),
            push_not(&this.formula)?,
        )),
    }
}

fn nnf(formula: &Fof) -> Result<Nnf, Error> {
    match formula {
        Fof::Atom(this) => Ok(this.clone().into()),
        Fof::Not(this) => push_not(&this.formula),
        Fof::And(this) => Ok(nnf(&this.left)?.and(nnf(&this.right)?)),
        Fof::Or(this) => Ok(nnf(&this.left)?.or(nnf(&this.right)?)),
        Fof::Implies(_) => Err(Error::Implication {
            formula: formula.clone(),
        }),
        Fof::Exists(this) => Ok(Nnf::exists(this.variable.clone(), nnf(&this.formula)?)),
        Fof::Forall(this) => Ok(Nnf::forall(this.variable.clone(), nnf(&this.formula)?)),
    }
}
