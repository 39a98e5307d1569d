/*! Defines the quantifier-free formulae of type [`Qff`]. */
use super::{clause::Literal, And, Atom, Formula, Or};
use crate::{
    syntax::{Fof, Term, V},
    transform::Error,
};
use std::{convert::TryFrom, fmt};

/// Is the type of quantifier-free formulae in negation normal form, the matrix of formula
/// types such as [`Pnf`] and [`Snf`].
///
/// [`Pnf`]: crate::transform::Pnf
/// [`Snf`]: crate::transform::Snf
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Qff {
    /// Is a literal, wrapping a [`Literal`].
    Literal(Literal),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And<Qff>>),

    /// Is a disjunction of two formulae, wrapping an [`Or`].
    Or(Box<Or<Qff>>),
}

impl From<Atom> for Qff {
    fn from(value: Atom) -> Self {
        Self::Literal(value.into())
    }
}

impl From<Literal> for Qff {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<And<Qff>> for Qff {
    fn from(value: And<Qff>) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or<Qff>> for Qff {
    fn from(value: Or<Qff>) -> Self {
        Self::Or(Box::new(value))
    }
}

impl Qff {
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

    /// Returns the top-level conjuncts of the receiver, from left to right.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::{Fof, Qff};
    /// use std::convert::TryFrom;
    ///
    /// let formula: Fof = "(P(x) and (Q(x) or R(y))) and not S(y)".parse().unwrap();
    /// let qff = Qff::try_from(formula).unwrap();
    /// let conjuncts: Vec<String> = qff.conjuncts().iter().map(|c| c.to_string()).collect();
    ///
    /// assert_eq!(vec!["P(x)", "Q(x) ∨ R(y)", "¬S(y)"], conjuncts);
    /// ```
    pub fn conjuncts(&self) -> Vec<&Qff> {
        match self {
            Self::And(this) => {
                let mut result = this.left.conjuncts();
                result.extend(this.right.conjuncts());
                result
            }
            _ => vec![self],
        }
    }
}

impl Formula for Qff {
    fn free_vars(&self) -> Vec<&V> {
        match self {
            Self::Literal(this) => this.free_vars(),
            Self::And(this) => this.free_vars(),
            Self::Or(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Literal(this) => this.transform_term(f).into(),
            Self::And(this) => this.transform_term(f).into(),
            Self::Or(this) => this.transform_term(f).into(),
        }
    }
}

impl From<Qff> for Fof {
    fn from(value: Qff) -> Self {
        match value {
            Qff::Literal(this) => this.into(),
            Qff::And(this) => Fof::from(this.left).and(this.right.into()),
            Qff::Or(this) => Fof::from(this.left).or(this.right.into()),
        }
    }
}

impl From<&Qff> for Fof {
    fn from(value: &Qff) -> Self {
        value.clone().into()
    }
}

impl TryFrom<Fof> for Qff {
    type Error = Error;

    fn try_from(value: Fof) -> Result<Self, Self::Error> {
        match value {
            Fof::Atom(this) => Ok(this.into()),
            Fof::Not(this) => match this.formula {
                Fof::Atom(atom) => Ok(Literal::Neg(atom).into()),
                formula => Err(Error::NotNnf {
                    formula: Fof::not(formula),
                }),
            },
            Fof::And(this) => Ok(Qff::try_from(this.left)?.and(Qff::try_from(this.right)?)),
            Fof::Or(this) => Ok(Qff::try_from(this.left)?.or(Qff::try_from(this.right)?)),
            Fof::Implies(_) => Err(Error::Implication { formula: value }),
            Fof::Exists(_) | Fof::Forall(_) => Err(Error::Quantifier { formula: value }),
        }
    }
}

impl fmt::Display for Qff {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Fof::from(self).fmt(f)
    }
}

impl fmt::Debug for Qff {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&Fof::from(self), f)
    }
}
