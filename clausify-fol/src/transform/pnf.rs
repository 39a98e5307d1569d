/*! Defines formulae in Prenex Normal Form (PNF) and implements an algorithm for converting
a standardized [`Nnf`] to [`Pnf`].

[`Nnf`]: crate::transform::Nnf
*/
use super::{Error, Nnf};
use crate::syntax::{formula::*, Fof, Qff, Term, V};
use std::{collections::HashSet, convert::TryFrom, fmt};

/// Represents a formula in Prenex Normal Form (PNF).
///
/// **Hint**: A PNF is a first-order formula with all quantifiers (existential and
/// universal) and bound variables at the front, followed by a quantifier-free part.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Pnf {
    /// Is the quantifier-free portion of a [`Pnf`].
    Matrix(Qff),

    /// Is an existentially quantified PNF, wrapping an [`Exists`].
    Exists(Box<Exists<Pnf>>),

    /// Is a universally quantified PNF, wrapping a [`Forall`].
    Forall(Box<Forall<Pnf>>),
}

impl From<Qff> for Pnf {
    fn from(value: Qff) -> Self {
        Self::Matrix(value)
    }
}

impl From<Exists<Pnf>> for Pnf {
    fn from(value: Exists<Pnf>) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl From<Forall<Pnf>> for Pnf {
    fn from(value: Forall<Pnf>) -> Self {
        Self::Forall(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`Pnf`].
pub trait ToPnf: Formula {
    /// Transforms the receiver formula to a Prenex Normal Form (PNF).
    ///
    /// **Note**: the bound variables of the receiver must be pairwise distinct and must not
    /// occur free in the receiver (see [`Nnf::standardize`]); otherwise the result is
    /// [`Error::NotStandardized`].
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::Fof;
    /// use clausify_fol::transform::{ToNnf, ToPnf};
    ///
    /// let formula: Fof = "forall x ((not P(x) or Q(x)) and exists y R(y))".parse().unwrap();
    /// let pnf = formula.nnf().unwrap().standardize().pnf().unwrap();
    ///
    /// assert_eq!("∀ x1. (∃ y1. (((¬P(x1)) ∨ Q(x1)) ∧ R(y1)))", pnf.to_string());
    /// ```
    fn pnf(&self) -> Result<Pnf, Error>;
}

impl ToPnf for Nnf {
    fn pnf(&self) -> Result<Pnf, Error> {
        check_standardized(self)?;

        let mut prefix = Vec::new();
        let matrix = strip(self, &mut prefix);
        Ok(Pnf::new(prefix, matrix))
    }
}

impl Pnf {
    /// Builds a PNF from a quantifier `prefix`, outermost first, and a `matrix`.
    pub fn new(prefix: Vec<Quantifier>, matrix: Qff) -> Self {
        prefix
            .into_iter()
            .rev()
            .fold(Self::Matrix(matrix), |pnf, quantifier| match quantifier {
                Quantifier::Forall(variable) => Self::forall(variable, pnf),
                Quantifier::Exists(variable) => Self::exists(variable, pnf),
            })
    }

    #[inline(always)]
    fn exists(variable: V, formula: Self) -> Self {
        Exists { variable, formula }.into()
    }

    #[inline(always)]
    fn forall(variable: V, formula: Self) -> Self {
        Forall { variable, formula }.into()
    }

    /// Returns the quantifier prefix of the receiver, outermost first.
    pub fn prefix(&self) -> Vec<Quantifier> {
        let mut result = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::Matrix(_) => return result,
                Self::Exists(this) => {
                    result.push(Quantifier::Exists(this.variable.clone()));
                    current = &this.formula;
                }
                Self::Forall(this) => {
                    result.push(Quantifier::Forall(this.variable.clone()));
                    current = &this.formula;
                }
            }
        }
    }

    /// Returns the quantifier-free matrix of the receiver.
    pub fn matrix(&self) -> &Qff {
        match self {
            Self::Matrix(this) => this,
            Self::Exists(this) => this.formula.matrix(),
            Self::Forall(this) => this.formula.matrix(),
        }
    }
}

impl Formula for Pnf {
    fn free_vars(&self) -> Vec<&V> {
        match self {
            Self::Matrix(this) => this.free_vars(),
            Self::Exists(this) => this.free_vars(),
            Self::Forall(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Matrix(this) => this.transform_term(f).into(),
            Self::Exists(this) => this.transform_term(f).into(),
            Self::Forall(this) => this.transform_term(f).into(),
        }
    }
}

impl From<Pnf> for Fof {
    fn from(value: Pnf) -> Self {
        match value {
            Pnf::Matrix(this) => this.into(),
            Pnf::Exists(this) => Fof::exists(this.variable, this.formula.into()),
            Pnf::Forall(this) => Fof::forall(this.variable, this.formula.into()),
        }
    }
}

impl From<&Pnf> for Fof {
    fn from(value: &Pnf) -> Self {
        value.clone().into()
    }
}

/// Accepts formulae that are already in PNF with a matrix in negation normal form.
impl TryFrom<Fof> for Pnf {
    type Error = Error;

    fn try_from(value: Fof) -> Result<Self, Self::Error> {
        match value {
            Fof::Exists(this) => Ok(Pnf::exists(this.variable, Pnf::try_from(this.formula)?)),
            Fof::Forall(this) => Ok(Pnf::forall(this.variable, Pnf::try_from(this.formula)?)),
            _ => Ok(Qff::try_from(value)?.into()),
        }
    }
}

impl fmt::Display for Pnf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Fof::from(self).fmt(f)
    }
}

impl fmt::Debug for Pnf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&Fof::from(self), f)
    }
}

// Quantifiers may only be pulled out of a formula whose bound variables are distinct and
// never free.
fn check_standardized(formula: &Nnf) -> Result<(), Error> {
    let fof = Fof::from(formula);
    let free: HashSet<&V> = formula.free_vars().into_iter().collect();
    let mut bound = HashSet::new();
    for quantifier in fof.quantifiers() {
        let variable = quantifier.variable();
        if free.contains(variable) || !bound.insert(variable.clone()) {
            return Err(Error::NotStandardized {
                variable: variable.clone(),
                formula: fof,
            });
        }
    }
    Ok(())
}

// Removes the quantifiers of `formula`, pushing them to `prefix` in the order of a
// left-to-right, outer-to-inner traversal, and returns what remains.
fn strip(formula: &Nnf, prefix: &mut Vec<Quantifier>) -> Qff {
    match formula {
        Nnf::Literal(this) => this.clone().into(),
        Nnf::And(this) => {
            let left = strip(&this.left, prefix);
            left.and(strip(&this.right, prefix))
        }
        Nnf::Or(this) => {
            let left = strip(&this.left, prefix);
            left.or(strip(&this.right, prefix))
        }
        Nnf::Exists(this) => {
            prefix.push(Quantifier::Exists(this.variable.clone()));
            strip(&this.formula, prefix)
        }
        Nnf::Forall(this) => {
            prefix.push(Quantifier::Forall(this.variable.clone()));
            strip(&this.formula, prefix)
        }
    }
}
