/*! Defines formulae in Skolem Normal Form (SNF) and implements an algorithm for transforming
a [`Pnf`] to an [`Snf`].

[`Pnf`]: crate::transform::Pnf
*/
use super::{Error, Pnf, SymbolTable};
use crate::syntax::{formula::*, Fof, Qff, Term, C, F, V};
use itertools::Itertools;
use std::{
    collections::{HashMap, HashSet},
    convert::TryFrom,
    fmt,
};

/// Represents a formula in Skolem Normal Form (SNF).
///
/// **Hint**: An SNF is a [Pnf] with only universal quantifiers
/// (see: <https://en.wikipedia.org/wiki/Skolem_normal_form>).
///
/// [Pnf]: crate::transform::Pnf
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Snf {
    /// Is the quantifier-free part of the [`Snf`].
    Matrix(Qff),

    /// Is a universally quantified formula, wrapping a [`Forall`].
    Forall(Box<Forall<Snf>>),
}

impl From<Qff> for Snf {
    fn from(value: Qff) -> Self {
        Self::Matrix(value)
    }
}

impl From<Forall<Snf>> for Snf {
    fn from(value: Forall<Snf>) -> Self {
        Self::Forall(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`Snf`].
pub trait ToSnf: Formula {
    /// Is similar to [`ToSnf::snf`] but uses a custom closure to generate Skolem symbols.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::Fof;
    /// use clausify_fol::transform::{ToNnf, ToPnf, ToSnf};
    ///
    /// let mut counter = 0;
    /// let mut generator = || {
    ///     counter += 1;
    ///     format!("skolem{}", counter).into()
    /// };
    /// let formula: Fof = "forall x exists y P(x, y)".parse().unwrap();
    /// let pnf = formula.nnf().unwrap().pnf().unwrap();
    ///
    /// assert_eq!("∀ x. P(x, skolem1(x))", pnf.snf_with(&mut generator).to_string());
    /// ```
    fn snf_with<G>(&self, generator: &mut G) -> Snf
    where
        G: FnMut() -> F;

    /// Transforms the receiver to a Skolem Normal Form (SNF), naming Skolem symbols `sk1`,
    /// `sk2`, ... while avoiding the symbols of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::Fof;
    /// use clausify_fol::transform::{ToNnf, ToPnf, ToSnf};
    ///
    /// let formula: Fof = "forall x ((not P(x) or Q(x)) and exists y R(y))".parse().unwrap();
    /// let snf = formula.nnf().unwrap().standardize().pnf().unwrap().snf();
    ///
    /// assert_eq!("∀ x1. (((¬P(x1)) ∨ Q(x1)) ∧ R(sk1))", snf.to_string());
    /// ```
    fn snf(&self) -> Snf;
}

impl ToSnf for Pnf {
    fn snf_with<G>(&self, generator: &mut G) -> Snf
    where
        G: FnMut() -> F,
    {
        let prefix = self.prefix();
        let mut matrix = self.matrix().clone();
        let mut universals: Vec<V> = self.free_vars().into_iter().cloned().collect();
        let mut bound = Vec::new();

        for (index, quantifier) in prefix.iter().enumerate() {
            match quantifier {
                Quantifier::Forall(variable) => {
                    universals.push(variable.clone());
                    bound.push(variable.clone());
                }
                Quantifier::Exists(variable) => {
                    let inner: HashSet<&V> = prefix[index + 1..]
                        .iter()
                        .map(Quantifier::variable)
                        .collect();
                    let dependencies = component_vars(&matrix, variable, &inner);
                    let terms = universals
                        .iter()
                        .filter(|u| dependencies.contains(*u))
                        .map(|u| Term::from(u.clone()))
                        .collect_vec();

                    let symbol = generator();
                    let skolem = if terms.is_empty() {
                        C::from(symbol.name()).into()
                    } else {
                        symbol.app(terms)
                    };

                    let mut map: HashMap<&V, Term> = HashMap::new();
                    map.insert(variable, skolem);
                    matrix = matrix.substitute(&map);
                }
            }
        }

        bound
            .into_iter()
            .rev()
            .fold(Snf::Matrix(matrix), |snf, variable| Snf::forall(variable, snf))
    }

    fn snf(&self) -> Snf {
        let mut symbols = SymbolTable::from_formula(&Fof::from(self));
        let mut generator = || symbols.fresh_skolem();
        self.snf_with(&mut generator)
    }
}

impl Snf {
    #[inline(always)]
    fn forall(variable: V, formula: Self) -> Self {
        Forall { variable, formula }.into()
    }

    /// Returns the universally quantified variables of the receiver, outermost first.
    pub fn universals(&self) -> Vec<&V> {
        match self {
            Self::Matrix(_) => Vec::new(),
            Self::Forall(this) => {
                let mut result = vec![&this.variable];
                result.extend(this.formula.universals());
                result
            }
        }
    }

    /// Returns the quantifier-free matrix of the receiver.
    pub fn matrix(&self) -> &Qff {
        match self {
            Self::Matrix(this) => this,
            Self::Forall(this) => this.formula.matrix(),
        }
    }
}

impl Formula for Snf {
    fn free_vars(&self) -> Vec<&V> {
        match self {
            Self::Matrix(this) => this.free_vars(),
            Self::Forall(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Matrix(this) => this.transform_term(f).into(),
            Self::Forall(this) => this.transform_term(f).into(),
        }
    }
}

impl From<Snf> for Fof {
    fn from(value: Snf) -> Self {
        match value {
            Snf::Matrix(this) => this.into(),
            Snf::Forall(this) => Fof::forall(this.variable, this.formula.into()),
        }
    }
}

impl From<&Snf> for Fof {
    fn from(value: &Snf) -> Self {
        value.clone().into()
    }
}

/// Accepts universally quantified formulae over a quantifier-free matrix in negation normal
/// form; an existential quantifier is rejected with [`Error::Quantifier`].
impl TryFrom<Fof> for Snf {
    type Error = Error;

    fn try_from(value: Fof) -> Result<Self, Self::Error> {
        match value {
            Fof::Forall(this) => Ok(Snf::forall(this.variable, Snf::try_from(this.formula)?)),
            _ => Ok(Qff::try_from(value)?.into()),
        }
    }
}

impl fmt::Display for Snf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Fof::from(self).fmt(f)
    }
}

impl fmt::Debug for Snf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&Fof::from(self), f)
    }
}

// Returns the variables of the conjuncts of `matrix` that are connected to `variable`. Two
// conjuncts are connected when they share `variable` or one of the `inner` variables, which
// are bound after `variable` in the prefix.
fn component_vars(matrix: &Qff, variable: &V, inner: &HashSet<&V>) -> HashSet<V> {
    let conjuncts: Vec<HashSet<&V>> = matrix
        .conjuncts()
        .into_iter()
        .map(|c| c.free_vars().into_iter().collect())
        .collect();

    let mut links: HashSet<&V> = HashSet::new();
    links.insert(variable);
    let mut component = vec![false; conjuncts.len()];

    loop {
        let mut changed = false;
        for (index, vars) in conjuncts.iter().enumerate() {
            if !component[index] && vars.iter().any(|v| links.contains(v)) {
                component[index] = true;
                changed = true;
                links.extend(vars.iter().copied().filter(|v| inner.contains(v)));
            }
        }
        if !changed {
            break;
        }
    }

    conjuncts
        .iter()
        .zip(component)
        .filter(|(_, selected)| *selected)
        .flat_map(|(vars, _)| vars.iter().map(|v| (*v).clone()))
        .collect()
}
