/*! Defines the syntax for first-order terms. */

use super::{C, F, V};
use crate::transform::{Substitution, VariableRenaming};
use itertools::Itertools;
use std::fmt;

/// Represents a first-order term and consists of variables, constants and function
/// applications.
///
/// **Note**: the parser only produces variables and constants. Function applications
/// are Skolem terms, introduced by [`ToSnf`].
///
/// [`ToSnf`]: crate::transform::ToSnf
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Is a variable term, wrapping a [`V`].
    Var { variable: V },

    /// Is a constant term, wrapping a [`C`].
    Const { constant: C },

    /// Is a composite term, made by applying a `function` on a list of `terms`.
    App { function: F, terms: Vec<Term> },
}

impl Term {
    /// Returns a list of all variable symbols in the term.
    ///
    /// **Note**: each variable symbol appears only once even if it is present at multiple
    /// positions of the receiver term.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::{V, C, F, Term};
    /// let x = V::from("x");
    /// let y = V::from("y");
    ///
    /// // sk1(x, c, y, x)
    /// let t = F::from("sk1").app(vec![
    ///     x.clone().into(),
    ///     C::from("c").into(),
    ///     y.clone().into(),
    ///     x.clone().into(),
    /// ]);
    /// assert_eq!(vec![&x, &y], t.free_vars());
    /// ```
    pub fn free_vars(&self) -> Vec<&V> {
        match self {
            Term::Var { variable } => vec![variable],
            Term::Const { .. } => vec![],
            Term::App { terms, .. } => terms.iter().flat_map(|t| t.free_vars()).unique().collect(),
        }
    }

    /// Applies `sub` on the variables of the receiver.
    pub fn substitute(&self, sub: &impl Substitution) -> Term {
        match self {
            Term::Var { variable } => sub.apply(variable),
            Term::Const { .. } => self.clone(),
            Term::App { function, terms } => Term::App {
                function: function.clone(),
                terms: terms.iter().map(|t| t.substitute(sub)).collect(),
            },
        }
    }

    /// Renames the variables of the receiver by `renaming`.
    pub fn rename_var(&self, renaming: &impl VariableRenaming) -> Term {
        match self {
            Term::Var { variable } => renaming.apply(variable).into(),
            Term::Const { .. } => self.clone(),
            Term::App { function, terms } => Term::App {
                function: function.clone(),
                terms: terms.iter().map(|t| t.rename_var(renaming)).collect(),
            },
        }
    }
}

impl From<V> for Term {
    fn from(variable: V) -> Self {
        Self::Var { variable }
    }
}

impl From<C> for Term {
    fn from(constant: C) -> Self {
        Self::Const { constant }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var { variable } => write!(f, "{}", variable),
            Self::Const { constant } => write!(f, "{}", constant),
            Self::App { function, terms } => {
                let ts = terms.iter().map(|t| t.to_string()).collect_vec();
                write!(f, "{}({})", function, ts.join(", "))
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var { variable } => write!(f, "{:?}", variable),
            Self::Const { constant } => write!(f, "{:?}", constant),
            Self::App { function, terms } => {
                let ts = terms.iter().map(|t| format!("{:?}", t)).collect_vec();
                write!(f, "{:?}({})", function, ts.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq_sorted_vecs, term, v};
    use std::collections::HashMap;

    #[test]
    fn term_to_string() {
        assert_eq!("x", term!(x).to_string());
        assert_eq!("c", term!(@c).to_string());
        assert_eq!("sk1()", term!(sk1()).to_string());
        assert_eq!("sk1(x, y)", term!(sk1(x, y)).to_string());
        assert_eq!("f(g(x), c)", term!(f(g(x), @c)).to_string());
    }

    #[test]
    fn term_debug() {
        assert_eq!("'c", format!("{:?}", term!(@c)));
        assert_eq!("f(x, 'c)", format!("{:?}", term!(f(x, @c))));
    }

    #[test]
    fn term_free_vars() {
        {
            let expected: Vec<&V> = vec![];
            assert_eq!(expected, term!(@c).free_vars());
        }
        {
            let expected = vec![v!(x)];
            assert_eq_sorted_vecs!(
                expected.iter().collect::<Vec<_>>(),
                term!(x).free_vars()
            );
        }
        {
            let expected = vec![v!(x), v!(y)];
            assert_eq_sorted_vecs!(
                expected.iter().collect::<Vec<_>>(),
                term!(f(x, g(y, @c), x)).free_vars()
            );
        }
    }

    #[test]
    fn term_substitute() {
        let x = v!(x);
        let mut map: HashMap<&V, Term> = HashMap::new();
        map.insert(&x, term!(sk1(y)));
        assert_eq!(term!(sk1(y)), term!(x).substitute(&map));
        assert_eq!(term!(z), term!(z).substitute(&map));
        assert_eq!(term!(f(sk1(y), z)), term!(f(x, z)).substitute(&map));
    }

    #[test]
    fn term_rename_var() {
        let renaming = |v: &V| {
            if v.name() == "x" {
                v!(x1)
            } else {
                v.clone()
            }
        };
        assert_eq!(term!(x1), term!(x).rename_var(&renaming));
        assert_eq!(term!(f(x1, y)), term!(f(x, y)).rename_var(&renaming));
        assert_eq!(term!(@x), term!(@x).rename_var(&renaming));
    }
}
