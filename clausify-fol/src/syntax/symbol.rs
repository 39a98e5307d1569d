/*! Defines the symbols of [`V`], [`C`], [`F`] and [`Pred`] for making terms and formulae.

[`V`]: crate::syntax::V
[`C`]: crate::syntax::C
[`F`]: crate::syntax::F
[`Pred`]: crate::syntax::Pred
*/

use super::{Atom, Fof, Term};
use std::fmt;

/// Represents a function symbol with a given name.
///
/// **Note**: function symbols never appear in parsed input; they are introduced by
/// Skolemization.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct F(pub String);

impl F {
    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a list of terms. The length of `terms` is the arity that the
    /// function is assumed to have.
    pub fn app(self, terms: Vec<Term>) -> Term {
        Term::App {
            function: self,
            terms,
        }
    }
}

impl<S: Into<String>> From<S> for F {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a variable symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct V(pub String);

impl V {
    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for V {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a constant symbol with a given name.
///
/// **Note**: constants are written `'name` in the surface syntax. They are displayed
/// without the apostrophe (so that Skolem constants read as `sk1`) but debug-printed with
/// it, which keeps the debug output parsable.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct C(pub String);

impl C {
    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for C {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}", self.0)
    }
}

/// Represents a predicate symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Pred(pub String);

impl Pred {
    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a list of terms and returns the resulting atomic formula.
    ///
    /// **Note**: [`Pred`] does not record an arity; the length of `terms` is the arity
    /// that the predicate is assumed to have.
    pub fn app(self, terms: Vec<Term>) -> Fof {
        Atom::new(self, terms).into()
    }
}

impl<S: Into<String>> From<S> for Pred {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::{c, f, pred, v};

    #[test]
    fn var_to_string() {
        assert_eq!("x", v!(x).to_string());
        assert_eq!("y1", v!(y1).to_string());
    }

    #[test]
    fn func_to_string() {
        assert_eq!("f", f!(f).to_string());
        assert_eq!("sk1", f!(sk1).to_string());
    }

    #[test]
    fn const_to_string() {
        assert_eq!("a", c!(a).to_string());
        assert_eq!("'a", format!("{:?}", c!(a)));
    }

    #[test]
    fn pred_to_string() {
        assert_eq!("P", pred!(P).to_string());
        assert_eq!("Q", pred!(Q).to_string());
    }
}
