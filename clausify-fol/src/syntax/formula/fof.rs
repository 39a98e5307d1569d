/*! Defines the syntax of first-order formulae.*/
use super::{And, Atom, Exists, Forall, Formula, Implies, Not, Or, Quantifier};
use crate::syntax::{Term, V};
use std::fmt;

/// Is an abstract syntax tree (AST) for first-order formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fof {
    /// Is an atomic first-order formula, wrapping an [`Atom`].
    Atom(Atom),

    /// Is the negation of a first-order formula, wrapping a [`Not`].
    Not(Box<Not<Fof>>),

    /// Is a conjunction of two first-order formulae, wrapping an [`And`].
    And(Box<And<Fof>>),

    /// Is a disjunction of two first-order formulae, wrapping an [`Or`].
    Or(Box<Or<Fof>>),

    /// Is an implication between two first-order formulae, wrapping an [`Implies`].
    Implies(Box<Implies<Fof>>),

    /// Is an existentially quantified first-order formula, wrapping an [`Exists`].
    Exists(Box<Exists<Fof>>),

    /// Is a universally quantified first-order formula, wrapping a [`Forall`].
    Forall(Box<Forall<Fof>>),
}

impl From<Atom> for Fof {
    fn from(value: Atom) -> Self {
        Self::Atom(value)
    }
}

impl From<Not<Fof>> for Fof {
    fn from(value: Not<Fof>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And<Fof>> for Fof {
    fn from(value: And<Fof>) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or<Fof>> for Fof {
    fn from(value: Or<Fof>) -> Self {
        Self::Or(Box::new(value))
    }
}

impl From<Implies<Fof>> for Fof {
    fn from(value: Implies<Fof>) -> Self {
        Self::Implies(Box::new(value))
    }
}

impl From<Exists<Fof>> for Fof {
    fn from(value: Exists<Fof>) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl From<Forall<Fof>> for Fof {
    fn from(value: Forall<Fof>) -> Self {
        Self::Forall(Box::new(value))
    }
}

impl Fof {
    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    /// Returns an existentially quantified formula binding `variable` in `formula`.
    #[inline(always)]
    pub fn exists(variable: V, formula: Self) -> Self {
        Exists { variable, formula }.into()
    }

    /// Returns a universally quantified formula binding `variable` in `formula`.
    #[inline(always)]
    pub fn forall(variable: V, formula: Self) -> Self {
        Forall { variable, formula }.into()
    }

    /// Returns a conjunction of `self` and `other`.
    #[inline(always)]
    pub fn and(self, other: Self) -> Self {
        And {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns a disjunction of `self` and `other`.
    #[inline(always)]
    pub fn or(self, other: Self) -> Self {
        Or {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns an implication between `self` and `other`.
    #[inline(always)]
    pub fn implies(self, other: Self) -> Self {
        Implies {
            premise: self,
            consequence: other,
        }
        .into()
    }

    /// Returns the quantifiers of the receiver in a left-to-right, outer-to-inner order.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::{Fof, Quantifier, V};
    /// let formula: Fof = "forall x (P(x) and exists y Q(y))".parse().unwrap();
    /// assert_eq!(
    ///     vec![Quantifier::Forall(V::from("x")), Quantifier::Exists(V::from("y"))],
    ///     formula.quantifiers(),
    /// );
    /// ```
    pub fn quantifiers(&self) -> Vec<Quantifier> {
        fn collect(formula: &Fof, result: &mut Vec<Quantifier>) {
            match formula {
                Fof::Atom(_) => {}
                Fof::Not(this) => collect(&this.formula, result),
                Fof::And(this) => {
                    collect(&this.left, result);
                    collect(&this.right, result);
                }
                Fof::Or(this) => {
                    collect(&this.left, result);
                    collect(&this.right, result);
                }
                Fof::Implies(this) => {
                    collect(&this.premise, result);
                    collect(&this.consequence, result);
                }
                Fof::Exists(this) => {
                    result.push(Quantifier::Exists(this.variable.clone()));
                    collect(&this.formula, result);
                }
                Fof::Forall(this) => {
                    result.push(Quantifier::Forall(this.variable.clone()));
                    collect(&this.formula, result);
                }
            }
        }

        let mut result = Vec::new();
        collect(self, &mut result);
        result
    }

    /// Returns all variable symbols of the receiver, free or bound, including the variables
    /// bound by quantifiers.
    pub fn variables(&self) -> Vec<&V> {
        fn collect<'a>(formula: &'a Fof, result: &mut Vec<&'a V>) {
            match formula {
                Fof::Atom(this) => {
                    this.terms
                        .iter()
                        .flat_map(|t| t.free_vars())
                        .for_each(|v| result.push(v));
                }
                Fof::Not(this) => collect(&this.formula, result),
                Fof::And(this) => {
                    collect(&this.left, result);
                    collect(&this.right, result);
                }
                Fof::Or(this) => {
                    collect(&this.left, result);
                    collect(&this.right, result);
                }
                Fof::Implies(this) => {
                    collect(&this.premise, result);
                    collect(&this.consequence, result);
                }
                Fof::Exists(this) => {
                    result.push(&this.variable);
                    collect(&this.formula, result);
                }
                Fof::Forall(this) => {
                    result.push(&this.variable);
                    collect(&this.formula, result);
                }
            }
        }

        let mut result = Vec::new();
        collect(self, &mut result);
        result.sort();
        result.dedup();
        result
    }

    /// Returns the names of the constant and function symbols in the terms of the receiver.
    pub fn term_symbols(&self) -> Vec<String> {
        fn term(t: &Term, result: &mut Vec<String>) {
            match t {
                Term::Var { .. } => {}
                Term::Const { constant } => result.push(constant.name().to_string()),
                Term::App { function, terms } => {
                    result.push(function.name().to_string());
                    terms.iter().for_each(|t| term(t, result));
                }
            }
        }
        fn collect(formula: &Fof, result: &mut Vec<String>) {
            match formula {
                Fof::Atom(this) => this.terms.iter().for_each(|t| term(t, result)),
                Fof::Not(this) => collect(&this.formula, result),
                Fof::And(this) => {
                    collect(&this.left, result);
                    collect(&this.right, result);
                }
                Fof::Or(this) => {
                    collect(&this.left, result);
                    collect(&this.right, result);
                }
                Fof::Implies(this) => {
                    collect(&this.premise, result);
                    collect(&this.consequence, result);
                }
                Fof::Exists(this) => collect(&this.formula, result),
                Fof::Forall(this) => collect(&this.formula, result),
            }
        }

        let mut result = Vec::new();
        collect(self, &mut result);
        result.sort();
        result.dedup();
        result
    }
}

impl Formula for Fof {
    fn free_vars(&self) -> Vec<&V> {
        match self {
            Self::Atom(this) => this.free_vars(),
            Self::Not(this) => this.free_vars(),
            Self::And(this) => this.free_vars(),
            Self::Or(this) => this.free_vars(),
            Self::Implies(this) => this.free_vars(),
            Self::Exists(this) => this.free_vars(),
            Self::Forall(this) => this.free_vars(),
        }
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Atom(this) => this.transform_term(f).into(),
            Self::Not(this) => this.transform_term(f).into(),
            Self::And(this) => this.transform_term(f).into(),
            Self::Or(this) => this.transform_term(f).into(),
            Self::Implies(this) => this.transform_term(f).into(),
            Self::Exists(this) => this.transform_term(f).into(),
            Self::Forall(this) => this.transform_term(f).into(),
        }
    }
}

// used for pretty printing a formula
impl fmt::Display for Fof {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn parens(formula: &Fof) -> String {
            match formula {
                Fof::Atom { .. } => formula.to_string(),
                _ => format!("({})", formula),
            }
        }
        match self {
            Self::Atom(this) => this.fmt(f),
            Self::Not(this) => write!(f, "¬{}", parens(&this.formula)),
            Self::And(this) => write!(f, "{} ∧ {}", parens(&this.left), parens(&this.right)),
            Self::Or(this) => write!(f, "{} ∨ {}", parens(&this.left), parens(&this.right)),
            Self::Implies(this) => write!(
                f,
                "{} → {}",
                parens(&this.premise),
                parens(&this.consequence)
            ),
            Self::Exists(this) => write!(f, "∃ {}. {}", this.variable, parens(&this.formula)),
            Self::Forall(this) => write!(f, "∀ {}. {}", this.variable, parens(&this.formula)),
        }
    }
}

// prints in the keyword syntax of the parser
impl fmt::Debug for Fof {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn parens(formula: &Fof) -> String {
            match formula {
                Fof::Atom { .. } => format!("{:?}", formula),
                _ => format!("({:?})", formula),
            }
        }
        match self {
            Self::Atom(this) => write!(f, "{:?}", this),
            Self::Not(this) => write!(f, "not {}", parens(&this.formula)),
            Self::And(this) => write!(f, "{} and {}", parens(&this.left), parens(&this.right)),
            Self::Or(this) => write!(f, "{} or {}", parens(&this.left), parens(&this.right)),
            Self::Implies(this) => write!(
                f,
                "{} -> {}",
                parens(&this.premise),
                parens(&this.consequence)
            ),
            Self::Exists(this) => write!(f, "exists {} {}", this.variable, parens(&this.formula)),
            Self::Forall(this) => write!(f, "forall {} {}", this.variable, parens(&this.formula)),
        }
    }
}
