/*! Implements the conversion of quantifier-free formulae to sets of clauses in Conjunctive
Normal Form (CNF).

**Hint**: A CNF is a conjunction of zero or more [`Clause`]s where each clause is a
disjunction of [`Literal`]s.
*/
use super::Error;
use crate::syntax::{Clause, ClauseSet, Fof, Qff};
use std::convert::TryFrom;

/// Is the trait of formulae that can be transformed to a [`ClauseSet`].
pub trait ToClauseSet {
    /// Transforms the receiver to a set of clauses.
    ///
    /// **Note**: the number of clauses may grow exponentially in the size of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::{Fof, Qff};
    /// use clausify_fol::transform::ToClauseSet;
    /// use std::convert::TryFrom;
    ///
    /// let formula: Fof = "(P(x) and Q(x)) or not R(y)".parse().unwrap();
    /// let qff = Qff::try_from(formula).unwrap();
    ///
    /// assert_eq!("[{P(x), ¬R(y)}, {Q(x), ¬R(y)}]", qff.clause_set().to_string());
    /// ```
    fn clause_set(&self) -> ClauseSet;
}

impl ToClauseSet for Qff {
    fn clause_set(&self) -> ClauseSet {
        clause_set(&self.distribute())
    }
}

impl Qff {
    /// Distributes disjunctions over conjunctions in the receiver so that no conjunction
    /// occurs below a disjunction.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::{Fof, Qff};
    /// use std::convert::TryFrom;
    ///
    /// let formula: Fof = "P(x) or (Q(x) and R(x))".parse().unwrap();
    /// let qff = Qff::try_from(formula).unwrap();
    ///
    /// assert_eq!("(P(x) ∨ Q(x)) ∧ (P(x) ∨ R(x))", qff.distribute().to_string());
    /// ```
    pub fn distribute(&self) -> Qff {
        match self {
            Qff::Literal(_) => self.clone(),
            Qff::And(this) => this.left.distribute().and(this.right.distribute()),
            Qff::Or(this) => {
                let left = this.left.distribute();
                let right = this.right.distribute();
                if let Qff::And(left) = left {
                    let first = left.left.or(right.clone());
                    let second = left.right.or(right);
                    first.distribute().and(second.distribute())
                } else if let Qff::And(right) = right {
                    let first = left.clone().or(right.left);
                    let second = left.or(right.right);
                    first.distribute().and(second.distribute())
                } else {
                    left.or(right)
                }
            }
        }
    }
}

impl TryFrom<&Fof> for ClauseSet {
    type Error = Error;

    fn try_from(value: &Fof) -> Result<Self, Self::Error> {
        Ok(Qff::try_from(value.clone())?.clause_set())
    }
}

impl TryFrom<Fof> for ClauseSet {
    type Error = Error;

    fn try_from(value: Fof) -> Result<Self, Self::Error> {
        Ok(Qff::try_from(value)?.clause_set())
    }
}

// Flattens a formula with disjunctions distributed over conjunctions.
fn clause_set(formula: &Qff) -> ClauseSet {
    match formula {
        Qff::Literal(this) => Clause::from(this.clone()).into(),
        Qff::And(this) => clause_set(&this.left).union(&clause_set(&this.right)),
        Qff::Or(this) => clause_set(&this.left).product(&clause_set(&this.right)),
    }
}
