/*! Defines literals, clauses and clause sets, the output of CNF conversion. */
use super::{Atom, Formula, Not};
use crate::{
    syntax::{Fof, Term, V},
    transform::SymbolTable,
};
use itertools::Itertools;
use std::{cmp::Ordering, collections::BTreeSet, collections::HashMap, fmt, ops::Deref};

/// A literal is either an [`Atom`] or its negation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Wraps a (positive) [`Atom`].
    Pos(Atom),

    /// Wraps the negation of an [`Atom`].
    Neg(Atom),
}

impl Literal {
    /// Returns the atom of the receiver.
    pub fn atom(&self) -> &Atom {
        match self {
            Self::Pos(this) | Self::Neg(this) => this,
        }
    }

    /// Returns true if the receiver is a positive literal.
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Pos(_))
    }
}

// Literals are ordered by their atoms first so that `¬P(x)` comes before `Q(x)`.
impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.atom()
            .cmp(other.atom())
            .then_with(|| other.is_positive().cmp(&self.is_positive()))
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Atom> for Literal {
    fn from(value: Atom) -> Self {
        Self::Pos(value)
    }
}

impl From<Not<Atom>> for Literal {
    fn from(value: Not<Atom>) -> Self {
        Self::Neg(value.formula)
    }
}

impl Formula for Literal {
    fn free_vars(&self) -> Vec<&V> {
        self.atom().free_vars()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        match self {
            Self::Pos(this) => Self::Pos(this.transform_term(f)),
            Self::Neg(this) => Self::Neg(this.transform_term(f)),
        }
    }
}

impl From<Literal> for Fof {
    fn from(value: Literal) -> Self {
        match value {
            Literal::Pos(this) => this.into(),
            Literal::Neg(this) => Fof::not(this.into()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pos(this) => write!(f, "{}", this),
            Self::Neg(this) => write!(f, "¬{}", this),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pos(this) => write!(f, "{:?}", this),
            Self::Neg(this) => write!(f, "not {:?}", this),
        }
    }
}

/// Represents a clause, the disjunction of a set of [`Literal`]s.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    /// Returns the literals of the receiver clause.
    pub fn literals(&self) -> &BTreeSet<Literal> {
        &self.0
    }

    /// Returns a clause containing all literals in the receiver and `other`.
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().collect()
    }
}

impl Deref for Clause {
    type Target = BTreeSet<Literal>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Literal> for Clause {
    fn from(value: Literal) -> Self {
        std::iter::once(value).collect()
    }
}

impl std::iter::FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Formula for Clause {
    fn free_vars(&self) -> Vec<&V> {
        self.0.iter().flat_map(|l| l.free_vars()).unique().collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        self.0.iter().map(|lit| lit.transform_term(f)).collect()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().map(|l| l.to_string()).join(", "))
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().map(|l| format!("{:?}", l)).join(", "))
    }
}

/// Represents a set of [`Clause`]s, interpreted as their conjunction.
#[derive(PartialEq, Eq, Hash, Clone, Default)]
pub struct ClauseSet(BTreeSet<Clause>);

impl ClauseSet {
    /// Returns the clauses of the receiver.
    pub fn clauses(&self) -> &BTreeSet<Clause> {
        &self.0
    }

    /// Returns a clause set, containing all clauses in the receiver and `other`.
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().collect()
    }

    /// Returns the clause set of the disjunction of the receiver and `other`: one clause for
    /// every pair of clauses taken from the two sets.
    pub fn product(&self, other: &Self) -> Self {
        self.0
            .iter()
            .cartesian_product(other.0.iter())
            .map(|(l, r)| l.union(r))
            .collect()
    }

    /// Renames the variables of every clause apart, using fresh names from `symbols`, so
    /// that no two clauses share a variable.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::Fof;
    /// use clausify_fol::transform::SymbolTable;
    /// use std::convert::TryFrom;
    ///
    /// let formula: Fof = "(P(x) or Q(x)) and R(x)".parse().unwrap();
    /// let mut symbols = SymbolTable::from_formula(&formula);
    /// let clauses = clausify_fol::syntax::ClauseSet::try_from(&formula).unwrap();
    ///
    /// assert_eq!("[{P(x), Q(x)}, {R(x)}]", clauses.to_string());
    /// assert_eq!(
    ///     "[{P(x1), Q(x1)}, {R(x2)}]",
    ///     clauses.rename_apart(&mut symbols).to_string(),
    /// );
    /// ```
    pub fn rename_apart(&self, symbols: &mut SymbolTable) -> Self {
        self.0
            .iter()
            .map(|clause| {
                let renaming: HashMap<&V, V> = clause
                    .free_vars()
                    .into_iter()
                    .map(|v| (v, symbols.fresh_var(v)))
                    .collect();
                clause.rename_var(&renaming)
            })
            .collect()
    }
}

impl Deref for ClauseSet {
    type Target = BTreeSet<Clause>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Clause> for ClauseSet {
    fn from(value: Clause) -> Self {
        std::iter::once(value).collect()
    }
}

impl std::iter::FromIterator<Clause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Formula for ClauseSet {
    fn free_vars(&self) -> Vec<&V> {
        self.0.iter().flat_map(|c| c.free_vars()).unique().collect()
    }

    fn transform_term(&self, f: &impl Fn(&Term) -> Term) -> Self {
        self.0.iter().map(|c| c.transform_term(f)).collect()
    }
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().map(|c| c.to_string()).join(", "))
    }
}

impl fmt::Debug for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().map(|c| format!("{:?}", c)).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, atom, fof, v};

    fn pos(atom: Atom) -> Literal {
        Literal::Pos(atom)
    }

    fn neg(atom: Atom) -> Literal {
        Literal::Neg(atom)
    }

    #[test]
    fn literal_to_string() {
        assert_eq!("P(x)", pos(atom!(P(x))).to_string());
        assert_eq!("¬P(x, c)", neg(atom!(P(x, @c))).to_string());
        assert_debug_string!("not P(x, 'c)", neg(atom!(P(x, @c))));
    }

    #[test]
    fn literal_order() {
        assert!(neg(atom!(P(x))) < pos(atom!(Q(x))));
        assert!(pos(atom!(P(x))) < neg(atom!(P(x))));
        assert!(pos(atom!(P(x))) < pos(atom!(P(y))));
    }

    #[test]
    fn clause_to_string() {
        assert_eq!("{}", Clause::default().to_string());
        let clause: Clause = vec![pos(atom!(Q(x1))), neg(atom!(P(x1)))]
            .into_iter()
            .collect();
        assert_eq!("{¬P(x1), Q(x1)}", clause.to_string());
        assert_debug_string!("{not P(x1), Q(x1)}", clause);
    }

    #[test]
    fn clause_union() {
        let first: Clause = vec![pos(atom!(P(x))), neg(atom!(Q(y)))].into_iter().collect();
        let second: Clause = vec![neg(atom!(Q(y))), pos(atom!(R(z)))].into_iter().collect();
        assert_eq!("{P(x), ¬Q(y), R(z)}", first.union(&second).to_string());
    }

    #[test]
    fn clause_free_vars() {
        let clause: Clause = vec![pos(atom!(P(x, @c))), neg(atom!(Q(y, x)))]
            .into_iter()
            .collect();
        assert_eq!(vec![&v!(x), &v!(y)], clause.free_vars());
    }

    #[test]
    fn clause_set_to_string() {
        assert_eq!("[]", ClauseSet::default().to_string());
        let clauses: ClauseSet = vec![
            Clause::from(pos(atom!(R(sk1())))),
            vec![neg(atom!(P(x1))), pos(atom!(Q(x1)))]
                .into_iter()
                .collect(),
        ]
        .into_iter()
        .collect();
        assert_eq!("[{¬P(x1), Q(x1)}, {R(sk1())}]", clauses.to_string());
    }

    #[test]
    fn clause_set_product() {
        let left: ClauseSet = vec![
            Clause::from(pos(atom!(P(x)))),
            Clause::from(pos(atom!(Q(x)))),
        ]
        .into_iter()
        .collect();
        let right = ClauseSet::from(Clause::from(neg(atom!(R(x)))));
        assert_eq!(
            "[{P(x), ¬R(x)}, {Q(x), ¬R(x)}]",
            left.product(&right).to_string()
        );
        assert_eq!("[]", left.product(&ClauseSet::default()).to_string());
    }

    #[test]
    fn clause_set_rename_apart() {
        let formula = fof!("(P(x) or Q(x, y)) and R(x) and S(x1)");
        let mut symbols = SymbolTable::from_formula(&formula);
        let clauses: ClauseSet = vec![
            vec![pos(atom!(P(x))), pos(atom!(Q(x, y)))]
                .into_iter()
                .collect::<Clause>(),
            Clause::from(pos(atom!(R(x)))),
            Clause::from(pos(atom!(S(x1)))),
        ]
        .into_iter()
        .collect();
        let renamed = clauses.rename_apart(&mut symbols);
        assert_eq!("[{P(x2), Q(x2, y1)}, {R(x3)}, {S(x4)}]", renamed.to_string());
        assert_eq!(4, renamed.free_vars().len());
    }
}
