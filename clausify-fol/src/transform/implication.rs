/*! Implements the elimination of implications from first-order formulae. */
use crate::syntax::Fof;

/// Is the trait of formulae whose implications can be rewritten as disjunctions.
pub trait ToImplicationFree {
    /// Rewrites every implication `A → B` of the receiver to `¬A ∨ B`, innermost first.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::Fof;
    /// use clausify_fol::transform::ToImplicationFree;
    ///
    /// let formula: Fof = "P(x) -> Q(x)".parse().unwrap();
    /// assert_eq!("(not P(x)) or Q(x)", format!("{:?}", formula.implication_free()));
    /// ```
    fn implication_free(&self) -> Fof;
}

impl ToImplicationFree for Fof {
    fn implication_free(&self) -> Fof {
        match self {
            Fof::Atom(_) => self.clone(),
            Fof::Not(this) => Fof::not(this.formula.implication_free()),
            Fof::And(this) => this.left.implication_free().and(this.right.implication_free()),
            Fof::Or(this) => this.left.implication_free().or(this.right.implication_free()),
            Fof::Implies(this) => {
                Fof::not(this.premise.implication_free()).or(this.consequence.implication_free())
            }
            Fof::Exists(this) => Fof::exists(this.variable.clone(), this.formula.implication_free()),
            Fof::Forall(this) => Fof::forall(this.variable.clone(), this.formula.implication_free()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, fof};

    fn implication_free(text: &str) -> Fof {
        fof!(text).implication_free()
    }

    #[test]
    fn test_implication_free() {
        assert_debug_string!("P(x)", implication_free("P(x)"));
        assert_debug_string!("(not P(x)) or Q(x)", implication_free("P(x) -> Q(x)"));
        assert_debug_string!(
            "(not P(x)) or ((not Q(x)) or R(x))",
            implication_free("P(x) -> Q(x) -> R(x)")
        );
        assert_debug_string!(
            "(not ((not P(x)) or Q(x))) or R(x)",
            implication_free("(P(x) -> Q(x)) -> R(x)")
        );
        assert_debug_string!(
            "forall x (((not P(x)) or Q(x)) and (exists y R(y)))",
            implication_free("forall x ((P(x) -> Q(x)) and exists y R(y))")
        );
        assert_debug_string!(
            "not (exists x ((not P(x)) or (not (Q(x) and R(x)))))",
            implication_free("not exists x (P(x) -> not (Q(x) and R(x)))")
        );
        assert_debug_string!(
            "P(x) and (not Q(x))",
            implication_free("P(x) and not Q(x)")
        );
    }

    #[test]
    fn implication_free_is_stable() {
        let formula = implication_free("forall x (P(x) -> exists y (Q(x, y) -> R(y)))");
        assert_eq!(formula, formula.implication_free());
    }
}
