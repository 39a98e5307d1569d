/*! Implements variable standardization on formulae in negation normal form. */
use super::{Nnf, SymbolTable};
use crate::syntax::{Fof, Formula, V};
use std::collections::HashMap;

impl Nnf {
    /// Renames the bound variables of the receiver so that every quantifier binds a distinct
    /// variable that does not occur anywhere else in the receiver. Fresh names are minted by
    /// a [`SymbolTable`] seeded from the receiver.
    ///
    /// **Note**: free variables of the receiver are left unchanged.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::Fof;
    /// use clausify_fol::transform::ToNnf;
    ///
    /// let formula: Fof = "forall x P(x) and exists x (Q(x) or forall x R(x))".parse().unwrap();
    /// let standardized = formula.nnf().unwrap().standardize();
    ///
    /// assert_eq!(
    ///     "(∀ x1. P(x1)) ∧ (∃ x2. (Q(x2) ∨ (∀ x3. R(x3))))",
    ///     standardized.to_string(),
    /// );
    /// ```
    pub fn standardize(&self) -> Nnf {
        let mut symbols = SymbolTable::from_formula(&Fof::from(self));
        self.standardize_with(&mut symbols)
    }

    /// Is similar to [`Nnf::standardize`] but mints fresh names from `symbols`.
    pub fn standardize_with(&self, symbols: &mut SymbolTable) -> Nnf {
        standardize(self, &HashMap::new(), symbols)
    }
}

// `renaming` maps the variables bound by the enclosing quantifiers to their fresh names.
fn standardize(formula: &Nnf, renaming: &HashMap<V, V>, symbols: &mut SymbolTable) -> Nnf {
    match formula {
        Nnf::Literal(this) => this.rename_var(renaming).into(),
        Nnf::And(this) => {
            let left = standardize(&this.left, renaming, symbols);
            left.and(standardize(&this.right, renaming, symbols))
        }
        Nnf::Or(this) => {
            let left = standardize(&this.left, renaming, symbols);
            left.or(standardize(&this.right, renaming, symbols))
        }
        Nnf::Exists(this) => {
            let (variable, renaming) = bind(&this.variable, renaming, symbols);
            Nnf::exists(variable, standardize(&this.formula, &renaming, symbols))
        }
        Nnf::Forall(this) => {
            let (variable, renaming) = bind(&this.variable, renaming, symbols);
            Nnf::forall(variable, standardize(&this.formula, &renaming, symbols))
        }
    }
}

fn bind(
    variable: &V,
    renaming: &HashMap<V, V>,
    symbols: &mut SymbolTable,
) -> (V, HashMap<V, V>) {
    let fresh = symbols.fresh_var(variable);
    let mut renaming = renaming.clone();
    renaming.insert(variable.clone(), fresh.clone());
    (fresh, renaming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, fof,
        syntax::Quantifier,
        transform::{ToImplicationFree, ToNnf},
        v,
    };
    use itertools::Itertools;
    use proptest::prelude::*;

    fn standardize(text: &str) -> Fof {
        fof!(text).nnf().unwrap().standardize().into()
    }

    #[test]
    fn test_standardize() {
        assert_debug_string!("P(x)", standardize("P(x)"));
        assert_debug_string!("forall x1 P(x1)", standardize("forall x P(x)"));
        assert_debug_string!(
            "forall x1 (exists y1 R(x1, y1))",
            standardize("forall x exists y R(x, y)")
        );
        assert_debug_string!(
            "forall x1 (((not P(x1)) or Q(x1)) and (exists y1 R(y1)))",
            standardize("forall x ((not P(x) or Q(x)) and exists y R(y))")
        );
    }

    #[test]
    fn standardize_shadowing() {
        assert_debug_string!(
            "forall x1 (P(x1) and (exists x2 Q(x2)))",
            standardize("forall x (P(x) and exists x Q(x))")
        );
        assert_debug_string!(
            "forall x1 (exists x2 (P(x2) and (forall x3 Q(x3, x3))))",
            standardize("forall x exists x (P(x) and forall x Q(x, x))")
        );
    }

    #[test]
    fn standardize_free_vars() {
        assert_debug_string!(
            "P(x) and (forall x1 Q(x1))",
            standardize("P(x) and forall x Q(x)")
        );
        assert_debug_string!(
            "forall x2 P(x2, x1, z)",
            standardize("forall x P(x, x1, z)")
        );
    }

    #[test]
    fn standardize_with_shared_table() {
        let mut symbols = SymbolTable::new();
        let first = fof!("forall x P(x)").nnf().unwrap().standardize_with(&mut symbols);
        let second = fof!("forall x Q(x)").nnf().unwrap().standardize_with(&mut symbols);
        assert_debug_string!("forall x1 P(x1)", first);
        assert_debug_string!("forall x2 Q(x2)", second);
    }

    fn arb_quantified() -> impl Strategy<Value = Fof> {
        let leaf = prop_oneof![
            Just(fof!("P(x)")),
            Just(fof!("Q(x, y)")),
            Just(fof!("R(y, z)")),
        ];
        let variable = prop_oneof![Just(v!(x)), Just(v!(y)), Just(v!(z))];
        leaf.prop_recursive(4, 32, 2, move |inner| {
            prop_oneof![
                inner.clone().prop_map(Fof::not),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l.and(r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l.implies(r)),
                (variable.clone(), inner.clone()).prop_map(|(v, f)| Fof::forall(v, f)),
                (variable.clone(), inner).prop_map(|(v, f)| Fof::exists(v, f)),
            ]
        })
    }

    proptest! {
        #[test]
        fn standardize_preserves_quantifier_count(formula in arb_quantified()) {
            let nnf = formula.implication_free().nnf().unwrap();
            let standardized = nnf.standardize();
            prop_assert_eq!(
                Fof::from(&nnf).quantifiers().len(),
                Fof::from(&standardized).quantifiers().len()
            );
        }

        #[test]
        fn standardize_binds_distinct_variables(formula in arb_quantified()) {
            let standardized = Fof::from(formula.implication_free().nnf().unwrap().standardize());
            let bound = standardized
                .quantifiers()
                .iter()
                .map(Quantifier::variable)
                .cloned()
                .collect_vec();
            prop_assert_eq!(bound.len(), bound.iter().unique().count());
            let free = standardized.free_vars();
            prop_assert!(bound.iter().all(|v| !free.contains(&v)));
        }
    }
}
