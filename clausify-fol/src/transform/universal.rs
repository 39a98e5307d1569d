/*! Implements the elimination of universal quantifiers from formulae in Skolem normal form. */
use super::Snf;
use crate::syntax::Qff;

/// Is the trait of formulae whose quantifiers can be dropped, leaving their matrix.
pub trait ToQff {
    /// Removes the universal prefix of the receiver and returns its quantifier-free matrix.
    /// The variables of the matrix are implicitly universally quantified.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::Fof;
    /// use clausify_fol::transform::{ToNnf, ToPnf, ToQff, ToSnf};
    ///
    /// let formula: Fof = "forall x exists y (P(x) or Q(x, y))".parse().unwrap();
    /// let snf = formula.nnf().unwrap().pnf().unwrap().snf();
    ///
    /// assert_eq!("P(x) ∨ Q(x, sk1(x))", snf.qff().to_string());
    /// ```
    fn qff(&self) -> Qff;
}

impl ToQff for Snf {
    fn qff(&self) -> Qff {
        self.matrix().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, fof,
        syntax::{Fof, Formula},
        transform::{ToNnf, ToPnf, ToSnf},
        v,
    };
    use std::convert::TryFrom;

    fn qff(text: &str) -> Qff {
        fof!(text)
            .nnf()
            .unwrap()
            .standardize()
            .pnf()
            .unwrap()
            .snf()
            .qff()
    }

    #[test]
    fn test_qff() {
        assert_debug_string!("P(x)", qff("P(x)"));
        assert_debug_string!("P(x1)", qff("forall x P(x)"));
        assert_debug_string!(
            "((not P(x1)) or Q(x1)) and R('sk1)",
            qff("forall x ((not P(x) or Q(x)) and exists y R(y))")
        );
        assert_debug_string!(
            "P(x1, z1) and Q(sk1(x1), z1)",
            qff("forall x exists y forall z (P(x, z) and Q(y, z))")
        );
    }

    #[test]
    fn qff_removes_every_quantifier() {
        let snf = Snf::try_from(fof!("forall x forall y (P(x) or Q(y))")).unwrap();
        let matrix = snf.qff();
        assert!(Fof::from(&matrix).quantifiers().is_empty());
        assert_eq!(vec![&v!(x), &v!(y)], matrix.free_vars());
    }
}
