/*! Defines the per-run table that mints fresh variable and Skolem symbols. */
use crate::syntax::{Fof, F, V};
use std::collections::{HashMap, HashSet};

/// Mints fresh variable names (`x` to `x1`, `x2`, ...) and fresh Skolem symbols (`sk1`,
/// `sk2`, ...) for a single normalization run.
///
/// A table seeded by [`SymbolTable::from_formula`] never returns a name that occurs in the
/// seeding formula, so renaming with its fresh names cannot capture existing symbols.
#[derive(Clone, Default, Debug)]
pub struct SymbolTable {
    counters: HashMap<String, usize>,
    skolem_counter: usize,
    used: HashSet<String>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a symbol table that treats every variable, constant and function symbol of
    /// `formula` as used.
    ///
    /// **Example**:
    /// ```rust
    /// # use clausify_fol::syntax::{Fof, V};
    /// use clausify_fol::transform::SymbolTable;
    ///
    /// let formula: Fof = "forall x (P(x, x1) and Q('sk1))".parse().unwrap();
    /// let mut symbols = SymbolTable::from_formula(&formula);
    ///
    /// assert_eq!(V::from("x2"), symbols.fresh_var(&V::from("x")));
    /// assert_eq!("sk2", symbols.fresh_skolem().name());
    /// ```
    pub fn from_formula(formula: &Fof) -> Self {
        let mut table = Self::new();
        formula
            .variables()
            .into_iter()
            .for_each(|v| table.reserve(v.name()));
        formula
            .term_symbols()
            .into_iter()
            .for_each(|s| table.reserve(s));
        table
    }

    /// Marks `name` as used.
    pub fn reserve<S: Into<String>>(&mut self, name: S) {
        self.used.insert(name.into());
    }

    /// Returns a fresh variable, made of the base name of `variable` (its name without
    /// trailing digits) followed by the next unused counter for that base.
    pub fn fresh_var(&mut self, variable: &V) -> V {
        let name = variable.name();
        let base = match name.trim_end_matches(|c: char| c.is_ascii_digit()) {
            "" => name,
            base => base,
        };
        let counter = self.counters.entry(base.to_string()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{}{}", base, counter);
            if self.used.insert(candidate.clone()) {
                return candidate.into();
            }
        }
    }

    /// Returns a fresh Skolem symbol.
    pub fn fresh_skolem(&mut self) -> F {
        loop {
            self.skolem_counter += 1;
            let candidate = format!("sk{}", self.skolem_counter);
            if self.used.insert(candidate.clone()) {
                return candidate.into();
            }
        }
    }
}
