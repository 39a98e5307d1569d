/*! Runs the normalization pipeline, taking a first-order sentence to a set of clauses and
keeping the result of every stage. */
use crate::{
    parser,
    syntax::{ClauseSet, Fof, Qff},
    trace::{FAIL, NORMALIZE, STAGE},
    transform::{
        self, Nnf, Pnf, Snf, SymbolTable, ToClauseSet, ToImplicationFree, ToNnf, ToPnf, ToQff,
        ToSnf,
    },
};
use std::fmt;
use thiserror::Error;

/// Is the type of errors that abort a normalization run.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when the input text is not a well-formed sentence.
    #[error(transparent)]
    Parse(#[from] parser::Error),

    /// Is returned when a stage receives a formula outside of its input format.
    #[error(transparent)]
    Format(#[from] transform::Error),
}

/// Names a stage of the pipeline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    /// The sentence as given.
    Input,

    /// After eliminating implications.
    ImplicationFree,

    /// After pushing negations inward to the atoms.
    Nnf,

    /// After renaming bound variables apart.
    Standardized,

    /// After pulling the quantifiers to the front.
    Pnf,

    /// After replacing existential quantifiers with Skolem terms.
    Snf,

    /// After dropping the universal prefix.
    Matrix,

    /// After splitting the matrix into clauses.
    Clauses,
}

impl Stage {
    /// Returns a human readable heading for the result of the receiver.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Input => "Input Sentence:",
            Self::ImplicationFree => "After Eliminating Implication:",
            Self::Nnf => "After Moving Negation Inward:",
            Self::Standardized => "After Standardizing Variable Scope:",
            Self::Pnf => "In Prenex Normal Form:",
            Self::Snf => "After Skolemization:",
            Self::Matrix => "After Eliminating Universal Quantifiers:",
            Self::Clauses => "In CNF:",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Input => "input",
            Self::ImplicationFree => "implication_free",
            Self::Nnf => "nnf",
            Self::Standardized => "standardized",
            Self::Pnf => "pnf",
            Self::Snf => "snf",
            Self::Matrix => "matrix",
            Self::Clauses => "clauses",
        };
        write!(f, "{}", name)
    }
}

/// Holds the result of every stage of a normalization run.
#[derive(Clone, Debug)]
pub struct Normalization {
    /// Is the input sentence.
    pub input: Fof,

    /// Is the input with every implication `P → Q` replaced by `¬P ∨ Q`.
    pub implication_free: Fof,

    /// Is the negation normal form of [`Normalization::implication_free`].
    pub nnf: Nnf,

    /// Is [`Normalization::nnf`] with a distinct fresh name for every bound variable.
    pub standardized: Nnf,

    /// Is the prenex normal form of [`Normalization::standardized`].
    pub pnf: Pnf,

    /// Is the Skolem normal form of [`Normalization::pnf`].
    pub snf: Snf,

    /// Is the quantifier-free matrix of [`Normalization::snf`].
    pub matrix: Qff,

    /// Is the set of clauses of [`Normalization::matrix`].
    pub clauses: ClauseSet,

    // names minted by the run, kept for renaming the clauses apart
    symbols: SymbolTable,
}

impl Normalization {
    /// Returns the formulae produced by the stages before clause splitting, in the order of
    /// the pipeline, starting with the input.
    pub fn stages(&self) -> Vec<(Stage, Fof)> {
        vec![
            (Stage::Input, self.input.clone()),
            (Stage::ImplicationFree, self.implication_free.clone()),
            (Stage::Nnf, (&self.nnf).into()),
            (Stage::Standardized, (&self.standardized).into()),
            (Stage::Pnf, (&self.pnf).into()),
            (Stage::Snf, (&self.snf).into()),
            (Stage::Matrix, (&self.matrix).into()),
        ]
    }

    /// Returns the clauses of the run with the variables of every clause renamed apart, using
    /// names that are fresh for the run.
    pub fn clauses_renamed_apart(&self) -> ClauseSet {
        let mut symbols = self.symbols.clone();
        self.clauses.rename_apart(&mut symbols)
    }
}

/// Normalizes `formula` to a set of clauses.
///
/// **Example**:
/// ```rust
/// # use clausify_fol::syntax::Fof;
/// use clausify_fol::pipeline::normalize;
///
/// let formula: Fof = "forall x ((P(x) -> Q(x)) and exists y R(y))".parse().unwrap();
/// let normalization = normalize(&formula).unwrap();
///
/// assert_eq!("[{¬P(x1), Q(x1)}, {R(sk1)}]", normalization.clauses.to_string());
/// ```
pub fn normalize(formula: &Fof) -> Result<Normalization, Error> {
    let span = span!(tracing::Level::TRACE, NORMALIZE, input = %formula);
    let _enter = span.enter();
    run(formula).map_err(fail)
}

/// Parses `text` and normalizes the resulting sentence to a set of clauses.
pub fn normalize_str(text: &str) -> Result<Normalization, Error> {
    let span = span!(tracing::Level::TRACE, NORMALIZE, input = text);
    let _enter = span.enter();
    text.parse::<Fof>()
        .map_err(Error::from)
        .and_then(|formula| run(&formula))
        .map_err(fail)
}

fn fail(error: Error) -> Error {
    info!(event = FAIL, error = %error);
    error
}

fn log_stage(stage: Stage, result: &impl fmt::Display) {
    info!(event = STAGE, stage = %stage, formula = %result);
}

fn run(formula: &Fof) -> Result<Normalization, Error> {
    let mut symbols = SymbolTable::from_formula(formula);
    log_stage(Stage::Input, formula);

    let implication_free = formula.implication_free();
    log_stage(Stage::ImplicationFree, &implication_free);

    let nnf = implication_free.nnf()?;
    log_stage(Stage::Nnf, &nnf);

    let standardized = nnf.standardize_with(&mut symbols);
    log_stage(Stage::Standardized, &standardized);

    let pnf = standardized.pnf()?;
    log_stage(Stage::Pnf, &pnf);

    let snf = pnf.snf_with(&mut || symbols.fresh_skolem());
    log_stage(Stage::Snf, &snf);

    let matrix = snf.qff();
    log_stage(Stage::Matrix, &matrix);

    let clauses = matrix.clause_set();
    log_stage(Stage::Clauses, &clauses);

    Ok(Normalization {
        input: formula.clone(),
        implication_free,
        nnf,
        standardized,
        pnf,
        snf,
        matrix,
        clauses,
        symbols,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, fof};

    #[test]
    fn test_normalize() {
        let result = normalize(&fof!("P(x) -> Q(x)")).unwrap();
        assert_debug_string!("(not P(x)) or Q(x)", result.implication_free);
        assert_debug_string!("[{not P(x), Q(x)}]", result.clauses);

        let result = normalize(&fof!("not not P(x)")).unwrap();
        assert_debug_string!("P(x)", result.nnf);
        assert_debug_string!("[{P(x)}]", result.clauses);
    }

    #[test]
    fn normalize_stages() {
        let result = normalize_str("forall x ((P(x) -> Q(x)) and exists y R(y))").unwrap();
        let stages: Vec<String> = result
            .stages()
            .iter()
            .map(|(stage, formula)| format!("{}: {:?}", stage, formula))
            .collect();
        assert_eq!(
            vec![
                "input: forall x ((P(x) -> Q(x)) and (exists y R(y)))",
                "implication_free: forall x (((not P(x)) or Q(x)) and (exists y R(y)))",
                "nnf: forall x (((not P(x)) or Q(x)) and (exists y R(y)))",
                "standardized: forall x1 (((not P(x1)) or Q(x1)) and (exists y1 R(y1)))",
                "pnf: forall x1 (exists y1 (((not P(x1)) or Q(x1)) and R(y1)))",
                "snf: forall x1 (((not P(x1)) or Q(x1)) and R('sk1))",
                "matrix: ((not P(x1)) or Q(x1)) and R('sk1)",
            ],
            stages
        );
        assert_eq!("[{¬P(x1), Q(x1)}, {R(sk1)}]", result.clauses.to_string());
    }

    #[test]
    fn normalize_fresh_symbols_per_run() {
        let text = "forall x exists y P(x, y)";
        let first = normalize_str(text).unwrap();
        let second = normalize_str(text).unwrap();
        assert_debug_string!("[{P(x1, sk1(x1))}]", first.clauses);
        assert_eq!(first.clauses, second.clauses);
    }

    #[test]
    fn normalize_renamed_apart() {
        let result = normalize_str("forall x (P(x) and (Q(x) or R(x)))").unwrap();
        assert_debug_string!("[{P(x1)}, {Q(x1), R(x1)}]", result.clauses);
        assert_debug_string!(
            "[{P(x2)}, {Q(x3), R(x3)}]",
            result.clauses_renamed_apart()
        );
        assert_debug_string!("[{P(x1)}, {Q(x1), R(x1)}]", result.clauses);
    }

    #[test]
    fn normalize_failure() {
        assert!(matches!(
            normalize_str("P(x) and"),
            Err(Error::Parse(parser::Error::UnrecognizedEof { .. }))
        ));
        assert!(matches!(normalize_str("P(x) Q(x)"), Err(Error::Parse(_))));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn normalization_is_send_sync() {
        assert_send_sync::<Fof>();
        assert_send_sync::<Nnf>();
        assert_send_sync::<Pnf>();
        assert_send_sync::<Snf>();
        assert_send_sync::<Qff>();
        assert_send_sync::<ClauseSet>();
        assert_send_sync::<Normalization>();
    }

    #[test]
    fn normalize_concurrently() {
        let texts = [
            "forall x ((P(x) -> Q(x)) and exists y R(y))",
            "forall x exists y P(x, y)",
            "not forall x (P(x) or exists y Q(x, y))",
            "(P(a) and Q(b)) or (R(c) and S(d))",
        ];
        let summary = |n: &Normalization| format!("{:?} {:?}", n.stages(), n.clauses);
        let sequential: Vec<String> = texts
            .iter()
            .map(|text| summary(&normalize_str(text).unwrap()))
            .collect();

        let handles: Vec<_> = texts
            .iter()
            .map(|&text| {
                std::thread::spawn(move || {
                    (0..10)
                        .map(|_| normalize_str(text).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(sequential) {
            for result in handle.join().unwrap() {
                assert_eq!(expected, summary(&result));
            }
        }
    }

    #[test]
    fn stage_headings() {
        assert_eq!("After Eliminating Implication:", Stage::ImplicationFree.heading());
        assert_eq!("In CNF:", Stage::Clauses.heading());
        assert_eq!("implication_free", Stage::ImplicationFree.to_string());
    }
}
