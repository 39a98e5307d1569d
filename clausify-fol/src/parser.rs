//! Implements a parser for first-order sentences in the keyword syntax.
//!
//! The module provides a parser for first-order formulae by implementing [`FromStr`] for
//! [`Fof`]. The parser is often used implicitly through [`parse`] method.
//!
//! **Example**:
//! The following example parses a string into a [`Fof`]:
//! ```rust
//! use clausify_fol::syntax::Fof;
//!
//! // keyword notation:
//! let formula: Fof = "forall x ((P(x) -> Q(x)) and exists y R(y))".parse().unwrap();
//! assert_eq!("∀ x. ((P(x) → Q(x)) ∧ (∃ y. R(y)))", formula.to_string());
//!
//! // compact and mathematical notations are accepted as well:
//! let compact: Fof = "! x ((P(x) -> Q(x)) & ? y R(y))".parse().unwrap();
//! let math: Fof = "∀ x ((P(x) → Q(x)) ∧ ∃ y R(y))".parse().unwrap();
//! assert_eq!(formula, compact);
//! assert_eq!(formula, math);
//! ```
//!
//! Like `not`, a quantifier binds tighter than every binary connective, so its body extends
//! over a single atom, negation, quantifier or parenthesized formula:
//! ```rust
//! # use clausify_fol::syntax::Fof;
//! let narrow: Fof = "forall x P(x) -> Q(x)".parse().unwrap();
//! let wide: Fof = "forall x (P(x) -> Q(x))".parse().unwrap();
//!
//! assert_eq!("(∀ x. P(x)) → Q(x)", narrow.to_string());
//! assert_eq!("∀ x. (P(x) → Q(x))", wide.to_string());
//! ```
//!
//! [`Fof`]: crate::syntax::Fof
//! [`FromStr`]: std::str::FromStr
//! [`parse`]: ::std::str#parse
use super::syntax::Fof;
use lalrpop_util::ParseError;
use std::str::FromStr;
use thiserror::Error;

lalrpop_mod!(#[allow(clippy::all)] pub grammar); // synthesized by LALRPOP

#[derive(PartialEq, Debug)]
pub enum TokenType {
    Comma,
    LParen,
    RParen,
    Not,
    And,
    Or,
    Implies,
    Forall,
    Exists,
    Lower,
    Upper,
    Const,
    Unknown,
}

impl<S: AsRef<str>> From<S> for TokenType {
    fn from(s: S) -> Self {
        // expected tokens are reported with their surrounding quotes
        match s.as_ref().trim_matches('"') {
            "_COMMA_" => Self::Comma,
            "_LPAREN_" => Self::LParen,
            "_RPAREN_" => Self::RParen,
            "_NOT_" => Self::Not,
            "_AND_" => Self::And,
            "_OR_" => Self::Or,
            "_IMPLIES_" => Self::Implies,
            "_FORALL_" => Self::Forall,
            "_EXISTS_" => Self::Exists,
            "_LOWER_" => Self::Lower,
            "_UPPER_" => Self::Upper,
            "_CONST_" => Self::Const,
            _ => Self::Unknown,
        }
    }
}

impl ToString for TokenType {
    fn to_string(&self) -> String {
        match self {
            Self::Comma => "`,`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Not => "`not`",
            Self::And => "`and`",
            Self::Or => "`or`",
            Self::Implies => "`->`",
            Self::Forall => "`forall`",
            Self::Exists => "`exists`",
            Self::Lower => "`lowercase identifier`",
            Self::Upper => "`uppercase identifier`",
            Self::Const => "`constant identifier`",
            Self::Unknown => "`unknown token`",
        }
        .into()
    }
}

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found}` at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnrecognizedToken {
        position: Position,
        expected: Vec<TokenType>,
        found: String,
    },
    #[error("invalid token at line {}, column {}", (*.position).line, (*.position).column)]
    InvalidToken { position: Position },
    #[error("unexpected end of input at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnrecognizedEof {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected token `{found}` at line {}, column {}", (*.position).line, (*.position).column)]
    ExtraToken { position: Position, found: String },
}

impl Error {
    /// Returns the position in the source where the error occurred.
    pub fn position(&self) -> &Position {
        match self {
            Self::UnrecognizedToken { position, .. }
            | Self::InvalidToken { position }
            | Self::UnrecognizedEof { position, .. }
            | Self::ExtraToken { position, .. } => position,
        }
    }

    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }
}

/// Is a line and column position in the parsed source, both starting at 1.
#[derive(PartialEq, Debug)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

// Stores source information to retrieve token positions in the source.
struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    fn position(&self, location: usize) -> Position {
        let line = self
            .lines
            .iter()
            .position(|l| location < *l)
            .unwrap_or_else(|| self.lines.len());
        let column = self.source[self.lines[line - 1]..location].chars().count() + 1;

        Position { line, column }
    }

    fn convert_error<T: ToString>(&self, error: ParseError<usize, T, Error>) -> Error {
        match error {
            ParseError::InvalidToken { location } => Error::InvalidToken {
                position: self.position(location),
            },
            ParseError::UnrecognizedEOF { location, expected } => Error::UnrecognizedEof {
                position: self.position(location),
                expected: expected.into_iter().map(From::from).collect(),
            },
            ParseError::UnrecognizedToken { token, expected } => Error::UnrecognizedToken {
                position: self.position(token.0),
                expected: expected.into_iter().map(From::from).collect(),
                found: token.1.to_string(),
            },
            ParseError::ExtraToken { token } => Error::ExtraToken {
                position: self.position(token.0),
                found: token.1.to_string(),
            },
            ParseError::User { error } => error,
        }
    }
}

impl FromStr for Fof {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        grammar::FormulaParser::new()
            .parse(s)
            .map_err(|e| info.convert_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, atom, c, pred, term, v};

    #[test]
    fn lower_ident() {
        assert_eq!(grammar::LowerParser::new().parse("_").unwrap(), "_");
        assert_eq!(grammar::LowerParser::new().parse("a").unwrap(), "a");
        assert_eq!(grammar::LowerParser::new().parse("_ab").unwrap(), "_ab");
        assert_eq!(grammar::LowerParser::new().parse("aB").unwrap(), "aB");
        assert_eq!(grammar::LowerParser::new().parse("x1").unwrap(), "x1");
        assert_eq!(grammar::LowerParser::new().parse("nota").unwrap(), "nota");
        assert_eq!(grammar::LowerParser::new().parse("origin").unwrap(), "origin");

        assert!(grammar::LowerParser::new().parse("not").is_err());
        assert!(grammar::LowerParser::new().parse("or").is_err());
        assert!(grammar::LowerParser::new().parse("forall").is_err());
        assert!(grammar::LowerParser::new().parse("B").is_err());
        assert!(grammar::LowerParser::new().parse("123").is_err());
    }

    #[test]
    fn upper_ident() {
        assert_eq!(grammar::UpperParser::new().parse("A").unwrap(), "A");
        assert_eq!(grammar::UpperParser::new().parse("A_B").unwrap(), "A_B");
        assert_eq!(grammar::UpperParser::new().parse("Duch3Ss").unwrap(), "Duch3Ss");

        assert!(grammar::UpperParser::new().parse("b").is_err());
        assert!(grammar::UpperParser::new().parse("_AB").is_err());
        assert!(grammar::UpperParser::new().parse("AB!").is_err());
    }

    #[test]
    fn var() {
        assert_eq!(grammar::VarParser::new().parse("x").unwrap(), v!(x));
        assert_eq!(grammar::VarParser::new().parse("   x").unwrap(), v!(x));

        assert!(grammar::VarParser::new().parse("'a").is_err());
        assert!(grammar::VarParser::new().parse("B").is_err());
    }

    #[test]
    fn r#const() {
        assert_eq!(grammar::ConstParser::new().parse("'a").unwrap(), c!(a));
        assert_eq!(grammar::ConstParser::new().parse("   'a").unwrap(), c!(a));
        assert_eq!(grammar::ConstParser::new().parse("'a_b").unwrap(), c!(a_b));

        assert!(grammar::ConstParser::new().parse("x").is_err());
        assert!(grammar::ConstParser::new().parse("''a").is_err());
        assert!(grammar::ConstParser::new().parse("'B").is_err());
        assert!(grammar::ConstParser::new().parse("'   a").is_err());
    }

    #[test]
    fn pred() {
        assert_eq!(grammar::PredParser::new().parse("P").unwrap(), pred!(P));
        assert!(grammar::PredParser::new().parse("p").is_err());
    }

    #[test]
    fn term() {
        assert_eq!(grammar::TermParser::new().parse("x").unwrap(), term!(x));
        assert_eq!(grammar::TermParser::new().parse("'a").unwrap(), term!(@a));
        assert!(grammar::TermParser::new().parse("f(x)").is_err());
    }

    #[test]
    fn atom() {
        assert_eq!(
            "P(x, 'a)".parse::<Fof>().unwrap(),
            Fof::from(atom!(P(x, @a)))
        );
        assert_eq!("P()".parse::<Fof>().unwrap(), Fof::from(atom!(P())));
        assert_eq!("P".parse::<Fof>().unwrap(), Fof::from(atom!(P())));
        assert_eq!(
            "P(x, y,)".parse::<Fof>().unwrap(),
            Fof::from(atom!(P(x, y)))
        );
    }

    #[test]
    fn formula() {
        assert_debug_string!("not P(x)", "not P(x)".parse::<Fof>().unwrap());
        assert_debug_string!("not P(x)", "~P(x)".parse::<Fof>().unwrap());
        assert_debug_string!("not P(x)", "¬P(x)".parse::<Fof>().unwrap());
        assert_debug_string!("not (not P(x))", "not not P(x)".parse::<Fof>().unwrap());
        assert_debug_string!(
            "(P(x) and Q(x)) and R(x)",
            "P(x) and Q(x) and R(x)".parse::<Fof>().unwrap()
        );
        assert_debug_string!(
            "(P(x) or Q(x)) or R(x)",
            "P(x) | Q(x) ∨ R(x)".parse::<Fof>().unwrap()
        );
        assert_debug_string!(
            "P(x) -> (Q(x) -> R(x))",
            "P(x) -> Q(x) → R(x)".parse::<Fof>().unwrap()
        );
        assert_debug_string!(
            "((P(x) and Q(x)) or (not R(x))) -> S(x)",
            "P(x) and Q(x) or not R(x) -> S(x)".parse::<Fof>().unwrap()
        );
        assert_debug_string!(
            "(P(x) or (Q(x) and R(x))) -> S(x)",
            "P(x) or Q(x) and R(x) -> S(x)".parse::<Fof>().unwrap()
        );
    }

    #[test]
    fn quantifiers() {
        assert_debug_string!("forall x P(x)", "forall x P(x)".parse::<Fof>().unwrap());
        assert_debug_string!("exists x P(x)", "? x P(x)".parse::<Fof>().unwrap());
        assert_debug_string!(
            "(forall x P(x)) and Q(x)",
            "∀ x P(x) ∧ Q(x)".parse::<Fof>().unwrap()
        );
        assert_debug_string!(
            "(forall x P(x)) -> Q(x)",
            "forall x P(x) -> Q(x)".parse::<Fof>().unwrap()
        );
        assert_debug_string!(
            "forall x (P(x) and Q(x))",
            "forall x (P(x) and Q(x))".parse::<Fof>().unwrap()
        );
        assert_debug_string!(
            "forall x (exists y (not R(x, y)))",
            "! x ∃ y ~R(x, y)".parse::<Fof>().unwrap()
        );
        assert_debug_string!(
            "forall x ((P(x) -> Q(x)) and (exists y R(y)))",
            "forall x ((P(x) -> Q(x)) and exists y R(y))"
                .parse::<Fof>()
                .unwrap()
        );
    }

    #[test]
    fn nested_parens() {
        assert_debug_string!("P(x)", "(((P(x))))".parse::<Fof>().unwrap());
        assert_debug_string!(
            "not (P(x) or Q(y))",
            "not ((P(x)) or (Q(y)))".parse::<Fof>().unwrap()
        );
    }

    #[test]
    fn failure() {
        {
            let parsed: Result<Fof, Error> = "P(x".parse();
            match parsed.err().unwrap() {
                Error::UnrecognizedEof { position, expected } => {
                    assert_eq!(Position { line: 1, column: 4 }, position);
                    assert!(expected.contains(&TokenType::Comma));
                    assert!(expected.contains(&TokenType::RParen));
                }
                error => panic!("unexpected error: {}", error),
            }
        }
        {
            let parsed: Result<Fof, Error> = "P(x) and".parse();
            let message = parsed.err().unwrap().to_string();
            assert!(message.starts_with("unexpected end of input at line 1, column 9; expecting"));
            assert!(message.contains("`not`"));
            assert!(message.contains("`uppercase identifier`"));
        }
        {
            let parsed: Result<Fof, Error> = "P(x) Q(x)".parse();
            let error = parsed.err().unwrap();
            assert!(matches!(error, Error::UnrecognizedToken { .. }));
            assert_eq!(&Position { line: 1, column: 6 }, error.position());
        }
        {
            let parsed: Result<Fof, Error> = "P(x)\n  and Q(#)".parse();
            assert_eq!(
                Error::InvalidToken {
                    position: Position { line: 2, column: 9 },
                },
                parsed.err().unwrap()
            );
        }
        {
            let parsed: Result<Fof, Error> = "P(x))".parse();
            assert!(parsed.is_err());
        }
        {
            let parsed: Result<Fof, Error> = "forall P(x)".parse();
            assert!(parsed.is_err());
        }
        {
            let parsed: Result<Fof, Error> = "P(f(x))".parse();
            assert!(parsed.is_err());
        }
        {
            let parsed: Result<Fof, Error> = "".parse();
            assert!(matches!(parsed, Err(Error::UnrecognizedEof { .. })));
        }
    }
}
