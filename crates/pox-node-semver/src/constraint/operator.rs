//! Comparator tokens that may prefix a range term

use std::fmt;
use std::str::FromStr;

use crate::error::SyntaxError;

/// Comparison operators for range terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=), same as no operator
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Patch-level updates (~, ~>, ~=)
    Tilde,
    /// Updates that keep the left-most non-zero component (^)
    Caret,
}

const TOKENS: [(&str, Operator); 9] = [
    ("<=", Operator::LessThanOrEqual),
    (">=", Operator::GreaterThanOrEqual),
    ("~>", Operator::Tilde),
    ("~=", Operator::Tilde),
    ("<", Operator::LessThan),
    (">", Operator::GreaterThan),
    ("=", Operator::Equal),
    ("~", Operator::Tilde),
    ("^", Operator::Caret),
];

impl Operator {
    /// Split the leading run of operator characters off a term.
    ///
    /// A run that is not one of the known tokens is an `InvalidOperator`.
    pub fn split_prefix(term: &str) -> Result<(Option<Operator>, &str), SyntaxError> {
        let end = term
            .find(|c: char| !matches!(c, '<' | '>' | '=' | '~' | '^' | '!'))
            .unwrap_or(term.len());
        if end == 0 {
            return Ok((None, term));
        }
        let operator = term[..end].parse::<Operator>()?;
        Ok((Some(operator), &term[end..]))
    }

    /// Get the canonical string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Tilde => "~",
            Operator::Caret => "^",
        }
    }
}

impl FromStr for Operator {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TOKENS
            .iter()
            .find(|(token, _)| *token == s)
            .map(|(_, operator)| *operator)
            .ok_or_else(|| SyntaxError::InvalidOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
