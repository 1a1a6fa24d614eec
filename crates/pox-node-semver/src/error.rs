//! Error types for version and range construction

use thiserror::Error;

/// A version was built from components or qualifiers that violate the semver rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("negative numbers not accepted in version")]
    NegativeComponent,
    #[error("illegal characters in {part} \"{text}\"")]
    IllegalCharacters { part: &'static str, text: String },
}

/// Input text did not match the version or range grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("the string \"{0}\" does not represent a valid semantic version")]
    InvalidVersion(String),
    #[error("\"{0}\" is not a valid version range")]
    InvalidRange(String),
    #[error("illegal version triplet \"{0}\"")]
    IllegalTriplet(String),
    #[error("invalid operator \"{0}\"")]
    InvalidOperator(String),
}

impl SyntaxError {
    /// The substring of the input that could not be parsed
    pub fn offending(&self) -> &str {
        match self {
            SyntaxError::InvalidVersion(text)
            | SyntaxError::InvalidRange(text)
            | SyntaxError::IllegalTriplet(text)
            | SyntaxError::InvalidOperator(text) => text,
        }
    }
}

/// Any error produced while building a version or a range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
