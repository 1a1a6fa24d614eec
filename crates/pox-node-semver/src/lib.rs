//! Semantic versioning library compatible with the npm range dialect
//!
//! This crate provides semantic version parsing, ordering, and range algebra
//! (inclusion, intersection, union, restrictiveness) for ranges written the way
//! node-semver writes them: `^1.2.3`, `~1.2`, `1.x`, `1.2.3 - 2.3.4`, `>=1.0.0 <2.0.0 || 3.x`.

pub mod constraint;
mod comparator;
mod error;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use constraint::{Bound, Operator, VersionRange, MATCH_ALL, MATCH_NONE};
pub use error::{SemverError, SyntaxError, ValidationError};
pub use semver::Semver;
pub use version::{Identifier, Version, MAX, MIN, ZERO};
