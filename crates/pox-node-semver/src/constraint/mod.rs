//! Bounds, their algebra and version ranges

mod algebra;
mod bound;
mod operator;
mod version_range;

pub use bound::Bound;
pub use operator::Operator;
pub use version_range::{VersionRange, MATCH_ALL, MATCH_NONE};
