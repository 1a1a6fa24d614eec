//! Version comparison utilities

use crate::constraint::Operator;
use crate::version::Version;

/// Comparator for comparing version strings
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<=", version2)
    }

    /// Check if version1 == version2 by precedence
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "==", version2)
    }

    /// Check if version1 != version2 by precedence
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator.
    ///
    /// Accepts the range comparators `>`, `>=`, `<`, `<=` and `=`, plus the
    /// `==`, `!=` and `<>` aliases that only make sense between two versions.
    /// Build metadata is ignored. Returns false when either version does not
    /// parse or the operator is unknown.
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        let (Ok(v1), Ok(v2)) = (Version::parse(version1), Version::parse(version2)) else {
            return false;
        };
        let ordering = v1.compare_to(&v2);

        match operator {
            "==" => return ordering.is_eq(),
            "!=" | "<>" => return ordering.is_ne(),
            _ => {}
        }

        match operator.parse::<Operator>() {
            Ok(Operator::GreaterThan) => ordering.is_gt(),
            Ok(Operator::GreaterThanOrEqual) => ordering.is_ge(),
            Ok(Operator::LessThan) => ordering.is_lt(),
            Ok(Operator::LessThanOrEqual) => ordering.is_le(),
            Ok(Operator::Equal) => ordering.is_eq(),
            Ok(Operator::Tilde | Operator::Caret) | Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than("1.25.0", "1.24.0"));
        assert!(!Comparator::greater_than("1.25.0", "1.25.0"));
        assert!(!Comparator::greater_than("1.25.0", "1.26.0"));
        assert!(Comparator::greater_than("1.25.0", "1.25.0-rc.1"));
        assert!(!Comparator::greater_than("1.25", "1.24.0"));
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.24.0"));
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.25.0"));
        assert!(!Comparator::greater_than_or_equal_to("1.25.0", "1.26.0"));
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than("1.25.0", "1.24.0"));
        assert!(!Comparator::less_than("1.25.0", "1.25.0"));
        assert!(Comparator::less_than("1.25.0", "1.26.0"));
        assert!(Comparator::less_than("1.0.0-alpha.1", "1.0.0-alpha.beta"));
        assert!(!Comparator::less_than("dev-foo", "1.26.0"));
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to("1.25.0", "1.24.0"));
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.25.0"));
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.26.0"));
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to("1.25.0", "1.24.0"));
        assert!(Comparator::equal_to("1.25.0", "1.25.0"));
        assert!(Comparator::equal_to("1.25.0+build.1", "1.25.0+build.2"));
        assert!(!Comparator::equal_to("1.25.0-rc.1", "1.25.0"));
    }

    #[test]
    fn test_not_equal_to() {
        assert!(Comparator::not_equal_to("1.25.0", "1.24.0"));
        assert!(!Comparator::not_equal_to("1.25.0", "1.25.0"));
        assert!(Comparator::not_equal_to("1.25.0", "1.26.0"));
    }

    #[test]
    fn test_compare() {
        // Greater than
        assert!(Comparator::compare("1.25.0", ">", "1.24.0"));
        assert!(!Comparator::compare("1.25.0", ">", "1.25.0"));

        // Greater than or equal
        assert!(Comparator::compare("1.25.0", ">=", "1.25.0"));
        assert!(!Comparator::compare("1.25.0", ">=", "1.26.0"));

        // Less than
        assert!(Comparator::compare("1.25.0", "<", "1.26.0"));
        assert!(!Comparator::compare("1.25.0", "<", "1.25.0"));

        // Less than or equal
        assert!(Comparator::compare("1.25.0", "<=", "1.25.0"));
        assert!(!Comparator::compare("1.25.0", "<=", "1.24.0"));

        // Equal, with = alias
        assert!(Comparator::compare("1.25.0", "==", "1.25.0"));
        assert!(Comparator::compare("1.25.0", "=", "1.25.0"));
        assert!(!Comparator::compare("1.25.0", "=", "1.26.0"));

        // Not equal, with <> alias
        assert!(Comparator::compare("1.25.0", "!=", "1.24.0"));
        assert!(Comparator::compare("1.25.0", "<>", "1.24.0"));
        assert!(!Comparator::compare("1.25.0", "<>", "1.25.0"));

        // Range-only and unknown operators
        assert!(!Comparator::compare("1.25.0", "~", "1.25.0"));
        assert!(!Comparator::compare("1.25.0", "~>", "1.25.0"));
        assert!(!Comparator::compare("1.25.0", "^", "1.25.0"));
        assert!(!Comparator::compare("1.25.0", "=>", "1.24.0"));
    }

    #[test]
    fn test_compare_pre_releases() {
        assert!(Comparator::compare("1.25.0-beta.2", "<", "1.25.0-beta.11"));
        assert!(Comparator::compare("1.25.0-beta", "<", "1.25.0-rc"));
        assert!(Comparator::compare("1.25.0-1", "<", "1.25.0-alpha"));
        assert!(Comparator::compare("1.25.0-alpha", "<", "1.25.0-alpha.1"));
    }
}
