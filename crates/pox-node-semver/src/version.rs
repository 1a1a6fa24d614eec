//! Semantic version value type
//!
//! Versions follow "Semantic Versioning 2.0": a numeric triplet, an optional
//! pre-release suffix that takes part in ordering and an optional build suffix
//! that only takes part in strict equality.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{SemverError, ValidationError};
use crate::version_parser;

lazy_static! {
    static ref PRE_RELEASE_RE: Regex = Regex::new(
        r"^(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*))*$"
    ).unwrap();

    static ref BUILD_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*$").unwrap();

    /// The lowest possible version, `0.0.0` with an empty pre-release
    pub static ref MIN: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
        pre_release: Some(Vec::new()),
        build: None,
    };

    /// The highest possible version
    pub static ref MAX: Version = Version::new(u64::MAX, u64::MAX, u64::MAX);

    /// Plain `0.0.0`
    pub static ref ZERO: Version = Version::new(0, 0, 0);
}

/// A dot-separated segment of a pre-release suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(segment: &str) -> Self {
        if segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = segment.parse() {
                return Identifier::Numeric(n);
            }
        }
        Identifier::AlphaNumeric(segment.to_string())
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// An immutable semantic version.
///
/// `PartialEq` is strict and includes the build suffix. Ordering ignores the
/// build suffix, so two versions that only differ in build are incomparable
/// through `PartialOrd`; use [`Version::compare_to`] for precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<Vec<Identifier>>,
    build: Option<Vec<String>>,
}

impl Version {
    /// Create a stable version without build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Create a version with pre-release and build suffixes given as dot-separated
    /// text. Empty text means the suffix is absent.
    pub fn with_qualifiers(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: &str,
        build: &str,
    ) -> Result<Self, ValidationError> {
        let pre_release = if pre_release.is_empty() {
            None
        } else if PRE_RELEASE_RE.is_match(pre_release) {
            Some(pre_release.split('.').map(Identifier::parse).collect())
        } else {
            return Err(ValidationError::IllegalCharacters {
                part: "pre-release",
                text: pre_release.to_string(),
            });
        };

        let build = if build.is_empty() {
            None
        } else if BUILD_RE.is_match(build) {
            Some(build.split('.').map(str::to_string).collect())
        } else {
            return Err(ValidationError::IllegalCharacters {
                part: "build",
                text: build.to_string(),
            });
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// Parse a version literal such as `1.2.3-rc.1+build.5`
    pub fn parse(text: &str) -> Result<Self, SemverError> {
        version_parser::parse_version(text)
    }

    /// Parse a version literal that is known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when `text` is not a valid version.
    pub fn must_parse(text: &str) -> Self {
        match Self::parse(text) {
            Ok(version) => version,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release suffix without the leading `-`
    pub fn pre_release(&self) -> Option<String> {
        self.pre_release.as_deref().map(|parts| join(parts))
    }

    /// The build suffix without the leading `+`
    pub fn build(&self) -> Option<String> {
        self.build.as_deref().map(|parts| join(parts))
    }

    /// Compare by precedence. Build metadata is ignored.
    pub fn compare_to(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_releases(&self.pre_release, &other.pre_release))
    }

    /// True if major, minor and patch are equal
    pub fn triplet_equals(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }

    /// True when the version has no pre-release suffix
    pub fn is_stable(&self) -> bool {
        self.pre_release.is_none()
    }

    /// The next patch version with pre-release and build stripped
    pub fn next_patch(&self) -> Version {
        Version::new(self.major, self.minor, self.patch.saturating_add(1))
    }

    /// This version with the pre-release stripped. The build suffix is kept.
    pub fn to_stable(&self) -> Version {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release: None,
            build: self.build.clone(),
        }
    }
}

fn compare_pre_releases(a: &Option<Vec<Identifier>>, b: &Option<Vec<Identifier>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a
            .iter()
            .zip(b)
            .map(|(x, y)| x.cmp(y))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or_else(|| a.len().cmp(&b.len())),
    }
}

fn join<T: fmt::Display>(parts: &[T]) -> String {
    parts.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(".")
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare_to(other) {
            Ordering::Equal if self.build != other.build => None,
            ordering => Some(ordering),
        }
    }
}

impl TryFrom<(i64, i64, i64)> for Version {
    type Error = ValidationError;

    fn try_from((major, minor, patch): (i64, i64, i64)) -> Result<Self, Self::Error> {
        let component = |n: i64| u64::try_from(n).map_err(|_| ValidationError::NegativeComponent);
        Ok(Version::new(component(major)?, component(minor)?, component(patch)?))
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", join(pre_release))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", join(build))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxError;

    fn v(text: &str) -> Version {
        Version::must_parse(text)
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(v("1.0.0").to_string(), "1.0.0");
        assert_eq!(v("1.2.3-rc.1").to_string(), "1.2.3-rc.1");
        assert_eq!(v("1.2.3-rc.1+build.5").to_string(), "1.2.3-rc.1+build.5");
        assert_eq!(v("1.2.3+001").to_string(), "1.2.3+001");
        assert_eq!(v("10.20.30").major(), 10);
        assert_eq!(v("10.20.30").minor(), 20);
        assert_eq!(v("10.20.30").patch(), 30);
        assert_eq!(v("1.2.3-beta-1.x").pre_release(), Some("beta-1.x".to_string()));
        assert_eq!(v("1.2.3").pre_release(), None);
        assert_eq!(v("1.2.3+exp.sha").build(), Some("exp.sha".to_string()));
    }

    #[test]
    fn test_parse_fails() {
        for text in ["", "1", "1.2", "1.2.x", "v1.2.3", "01.2.3", "1.02.3", "1.2.3-", "1.2.3-01", "1.2.3+", "1.2.3 ", "1.2.3-a..b", "1.2.3.4"] {
            let err = Version::parse(text).unwrap_err();
            assert!(matches!(err, SemverError::Syntax(_)), "{} should be a syntax error", text);
        }

        let err = Version::parse("99999999999999999999.0.0").unwrap_err();
        assert!(matches!(err, SemverError::Syntax(SyntaxError::IllegalTriplet(_))));
    }

    #[test]
    fn test_with_qualifiers_validation() {
        let version = Version::with_qualifiers(1, 2, 3, "alpha.1", "sha.0a1").unwrap();
        assert_eq!(version.to_string(), "1.2.3-alpha.1+sha.0a1");

        let err = Version::with_qualifiers(1, 2, 3, "alpha!", "").unwrap_err();
        assert_eq!(
            err,
            ValidationError::IllegalCharacters {
                part: "pre-release",
                text: "alpha!".to_string()
            }
        );

        assert!(Version::with_qualifiers(1, 2, 3, "01", "").is_err());
        assert!(Version::with_qualifiers(1, 2, 3, "", "01").is_ok());
        assert!(Version::with_qualifiers(1, 2, 3, "", "a_b").is_err());
    }

    #[test]
    fn test_negative_components() {
        assert_eq!(Version::try_from((-1, 0, 0)), Err(ValidationError::NegativeComponent));
        assert_eq!(Version::try_from((1, 0, -3)), Err(ValidationError::NegativeComponent));
        assert_eq!(Version::try_from((1, 2, 3)), Ok(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_ordering() {
        let ordered = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "1.0.1",
            "1.1.0",
            "2.0.0",
        ];
        for pair in ordered.windows(2) {
            assert_eq!(v(pair[0]).compare_to(&v(pair[1])), Ordering::Less, "{} < {}", pair[0], pair[1]);
            assert!(v(pair[0]) < v(pair[1]));
            assert!(v(pair[1]) > v(pair[0]));
        }

        assert!(v("1.0.0-rc1") < v("1.0.0"));
        assert!(v("1.0.0-2") < v("1.0.0-10"));
        assert!(v("1.0.0-10") < v("1.0.0-a"));
    }

    #[test]
    fn test_build_ignored_by_ordering_only() {
        let a = v("1.0.0+a");
        let b = v("1.0.0+b");
        assert_eq!(a.compare_to(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(a, v("1.0.0+a"));
        assert_eq!(a.partial_cmp(&v("1.0.0+a")), Some(Ordering::Equal));
    }

    #[test]
    fn test_triplet_equals() {
        assert!(v("1.2.3-alpha").triplet_equals(&v("1.2.3+build")));
        assert!(!v("1.2.3").triplet_equals(&v("1.2.4")));
    }

    #[test]
    fn test_next_patch_and_to_stable() {
        assert_eq!(v("1.0.0").next_patch().to_string(), "1.0.1");
        assert_eq!(v("1.0.0-rc1+b7").next_patch().to_string(), "1.0.1");
        assert_eq!(v("1.0.0-rc1").to_stable().to_string(), "1.0.0");
        assert_eq!(v("1.0.0-rc1+b7").to_stable().to_string(), "1.0.0+b7");
        assert!(v("1.0.0-rc1").to_stable().is_stable());
        assert!(!v("1.0.0-rc1").is_stable());
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(MIN.to_string(), "0.0.0-");
        assert!(!MIN.is_stable());
        assert!(*MIN < v("0.0.0-0"));
        assert!(*MIN < v("0.0.0-alpha"));
        assert!(*MIN < *ZERO);
        assert_eq!(ZERO.to_string(), "0.0.0");
        assert!(MAX.is_stable());
        assert!(v("99999.0.0") < *MAX);
        assert_eq!(MAX.next_patch(), *MAX);
    }

    #[test]
    fn test_large_numeric_identifier_is_alphanumeric() {
        let version = v("1.0.0-18446744073709551616");
        assert!(version > v("1.0.0-18446744073709551615"));
    }
}
