//! VersionRange - an OR-combination of bounds

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use super::bound::Bound;
use crate::error::SemverError;
use crate::version::Version;
use crate::version_parser;

lazy_static! {
    /// Range admitting every version, pre-releases included
    pub static ref MATCH_ALL: VersionRange = VersionRange {
        original: "*".to_string(),
        alternatives: vec![Bound::lowest_lower()],
    };

    /// Range admitting no version at all
    pub static ref MATCH_NONE: VersionRange = VersionRange {
        original: "<0.0.0".to_string(),
        alternatives: vec![Bound::lowest_upper()],
    };
}

/// An immutable set of versions, expressed as disjoint alternative bounds
#[derive(Debug, Clone)]
pub struct VersionRange {
    original: String,
    alternatives: Vec<Bound>,
}

impl VersionRange {
    /// Build a range from alternative bounds, merging the ones that overlap or touch.
    ///
    /// `original` is the text the range was parsed from, empty for computed ranges.
    pub(crate) fn new(original: &str, alternatives: Vec<Bound>) -> Self {
        let alternatives = normalize(alternatives);
        if alternatives.is_empty() {
            if original.is_empty() {
                return MATCH_NONE.clone();
            }
            return VersionRange {
                original: original.to_string(),
                alternatives: MATCH_NONE.alternatives.clone(),
            };
        }

        VersionRange {
            original: original.to_string(),
            alternatives,
        }
    }

    /// Parse a range expression such as `^1.2.3 || >=2.5.0 <3`.
    ///
    /// Empty or whitespace-only text yields `Ok(None)`, meaning no constraint.
    pub fn parse(text: &str) -> Result<Option<Self>, SemverError> {
        match version_parser::parse_range(text) {
            Ok(Some(alternatives)) => Ok(Some(VersionRange::new(text, alternatives))),
            Ok(None) => Ok(None),
            Err(err) => {
                log::debug!("Failed to parse version range {:?}: {}", text, err);
                Err(err)
            }
        }
    }

    /// Parse a range expression that is known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when `text` is not a valid range or is empty.
    pub fn must_parse(text: &str) -> Self {
        match Self::parse(text) {
            Ok(Some(range)) => range,
            Ok(None) => panic!("empty version range"),
            Err(err) => panic!("{}", err),
        }
    }

    /// Range that admits exactly one version
    pub fn exact(version: Version) -> Self {
        VersionRange {
            original: String::new(),
            alternatives: vec![Bound::Exact(version)],
        }
    }

    /// Range between two versions with explicit edge exclusivity
    pub fn from_versions(start: &Version, exclude_start: bool, end: &Version, exclude_end: bool) -> Self {
        let lower = if exclude_start {
            Bound::GreaterThan(start.clone())
        } else {
            Bound::GreaterOrEqual(start.clone())
        };
        let upper = if exclude_end {
            Bound::LessThan(end.clone())
        } else {
            Bound::LessOrEqual(end.clone())
        };

        match lower.intersection(&upper) {
            Some(bound) => VersionRange::new("", vec![bound]),
            None => MATCH_NONE.clone(),
        }
    }

    /// The normalized alternatives, in order
    pub fn alternatives(&self) -> &[Bound] {
        &self.alternatives
    }

    /// True if `version` is admitted by some alternative. A pre-release is only
    /// admitted when that alternative makes pre-releases of its triplet visible.
    pub fn includes(&self, version: &Version) -> bool {
        self.alternatives
            .iter()
            .any(|bound| bound.includes(version) && (version.is_stable() || bound.test_prerelease(version)))
    }

    /// The versions admitted by both ranges, or `None` if there are none
    pub fn intersection(&self, other: &VersionRange) -> Option<VersionRange> {
        let bounds: Vec<Bound> = self
            .alternatives
            .iter()
            .flat_map(|a| other.alternatives.iter().filter_map(move |b| a.intersection(b)))
            .collect();

        if bounds.is_empty() {
            return None;
        }
        Some(VersionRange::new("", bounds))
    }

    /// The versions admitted by either range
    pub fn merge(&self, other: &VersionRange) -> VersionRange {
        let bounds = self
            .alternatives
            .iter()
            .chain(other.alternatives.iter())
            .cloned()
            .collect();
        VersionRange::new("", bounds)
    }

    /// True if every alternative of this range overlaps and lies within some
    /// alternative of `other`
    pub fn is_as_restrictive_as(&self, other: &VersionRange) -> bool {
        self.alternatives.iter().all(|a| {
            other
                .alternatives
                .iter()
                .any(|b| a.intersection(b).is_some() && a.is_as_restrictive_as(b))
        })
    }

    /// Lowest edge of the range when it consists of a single alternative
    pub fn start_version(&self) -> Option<&Version> {
        self.single().map(Bound::start)
    }

    /// Highest edge of the range when it consists of a single alternative
    pub fn end_version(&self) -> Option<&Version> {
        self.single().map(Bound::end)
    }

    pub fn is_exclude_start(&self) -> bool {
        self.single().is_some_and(Bound::is_exclude_start)
    }

    pub fn is_exclude_end(&self) -> bool {
        self.single().is_some_and(Bound::is_exclude_end)
    }

    /// Canonical rendering, alternatives joined by ` || `
    pub fn normalized_string(&self) -> String {
        self.alternatives
            .iter()
            .map(|bound| bound.to_string())
            .collect::<Vec<_>>()
            .join(" || ")
    }

    fn single(&self) -> Option<&Bound> {
        match self.alternatives.as_slice() {
            [bound] => Some(bound),
            _ => None,
        }
    }
}

/// Merge alternatives pairwise until no two of them can be combined.
///
/// Each pass takes the last alternative, folds every other alternative that
/// merges with it into it, and repeats with the ones left over.
fn normalize(mut bounds: Vec<Bound>) -> Vec<Bound> {
    let mut merge_happened = true;
    while bounds.len() > 1 && merge_happened {
        merge_happened = false;
        let mut result = Vec::with_capacity(bounds.len());
        while bounds.len() > 1 {
            let Some(mut current) = bounds.pop() else {
                break;
            };
            let mut unmerged = Vec::with_capacity(bounds.len());
            for other in bounds.drain(..) {
                match current.union(&other) {
                    Some(merged) => {
                        log::trace!("Merged {} and {} into {}", current, other, merged);
                        merge_happened = true;
                        current = merged;
                    }
                    None => unmerged.push(other),
                }
            }
            result.push(current);
            bounds = unmerged;
        }
        result.reverse();
        bounds.append(&mut result);
    }
    bounds
}

impl PartialEq for VersionRange {
    fn eq(&self, other: &Self) -> bool {
        self.alternatives == other.alternatives
    }
}

impl Eq for VersionRange {}

impl FromStr for VersionRange {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s)?.unwrap_or_else(|| MATCH_ALL.clone()))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.original.is_empty() {
            f.write_str(&self.normalized_string())
        } else {
            f.write_str(&self.original)
        }
    }
}
