//! Semver facade providing high-level version operations

use crate::constraint::VersionRange;
use crate::version::Version;

/// Main facade for semantic versioning operations on version and range text
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range.
    ///
    /// An empty range places no constraint. Malformed input never satisfies.
    pub fn satisfies(version: &str, range: &str) -> bool {
        let Ok(version) = Version::parse(version) else {
            return false;
        };

        match VersionRange::parse(range) {
            Ok(Some(range)) => range.includes(&version),
            Ok(None) => true,
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given range
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let range = match VersionRange::parse(range) {
            Ok(range) => range,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| match (&range, Version::parse(v)) {
                (Some(range), Ok(version)) => range.includes(&version),
                (None, Ok(_)) => true,
                (_, Err(_)) => false,
            })
            .map(|v| v.to_string())
            .collect()
    }

    /// Check a version against an already parsed range
    pub fn satisfies_parsed(version: &str, range: &VersionRange) -> bool {
        Version::parse(version).is_ok_and(|version| range.includes(&version))
    }

    /// The highest version that satisfies the range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        let satisfying = Self::satisfied_by(versions, range);
        Self::rsort(&satisfying.iter().map(String::as_str).collect::<Vec<_>>())
            .into_iter()
            .next()
    }

    /// Sort versions in ascending order, dropping the ones that do not parse
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        // Stable, so versions equal in precedence keep their input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.compare_to(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
