//! Bound type: a one- or two-sided constraint on acceptable versions

use std::fmt;

use lazy_static::lazy_static;

use crate::version::{Version, MAX, MIN};

lazy_static! {
    static ref HIGHEST_LOWER: Bound = Bound::GreaterThan(MAX.clone());
    static ref LOWEST_LOWER: Bound = Bound::GreaterOrEqual(MIN.clone());
    static ref LOWEST_UPPER: Bound = Bound::LessThan(MIN.clone());
}

/// A constraint on acceptable versions.
///
/// The set of shapes is closed. `Interval` always holds a lower-shaped bound
/// (`GreaterThan`, `GreaterOrEqual`) followed by an upper-shaped bound
/// (`LessThan`, `LessOrEqual`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bound {
    Exact(Version),
    GreaterThan(Version),
    GreaterOrEqual(Version),
    LessThan(Version),
    LessOrEqual(Version),
    Interval(Box<Bound>, Box<Bound>),
}

impl Bound {
    /// `>` the highest version, admits nothing
    pub fn highest_lower() -> Bound {
        HIGHEST_LOWER.clone()
    }

    /// `>=` the lowest version, admits everything
    pub fn lowest_lower() -> Bound {
        LOWEST_LOWER.clone()
    }

    /// `<` the lowest version, admits nothing
    pub fn lowest_upper() -> Bound {
        LOWEST_UPPER.clone()
    }

    /// Combine a lower edge and an upper edge. When one edge is a sentinel
    /// the other edge is returned on its own.
    pub fn interval(lower: Bound, upper: Bound) -> Bound {
        if !upper.is_upper_bound() {
            return lower;
        }
        if !lower.is_lower_bound() {
            return upper;
        }
        Bound::Interval(Box::new(lower.lower_edge()), Box::new(upper.upper_edge()))
    }

    /// Build the bound spanning `start` to `end` with the given exclusivity.
    /// A closed span over a single version is that version.
    pub fn between(start: &Version, exclude_start: bool, end: &Version, exclude_end: bool) -> Bound {
        if !exclude_start && !exclude_end && start.compare_to(end).is_eq() {
            return Bound::Exact(start.clone());
        }
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
        Bound::interval(lower, upper)
    }

    pub fn start(&self) -> &Version {
        match self {
            Bound::Exact(v) | Bound::GreaterThan(v) | Bound::GreaterOrEqual(v) => v,
            Bound::LessThan(_) | Bound::LessOrEqual(_) => &MIN,
            Bound::Interval(lower, _) => lower.start(),
        }
    }

    pub fn end(&self) -> &Version {
        match self {
            Bound::Exact(v) | Bound::LessThan(v) | Bound::LessOrEqual(v) => v,
            Bound::GreaterThan(_) | Bound::GreaterOrEqual(_) => &MAX,
            Bound::Interval(_, upper) => upper.end(),
        }
    }

    pub fn is_exclude_start(&self) -> bool {
        match self {
            Bound::GreaterThan(_) => true,
            Bound::Interval(lower, _) => lower.is_exclude_start(),
            _ => false,
        }
    }

    pub fn is_exclude_end(&self) -> bool {
        match self {
            Bound::LessThan(_) => true,
            Bound::Interval(_, upper) => upper.is_exclude_end(),
            _ => false,
        }
    }

    /// True if the bound restricts versions from below
    pub fn is_lower_bound(&self) -> bool {
        match self {
            Bound::Exact(v) | Bound::GreaterOrEqual(v) => *v != *MIN,
            Bound::GreaterThan(v) => *v != *MAX,
            Bound::LessThan(_) | Bound::LessOrEqual(_) => false,
            Bound::Interval(lower, _) => lower.is_lower_bound(),
        }
    }

    /// True if the bound restricts versions from above
    pub fn is_upper_bound(&self) -> bool {
        match self {
            Bound::Exact(v) | Bound::LessOrEqual(v) => *v != *MAX,
            Bound::LessThan(v) => *v != *MIN,
            Bound::GreaterThan(_) | Bound::GreaterOrEqual(_) => false,
            Bound::Interval(_, upper) => upper.is_upper_bound(),
        }
    }

    /// True for the sentinel shapes that no version satisfies
    pub fn admits_nothing(&self) -> bool {
        match self {
            Bound::LessThan(v) => *v == *MIN,
            Bound::GreaterThan(v) => *v == *MAX,
            _ => false,
        }
    }

    /// The lower-shaped part of this bound
    pub(crate) fn lower_edge(&self) -> Bound {
        match self {
            Bound::Exact(v) => Bound::GreaterOrEqual(v.clone()),
            Bound::GreaterThan(_) | Bound::GreaterOrEqual(_) => self.clone(),
            Bound::LessThan(_) | Bound::LessOrEqual(_) => Bound::highest_lower(),
            Bound::Interval(lower, _) => (**lower).clone(),
        }
    }

    /// The upper-shaped part of this bound
    pub(crate) fn upper_edge(&self) -> Bound {
        match self {
            Bound::Exact(v) => Bound::LessOrEqual(v.clone()),
            Bound::LessThan(_) | Bound::LessOrEqual(_) => self.clone(),
            Bound::GreaterThan(_) | Bound::GreaterOrEqual(_) => Bound::lowest_upper(),
            Bound::Interval(_, upper) => (**upper).clone(),
        }
    }

    /// Ordinary interval membership. Pre-release visibility is not considered.
    pub fn includes(&self, version: &Version) -> bool {
        match self {
            Bound::Exact(v) => v.compare_to(version).is_eq(),
            Bound::GreaterThan(v) => v.compare_to(version).is_lt(),
            Bound::GreaterOrEqual(v) => v.compare_to(version).is_le(),
            Bound::LessThan(v) => v.compare_to(version).is_gt(),
            Bound::LessOrEqual(v) => v.compare_to(version).is_ge(),
            Bound::Interval(lower, upper) => lower.includes(version) && upper.includes(version),
        }
    }

    /// True if a pre-release `version` may be matched through this bound. That
    /// is the case when a comparator endpoint is a pre-release of the same
    /// triplet, or when the bound is anchored at the lowest version.
    pub fn test_prerelease(&self, version: &Version) -> bool {
        match self {
            Bound::Exact(v)
            | Bound::GreaterThan(v)
            | Bound::GreaterOrEqual(v)
            | Bound::LessThan(v)
            | Bound::LessOrEqual(v) => *v == *MIN || (!v.is_stable() && v.triplet_equals(version)),
            Bound::Interval(lower, upper) => lower.test_prerelease(version) || upper.test_prerelease(version),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Exact(v) => write!(f, "{}", v),
            Bound::GreaterThan(v) => write!(f, ">{}", v),
            Bound::GreaterOrEqual(v) => write!(f, ">={}", v),
            Bound::LessThan(v) => write!(f, "<{}", v),
            Bound::LessOrEqual(v) => write!(f, "<={}", v),
            Bound::Interval(lower, upper) => write!(f, "{} {}", lower, upper),
        }
    }
}
