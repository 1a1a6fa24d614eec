//! Pairwise operations on bounds

use std::cmp::Ordering;

use super::bound::Bound;

impl Bound {
    /// The versions admitted by both bounds, or `None` when they do not overlap
    pub fn intersection(&self, other: &Bound) -> Option<Bound> {
        match self.start().compare_to(other.end()) {
            Ordering::Greater => return None,
            Ordering::Equal => {
                if self.is_exclude_start() || other.is_exclude_end() {
                    return None;
                }
                return Some(Bound::Exact(self.start().clone()));
            }
            Ordering::Less => {}
        }

        match other.start().compare_to(self.end()) {
            Ordering::Greater => return None,
            Ordering::Equal => {
                if other.is_exclude_start() || self.is_exclude_end() {
                    return None;
                }
                return Some(Bound::Exact(other.start().clone()));
            }
            Ordering::Less => {}
        }

        let lower = match self.start().compare_to(other.start()) {
            Ordering::Less => other,
            Ordering::Greater => self,
            Ordering::Equal if self.is_exclude_start() => self,
            Ordering::Equal => other,
        };

        let upper = match self.end().compare_to(other.end()) {
            Ordering::Greater => other,
            Ordering::Less => self,
            Ordering::Equal if self.is_exclude_end() => self,
            Ordering::Equal => other,
        };

        if let Bound::Exact(_) = lower {
            return Some(lower.clone());
        }
        if let Bound::Exact(_) = upper {
            return Some(upper.clone());
        }

        Some(Bound::interval(lower.clone(), upper.clone()))
    }

    /// Merge two bounds that overlap or are adjacent into a single bound.
    ///
    /// Returns `None` when a gap of admissible versions separates them.
    pub fn union(&self, other: &Bound) -> Option<Bound> {
        if other.admits_nothing() {
            return Some(self.clone());
        }
        if self.admits_nothing() {
            return Some(other.clone());
        }

        let same_open_start =
            self.is_exclude_start() && other.is_exclude_start() && self.start().compare_to(other.start()).is_eq();

        if self.includes(other.start()) || other.includes(self.start()) || same_open_start {
            let (start, exclude_start) = match self.start().compare_to(other.start()) {
                Ordering::Less => (self.start(), self.is_exclude_start()),
                Ordering::Greater => (other.start(), other.is_exclude_start()),
                Ordering::Equal => (self.start(), self.is_exclude_start() && other.is_exclude_start()),
            };
            let (end, exclude_end) = match self.end().compare_to(other.end()) {
                Ordering::Greater => (self.end(), self.is_exclude_end()),
                Ordering::Less => (other.end(), other.is_exclude_end()),
                Ordering::Equal => (self.end(), self.is_exclude_end() && other.is_exclude_end()),
            };
            return Some(Bound::between(start, exclude_start, end, exclude_end));
        }

        if touches(self, other) {
            return Some(span(self, other));
        }
        if touches(other, self) {
            return Some(span(other, self));
        }
        None
    }

    /// True if every version admitted by `self` is also admitted by `other`
    pub fn is_as_restrictive_as(&self, other: &Bound) -> bool {
        let cmp = other.start().compare_to(self.start());
        if cmp.is_gt() || (cmp.is_eq() && !self.is_exclude_start() && other.is_exclude_start()) {
            return false;
        }

        let cmp = other.end().compare_to(self.end());
        !(cmp.is_lt() || (cmp.is_eq() && !self.is_exclude_end() && other.is_exclude_end()))
    }
}

/// True if `low` ends exactly where `high` begins, leaving no admissible gap
fn touches(low: &Bound, high: &Bound) -> bool {
    if high.is_exclude_start() {
        return false;
    }
    if low.is_exclude_end() {
        return low.end().compare_to(high.start()).is_eq();
    }
    low.end().next_patch().compare_to(high.start()).is_eq()
}

fn span(low: &Bound, high: &Bound) -> Bound {
    Bound::between(low.start(), low.is_exclude_start(), high.end(), high.is_exclude_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;

    fn v(text: &str) -> Version {
        Version::must_parse(text)
    }

    fn range(start: &str, exclude_start: bool, end: &str, exclude_end: bool) -> Bound {
        Bound::between(&v(start), exclude_start, &v(end), exclude_end)
    }

    #[test]
    fn test_intersection() {
        let one_x = range("1.0.0", false, "2.0.0", true);

        assert_eq!(
            one_x.intersection(&Bound::GreaterOrEqual(v("1.5.0"))),
            Some(range("1.5.0", false, "2.0.0", true))
        );
        assert_eq!(
            one_x.intersection(&Bound::LessOrEqual(v("1.5.0"))),
            Some(range("1.0.0", false, "1.5.0", false))
        );
        assert_eq!(one_x.intersection(&range("2.0.0", false, "3.0.0", true)), None);
        assert_eq!(one_x.intersection(&Bound::Exact(v("1.5.0"))), Some(Bound::Exact(v("1.5.0"))));
        assert_eq!(one_x.intersection(&Bound::Exact(v("2.0.0"))), None);
        assert_eq!(one_x.intersection(&one_x), Some(one_x.clone()));
    }

    #[test]
    fn test_intersection_touching_edges() {
        assert_eq!(
            Bound::GreaterOrEqual(v("1.2.3")).intersection(&Bound::LessOrEqual(v("1.2.3"))),
            Some(Bound::Exact(v("1.2.3")))
        );
        assert_eq!(
            Bound::LessOrEqual(v("1.2.3")).intersection(&Bound::GreaterOrEqual(v("1.2.3"))),
            Some(Bound::Exact(v("1.2.3")))
        );
        assert_eq!(Bound::GreaterOrEqual(v("1.2.3")).intersection(&Bound::LessThan(v("1.2.3"))), None);
        assert_eq!(Bound::GreaterThan(v("1.2.3")).intersection(&Bound::LessOrEqual(v("1.2.3"))), None);
    }

    #[test]
    fn test_intersection_prefers_excluding_edges() {
        assert_eq!(
            Bound::GreaterThan(v("1.0.0")).intersection(&Bound::GreaterOrEqual(v("1.0.0"))),
            Some(Bound::GreaterThan(v("1.0.0")))
        );
        assert_eq!(
            Bound::LessOrEqual(v("2.0.0")).intersection(&Bound::LessThan(v("2.0.0"))),
            Some(Bound::LessThan(v("2.0.0")))
        );
    }

    #[test]
    fn test_intersection_with_sentinels() {
        assert_eq!(Bound::lowest_lower().intersection(&Bound::lowest_upper()), None);
        assert_eq!(
            Bound::lowest_lower().intersection(&Bound::LessThan(v("2.0.0"))),
            Some(Bound::LessThan(v("2.0.0")))
        );
        assert_eq!(
            Bound::lowest_lower().intersection(&Bound::lowest_lower()),
            Some(Bound::lowest_lower())
        );
    }

    #[test]
    fn test_union_overlapping() {
        assert_eq!(
            range("1.0.0", false, "2.0.0", true).union(&range("1.5.0", false, "3.0.0", true)),
            Some(range("1.0.0", false, "3.0.0", true))
        );
        assert_eq!(
            Bound::GreaterThan(v("1.0.0")).union(&Bound::GreaterOrEqual(v("1.0.0"))),
            Some(Bound::GreaterOrEqual(v("1.0.0")))
        );
        assert_eq!(
            Bound::LessThan(v("1.5.0")).union(&range("1.0.0", false, "2.0.0", true)),
            Some(Bound::LessThan(v("2.0.0")))
        );
    }

    #[test]
    fn test_union_of_equal_exact_bounds() {
        let exact = Bound::Exact(v("1.2.3"));
        assert_eq!(exact.union(&exact), Some(exact.clone()));
        assert_eq!(
            exact.union(&exact).and_then(|merged| merged.intersection(&merged)),
            Some(exact)
        );
    }

    #[test]
    fn test_union_same_open_start() {
        assert_eq!(
            Bound::GreaterThan(v("1.0.0")).union(&range("1.0.0", true, "2.0.0", true)),
            Some(Bound::GreaterThan(v("1.0.0")))
        );
    }

    #[test]
    fn test_union_adjacent() {
        assert_eq!(
            Bound::LessThan(v("1.2.3")).union(&Bound::GreaterOrEqual(v("1.2.3"))),
            Some(Bound::lowest_lower())
        );
        assert_eq!(
            Bound::GreaterOrEqual(v("1.2.3")).union(&Bound::LessThan(v("1.2.3"))),
            Some(Bound::lowest_lower())
        );
        assert_eq!(
            range("1.0.0", false, "1.2.3", false).union(&range("1.2.4", false, "2.0.0", true)),
            Some(range("1.0.0", false, "2.0.0", true))
        );
        assert_eq!(
            range("1.2.4", false, "2.0.0", true).union(&range("1.0.0", false, "1.2.3", false)),
            Some(range("1.0.0", false, "2.0.0", true))
        );
    }

    #[test]
    fn test_union_absorbs_empty_bounds() {
        let one_x = range("1.0.0", false, "2.0.0", true);
        assert_eq!(one_x.union(&Bound::lowest_upper()), Some(one_x.clone()));
        assert_eq!(Bound::highest_lower().union(&one_x), Some(one_x.clone()));
    }

    #[test]
    fn test_union_with_gap() {
        assert_eq!(range("1.0.0", false, "2.0.0", true).union(&range("3.0.0", false, "4.0.0", true)), None);
        assert_eq!(Bound::LessThan(v("1.2.3")).union(&Bound::GreaterThan(v("1.2.3"))), None);
        assert_eq!(Bound::LessOrEqual(v("1.2.3")).union(&Bound::GreaterOrEqual(v("1.2.5"))), None);
    }

    #[test]
    fn test_is_as_restrictive_as() {
        let caret = range("1.0.0", false, "2.0.0", true);
        assert!(Bound::Exact(v("1.2.3")).is_as_restrictive_as(&caret));
        assert!(!caret.is_as_restrictive_as(&Bound::Exact(v("1.2.3"))));
        assert!(caret.is_as_restrictive_as(&caret));
        assert!(caret.is_as_restrictive_as(&Bound::lowest_lower()));

        let open = range("1.0.0", true, "2.0.0", true);
        assert!(open.is_as_restrictive_as(&caret));
        assert!(!caret.is_as_restrictive_as(&open));

        assert!(!range("1.0.0", false, "2.0.0", false).is_as_restrictive_as(&caret));
    }
}
