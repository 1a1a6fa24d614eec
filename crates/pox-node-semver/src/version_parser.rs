//! Version and range literal parsing
//!
//! Range expressions are split into `||` alternatives, each alternative into
//! whitespace separated terms that are intersected. A term is an optional
//! comparator followed by a partial version where trailing positions may be
//! omitted or given as a wildcard (`x`, `X`, `*`).

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::{Bound, Operator};
use crate::error::{SemverError, SyntaxError};
use crate::version::Version;

lazy_static! {
    // A comparator followed by whitespace or a `v` prefix
    static ref OPERATOR_WS_RE: Regex = Regex::new(r"([><=~^])\s*v?").unwrap();

    static ref OR_SPLIT_RE: Regex = Regex::new(r"\s*\|\|\s*").unwrap();

    static ref HYPHEN_RE: Regex = Regex::new(r"^(\S+)\s+-\s+(\S+)$").unwrap();
}

/// Parse a complete version literal such as `1.2.3-rc.1+build.5`
pub(crate) fn parse_version(text: &str) -> Result<Version, SemverError> {
    let invalid = || SyntaxError::InvalidVersion(text.to_string());

    let partial = Scanner::new(text).partial().ok_or_else(invalid)?;
    if !partial.is_complete() {
        return Err(invalid().into());
    }

    match partial.version() {
        Err(SemverError::Validation(_)) => Err(invalid().into()),
        result => result,
    }
}

/// Parse a range expression into its alternative bounds.
///
/// Returns `Ok(None)` for empty input. Alternatives whose terms do not
/// intersect are left out, so the list may be empty.
pub(crate) fn parse_range(text: &str) -> Result<Option<Vec<Bound>>, SemverError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let collapsed = OPERATOR_WS_RE.replace_all(text, "$1");
    let mut alternatives = Vec::new();

    for alternative in OR_SPLIT_RE.split(&collapsed) {
        let alternative = alternative.trim();
        if alternative.is_empty() {
            alternatives.push(Bound::lowest_lower());
            continue;
        }

        if let Some(bound) = parse_alternative(alternative)? {
            alternatives.push(bound);
        }
    }

    Ok(Some(alternatives))
}

fn parse_alternative(alternative: &str) -> Result<Option<Bound>, SemverError> {
    if let Some(caps) = HYPHEN_RE.captures(alternative) {
        let low = partial_term(&caps[1])?;
        let high = partial_term(&caps[2])?;
        let lower = greater_or_equal(&low)?;
        // `- *` leaves the range open above
        if high.number(0)?.is_none() {
            return Ok(Some(lower));
        }
        return Ok(lower.intersection(&less_or_equal(&high)?));
    }

    let bounds = alternative
        .split_whitespace()
        .map(parse_term)
        .collect::<Result<Vec<_>, _>>()?;

    let mut bounds = bounds.into_iter();
    let Some(first) = bounds.next() else {
        return Ok(None);
    };
    Ok(bounds.try_fold(first, |acc, bound| acc.intersection(&bound)))
}

fn parse_term(term: &str) -> Result<Bound, SemverError> {
    let (operator, rest) = Operator::split_prefix(term)?;
    let partial = Scanner::new(rest)
        .partial()
        .ok_or_else(|| SyntaxError::InvalidRange(term.to_string()))?;

    match operator {
        None | Some(Operator::Equal) => allow_patch_updates(&partial, false),
        Some(Operator::Tilde) => allow_patch_updates(&partial, true),
        Some(Operator::Caret) => caret(&partial),
        Some(Operator::GreaterThan) => greater_than(&partial),
        Some(Operator::GreaterThanOrEqual) => greater_or_equal(&partial),
        Some(Operator::LessThan) => less_than(&partial),
        Some(Operator::LessThanOrEqual) => less_or_equal(&partial),
    }
}

/// A hyphen range edge, which takes no comparator
fn partial_term(text: &str) -> Result<Partial<'_>, SemverError> {
    Ok(Scanner::new(text)
        .partial()
        .ok_or_else(|| SyntaxError::InvalidRange(text.to_string()))?)
}

fn greater_or_equal(partial: &Partial) -> Result<Bound, SemverError> {
    if partial.number(0)?.is_none() {
        return Ok(Bound::lowest_lower());
    }
    Ok(Bound::GreaterOrEqual(partial.version()?))
}

// `>` on a partial excludes the whole partial range
fn greater_than(partial: &Partial) -> Result<Bound, SemverError> {
    match (partial.number(0)?, partial.number(1)?, partial.number(2)?) {
        (None, _, _) => Ok(Bound::lowest_lower()),
        (Some(major), None, _) => Ok(Bound::GreaterOrEqual(Version::new(partial.bump(major)?, 0, 0))),
        (Some(major), Some(minor), None) => {
            Ok(Bound::GreaterOrEqual(Version::new(major, partial.bump(minor)?, 0)))
        }
        _ => Ok(Bound::GreaterThan(partial.version()?)),
    }
}

fn less_than(partial: &Partial) -> Result<Bound, SemverError> {
    if partial.number(0)?.is_none() {
        return Ok(Bound::lowest_upper());
    }
    Ok(Bound::LessThan(partial.version()?))
}

// `<=` on a partial includes the whole partial range
fn less_or_equal(partial: &Partial) -> Result<Bound, SemverError> {
    match (partial.number(0)?, partial.number(1)?, partial.number(2)?) {
        (None, _, _) => Ok(Bound::lowest_upper()),
        (Some(major), None, _) => Ok(Bound::LessThan(Version::new(partial.bump(major)?, 0, 0))),
        (Some(major), Some(minor), None) => Ok(Bound::LessThan(Version::new(major, partial.bump(minor)?, 0))),
        _ => Ok(Bound::LessOrEqual(partial.version()?)),
    }
}

/// X-ranges and tilde ranges. A full triplet is an exact match unless `tilde`
/// is set, in which case patch updates are allowed.
fn allow_patch_updates(partial: &Partial, tilde: bool) -> Result<Bound, SemverError> {
    let (major, minor) = match (partial.number(0)?, partial.number(1)?) {
        (None, _) => return Ok(Bound::lowest_lower()),
        (Some(major), None) => {
            return Ok(half_open(
                Version::new(major, 0, 0),
                Version::new(partial.bump(major)?, 0, 0),
            ))
        }
        (Some(major), Some(minor)) => (major, minor),
    };

    if partial.number(2)?.is_none() {
        return Ok(half_open(
            Version::new(major, minor, 0),
            Version::new(major, partial.bump(minor)?, 0),
        ));
    }

    let version = partial.version()?;
    if tilde {
        Ok(half_open(version, Version::new(major, partial.bump(minor)?, 0)))
    } else {
        Ok(Bound::Exact(version))
    }
}

fn caret(partial: &Partial) -> Result<Bound, SemverError> {
    match partial.number(0)? {
        None => Ok(Bound::lowest_lower()),
        Some(0) => allow_patch_updates(partial, true),
        Some(major) => Ok(half_open(partial.version()?, Version::new(partial.bump(major)?, 0, 0))),
    }
}

fn half_open(start: Version, end: Version) -> Bound {
    Bound::interval(Bound::GreaterOrEqual(start), Bound::LessThan(end))
}

/// A partial version as written in a range term
#[derive(Debug, PartialEq)]
struct Partial<'a> {
    text: &'a str,
    /// Numeric positions up to the first wildcard or omitted one
    numbers: Vec<&'a str>,
    pre_release: &'a str,
    build: &'a str,
}

impl Partial<'_> {
    fn is_complete(&self) -> bool {
        self.numbers.len() == 3
    }

    fn number(&self, position: usize) -> Result<Option<u64>, SyntaxError> {
        match self.numbers.get(position) {
            Some(digits) => digits
                .parse()
                .map(Some)
                .map_err(|_| SyntaxError::IllegalTriplet(self.text.to_string())),
            None => Ok(None),
        }
    }

    fn bump(&self, n: u64) -> Result<u64, SyntaxError> {
        n.checked_add(1)
            .ok_or_else(|| SyntaxError::IllegalTriplet(self.text.to_string()))
    }

    /// The version with missing positions filled with zero
    fn version(&self) -> Result<Version, SemverError> {
        Ok(Version::with_qualifiers(
            self.number(0)?.unwrap_or(0),
            self.number(1)?.unwrap_or(0),
            self.number(2)?.unwrap_or(0),
            self.pre_release,
            self.build,
        )?)
    }
}

enum XPart<'a> {
    Number(&'a str),
    Wildcard,
}

/// Hand-written scanner for `partial := xPart ('.' xPart ('.' xPart qualifier)?)?`
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Scanner { text, pos: 0 }
    }

    /// Scan the whole text as a partial, `None` if it does not match the grammar
    fn partial(mut self) -> Option<Partial<'a>> {
        let mut numbers = Vec::with_capacity(3);
        let mut wildcard = false;
        let mut positions = 0;

        while positions < 3 {
            if positions > 0 && !self.eat(b'.') {
                break;
            }
            match self.x_part()? {
                XPart::Number(digits) if !wildcard => numbers.push(digits),
                XPart::Number(_) => {}
                XPart::Wildcard => wildcard = true,
            }
            positions += 1;
        }

        let mut pre_release = "";
        let mut build = "";
        if positions == 3 {
            if self.eat(b'-') {
                pre_release = self.parts()?;
            }
            if self.eat(b'+') {
                build = self.parts()?;
            }
        }

        if self.pos != self.text.len() {
            return None;
        }

        // Qualifiers only apply to a full triplet
        if numbers.len() < 3 {
            pre_release = "";
            build = "";
        }

        Some(Partial {
            text: self.text,
            numbers,
            pre_release,
            build,
        })
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn x_part(&mut self) -> Option<XPart<'a>> {
        match self.peek()? {
            b'x' | b'X' | b'*' => {
                self.pos += 1;
                Some(XPart::Wildcard)
            }
            _ => self.digits().map(XPart::Number),
        }
    }

    // digits := 0 | [1-9][0-9]*
    fn digits(&mut self) -> Option<&'a str> {
        let start = self.pos;
        match self.peek()? {
            b'0' => self.pos += 1,
            b'1'..=b'9' => {
                while matches!(self.peek(), Some(b'0'..=b'9')) {
                    self.pos += 1;
                }
            }
            _ => return None,
        }
        Some(&self.text[start..self.pos])
    }

    // parts := [0-9A-Za-z-]+ ('.' [0-9A-Za-z-]+)*
    fn parts(&mut self) -> Option<&'a str> {
        let start = self.pos;
        loop {
            let part_start = self.pos;
            while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'-') {
                self.pos += 1;
            }
            if self.pos == part_start {
                return None;
            }
            if !self.eat(b'.') {
                break;
            }
        }
        Some(&self.text[start..self.pos])
    }
}
