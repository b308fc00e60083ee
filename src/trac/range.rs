//! Revision range parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::RangeError;

/// An inclusive range of revisions to digest.
///
/// `to == None` means "up to the newest revision".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionRange {
    pub from: u64,
    pub to: Option<u64>,
}

impl RevisionRange {
    pub fn new(from: u64, to: Option<u64>) -> Result<Self, RangeError> {
        if let Some(to) = to {
            if from > to {
                return Err(RangeError::Reversed { from, to });
            }
        }
        Ok(Self { from, to })
    }
}

impl FromStr for RevisionRange {
    type Err = RangeError;

    /// Parse `FROM[:TO]`, where each side is `N`, `rN` or `@N` and `TO`
    /// may also be `HEAD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = match s.split_once(':') {
            Some((from, to)) => (from, Some(to)),
            None => (s, None),
        };

        let from = parse_revision(from)?;
        let to = match to.map(str::trim) {
            None | Some("") => None,
            Some(head) if head.eq_ignore_ascii_case("head") => None,
            Some(rev) => Some(parse_revision(rev)?),
        };

        Self::new(from, to)
    }
}

impl fmt::Display for RevisionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "r{}:r{}", self.from, to),
            None => write!(f, "r{}:HEAD", self.from),
        }
    }
}

/// Parse a single revision in `N`, `rN` or `@N` form.
fn parse_revision(input: &str) -> Result<u64, RangeError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix('r')
        .or_else(|| trimmed.strip_prefix('@'))
        .unwrap_or(trimmed);

    digits
        .parse::<u64>()
        .map_err(|_| RangeError::InvalidRevision(input.to_string()))
}
