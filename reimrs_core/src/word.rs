//! Query word normalization and the retention bound.

use std::str::FromStr;

use crate::error::Error;

/// Normalize a query word for use in a lookup request.
///
/// Lower-cases first and then replaces `ß` with `ss`, so a capital `ẞ`
/// ends up as `ss` as well.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.to_lowercase().replace('ß', "ss")
}

/// Upper bound on how many rhyme tokens are retained.
///
/// Negative inputs are accepted and folded to their absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limit(usize);

impl Limit {
    #[must_use]
    pub fn new(bound: i64) -> Self {
        Self(usize::try_from(bound.unsigned_abs()).unwrap_or(usize::MAX))
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Limit {
    fn from(bound: usize) -> Self {
        Self(bound)
    }
}

impl FromStr for Limit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self::new)
            .map_err(|_| Error::InvalidArgument(format!("'{s}' ist kein Integer")))
    }
}
