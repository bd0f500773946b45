//! Pulls rhyme tokens out of a result page.

use regex::Regex;
use std::sync::OnceLock;

use crate::word::Limit;

/// Attribute carrying one rhyme word in the result page markup.
///
/// Word characters are letters, numbers and `_`. Combining marks are not
/// word characters, so a decomposed umlaut (`a` + U+0308) ends the token.
pub const RHYME_PATTERN: &str = r#"data-rhyme="([\p{L}\p{N}_]+)""#;

static RHYME_RE: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn rhyme_re() -> &'static Regex {
    RHYME_RE.get_or_init(|| {
        Regex::new(RHYME_PATTERN).expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Extract every rhyme token from `body` in document order.
///
/// The whole body is scanned before `limit` is applied. Bodies without a
/// single match, including the empty body of a failed fetch, yield an
/// empty vector.
#[must_use]
pub fn extract(body: &str, limit: Option<Limit>) -> Vec<String> {
    let mut tokens: Vec<String> = rhyme_re()
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect();

    if let Some(limit) = limit {
        tokens.truncate(limit.get());
    }
    tokens
}
