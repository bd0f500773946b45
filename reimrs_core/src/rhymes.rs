//! The lookup result: one query word together with the rhymes found for it.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::ops::{Bound, RangeBounds};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::extract::extract;
use crate::fetch::PageFetcher;
use crate::word::{Limit, normalize};

/// Number of tokens shown by the `Display` summary.
pub const PREVIEW_LEN: usize = 5;

/// Immutable set of rhyme tokens for a single query word.
///
/// Tokens keep the order in which they appeared on the result page and are
/// not deduplicated. The original, un-normalized query word is kept for
/// naming exported files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rhymes {
    word: String,
    rhymes: Vec<String>,
}

impl Rhymes {
    /// Normalize `word`, fetch its result page and extract the rhymes.
    ///
    /// Exactly one request is made. A failed request produces an empty
    /// result, never an error.
    pub async fn lookup<F>(fetcher: &F, word: &str, limit: Option<Limit>) -> Self
    where
        F: PageFetcher + ?Sized,
    {
        let normalized = normalize(word);
        debug!("Looking up rhymes for '{word}' as '{normalized}'");

        let page = fetcher.fetch(&normalized).await;
        let rhymes = Self::from_page(word, page.body(), limit);

        info!("Found {} rhymes for '{word}'", rhymes.len());
        rhymes
    }

    /// Build a result from an already retrieved page body.
    #[must_use]
    pub fn from_page(word: impl Into<String>, body: &str, limit: Option<Limit>) -> Self {
        Self {
            word: word.into(),
            rhymes: extract(body, limit),
        }
    }

    /// The query word as given by the caller, before normalization.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rhymes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rhymes.is_empty()
    }

    /// Token at `index`.
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfBounds` when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.rhymes
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.rhymes.len(),
            })
    }

    /// Tokens within `range`, clamped to the available tokens.
    ///
    /// Never fails: bounds past the end are cut back and an inverted range
    /// gives an empty slice.
    #[must_use]
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> &[String] {
        let len = self.rhymes.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .clamp(start, len);

        &self.rhymes[start..end]
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.rhymes.iter().any(|rhyme| rhyme == word)
    }

    /// Fresh iterator over the tokens in stored order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.rhymes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.rhymes
    }

    /// The second token, or `-` when fewer than two tokens were found.
    #[must_use]
    pub fn second_or_dash(&self) -> &str {
        self.rhymes.get(1).map_or("-", String::as_str)
    }

    /// One-line overview: query word, number of rhymes and the first
    /// `preview` of them.
    #[must_use]
    pub fn summary(&self, preview: usize) -> String {
        format!(
            "Reime auf \"{}\": {} gefunden [{}]",
            self.word,
            self.rhymes.len(),
            self.slice(..preview).join(", ")
        )
    }

    /// Write the tokens to `<name>.txt` in the current directory.
    ///
    /// See [`Rhymes::export_in`].
    pub fn export(&self, name: Option<&str>, max_count: Option<Limit>) -> Result<PathBuf> {
        self.export_in(Path::new("."), name, max_count)
    }

    /// Write the tokens to `<name>.txt` inside `dir`, one per line.
    ///
    /// `name` defaults to the query word. `max_count` caps the number of
    /// tokens written; `None` and a zero bound both write every token. An
    /// existing file is overwritten. The written path is returned.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be created or written.
    pub fn export_in(
        &self,
        dir: &Path,
        name: Option<&str>,
        max_count: Option<Limit>,
    ) -> Result<PathBuf> {
        let name = name.unwrap_or(&self.word);
        let path = dir.join(format!("{name}.txt"));

        let count = match max_count.map(Limit::get) {
            None | Some(0) => self.rhymes.len(),
            Some(max) => max,
        };
        let contents = self.slice(..count).join("\n");

        let mut file = File::create(&path)?;
        file.write_all(contents.as_bytes())?;

        info!("Wrote {} rhymes to {}", count.min(self.len()), path.display());
        Ok(path)
    }
}

impl<'a> IntoIterator for &'a Rhymes {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.rhymes.iter()
    }
}

impl fmt::Display for Rhymes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(PREVIEW_LEN))
    }
}
