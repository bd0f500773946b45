use async_trait::async_trait;

/// Outcome of a single page retrieval.
///
/// Transport failures are not errors at this layer: they are reported as
/// `Unavailable` and read as an empty body, which extracts to zero rhymes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Available(String),
    Unavailable,
}

impl Page {
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Available(body) => body,
            Self::Unavailable => "",
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Retrieves the result page for an already normalized word.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, word: &str) -> Page;
}
