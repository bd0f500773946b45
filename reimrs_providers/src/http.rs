use anyhow::{Context, Result};
use async_trait::async_trait;
use reimrs_config::LookupConfig;
use reimrs_core::{Page, PageFetcher};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Build the result page URL for a normalized word.
///
/// The word becomes a single, percent-escaped path segment `<word>.html`
/// appended to `base`.
pub fn lookup_url(base: &Url, word: &str) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| anyhow::anyhow!("Base URL cannot carry a path: {base}"))?
        .pop_if_empty()
        .push(&format!("{word}.html"));
    Ok(url)
}

/// Fetches result pages from the rhyme lookup site.
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid lookup base URL: {}", config.base_url))?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        info!("Creating HttpFetcher for {base_url}");
        Ok(Self { client, base_url })
    }

    /// Helper method to send a single request
    async fn try_fetch(&self, word: &str) -> Result<String> {
        let url = lookup_url(&self.base_url, word)?;
        debug!("GET {url}");

        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let body = String::from_utf8(bytes.to_vec()).context("Page is not valid UTF-8")?;
        Ok(body)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, word: &str) -> Page {
        match self.try_fetch(word).await {
            Ok(body) => {
                debug!("Fetched {} bytes for '{word}'", body.len());
                Page::Available(body)
            }
            Err(e) => {
                warn!("Lookup for '{word}' failed, continuing without rhymes: {e:#}");
                Page::Unavailable
            }
        }
    }
}
