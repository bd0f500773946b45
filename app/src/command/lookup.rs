use reimrs_config::Config;
use reimrs_core::{Limit, Rhymes};
use reimrs_providers::HttpFetcher;
use tracing::info;

use crate::format;

/// Input parameters for the lookup command.
#[derive(Debug, Clone)]
pub struct LookupInput {
    /// Word to find rhymes for
    pub word: String,
    /// Print every rhyme instead of the summary line
    pub all: bool,
    /// Bound on the number of retained rhymes
    pub limit: Option<Limit>,
    /// Export target; `Some(None)` exports under the word itself
    pub save: Option<Option<String>>,
    /// Bound on the number of exported rhymes
    pub max: Option<Limit>,
}

/// Strategy for looking up, printing and optionally saving rhymes.
///
/// A failed request is not an error here: it shows up as zero rhymes.
#[derive(Debug, Clone, Copy)]
pub struct LookupStrategy;

impl super::CommandStrategy for LookupStrategy {
    type Input = LookupInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let fetcher = HttpFetcher::new(&config.lookup)?;

        let rhymes = Rhymes::lookup(&fetcher, &input.word, input.limit).await;

        if input.all {
            println!("{}", format::listing(&rhymes));
        } else {
            println!("{}", format::summary(&rhymes, config.output.preview));
        }

        if let Some(name) = input.save {
            let name = name.as_deref().filter(|name| !name.is_empty());
            let path = rhymes.export(name, input.max)?;
            info!("Export finished");
            println!("Gespeichert in {}", path.display());
        }

        Ok(())
    }
}
