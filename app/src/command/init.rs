use reimrs_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/reimrs/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::create_config()?;

        println!("Konfiguration angelegt: {}", path.display());
        println!();
        println!("Optionen:");
        println!("   - lookup.base_url: Website, auf der Reime gesucht werden");
        println!("   - lookup.timeout_secs: Zeitlimit pro Anfrage (null = kein Limit)");
        println!("   - output.preview: Anzahl Reime in der Kurzübersicht");
        Ok(())
    }
}
