use clap::Parser;
use reimrs_core::Limit;

use crate::format;

#[derive(Debug, Parser)]
#[command(name = "reimrs")]
#[command(version, about = "Sucht Reimwörter zu einem Wort", long_about = None)]
#[command(after_help = format::HELP_FOOTER)]
pub struct Cli {
    /// Das Wort, wonach Reime gesucht werden
    pub word: Option<String>,

    /// Zeigt alle gefundenen Reimwörter an
    #[arg(short, long)]
    pub all: bool,

    /// Höchstens so viele Reimwörter behalten
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<Limit>,

    /// Speichert die Reime in <NAME>.txt (Standard: das Wort)
    #[arg(short, long, value_name = "NAME", num_args = 0..=1, requires = "word")]
    pub save: Option<Option<String>>,

    /// Höchstens so viele Reimwörter in die Datei schreiben
    #[arg(long, requires = "save", allow_negative_numbers = true)]
    pub max: Option<Limit>,

    /// Legt die Konfigurationsdatei ~/reimrs/config.json an
    #[arg(long, conflicts_with_all = ["word", "all", "limit", "save"])]
    pub init: bool,
}
