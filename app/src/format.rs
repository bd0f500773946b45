//! Text shown on the terminal. Everything here is pure formatting.

use reimrs_core::Rhymes;

pub const HELP_FOOTER: &str = "\
Beispiele:
  reimrs Haus              Kurzübersicht der Reime auf \"Haus\"
  reimrs Haus --all        Alle gefundenen Reimwörter
  reimrs Haus -l 10 -s     Höchstens 10 Reime, gespeichert in Haus.txt";

#[must_use]
pub const fn usage_hint() -> &'static str {
    "Erhalte Hilfe mit --help"
}

/// Single summary line for the default output.
#[must_use]
pub fn summary(rhymes: &Rhymes, preview: usize) -> String {
    rhymes.summary(preview)
}

/// Every rhyme on its own line, or a notice when none were found.
#[must_use]
pub fn listing(rhymes: &Rhymes) -> String {
    if rhymes.is_empty() {
        return format!("Keine Reime auf \"{}\" gefunden", rhymes.word());
    }
    rhymes.as_slice().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<a data-rhyme="Maus"></a><a data-rhyme="Laus"></a><a data-rhyme="raus"></a>"#;

    #[test]
    fn test_listing_one_per_line() {
        let rhymes = Rhymes::from_page("Haus", PAGE, None);
        assert_eq!(listing(&rhymes), "Maus\nLaus\nraus");
    }

    #[test]
    fn test_listing_empty_result() {
        let rhymes = Rhymes::from_page("xyz", "", None);
        assert_eq!(listing(&rhymes), "Keine Reime auf \"xyz\" gefunden");
    }

    #[test]
    fn test_summary_respects_preview() {
        let rhymes = Rhymes::from_page("Haus", PAGE, None);
        assert_eq!(summary(&rhymes, 2), "Reime auf \"Haus\": 3 gefunden [Maus, Laus]");
    }
}
