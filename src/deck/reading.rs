use std::{
    path::{
        Path,
        PathBuf,
    },
    sync::OnceLock,
};

use regex::Regex;

use crate::{
    core::DeckError,
    persistence,
};

// Bracketed runs first so a `[...]` group is consumed whole and never
// re-matched as a bare run (the regex crate prefers earlier alternatives).
fn reading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\[([\u{3040}-\u{309F}]+)\]|([\u{3040}-\u{309F}]+)").unwrap()
    })
}

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Reduces a reading annotation like `木[の]葉` or `[あ]い` to bare hiragana,
/// keeping every hiragana run in its original order and dropping brackets,
/// kanji and anything else.
pub fn normalize_reading(reading: &str) -> String {
    let mut cleaned = String::with_capacity(reading.len());
    for captures in reading_pattern().captures_iter(reading) {
        // Group 1 is bracketed content, group 2 a bare run.
        if let Some(run) = captures.get(1).or_else(|| captures.get(2)) {
            cleaned.push_str(run.as_str());
        }
    }
    // Malformed bracketing could in principle let strays through the pass
    // above, so keep the final sweep.
    cleaned.retain(is_hiragana);
    cleaned
}

#[derive(Debug)]
pub struct FixOutcome {
    pub cleaned: usize,
    pub output_path: PathBuf,
}

/// Normalizes the `Reading` field of every record in the deck at `path` and
/// writes the result to a `_cleaned` sibling file. Records with no reading,
/// or an empty one, are left alone.
pub fn fix_readings(path: &Path) -> Result<FixOutcome, DeckError> {
    let mut deck = persistence::load_deck(path)?;

    let mut cleaned = 0;
    for record in &mut deck {
        if let Some(reading) = &record.reading {
            if reading.is_empty() {
                continue;
            }
            let normalized = normalize_reading(reading);
            if *reading != normalized {
                cleaned += 1;
            }
            record.reading = Some(normalized);
        }
    }

    let output_path = persistence::sibling_with_suffix(path, "_cleaned");
    persistence::save_deck(&output_path, &deck)?;

    Ok(FixOutcome { cleaned, output_path })
}
