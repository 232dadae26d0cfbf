use std::{
    mem,
    path::{
        Path,
        PathBuf,
    },
};

use crate::{
    core::{
        models::{
            MEANING,
            WORD,
        },
        DeckError,
    },
    persistence,
};

#[derive(Debug)]
pub struct SwapOutcome {
    pub records: usize,
    pub backup_path: PathBuf,
    pub output_path: PathBuf,
}

/// Swaps `Word` and `Meaning` on every record of the deck at `path` and blanks
/// `Reading`, so the deck quizzes in the opposite direction. The original file
/// is kept as-is; the result goes to a `_modified` sibling, with a `_backup`
/// sibling written before any record is touched.
pub fn swap_question(path: &Path) -> Result<SwapOutcome, DeckError> {
    let mut deck = persistence::load_deck(path)?;

    let backup_path = persistence::sibling_with_suffix(path, "_backup");
    persistence::save_deck(&backup_path, &deck)?;

    for (index, record) in deck.iter_mut().enumerate() {
        if record.word.is_none() {
            return Err(DeckError::MissingField { field: WORD, index });
        }
        if record.meaning.is_none() {
            return Err(DeckError::MissingField { field: MEANING, index });
        }
        mem::swap(&mut record.word, &mut record.meaning);
        record.reading = Some(String::new());
    }

    let output_path = persistence::sibling_with_suffix(path, "_modified");
    persistence::save_deck(&output_path, &deck)?;

    Ok(SwapOutcome { records: deck.len(), backup_path, output_path })
}
