use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde_json::Value;

use crate::core::{
    Deck,
    DeckError,
};

pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

pub fn save_deck(path: &Path, deck: &Deck) -> Result<(), DeckError> {
    let json = serde_json::to_string_pretty(deck)?;
    fs::write(path, json)?;
    Ok(())
}

/// Raw variant for files that are not deck-shaped (public data files are
/// arbitrary JSON documents). Round-trips Unicode text unescaped.
pub fn load_value(path: &Path) -> Result<Value, DeckError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

pub fn save_value(path: &Path, value: &Value) -> Result<(), DeckError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// File names (not paths) of the `.json` files directly inside `dir`, sorted
/// so menus and batch runs are stable.
pub fn list_json_files(dir: &Path) -> Result<Vec<String>, DeckError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(".json") {
                files.push(name.to_string());
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Inserts `suffix` before the `.json` extension: `deck.json` + `_backup`
/// gives `deck_backup.json`.
pub fn with_suffix(file_name: &str, suffix: &str) -> String {
    match file_name.strip_suffix(".json") {
        Some(stem) => format!("{}{}.json", stem, suffix),
        None => format!("{}{}", file_name, suffix),
    }
}

/// Name of the default counterpart for a live file: `deck.json` maps to
/// `deck_default.json`.
pub fn default_counterpart(file_name: &str) -> String {
    with_suffix(file_name, "_default")
}

/// Path next to `path` with `suffix` spliced into the file name.
pub fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    path.with_file_name(with_suffix(name, suffix))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_suffix_substitution() {
        assert_eq!(with_suffix("deck.json", "_backup"), "deck_backup.json");
        assert_eq!(default_counterpart("deck.json"), "deck_default.json");
        assert_eq!(default_counterpart("N5.json"), "N5_default.json");

        // No extension to splice into: append.
        assert_eq!(with_suffix("deck", "_backup"), "deck_backup");

        let sibling = sibling_with_suffix(Path::new("some/dir/deck.json"), "_cleaned");
        assert_eq!(sibling, PathBuf::from("some/dir/deck_cleaned.json"));
    }

    #[test]
    fn test_list_json_files_sorted() {
        let td = TempDir::new().unwrap();
        fs::write(td.path().join("b.json"), "[]").unwrap();
        fs::write(td.path().join("a.json"), "[]").unwrap();
        fs::write(td.path().join("notes.txt"), "").unwrap();
        fs::create_dir(td.path().join("sub.json")).unwrap();

        let files = list_json_files(td.path()).unwrap();
        assert_eq!(files, vec!["a.json".to_string(), "b.json".to_string()]);
    }

    #[test]
    fn test_unicode_written_unescaped() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("deck.json");

        let value = json!([{"Word": "木の葉", "Reading": "このは"}]);
        save_value(&path, &value).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("木の葉"));
        assert!(raw.contains("このは"));
        assert!(!raw.contains("\\u"));

        assert_eq!(load_value(&path).unwrap(), value);
    }
}
