use std::path::Path;

use serde_json::Value;

use crate::{
    core::{
        models::{
            BALANCE,
            EF,
            INTERVAL,
            LAST_REVIEWED,
            NEXT_REVIEW,
        },
        DeckError,
        DeckRecord,
    },
    persistence,
};

// Fields that older deck files stored as the string "0" instead of a number.
const ZERO_FIELDS: &[&str] = &[BALANCE, INTERVAL, LAST_REVIEWED, NEXT_REVIEW];

const DEFAULT_EF: &str = "2.5";

/// Converts string-encoded scheduling sentinels back to numbers: `"0"` on the
/// counter/timestamp fields and `"2.5"` on `EF`. Anything else, including a
/// string like `"5"` or an already-numeric value, is left untouched. Returns
/// how many fields were rewritten.
pub fn coerce_record(record: &mut DeckRecord) -> usize {
    let mut changed = 0;
    for field in ZERO_FIELDS {
        if let Some(value) = record.rest.get_mut(*field) {
            if value.as_str() == Some("0") {
                *value = Value::from(0);
                changed += 1;
            }
        }
    }
    if let Some(value) = record.rest.get_mut(EF) {
        if value.as_str() == Some(DEFAULT_EF) {
            *value = Value::from(2.5);
            changed += 1;
        }
    }
    changed
}

/// File form: coerces every record in place and writes the deck back to the
/// same path. Returns the total number of rewritten fields.
pub fn coerce_scalars(path: &Path) -> Result<usize, DeckError> {
    let mut deck = persistence::load_deck(path)?;

    let mut changed = 0;
    for record in &mut deck {
        changed += coerce_record(record);
    }

    persistence::save_deck(path, &deck)?;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn record(value: serde_json::Value) -> DeckRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_sentinel_strings_become_numbers() {
        let mut rec = record(json!({
            "Word": "犬",
            "Meaning": "dog",
            "Reading": "いぬ",
            "EF": "2.5",
            "Interval": "0",
            "LastReviewed": "0",
            "NextReview": "0",
            "Balance": "0"
        }));

        assert_eq!(coerce_record(&mut rec), 5);
        assert_eq!(rec.rest["Balance"], json!(0));
        assert_eq!(rec.rest["Interval"], json!(0));
        assert_eq!(rec.rest["LastReviewed"], json!(0));
        assert_eq!(rec.rest["NextReview"], json!(0));
        assert_eq!(rec.rest["EF"], json!(2.5));
    }

    #[test]
    fn test_non_sentinel_values_left_alone() {
        let mut rec = record(json!({
            "Word": "犬",
            "Balance": "5",
            "Interval": 0,
            "EF": "2.6",
            "NextReview": 1700000000
        }));

        assert_eq!(coerce_record(&mut rec), 0);
        assert_eq!(rec.rest["Balance"], json!("5"));
        assert_eq!(rec.rest["Interval"], json!(0));
        assert_eq!(rec.rest["EF"], json!("2.6"));
        assert_eq!(rec.rest["NextReview"], json!(1700000000));
    }

    #[test]
    fn test_missing_fields_skipped() {
        let mut rec = record(json!({"Word": "犬", "Meaning": "dog"}));
        assert_eq!(coerce_record(&mut rec), 0);
    }

    #[test]
    fn test_file_rewritten_in_place() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("deck_default.json");

        let deck = json!([
            {"Word": "犬", "Meaning": "dog", "Reading": "いぬ", "Balance": "0", "EF": "2.5"},
            {"Word": "猫", "Meaning": "cat", "Reading": "ねこ", "Balance": "5", "EF": 2.5}
        ]);
        fs::write(&path, serde_json::to_string_pretty(&deck).unwrap()).unwrap();

        assert_eq!(coerce_scalars(&path).unwrap(), 2);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written[0]["Balance"], json!(0));
        assert_eq!(written[0]["EF"], json!(2.5));
        assert_eq!(written[1]["Balance"], json!("5"));
        assert_eq!(written[1]["EF"], json!(2.5));
    }
}
