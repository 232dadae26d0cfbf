use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

pub const WORD: &str = "Word";
pub const MEANING: &str = "Meaning";
pub const READING: &str = "Reading";
pub const EF: &str = "EF";
pub const INTERVAL: &str = "Interval";
pub const LAST_REVIEWED: &str = "LastReviewed";
pub const NEXT_REVIEW: &str = "NextReview";
pub const BALANCE: &str = "Balance";

/// One flashcard in a deck file. Only the fields the tools rewrite are named;
/// everything else (scheduling scalars included) rides along in `rest` exactly
/// as it appeared in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckRecord {
    #[serde(rename = "Word", default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,

    #[serde(rename = "Meaning", default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,

    #[serde(rename = "Reading", default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A deck file is a top-level JSON array of records.
pub type Deck = Vec<DeckRecord>;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ResetSummary {
    pub processed: usize,
    pub substituted: usize,
    pub errors: usize,
}
