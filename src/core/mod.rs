pub mod errors;
pub mod models;

pub use errors::DeckError;
pub use models::{Deck, DeckRecord, ResetSummary};
