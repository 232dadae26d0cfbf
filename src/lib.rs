pub mod core;
pub mod deck;
pub mod persistence;

pub use crate::core::{Deck, DeckError, DeckRecord};
