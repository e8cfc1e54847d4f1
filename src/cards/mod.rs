//! The card set and the shared piles.
//!
//! - `Card`, `Color`, `Rank`: the fixed 108-card set and its two-character codes
//! - `Deck`: draw pile and discard pile, with top-card-preserving reshuffle

mod card;
mod deck;

pub use card::{Card, CardParseError, Color, Rank, DECK_SIZE};
pub use deck::{table_size, Deck};
