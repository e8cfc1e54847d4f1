//! Draw pile and discard pile.
//!
//! ## Layout
//!
//! Both piles are LIFO: the top of the draw pile is the end of its `Vec`.
//! The discard pile is split into the face-up `top` card and the `buried`
//! cards beneath it, so the discard pile can never be empty once the deck
//! exists.
//!
//! ## Reshuffle
//!
//! When the draw pile runs dry, every buried discard is shuffled back into
//! the draw pile. The face-up top card stays where it is, keeping the active
//! color and rank legible.

use crate::core::GameRng;

use super::card::{Card, DECK_SIZE};

/// The shared piles of a game.
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    buried: Vec<Card>,
    top: Card,
    rng: GameRng,
    reshuffles: u32,
}

impl Deck {
    /// Build and shuffle the 108-card set, then reveal a top card.
    ///
    /// With `forced_top`, that card is placed face up without being removed
    /// from the draw pile, so the table holds one duplicate.
    #[must_use]
    pub fn new(mut rng: GameRng, forced_top: Option<Card>) -> Self {
        let mut draw_pile = Card::standard_deck();
        rng.shuffle(&mut draw_pile);

        let top = match forced_top {
            Some(card) => card,
            None => draw_pile.pop().expect("standard deck is never empty"),
        };

        Self {
            draw_pile,
            buried: Vec::new(),
            top,
            rng,
            reshuffles: 0,
        }
    }

    /// Pop the top of the draw pile, reshuffling buried discards if needed.
    ///
    /// Returns `None` only when both the draw pile and the buried discards
    /// are empty (every other card is in someone's hand).
    pub fn draw(&mut self) -> Option<Card> {
        if self.draw_pile.is_empty() {
            self.reshuffle();
        }
        self.draw_pile.pop()
    }

    /// Whether `draw` would produce a card.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.draw_pile.is_empty() || !self.buried.is_empty()
    }

    /// Put a card face up on the discard pile.
    pub fn play(&mut self, card: Card) {
        let previous = std::mem::replace(&mut self.top, card);
        self.buried.push(previous);
    }

    /// The face-up card.
    #[must_use]
    pub fn top_card(&self) -> Card {
        self.top
    }

    /// Cards remaining in the draw pile.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards in the discard pile, including the top card.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.buried.len() + 1
    }

    /// How many times the discard pile has been shuffled back in.
    #[must_use]
    pub fn reshuffle_count(&self) -> u32 {
        self.reshuffles
    }

    /// Cards held by both piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw_pile.len() + self.discard_len()
    }

    fn reshuffle(&mut self) {
        if self.buried.is_empty() {
            return;
        }
        tracing::debug!(cards = self.buried.len(), "reshuffling discard pile");
        self.draw_pile.append(&mut self.buried);
        self.rng.shuffle(&mut self.draw_pile);
        self.reshuffles += 1;
    }

    // === Scenario support ===

    /// Remove one copy of `card` from the draw pile.
    pub(crate) fn take_from_draw_pile(&mut self, card: Card) -> Option<Card> {
        let pos = self.draw_pile.iter().position(|&c| c == card)?;
        Some(self.draw_pile.remove(pos))
    }

    /// Return a card to a random position in the draw pile.
    pub(crate) fn return_to_draw_pile(&mut self, card: Card) {
        let pos = self.rng.gen_range_usize(0..self.draw_pile.len() + 1);
        self.draw_pile.insert(pos, card);
    }

    /// Move the top of the draw pile beneath the face-up card.
    pub(crate) fn bury_from_draw_pile(&mut self) -> bool {
        match self.draw_pile.pop() {
            Some(card) => {
                self.buried.push(card);
                true
            }
            None => false,
        }
    }
}

/// Cards on the table when `forced_top` introduced a duplicate.
#[must_use]
pub const fn table_size(forced_top: bool) -> usize {
    if forced_top {
        DECK_SIZE + 1
    } else {
        DECK_SIZE
    }
}
