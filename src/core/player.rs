//! Players: identity, hand, shield, inbox, and client-side validation.
//!
//! ## PlayerId
//!
//! Stable, 1-based seat identifier. The first submitted agent is `Player 1`.
//!
//! ## Player
//!
//! Owns one participant's hand, shield flag, message inbox, and final result.
//! The engine mutates a player only through these methods.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Color};

use super::action::{ActionKind, ActionRequest, PendingRequest, RequestKind};
use super::error::ActionRejected;

/// Player identifier. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Zero-based seat index, `None` for the invalid id 0.
    #[must_use]
    pub const fn seat(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use uno_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u32).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Final standing of a player. Written once, when the game ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerResult {
    #[default]
    Unset,
    Winner,
    Loser,
}

/// A card removed from a hand, remembering where it came from.
///
/// Only `Player::take_card` creates one, and only `Player::restore` or the
/// engine's accepted-play path consumes it, so a card in flight can be
/// neither lost nor duplicated.
#[derive(Debug, PartialEq, Eq)]
pub struct TakenCard {
    card: Card,
    slot: usize,
}

impl TakenCard {
    /// The card in flight.
    #[must_use]
    pub fn card(&self) -> Card {
        self.card
    }

    /// Commit the removal: the card leaves the player for good.
    pub(crate) fn commit(self) -> Card {
        self.card
    }
}

/// One participant in a game.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    hand: SmallVec<[Card; 16]>,
    shielded: bool,
    inbox: Vec<String>,
    result: PlayerResult,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: SmallVec::new(),
            shielded: false,
            inbox: Vec::new(),
            result: PlayerResult::Unset,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The hand, in the order cards were received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    #[must_use]
    pub fn is_shielded(&self) -> bool {
        self.shielded
    }

    #[must_use]
    pub fn result(&self) -> PlayerResult {
        self.result
    }

    /// Messages waiting for the next broadcast.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.inbox
    }

    /// Add a card to the hand. Receiving a card drops any shield.
    pub fn give(&mut self, card: Card) {
        self.hand.push(card);
        self.shielded = false;
    }

    /// Queue a message for the next broadcast.
    pub fn message(&mut self, text: impl Into<String>) {
        self.inbox.push(text.into());
    }

    /// Drain the inbox.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.inbox)
    }

    /// Remove one copy of `card` from the hand.
    pub fn take_card(&mut self, card: Card) -> Option<TakenCard> {
        let slot = self.hand.iter().position(|&c| c == card)?;
        self.hand.remove(slot);
        Some(TakenCard { card, slot })
    }

    /// Put a taken card back in the slot it came from.
    pub fn restore(&mut self, taken: TakenCard) {
        let slot = taken.slot.min(self.hand.len());
        self.hand.insert(slot, taken.card);
    }

    /// Validate a raw request and normalize it for the action queue.
    ///
    /// A valid `Play card` removes the card from the hand immediately; the
    /// engine hands it back if it later rejects the play.
    pub fn take_action(&mut self, raw: &ActionRequest) -> Result<PendingRequest, ActionRejected> {
        let kind = ActionKind::parse(&raw.action).ok_or(ActionRejected::InvalidRequest)?;

        let kind = match kind {
            ActionKind::Nothing => RequestKind::Nothing,
            ActionKind::Draw => RequestKind::Draw,
            ActionKind::YellUno => RequestKind::YellUno,
            ActionKind::Play => {
                let code = raw.card.as_deref().ok_or(ActionRejected::InvalidRequest)?;
                let card = code
                    .parse::<Card>()
                    .ok()
                    .filter(|&c| self.has_card(c))
                    .ok_or_else(|| ActionRejected::NotInHand(code.to_string()))?;

                let next_color = match (card.is_wild(), raw.next_color.as_deref()) {
                    (true, None | Some("")) => return Err(ActionRejected::MissingNextColor(card)),
                    (true, Some(code)) => Some(
                        code.parse::<Color>()
                            .map_err(|_| ActionRejected::InvalidColor(code.to_string()))?,
                    ),
                    (false, Some(_)) => return Err(ActionRejected::UnexpectedNextColor(card)),
                    (false, None) => None,
                };

                match self.take_card(card) {
                    Some(taken) => RequestKind::Play { taken, next_color },
                    None => return Err(ActionRejected::NotInHand(code.to_string())),
                }
            }
        };

        Ok(PendingRequest::new(self.id, kind))
    }

    // === Engine-only mutation ===

    pub(crate) fn set_shielded(&mut self, shielded: bool) {
        self.shielded = shielded;
    }

    /// Record the final result. Only the first write sticks.
    pub(crate) fn set_result(&mut self, result: PlayerResult) {
        if self.result == PlayerResult::Unset {
            self.result = result;
        }
    }

    /// Empty the hand, returning its cards.
    pub(crate) fn clear_hand(&mut self) -> Vec<Card> {
        self.shielded = false;
        self.hand.drain(..).collect()
    }
}
