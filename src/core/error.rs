//! Error types.
//!
//! Three classes, matching how far a failure reaches:
//! - `ActionRejected`: a request failed client-side validation. Only the
//!   requester hears about it.
//! - `RuleViolation`: the engine refused a request. Any card in flight goes
//!   back to the requester's hand; only the requester hears about it.
//! - `EngineError`: the caller broke an invariant (unknown player, wrong
//!   number of agents). Returned as `Err`, never turned into a message.
//!
//! The `Display` text of the first two is what lands in the player's inbox.

use thiserror::Error;

use crate::cards::Card;

use super::config::ConfigError;
use super::player::PlayerId;

/// Client-side validation failure in `Player::take_action`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionRejected {
    #[error("Invalid response. Send JSON.")]
    InvalidResponse,

    #[error("Invalid request.")]
    InvalidRequest,

    #[error("You do not have card {0} in your hand.")]
    NotInHand(String),

    #[error("You played a wild (W) card {0} so must indicate the next color.")]
    MissingNextColor(Card),

    #[error("Invalid color {0}")]
    InvalidColor(String),

    #[error("You played non-wild card {0} but tried to change the color.")]
    UnexpectedNextColor(Card),
}

/// A request the engine refused under the rules.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("It is not your turn.")]
    NotYourTurn,

    #[error("Invalid card.")]
    IllegalCard(Card),

    #[error("You must draw a card.")]
    MustDraw(u32),

    #[error("No more cards to draw!")]
    NothingToDraw,

    #[error("The game is over.")]
    GameOver,
}

/// Integration errors. These indicate a bug in the caller.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("tried to get invalid player {0}")]
    UnknownPlayer(PlayerId),

    #[error("{agents} agents supplied for {seats} seats")]
    AgentCountMismatch { seats: usize, agents: usize },

    #[error("card {0} is not in the draw pile")]
    CardUnavailable(Card),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
