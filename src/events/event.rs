//! Game event types.
//!
//! Events describe what the engine did, in the order it did it. They carry
//! only public information: a drawn card is never named.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::{ActionKind, PlayerId};
use crate::rules::Direction;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Opening hands were dealt.
    Dealt { players: usize, cards_each: usize },

    /// The opening card was turned face up.
    TopCardRevealed { card: Card },

    /// A validated request entered the action queue.
    RequestQueued { player: PlayerId, kind: ActionKind },

    CardPlayed { player: PlayerId, card: Card },

    /// A card was drawn. `owed` is the forced-draw count left afterwards.
    CardDrawn { player: PlayerId, owed: u32 },

    /// A request was refused; `reason` is the message sent to the player.
    Rejected { player: PlayerId, reason: String },

    /// `player` is now the one to act.
    TurnAdvanced { player: PlayerId },

    DirectionReversed { direction: Direction },

    ColorChosen { color: Color },

    /// Buried discards were shuffled back into the draw pile.
    Reshuffled { draw_pile: usize },

    Shielded { player: PlayerId },

    Caught { caller: PlayerId, target: PlayerId, penalty: usize },

    /// An UNO call that matched nobody.
    UnoCallMissed { caller: PlayerId },

    Won { player: PlayerId },
}
