//! What each player is shown before acting.
//!
//! A `BroadcastContext` holds the player's own hand and public table
//! information only. Opponents' cards are never included.

use serde::Serialize;

use crate::cards::{Card, Color};
use crate::core::PlayerId;

/// Public view of one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeatSummary {
    pub player: PlayerId,
    pub hand_size: usize,
    pub shielded: bool,
}

/// Everything an agent sees for one broadcast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BroadcastContext {
    /// The player this context was built for.
    pub player: PlayerId,

    /// Whether `player` is the one to act.
    pub is_turn: bool,

    /// The player's hand, in stable order.
    pub hand: Vec<Card>,

    /// Every seat, in seat order.
    pub table: Vec<SeatSummary>,

    pub draw_pile_size: usize,

    pub top_card: Card,

    /// `None` while a wild opening card leaves the color open.
    pub active_color: Option<Color>,

    /// Cards the player still owes. Zero unless it is their turn.
    pub must_draw: u32,

    /// Inbox contents, drained by this broadcast.
    pub messages: Vec<String>,
}

impl BroadcastContext {
    /// Summary row for `player`, if seated.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> Option<&SeatSummary> {
        self.table.iter().find(|s| s.player == player)
    }

    /// Cards in hand that may legally go on the current top card.
    pub fn playable(&self) -> impl Iterator<Item = Card> + '_ {
        self.hand
            .iter()
            .copied()
            .filter(|c| c.playable_on(self.top_card, self.active_color))
    }

    /// Render as text lines for text-driven agents.
    ///
    /// ```text
    /// Cards
    /// R1 G5 WW
    /// Player | Cards | shielded:
    /// 1 3 F
    /// 2 7 F
    /// 80 card(s) in draw deck.
    /// Top card: G2
    /// Messages:
    /// - It is not your turn.
    /// ```
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(8 + self.table.len() + self.messages.len());

        lines.push("Cards".to_string());
        lines.push(
            self.hand
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        );

        lines.push("Player | Cards | shielded:".to_string());
        for seat in &self.table {
            lines.push(format!(
                "{} {} {}",
                seat.player.0,
                seat.hand_size,
                if seat.shielded { "T" } else { "F" }
            ));
        }

        lines.push(format!("{} card(s) in draw deck.", self.draw_pile_size));
        lines.push(format!("Top card: {}", self.top_card));

        lines.push("Messages:".to_string());
        lines.extend(self.messages.iter().map(|m| format!("- {m}")));
        lines
    }

    /// `lines()` joined with newlines.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }
}
