//! Action requests: the JSON wire form, the normalized queue entry, and history.
//!
//! Agents speak the wire form:
//!
//! ```text
//! {"action": "Do nothing"}
//! {"action": "Draw card"}
//! {"action": "Yell UNO"}
//! {"action": "Play card", "card": "WF", "nextColor": "R"}
//! ```
//!
//! `Player::take_action` validates a wire request and turns it into a
//! `PendingRequest`, which the engine consumes exactly once.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};

use super::error::{ActionRejected, RuleViolation};
use super::player::{PlayerId, TakenCard};

/// The four kinds of request an agent can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "Play card")]
    Play,
    #[serde(rename = "Draw card")]
    Draw,
    #[serde(rename = "Yell UNO")]
    YellUno,
    #[serde(rename = "Do nothing")]
    Nothing,
}

impl ActionKind {
    /// Wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::Play => "Play card",
            ActionKind::Draw => "Draw card",
            ActionKind::YellUno => "Yell UNO",
            ActionKind::Nothing => "Do nothing",
        }
    }

    /// Parse a wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<ActionKind> {
        [ActionKind::Play, ActionKind::Draw, ActionKind::YellUno, ActionKind::Nothing]
            .into_iter()
            .find(|k| k.as_str() == name)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw request exactly as an agent sent it.
///
/// Fields stay as strings so that bad card or color codes reach
/// `Player::take_action` and produce a message instead of a parse failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,

    #[serde(rename = "nextColor", default, skip_serializing_if = "Option::is_none")]
    pub next_color: Option<String>,
}

impl ActionRequest {
    fn of(kind: ActionKind) -> Self {
        Self {
            action: kind.as_str().to_string(),
            card: None,
            next_color: None,
        }
    }

    #[must_use]
    pub fn nothing() -> Self {
        Self::of(ActionKind::Nothing)
    }

    #[must_use]
    pub fn draw() -> Self {
        Self::of(ActionKind::Draw)
    }

    #[must_use]
    pub fn yell_uno() -> Self {
        Self::of(ActionKind::YellUno)
    }

    /// Play a card without choosing a color.
    #[must_use]
    pub fn play(card: Card) -> Self {
        Self {
            card: Some(card.to_string()),
            ..Self::of(ActionKind::Play)
        }
    }

    /// Play a wild card and name the next color.
    #[must_use]
    pub fn play_wild(card: Card, color: Color) -> Self {
        Self::play(card).with_next_color(color.to_string())
    }

    /// Attach a raw `nextColor` code.
    #[must_use]
    pub fn with_next_color(mut self, color: impl Into<String>) -> Self {
        self.next_color = Some(color.into());
        self
    }

    /// Parse an agent's text reply.
    ///
    /// Text that is not JSON at all is an invalid response; JSON that does
    /// not describe a request is an invalid request.
    pub fn from_json(text: &str) -> Result<Self, ActionRejected> {
        let value: serde_json::Value =
            serde_json::from_str(text.trim()).map_err(|_| ActionRejected::InvalidResponse)?;
        serde_json::from_value(value).map_err(|_| ActionRejected::InvalidRequest)
    }

    /// Serialize to the wire form.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// What a validated request asks the engine to do.
#[derive(Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// Play a card already removed from the requester's hand.
    Play {
        taken: TakenCard,
        next_color: Option<Color>,
    },
    Draw,
    YellUno,
    Nothing,
}

impl RequestKind {
    #[must_use]
    pub fn action_kind(&self) -> ActionKind {
        match self {
            RequestKind::Play { .. } => ActionKind::Play,
            RequestKind::Draw => ActionKind::Draw,
            RequestKind::YellUno => ActionKind::YellUno,
            RequestKind::Nothing => ActionKind::Nothing,
        }
    }
}

/// A validated request waiting in the action queue.
///
/// Only `Player::take_action` builds these, so the requester id always
/// matches the hand a played card was taken from.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingRequest {
    player: PlayerId,
    kind: RequestKind,
}

impl PendingRequest {
    pub(crate) fn new(player: PlayerId, kind: RequestKind) -> Self {
        Self { player, kind }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn kind(&self) -> &RequestKind {
        &self.kind
    }

    /// The card being played, if this is a play.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match &self.kind {
            RequestKind::Play { taken, .. } => Some(taken.card()),
            _ => None,
        }
    }

    /// The chosen color, if this is a wild play.
    #[must_use]
    pub fn next_color(&self) -> Option<Color> {
        match &self.kind {
            RequestKind::Play { next_color, .. } => *next_color,
            _ => None,
        }
    }

    pub(crate) fn into_parts(self) -> (PlayerId, RequestKind) {
        (self.player, self.kind)
    }
}

/// Result of the engine applying one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Card accepted and resolved.
    Played(Card),
    /// Card accepted and it was the player's last.
    Won(Card),
    /// One card drawn.
    Drew,
    /// The caller had one card and is now shielded.
    Shielded,
    /// The caller caught an unshielded opponent holding one card.
    Caught { target: PlayerId, penalty: usize },
    /// Accepted but changed nothing.
    NoEffect,
    /// Rejected; the reason was sent to the requester.
    Rejected(RuleViolation),
}

impl Outcome {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

/// A processed request, kept in the engine's history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRecord {
    /// The player who made the request.
    pub player: PlayerId,

    pub kind: ActionKind,

    /// Card played, if any.
    pub card: Option<Card>,

    /// Round in which the request was processed (0 for direct calls before
    /// the first round).
    pub round: u32,

    /// Position in the overall processing order.
    pub sequence: u32,

    pub outcome: Outcome,
}
