//! Card identity: colors, ranks, and the two-character card codes.
//!
//! ## Card Codes
//!
//! Every card has a two-character code used on the wire and in contexts:
//! - First character: `R`, `Y`, `G`, `B` for colored cards, `W` for wilds
//! - Second character: `0`-`9`, `S` (skip), `R` (reverse), `D` (draw two)
//!   for colored cards; `W` (wild) or `F` (wild draw four) for wilds
//!
//! ```
//! use uno_engine::cards::{Card, Color, Rank};
//!
//! let card: Card = "YR".parse().unwrap();
//! assert_eq!(card.color(), Some(Color::Yellow));
//! assert_eq!(card.rank(), Rank::Reverse);
//! assert_eq!(card.to_string(), "YR");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 108;

/// One of the four named colors. Wild cards have no color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// All named colors, in deck-building order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    /// Single-character code for this color.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    /// Parse a single-character color code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Color> {
        match code {
            'R' => Some(Color::Red),
            'Y' => Some(Color::Yellow),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Color {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Color::from_code(c).ok_or_else(|| CardParseError::Color(s.to_string())),
            _ => Err(CardParseError::Color(s.to_string())),
        }
    }
}

/// Card rank (the second half of the code).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Number card, 0-9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    /// Single-character code for this rank.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Rank::Number(n) => (b'0' + n) as char,
            Rank::Skip => 'S',
            Rank::Reverse => 'R',
            Rank::DrawTwo => 'D',
            Rank::Wild => 'W',
            Rank::WildDrawFour => 'F',
        }
    }

    /// Whether this rank only exists on wild cards.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    /// Cards the next player owes when this rank is played.
    #[must_use]
    pub const fn draw_penalty(self) -> u32 {
        match self {
            Rank::DrawTwo => 2,
            Rank::WildDrawFour => 4,
            _ => 0,
        }
    }
}

/// A single card.
///
/// Cards are plain values: two cards with the same code are interchangeable,
/// so hands are multisets of `Card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    color: Option<Color>,
    rank: Rank,
}

impl Card {
    /// A colored card. Returns `None` for wild ranks or numbers above 9.
    #[must_use]
    pub const fn colored(color: Color, rank: Rank) -> Option<Card> {
        match rank {
            Rank::Wild | Rank::WildDrawFour => None,
            Rank::Number(n) if n > 9 => None,
            _ => Some(Card {
                color: Some(color),
                rank,
            }),
        }
    }

    /// The plain wild card (`WW`).
    #[must_use]
    pub const fn wild() -> Card {
        Card {
            color: None,
            rank: Rank::Wild,
        }
    }

    /// The wild draw four card (`WF`).
    #[must_use]
    pub const fn wild_draw_four() -> Card {
        Card {
            color: None,
            rank: Rank::WildDrawFour,
        }
    }

    /// Face color, `None` for wild cards.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn is_wild(self) -> bool {
        self.color.is_none()
    }

    /// Whether this card may be played onto `top` while `active_color` is in force.
    ///
    /// `active_color` is `None` only when the very first card revealed was a wild,
    /// in which case anything goes.
    #[must_use]
    pub fn playable_on(self, top: Card, active_color: Option<Color>) -> bool {
        match active_color {
            None => true,
            Some(active) => self.is_wild() || self.color == Some(active) || self.rank == top.rank,
        }
    }

    /// The fixed 108-card set, unshuffled.
    ///
    /// Per color: one 0, two each of 1-9, Skip, Reverse and Draw Two.
    /// Plus four Wild and four Wild Draw Four.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for color in Color::ALL {
            cards.push(Card {
                color: Some(color),
                rank: Rank::Number(0),
            });
            let doubled = (1..=9)
                .map(Rank::Number)
                .chain([Rank::Skip, Rank::Reverse, Rank::DrawTwo]);
            for rank in doubled {
                let card = Card {
                    color: Some(color),
                    rank,
                };
                cards.push(card);
                cards.push(card);
            }
        }

        for _ in 0..4 {
            cards.push(Card::wild());
        }
        for _ in 0..4 {
            cards.push(Card::wild_draw_four());
        }

        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.color.map_or('W', Color::code);
        write!(f, "{}{}", color, self.rank.code())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardParseError::Card(s.to_string());
        let mut chars = s.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        if first == 'W' {
            return match second {
                'W' => Ok(Card::wild()),
                'F' => Ok(Card::wild_draw_four()),
                _ => Err(invalid()),
            };
        }

        let color = Color::from_code(first).ok_or_else(invalid)?;
        let rank = match second {
            'S' => Rank::Skip,
            'R' => Rank::Reverse,
            'D' => Rank::DrawTwo,
            d => Rank::Number(d.to_digit(10).ok_or_else(invalid)? as u8),
        };
        Card::colored(color, rank).ok_or_else(invalid)
    }
}

/// Failure to parse a card or color code.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("invalid card code {0:?}")]
    Card(String),
    #[error("invalid color code {0:?}")]
    Color(String),
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
