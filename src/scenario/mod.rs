//! Building arbitrary game states.
//!
//! Start from a blank-slate engine (`GameConfig::blank_slate`) and arrange
//! hands, the top card, and turn state by hand. Every card placed comes out
//! of the draw pile and every card removed goes back into it, so the table
//! always holds the same cards.
//!
//! ```
//! use uno_engine::cards::Card;
//! use uno_engine::core::{GameConfig, PlayerId};
//! use uno_engine::events::NullSink;
//! use uno_engine::rules::Engine;
//!
//! let mut engine = Engine::with_sink(GameConfig::new(3).blank_slate(), NullSink).unwrap();
//! let p1 = PlayerId::new(1);
//!
//! engine.set_top_card("Y5".parse().unwrap()).unwrap();
//! engine.set_hand(p1, &["Y7".parse().unwrap(), Card::wild()]).unwrap();
//! engine.deal_random(PlayerId::new(2), 4).unwrap();
//!
//! assert_eq!(engine.player(p1).unwrap().hand_size(), 2);
//! assert_eq!(engine.total_cards(), engine.expected_total());
//! ```

use crate::cards::{Card, Color};
use crate::core::{EngineError, GameConfig, PlayerId};
use crate::events::EventSink;
use crate::rules::Engine;

impl Engine {
    /// Move one copy of `card` from the draw pile into a hand.
    pub fn deal_card(&mut self, player: PlayerId, card: Card) -> Result<(), EngineError> {
        let seat = self.seat_index(player)?;
        let card = self
            .deck
            .take_from_draw_pile(card)
            .ok_or(EngineError::CardUnavailable(card))?;
        self.players[seat].give(card);
        Ok(())
    }

    /// Deal `count` cards from the top of the draw pile. Returns how many
    /// were dealt, which is less than `count` only if the deck ran dry.
    pub fn deal_random(&mut self, player: PlayerId, count: usize) -> Result<usize, EngineError> {
        let seat = self.seat_index(player)?;
        let mut dealt = 0;
        for _ in 0..count {
            let Some(card) = self.draw_from_deck() else {
                break;
            };
            self.players[seat].give(card);
            dealt += 1;
        }
        Ok(dealt)
    }

    /// Shuffle a player's hand back into the draw pile.
    pub fn return_hand(&mut self, player: PlayerId) -> Result<(), EngineError> {
        let seat = self.seat_index(player)?;
        for card in self.players[seat].clear_hand() {
            self.deck.return_to_draw_pile(card);
        }
        Ok(())
    }

    /// Replace a player's hand with exactly `cards`.
    ///
    /// The old hand goes back to the draw pile first. Fails on the first card
    /// the draw pile cannot supply, leaving the cards before it dealt.
    pub fn set_hand(&mut self, player: PlayerId, cards: &[Card]) -> Result<(), EngineError> {
        self.return_hand(player)?;
        for &card in cards {
            self.deal_card(player, card)?;
        }
        Ok(())
    }

    /// Move `card` from the draw pile onto the discard pile.
    ///
    /// The active color follows the card; a wild leaves it open until
    /// `set_active_color` names one.
    pub fn set_top_card(&mut self, card: Card) -> Result<(), EngineError> {
        let card = self
            .deck
            .take_from_draw_pile(card)
            .ok_or(EngineError::CardUnavailable(card))?;
        self.deck.play(card);
        self.active_color = card.color();
        Ok(())
    }

    pub fn set_active_color(&mut self, color: Option<Color>) {
        self.active_color = color;
    }

    pub fn set_current_player(&mut self, player: PlayerId) -> Result<(), EngineError> {
        if self.turn.set_current(player) {
            Ok(())
        } else {
            Err(EngineError::UnknownPlayer(player))
        }
    }

    pub fn set_pending_draw(&mut self, count: u32) {
        self.pending_draw = count;
    }

    pub fn set_shielded(&mut self, player: PlayerId, shielded: bool) -> Result<(), EngineError> {
        let seat = self.seat_index(player)?;
        self.players[seat].set_shielded(shielded);
        Ok(())
    }

    /// Move up to `count` cards from the draw pile beneath the top card.
    pub fn bury_random(&mut self, count: usize) -> usize {
        (0..count)
            .take_while(|_| self.deck.bury_from_draw_pile())
            .count()
    }

    /// A random mid-game state.
    ///
    /// Every seat holds 1 to 9 cards, a random seat is to act, and the
    /// leftover cards are split between the draw and discard piles with at
    /// least one left to draw.
    pub fn random_mid_game(
        config: GameConfig,
        sink: impl EventSink + 'static,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::with_sink(config.blank_slate(), sink)?;

        for id in PlayerId::all(engine.players.len()) {
            let count = engine.scenario_rng.gen_range_usize(1..10);
            engine.deal_random(id, count)?;
        }

        let seat = engine.scenario_rng.gen_range_usize(0..engine.players.len());
        engine.turn.set_current(engine.players[seat].id());

        let buried = engine.scenario_rng.gen_range_usize(0..engine.deck.draw_pile_len());
        engine.bury_random(buried);

        if engine.deck.top_card().is_wild() {
            engine.active_color = engine.scenario_rng.choose(&Color::ALL).copied();
        }

        tracing::debug!(
            current = engine.turn.current().0,
            draw_pile = engine.deck.draw_pile_len(),
            discard = engine.deck.discard_len(),
            "synthesized mid-game state"
        );
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullSink;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    fn blank(players: usize) -> Engine {
        Engine::with_sink(GameConfig::new(players).blank_slate().with_seed(11), NullSink).unwrap()
    }

    #[test]
    fn test_deal_card_moves_from_draw_pile() {
        let mut e = blank(2);
        let before = e.deck().draw_pile_len();
        e.deal_card(PlayerId::new(1), card("B5")).unwrap();
        assert_eq!(e.deck().draw_pile_len(), before - 1);
        assert_eq!(e.player(PlayerId::new(1)).unwrap().hand(), &[card("B5")]);
        assert_eq!(e.total_cards(), e.expected_total());
    }

    #[test]
    fn test_deal_card_unavailable() {
        let mut e = blank(2);
        let copies = 4 - usize::from(e.top_card() == Card::wild());
        for _ in 0..copies {
            e.deal_card(PlayerId::new(1), Card::wild()).unwrap();
        }
        let err = e.deal_card(PlayerId::new(2), Card::wild()).unwrap_err();
        assert!(matches!(err, EngineError::CardUnavailable(c) if c == Card::wild()));
        assert_eq!(e.player(PlayerId::new(2)).unwrap().hand_size(), 0);
    }

    #[test]
    fn test_set_hand_returns_old_cards() {
        let mut e = blank(2);
        let p = PlayerId::new(2);
        e.deal_random(p, 6).unwrap();
        e.set_hand(p, &[card("G1")]).unwrap();
        assert_eq!(e.player(p).unwrap().hand(), &[card("G1")]);
        assert_eq!(e.total_cards(), e.expected_total());
    }

    #[test]
    fn test_set_top_card_sets_color() {
        let mut e = blank(2);
        e.set_top_card(card("Y5")).unwrap();
        assert_eq!(e.top_card(), card("Y5"));
        assert_eq!(e.active_color(), Some(Color::Yellow));
        assert_eq!(e.deck().discard_len(), 2);
        assert_eq!(e.total_cards(), e.expected_total());
    }

    #[test]
    fn test_bury_random_stops_at_empty_pile() {
        let mut e = blank(2);
        let available = e.deck().draw_pile_len();
        assert_eq!(e.bury_random(available + 5), available);
        assert_eq!(e.deck().draw_pile_len(), 0);
        assert_eq!(e.total_cards(), e.expected_total());
    }

    #[test]
    fn test_random_mid_game() {
        for seed in 0..20 {
            let e = Engine::random_mid_game(GameConfig::new(5).with_seed(seed), NullSink).unwrap();
            assert!(e.players().iter().all(|p| (1..=9).contains(&p.hand_size())));
            assert!(e.deck().draw_pile_len() >= 1);
            assert!(e.active_color().is_some());
            assert_eq!(e.total_cards(), e.expected_total());
        }
    }
}
