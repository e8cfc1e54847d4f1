//! The authoritative game engine.
//!
//! ## Flow
//!
//! 1. `Engine::new` deals, reveals the top card, and resolves it as if it had
//!    just been played, then gives the first turn back to `Player 1`.
//! 2. Each round every player is shown a `BroadcastContext` (in acting order)
//!    and its agent may reply once. Valid replies enter the action queue.
//! 3. The queue is drained in arrival order. Each request is re-validated
//!    against the live state, so a later request sees the effects of an
//!    earlier one from the same round.
//!
//! ## Rejections
//!
//! A refused request changes nothing except the requester's inbox. A card
//! taken from the hand for a refused play goes back into the same slot.

use im::Vector;

use crate::agents::{Agent, Reply};
use crate::cards::{table_size, Card, Color, Deck, Rank};
use crate::core::{
    ActionKind, ActionRecord, ActionRejected, ActionRequest, EngineError, GameConfig, GameRng,
    Outcome, PendingRequest, Player, PlayerId, PlayerResult, RequestKind, RuleViolation,
    TakenCard,
};
use crate::events::{EventSink, GameEvent, TracingSink};

use super::context::{BroadcastContext, SeatSummary};
use super::queue::ActionQueue;
use super::turn::{Direction, TurnOrder};

/// Lifecycle of a game.
///
/// An engine is `Playing` as soon as construction returns; dealing and the
/// opening card are resolved before anyone can observe it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Ended,
}

/// What became of a submitted request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Validated and waiting in the queue.
    Queued,
    /// The agent chose not to act.
    Passed,
    /// Failed validation; the reason went to the player's inbox.
    Rejected(ActionRejected),
}

/// How a call to `play_game` ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Finished { winner: PlayerId },
    /// The round limit was reached with nobody out of cards.
    Stalled,
}

/// Summary of a finished (or abandoned) game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// Rounds played by this call.
    pub rounds: u32,
    pub status: GameStatus,
    pub results: Vec<(PlayerId, PlayerResult)>,
}

impl GameSummary {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Stalled => None,
        }
    }
}

/// Owns all state for one game.
pub struct Engine {
    pub(crate) config: GameConfig,
    pub(crate) deck: Deck,
    pub(crate) players: Vec<Player>,
    pub(crate) turn: TurnOrder,
    pub(crate) queue: ActionQueue,
    pub(crate) active_color: Option<Color>,
    pub(crate) pending_draw: u32,
    pub(crate) phase: Phase,
    pub(crate) scenario_rng: GameRng,
    round: u32,
    sequence: u32,
    history: Vector<ActionRecord>,
    sink: Box<dyn EventSink>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("phase", &self.phase)
            .field("current", &self.turn.current())
            .field("top_card", &self.deck.top_card())
            .field("active_color", &self.active_color)
            .field("pending_draw", &self.pending_draw)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Create a game that reports to `tracing`.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_sink(config, TracingSink)
    }

    /// Create a game that reports to `sink`.
    pub fn with_sink(
        config: GameConfig,
        sink: impl EventSink + 'static,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let rng = GameRng::new(config.seed);
        let deck = Deck::new(rng.for_context("deck"), config.forced_top_card);
        let players = PlayerId::all(config.player_count).map(Player::new).collect();

        let mut engine = Self {
            turn: TurnOrder::new(config.player_count),
            scenario_rng: rng.for_context("scenario"),
            config,
            deck,
            players,
            queue: ActionQueue::new(),
            active_color: None,
            pending_draw: 0,
            phase: Phase::Playing,
            round: 0,
            sequence: 0,
            history: Vector::new(),
            sink: Box::new(sink),
        };

        let top = engine.deck.top_card();
        engine.emit(GameEvent::TopCardRevealed { card: top });

        if engine.config.blank_slate {
            engine.active_color = top.color();
        } else {
            engine.deal();
            // Resolve the opening card, then rewind to the first seat.
            engine.resolve(top, top.color());
            engine.turn.reset_to_first_seat();
        }

        tracing::debug!(
            players = engine.players.len(),
            top = %top,
            current = engine.turn.current().0,
            "game started"
        );
        Ok(engine)
    }

    fn deal(&mut self) {
        let hand = self.config.starting_hand_size;
        for _ in 0..hand {
            for seat in 0..self.players.len() {
                if let Some(card) = self.draw_from_deck() {
                    self.players[seat].give(card);
                }
            }
        }
        self.emit(GameEvent::Dealt {
            players: self.players.len(),
            cards_each: hand,
        });
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Look up a player.
    pub fn player(&self, id: PlayerId) -> Result<&Player, EngineError> {
        let seat = self.seat_index(id)?;
        Ok(&self.players[seat])
    }

    /// All players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.turn.direction()
    }

    /// Every seat, starting from the current player.
    #[must_use]
    pub fn acting_order(&self) -> Vec<PlayerId> {
        self.turn.acting_order().collect()
    }

    /// Color a non-wild card must match. `None` means any card is legal.
    #[must_use]
    pub fn active_color(&self) -> Option<Color> {
        self.active_color
    }

    /// Cards the current player owes before they may play.
    #[must_use]
    pub fn pending_draw_count(&self) -> u32 {
        self.pending_draw
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn top_card(&self) -> Card {
        self.deck.top_card()
    }

    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every processed request, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.result() == PlayerResult::Winner)
            .map(Player::id)
    }

    /// Cards currently on the table: both piles, every hand, and cards
    /// riding in queued plays.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.card_count()
            + self.players.iter().map(Player::hand_size).sum::<usize>()
            + self.queue.held_cards()
    }

    /// What `total_cards` must always equal for this configuration.
    #[must_use]
    pub fn expected_total(&self) -> usize {
        table_size(self.config.forced_top_card.is_some())
    }

    pub(crate) fn seat_index(&self, id: PlayerId) -> Result<usize, EngineError> {
        self.turn.seat_of(id).ok_or(EngineError::UnknownPlayer(id))
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.sink.emit(&event);
    }

    // === Request intake ===

    /// Validate a raw request on the player's side and queue it.
    ///
    /// Validation failures are not errors: the reason goes to the player's
    /// inbox and comes back as `Submission::Rejected`.
    pub fn submit(&mut self, id: PlayerId, raw: &ActionRequest) -> Result<Submission, EngineError> {
        let seat = self.seat_index(id)?;
        match self.players[seat].take_action(raw) {
            Ok(request) => {
                self.emit(GameEvent::RequestQueued {
                    player: id,
                    kind: request.kind().action_kind(),
                });
                self.queue.push(request);
                Ok(Submission::Queued)
            }
            Err(rejected) => {
                self.notify_rejection(seat, rejected.to_string());
                Ok(Submission::Rejected(rejected))
            }
        }
    }

    /// Handle whatever an agent replied with.
    pub fn submit_reply(&mut self, id: PlayerId, reply: Reply) -> Result<Submission, EngineError> {
        match reply {
            Reply::Pass => {
                self.seat_index(id)?;
                Ok(Submission::Passed)
            }
            Reply::Action(raw) => self.submit(id, &raw),
            Reply::Text(text) => match ActionRequest::from_json(&text) {
                Ok(raw) => self.submit(id, &raw),
                Err(rejected) => {
                    let seat = self.seat_index(id)?;
                    self.notify_rejection(seat, rejected.to_string());
                    Ok(Submission::Rejected(rejected))
                }
            },
        }
    }

    fn notify_rejection(&mut self, seat: usize, reason: String) {
        let player = self.players[seat].id();
        self.players[seat].message(reason.clone());
        self.emit(GameEvent::Rejected { player, reason });
    }

    // === Processing ===

    /// Apply the oldest queued request, if any.
    pub fn process_next(&mut self) -> Result<Option<Outcome>, EngineError> {
        match self.queue.pop() {
            Some(request) => self.process_request(request).map(Some),
            None => Ok(None),
        }
    }

    /// Apply every queued request in arrival order.
    pub fn drain_queue(&mut self) -> Result<Vec<Outcome>, EngineError> {
        let mut outcomes = Vec::with_capacity(self.queue.len());
        while let Some(request) = self.queue.pop() {
            outcomes.push(self.process_request(request)?);
        }
        Ok(outcomes)
    }

    /// Authoritatively apply one request.
    pub fn process_request(&mut self, request: PendingRequest) -> Result<Outcome, EngineError> {
        let card = request.card();
        let (id, kind) = request.into_parts();
        let seat = self.seat_index(id)?;
        let action = kind.action_kind();

        let outcome = if self.phase != Phase::Playing && action != ActionKind::Nothing {
            if let RequestKind::Play { taken, .. } = kind {
                self.players[seat].restore(taken);
            }
            Outcome::Rejected(RuleViolation::GameOver)
        } else {
            match kind {
                RequestKind::Play { taken, next_color } => self.play_card(seat, taken, next_color),
                RequestKind::Draw => self.draw_card(seat),
                RequestKind::YellUno => self.yell_uno(seat),
                RequestKind::Nothing => Outcome::NoEffect,
            }
        };

        if let Outcome::Rejected(violation) = &outcome {
            self.notify_rejection(seat, violation.to_string());
        }

        self.sequence += 1;
        self.history.push_back(ActionRecord {
            player: id,
            kind: action,
            card,
            round: self.round,
            sequence: self.sequence,
            outcome: outcome.clone(),
        });

        Ok(outcome)
    }

    fn play_card(&mut self, seat: usize, taken: TakenCard, next_color: Option<Color>) -> Outcome {
        let id = self.players[seat].id();
        let card = taken.card();

        let violation = if self.turn.current() != id {
            Some(RuleViolation::NotYourTurn)
        } else if !card.playable_on(self.deck.top_card(), self.active_color) {
            Some(RuleViolation::IllegalCard(card))
        } else if self.pending_draw > 0 {
            Some(RuleViolation::MustDraw(self.pending_draw))
        } else {
            None
        };

        if let Some(violation) = violation {
            self.players[seat].restore(taken);
            return Outcome::Rejected(violation);
        }

        let card = taken.commit();
        self.deck.play(card);
        self.emit(GameEvent::CardPlayed { player: id, card });

        if self.players[seat].hand_size() == 0 {
            self.declare_winner(id);
            return Outcome::Won(card);
        }

        self.resolve(card, next_color);
        self.emit(GameEvent::TurnAdvanced {
            player: self.turn.current(),
        });
        Outcome::Played(card)
    }

    fn draw_card(&mut self, seat: usize) -> Outcome {
        let id = self.players[seat].id();
        if self.turn.current() != id {
            return Outcome::Rejected(RuleViolation::NotYourTurn);
        }

        match self.draw_from_deck() {
            Some(card) => {
                self.pending_draw = self.pending_draw.saturating_sub(1);
                self.players[seat].give(card);
                self.emit(GameEvent::CardDrawn {
                    player: id,
                    owed: self.pending_draw,
                });
                Outcome::Drew
            }
            None => Outcome::Rejected(RuleViolation::NothingToDraw),
        }
    }

    fn yell_uno(&mut self, seat: usize) -> Outcome {
        let caller = self.players[seat].id();

        if self.players[seat].hand_size() == 1 {
            self.players[seat].set_shielded(true);
            self.players[seat].message("You are shielded.");
            self.emit(GameEvent::Shielded { player: caller });
            return Outcome::Shielded;
        }

        let target = self.turn.order_from(caller).skip(1).find(|&other| {
            other
                .seat()
                .and_then(|s| self.players.get(s))
                .is_some_and(|p| p.hand_size() == 1 && !p.is_shielded())
        });

        let Some(target) = target else {
            self.emit(GameEvent::UnoCallMissed { caller });
            return Outcome::NoEffect;
        };
        let Some(target_seat) = target.seat() else {
            return Outcome::NoEffect;
        };

        self.players[seat].message("You caught somebody!");
        self.players[target_seat].message("Somebody said uno before you.");

        let mut penalty = 0;
        for _ in 0..self.config.uno_penalty {
            let Some(card) = self.draw_from_deck() else {
                break;
            };
            self.players[target_seat].give(card);
            penalty += 1;
        }

        self.emit(GameEvent::Caught {
            caller,
            target,
            penalty,
        });
        Outcome::Caught { target, penalty }
    }

    /// Apply the rank effect of a card that just landed on the discard pile.
    fn resolve(&mut self, card: Card, chosen: Option<Color>) {
        match card.rank() {
            Rank::Skip => {
                self.turn.advance();
                self.turn.advance();
            }
            Rank::DrawTwo | Rank::WildDrawFour => {
                self.pending_draw += card.rank().draw_penalty();
                self.turn.advance();
            }
            Rank::Reverse => {
                self.turn.reverse();
                self.emit(GameEvent::DirectionReversed {
                    direction: self.turn.direction(),
                });
            }
            Rank::Wild | Rank::Number(_) => {
                self.turn.advance();
            }
        }

        self.active_color = if card.is_wild() { chosen } else { card.color() };
        if let (true, Some(color)) = (card.is_wild(), self.active_color) {
            self.emit(GameEvent::ColorChosen { color });
        }
    }

    fn declare_winner(&mut self, winner: PlayerId) {
        self.phase = Phase::Ended;
        for player in &mut self.players {
            let result = if player.id() == winner {
                PlayerResult::Winner
            } else {
                PlayerResult::Loser
            };
            player.set_result(result);
        }
        self.emit(GameEvent::Won { player: winner });
    }

    /// Draw from the deck, reporting any reshuffle it caused.
    pub(crate) fn draw_from_deck(&mut self) -> Option<Card> {
        let reshuffles = self.deck.reshuffle_count();
        let card = self.deck.draw();
        if self.deck.reshuffle_count() != reshuffles {
            self.emit(GameEvent::Reshuffled {
                draw_pile: self.deck.draw_pile_len(),
            });
        }
        card
    }

    // === Broadcast and the round loop ===

    /// Build the context for one player and drain their inbox into it.
    pub fn broadcast(&mut self, id: PlayerId) -> Result<BroadcastContext, EngineError> {
        let seat = self.seat_index(id)?;
        let is_turn = self.is_playing() && self.turn.current() == id;
        let must_draw = if is_turn { self.pending_draw } else { 0 };
        let top_card = self.deck.top_card();

        if must_draw > 0 {
            self.players[seat].message(format!("You must draw {must_draw} card(s)"));
        }
        if let (true, Some(color)) = (top_card.is_wild(), self.active_color) {
            self.players[seat].message(format!("Chosen color: {color}"));
        }

        let table = self
            .players
            .iter()
            .map(|p| SeatSummary {
                player: p.id(),
                hand_size: p.hand_size(),
                shielded: p.is_shielded(),
            })
            .collect();

        let player = &mut self.players[seat];
        Ok(BroadcastContext {
            player: id,
            is_turn,
            hand: player.hand().to_vec(),
            table,
            draw_pile_size: self.deck.draw_pile_len(),
            top_card,
            active_color: self.active_color,
            must_draw,
            messages: player.take_messages(),
        })
    }

    fn check_agents(&self, agents: &[Box<dyn Agent>]) -> Result<(), EngineError> {
        if agents.len() == self.players.len() {
            Ok(())
        } else {
            Err(EngineError::AgentCountMismatch {
                seats: self.players.len(),
                agents: agents.len(),
            })
        }
    }

    /// One round: broadcast to every seat in acting order, collect at most
    /// one reply per agent, then drain the queue.
    ///
    /// `agents[i]` plays seat `i` (`Player i + 1`).
    pub fn play_round(
        &mut self,
        agents: &mut [Box<dyn Agent>],
    ) -> Result<Vec<Outcome>, EngineError> {
        self.check_agents(agents)?;
        self.round += 1;
        let _span = tracing::debug_span!("round", round = self.round).entered();

        for id in self.acting_order() {
            let seat = self.seat_index(id)?;
            let context = self.broadcast(id)?;
            let reply = agents[seat].act(&context);
            self.submit_reply(id, reply)?;
        }

        self.drain_queue()
    }

    /// Play rounds until someone wins or `max_rounds` rounds have passed.
    pub fn play_game(
        &mut self,
        agents: &mut [Box<dyn Agent>],
        max_rounds: u32,
    ) -> Result<GameSummary, EngineError> {
        self.check_agents(agents)?;

        let mut rounds = 0;
        while self.is_playing() && rounds < max_rounds {
            self.play_round(agents)?;
            rounds += 1;
        }

        let status = match self.winner() {
            Some(winner) => GameStatus::Finished { winner },
            None => {
                tracing::warn!(rounds, "game stalled without a winner");
                GameStatus::Stalled
            }
        };

        Ok(GameSummary {
            rounds,
            status,
            results: self.players.iter().map(|p| (p.id(), p.result())).collect(),
        })
    }
}
