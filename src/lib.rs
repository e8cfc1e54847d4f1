//! # uno-engine
//!
//! An authoritative rules engine for UNO-style shedding games.
//!
//! ## Design Principles
//!
//! 1. **One Source of Truth**: `Engine` owns the deck, every hand, and the
//!    turn state. Agents only ever see a `BroadcastContext` and answer with
//!    an `ActionRequest`.
//!
//! 2. **Local Failures**: A bad request costs the requester a message and
//!    nothing else. Only caller bugs (unknown player ids, wrong agent count)
//!    surface as `Err`.
//!
//! 3. **Reproducible**: Every shuffle comes from a seeded `GameRng`, so a
//!    game replays exactly from its `GameConfig`.
//!
//! ## Architecture
//!
//! - **Arrival-Order Processing**: Each round every agent is polled once, in
//!   acting order, and the resulting requests are applied strictly in the
//!   order they arrived.
//!
//! - **Reversible Hand Changes**: A played card leaves the hand before the
//!   engine rules on it and returns to the same slot if the play is refused.
//!
//! - **Injected Observers**: The engine reports to an `EventSink` handed to
//!   it at construction rather than configuring global logging.
//!
//! ## Modules
//!
//! - `cards`: Card codes, the 108-card set, draw and discard piles
//! - `core`: Players, requests, errors, RNG, configuration
//! - `rules`: Turn order, the action queue, broadcast context, the engine
//! - `events`: Game events and sinks
//! - `agents`: The `Agent` trait and its implementations
//! - `scenario`: Arranging arbitrary game states on a blank-slate engine
//!
//! ## Example
//!
//! ```
//! use uno_engine::agents::{Agent, GreedyAgent};
//! use uno_engine::core::GameConfig;
//! use uno_engine::events::NullSink;
//! use uno_engine::rules::Engine;
//!
//! let mut engine = Engine::with_sink(GameConfig::new(3).with_seed(7), NullSink).unwrap();
//! let mut agents: Vec<Box<dyn Agent>> = (0..3)
//!     .map(|_| Box::new(GreedyAgent::relaxed()) as Box<dyn Agent>)
//!     .collect();
//!
//! let summary = engine.play_game(&mut agents, 5000).unwrap();
//! assert_eq!(engine.total_cards(), engine.expected_total());
//! assert!(summary.rounds > 0);
//! ```

pub mod agents;
pub mod cards;
pub mod core;
pub mod events;
pub mod rules;
pub mod scenario;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionRecord, ActionRejected, ActionRequest, EngineError, GameConfig, GameRng,
    Outcome, Player, PlayerId, PlayerResult, RuleViolation,
};

pub use crate::cards::{Card, Color, Deck, Rank, DECK_SIZE};

pub use crate::rules::{BroadcastContext, Direction, Engine, GameStatus, GameSummary, Submission};

pub use crate::events::{EventSink, GameEvent, NullSink, RecordingSink, TracingSink};

pub use crate::agents::{Agent, GreedyAgent, ModelAgent, Reply, TextModel};
