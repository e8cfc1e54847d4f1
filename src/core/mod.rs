//! Core engine types: players, requests, errors, RNG, configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionKind, ActionRecord, ActionRequest, Outcome, PendingRequest, RequestKind};
pub use config::{ConfigError, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ActionRejected, EngineError, RuleViolation};
pub use player::{Player, PlayerId, PlayerResult, TakenCard};
pub use rng::GameRng;
