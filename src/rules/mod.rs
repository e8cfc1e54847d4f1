//! Turn order, request processing, and what players get to see.
//!
//! `Engine` is the only thing that mutates game state. Agents talk to it
//! through `BroadcastContext` (in) and `ActionRequest` (out).

pub mod context;
pub mod engine;
pub mod queue;
pub mod turn;

pub use context::{BroadcastContext, SeatSummary};
pub use engine::{Engine, GameStatus, GameSummary, Phase, Submission};
pub use queue::ActionQueue;
pub use turn::{Direction, TurnOrder};
