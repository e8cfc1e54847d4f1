//! Decision makers.
//!
//! The engine knows agents only through the `Agent` trait: a context goes
//! in, a `Reply` comes out. Calling `act` is the one place a game waits on
//! the outside world, and it may be slow.
//!
//! ## Provided Agents
//!
//! - `PassiveAgent`: never acts
//! - `ScriptedAgent`: replays a fixed list of replies
//! - `GreedyAgent`: plays the first legal card
//! - `ModelAgent`: asks a text model, given a rendered `Prompt`
//! - `HumanAgent`: reads commands from a terminal

mod greedy;
mod human;
mod model;
mod scripted;

pub use greedy::GreedyAgent;
pub use human::HumanAgent;
pub use model::{ModelAgent, Prompt, TextModel, DEFAULT_STRATEGY, INSTRUCTIONS, RULES};
pub use scripted::{PassiveAgent, ScriptedAgent};

use crate::core::ActionRequest;
use crate::rules::BroadcastContext;

/// What an agent answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// No request this round.
    Pass,
    /// A structured request.
    Action(ActionRequest),
    /// Raw text that should contain a JSON request.
    Text(String),
}

impl From<ActionRequest> for Reply {
    fn from(request: ActionRequest) -> Self {
        Reply::Action(request)
    }
}

/// Anything that can take a seat.
pub trait Agent {
    /// Answer one broadcast. `context.is_turn` says whether the agent's
    /// player is the one to act.
    fn act(&mut self, context: &BroadcastContext) -> Reply;
}
