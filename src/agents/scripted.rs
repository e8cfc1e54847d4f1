//! Agents that need no decisions.

use std::collections::VecDeque;

use crate::rules::BroadcastContext;

use super::{Agent, Reply};

/// Never makes a request.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassiveAgent;

impl Agent for PassiveAgent {
    fn act(&mut self, _context: &BroadcastContext) -> Reply {
        Reply::Pass
    }
}

/// Replays queued replies, one per broadcast, then passes.
///
/// Every context it is shown is kept, so tests can inspect what the engine
/// broadcast.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    script: VecDeque<Reply>,
    seen: Vec<BroadcastContext>,
}

impl ScriptedAgent {
    #[must_use]
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            script: replies.into_iter().collect(),
            seen: Vec::new(),
        }
    }

    /// Add a reply to the end of the script.
    pub fn push(&mut self, reply: impl Into<Reply>) {
        self.script.push_back(reply.into());
    }

    /// Replies not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Contexts received so far, oldest first.
    #[must_use]
    pub fn contexts(&self) -> &[BroadcastContext] {
        &self.seen
    }
}

impl Agent for ScriptedAgent {
    fn act(&mut self, context: &BroadcastContext) -> Reply {
        self.seen.push(context.clone());
        self.script.pop_front().unwrap_or(Reply::Pass)
    }
}
