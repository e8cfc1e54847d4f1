//! First-in, first-out channel of validated requests.

use std::collections::VecDeque;

use crate::core::PendingRequest;

/// Requests waiting for authoritative processing, in arrival order.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: VecDeque<PendingRequest>,
}

impl ActionQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: PendingRequest) {
        self.pending.push_back(request);
    }

    pub fn pop(&mut self) -> Option<PendingRequest> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cards taken from hands by queued plays and not yet ruled on.
    #[must_use]
    pub fn held_cards(&self) -> usize {
        self.pending.iter().filter(|r| r.card().is_some()).count()
    }
}
