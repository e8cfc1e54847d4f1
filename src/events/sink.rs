//! Event sinks.
//!
//! Each engine owns the sink it was constructed with; nothing is global.

use std::sync::{Arc, Mutex, PoisonError};

use super::event::GameEvent;

/// Receiver for game events.
pub trait EventSink: Send {
    fn emit(&mut self, event: &GameEvent);
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}

/// Forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Dealt { players, cards_each } => {
                tracing::info!(players, cards_each, "dealt opening hands");
            }
            GameEvent::TopCardRevealed { card } => {
                tracing::info!(card = %card, "top card revealed");
            }
            GameEvent::RequestQueued { player, kind } => {
                tracing::debug!(player = player.0, kind = %kind, "request queued");
            }
            GameEvent::CardPlayed { player, card } => {
                tracing::info!(player = player.0, card = %card, "card played");
            }
            GameEvent::CardDrawn { player, owed } => {
                tracing::info!(player = player.0, owed, "card drawn");
            }
            GameEvent::Rejected { player, reason } => {
                tracing::info!(player = player.0, reason = %reason, "request rejected");
            }
            GameEvent::TurnAdvanced { player } => {
                tracing::debug!(player = player.0, "turn advanced");
            }
            GameEvent::DirectionReversed { direction } => {
                tracing::debug!(?direction, "direction reversed");
            }
            GameEvent::ColorChosen { color } => {
                tracing::info!(color = %color, "color chosen");
            }
            GameEvent::Reshuffled { draw_pile } => {
                tracing::info!(draw_pile, "discard pile reshuffled");
            }
            GameEvent::Shielded { player } => {
                tracing::info!(player = player.0, "player shielded");
            }
            GameEvent::Caught { caller, target, penalty } => {
                tracing::info!(caller = caller.0, target = target.0, penalty, "uno catch");
            }
            GameEvent::UnoCallMissed { caller } => {
                tracing::debug!(caller = caller.0, "uno call matched nobody");
            }
            GameEvent::Won { player } => {
                tracing::info!(player = player.0, "game won");
            }
        }
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

/// Collects events into a buffer shared with an `EventLog` handle.
///
/// ```
/// use uno_engine::events::{EventSink, GameEvent, RecordingSink};
/// use uno_engine::core::PlayerId;
///
/// let mut sink = RecordingSink::new();
/// let log = sink.log();
/// sink.emit(&GameEvent::Won { player: PlayerId::new(1) });
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A read handle onto the recorded events.
    #[must_use]
    pub fn log(&self) -> EventLog {
        EventLog {
            events: Arc::clone(&self.events),
        }
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

/// Read handle for a `RecordingSink`.
#[derive(Clone, Debug)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count events matching a predicate.
    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| pred(e))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_recording_sink_shares_buffer() {
        let mut sink = RecordingSink::new();
        let log = sink.log();
        assert!(log.is_empty());

        sink.emit(&GameEvent::Shielded { player: PlayerId::new(2) });
        sink.emit(&GameEvent::Won { player: PlayerId::new(2) });

        assert_eq!(log.len(), 2);
        assert_eq!(log.count(|e| matches!(e, GameEvent::Won { .. })), 1);
        assert_eq!(log.events()[0], GameEvent::Shielded { player: PlayerId::new(2) });
    }

    #[test]
    fn test_null_and_tracing_sinks_accept_events() {
        let event = GameEvent::Reshuffled { draw_pile: 40 };
        NullSink.emit(&event);
        TracingSink.emit(&event);
    }
}
