//! Game events and the observer the engine reports them to.
//!
//! ## Design Philosophy
//!
//! The engine never configures logging itself. It is handed an `EventSink`
//! at construction and reports every state change to it:
//!
//! - `TracingSink` (default): structured `tracing` events
//! - `RecordingSink`: keeps events in memory for tests and replays
//! - `NullSink`: drops everything

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink, NullSink, RecordingSink, TracingSink};
