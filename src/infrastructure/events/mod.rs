//! Event Sink Implementations
//!
//! Provides concrete implementations of AssembleEventSink:
//! - ConsoleEventSink: Human-readable progress lines
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::{event_to_json, JsonEventSink};
