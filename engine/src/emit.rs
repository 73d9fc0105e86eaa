//! The injected logging collaborator.
//!
//! Stages are pure; everything the pipeline wants to say goes through an
//! [`EmitSink`] as `(tag, message)` pairs, emitted by the orchestrator. Hosts
//! pick the sink: `tracing` by default, a buffer in tests, or nothing.

use std::sync::{Mutex, PoisonError};

pub trait EmitSink: Send + Sync {
    fn emit(&self, tag: &str, message: &str);
}

/// Default sink: forwards every diagnostic to `tracing` at info level with
/// the stage tag as a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EmitSink for TracingSink {
    fn emit(&self, tag: &str, message: &str) {
        tracing::info!(target: "axiom", tag, "{message}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EmitSink for NullSink {
    fn emit(&self, _tag: &str, _message: &str) {}
}

/// Captures `(tag, message)` pairs in memory, for asserting on diagnostic
/// output in tests.
#[derive(Debug, Default)]
pub struct BufferSink {
    entries: Mutex<Vec<(String, String)>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The tags seen so far, in emission order.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(tag, _)| tag)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl EmitSink for BufferSink {
    fn emit(&self, tag: &str, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((tag.to_string(), message.to_string()));
    }
}
