//! Shared helpers for the integration suite.

use std::sync::Arc;

use axiom_engine::{BufferSink, Engine, EngineSettings, NullSink};

/// An engine with diagnostics off, for tests that only care about values.
pub fn quiet_engine() -> Engine {
    Engine::with_sink(EngineSettings::default().silenced(), Arc::new(NullSink))
}

/// An engine wired to a capturing sink, plus a handle to inspect it.
pub fn buffered_engine(settings: EngineSettings) -> (Engine, Arc<BufferSink>) {
    let sink = Arc::new(BufferSink::new());
    let handle = Arc::clone(&sink);
    let engine = Engine::with_sink(settings, sink);
    (engine, handle)
}
