//! Core engine for Axiom - the five-stage flux alignment pipeline and its
//! orchestration.
//!
//! A single [`Engine`] owns an immutable [`ConstantSet`] and threads one
//! input value through vectorization, dual filtering, geometric correction,
//! fixed-point collapse, and verdict classification, in strict sequence.
//! Every run is a pure function of (constants, flux); the wall clock is read
//! only to stamp a correlation id on the result.

use std::fmt;
use std::sync::Arc;

use chrono::Local;

mod constants;
mod emit;
pub mod stages;

pub use constants::ConstantSet;
pub use emit::{BufferSink, EmitSink, NullSink, TracingSink};

// Re-export the domain types callers need alongside the engine.
pub use axiom_types::{
    EngineSettings, FluxError, FluxInput, Precision, PrecisionError, RunResult, SessionId,
    StageTrace, VerdictRecord,
};

use stages::CollapseOutcome;

/// The pipeline orchestrator.
///
/// Stateless across runs: the constant set is computed once at construction
/// and never mutated, so a host may share one engine read-only across
/// threads and run independent alignments concurrently.
pub struct Engine {
    constants: ConstantSet,
    verbose: bool,
    sink: Arc<dyn EmitSink>,
}

impl Engine {
    /// Build an engine that reports through [`TracingSink`].
    #[must_use]
    pub fn new(settings: EngineSettings) -> Self {
        Self::with_sink(settings, Arc::new(TracingSink))
    }

    /// Build an engine with an injected diagnostic sink.
    #[must_use]
    pub fn with_sink(settings: EngineSettings, sink: Arc<dyn EmitSink>) -> Self {
        let engine = Self {
            constants: ConstantSet::new(settings.precision()),
            verbose: settings.verbose(),
            sink,
        };
        engine.emit_banner();
        engine
    }

    #[must_use]
    pub const fn constants(&self) -> &ConstantSet {
        &self.constants
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Run the full alignment pipeline on one flux value.
    ///
    /// Coercion happens first; a value that cannot be read as a real number
    /// returns [`FluxError`] and no stage runs. Everything else succeeds.
    pub fn run(&self, input: impl Into<FluxInput>) -> Result<RunResult, FluxError> {
        let flux = match input.into().coerce() {
            Ok(flux) => flux,
            Err(err) => {
                self.emit("ERROR", "Input must be a number or convertible to number");
                return Err(err);
            }
        };
        self.emit("INPUT", &format!("Flux received: {flux}"));

        let vectorized = stages::stabilize(&self.constants, flux);
        self.emit(
            "VECTOR",
            &format!("Input: {flux} -> Stabilized: {vectorized:.15}"),
        );

        let paths = stages::filter_dual(&self.constants, vectorized);
        self.emit("FILTER", &format!("Vector: {vectorized:.10}"));
        self.emit(
            "FILTER",
            &format!("  -> symmetric path: {:.10}", paths.symmetric),
        );
        self.emit(
            "FILTER",
            &format!("  -> asymmetric path: {:.10}", paths.asymmetric),
        );

        // Stage 3 operates on the arithmetic mean of the two paths.
        let mean = (paths.symmetric + paths.asymmetric) / 2.0;
        let reading = stages::detect_geometry(&self.constants, mean);
        self.emit(
            "GEOMETRY",
            &format!(
                "Triangle: {:.6} | Circle: {:.6}",
                reading.triangle, reading.circle
            ),
        );

        let correction = stages::correct(&self.constants, mean, reading);
        self.emit(
            "PERSISTENCE",
            &format!("Correction force: {:.10}", correction.force),
        );
        self.emit(
            "PERSISTENCE",
            &format!("Corrected vector: {:.10}", correction.corrected),
        );
        self.emit(
            "PERSISTENCE",
            &format!("Aligned to target: {:.10}", correction.aligned),
        );

        let outcome = stages::collapse(&self.constants, correction.aligned);
        match outcome {
            CollapseOutcome::Settled(trace) => {
                self.emit("COLLAPSE", &format!("Fixed-point: {}", trace.fixed));
                self.emit(
                    "COLLAPSE",
                    &format!(
                        "Step1: {} | Step2: {} | Step3: {} | Step4: {}",
                        trace.steps[0], trace.steps[1], trace.steps[2], trace.steps[3]
                    ),
                );
                self.emit("COLLAPSE", &format!("Final nucleus: {}", trace.nucleus));
            }
            CollapseOutcome::Anomaly { value } => {
                self.emit(
                    "ERROR",
                    &format!("Collapse anomaly: non-finite value {value}, forcing Unit Zero"),
                );
            }
        }
        let nucleus = outcome.nucleus();

        let verdict = stages::classify(&self.constants, nucleus);
        self.emit("VERDICT", &format!("Status: {}", verdict.status()));
        self.emit("VERDICT", &format!("Hash: {}", verdict.integrity_hash()));
        self.emit("VERDICT", verdict.message());

        let trace = StageTrace {
            vectorized,
            symmetric: paths.symmetric,
            asymmetric: paths.asymmetric,
            corrected: correction.aligned,
        };
        Ok(RunResult::new(
            next_session_id(),
            flux,
            trace,
            nucleus,
            verdict,
        ))
    }

    fn emit(&self, tag: &str, message: &str) {
        if self.verbose {
            self.sink.emit(tag, message);
        }
    }

    fn emit_banner(&self) {
        let c = &self.constants;
        self.emit(
            "SYSTEM",
            &format!("Flux alignment engine | Precision: {}", c.precision()),
        );
        self.emit("CONSTANTS", &format!("phi = {:.15}", c.phi()));
        self.emit("CONSTANTS", &format!("delta = {:.15}", c.delta_zero()));
        self.emit("OPERATORS", &format!("target = {}", c.target_straight()));
        self.emit(
            "OPERATORS",
            &format!(
                "circle = {} | triangle = {}",
                c.loop_error(),
                c.decision_error()
            ),
        );
        self.emit(
            "OPERATORS",
            &format!(
                "symmetry norm = {} | asymmetry norm = {}",
                c.symmetry_norm(),
                c.asymmetry_norm()
            ),
        );
        self.emit(
            "OPERATORS",
            &format!("persistence = {:.6}", c.persistence_coefficient()),
        );
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("constants", &self.constants)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

/// Wall-clock correlation id, `%Y%m%d_%H%M%S`. Display-only; no numeric
/// path reads the clock.
fn next_session_id() -> SessionId {
    SessionId::new(Local::now().format("%Y%m%d_%H%M%S").to_string())
}
