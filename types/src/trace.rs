use serde::Serialize;

use crate::{SessionId, VerdictRecord};

/// Intermediate scalar values from one pipeline invocation.
///
/// Owned by a single run and discarded with its [`RunResult`]; never shared
/// across invocations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageTrace {
    /// Stage 1 output: the flux scaled by the delta-zero stabilizer.
    pub vectorized: f64,
    /// Stage 2 symmetric path.
    pub symmetric: f64,
    /// Stage 2 asymmetric path.
    pub asymmetric: f64,
    /// Stage 3 output: the geometry-corrected, target-aligned value.
    pub corrected: f64,
}

/// The assembled output of one pipeline run. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    session_id: SessionId,
    input: f64,
    #[serde(rename = "stages")]
    trace: StageTrace,
    nucleus: i64,
    zero_unit: bool,
    verdict: VerdictRecord,
}

impl RunResult {
    /// Assemble a run record. `zero_unit` is derived from the nucleus, so
    /// the flag can never disagree with the value it summarizes.
    #[must_use]
    pub fn new(
        session_id: SessionId,
        input: f64,
        trace: StageTrace,
        nucleus: i64,
        verdict: VerdictRecord,
    ) -> Self {
        Self {
            session_id,
            input,
            trace,
            nucleus,
            zero_unit: nucleus == 0,
            verdict,
        }
    }

    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    #[must_use]
    pub const fn input(&self) -> f64 {
        self.input
    }

    #[must_use]
    pub const fn trace(&self) -> &StageTrace {
        &self.trace
    }

    #[must_use]
    pub const fn nucleus(&self) -> i64 {
        self.nucleus
    }

    #[must_use]
    pub const fn zero_unit(&self) -> bool {
        self.zero_unit
    }

    #[must_use]
    pub const fn verdict(&self) -> &VerdictRecord {
        &self.verdict
    }
}
