use serde::ser::{Serialize, SerializeStruct, Serializer};

const COHERENT_MESSAGE: &str = "Unit Zero confirmed. System in Absolute Coherence.";
const DECOHERENT_MESSAGE: &str = "Warning: Residual error detected. Verify input flux.";
const DECOHERENT_HASH: &str = "0.000000000000";

/// Terminal classification of a pipeline run.
///
/// A zero nucleus seals the run as `Coherent`; anything else is
/// `Decoherent`. Both cases carry the fixed `O333` verdict code. The
/// messages and the decoherent hash are fixed strings; only the coherent
/// integrity hash is supplied by the classifier (and is itself constant for
/// a given constant set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerdictRecord {
    Coherent { integrity_hash: String },
    Decoherent,
}

impl VerdictRecord {
    pub const VERDICT_CODE: &'static str = "O333";

    #[must_use]
    pub fn coherent(integrity_hash: impl Into<String>) -> Self {
        VerdictRecord::Coherent {
            integrity_hash: integrity_hash.into(),
        }
    }

    #[must_use]
    pub const fn decoherent() -> Self {
        VerdictRecord::Decoherent
    }

    #[must_use]
    pub const fn is_coherent(&self) -> bool {
        matches!(self, VerdictRecord::Coherent { .. })
    }

    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            VerdictRecord::Coherent { .. } => "ABSOLUTE NATURALNESS",
            VerdictRecord::Decoherent => "DECOHERENCE",
        }
    }

    #[must_use]
    pub fn integrity_hash(&self) -> &str {
        match self {
            VerdictRecord::Coherent { integrity_hash } => integrity_hash,
            VerdictRecord::Decoherent => DECOHERENT_HASH,
        }
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            VerdictRecord::Coherent { .. } => COHERENT_MESSAGE,
            VerdictRecord::Decoherent => DECOHERENT_MESSAGE,
        }
    }
}

impl Serialize for VerdictRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("VerdictRecord", 5)?;
        record.serialize_field("status", self.status())?;
        record.serialize_field("verdict_code", Self::VERDICT_CODE)?;
        record.serialize_field("integrity_hash", self.integrity_hash())?;
        record.serialize_field("zero_point", &self.is_coherent())?;
        record.serialize_field("message", self.message())?;
        record.end()
    }
}
