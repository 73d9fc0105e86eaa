//! Core domain types for Axiom.
//!
//! This crate contains pure domain types with no IO, no clock access, and
//! minimal dependencies. Everything here can be used from any layer of the
//! application. Invariants are enforced at construction: if you hold one of
//! these values, it is valid.

mod flux;
mod precision;
mod session;
mod settings;
mod trace;
mod verdict;

pub use flux::{FluxError, FluxInput};
pub use precision::{Precision, PrecisionError};
pub use session::SessionId;
pub use settings::EngineSettings;
pub use trace::{RunResult, StageTrace};
pub use verdict::VerdictRecord;
