//! Resolved engine settings shared across crates.
//!
//! Raw TOML deserialization structs (with `Option` fields) stay private in
//! `axiom-config`. The config loader resolves them into this type at the
//! parse boundary, so holding an `EngineSettings` proves the precision was
//! validated.

use crate::Precision;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineSettings {
    precision: Precision,
    quiet: bool,
}

impl EngineSettings {
    #[must_use]
    pub fn new(precision: Precision, verbose: bool) -> Self {
        Self {
            precision,
            quiet: !verbose,
        }
    }

    #[must_use]
    pub const fn precision(self) -> Precision {
        self.precision
    }

    #[must_use]
    pub const fn verbose(self) -> bool {
        !self.quiet
    }

    /// Same settings with stage-by-stage diagnostics switched off.
    #[must_use]
    pub const fn silenced(self) -> Self {
        Self {
            precision: self.precision,
            quiet: true,
        }
    }
}
