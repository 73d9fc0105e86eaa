use thiserror::Error;

/// The caller handed the pipeline something that cannot be read as a real
/// number. Returned before any stage runs; the display text is the
/// user-facing contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid input type")]
pub struct FluxError;

/// A flux value as received from the caller, before coercion.
///
/// The pipeline accepts real numbers directly and numeric text (e.g. a value
/// read from a command line). Coercion happens exactly once, at the pipeline
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FluxInput {
    Number(f64),
    Text(String),
}

impl FluxInput {
    /// Resolve to a real number.
    ///
    /// Numbers pass through untouched. Text is trimmed and parsed as a
    /// decimal float; anything unparsable is a [`FluxError`].
    pub fn coerce(&self) -> Result<f64, FluxError> {
        match self {
            FluxInput::Number(value) => Ok(*value),
            FluxInput::Text(raw) => raw.trim().parse::<f64>().map_err(|_| FluxError),
        }
    }
}

impl From<f64> for FluxInput {
    fn from(value: f64) -> Self {
        FluxInput::Number(value)
    }
}

impl From<i64> for FluxInput {
    fn from(value: i64) -> Self {
        FluxInput::Number(value as f64)
    }
}

impl From<&str> for FluxInput {
    fn from(value: &str) -> Self {
        FluxInput::Text(value.to_string())
    }
}

impl From<String> for FluxInput {
    fn from(value: String) -> Self {
        FluxInput::Text(value)
    }
}
