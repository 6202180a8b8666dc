//! Model variant conversions for the Python interface
//!
//! Python passes variants as plain strings (`"bert"`, `"bert_rnn"`, `"rnn"`).

use explainer::ModelVariant;
use pyo3::prelude::*;
use pyo3::{Bound, PyAny};

/// Python-compatible prepackaged model variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RustModelVariant(pub ModelVariant);

impl FromPyObject<'_> for RustModelVariant {
    fn extract_bound(ob: &Bound<'_, PyAny>) -> PyResult<Self> {
        let value: &str = ob.extract()?;
        value
            .parse::<ModelVariant>()
            .map(RustModelVariant)
            .map_err(|_| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Invalid ModelVariant: {} (expected one of: bert, bert_rnn, rnn)",
                    value
                ))
            })
    }
}

impl From<RustModelVariant> for ModelVariant {
    fn from(variant: RustModelVariant) -> Self {
        variant.0
    }
}
