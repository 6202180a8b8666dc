//! Python bindings for the rationale explainer configuration registry
//!
//! Exposes the process-wide registry to the Python training harness as the
//! `rust_core` extension module.

use pyo3::prelude::*;
use tracing::debug;

pub mod types;

use types::conversions::ConversionResult;
use types::{RustConfigRegistry, RustModelConfig, RustModelVariant};

/// Look up a variant in the global registry. Raises `KeyError` for unknown names.
#[pyfunction]
pub fn get_model_config(variant: &str) -> PyResult<RustModelConfig> {
    explainer::registry::get_model_config(variant)
        .map(RustModelConfig::from)
        .into_py_result()
}

#[pyfunction]
pub fn available_variants() -> PyResult<Vec<String>> {
    explainer::registry::available_variants().into_py_result()
}

/// Fresh copy of a prepackaged configuration, independent of any registry
#[pyfunction]
pub fn get_preset(variant: RustModelVariant) -> RustModelConfig {
    explainer::ModelVariant::from(variant).config().into()
}

/// Parse and validate a JSON configuration. Raises `ValueError` listing every
/// violated field.
#[pyfunction]
pub fn validate_config(json: &str) -> PyResult<RustModelConfig> {
    let config = types::config::parse_config_json(json)?;
    let config = explainer::validate(config).into_py_result()?;
    debug!(model_prefix = %config.model_prefix, "Validated configuration from Python");
    Ok(config.into())
}

/// A Python module implemented in Rust.
#[pymodule]
#[pyo3(name = "rust_core")]
pub fn rust_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RustModelConfig>()?;
    m.add_class::<RustConfigRegistry>()?;

    m.add_function(wrap_pyfunction!(get_model_config, m)?)?;
    m.add_function(wrap_pyfunction!(available_variants, m)?)?;
    m.add_function(wrap_pyfunction!(get_preset, m)?)?;
    m.add_function(wrap_pyfunction!(validate_config, m)?)?;

    Ok(())
}
