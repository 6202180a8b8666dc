//! Python view of a model configuration
//!
//! Configurations are immutable on the Python side. The harness reads them
//! like the dicts it used to index (`config["hidden_dim"]`), or converts
//! them with `to_dict()`.

use std::sync::Arc;

use explainer::ModelConfig;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Read-only model configuration handed to Python
#[pyclass(name = "ModelConfig", frozen)]
#[derive(Debug, Clone)]
pub struct RustModelConfig {
    inner: Arc<ModelConfig>,
}

impl RustModelConfig {
    pub fn inner(&self) -> &ModelConfig {
        &self.inner
    }
}

impl From<Arc<ModelConfig>> for RustModelConfig {
    fn from(inner: Arc<ModelConfig>) -> Self {
        Self { inner }
    }
}

impl From<ModelConfig> for RustModelConfig {
    fn from(config: ModelConfig) -> Self {
        Self {
            inner: Arc::new(config),
        }
    }
}

/// Parse a JSON configuration and normalize its paths. Missing fields take
/// their defaults, unknown keys raise `ValueError`; validation is left to
/// the caller.
pub fn parse_config_json(json: &str) -> PyResult<ModelConfig> {
    ModelConfig::from_json_str(json)
        .map_err(|err| PyValueError::new_err(format!("invalid configuration JSON: {}", err)))
}

#[pymethods]
impl RustModelConfig {
    pub fn to_json(&self) -> String {
        self.inner.to_string()
    }

    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let value = py
            .import("json")?
            .call_method1("loads", (self.to_json(),))?;
        Ok(value.downcast_into::<PyDict>()?)
    }

    pub fn keys(&self, py: Python<'_>) -> PyResult<Vec<String>> {
        self.to_dict(py)?.keys().extract()
    }

    /// Checkpoint path prefix (`model_save_dir/model_prefix`)
    pub fn checkpoint_stem(&self) -> String {
        self.inner.checkpoint_stem().to_string_lossy().into_owned()
    }

    #[getter]
    pub fn bert_explainers(&self) -> bool {
        self.inner.bert_explainers
    }

    #[getter]
    pub fn num_labels(&self) -> usize {
        self.inner.num_labels
    }

    #[getter]
    pub fn labels(&self) -> Vec<i64> {
        self.inner.labels.clone()
    }

    fn __getitem__<'py>(&self, py: Python<'py>, key: &str) -> PyResult<Bound<'py, PyAny>> {
        self.to_dict(py)?
            .get_item(key)?
            .ok_or_else(|| PyKeyError::new_err(key.to_string()))
    }

    fn __contains__(&self, py: Python<'_>, key: &str) -> PyResult<bool> {
        self.to_dict(py)?.contains(key)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!(
            "ModelConfig(model_prefix='{}', hidden_dim={}, bert_explainers={}, num_labels={})",
            self.inner.model_prefix,
            self.inner.hidden_dim,
            if self.inner.bert_explainers { "True" } else { "False" },
            self.inner.num_labels,
        )
    }
}
