//! Python wrapper around a configuration registry

use std::path::PathBuf;

use explainer::ConfigRegistry;
use pyo3::prelude::*;
use tracing::info;

use super::config::{RustModelConfig, parse_config_json};
use super::conversions::ConversionResult;
use super::variant::RustModelVariant;

/// Registry of model configurations keyed by variant name.
///
/// Registration is only possible until the first lookup; after that the
/// registry is sealed and `register*` raises `RuntimeError`.
#[pyclass(name = "ConfigRegistry", frozen)]
#[derive(Debug)]
pub struct RustConfigRegistry {
    inner: ConfigRegistry,
}

#[pymethods]
impl RustConfigRegistry {
    #[new]
    #[pyo3(signature = (presets = true))]
    pub fn new(presets: bool) -> PyResult<Self> {
        let inner = if presets {
            ConfigRegistry::with_presets().into_py_result()?
        } else {
            ConfigRegistry::new()
        };
        info!(presets, variants = inner.len(), "Created Python config registry");
        Ok(Self { inner })
    }

    pub fn get(&self, variant: &str) -> PyResult<RustModelConfig> {
        self.inner
            .get(variant)
            .map(RustModelConfig::from)
            .into_py_result()
    }

    pub fn get_variant(&self, variant: RustModelVariant) -> PyResult<RustModelConfig> {
        self.inner
            .get_variant(variant.into())
            .map(RustModelConfig::from)
            .into_py_result()
    }

    pub fn register(&self, variant: &str, config: &RustModelConfig) -> PyResult<()> {
        self.inner
            .register(variant, config.inner().clone())
            .into_py_result()
    }

    pub fn register_json(&self, variant: &str, json: &str) -> PyResult<()> {
        let config = parse_config_json(json)?;
        self.inner.register(variant, config).into_py_result()
    }

    pub fn register_from_file(&self, variant: &str, path: PathBuf) -> PyResult<()> {
        self.inner
            .register_from_file(variant, path)
            .into_py_result()
    }

    pub fn load_manifest(&self, path: PathBuf) -> PyResult<usize> {
        self.inner.load_manifest(path).into_py_result()
    }

    pub fn export_manifest(&self, path: PathBuf) -> PyResult<usize> {
        self.inner.export_manifest(path).into_py_result()
    }

    pub fn variants(&self) -> Vec<String> {
        self.inner.variants()
    }

    pub fn seal(&self) {
        self.inner.seal();
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.is_sealed()
    }

    fn __contains__(&self, variant: &str) -> bool {
        self.inner.contains(variant)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "ConfigRegistry(variants={:?}, sealed={})",
            self.inner.variants(),
            if self.inner.is_sealed() { "True" } else { "False" },
        )
    }
}
