//! File-backed configuration
//!
//! Two on-disk forms are supported:
//! - a single `ModelConfig` JSON document
//! - a manifest mapping variant names to configurations:
//!   `{"variants": {"bert": {...}, "rnn": {...}}}`
//!
//! Both are read with `ModelConfig::from_json_value`: omitted fields take
//! their defaults, unknown keys are rejected and path fields are normalized.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::schema::ModelConfig;

use super::error::RegistryError;
use super::store::ConfigRegistry;

/// Named configurations as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistryManifest {
    pub variants: BTreeMap<String, ModelConfig>,
}

/// Manifest as read, before each entry is laid over the defaults
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    variants: BTreeMap<String, Value>,
}

impl RegistryManifest {
    /// Read a manifest; entries are not validated until registered
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| RegistryError::load(path, err))?;
        let raw: RawManifest =
            serde_json::from_str(&contents).map_err(|err| RegistryError::load(path, err))?;

        let variants: BTreeMap<String, ModelConfig> = raw
            .variants
            .into_iter()
            .map(|(name, value)| match ModelConfig::from_json_value(value) {
                Ok(config) => Ok((name, config)),
                Err(err) => Err(RegistryError::load(path, format!("variant '{}': {}", name, err))),
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { variants })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RegistryError> {
        let path = path.as_ref();
        let json =
            serde_json::to_string_pretty(self).map_err(|err| RegistryError::save(path, err))?;
        fs::write(path, json).map_err(|err| RegistryError::save(path, err))
    }

    /// Capture the current contents of a registry
    pub fn from_registry(registry: &ConfigRegistry) -> Self {
        Self {
            variants: registry
                .snapshot()
                .into_iter()
                .map(|(name, config)| (name, ModelConfig::clone(&config)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl ConfigRegistry {
    /// Load a single configuration file and register it under `variant`
    #[instrument(level = "info", skip(self, path))]
    pub fn register_from_file(
        &self,
        variant: &str,
        path: impl AsRef<Path>,
    ) -> Result<(), RegistryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| RegistryError::load(path, err))?;
        let config =
            ModelConfig::from_json_str(&contents).map_err(|err| RegistryError::load(path, err))?;

        self.register(variant, config)
    }

    /// Register every entry of a manifest file, all or nothing
    ///
    /// Returns the number of configurations registered.
    #[instrument(level = "info", skip(self, path))]
    pub fn load_manifest(&self, path: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let manifest = RegistryManifest::load(path)?;
        self.register_all(manifest.variants)
    }

    /// Write every registered configuration to a manifest file
    ///
    /// Returns the number of configurations written.
    pub fn export_manifest(&self, path: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let path = path.as_ref();
        let manifest = RegistryManifest::from_registry(self);
        manifest.save(path)?;

        info!(
            count = manifest.len(),
            path = %path.display(),
            "Exported configuration manifest"
        );
        Ok(manifest.len())
    }
}
