//! Configuration registry module
//!
//! Maps variant names (`bert`, `bert_rnn`, `rnn`, or any caller-chosen name)
//! to validated, immutable `ModelConfig` bundles.
//!
//! ## Lifecycle
//!
//! 1. **Population**: `register` (or `with_presets`, `load_manifest`,
//!    `register_from_file`) validates each bundle before storing it
//! 2. **Sealing**: the first `get` seals the registry; later registration
//!    fails with `RegistryError::Sealed`
//! 3. **Lookup**: `get` hands out shared `Arc<ModelConfig>` values that are
//!    never mutated
//!
//! ## Usage Example
//!
//! ```rust
//! use explainer::registry::ConfigRegistry;
//!
//! let registry = ConfigRegistry::with_presets()?;
//! let bert = registry.get("bert")?;
//! assert!(bert.bert_explainers);
//! assert_eq!(bert.num_labels, bert.labels.len());
//! # Ok::<(), explainer::registry::RegistryError>(())
//! ```

pub mod error;
pub mod manifest;
pub mod store;

use std::sync::{Arc, OnceLock};

pub use error::RegistryError;
pub use manifest::RegistryManifest;
pub use store::ConfigRegistry;

use crate::schema::ModelConfig;

static GLOBAL: OnceLock<Result<ConfigRegistry, RegistryError>> = OnceLock::new();

/// Process-wide registry holding the prepackaged variants
///
/// Initialized on first use. Additional variants may be registered until
/// the first lookup seals it.
pub fn global() -> Result<&'static ConfigRegistry, RegistryError> {
    GLOBAL
        .get_or_init(ConfigRegistry::with_presets)
        .as_ref()
        .map_err(Clone::clone)
}

/// Get a configuration from the process-wide registry
pub fn get_model_config(variant: &str) -> Result<Arc<ModelConfig>, RegistryError> {
    global()?.get(variant)
}

/// List the variants of the process-wide registry
pub fn available_variants() -> Result<Vec<String>, RegistryError> {
    global().map(ConfigRegistry::variants)
}
