//! In-memory configuration registry
//!
//! Entries are validated on the way in and shared as `Arc<ModelConfig>` on
//! the way out. The first lookup seals the registry; registration after
//! that is refused.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, instrument, warn};

use crate::constants::ModelVariant;
use crate::schema::{ModelConfig, validate};

use super::error::RegistryError;

type Entries = HashMap<String, Arc<ModelConfig>>;

/// Named collection of validated, immutable model configurations
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    /// Variant name -> validated configuration
    entries: RwLock<Entries>,

    /// Set by the first lookup (or an explicit `seal`); blocks registration
    sealed: AtomicBool,
}

impl ConfigRegistry {
    /// Create an empty, unsealed registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every prepackaged variant
    ///
    /// Presets go through `register`, so they are validated like any other
    /// configuration.
    #[instrument(level = "info", name = "registry_with_presets")]
    pub fn with_presets() -> Result<Self, RegistryError> {
        let registry = Self::new();
        for variant in ModelVariant::all() {
            registry.register(variant.as_str(), variant.config())?;
        }

        info!(variants = registry.len(), "Preset configurations registered");
        Ok(registry)
    }

    /// Validate `config` and store it under `variant`, replacing any previous entry
    ///
    /// # Errors
    ///
    /// - `Validation` if the configuration violates any constraint; the
    ///   previous entry (if any) is left untouched
    /// - `Sealed` if a lookup has already happened
    #[instrument(level = "debug", skip(self, config))]
    pub fn register(&self, variant: &str, config: ModelConfig) -> Result<(), RegistryError> {
        let config = validate(config).inspect_err(|err| {
            warn!(
                variant,
                violations = err.violations().len(),
                "Rejected invalid model configuration"
            );
        })?;

        let mut entries = self.write_entries();
        if self.is_sealed() {
            warn!(variant, "Registration refused, registry is sealed");
            return Err(RegistryError::Sealed(variant.to_string()));
        }

        let replaced = entries
            .insert(variant.to_string(), Arc::new(config))
            .is_some();
        info!(variant, replaced, "Registered model configuration");

        Ok(())
    }

    /// Look up the configuration registered under `variant`
    ///
    /// Seals the registry, whether or not the lookup succeeds.
    pub fn get(&self, variant: &str) -> Result<Arc<ModelConfig>, RegistryError> {
        let entries = self.read_entries();
        if !self.sealed.swap(true, Ordering::SeqCst) {
            debug!(variant, "Registry sealed by first lookup");
        }

        entries
            .get(variant)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownVariant(variant.to_string()))
    }

    /// Look up a prepackaged variant
    pub fn get_variant(&self, variant: ModelVariant) -> Result<Arc<ModelConfig>, RegistryError> {
        self.get(variant.as_str())
    }

    /// Refuse all further registration
    ///
    /// Waits for any in-flight registration to commit first.
    pub fn seal(&self) {
        let _entries = self.write_entries();
        self.sealed.store(true, Ordering::SeqCst);
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::SeqCst)
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.read_entries().contains_key(variant)
    }

    /// Registered variant names, sorted
    pub fn variants(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read_entries().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// Sorted copy of every entry; does not seal
    pub fn snapshot(&self) -> BTreeMap<String, Arc<ModelConfig>> {
        self.read_entries()
            .iter()
            .map(|(name, config)| (name.clone(), Arc::clone(config)))
            .collect()
    }

    /// Validate every configuration, then store all of them or none
    ///
    /// An empty batch registers nothing and succeeds, sealed or not.
    pub(crate) fn register_all(
        &self,
        configs: BTreeMap<String, ModelConfig>,
    ) -> Result<usize, RegistryError> {
        if configs.is_empty() {
            return Ok(0);
        }

        let mut validated = Vec::with_capacity(configs.len());
        for (variant, config) in configs {
            match validate(config) {
                Ok(config) => validated.push((variant, Arc::new(config))),
                Err(source) => {
                    warn!(
                        variant = %variant,
                        violations = source.violations().len(),
                        "Rejected invalid manifest entry"
                    );
                    return Err(RegistryError::InvalidManifestEntry { variant, source });
                }
            }
        }

        let mut entries = self.write_entries();
        if self.is_sealed() {
            let names = validated
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            warn!(variants = %names, "Registration refused, registry is sealed");
            return Err(RegistryError::Sealed(names));
        }

        let count = validated.len();
        entries.extend(validated);
        info!(count, "Registered model configurations in bulk");

        Ok(count)
    }

    // Entries are only ever replaced whole, so a poisoned map is still consistent.
    fn read_entries(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_registered() {
        let registry = ConfigRegistry::with_presets().unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.variants(), vec!["bert", "bert_rnn", "rnn"]);
        assert!(!registry.is_sealed());
    }

    #[test]
    fn test_get_seals_even_on_miss() {
        let registry = ConfigRegistry::new();

        assert!(matches!(
            registry.get("gpt"),
            Err(RegistryError::UnknownVariant(name)) if name == "gpt"
        ));
        assert!(registry.is_sealed());

        let result = registry.register("rnn", ModelVariant::Rnn.config());
        assert_eq!(result, Err(RegistryError::Sealed("rnn".to_string())));
    }

    #[test]
    fn test_introspection_does_not_seal() {
        let registry = ConfigRegistry::with_presets().unwrap();

        assert!(registry.contains("bert"));
        assert!(!registry.contains("gpt"));
        assert!(!registry.is_empty());
        assert_eq!(registry.snapshot().len(), 3);
        assert!(!registry.is_sealed());
    }

    #[test]
    fn test_register_all_is_all_or_nothing() {
        let registry = ConfigRegistry::new();

        let mut configs = BTreeMap::new();
        configs.insert("a".to_string(), ModelVariant::Rnn.config());
        configs.insert(
            "b".to_string(),
            ModelVariant::Rnn.config().with_dropout_rate(2.0),
        );

        let err = registry.register_all(configs).unwrap_err();
        assert!(matches!(
            &err,
            RegistryError::InvalidManifestEntry { variant, .. } if variant == "b"
        ));
        assert!(err.validation().unwrap().mentions("dropout_rate"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_all_empty_batch_on_sealed_registry() {
        let registry = ConfigRegistry::new();
        registry.seal();

        assert_eq!(registry.register_all(BTreeMap::new()), Ok(0));
    }

    #[test]
    fn test_register_all_sealed_names_every_variant() {
        let registry = ConfigRegistry::new();
        registry.seal();

        let mut configs = BTreeMap::new();
        configs.insert("a".to_string(), ModelVariant::Rnn.config());
        configs.insert("b".to_string(), ModelVariant::Bert.config());

        assert_eq!(
            registry.register_all(configs),
            Err(RegistryError::Sealed("a, b".to_string()))
        );
    }

    #[test]
    fn test_no_registration_lands_after_seal_returns() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(ConfigRegistry::new());

        let writers: Vec<_> = (0..4)
            .map(|writer| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let mut index = 0;
                    while registry
                        .register(&format!("w{}_{}", writer, index), ModelVariant::Rnn.config())
                        .is_ok()
                    {
                        index += 1;
                    }
                })
            })
            .collect();

        while registry.is_empty() {
            thread::yield_now();
        }
        registry.seal();
        let sealed_len = registry.len();

        for writer in writers {
            writer.join().unwrap();
        }
        assert_eq!(registry.len(), sealed_len);
    }
}
