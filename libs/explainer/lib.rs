//! Configuration library for the introspective rationale explainer
//!
//! Provides typed, validated hyperparameter bundles for the three
//! prepackaged model variants (`bert`, `bert_rnn`, `rnn`) and a registry
//! that hands them to training and evaluation code.
//!
//! - schema: the `ModelConfig` record and its validation pass
//! - constants: prepackaged variants and their preset values
//! - registry: the named store, manifest files and the process-wide instance
//! - paths: platform-neutral path construction

pub mod constants;
pub mod paths;
pub mod registry;
pub mod schema;

pub use constants::ModelVariant;
pub use registry::{ConfigRegistry, RegistryError, RegistryManifest};
pub use schema::{ConfigParseError, FieldViolation, ModelConfig, ValidationError, validate};
