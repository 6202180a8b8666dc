//! Error types for registry operations

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::ValidationError;

/// Error types for configuration registry operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// No configuration is registered under this variant name
    #[error("unknown model variant '{0}'")]
    UnknownVariant(String),

    /// The configuration failed validation and was not stored
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A manifest entry failed validation; nothing from the manifest was stored
    #[error("manifest entry '{variant}' is invalid: {source}")]
    InvalidManifestEntry {
        variant: String,
        #[source]
        source: ValidationError,
    },

    /// Registration attempted after the registry was sealed by a lookup
    #[error("registry is sealed, cannot register '{0}' after the first lookup")]
    Sealed(String),

    /// Reading or parsing a configuration file failed
    #[error("failed to load configuration from {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    /// Serializing or writing a configuration file failed
    #[error("failed to save configuration to {}: {message}", .path.display())]
    Save { path: PathBuf, message: String },
}

impl RegistryError {
    pub(crate) fn load(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        RegistryError::Load {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn save(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        RegistryError::Save {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// The validation failure behind this error, if any
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            RegistryError::Validation(err) => Some(err),
            RegistryError::InvalidManifestEntry { source, .. } => Some(source),
            _ => None,
        }
    }
}
