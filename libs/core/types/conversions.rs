//! Error conversion utilities for Python-Rust interoperability
//!
//! Registry errors map onto the Python exception a dict-based harness would
//! have raised for the same mistake.

use explainer::{RegistryError, ValidationError};
use pyo3::exceptions::{PyIOError, PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

/// Convert a library `Result` into a `PyResult` with the matching exception type
pub trait ConversionResult<T> {
    fn into_py_result(self) -> PyResult<T>;
}

impl<T> ConversionResult<T> for Result<T, RegistryError> {
    fn into_py_result(self) -> PyResult<T> {
        self.map_err(registry_error_to_py)
    }
}

impl<T> ConversionResult<T> for Result<T, ValidationError> {
    fn into_py_result(self) -> PyResult<T> {
        self.map_err(|err| PyValueError::new_err(err.to_string()))
    }
}

/// - `UnknownVariant` -> `KeyError`
/// - `Validation`, `InvalidManifestEntry` -> `ValueError`
/// - `Sealed` -> `RuntimeError`
/// - `Load`, `Save` -> `IOError`
pub fn registry_error_to_py(err: RegistryError) -> PyErr {
    let message = err.to_string();
    match err {
        RegistryError::UnknownVariant(_) => PyKeyError::new_err(message),
        RegistryError::Validation(_) | RegistryError::InvalidManifestEntry { .. } => {
            PyValueError::new_err(message)
        }
        RegistryError::Sealed(_) => PyRuntimeError::new_err(message),
        RegistryError::Load { .. } | RegistryError::Save { .. } => PyIOError::new_err(message),
    }
}
