//! Python type conversions for PyO3 bindings
//!
//! Wrappers and conversions between the Python harness and the Rust
//! configuration registry.

pub mod config;
pub mod conversions;
pub mod registry;
pub mod variant;

pub use config::RustModelConfig;
pub use registry::RustConfigRegistry;
pub use variant::RustModelVariant;
