//! Typed configuration schema
//!
//! - config::ModelConfig: the closed record of every hyperparameter
//! - json: reading partial JSON over the defaults
//! - validation: the validation pass, reporting every violated field
//! - error::ValidationError: the collected violations

pub mod config;
pub mod error;
pub mod json;
pub mod validation;

pub use config::ModelConfig;
pub use error::{ConfigParseError, FieldViolation, ValidationError};
pub use validation::validate;
