//! Reading `ModelConfig` from partial JSON
//!
//! Only the three location fields are required. Every other field falls back
//! to its default; keys that are not `ModelConfig` fields are rejected.

use std::path::PathBuf;

use serde_json::{Map, Value};

use super::config::ModelConfig;
use super::error::ConfigParseError;

/// Fields with no default
pub const REQUIRED_FIELDS: [&str; 3] = ["model_save_dir", "model_prefix", "embedding_path"];

impl ModelConfig {
    /// Parse a JSON document; see [`ModelConfig::from_json_value`]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigParseError> {
        let value: Value =
            serde_json::from_str(json).map_err(|err| ConfigParseError::Json(err.to_string()))?;
        Self::from_json_value(value)
    }

    /// Lay a JSON object over the defaults and normalize the path fields
    ///
    /// The result is not validated.
    pub fn from_json_value(value: Value) -> Result<Self, ConfigParseError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => return Err(ConfigParseError::NotAnObject(json_kind(&other).to_string())),
        };

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|field| !fields.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            return Err(ConfigParseError::MissingFields(missing));
        }

        let mut merged = default_fields()?;

        let mut unknown: Vec<String> = fields
            .keys()
            .filter(|key| !merged.contains_key(key.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(ConfigParseError::UnknownFields(unknown));
        }

        merged.extend(fields);
        serde_json::from_value::<ModelConfig>(Value::Object(merged))
            .map(ModelConfig::normalize_paths)
            .map_err(|err| ConfigParseError::InvalidValue(err.to_string()))
    }
}

/// Every field of a default configuration, keyed by name
fn default_fields() -> Result<Map<String, Value>, ConfigParseError> {
    let defaults = ModelConfig::new(PathBuf::new(), String::new(), PathBuf::new());
    match serde_json::to_value(defaults) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(ConfigParseError::NotAnObject(json_kind(&other).to_string())),
        Err(err) => Err(ConfigParseError::Json(err.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
