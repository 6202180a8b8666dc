// Prepackaged rationale explainer configurations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::paths::normalize_path;
use crate::registry::RegistryError;
use crate::schema::ModelConfig;

/// Checkpoint directory shared by the prepackaged models
pub const MODEL_SAVE_DIR: &str = "..\\test_models";

/// Checkpoint file prefix shared by the prepackaged models
pub const MODEL_PREFIX: &str = "sst2rnpmodeltest";

/// Word embedding directory shared by the prepackaged models
pub const EMBEDDING_PATH: &str = "../../../data/sst2\\";

/// Hidden/embedding width of the BERT encoder
pub const BERT_HIDDEN_DIM: usize = 768;

/// Hidden/embedding width of the RNN encoder
pub const RNN_HIDDEN_DIM: usize = 100;

/// Prepackaged model variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    Bert,
    BertRnn,
    Rnn,
}

impl ModelVariant {
    /// Registry key for this variant
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::Bert => "bert",
            ModelVariant::BertRnn => "bert_rnn",
            ModelVariant::Rnn => "rnn",
        }
    }

    /// All prepackaged variants
    pub fn all() -> Vec<Self> {
        vec![ModelVariant::Bert, ModelVariant::BertRnn, ModelVariant::Rnn]
    }

    /// Preset configuration for this variant
    pub fn config(&self) -> ModelConfig {
        let base = ModelConfig::new(
            normalize_path(MODEL_SAVE_DIR),
            MODEL_PREFIX.to_string(),
            normalize_path(EMBEDDING_PATH),
        );

        match self {
            ModelVariant::Bert => base
                .with_hidden_dim(BERT_HIDDEN_DIM)
                .with_embedding_dimension(BERT_HIDDEN_DIM)
                .with_gen_embedding_dim(BERT_HIDDEN_DIM)
                .with_bert_explainers(true),
            ModelVariant::BertRnn | ModelVariant::Rnn => base
                .with_hidden_dim(RNN_HIDDEN_DIM)
                .with_embedding_dimension(RNN_HIDDEN_DIM)
                .with_gen_embedding_dim(RNN_HIDDEN_DIM)
                .with_bert_explainers(false),
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelVariant {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bert" => Ok(ModelVariant::Bert),
            "bert_rnn" => Ok(ModelVariant::BertRnn),
            "rnn" => Ok(ModelVariant::Rnn),
            _ => Err(RegistryError::UnknownVariant(s.to_string())),
        }
    }
}

impl From<ModelVariant> for ModelConfig {
    fn from(variant: ModelVariant) -> Self {
        variant.config()
    }
}

/// Preset configuration for a variant name, without touching any registry
pub fn preset(name: &str) -> Option<ModelConfig> {
    name.parse::<ModelVariant>().ok().map(ModelConfig::from)
}
