//! Configuration schema for the rationale explainer models
//!
//! `ModelConfig` is a closed, typed record of every hyperparameter the
//! training harness reads. Defaults are the values shared by all three
//! prepackaged variants; only the save/embedding locations and the model
//! prefix are required at construction.

use std::path::PathBuf;

use burn::config::Config;

use crate::paths;

/// Hyperparameters for one rationale explainer variant
#[derive(Config, Debug, PartialEq)]
pub struct ModelConfig {
    /// Run on a CUDA device instead of the CPU
    #[config(default = false)]
    pub cuda: bool,

    /// Whether the classifier starts from pretrained weights
    #[config(default = false)]
    pub pretrain_cls: bool,

    #[config(default = 32)]
    pub batch_size: usize,

    #[config(default = 1)]
    pub num_epochs: usize,

    #[config(default = 10)]
    pub num_pretrain_epochs: usize,

    #[config(default = false)]
    pub save_best_model: bool,

    #[config(default = 100)]
    pub hidden_dim: usize,

    #[config(default = 100)]
    pub embedding_dimension: usize,

    /// Embedding width of the rationale generator
    #[config(default = 100)]
    pub gen_embedding_dim: usize,

    #[config(default = 400)]
    pub label_embedding_dim: usize,

    /// Freeze the classifier while the explainer trains
    #[config(default = false)]
    pub fixed_classifier: bool,

    /// Loss weight on rationale length
    #[config(default = 1.0)]
    pub lambda_sparsity: f64,

    /// Loss weight on rationale contiguity
    #[config(default = 0.0)]
    pub lambda_continuity: f64,

    /// Loss weight on the anti-rationale (complement) prediction
    #[config(default = 1.0)]
    pub lambda_anti: f64,

    /// Fraction of tokens a rationale should keep, in [0, 1]
    #[config(default = 0.3)]
    pub target_sparsity: f64,

    /// Early-stopping patience, in evaluations without improvement
    #[config(default = 5)]
    pub training_stop_thresh: usize,

    /// Number of chunks a rationale is split into
    #[config(default = 4)]
    pub count_pieces: usize,

    #[config(default = true)]
    pub fine_tuning: bool,

    /// Use BERT-based explainers (only the `bert` variant does)
    #[config(default = false)]
    pub bert_explainers: bool,

    #[config(default = 0.3)]
    pub dropout_rate: f64,

    #[config(default = 1)]
    pub layer_num: usize,

    #[config(default = 100)]
    pub embedding_dim: usize,

    #[config(default = 0.05)]
    pub exploration_rate: f64,

    /// Loss weight on the accuracy gap between rationale and full input
    #[config(default = 1.2)]
    pub lambda_acc_gap: f64,

    #[config(default = 2e-4)]
    pub lr: f64,

    #[config(default = 32)]
    pub train_batch_size: usize,

    #[config(default = 32)]
    pub test_batch_size: usize,

    /// Directory checkpoints are written to
    pub model_save_dir: PathBuf,

    /// File name prefix for saved checkpoints
    pub model_prefix: String,

    /// Directory holding the pretrained word embeddings
    pub embedding_path: PathBuf,

    /// Class label ids, in output order
    #[config(default = "vec![0, 1]")]
    pub labels: Vec<i64>,

    #[config(default = 2)]
    pub num_labels: usize,
}

impl ModelConfig {
    /// Checkpoint location prefix: `model_save_dir/model_prefix`
    pub fn checkpoint_stem(&self) -> PathBuf {
        self.model_save_dir.join(&self.model_prefix)
    }

    /// Rebuild both path fields with platform-neutral separators
    ///
    /// Applied to every configuration read from disk, since serde keeps
    /// path strings verbatim.
    pub fn normalize_paths(mut self) -> Self {
        self.model_save_dir = paths::normalize(&self.model_save_dir);
        self.embedding_path = paths::normalize(&self.embedding_path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample() -> ModelConfig {
        ModelConfig::new(
            PathBuf::from("models"),
            "sample".to_string(),
            PathBuf::from("embeddings"),
        )
    }

    #[test]
    fn test_defaults_match_shared_values() {
        let config = sample();

        assert!(!config.cuda);
        assert_eq!(config.batch_size, 32);
        assert_eq!(config.num_pretrain_epochs, 10);
        assert_eq!(config.label_embedding_dim, 400);
        assert_eq!(config.lambda_continuity, 0.0);
        assert_eq!(config.lambda_acc_gap, 1.2);
        assert_eq!(config.lr, 2e-4);
        assert!(config.fine_tuning);
        assert!(!config.bert_explainers);
        assert_eq!(config.labels, vec![0, 1]);
        assert_eq!(config.num_labels, 2);
    }

    #[test]
    fn test_builders_override_single_fields() {
        let config = sample().with_hidden_dim(768).with_cuda(true);

        assert_eq!(config.hidden_dim, 768);
        assert!(config.cuda);
        assert_eq!(config.embedding_dimension, 100);
    }

    #[test]
    fn test_checkpoint_stem() {
        assert_eq!(sample().checkpoint_stem(), Path::new("models/sample"));
    }

    #[test]
    fn test_normalize_paths() {
        let mut config = sample();
        config.model_save_dir = PathBuf::from("..\\test_models\\");
        config.embedding_path = PathBuf::from("data\\sst2\\");

        let config = config.normalize_paths();
        assert_eq!(config.model_save_dir, Path::new("../test_models"));
        assert_eq!(config.embedding_path, Path::new("data/sst2"));
    }

    #[test]
    fn test_json_roundtrip_through_display() {
        let config = sample().with_bert_explainers(true);
        let json = config.to_string();

        let parsed = ModelConfig::load_binary(json.as_bytes()).unwrap();
        assert_eq!(parsed, config);
    }
}
