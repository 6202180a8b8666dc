//! Validation pass for `ModelConfig`
//!
//! Every check runs; violations are accumulated so a caller sees all
//! offending fields at once instead of fixing them one at a time.

use std::collections::HashSet;
use std::path::Path;

use super::config::ModelConfig;
use super::error::{FieldViolation, ValidationError};

/// Accumulates field violations across a validation pass
#[derive(Debug, Default)]
struct Checker {
    violations: Vec<FieldViolation>,
}

impl Checker {
    fn fail(&mut self, field: &'static str, reason: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, reason));
    }

    /// Integer counts and dimensions must be > 0
    fn positive(&mut self, field: &'static str, value: usize) {
        if value == 0 {
            self.fail(field, "must be > 0");
        }
    }

    /// Strictly positive, finite float
    fn positive_float(&mut self, field: &'static str, value: f64) {
        if !value.is_finite() || value <= 0.0 {
            self.fail(field, format!("must be a finite value > 0, got {}", value));
        }
    }

    /// Non-negative, finite float
    fn non_negative(&mut self, field: &'static str, value: f64) {
        if !value.is_finite() || value < 0.0 {
            self.fail(field, format!("must be a finite value >= 0, got {}", value));
        }
    }

    /// Float in the closed unit interval; NaN fails the range test
    fn unit_interval(&mut self, field: &'static str, value: f64) {
        if !(0.0..=1.0).contains(&value) {
            self.fail(field, format!("must be in [0, 1], got {}", value));
        }
    }

    fn non_empty_path(&mut self, field: &'static str, value: &Path) {
        if value.as_os_str().is_empty() {
            self.fail(field, "must not be empty");
        }
    }

    fn non_empty_str(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.fail(field, "must not be empty");
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.violations))
        }
    }
}

impl ModelConfig {
    /// Check every field range plus the `num_labels == labels.len()` invariant
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut check = Checker::default();

        check.positive("batch_size", self.batch_size);

        check.positive("hidden_dim", self.hidden_dim);
        check.positive("embedding_dimension", self.embedding_dimension);
        check.positive("gen_embedding_dim", self.gen_embedding_dim);
        check.positive("label_embedding_dim", self.label_embedding_dim);

        check.non_negative("lambda_sparsity", self.lambda_sparsity);
        check.non_negative("lambda_continuity", self.lambda_continuity);
        check.non_negative("lambda_anti", self.lambda_anti);
        check.unit_interval("target_sparsity", self.target_sparsity);

        check.positive("training_stop_thresh", self.training_stop_thresh);
        check.positive("count_pieces", self.count_pieces);

        check.unit_interval("dropout_rate", self.dropout_rate);
        check.positive("layer_num", self.layer_num);
        check.positive("embedding_dim", self.embedding_dim);
        check.unit_interval("exploration_rate", self.exploration_rate);
        check.non_negative("lambda_acc_gap", self.lambda_acc_gap);
        check.positive_float("lr", self.lr);

        check.positive("train_batch_size", self.train_batch_size);
        check.positive("test_batch_size", self.test_batch_size);

        check.non_empty_path("model_save_dir", &self.model_save_dir);
        check.non_empty_str("model_prefix", &self.model_prefix);
        check.non_empty_path("embedding_path", &self.embedding_path);

        let mut seen = HashSet::new();
        let mut duplicates: Vec<i64> = self
            .labels
            .iter()
            .copied()
            .filter(|label| !seen.insert(*label))
            .collect();
        duplicates.sort_unstable();
        duplicates.dedup();
        if !duplicates.is_empty() {
            check.fail("labels", format!("must be unique, duplicated {:?}", duplicates));
        }

        if self.num_labels == 0 {
            check.fail("num_labels", "must be > 0");
        } else if self.num_labels != self.labels.len() {
            check.fail(
                "num_labels",
                format!(
                    "must equal len(labels) ({} != {})",
                    self.num_labels,
                    self.labels.len()
                ),
            );
        }

        check.finish()
    }
}

/// Validate `config`, handing it back unchanged when every check passes
pub fn validate(config: ModelConfig) -> Result<ModelConfig, ValidationError> {
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn valid() -> ModelConfig {
        ModelConfig::new(
            PathBuf::from("models"),
            "unit".to_string(),
            PathBuf::from("embeddings"),
        )
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(valid().validate().is_ok());
        assert_eq!(validate(valid()).unwrap(), valid());
    }

    #[test]
    fn test_label_count_mismatch() {
        let config = valid().with_num_labels(3);

        let err = validate(config).unwrap_err();
        assert!(err.mentions("num_labels"));
        assert_eq!(err.violations().len(), 1);
        assert!(err.to_string().contains("3 != 2"));
    }

    #[test]
    fn test_dropout_out_of_range() {
        let err = valid().with_dropout_rate(1.5).validate().unwrap_err();
        assert!(err.mentions("dropout_rate"));
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn test_unit_interval_bounds_are_inclusive() {
        let config = valid()
            .with_dropout_rate(0.0)
            .with_target_sparsity(1.0)
            .with_exploration_rate(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_every_violation_reported() {
        let config = valid()
            .with_batch_size(0)
            .with_hidden_dim(0)
            .with_lambda_anti(-1.0)
            .with_lr(0.0)
            .with_exploration_rate(-0.1)
            .with_num_labels(5);

        let err = config.validate().unwrap_err();
        let fields: Vec<_> = err.fields().collect();
        assert_eq!(
            fields,
            vec![
                "batch_size",
                "hidden_dim",
                "lambda_anti",
                "exploration_rate",
                "lr",
                "num_labels"
            ]
        );
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        let config = valid()
            .with_lambda_sparsity(f64::NAN)
            .with_lr(f64::INFINITY)
            .with_target_sparsity(f64::NAN);

        let err = config.validate().unwrap_err();
        assert!(err.mentions("lambda_sparsity"));
        assert!(err.mentions("lr"));
        assert!(err.mentions("target_sparsity"));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let config = valid().with_labels(vec![0, 1, 1]).with_num_labels(3);

        let err = config.validate().unwrap_err();
        assert!(err.mentions("labels"));
        assert!(!err.mentions("num_labels"));
    }

    #[test]
    fn test_zero_labels_rejected() {
        let config = valid().with_labels(Vec::new()).with_num_labels(0);

        let err = config.validate().unwrap_err();
        assert!(err.mentions("num_labels"));
    }

    #[test]
    fn test_empty_locations_rejected() {
        let mut config = valid();
        config.model_save_dir = PathBuf::new();
        config.model_prefix = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.mentions("model_save_dir"));
        assert!(err.mentions("model_prefix"));
        assert!(!err.mentions("embedding_path"));
    }

    #[test]
    fn test_zero_epochs_allowed() {
        let config = valid().with_num_epochs(0).with_num_pretrain_epochs(0);
        assert!(config.validate().is_ok());
    }
}
