use std::path::Path;

use explainer::constants::*;
use explainer::{ModelConfig, RegistryError};

#[test]
fn test_preset_configs() {
    // BERT variant
    let bert = ModelVariant::Bert.config();
    assert_eq!(bert.hidden_dim, 768);
    assert_eq!(bert.embedding_dimension, 768);
    assert_eq!(bert.gen_embedding_dim, 768);
    assert!(bert.bert_explainers);

    // BERT+RNN and RNN variants share the RNN widths
    for variant in [ModelVariant::BertRnn, ModelVariant::Rnn] {
        let config = variant.config();
        assert_eq!(config.hidden_dim, 100, "{} hidden_dim", variant);
        assert_eq!(config.embedding_dimension, 100, "{} embedding_dimension", variant);
        assert_eq!(config.gen_embedding_dim, 100, "{} gen_embedding_dim", variant);
        assert!(!config.bert_explainers, "{} bert_explainers", variant);
    }
}

#[test]
fn test_shared_values() {
    for variant in ModelVariant::all() {
        let config = variant.config();

        assert!(!config.cuda);
        assert!(!config.pretrain_cls);
        assert_eq!(config.batch_size, 32);
        assert_eq!(config.num_epochs, 1);
        assert_eq!(config.num_pretrain_epochs, 10);
        assert_eq!(config.label_embedding_dim, 400);
        assert_eq!(config.lambda_sparsity, 1.0);
        assert_eq!(config.lambda_continuity, 0.0);
        assert_eq!(config.lambda_anti, 1.0);
        assert_eq!(config.target_sparsity, 0.3);
        assert_eq!(config.training_stop_thresh, 5);
        assert_eq!(config.count_pieces, 4);
        assert!(config.fine_tuning);
        assert_eq!(config.dropout_rate, 0.3);
        assert_eq!(config.layer_num, 1);
        assert_eq!(config.embedding_dim, 100);
        assert_eq!(config.exploration_rate, 0.05);
        assert_eq!(config.lambda_acc_gap, 1.2);
        assert_eq!(config.lr, 2e-4);
        assert_eq!(config.train_batch_size, 32);
        assert_eq!(config.test_batch_size, 32);
        assert_eq!(config.model_prefix, "sst2rnpmodeltest");
        assert_eq!(config.labels, vec![0, 1]);
    }
}

#[test]
fn test_label_invariant_holds_for_presets() {
    for variant in ModelVariant::all() {
        let config = variant.config();
        assert_eq!(
            config.num_labels,
            config.labels.len(),
            "Model {} violates num_labels == len(labels)",
            variant
        );
        assert!(config.validate().is_ok(), "Model {} is invalid", variant);
    }
}

#[test]
fn test_preset_paths_are_normalized() {
    let config = ModelVariant::Rnn.config();

    assert_eq!(config.model_save_dir, Path::new("..").join("test_models"));
    assert_eq!(config.embedding_path, Path::new("../../../data/sst2"));
    assert_eq!(
        config.checkpoint_stem(),
        Path::new("../test_models/sst2rnpmodeltest")
    );
}

#[test]
fn test_variant_names() {
    let names: Vec<&str> = ModelVariant::all().iter().map(|v| v.as_str()).collect();
    assert_eq!(names, vec!["bert", "bert_rnn", "rnn"]);

    for variant in ModelVariant::all() {
        assert_eq!(variant.as_str().parse::<ModelVariant>().unwrap(), variant);
        assert_eq!(variant.to_string(), variant.as_str());
    }

    assert_eq!(
        "gpt".parse::<ModelVariant>(),
        Err(RegistryError::UnknownVariant("gpt".to_string()))
    );
}

#[test]
fn test_preset_lookup_by_name() {
    let config = preset("bert").unwrap();
    assert!(config.bert_explainers);

    assert_eq!(ModelConfig::from(ModelVariant::BertRnn), preset("bert_rnn").unwrap());
    assert!(preset("nonexistent").is_none());
}
