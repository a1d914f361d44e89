use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_rhyme_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("RHYME_EMBEDDINGS_PATH");
        env::remove_var("RHYME_MODEL_PATH");
        env::remove_var("RHYME_RHYME_MAP_PATH");
        env::remove_var("RHYME_OUTPUT_PATH");
        env::remove_var("RHYME_EMBEDDING_DIM");
        env::remove_var("RHYME_SCORER");
    }
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.embeddings_path.is_none());
    assert!(config.model_path.is_none());
    assert!(config.rhyme_map_path.is_none());
    assert_eq!(config.output_path, PathBuf::from("rhyme_scores.tsv"));
    assert_eq!(config.embedding_dim, 25);
    assert_eq!(config.scorer, ScorerKind::Cosine);
}

#[test]
fn test_scorer_kind_parsing() {
    assert_eq!("cosine".parse::<ScorerKind>().unwrap(), ScorerKind::Cosine);
    assert_eq!(" Learned ".parse::<ScorerKind>().unwrap(), ScorerKind::Learned);

    let err = "bert".parse::<ScorerKind>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownScorer { .. }));
    assert!(err.to_string().contains("bert"));
}

#[test]
fn test_scorer_kind_display() {
    assert_eq!(ScorerKind::Cosine.to_string(), "cosine");
    assert_eq!(ScorerKind::Learned.to_string(), "learned");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_rhyme_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.embedding_dim, 25);
    assert_eq!(config.scorer, ScorerKind::Cosine);
    assert_eq!(config.output_path, PathBuf::from("rhyme_scores.tsv"));
}

#[test]
#[serial]
fn test_from_env_custom_paths() {
    clear_rhyme_env();

    with_env_vars(
        &[
            ("RHYME_EMBEDDINGS_PATH", "/data/glove.25d.txt"),
            ("RHYME_MODEL_PATH", "/models/rhyme_net.safetensors"),
            ("RHYME_RHYME_MAP_PATH", "/data/rhyme_map.txt"),
            ("RHYME_OUTPUT_PATH", "/tmp/out.csv"),
        ],
        || {
            let config = Config::from_env().expect("should parse");

            assert_eq!(
                config.embeddings_path,
                Some(PathBuf::from("/data/glove.25d.txt"))
            );
            assert_eq!(
                config.model_path,
                Some(PathBuf::from("/models/rhyme_net.safetensors"))
            );
            assert_eq!(
                config.rhyme_map_path,
                Some(PathBuf::from("/data/rhyme_map.txt"))
            );
            assert_eq!(config.output_path, PathBuf::from("/tmp/out.csv"));
        },
    );
}

#[test]
#[serial]
fn test_from_env_blank_path_is_unset() {
    clear_rhyme_env();

    with_env_vars(
        &[("RHYME_MODEL_PATH", "   "), ("RHYME_OUTPUT_PATH", "")],
        || {
            let config = Config::from_env().expect("should parse");
            assert!(config.model_path.is_none());
            assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        },
    );
}

#[test]
#[serial]
fn test_from_env_custom_dim_and_scorer() {
    clear_rhyme_env();

    with_env_vars(
        &[("RHYME_EMBEDDING_DIM", "300"), ("RHYME_SCORER", "learned")],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.embedding_dim, 300);
            assert_eq!(config.scorer, ScorerKind::Learned);
        },
    );
}

#[test]
#[serial]
fn test_invalid_dim_zero() {
    clear_rhyme_env();

    with_env_vars(&[("RHYME_EMBEDDING_DIM", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEmbeddingDim { .. }));
        assert!(err.to_string().contains("greater than 0"));
    });
}

#[test]
#[serial]
fn test_invalid_dim_not_number() {
    clear_rhyme_env();

    with_env_vars(&[("RHYME_EMBEDDING_DIM", "wide")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::DimParseError { .. }));
        assert!(err.to_string().contains("failed to parse embedding dimension"));
    });
}

#[test]
#[serial]
fn test_invalid_scorer() {
    clear_rhyme_env();

    with_env_vars(&[("RHYME_SCORER", "transformer")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownScorer { .. }));
    });
}

#[test]
fn test_validate_success_with_defaults() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_success_with_valid_paths() {
    let config = Config {
        embeddings_path: Some(manifest_dir().join("Cargo.toml")),
        model_path: Some(manifest_dir().join("Cargo.toml")),
        rhyme_map_path: Some(manifest_dir().join("Cargo.toml")),
        scorer: ScorerKind::Learned,
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_nonexistent_embeddings_path() {
    let config = Config {
        embeddings_path: Some(PathBuf::from("/nonexistent/glove.txt")),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_rhyme_map_path_is_directory() {
    let config = Config {
        rhyme_map_path: Some(manifest_dir().join("src")),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotAFile { .. }));
}

#[test]
fn test_validate_learned_requires_model_path() {
    let config = Config {
        scorer: ScorerKind::Learned,
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::MissingEnvVar { name } if name == "RHYME_MODEL_PATH"));
}

#[test]
fn test_validate_output_path_is_directory() {
    let config = Config {
        output_path: manifest_dir().join("src"),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::OutputIsDirectory { .. }));
}

#[test]
fn test_validate_zero_dim() {
    let config = Config {
        embedding_dim: 0,
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidEmbeddingDim { .. })
    ));
}

#[test]
fn test_validate_inputs_ignores_scorer_requirements() {
    let config = Config {
        rhyme_map_path: Some(manifest_dir().join("Cargo.toml")),
        scorer: ScorerKind::Learned,
        ..Default::default()
    };

    assert!(config.validate_inputs().is_ok());
    assert!(matches!(
        config.validate_scorer(),
        Err(ConfigError::MissingEnvVar { .. })
    ));
}

#[test]
fn test_validate_inputs_still_checks_files() {
    let config = Config {
        rhyme_map_path: Some(PathBuf::from("/nonexistent/rhyme_map.txt")),
        ..Default::default()
    };

    assert!(matches!(
        config.validate_inputs(),
        Err(ConfigError::PathNotFound { .. })
    ));
}
