//! Tests for layered configuration loading.

use std::path::{Path, PathBuf};

use figment::Jail;

use super::config::{BorderhopConfig, DEFAULT_CONFIG_FILE};
use super::error::Error;

#[test]
fn test_defaults_without_file() {
    Jail::expect_with(|_jail| {
        let config = BorderhopConfig::load(None).expect("load");
        assert_eq!(config, BorderhopConfig::default());
        assert_eq!(config.api.max_attempts, 3);
        assert_eq!(config.api.retry_policy().max_attempts(), 3);
        assert!(config.storage.data_dir.is_none());
        Ok(())
    });
}

#[test]
fn test_toml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            DEFAULT_CONFIG_FILE,
            r#"
                [api]
                base_url = "http://localhost:9000"
                max_attempts = 5

                [storage]
                data_dir = "/tmp/borderhop"
            "#,
        )?;

        let config = BorderhopConfig::load(None).expect("load");
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.max_attempts, 5);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/borderhop")));
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[api]\nmax_attempts = 5\n")?;
        jail.set_env("BORDERHOP_API__MAX_ATTEMPTS", "7");
        jail.set_env("BORDERHOP_API__TIMEOUT_SECS", "2");

        let config = BorderhopConfig::load(Some(Path::new("custom.toml"))).expect("load");
        assert_eq!(config.api.max_attempts, 7);
        assert_eq!(config.api.timeout_secs, 2);
        Ok(())
    });
}

#[test]
fn test_explicit_missing_file_is_error() {
    Jail::expect_with(|_jail| {
        let err = BorderhopConfig::load(Some(Path::new("missing.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("missing.toml")));
        Ok(())
    });
}

#[test]
fn test_zero_attempts_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("BORDERHOP_API__MAX_ATTEMPTS", "0");
        let err = BorderhopConfig::load(None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    });
}

#[test]
fn test_malformed_value_is_config_error() {
    Jail::expect_with(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILE, "[api]\nmax_attempts = \"many\"\n")?;
        let err = BorderhopConfig::load(None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    });
}
