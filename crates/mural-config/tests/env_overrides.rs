use figment::Jail;
use mural_config::{ConfigError, MuralConfig};

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("MURAL_AUTH__TOKEN", "tok_from_env");
        jail.set_env("MURAL_API__TIMEOUT_SECS", "3");

        let config = MuralConfig::load().expect("config loads");
        assert_eq!(config.auth.token, "tok_from_env");
        assert_eq!(config.api.timeout_secs, 3);
        Ok(())
    });
}

#[test]
fn numeric_looking_strings_stay_strings() {
    Jail::expect_with(|jail| {
        jail.set_env("MURAL_AUTH__TOKEN", "123456");
        jail.set_env("MURAL_API__USER_AGENT", "1.0");

        let config = MuralConfig::load().expect("config loads");
        assert_eq!(config.auth.token, "123456");
        assert_eq!(config.api.user_agent, "1.0");
        Ok(())
    });
}

#[test]
fn numeric_token_in_project_file_is_still_overridden_by_env() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mural")?;
        jail.create_file(".mural/config.toml", "[auth]\ntoken = \"from-file\"\n")?;
        jail.set_env("MURAL_AUTH__TOKEN", "42");

        let config = MuralConfig::load().expect("config loads");
        assert_eq!(config.auth.token, "42");
        Ok(())
    });
}

#[test]
fn explicit_overrides_beat_env() {
    Jail::expect_with(|jail| {
        jail.set_env("MURAL_API__BASE_URL", "http://from-env:9090");

        let overrides = [("api.base_url", "http://from-flag:7070".to_string())];
        let config = MuralConfig::load_with_overrides(&overrides).expect("config loads");
        assert_eq!(config.api.base_url, "http://from-flag:7070");
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("MURAL_API__BASE_URL", "localhost:8081");

        let err = MuralConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
