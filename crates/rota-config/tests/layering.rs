//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use rota_config::RotaConfig;

#[test]
fn loads_service_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[service]
base_url = "https://sched.example.com"
timeout_secs = 5
user_agent = "rota-ci/0.1"
"#,
        )?;

        let config: RotaConfig = Figment::from(Serialized::defaults(RotaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.service.base_url, "https://sched.example.com");
        assert_eq!(config.service.timeout_secs, 5);
        assert_eq!(config.service.user_agent, "rota-ci/0.1");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults_for_the_rest() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[service]
base_url = "https://sched.example.com"
"#,
        )?;

        let config: RotaConfig = Figment::from(Serialized::defaults(RotaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.service.base_url, "https://sched.example.com");
        assert_eq!(config.service.timeout_secs, 30);
        assert_eq!(config.service.user_agent, "rota/0.1");
        Ok(())
    });
}

#[test]
fn env_vars_override_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[service]
base_url = "https://from-toml.example.com"
timeout_secs = 5
"#,
        )?;
        jail.set_env("ROTA_SERVICE__BASE_URL", "https://from-env.example.com");
        jail.set_env("ROTA_SERVICE__TIMEOUT_SECS", "0");

        let config: RotaConfig = Figment::from(Serialized::defaults(RotaConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ROTA_").split("__"))
            .extract()?;

        assert_eq!(config.service.base_url, "https://from-env.example.com");
        assert_eq!(config.service.timeout_secs, 0);
        Ok(())
    });
}

#[test]
fn defaults_extract_without_any_source() {
    Jail::expect_with(|_jail| {
        let config: RotaConfig =
            Figment::from(Serialized::defaults(RotaConfig::default())).extract()?;

        assert_eq!(config.service.base_url, "http://localhost:8080");
        assert_eq!(config.service.timeout_secs, 30);
        assert!(config.service.validate().is_ok());
        Ok(())
    });
}
