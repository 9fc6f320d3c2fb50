//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use mastery_config::MasteryConfig;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "./data/mastery.db"

[server]
host = "0.0.0.0"
port = 9090

[general]
seed_demo_data = true
"#,
        )?;

        let config: MasteryConfig = Figment::from(Serialized::defaults(MasteryConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "./data/mastery.db");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert!(config.general.seed_demo_data);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[server]\nport = 9090\n")?;
        jail.set_env("MASTERY_SERVER__PORT", "7000");

        let config: MasteryConfig = Figment::from(Serialized::defaults(MasteryConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MASTERY_").split("__"))
            .extract()?;

        assert_eq!(config.server.port, 7000);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mastery")?;
        jail.create_file(".mastery/config.toml", "[database]\npath = \"local.db\"\n")?;

        let config = MasteryConfig::load().expect("config loads");
        assert_eq!(config.database.path, "local.db");
        Ok(())
    });
}

#[test]
fn explicit_file_sits_below_env() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[database]\npath = \"custom.db\"\n[server]\nport = 1234\n")?;
        jail.set_env("MASTERY_DATABASE__PATH", ":memory:");

        let config = MasteryConfig::load_from_file(std::path::Path::new("custom.toml"))
            .expect("config loads");
        assert_eq!(config.database.path, ":memory:");
        assert!(config.database.is_in_memory());
        assert_eq!(config.server.port, 1234);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[server]\nhost = \"::1\"\n")?;

        let config: MasteryConfig = Figment::from(Serialized::defaults(MasteryConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.path, "mastery.db");
        assert_eq!(config.server.socket_addr().unwrap().to_string(), "[::1]:8000");
        Ok(())
    });
}
