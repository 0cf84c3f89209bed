//! Configuration management
//!
//! `AppConfig` is shared by every build; loading it from files and the
//! environment is native only.

use serde::Deserialize;

use crate::environment::{AppEnvironment, DEFAULT_ENV};
use crate::theme::THEME_KEY;

/// Default site name shown in the page title and footer
pub const DEFAULT_SITE_NAME: &str = "LangCen Base";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Environment marker used when no page attribute supplies one
    #[serde(default = "default_env")]
    pub env: String,

    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Storage key the theme preference is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_env() -> String {
    DEFAULT_ENV.to_string()
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn default_storage_key() -> String {
    THEME_KEY.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: default_env(),
            site_name: default_site_name(),
            storage_key: default_storage_key(),
        }
    }
}

impl AppConfig {
    pub fn environment(&self) -> AppEnvironment {
        AppEnvironment::from_attribute(Some(&self.env))
    }
}

/// Get config directory (LANGCEN_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("LANGCEN_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/langcen-ui");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("langcen-ui");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/langcen-ui");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("langcen-ui");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

/// Load configuration: defaults < langcen-ui.toml < LANGCEN_* env vars
///
/// Only prefixed variables are read; a bare `ENV` is ignored.
#[cfg(feature = "native")]
pub fn load_config() -> anyhow::Result<AppConfig> {
    let config_dir = get_config_dir();

    let builder = ::config::Config::builder()
        .set_default("env", DEFAULT_ENV)?
        .set_default("site_name", DEFAULT_SITE_NAME)?
        .set_default("storage_key", THEME_KEY)?
        .add_source(
            ::config::File::with_name(&config_dir.join("langcen-ui").to_string_lossy())
                .required(false),
        )
        // LANGCEN_ENV, LANGCEN_SITE_NAME, LANGCEN_STORAGE_KEY
        .add_source(::config::Environment::with_prefix("LANGCEN").try_parsing(true));

    let mut config: AppConfig = builder.build()?.try_deserialize()?;

    // An empty LANGCEN_ENV means "unset", same as an empty data-env attribute
    if config.env.is_empty() {
        config.env = DEFAULT_ENV.to_string();
    }
    Ok(config)
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for key in [
            "ENV",
            "LANGCEN_ENV",
            "LANGCEN_SITE_NAME",
            "LANGCEN_STORAGE_KEY",
            "LANGCEN_CONFIG_DIR",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        env::set_var("LANGCEN_CONFIG_DIR", "/tmp/langcen-test-nonexistent");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.env, "prod");
        assert_eq!(config.site_name, "LangCen Base");
        assert_eq!(config.storage_key, "theme");
        assert!(config.environment().is_production());
    }

    #[test]
    #[serial]
    fn test_file_then_env_precedence() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("langcen-ui.toml"),
            "env = \"staging\"\nsite_name = \"LangCen Dev\"\n",
        )
        .unwrap();
        env::set_var("LANGCEN_CONFIG_DIR", dir.path());

        let from_file = load_config().expect("config should load");

        env::set_var("LANGCEN_ENV", "test");
        let from_prefixed = load_config().expect("config should load");
        clear_env();

        assert_eq!(from_file.env, "staging");
        assert_eq!(from_file.site_name, "LangCen Dev");
        assert_eq!(from_prefixed.env, "test");
    }

    #[test]
    #[serial]
    fn test_bare_env_var_does_not_override() {
        clear_env();
        env::set_var("LANGCEN_CONFIG_DIR", "/tmp/langcen-test-nonexistent");
        env::set_var("ENV", "dev");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.env, "prod");
    }

    #[test]
    #[serial]
    fn test_empty_prefixed_env_falls_back_to_prod() {
        clear_env();
        env::set_var("LANGCEN_CONFIG_DIR", "/tmp/langcen-test-nonexistent");
        env::set_var("LANGCEN_ENV", "");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.env, "prod");
    }
}
