// ============================
// gatekey-backend-lib/src/config.rs
// ============================
//! Configuration management.
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Root directory of the flat-file user store
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Token signing secret. No default: startup fails when it is absent.
    pub secret_key: String,
}

fn default_bind_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load settings from `gatekey.toml` and `GATEKEY_`-prefixed
    /// environment variables, the latter taking precedence.
    pub fn load() -> Result<Self> {
        Self::load_from("gatekey.toml")
    }

    /// Load settings from an explicit config file path.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("GATEKEY_"))
            .extract()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_env_only() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GATEKEY_SECRET_KEY", "s3cret");
            let settings = Settings::load().expect("settings should load");
            assert_eq!(settings.secret_key, "s3cret");
            assert_eq!(settings.log_level, "info");
            assert_eq!(settings.data_dir, PathBuf::from("data"));
            assert_eq!(settings.bind_addr, "127.0.0.1:3000".parse().unwrap());
            Ok(())
        });
    }

    #[test]
    fn missing_secret_fails_startup() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            assert!(Settings::load().is_err());
            Ok(())
        });
    }

    #[test]
    fn file_values_overridden_by_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "gatekey.toml",
                r#"
                    secret_key = "from-file"
                    log_level  = "debug"
                "#,
            )?;
            jail.set_env("GATEKEY_SECRET_KEY", "from-env");
            let settings = Settings::load().expect("settings should load");
            assert_eq!(settings.secret_key, "from-env");
            assert_eq!(settings.log_level, "debug");
            Ok(())
        });
    }
}
