use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

pub const ENV_SITE_URL: &str = "WORDPRESS_SITE_URL";
pub const ENV_USERNAME: &str = "WORDPRESS_USERNAME";
pub const ENV_PASSWORD: &str = "WORDPRESS_PASSWORD";
pub const ENV_CONFIG_PATH: &str = "WP_GATEWAY_CONFIG";
pub const ENV_TIMEOUT_MS: &str = "WP_GATEWAY_TIMEOUT_MS";
pub const ENV_CONNECT_TIMEOUT_MS: &str = "WP_GATEWAY_CONNECT_TIMEOUT_MS";

const DEFAULT_TIMEOUT_MS: u64 = 6_000;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 2_000;

pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub rpc_shim: bool,
    pub config_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let rpc_shim = std::env::var("ENABLE_RPC_SHIM")
            .map(|v| !v.is_empty())
            .unwrap_or(false);
        let config_path = non_blank_env(ENV_CONFIG_PATH).map(PathBuf::from);

        Self {
            mode,
            port,
            rpc_shim,
            config_path,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.mode.as_str(), "server" | "stdio") {
            return Err(format!("invalid MODE: {}. Must be 'server' or 'stdio'", self.mode));
        }
        if self.mode == "server" && self.port == 0 {
            return Err("PORT cannot be 0".into());
        }
        Ok(())
    }
}

/// Process-wide WordPress defaults plus outbound HTTP limits.
///
/// Loaded from an optional TOML file (`[wordpress]` table) and then overlaid
/// with environment variables. Blank values count as unset.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct WordPressConfig {
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
}

#[derive(Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    wordpress: WordPressConfig,
}

impl fmt::Debug for WordPressConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordPressConfig")
            .field("site_url", &self.site_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}

impl WordPressConfig {
    pub fn from_env() -> Self {
        Self::default().overlay_env()
    }

    /// TOML file (if any) first, environment on top.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let base = match path {
            Some(p) => Self::from_toml_file(p)?,
            None => Self::default(),
        };
        Ok(base.overlay_env())
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("reading {}: {e}", path.display()))?;
        Self::from_toml_str(&raw).map_err(|e| format!("parsing {}: {e}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        let file: FileConfig = toml::from_str(raw)?;
        Ok(file.wordpress)
    }

    fn overlay_env(mut self) -> Self {
        if let Some(v) = non_blank_env(ENV_SITE_URL) {
            self.site_url = Some(v);
        }
        if let Some(v) = non_blank_env(ENV_USERNAME) {
            self.username = Some(v);
        }
        if let Some(v) = non_blank_env(ENV_PASSWORD) {
            self.password = Some(v);
        }
        if let Some(v) = non_blank_env(ENV_TIMEOUT_MS).and_then(|s| s.parse().ok()) {
            self.timeout_ms = Some(v);
        }
        if let Some(v) = non_blank_env(ENV_CONNECT_TIMEOUT_MS).and_then(|s| s.parse().ok()) {
            self.connect_timeout_ms = Some(v);
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms.unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS))
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "MODE",
            "PORT",
            "ENABLE_RPC_SHIM",
            ENV_CONFIG_PATH,
            ENV_SITE_URL,
            ENV_USERNAME,
            ENV_PASSWORD,
            ENV_TIMEOUT_MS,
            ENV_CONNECT_TIMEOUT_MS,
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_to_server_8080_without_shim() {
        clear_env();
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, "server");
        assert_eq!(cfg.port, 8080);
        assert!(!cfg.rpc_shim);
        assert!(cfg.config_path.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    #[serial]
    fn parses_env_overrides() {
        clear_env();
        std::env::set_var("MODE", "stdio");
        std::env::set_var("PORT", "9090");
        std::env::set_var("ENABLE_RPC_SHIM", "1");
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, "stdio");
        assert_eq!(cfg.port, 9090);
        assert!(cfg.rpc_shim);
        clear_env();
    }

    #[test]
    fn rejects_unknown_mode() {
        let cfg = Config { mode: "daemon".into(), port: 1, rpc_shim: false, config_path: None };
        assert!(cfg.validate().unwrap_err().contains("daemon"));
    }

    #[test]
    #[serial]
    fn wordpress_env_ignores_blank_values() {
        clear_env();
        std::env::set_var(ENV_SITE_URL, "https://blog.example");
        std::env::set_var(ENV_USERNAME, "   ");
        let wp = WordPressConfig::from_env();
        assert_eq!(wp.site_url.as_deref(), Some("https://blog.example"));
        assert_eq!(wp.username, None);
        assert_eq!(wp.password, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn env_wins_over_toml() {
        clear_env();
        let mut wp = WordPressConfig::from_toml_str(
            r#"
            [wordpress]
            site_url = "https://file.example"
            username = "file-user"
            timeout_ms = 1500
            "#,
        )
        .unwrap();
        std::env::set_var(ENV_USERNAME, "env-user");
        wp = wp.overlay_env();
        assert_eq!(wp.site_url.as_deref(), Some("https://file.example"));
        assert_eq!(wp.username.as_deref(), Some("env-user"));
        assert_eq!(wp.timeout(), Duration::from_millis(1500));
        assert_eq!(wp.connect_timeout(), Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS));
        clear_env();
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = WordPressConfig::from_toml_file(Path::new("/nonexistent/wp.toml")).unwrap_err();
        assert!(err.contains("/nonexistent/wp.toml"));
    }

    #[test]
    fn debug_redacts_password() {
        let wp = WordPressConfig { password: Some("s3cret".into()), ..Default::default() };
        assert!(!format!("{wp:?}").contains("s3cret"));
    }
}
