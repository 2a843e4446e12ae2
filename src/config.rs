use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "DELVE_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Timing of the simulated search backend
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Delay before a primary query is answered
    pub latency_ms: u64,
    /// Delay before a follow-up is answered (shorter than `latency_ms`)
    pub follow_up_latency_ms: u64,
    /// Upper bound on any single backend call
    pub timeout_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 700.0,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            follow_up_latency_ms: 900,
            timeout_ms: 10_000,
        }
    }
}

impl SearchConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn follow_up_latency(&self) -> Duration {
        Duration::from_millis(self.follow_up_latency_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("Could not determine home directory, using default config");
            Config::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    // ~/.config/ on every platform, not the macOS Application Support dir
    dirs::home_dir().map(|home| home.join(".config").join("delve").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("delve-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("write scratch config");
        path
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [search]
            latency_ms = 200
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.search.latency(), Duration::from_millis(200));
        assert_eq!(config.search.follow_up_latency(), Duration::from_millis(900));
        assert_eq!(config.search.timeout(), Duration::from_secs(10));
        assert_eq!(config.window.width, 900.0);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("delve-does-not-exist.toml");
        let config = load_from(&path);
        assert_eq!(config.search.latency_ms, 1500);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let path = scratch_file("malformed.toml", "[window\nwidth = ");
        let config = load_from(&path);
        assert_eq!(config.window.height, 700.0);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn file_values_are_applied() {
        let path = scratch_file(
            "full.toml",
            "[window]\nwidth = 640.0\nheight = 480.0\n\n[search]\nfollow_up_latency_ms = 300\n",
        );
        let config = load_from(&path);
        assert_eq!(config.window.width, 640.0);
        assert_eq!(config.window.height, 480.0);
        assert_eq!(config.search.follow_up_latency_ms, 300);
        let _ = std::fs::remove_file(path);
    }
}
