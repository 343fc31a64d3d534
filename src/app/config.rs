//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width
    pub width: f64,
    /// Window height
    pub height: f64,
    /// Whether the window starts in borderless fullscreen
    pub fullscreen: bool,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Whether the window should be decorated (has title bar, borders, etc.)
    pub decorated: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "JBE Engine Test".to_string(),
            width: 1280.0,
            height: 720.0,
            fullscreen: false,
            resizable: true,
            decorated: true,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Log every frame that consumed events at debug level
    #[serde(default)]
    pub log_events: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber` filter directive; `RUST_LOG` takes precedence
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Window configuration
    pub window: WindowConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix APP_ (e.g., APP_WINDOW__WIDTH=1920)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let config_dir = Self::find_config_dir().unwrap_or_else(|| PathBuf::from("config"));
        Self::load_from_dir(&config_dir, profile)
    }

    /// Loads `{dir}/{profile}.toml` plus APP_ environment overrides
    pub fn load_from_dir(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let profile_path = dir.join(profile);

        let config = Config::builder()
            // Profile file; a missing file leaves only env vars and the override
            .add_source(File::from(profile_path.as_path()).required(false))
            // Use __ as separator for nested fields (e.g., APP_WINDOW__WIDTH)
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // The requested profile name always wins
            .set_override("profile", profile)?
            .build()?;

        config.try_deserialize()
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        // build.rs copies the profiles next to the binary
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        // Fall back to the working directory (cargo run, tests)
        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Built-in configuration used when nothing can be loaded
    pub fn builtin(profile: &str) -> Self {
        Self {
            profile: profile.to_string(),
            window: WindowConfig::default(),
            input: InputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_from_dir_reads_profile_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("arcade.toml"),
            r#"
[window]
title = "Arcade"
width = 640.0
height = 480.0
fullscreen = true
resizable = false
decorated = false

[input]
log_events = true

[logging]
filter = "jbe=trace"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_dir(dir.path(), "arcade").unwrap();
        assert_eq!(config.profile, "arcade");
        assert_eq!(config.window.title, "Arcade");
        assert_eq!(config.window.width, 640.0);
        assert!(config.window.fullscreen);
        assert!(config.input.log_events);
        assert_eq!(config.logging.filter, "jbe=trace");
    }

    #[test]
    fn test_optional_sections_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("minimal.toml"),
            r#"
[window]
title = "Minimal"
width = 320.0
height = 240.0
fullscreen = false
resizable = true
decorated = true
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_dir(dir.path(), "minimal").unwrap();
        assert!(!config.input.log_events);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_missing_profile_fails_without_window_section() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from_dir(dir.path(), "absent").is_err());
    }

    #[test]
    fn test_builtin_config() {
        let config = AppConfig::builtin("debug");
        assert_eq!(config.profile, "debug");
        assert_eq!(config.window.width, 1280.0);
        assert!(!config.window.fullscreen);
    }
}
