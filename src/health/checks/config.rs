//! Configuration system health check

use crate::app::AppConfig;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that configuration can be loaded for all profiles
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a new config check for the shipped profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    /// Creates a config check with custom profiles
    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates configuration loading from files and environment")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failed = 0;

        for profile in &self.profiles {
            match AppConfig::load(profile) {
                Ok(config) if config.window.width > 0.0 && config.window.height > 0.0 => {
                    details.push(format!(
                        "  ✓ Profile '{}': {}x{} \"{}\", log filter '{}'",
                        profile,
                        config.window.width,
                        config.window.height,
                        config.window.title,
                        config.logging.filter
                    ));
                }
                Ok(config) => {
                    details.push(format!(
                        "  ✗ Profile '{}': window size {}x{} is not positive",
                        profile, config.window.width, config.window.height
                    ));
                    failed += 1;
                }
                Err(e) => {
                    details.push(format!("  ✗ Profile '{}': failed to load - {}", profile, e));
                    failed += 1;
                }
            }
        }

        let env_ok = match AppConfig::load_from_env() {
            Ok(config) => {
                details.push(format!(
                    "  ✓ Environment config: profile '{}' loaded",
                    config.profile
                ));
                true
            }
            Err(e) => {
                details.push(format!("  ⚠ Environment config: {}", e));
                false
            }
        };

        if failed > 0 {
            CheckResult::fail(format!("{} of {} profiles failed", failed, self.profiles.len()))
                .with_details(details)
        } else if !env_ok {
            CheckResult::warn("Config loaded with warnings").with_details(details)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details)
        }
    }
}
