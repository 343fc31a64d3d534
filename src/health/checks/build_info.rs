//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that build information is accessible and valid
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates build metadata (rustc, target, timestamps)")
    }

    fn check(&self) -> CheckResult {
        let fields = [
            ("Version", build_info::PKG_VERSION),
            ("Build time", build_info::BUILD_TIMESTAMP),
            ("Rustc", build_info::RUSTC_SEMVER),
            ("Channel", build_info::RUSTC_CHANNEL),
            ("Target", build_info::CARGO_TARGET_TRIPLE),
            ("Opt level", build_info::CARGO_OPT_LEVEL),
        ];

        let details = fields
            .iter()
            .map(|(label, value)| format!("  {}: {}", label, value))
            .collect();

        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| *label)
            .collect();

        if missing.is_empty() {
            CheckResult::pass("Build metadata accessible").with_details(details)
        } else {
            CheckResult::warn(format!("Missing build metadata: {}", missing.join(", ")))
                .with_details(details)
        }
    }
}
