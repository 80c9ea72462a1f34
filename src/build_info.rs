//! Build metadata
//!
//! `build.rs` stamps each compile with a build number and UTC timestamp.

use serde::Serialize;

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

const RAW_BUILD_NUMBER: Option<&str> = option_env!("BEVCALC_BUILD_NUMBER");
const RAW_BUILD_TIMESTAMP: Option<&str> = option_env!("BEVCALC_BUILD_TIMESTAMP");

/// Version, build and compile time of the running binary
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// 0 when built without the build script's stamp
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: parse_build_number(RAW_BUILD_NUMBER),
            build_timestamp: RAW_BUILD_TIMESTAMP.unwrap_or("unknown"),
            description: DESCRIPTION,
        }
    }

    /// `1.0.0+build.42`
    pub fn full_version(&self) -> String {
        format!("{}+build.{}", self.version, self.build_number)
    }

    fn banner_lines(&self) -> Vec<String> {
        let rule = "=".repeat(47);
        vec![
            rule.clone(),
            "  Beverage Nutrition Calculator (bevcalc)".to_string(),
            format!("  Version: {}", self.full_version()),
            format!("  Compiled: {}", self.build_timestamp),
            rule,
        ]
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

fn parse_build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    for line in BuildInfo::current().banner_lines() {
        eprintln!("{}", line);
    }
}
