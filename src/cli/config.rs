use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::driver::session::DriverConfig;
use crate::driver::wait::WaitConfig;

pub const DEFAULT_CONFIG_PATH: &str = "desktop-e2e.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "desktop-e2e",
    version,
    about = "Page-object driven end-to-end checks for the desktop app"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: desktop-e2e.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run scenarios against the application
    Run {
        /// Scenario name, or "all"
        #[arg(long, default_value = "all")]
        scenario: String,

        /// Which driver to use
        #[arg(long, value_enum, default_value_t = DriverKind::Session)]
        driver: DriverKind,

        /// Output format: console, junit
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Wait timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Poll interval in milliseconds
        #[arg(long)]
        poll_interval_ms: Option<u64>,

        /// Append step events as JSON lines to this file
        #[arg(long)]
        trace: Option<String>,
    },

    /// List the locators the page objects use
    Locators,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DriverKind {
    /// Launch the automation bridge process
    Session,
    /// In-memory application where every flow succeeds (dry run)
    Scripted,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `desktop-e2e.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub wait: WaitConfig,
    #[serde(default)]
    pub driver: DriverConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,

    pub trace_file: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: default_console(),
            output: None,
            trace_file: None,
        }
    }
}

fn default_console() -> String {
    "console".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "malformed config, using defaults");
            AppConfig::default()
        }),
        Err(_) => {
            tracing::debug!(path = config_path, "no config file, using defaults");
            AppConfig::default()
        }
    }
}

/// Overlay CLI wait flags on the configured wait settings.
pub fn resolve_wait(
    config: &WaitConfig,
    timeout_ms: Option<u64>,
    poll_interval_ms: Option<u64>,
) -> WaitConfig {
    WaitConfig {
        timeout_ms: timeout_ms.unwrap_or(config.timeout_ms),
        poll_interval_ms: poll_interval_ms.unwrap_or(config.poll_interval_ms),
    }
}

/// Map `-v` occurrences to a default tracing filter.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
