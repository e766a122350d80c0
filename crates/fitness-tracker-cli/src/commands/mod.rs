pub mod calc;
pub mod codes;
pub mod config;
pub mod report;

use clap::ValueEnum;
use fitness_tracker_core::{Config, OutputFormat};
use std::path::Path;

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Load the config from `path`, or from the default location.
///
/// Falls back to defaults so a broken config never blocks reporting.
pub fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) if path.exists() => Config::load_from(path).unwrap_or_else(|e| {
            eprintln!("warning: {e}; using defaults");
            Config::default()
        }),
        Some(_) => Config::default(),
        None => Config::load_or_default(),
    }
}
