//! Batch processing of sensor packages.
//!
//! [`run`] walks a package list in order and writes one line per package.
//! What happens when a package fails is decided by [`ErrorPolicy`]: abort
//! the whole run, or log the failure and keep going. Either way the lines
//! that are written appear in input order.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::Result;
use crate::package::SensorPackage;
use crate::report::InfoMessage;
use crate::training::Training;

/// What to do when a package cannot be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failing package and return its error.
    #[default]
    Abort,
    /// Log the failure and continue with the next package.
    Skip,
}

/// How each report line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The fixed one-line summary.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub on_error: ErrorPolicy,
    pub format: OutputFormat,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Packages reported successfully
    pub processed: usize,
    /// Packages skipped because of an error
    pub failed: usize,
}

/// The built-in sample packages.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build the record for one package and compute its report.
///
/// # Errors
///
/// Besides factory errors, returns [`crate::CoreError::Validation`] when a
/// metric overflows to a non-finite value.
pub fn process_package(package: &SensorPackage) -> Result<InfoMessage> {
    Ok(package.read()?.show_training_info().ensure_finite()?)
}

/// Render a report in the requested format.
pub fn render(info: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(info)?),
    }
}

/// Process `packages` in order, writing one line per reported package to `out`.
///
/// # Errors
///
/// With [`ErrorPolicy::Abort`], returns the first package error. Write
/// failures are returned regardless of policy.
pub fn run<W: Write>(
    packages: &[SensorPackage],
    out: &mut W,
    options: &RunOptions,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (index, package) in packages.iter().enumerate() {
        let line = process_package(package).and_then(|info| render(&info, options.format));
        match line {
            Ok(line) => {
                writeln!(out, "{line}")?;
                summary.processed += 1;
            }
            Err(e) => match options.on_error {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Skip => {
                    tracing::warn!(
                        index,
                        workout_type = %package.workout_type,
                        error = %e,
                        "skipping package"
                    );
                    summary.failed += 1;
                }
            },
        }
    }

    tracing::debug!(
        processed = summary.processed,
        failed = summary.failed,
        "run finished"
    );
    Ok(summary)
}
