use clap::Args;
use fitness_tracker_core::{process_package, render, Config, OutputFormat, SensorPackage};

use super::FormatArg;

#[derive(Args)]
pub struct CalcArgs {
    /// Workout code (SWM, RUN or WLK)
    code: String,
    /// Package values in field order (see `codes`)
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    values: Vec<f64>,
    /// Output format (defaults to report.format from config)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

pub fn run(args: CalcArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.report.format);
    let package = SensorPackage::new(args.code, args.values);
    let info = process_package(&package)?;
    println!("{}", render(&info, format)?);
    Ok(())
}
