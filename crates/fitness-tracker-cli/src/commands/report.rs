use clap::Args;
use fitness_tracker_core::{sample_packages, Config, ErrorPolicy};

use super::FormatArg;

#[derive(Args)]
pub struct ReportArgs {
    /// Output format (defaults to report.format from config)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Skip failing packages instead of stopping
    #[arg(long)]
    keep_going: bool,
}

pub fn run(args: ReportArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = config.run_options();
    if let Some(format) = args.format {
        options.format = format.into();
    }
    if args.keep_going {
        options.on_error = ErrorPolicy::Skip;
    }

    let stdout = std::io::stdout();
    let summary = fitness_tracker_core::run(&sample_packages(), &mut stdout.lock(), &options)?;
    if summary.failed > 0 {
        eprintln!("{} of {} packages failed", summary.failed, summary.processed + summary.failed);
    }
    Ok(())
}
