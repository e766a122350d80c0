use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "fitness-tracker", version, about = "Workout statistics from sensor packages")]
struct Cli {
    /// Use this config file instead of ~/.config/fitness-tracker/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the built-in sample packages
    ///
    /// Without --config, the first run writes a default config file to
    /// ~/.config/fitness-tracker/config.toml.
    Report(commands::report::ReportArgs),
    /// Report a single package given on the command line
    ///
    /// Without --config, the first run writes a default config file to
    /// ~/.config/fitness-tracker/config.toml.
    Calc(commands::calc::CalcArgs),
    /// List supported workout codes and their fields
    Codes,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref());
    init_tracing(&config.log.level);

    let result = match cli.command {
        Commands::Report(args) => commands::report::run(args, &config),
        Commands::Calc(args) => commands::calc::run(args, &config),
        Commands::Codes => commands::codes::run(),
        Commands::Config { action } => commands::config::run(action, cli.config.as_deref()),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "fitness-tracker",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
