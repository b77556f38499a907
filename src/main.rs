//! ringclock - concentric ring clocks in the terminal
//!
//! Lists, samples and runs the clock face described by the configuration.

use clap::Parser;
use ringclock::cli::args::{generate_completions, Cli, Commands};
use ringclock::commands::{
    default_log_filter, run_frame, run_init, run_list, run_scale, run_watch,
};
use ringclock::error::{AppError, ConfigError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose or `general.verbose` raise the default to debug
    let default_level = default_log_filter(&cli);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::List => run_list(cli),

        Commands::Frame(args) => run_frame(cli, args),

        Commands::Scale { samples } => run_scale(cli, *samples),

        Commands::Watch(args) => run_watch(cli, args),

        Commands::Init { path, force } => run_init(cli, path, *force),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Run 'ringclock init' to write a default configuration,");
            eprintln!("      or unset RINGCLOCK_CONFIG to use the built-in defaults.");
        }
        AppError::Config(ConfigError::TomlError(_)) => {
            eprintln!();
            eprintln!("Hint: Clocks are listed as [[clocks]] tables with 'length' and 'unit'.");
        }
        _ => {}
    }
}
