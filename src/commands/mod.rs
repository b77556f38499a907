//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod frame;
pub mod init;
pub mod list;
pub mod scale;
pub mod watch;

pub use frame::run_frame;
pub use init::run_init;
pub use list::run_list;
pub use scale::run_scale;
pub use watch::run_watch;

use crate::cli::Cli;
use crate::config::{Config, ConfigBuilder};
use crate::error::Result;
use crate::services::ClockFace;

/// Merge the config file with global CLI overrides
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_time_base(cli.time_base.map(Into::into))
        .with_color_mode(cli.color_mode.map(Into::into))
        .with_labels(cli.no_labels.then_some(false))
        .build();
    Ok(config)
}

/// Default log filter for the session
///
/// `debug` when `--verbose` is given or the config sets `general.verbose`,
/// `warn` otherwise. Config errors are left for the command to report.
pub fn default_log_filter(cli: &Cli) -> &'static str {
    let verbose = cli.verbose || load_config(cli).is_ok_and(|config| config.general.verbose);
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Build the configured clock face
pub fn load_face(cli: &Cli) -> Result<ClockFace> {
    Ok(load_config(cli)?.to_face()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ringclock").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_log_filter_follows_flag() {
        let file = config_file("[general]\nverbose = false");
        let path = file.path().to_str().unwrap();

        assert_eq!(default_log_filter(&cli(&["-c", path, "list"])), "warn");
        assert_eq!(default_log_filter(&cli(&["-c", path, "-v", "list"])), "debug");
    }

    #[test]
    fn test_log_filter_follows_config() {
        let file = config_file("[general]\nverbose = true");
        let path = file.path().to_str().unwrap();
        assert_eq!(default_log_filter(&cli(&["-c", path, "list"])), "debug");
    }

    #[test]
    fn test_log_filter_ignores_broken_config() {
        let file = config_file("[general\nverbose = ");
        let path = file.path().to_str().unwrap();
        assert_eq!(default_log_filter(&cli(&["-c", path, "list"])), "warn");
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let file = config_file("[general]\ntime_base = \"wall\"\nshow_labels = true");
        let path = file.path().to_str().unwrap();

        let args = ["-c", path, "--time-base", "elapsed", "--no-labels", "list"];
        let config = load_config(&cli(&args)).unwrap();
        assert_eq!(config.general.time_base, crate::services::TimeBase::Elapsed);
        assert!(!config.general.show_labels);
    }
}
