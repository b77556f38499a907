//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::services::{ColorMode, TimeBase};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Concentric ring clocks
///
/// Inspect and run a configured clock face from the terminal.
#[derive(Parser, Debug)]
#[command(name = "ringclock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "RINGCLOCK_CONFIG")]
    pub config: Option<String>,

    /// Frame time source
    #[arg(long, global = true, value_enum)]
    pub time_base: Option<TimeBaseArg>,

    /// Ring fill color rule
    #[arg(long, global = true, value_enum)]
    pub color_mode: Option<ColorModeArg>,

    /// Hide remaining-time labels
    #[arg(long, global = true)]
    pub no_labels: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configured clocks, longest first
    List,

    /// Compute one frame of the clock face
    Frame(FrameArgs),

    /// Sample the gradient color scale
    Scale {
        /// Number of evenly spaced samples
        #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u16).range(2..=256))]
        samples: u16,
    },

    /// Run the render loop and print labels as they change
    Watch(WatchArgs),

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "ringclock.toml")]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the frame command
#[derive(Parser, Debug)]
pub struct FrameArgs {
    /// Frame time in seconds (default: now)
    #[arg(long)]
    pub at: Option<f64>,

    /// Include SVG path data for each ring
    #[arg(long)]
    pub paths: bool,
}

/// Arguments for the watch command
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Time between frames in milliseconds
    #[arg(short, long, default_value = "1000", value_parser = clap::value_parser!(u64).range(10..))]
    pub interval_ms: u64,

    /// Stop after this many frames
    #[arg(short, long)]
    pub ticks: Option<u64>,
}

/// Time base argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum TimeBaseArg {
    /// Wall clock time
    Wall,
    /// Time since the loop started
    Elapsed,
}

impl From<TimeBaseArg> for TimeBase {
    fn from(arg: TimeBaseArg) -> Self {
        match arg {
            TimeBaseArg::Wall => TimeBase::Wall,
            TimeBaseArg::Elapsed => TimeBase::Elapsed,
        }
    }
}

/// Color mode argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ColorModeArg {
    /// Color by ring position
    Index,
    /// Color by fill fraction
    Progress,
}

impl From<ColorModeArg> for ColorMode {
    fn from(arg: ColorModeArg) -> Self {
        match arg {
            ColorModeArg::Index => ColorMode::Index,
            ColorModeArg::Progress => ColorMode::Progress,
        }
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_list() {
        let args = Cli::try_parse_from(["ringclock", "list"]).unwrap();
        assert!(matches!(args.command, Commands::List));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let args = Cli::try_parse_from(["ringclock", "-v", "list"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_parse_frame_at() {
        let args = Cli::try_parse_from(["ringclock", "frame", "--at", "12.5", "--paths"]).unwrap();
        if let Commands::Frame(frame) = args.command {
            assert_eq!(frame.at, Some(12.5));
            assert!(frame.paths);
        } else {
            panic!("Expected Frame command");
        }
    }

    #[test]
    fn test_cli_parse_global_overrides() {
        let args = Cli::try_parse_from([
            "ringclock",
            "watch",
            "--time-base",
            "elapsed",
            "--color-mode",
            "progress",
            "--ticks",
            "3",
        ])
        .unwrap();
        assert!(matches!(args.time_base, Some(TimeBaseArg::Elapsed)));
        assert!(matches!(args.color_mode, Some(ColorModeArg::Progress)));
        if let Commands::Watch(watch) = args.command {
            assert_eq!(watch.ticks, Some(3));
            assert_eq!(watch.interval_ms, 1000);
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn test_cli_scale_sample_bounds() {
        assert!(Cli::try_parse_from(["ringclock", "scale", "--samples", "1"]).is_err());
        let args = Cli::try_parse_from(["ringclock", "scale", "-s", "3"]).unwrap();
        assert!(matches!(args.command, Commands::Scale { samples: 3 }));
    }

    #[test]
    fn test_cli_json_format() {
        let args = Cli::try_parse_from(["ringclock", "--format", "json", "list"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Json));
    }
}
