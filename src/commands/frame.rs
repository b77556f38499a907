//! Frame command implementation
//!
//! Computes a single frame of the configured clock face.

use crate::cli::args::FrameArgs;
use crate::cli::output::{print_output, FrameOutput};
use crate::cli::Cli;
use crate::commands::load_face;
use crate::error::Result;
use crate::services::compute_frame;

use std::time::Instant;

/// Execute the frame command
pub fn run_frame(cli: &Cli, args: &FrameArgs) -> Result<()> {
    let mut face = load_face(cli)?;
    let now = Instant::now();
    face.apply_settings(now);

    let frame = match args.at {
        Some(at) => compute_frame(
            at,
            face.store(),
            face.applied_stops(),
            face.render_loop().color_mode(),
        ),
        // A freshly started loop is always running
        None => match face.tick(now) {
            Some(frame) => frame,
            None => return Ok(()),
        },
    };

    log::debug!("Computed frame at {:.3}s with {} ring(s)", frame.time, frame.rings.len());

    let output = FrameOutput::from_frame(&frame, face.show_labels(), args.paths);
    print_output(&output, cli.format)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use clap::Parser;
    use std::io::Write;

    fn frame_args(cli: &Cli) -> &FrameArgs {
        match &cli.command {
            Commands::Frame(args) => args,
            other => panic!("expected frame command, got {:?}", other),
        }
    }

    #[test]
    fn test_frame_at_fixed_time() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[clocks]]\nlength = 4\n\n[[clocks]]\nlength = 1\nunit = \"min\"").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "ringclock", "-c", path, "--format", "json", "frame", "--at", "2.5", "--paths",
        ])
        .unwrap();
        let args = frame_args(&cli);
        assert_eq!(args.at, Some(2.5));
        run_frame(&cli, args).unwrap();
    }

    #[test]
    fn test_frame_reports_missing_config() {
        let cli = Cli::try_parse_from(["ringclock", "-c", "/nonexistent/ringclock.toml", "frame"])
            .unwrap();
        assert!(run_frame(&cli, frame_args(&cli)).is_err());
    }
}
