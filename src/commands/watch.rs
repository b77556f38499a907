//! Watch command implementation
//!
//! Runs the render loop in the terminal, printing a frame whenever its
//! labels change.

use crate::cli::args::WatchArgs;
use crate::cli::output::{print_output, FrameOutput, TableDisplay};
use crate::cli::Cli;
use crate::commands::load_face;
use crate::error::Result;

use std::thread;
use std::time::{Duration, Instant};

/// Execute the watch command
pub fn run_watch(cli: &Cli, args: &WatchArgs) -> Result<()> {
    let mut face = load_face(cli)?;
    let interval = Duration::from_millis(args.interval_ms);

    face.apply_settings(Instant::now());

    log::info!("Watching {} clock(s)", face.store().len());
    log::info!("  Interval: {:?}", interval);
    log::info!("  Time base: {:?}", face.render_loop().time_base());

    let mut last_shown: Option<String> = None;
    let mut ticks = 0u64;

    loop {
        let Some(frame) = face.tick(Instant::now()) else {
            break;
        };

        // Labels carry the visible state; fall back to fractions without them
        let output = FrameOutput::from_frame(&frame, true, false);
        let key = output.to_compact();
        if last_shown.as_deref() != Some(key.as_str()) {
            let shown = FrameOutput::from_frame(&frame, face.show_labels(), false);
            print_output(&shown, cli.format)?;
            last_shown = Some(key);
        }

        ticks += 1;
        if args.ticks.is_some_and(|limit| ticks >= limit) {
            break;
        }

        thread::sleep(interval);
    }

    face.render_loop_mut().stop();
    log::debug!("Render loop stopped after {} tick(s)", ticks);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_watch_stops_after_ticks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\ntime_base = \"elapsed\"\n\n[[clocks]]\nlength = 2").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "ringclock", "-c", path, "--format", "compact", "watch", "--interval-ms", "10",
            "--ticks", "3",
        ])
        .unwrap();
        let Commands::Watch(args) = &cli.command else {
            panic!("expected watch command");
        };

        let started = Instant::now();
        run_watch(&cli, args).unwrap();
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
