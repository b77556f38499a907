//! Scale command implementation
//!
//! Samples the configured gradient.

use crate::cli::output::{print_output, ScaleOutput, ScaleSample};
use crate::cli::Cli;
use crate::commands::load_face;
use crate::domain::ColorScale;
use crate::error::Result;

/// Execute the scale command
pub fn run_scale(cli: &Cli, samples: u16) -> Result<()> {
    let face = load_face(cli)?;
    let stops = face.stops();
    let scale = ColorScale::build(stops);

    let output = ScaleOutput {
        stops: stops.to_vec(),
        samples: scale
            .samples(samples as usize)
            .into_iter()
            .map(|(t, color)| ScaleSample { t, color })
            .collect(),
    };

    print_output(&output, cli.format)?;

    Ok(())
}
