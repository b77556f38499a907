//! List command implementation
//!
//! Lists the configured clocks in display order.

use crate::cli::output::{print_output, ClockEntry, ClockList};
use crate::cli::Cli;
use crate::commands::load_face;
use crate::error::Result;

/// Execute the list command
pub fn run_list(cli: &Cli) -> Result<()> {
    let mut face = load_face(cli)?;
    // Rings are laid out longest first once settings are applied
    face.apply_settings(std::time::Instant::now());

    let store = face.store();
    let list = ClockList {
        clocks: store.iter().map(ClockEntry::from).collect(),
        capacity: store.capacity(),
    };

    print_output(&list, cli.format)?;

    Ok(())
}
