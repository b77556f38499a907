//! Services for ringclock-gui
//!
//! Preference loading lives here; clock logic comes from the ringclock library.

mod config;

pub use config::{DisplayPrefs, GuiConfig};
