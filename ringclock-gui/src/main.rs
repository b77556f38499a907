//! ringclock-gui - Ring Clock Face
//!
//! Concentric ring clocks drawn with Iced.

mod app;
mod message;
mod services;
mod state;
mod theme;
mod views;
mod widgets;

use app::RingClockGui;
use clap::Parser;
use iced::{window, Size};
use ringclock::config::ConfigBuilder;
use services::GuiConfig;
use std::process;

/// ringclock-gui - Ring Clock Face
#[derive(Parser, Debug)]
#[command(name = "ringclock-gui", version, about)]
struct Args {
    /// Clock configuration file (TOML)
    #[arg(short, long, env = "RINGCLOCK_CONFIG")]
    config: Option<String>,

    /// GUI preferences file (YAML)
    #[arg(short, long)]
    prefs: Option<String>,
}

fn main() -> iced::Result {
    // Initialize logging with wgpu noise filtered out
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .init();

    let args = Args::parse();

    let config = match ConfigBuilder::new().with_file(args.config.as_deref()) {
        Ok(builder) => builder.build(),
        Err(e) => {
            eprintln!("Config error: {}", e);
            process::exit(1);
        }
    };

    let face = match config.to_face() {
        Ok(face) => face,
        Err(e) => {
            eprintln!("Config error: {}", e);
            process::exit(1);
        }
    };

    let prefs = match args.prefs.as_deref() {
        Some(path) => match GuiConfig::load_from(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                eprintln!("Preferences error: {}", e);
                process::exit(1);
            }
        },
        None => GuiConfig::load(),
    };

    log::info!("Starting ringclock-gui with {} clock(s)", face.store().len());

    let window_settings = window::Settings {
        size: Size::new(prefs.window.width, prefs.window.height),
        min_size: Some(Size::new(640.0, 480.0)),
        ..Default::default()
    };

    iced::application(RingClockGui::title, RingClockGui::update, RingClockGui::view)
        .subscription(RingClockGui::subscription)
        .theme(RingClockGui::theme)
        .window(window_settings)
        .antialiasing(true)
        .run_with(move || RingClockGui::new(face, prefs))
}
