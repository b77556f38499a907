//! ringclock - concentric ring clock library
//!
//! Each clock is a ring that fills over a configurable period (1-60
//! seconds or minutes) and is colored along a 2- or 3-stop gradient.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`services`]: Clock store, render loop and settings panel

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use error::{AppError, Result};
