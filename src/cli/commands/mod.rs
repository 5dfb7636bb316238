//! Command implementations, one module per step.

pub mod ideas;
pub mod plan;
pub mod profile;
pub mod scenario;
pub mod script;
pub mod status;
pub mod strategy;

use crate::models::config::Config;
use crate::store::{AppState, JsonFileStore};
use colored::Colorize;
use indicatif::ProgressBar;
use std::time::Duration;

/// Transient user-facing notice (validation problems, request failures).
pub(crate) fn notify(message: &str) {
    println!("{}", message.yellow());
}

/// Spinner shown while a generation request is in flight.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Open the persistent application state.
pub(crate) fn open_state(config: &Config) -> AppState<JsonFileStore> {
    AppState::load(JsonFileStore::open(&config.state_file))
}

/// Print a section heading.
pub(crate) fn heading(text: &str) {
    println!("{}", text.bold().cyan());
    println!();
}
