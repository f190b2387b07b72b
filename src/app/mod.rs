//! All app-related state and logic.

use crate::prelude::*;
use nannou::prelude::*;
use nannou::LoopMode::RefreshSync;
use nannou_audio;

pub mod audio;
pub mod gui;
mod model;
pub mod mouse;
pub mod update;
pub mod view;

pub use model::Model;
use update::update;

/// Runs the app via Nannou.
pub fn run_app() {
    nannou::app(Model::build)
        .loop_mode(RefreshSync)
        .update(update)
        .run();
}
