//! # Gesture Frontend
//!
//! Renders the draggable shapes, hand skeletons and finger count for each frame, in
//! a single window. Hands come either from a recording or, by default, from a
//! simulated hand whose index fingertip follows the mouse pointer; keys 1-5 raise
//! and lower its fingers (thumb to pinky).
//!
//! Press Q to quit.
use clap::Parser;

use env_logger::Env;
use log::{debug, error};
use model::Model;

mod cli;
mod model;
mod ui;

use cli::Cli;
use ui::SIDE_PANEL_WIDTH;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level))
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("eframe", log::LevelFilter::Warn)
        .filter_module("egui_glow", log::LevelFilter::Warn)
        .init();

    debug!("Started; args: {:?}", cli);

    let model = match Model::new(&cli) {
        Ok(model) => model,
        Err(e) => {
            error!("Failed to start: {:#}", e);
            std::process::exit(1);
        }
    };

    let (width, height) = model.system.display_size();
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(
            width as f32 + SIDE_PANEL_WIDTH + 32.0,
            height as f32 + 32.0,
        )),
        ..Default::default()
    };
    eframe::run_native(
        "Hand Gesture Drag",
        options,
        Box::new(|_cc| Box::new(model)),
    )
}
