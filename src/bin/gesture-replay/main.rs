use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use hand_gesture_drag::scene_config::load_config_from_file;
use hand_gesture_drag::sources::{HandSource, ReplaySource};
use hand_gesture_drag::systems::GestureSystem;

use cli::Cli;

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    debug!("Started; args: {:?}", cli);

    let config = load_config_from_file(&cli.config_path)?
        .with_display_size(cli.display_width, cli.display_height);

    if cli.save_config {
        config.write_config_to_file(&cli.config_path)?;
    }

    let mut source = ReplaySource::load(&cli.recording, config.min_detection_confidence)?;
    let mut system = GestureSystem::new(&config);

    let mut output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output {}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let mut frames_with_hands = 0;
    let mut grabs = 0;

    // End of the recording behaves like the camera running out of frames
    while let Some(hands) = source.next_frame() {
        let result = system.process_frame(&hands);

        if !hands.is_empty() {
            frames_with_hands += 1;
        }
        grabs += result.hands.iter().filter(|h| h.grabbed.is_some()).count();
        debug!(
            "Frame #{}: {} hand(s), {} finger(s) raised",
            source.frames_read(),
            hands.len(),
            result.total_fingers
        );

        serde_json::to_writer(&mut output, &result).context("Failed to write frame result")?;
        writeln!(output)?;
    }
    output.flush()?;

    info!(
        "Replay finished: {} frames, {} with hands, {} grabs",
        source.frames_read(),
        frames_with_hands,
        grabs
    );
    for (name, object) in system.objects() {
        info!("{} ended at {:?}", name, object.anchor());
    }

    Ok(())
}
