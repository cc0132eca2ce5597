use anyhow::Result;
use egui::Key;
use log::info;

use hand_gesture_drag::{
    Point2D,
    hand::HandFrame,
    scene_config::load_config_from_file,
    sources::{HandSource, PointerHandSource, ReplaySource},
    systems::{FrameResult, GestureSystem},
};

use crate::cli::Cli;
use crate::ui::render_ui;

const FINGER_KEYS: [Key; 5] = [Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5];

pub enum HandInput {
    Pointer(PointerHandSource),
    Replay(ReplaySource),
}

impl HandInput {
    fn source_mut(&mut self) -> &mut dyn HandSource {
        match self {
            HandInput::Pointer(s) => s,
            HandInput::Replay(s) => s,
        }
    }
}

pub struct Model {
    pub system: GestureSystem,
    pub input: HandInput,
    pub hands: HandFrame,
    pub last_result: Option<FrameResult>,
    pub landmark_size: f32,
    pub show_skeletons: bool,
    pub show_capture_radius: bool,
    pub finished: bool,
}

impl Model {
    pub fn new(cli: &Cli) -> Result<Model> {
        let config = load_config_from_file(&cli.config_path)?
            .with_display_size(cli.display_width, cli.display_height);

        let input = match &cli.recording {
            Some(path) => HandInput::Replay(ReplaySource::load(
                path,
                config.min_detection_confidence,
            )?),
            None => {
                info!("No recording given; simulating a hand at the mouse pointer");
                HandInput::Pointer(PointerHandSource::new())
            }
        };

        Ok(Model {
            system: GestureSystem::new(&config),
            input,
            hands: Vec::new(),
            last_result: None,
            landmark_size: 3.0,
            show_skeletons: true,
            show_capture_radius: false,
            finished: false,
        })
    }

    /// Pull the next frame of hands and run it through the gesture system.
    /// `pointer` is the normalised mouse position over the display, if any.
    pub fn step(&mut self, pointer: Option<Point2D>) {
        if let HandInput::Pointer(source) = &mut self.input {
            source.set_pointer(pointer);
        }
        match self.input.source_mut().next_frame() {
            Some(hands) => {
                self.last_result = Some(self.system.process_frame(&hands));
                self.hands = hands;
            }
            None => {
                if !self.finished {
                    info!("End of hand stream");
                }
                self.finished = true;
            }
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) -> bool {
        if let HandInput::Pointer(source) = &mut self.input {
            for (finger, key) in FINGER_KEYS.iter().enumerate() {
                if ctx.input(|i| i.key_pressed(*key)) {
                    source.toggle_finger(finger);
                }
            }
        }
        ctx.input(|i| i.key_pressed(Key::Q))
    }
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if self.handle_keys(ctx) {
            info!("Quit key pressed");
            frame.close();
            return;
        }

        render_ui(ctx, self);

        if self.finished {
            frame.close();
        } else {
            ctx.request_repaint();
        }
    }
}
