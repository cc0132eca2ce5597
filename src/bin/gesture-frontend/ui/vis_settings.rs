use egui::{Slider, Ui};

use crate::model::{HandInput, Model};

pub fn render_vis_settings(model: &mut Model, ui: &mut Ui) {
    ui.heading("Visualisation Settings");
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label("Landmark radius");
            ui.add(Slider::new(&mut model.landmark_size, 1.0..=10.0));
        });
        ui.checkbox(&mut model.show_skeletons, "Show hand skeletons");
        ui.checkbox(&mut model.show_capture_radius, "Show capture radius");
    });

    ui.separator();
    match &model.input {
        HandInput::Pointer(_) => {
            ui.label("Move the mouse over the scene to drag shapes with the index fingertip.");
            ui.label("Keys 1-5 raise/lower thumb, index, middle, ring, pinky.");
        }
        HandInput::Replay(_) => {
            ui.label("Replaying recorded hands.");
        }
    }
    ui.label("Press Q to quit.");
}
