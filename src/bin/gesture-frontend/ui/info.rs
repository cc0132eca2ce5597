use egui::{Grid, RichText, Ui};

use crate::model::{HandInput, Model};

pub fn render_info(model: &mut Model, ui: &mut Ui) {
    ui.heading("Fingers");
    let total = model
        .last_result
        .as_ref()
        .map(|r| r.total_fingers)
        .unwrap_or_default();
    ui.label(RichText::new(format!("{}", total)).size(48.0).strong());

    if let HandInput::Pointer(source) = &model.input {
        let states = source.fingers();
        ui.horizontal(|ui| {
            for (name, raised) in ["T", "I", "M", "R", "P"].iter().zip(states.as_array()) {
                ui.label(if raised {
                    RichText::new(*name).strong()
                } else {
                    RichText::new(*name).weak()
                });
            }
        });
    }

    if let HandInput::Replay(source) = &model.input {
        ui.label(format!(
            "Frame {} ({} left)",
            source.frames_read(),
            source.frames_remaining()
        ));
    }

    ui.separator();
    ui.heading("Hands");
    Grid::new("hands_grid").show(ui, |ui| {
        if let Some(result) = &model.last_result {
            for (i, hand) in result.hands.iter().enumerate() {
                ui.label(format!("{}:", i));
                ui.label(format!("{} up", hand.fingers_raised));
                ui.label(hand.grabbed.as_deref().unwrap_or("-"));
                ui.end_row();
            }
        }
    });

    ui.separator();
    ui.heading("Objects");
    Grid::new("objects_grid").show(ui, |ui| {
        for (name, object) in model.system.objects() {
            let (x, y) = object.anchor();
            ui.label(name.as_str());
            ui.label(object.shape.kind_name());
            ui.label(format!("({}, {})", x, y));
            ui.end_row();
        }
    });
}
