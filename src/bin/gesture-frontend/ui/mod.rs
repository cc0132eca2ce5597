mod info;
mod scene;
mod vis_settings;

use colorsys::Rgb;
use egui::Color32;

use info::render_info;
use scene::render_scene;
use vis_settings::render_vis_settings;

use crate::model::Model;

pub const SPACING_AMOUNT: f32 = 16.0;
pub const SIDE_PANEL_WIDTH: f32 = 240.0;

pub fn render_ui(ctx: &egui::Context, model: &mut Model) {
    egui::SidePanel::right("stats")
        .exact_width(SIDE_PANEL_WIDTH)
        .show(ctx, |ui| {
            render_info(model, ui);
            ui.add_space(SPACING_AMOUNT);
            render_vis_settings(model, ui);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        render_scene(model, ui);
    });
}

/// Scene colours are checked on load; grey marks anything that slipped through
pub fn hex_to_colour32(hex: &str) -> Color32 {
    match Rgb::from_hex_str(hex) {
        Ok(rgb) => {
            let [r, g, b]: [u8; 3] = rgb.into();
            Color32::from_rgb(r, g, b)
        }
        Err(_) => Color32::GRAY,
    }
}
