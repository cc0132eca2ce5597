use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape as PaintShape, Stroke, Ui};

use hand_gesture_drag::{
    PixelPoint,
    hand::{HAND_CONNECTIONS, Hand, INDEX_TIP},
    systems::dragging::{DraggableObject, Shape},
};

use super::hex_to_colour32;
use crate::model::Model;

const SKELETON_COLOUR: Color32 = Color32::from_rgb(255, 255, 0);
const LANDMARK_COLOUR: Color32 = Color32::from_rgb(255, 0, 0);
const CONTROL_POINT_COLOUR: Color32 = Color32::WHITE;

pub fn render_scene(model: &mut Model, ui: &mut Ui) {
    let (width, height) = model.system.display_size();
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width as f32, height as f32), Sense::hover());
    let display = response.rect;

    let pointer = response.hover_pos().map(|p| {
        let offset = p - display.min;
        (offset.x / display.width(), offset.y / display.height())
    });

    model.step(pointer);

    painter.rect_filled(display, 0.0, Color32::from_gray(16));

    for object in model.system.objects().values() {
        draw_object(&painter, display, object, model.show_capture_radius);
    }

    for hand in model.hands.iter() {
        draw_hand(&painter, display, hand, model.landmark_size, model.show_skeletons);
    }

    if let Some(result) = &model.last_result {
        painter.text(
            display.min + egui::vec2(12.0, 8.0),
            Align2::LEFT_TOP,
            format!("Fingers: {}", result.total_fingers),
            FontId::proportional(28.0),
            Color32::WHITE,
        );
    }
}

fn to_screen(display: Rect, p: PixelPoint) -> Pos2 {
    let (x, y) = p;
    display.min + egui::vec2(x as f32, y as f32)
}

fn draw_object(painter: &Painter, display: Rect, object: &DraggableObject, show_capture: bool) {
    let colour = hex_to_colour32(&object.colour);
    match &object.shape {
        Shape::Circle { centre, radius } => {
            painter.circle_filled(to_screen(display, *centre), *radius as f32, colour);
        }
        Shape::Triangle { vertices } => {
            let points = vertices.iter().map(|v| to_screen(display, *v)).collect();
            painter.add(PaintShape::convex_polygon(
                points,
                colour,
                Stroke::new(2.0, colour),
            ));
        }
        Shape::Rectangle {
            top_left,
            width,
            height,
        } => {
            let min = to_screen(display, *top_left);
            let rect = Rect::from_min_size(min, egui::vec2(*width as f32, *height as f32));
            painter.rect_filled(rect, 0.0, colour);
        }
    }

    if show_capture {
        painter.circle_stroke(
            to_screen(display, object.anchor()),
            object.capture_radius,
            Stroke::new(1.0, Color32::from_white_alpha(96)),
        );
    }
}

fn draw_hand(painter: &Painter, display: Rect, hand: &Hand, size: f32, show_skeleton: bool) {
    let points: Vec<Pos2> = hand
        .pixel_landmarks(display.width() as u32, display.height() as u32)
        .into_iter()
        .map(|(x, y)| display.min + egui::vec2(x, y))
        .collect();

    if show_skeleton {
        for (a, b) in HAND_CONNECTIONS {
            painter.line_segment([points[a], points[b]], Stroke::new(2.0, SKELETON_COLOUR));
        }
        for p in points.iter() {
            painter.circle_filled(*p, size, LANDMARK_COLOUR);
        }
    }

    painter.circle_stroke(points[INDEX_TIP], size * 2.5, Stroke::new(2.0, CONTROL_POINT_COLOUR));
}
