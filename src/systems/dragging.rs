use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    PixelPoint,
    geometry_utils::{box_centre, pixel_centroid},
};

use super::grab::is_grabbing;

/// Geometry of a draggable object, in display pixels
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    Circle {
        centre: PixelPoint,
        radius: i32,
    },
    Triangle {
        vertices: [PixelPoint; 3],
    },
    Rectangle {
        #[serde(rename = "topLeft")]
        top_left: PixelPoint,
        width: i32,
        height: i32,
    },
}

impl Shape {
    /// The point which follows the control point while grabbed: the centre
    /// of the circle, centroid of the triangle, or centre of the rectangle.
    pub fn anchor(&self) -> PixelPoint {
        match self {
            Shape::Circle { centre, .. } => *centre,
            // Never empty, so the fallback is unreachable
            Shape::Triangle { vertices } => pixel_centroid(vertices).unwrap_or(vertices[0]),
            Shape::Rectangle {
                top_left,
                width,
                height,
            } => box_centre(*top_left, *width, *height),
        }
    }

    /// Reposition so that the anchor lands on `target`. Size and shape are
    /// untouched; the result is not clamped to the display.
    pub fn move_anchor_to(&mut self, target: PixelPoint) {
        let (tx, ty) = target;
        match self {
            Shape::Circle { centre, .. } => {
                *centre = target;
            }
            Shape::Triangle { .. } => {
                let (ax, ay) = self.anchor();
                self.translate((tx - ax, ty - ay));
            }
            Shape::Rectangle {
                top_left,
                width,
                height,
            } => {
                *top_left = (tx - width.div_euclid(2), ty - height.div_euclid(2));
            }
        }
    }

    pub fn translate(&mut self, delta: PixelPoint) {
        let (dx, dy) = delta;
        match self {
            Shape::Circle { centre, .. } => {
                *centre = (centre.0 + dx, centre.1 + dy);
            }
            Shape::Triangle { vertices } => {
                for (x, y) in vertices.iter_mut() {
                    *x += dx;
                    *y += dy;
                }
            }
            Shape::Rectangle { top_left, .. } => {
                *top_left = (top_left.0 + dx, top_left.1 + dy);
            }
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Triangle { .. } => "triangle",
            Shape::Rectangle { .. } => "rectangle",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraggableObject {
    pub shape: Shape,
    /// How close (in pixels) the control point must come to the anchor to grab
    pub capture_radius: f32,
    /// Only used for rendering, as a hex string such as "#00ff00"
    pub colour: String,
}

impl DraggableObject {
    pub fn new(shape: Shape, capture_radius: f32, colour: &str) -> Self {
        DraggableObject {
            shape,
            capture_radius,
            colour: String::from(colour),
        }
    }

    pub fn anchor(&self) -> PixelPoint {
        self.shape.anchor()
    }

    pub fn is_grabbed_by(&self, control_point: &PixelPoint) -> bool {
        is_grabbing(control_point, &self.anchor(), self.capture_radius)
    }

    /// If the control point is within reach, move the object onto it and return true;
    /// otherwise leave it exactly where it was
    pub fn try_drag(&mut self, control_point: &PixelPoint) -> bool {
        if self.is_grabbed_by(control_point) {
            debug!(
                "Drag {} anchor {:?} -> {:?}",
                self.shape.kind_name(),
                self.anchor(),
                control_point
            );
            self.shape.move_anchor_to(*control_point);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry_utils::pixel_distance;

    fn triangle() -> DraggableObject {
        DraggableObject::new(
            Shape::Triangle {
                vertices: [(400, 200), (450, 300), (350, 300)],
            },
            50.,
            "#800080",
        )
    }

    fn side_lengths(shape: &Shape) -> [f32; 3] {
        match shape {
            Shape::Triangle { vertices: [a, b, c] } => [
                pixel_distance(a, b),
                pixel_distance(b, c),
                pixel_distance(c, a),
            ],
            _ => panic!("not a triangle"),
        }
    }

    #[test]
    fn test_drag_circle_onto_control_point() {
        let mut circle = DraggableObject::new(
            Shape::Circle {
                centre: (300, 300),
                radius: 50,
            },
            50.,
            "#00ff00",
        );
        assert!(circle.try_drag(&(320, 310)));
        assert_eq!(
            circle.shape,
            Shape::Circle {
                centre: (320, 310),
                radius: 50
            }
        );
    }

    #[test]
    fn test_circle_out_of_reach_is_unchanged() {
        let mut circle = DraggableObject::new(
            Shape::Circle {
                centre: (300, 300),
                radius: 50,
            },
            50.,
            "#00ff00",
        );
        let before = circle.clone();
        assert!(!circle.try_drag(&(350, 300)));
        assert_eq!(circle, before);
    }

    #[test]
    fn test_triangle_anchor_is_floored_centroid() {
        assert_eq!(triangle().anchor(), (400, 266));
    }

    #[test]
    fn test_drag_triangle_translates_vertices() {
        let mut t = triangle();
        let before = side_lengths(&t.shape);

        assert!(t.try_drag(&(410, 261)));
        assert_eq!(
            t.shape,
            Shape::Triangle {
                vertices: [(410, 195), (460, 295), (360, 295)]
            }
        );

        let after = side_lengths(&t.shape);
        for (b, a) in before.iter().zip(after.iter()) {
            assert!((b - a).abs() < 1e-4);
        }
    }

    #[test]
    fn test_translate_by_delta() {
        let mut shape = triangle().shape;
        shape.translate((10, -5));
        assert_eq!(
            shape,
            Shape::Triangle {
                vertices: [(410, 195), (460, 295), (360, 295)]
            }
        );
    }

    #[test]
    fn test_drag_rectangle_recentres() {
        let mut rect = DraggableObject::new(
            Shape::Rectangle {
                top_left: (500, 200),
                width: 100,
                height: 50,
            },
            50.,
            "#00008b",
        );
        assert_eq!(rect.anchor(), (550, 225));
        assert!(rect.try_drag(&(530, 240)));
        assert_eq!(
            rect.shape,
            Shape::Rectangle {
                top_left: (480, 215),
                width: 100,
                height: 50
            }
        );
        assert_eq!(rect.anchor(), (530, 240));
    }

    #[test]
    fn test_drag_past_display_edge_is_not_clamped() {
        let mut rect = DraggableObject::new(
            Shape::Rectangle {
                top_left: (-40, -20),
                width: 100,
                height: 50,
            },
            50.,
            "#00008b",
        );
        assert!(rect.try_drag(&(-5, 0)));
        assert_eq!(rect.anchor(), (-5, 0));
        assert_eq!(
            rect.shape,
            Shape::Rectangle {
                top_left: (-55, -25),
                width: 100,
                height: 50
            }
        );
    }

    #[test]
    fn test_shape_config_format() {
        let json = r#"{"kind":"rectangle","topLeft":[1,2],"width":3,"height":4}"#;
        let shape: Shape = serde_json::from_str(json).expect("shape should parse");
        assert_eq!(
            shape,
            Shape::Rectangle {
                top_left: (1, 2),
                width: 3,
                height: 4
            }
        );
    }
}
