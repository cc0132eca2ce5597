use crate::{PixelPoint, geometry_utils::pixel_distance};

/// True if the control point lies strictly inside the capture radius around the anchor.
/// The capture radius is independent of the actual extent of the shape being grabbed.
pub fn is_grabbing(control_point: &PixelPoint, anchor: &PixelPoint, capture_radius: f32) -> bool {
    pixel_distance(control_point, anchor) < capture_radius
}
