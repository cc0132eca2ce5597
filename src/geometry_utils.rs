use crate::{PixelPoint, Point2D};

pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    ((x2 - x1).powf(2.0) + (y2 - y1).powf(2.0)).sqrt()
}

pub fn distance_points(a: &Point2D, b: &Point2D) -> f32 {
    let (x1, y1) = *a;
    let (x2, y2) = *b;

    f32::sqrt(f32::powi(x1 - x2, 2) + f32::powi(y1 - y2, 2))
}

/// Euclidean distance between two display (pixel) coordinates
pub fn pixel_distance(a: &PixelPoint, b: &PixelPoint) -> f32 {
    let (x1, y1) = *a;
    let (x2, y2) = *b;
    distance(x1 as f32, y1 as f32, x2 as f32, y2 as f32)
}

pub fn centroid(points: &[Point2D]) -> Option<Point2D> {
    let count = points.len();
    points
        .iter()
        .cloned()
        .reduce(|acc, el| (acc.0 + el.0, acc.1 + el.1))
        .map(|(x, y)| (x / count as f32, y / count as f32))
}

/// Integer mean of some pixel coordinates, rounding towards negative infinity
/// (so that shapes dragged off the top/left of the display keep a stable anchor).
pub fn pixel_centroid(points: &[PixelPoint]) -> Option<PixelPoint> {
    let count = points.len() as i32;
    points
        .iter()
        .cloned()
        .reduce(|acc, el| (acc.0 + el.0, acc.1 + el.1))
        .map(|(x, y)| (x.div_euclid(count), y.div_euclid(count)))
}

/// Centre of an axis-aligned box given its top-left corner and size, with
/// the same floor rounding as [`pixel_centroid`]
pub fn box_centre(top_left: PixelPoint, width: i32, height: i32) -> PixelPoint {
    let (x, y) = top_left;
    (x + width.div_euclid(2), y + height.div_euclid(2))
}
