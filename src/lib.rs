pub mod geometry_utils;
pub mod hand;
pub mod scene_config;
pub mod simulation;
pub mod sources;
pub mod systems;

/// Normalised image coordinates, each in [0, 1]
pub type Point2D = (f32, f32);

/// Display pixel coordinates; may fall outside the display
pub type PixelPoint = (i32, i32);
