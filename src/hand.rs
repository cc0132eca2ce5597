use map_range::MapRange;
use serde::{Deserialize, Serialize};

use crate::{PixelPoint, Point2D};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Bones, as pairs of landmark indices, for drawing skeleton overlays
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC),
    (THUMB_CMC, THUMB_MCP),
    (THUMB_MCP, THUMB_IP),
    (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP),
    (INDEX_MCP, INDEX_PIP),
    (INDEX_PIP, INDEX_DIP),
    (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP),
    (MIDDLE_MCP, MIDDLE_PIP),
    (MIDDLE_PIP, MIDDLE_DIP),
    (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP),
    (RING_MCP, RING_PIP),
    (RING_PIP, RING_DIP),
    (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP),
    (WRIST, PINKY_MCP),
    (PINKY_MCP, PINKY_PIP),
    (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

/// One keypoint, normalised to [0;1] relative to the image width/height,
/// with y increasing downwards
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Depth as reported by some pose models; never used for classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Landmark { x, y, z: None }
    }

    pub fn position(&self) -> Point2D {
        (self.x, self.y)
    }
}

/// As per MediaPipe Hands output: one detected hand, one frame
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Hand {
    pub landmarks: [Landmark; LANDMARK_COUNT],
    /// Detection confidence, if the pose model reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// All hands detected in a single frame, in the order the pose model returned them
pub type HandFrame = Vec<Hand>;

impl Hand {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Hand {
            landmarks,
            score: None,
        }
    }

    pub fn landmark(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }

    /// The index fingertip, scaled into display pixels. Truncates towards zero,
    /// same as an integer cast of `x * width`.
    pub fn control_point(&self, display_width: u32, display_height: u32) -> PixelPoint {
        let tip = self.landmark(INDEX_TIP);
        (
            tip.x.map_range(0. ..1., 0. ..display_width as f32) as i32,
            tip.y.map_range(0. ..1., 0. ..display_height as f32) as i32,
        )
    }

    pub fn pixel_landmarks(&self, display_width: u32, display_height: u32) -> Vec<Point2D> {
        self.landmarks
            .iter()
            .map(|l| (l.x * display_width as f32, l.y * display_height as f32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_hand() -> Hand {
        Hand::new([Landmark::new(0.5, 0.5); LANDMARK_COUNT])
    }

    #[test]
    fn test_control_point_scales_and_truncates() {
        let mut hand = flat_hand();
        hand.landmarks[INDEX_TIP] = Landmark::new(0.5, 0.25);
        assert_eq!(hand.control_point(640, 480), (320, 120));

        hand.landmarks[INDEX_TIP] = Landmark::new(0.9999, 0.0001);
        assert_eq!(hand.control_point(100, 100), (99, 0));
    }

    #[test]
    fn test_control_point_outside_image() {
        let mut hand = flat_hand();
        hand.landmarks[INDEX_TIP] = Landmark::new(1.5, -0.25);
        assert_eq!(hand.control_point(640, 480), (960, -120));
    }

    #[test]
    fn test_decode_requires_all_landmarks() {
        let one = r#"{"x":0.1,"y":0.2}"#;
        let full = format!(r#"{{"landmarks":[{}]}}"#, vec![one; LANDMARK_COUNT].join(","));
        let hand: Hand = serde_json::from_str(&full).expect("21 landmarks should decode");
        assert_eq!(hand.landmark(WRIST).position(), (0.1, 0.2));
        assert_eq!(hand.score, None);

        let short = format!(r#"{{"landmarks":[{}]}}"#, vec![one; 20].join(","));
        assert!(serde_json::from_str::<Hand>(&short).is_err());
    }
}
