//! Synthetic hands, for driving the gesture system without a camera or pose model
//! (e.g. from a mouse pointer in the frontend).

use crate::{
    Point2D,
    hand::{
        Hand, INDEX_MCP, INDEX_TIP, LANDMARK_COUNT, Landmark, THUMB_CMC, THUMB_IP, THUMB_MCP,
        THUMB_TIP, WRIST,
    },
    systems::fingers::FingerStates,
};

/// Horizontal offset of each non-thumb finger's knuckle from the wrist
const FINGER_BASE_X: [f32; 4] = [-0.03, 0.0, 0.03, 0.06];

const MCP_Y: f32 = -0.10;
const PIP_Y: f32 = -0.15;
const RAISED_DIP_Y: f32 = -0.19;
const RAISED_TIP_Y: f32 = -0.23;
const LOWERED_DIP_Y: f32 = -0.13;
const LOWERED_TIP_Y: f32 = -0.11;

/// Landmark offsets from the wrist for an upright right hand in a mirrored image,
/// thumb sticking out to the left
fn pose_offsets(fingers: &FingerStates) -> [Point2D; LANDMARK_COUNT] {
    let mut offsets = [(0., 0.); LANDMARK_COUNT];

    offsets[THUMB_CMC] = (-0.04, -0.03);
    offsets[THUMB_MCP] = (-0.07, -0.06);
    if fingers.thumb {
        offsets[THUMB_IP] = (-0.09, -0.09);
        offsets[THUMB_TIP] = (-0.11, -0.11);
    } else {
        // Tucked in, between the wrist and the thumb's own joint
        offsets[THUMB_IP] = (-0.06, -0.08);
        offsets[THUMB_TIP] = (-0.05, -0.08);
    }

    let [_thumb, others @ ..] = fingers.as_array();
    for (finger, (raised, base_x)) in others.iter().zip(FINGER_BASE_X).enumerate() {
        let mcp = INDEX_MCP + finger * 4;
        let (dip_y, tip_y) = if *raised {
            (RAISED_DIP_Y, RAISED_TIP_Y)
        } else {
            (LOWERED_DIP_Y, LOWERED_TIP_Y)
        };
        offsets[mcp] = (base_x, MCP_Y);
        offsets[mcp + 1] = (base_x, PIP_Y);
        offsets[mcp + 2] = (base_x, dip_y);
        offsets[mcp + 3] = (base_x, tip_y);
    }

    offsets
}

/// Build a hand, in normalised coordinates, with its index fingertip exactly at
/// `index_tip` and the given fingers raised
pub fn simulated_hand(index_tip: Point2D, fingers: &FingerStates) -> Hand {
    let offsets = pose_offsets(fingers);
    let (tip_x, tip_y) = index_tip;
    let (off_x, off_y) = offsets[INDEX_TIP];
    let wrist = (tip_x - off_x, tip_y - off_y);

    let mut landmarks = offsets.map(|(dx, dy)| Landmark::new(wrist.0 + dx, wrist.1 + dy));
    landmarks[WRIST] = Landmark::new(wrist.0, wrist.1);
    landmarks[INDEX_TIP] = Landmark::new(tip_x, tip_y);

    Hand::new(landmarks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::fingers::analyse_fingers;

    #[test]
    fn test_every_pose_classifies_as_built() {
        for bits in 0..32u8 {
            let fingers = FingerStates::from_array(std::array::from_fn(|i| bits & (1 << i) != 0));
            let hand = simulated_hand((0.5, 0.5), &fingers);
            assert_eq!(analyse_fingers(&hand), fingers, "pose {:05b}", bits);
        }
    }

    #[test]
    fn test_index_tip_is_exact() {
        let hand = simulated_hand((0.123, 0.987), &FingerStates::default());
        assert_eq!(hand.landmark(INDEX_TIP).position(), (0.123, 0.987));
        assert_eq!(hand.score, None);
    }
}
