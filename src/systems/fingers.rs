//! Raised/lowered classification for each finger of a hand.
//!
//! This is a 2D heuristic which assumes the hand is held roughly upright, facing
//! a mirrored camera feed. It does not use depth, so a finger pointing sideways
//! or towards the camera will often be misclassified; that is a known limitation
//! rather than something to correct here.

use serde::{Deserialize, Serialize};

use crate::hand::{
    Hand, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP,
    RING_TIP, THUMB_MCP, THUMB_TIP, WRIST,
};

/// (tip, lower joint) landmark pairs for the four non-thumb fingers
const FINGER_TIPS_AND_JOINTS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    pub fn all_raised() -> Self {
        FingerStates {
            thumb: true,
            index: true,
            middle: true,
            ring: true,
            pinky: true,
        }
    }

    /// Thumb first, then index, middle, ring, pinky
    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }

    pub fn from_array(states: [bool; 5]) -> Self {
        let [thumb, index, middle, ring, pinky] = states;
        FingerStates {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }

    pub fn raised_count(&self) -> usize {
        self.as_array().iter().filter(|raised| **raised).count()
    }
}

pub fn analyse_fingers(hand: &Hand) -> FingerStates {
    let [index, middle, ring, pinky] = FINGER_TIPS_AND_JOINTS
        .map(|(tip, joint)| hand.landmark(tip).y < hand.landmark(joint).y);

    FingerStates {
        thumb: thumb_is_raised(hand),
        index,
        middle,
        ring,
        pinky,
    }
}

/// The thumb extends sideways, so compare horizontally: raised if the tip is beyond
/// its own lower joint, on the far side of the wrist.
fn thumb_is_raised(hand: &Hand) -> bool {
    let tip_x = hand.landmark(THUMB_TIP).x;
    let joint_x = hand.landmark(THUMB_MCP).x;
    let wrist_x = hand.landmark(WRIST).x;

    (tip_x < wrist_x && tip_x < joint_x) || (tip_x > wrist_x && tip_x > joint_x)
}

pub fn count_raised_fingers(hand: &Hand) -> usize {
    analyse_fingers(hand).raised_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{LANDMARK_COUNT, Landmark};

    fn hand_with(changes: &[(usize, f32, f32)]) -> Hand {
        let mut hand = Hand::new([Landmark::new(0.5, 0.5); LANDMARK_COUNT]);
        for (i, x, y) in changes {
            hand.landmarks[*i] = Landmark::new(*x, *y);
        }
        hand
    }

    #[test]
    fn test_fingers_above_joints_are_raised() {
        let hand = hand_with(&[
            (INDEX_TIP, 0.4, 0.2),
            (INDEX_PIP, 0.4, 0.3),
            (MIDDLE_TIP, 0.5, 0.15),
            (MIDDLE_PIP, 0.5, 0.3),
            (RING_TIP, 0.6, 0.2),
            (RING_PIP, 0.6, 0.3),
            (PINKY_TIP, 0.7, 0.25),
            (PINKY_PIP, 0.7, 0.3),
        ]);
        let states = analyse_fingers(&hand);
        assert!(states.index && states.middle && states.ring && states.pinky);
        assert!(!states.thumb);
        assert_eq!(count_raised_fingers(&hand), 4);
    }

    #[test]
    fn test_fingers_below_joints_are_lowered() {
        let hand = hand_with(&[
            (INDEX_TIP, 0.4, 0.4),
            (INDEX_PIP, 0.4, 0.3),
            (MIDDLE_TIP, 0.5, 0.35),
            (MIDDLE_PIP, 0.5, 0.3),
            (RING_TIP, 0.6, 0.31),
            (RING_PIP, 0.6, 0.3),
            (PINKY_TIP, 0.7, 0.9),
            (PINKY_PIP, 0.7, 0.3),
        ]);
        assert_eq!(analyse_fingers(&hand), FingerStates::default());
        assert_eq!(count_raised_fingers(&hand), 0);
    }

    #[test]
    fn test_tip_level_with_joint_is_lowered() {
        let hand = hand_with(&[(MIDDLE_TIP, 0.5, 0.3), (MIDDLE_PIP, 0.5, 0.3)]);
        assert!(!analyse_fingers(&hand).middle);
    }

    #[test]
    fn test_thumb_extended_beyond_joint() {
        let hand = hand_with(&[
            (WRIST, 0.5, 0.8),
            (THUMB_MCP, 0.45, 0.7),
            (THUMB_TIP, 0.3, 0.6),
        ]);
        assert!(analyse_fingers(&hand).thumb);

        // Same on the other side of the wrist
        let hand = hand_with(&[
            (WRIST, 0.5, 0.8),
            (THUMB_MCP, 0.55, 0.7),
            (THUMB_TIP, 0.7, 0.6),
        ]);
        assert!(analyse_fingers(&hand).thumb);
    }

    #[test]
    fn test_thumb_tucked_between_wrist_and_joint() {
        let hand = hand_with(&[
            (WRIST, 0.5, 0.8),
            (THUMB_MCP, 0.45, 0.7),
            (THUMB_TIP, 0.47, 0.6),
        ]);
        assert!(!analyse_fingers(&hand).thumb);
    }

    #[test]
    fn test_states_array_round_trip() {
        let states = FingerStates::from_array([true, false, true, false, true]);
        assert_eq!(states.as_array(), [true, false, true, false, true]);
        assert_eq!(states.raised_count(), 3);
        assert_eq!(FingerStates::all_raised().raised_count(), 5);
    }
}
