pub mod dragging;
pub mod fingers;
pub mod grab;

use dragging::DraggableObject;
use fingers::analyse_fingers;
use indexmap::IndexMap;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::{PixelPoint, hand::Hand, scene_config::SceneConfig};

/// Objects keyed by name; iteration order is the (fixed) grab evaluation order
pub type ObjectMap = IndexMap<String, DraggableObject>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HandResult {
    pub fingers_raised: usize,
    pub control_point: PixelPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grabbed: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameResult {
    pub total_fingers: usize,
    pub hands: Vec<HandResult>,
    pub objects: ObjectMap,
}

/// Owns the draggable objects for the whole session, and applies every frame
/// of hands to them
pub struct GestureSystem {
    objects: ObjectMap,
    display_width: u32,
    display_height: u32,
}

impl GestureSystem {
    pub fn new(config: &SceneConfig) -> GestureSystem {
        info!(
            "Gesture system with {} objects ({}) on a {}x{} display",
            config.objects.len(),
            config
                .objects
                .keys()
                .map(String::as_str)
                .collect::<Vec<&str>>()
                .join(" -> "),
            config.display_width,
            config.display_height
        );
        GestureSystem {
            objects: config.objects.clone(),
            display_width: config.display_width,
            display_height: config.display_height,
        }
    }

    /// Count fingers and drag objects for one frame's worth of hands (possibly none).
    ///
    /// Each hand grabs at most one object: the first, in evaluation order, which is
    /// within its capture radius. Where several hands grab the same object, the last
    /// hand wins.
    pub fn process_frame(&mut self, hands: &[Hand]) -> FrameResult {
        let mut total_fingers = 0;
        let mut hand_results = Vec::with_capacity(hands.len());

        for hand in hands {
            let fingers = analyse_fingers(hand);
            let fingers_raised = fingers.raised_count();
            total_fingers += fingers_raised;

            let control_point = hand.control_point(self.display_width, self.display_height);
            trace!("Hand fingers {:?}, control point {:?}", fingers, control_point);

            let grabbed = self
                .objects
                .iter_mut()
                .find_map(|(name, object)| object.try_drag(&control_point).then(|| name.clone()));

            if let Some(name) = &grabbed {
                debug!("Hand at {:?} grabbed {}", control_point, name);
            }

            hand_results.push(HandResult {
                fingers_raised,
                control_point,
                grabbed,
            });
        }

        FrameResult {
            total_fingers,
            hands: hand_results,
            objects: self.objects.clone(),
        }
    }

    pub fn objects(&self) -> &ObjectMap {
        &self.objects
    }

    pub fn display_size(&self) -> (u32, u32) {
        (self.display_width, self.display_height)
    }
}
