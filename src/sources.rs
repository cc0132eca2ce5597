//! Stand-ins for the camera + pose model: anything which yields, frame by frame,
//! the hands detected in that frame.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::{debug, info, trace};

use crate::{
    Point2D,
    hand::HandFrame,
    simulation::simulated_hand,
    systems::fingers::FingerStates,
};

pub trait HandSource {
    /// Hands for the next frame (possibly none), or `None` once the stream has
    /// ended and the frame loop should stop
    fn next_frame(&mut self) -> Option<HandFrame>;
}

/// Replays landmark frames previously extracted by a pose model.
///
/// Recordings are a list of frames, each a list of hands, stored either as JSON
/// (`.json`) or MessagePack (`.msgpack` / `.mp`).
pub struct ReplaySource {
    frames: std::vec::IntoIter<HandFrame>,
    min_detection_confidence: f32,
    frames_read: usize,
}

impl ReplaySource {
    pub fn new(frames: Vec<HandFrame>, min_detection_confidence: f32) -> Self {
        ReplaySource {
            frames: frames.into_iter(),
            min_detection_confidence,
            frames_read: 0,
        }
    }

    pub fn load(recording_path: &str, min_detection_confidence: f32) -> Result<Self> {
        let frames = load_recording(recording_path)?;
        info!(
            "Loaded {} frames from recording \"{}\"",
            frames.len(),
            recording_path
        );
        Ok(ReplaySource::new(frames, min_detection_confidence))
    }

    pub fn frames_read(&self) -> usize {
        self.frames_read
    }

    pub fn frames_remaining(&self) -> usize {
        self.frames.len()
    }
}

impl HandSource for ReplaySource {
    fn next_frame(&mut self) -> Option<HandFrame> {
        let mut hands = self.frames.next()?;
        self.frames_read += 1;

        let detected = hands.len();
        // Hands without a score were already accepted by whatever recorded them
        hands.retain(|h| h.score.is_none_or(|s| s >= self.min_detection_confidence));
        if hands.len() < detected {
            trace!(
                "Frame {}: dropped {} hand(s) below detection confidence {}",
                self.frames_read,
                detected - hands.len(),
                self.min_detection_confidence
            );
        }
        Some(hands)
    }
}

pub fn load_recording(recording_path: &str) -> Result<Vec<HandFrame>> {
    let extension = Path::new(recording_path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => {
            let text = std::fs::read_to_string(recording_path)
                .with_context(|| format!("Failed to read recording {}", recording_path))?;
            serde_json::from_str::<Vec<HandFrame>>(&text)
                .with_context(|| format!("Failed to parse JSON recording {}", recording_path))
        }
        Some("msgpack") | Some("mp") => {
            let bytes = std::fs::read(recording_path)
                .with_context(|| format!("Failed to read recording {}", recording_path))?;
            rmp_serde::from_slice::<Vec<HandFrame>>(&bytes).with_context(|| {
                format!("Failed to decode MessagePack recording {}", recording_path)
            })
        }
        _ => Err(anyhow!(
            "Unrecognised recording format for \"{}\"; expected .json, .msgpack or .mp",
            recording_path
        )),
    }
}

/// A single simulated hand which follows a pointer (mouse), with fingers toggled
/// on and off by the user. Never reaches end-of-stream.
pub struct PointerHandSource {
    pointer: Option<Point2D>,
    fingers: FingerStates,
}

impl PointerHandSource {
    pub fn new() -> Self {
        PointerHandSource {
            pointer: None,
            fingers: FingerStates {
                index: true,
                ..Default::default()
            },
        }
    }

    /// Normalised pointer position, or `None` if the pointer is outside the display
    /// (in which case no hand is "detected")
    pub fn set_pointer(&mut self, pointer: Option<Point2D>) {
        self.pointer = pointer;
    }

    /// Toggle a finger, numbered from 0 (thumb) to 4 (pinky)
    pub fn toggle_finger(&mut self, finger: usize) {
        let mut states = self.fingers.as_array();
        if let Some(raised) = states.get_mut(finger) {
            *raised = !*raised;
            self.fingers = FingerStates::from_array(states);
            debug!("Simulated fingers now {:?}", self.fingers);
        }
    }

    pub fn fingers(&self) -> FingerStates {
        self.fingers
    }
}

impl Default for PointerHandSource {
    fn default() -> Self {
        PointerHandSource::new()
    }
}

impl HandSource for PointerHandSource {
    fn next_frame(&mut self) -> Option<HandFrame> {
        Some(
            self.pointer
                .map(|p| vec![simulated_hand(p, &self.fingers)])
                .unwrap_or_default(),
        )
    }
}
