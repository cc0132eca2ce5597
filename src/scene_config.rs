use colorsys::Rgb;
use indexmap::IndexMap;
use log::{debug, info, warn};
use std::{fs, io::ErrorKind};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::systems::{
    ObjectMap,
    dragging::{DraggableObject, Shape},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneConfig {
    /// Size (px) of the display surface which normalised landmarks are scaled onto
    pub display_width: u32,
    pub display_height: u32,

    /// Draggable objects, keyed by name. A hand only ever grabs one object per
    /// frame: the first one (in the order listed here) that is within reach.
    pub objects: ObjectMap,

    // -------- POSE MODEL SETTINGS
    /// Hands reported with a lower detection score than this are dropped by the
    /// hand source, before reaching the gesture system
    pub min_detection_confidence: f32,

    /// Passed through to live pose models which track hands between frames;
    /// recordings have already been tracked, so ignore it
    pub min_tracking_confidence: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let mut objects = IndexMap::new();
        objects.insert(
            String::from("circle"),
            DraggableObject::new(
                Shape::Circle {
                    centre: (300, 300),
                    radius: 50,
                },
                50.,
                "#00ff00",
            ),
        );
        objects.insert(
            String::from("triangle"),
            DraggableObject::new(
                Shape::Triangle {
                    vertices: [(400, 200), (450, 300), (350, 300)],
                },
                50.,
                "#800080",
            ),
        );
        objects.insert(
            String::from("rectangle"),
            DraggableObject::new(
                Shape::Rectangle {
                    top_left: (500, 200),
                    width: 100,
                    height: 50,
                },
                50.,
                "#00008b",
            ),
        );

        SceneConfig {
            display_width: 640,
            display_height: 480,
            objects,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.5,
        }
    }
}

impl SceneConfig {
    pub fn write_config_to_file(&self, config_file_path: &str) -> Result<()> {
        debug!("Current state of config: {:?}", self);
        let text = serde_json::to_string_pretty(self)?;
        fs::write(config_file_path, text)
            .with_context(|| format!("Error writing config to file {}", config_file_path))?;
        info!("Wrote config to file: {:?}", config_file_path);
        Ok(())
    }

    /// Command-line overrides for the display size, if any
    pub fn with_display_size(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        if let Some(w) = width {
            self.display_width = w;
        }
        if let Some(h) = height {
            self.display_height = h;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.display_width == 0 || self.display_height == 0 {
            return Err(anyhow!(
                "Display size must be non-zero, got {}x{}",
                self.display_width,
                self.display_height
            ));
        }
        if let Some((name, _)) = self
            .objects
            .iter()
            .find(|(_, o)| !(o.capture_radius.is_finite() && o.capture_radius > 0.))
        {
            return Err(anyhow!(
                "Object \"{}\" needs a positive capture radius",
                name
            ));
        }
        if let Some((name, o)) = self
            .objects
            .iter()
            .find(|(_, o)| Rgb::from_hex_str(&o.colour).is_err())
        {
            return Err(anyhow!(
                "Object \"{}\" has an invalid colour \"{}\"",
                name,
                o.colour
            ));
        }
        if self.objects.is_empty() {
            warn!("No draggable objects configured; only finger counts will be reported");
        }
        Ok(())
    }
}

pub fn load_config_from_file(config_file_path: &str) -> Result<SceneConfig> {
    let config = match std::fs::read_to_string(config_file_path) {
        Err(e) => {
            if e.kind() == ErrorKind::NotFound {
                warn!(
                    "Scene config file not found at {}, will use the default scene",
                    &config_file_path
                );
                SceneConfig::default()
            } else {
                return Err(anyhow!(
                    "Failed to load scene config from disk; error: {:?}",
                    e
                ));
            }
        }
        Ok(s) => {
            info!("Loaded scene config OK from \"{}\"", config_file_path);
            match serde_json::from_str::<SceneConfig>(&s) {
                Ok(loaded_config) => {
                    debug!("Config parsed data from file: {:?}", &loaded_config);
                    loaded_config
                }
                Err(e) => return Err(anyhow!("Failed to parse config data: {}", e)),
            }
        }
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_default_scene() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let config = load_config_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config, SceneConfig::default());
        let names: Vec<&String> = config.objects.keys().collect();
        assert_eq!(names, ["circle", "triangle", "rectangle"]);
    }

    #[test]
    fn test_partial_file_keeps_declared_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{
                "displayWidth": 1280,
                "objects": {{
                    "box": {{
                        "shape": {{ "kind": "rectangle", "topLeft": [0, 0], "width": 10, "height": 10 }},
                        "captureRadius": 20.0,
                        "colour": "#ffffff"
                    }},
                    "ball": {{
                        "shape": {{ "kind": "circle", "centre": [5, 5], "radius": 3 }},
                        "captureRadius": 3.0,
                        "colour": "#ff0000"
                    }}
                }}
            }}"##
        )
        .unwrap();

        let config = load_config_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.display_width, 1280);
        assert_eq!(config.display_height, 480);
        assert_eq!(config.min_detection_confidence, 0.7);
        let names: Vec<&String> = config.objects.keys().collect();
        assert_eq!(names, ["box", "ball"]);
    }

    #[test]
    fn test_bad_capture_radius_is_rejected() {
        let mut config = SceneConfig::default();
        config.objects["triangle"].capture_radius = 0.;
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        config.write_config_to_file(path).unwrap();
        assert!(load_config_from_file(path).is_err());
    }

    #[test]
    fn test_bad_colour_is_rejected() {
        let mut config = SceneConfig::default();
        config.objects["circle"].colour = String::from("green-ish");
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        config.write_config_to_file(path).unwrap();
        assert!(load_config_from_file(path).is_err());
    }

    #[test]
    fn test_unparsable_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(load_config_from_file(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_written_config_loads_back() {
        let config = SceneConfig::default().with_display_size(Some(800), None);
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        config.write_config_to_file(path).unwrap();
        assert_eq!(load_config_from_file(path).unwrap(), config);
    }
}
