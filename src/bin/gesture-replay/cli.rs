use clap::{Parser, command};

// Some defaults; some of which can be overriden via CLI args
const CONFIG_FILE_PATH: &str = "./scene.json";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load the scene (display size, draggable objects) config
    #[arg(long="sceneConfigPath",default_value_t=String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    /// Recorded hand landmark frames to replay (.json, .msgpack or .mp)
    #[arg(long = "recording")]
    pub recording: String,

    /// Write one JSON frame result per line to this file, instead of stdout
    #[arg(long = "output")]
    pub output: Option<String>,

    /// Override the display width (px) from the scene config
    #[arg(long = "display.width", value_parser = clap::value_parser!(u32).range(1..))]
    pub display_width: Option<u32>,

    /// Override the display height (px) from the scene config
    #[arg(long = "display.height", value_parser = clap::value_parser!(u32).range(1..))]
    pub display_height: Option<u32>,

    /// Save the effective scene config (including overrides) back to sceneConfigPath
    #[arg(long = "saveConfig")]
    pub save_config: bool,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,
}
