use clap::{Parser, command};

const CONFIG_FILE_PATH: &str = "./scene.json";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load the scene (display size, draggable objects) config
    #[arg(long="sceneConfigPath",default_value_t=String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    /// Replay recorded hand landmark frames instead of simulating a hand at the
    /// mouse pointer; the window closes when the recording ends
    #[arg(long = "recording")]
    pub recording: Option<String>,

    /// Override the display width (px) from the scene config
    #[arg(long = "display.width", value_parser = clap::value_parser!(u32).range(1..))]
    pub display_width: Option<u32>,

    /// Override the display height (px) from the scene config
    #[arg(long = "display.height", value_parser = clap::value_parser!(u32).range(1..))]
    pub display_height: Option<u32>,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,
}
