use crate::error::{FrameError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for an animation frame. Every field has a default, so a config
/// file only needs to name what it changes.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// Width of the drawing area in pixels, not counting the toolbar
    pub width: u32,
    /// Height of the drawing area in pixels, not counting the toolbar
    pub height: u32,
    pub title: String,
    /// Start in play mode instead of waiting at the first frame
    pub autoplay: bool,
    /// Pause after the window first appears
    pub startup_delay_ms: u64,
    /// How often a waiting frame checks the window for input
    pub poll_interval_ms: u64,
    /// Pause after each frame is released
    pub step_delay_ms: u64,
    /// Directory image names are resolved against
    pub asset_dir: PathBuf,
    /// When set, every painted frame is also saved here as a PPM image
    pub record_dir: Option<PathBuf>,
}

impl Default for FrameConfig {
    fn default() -> FrameConfig {
        FrameConfig {
            width: 500,
            height: 500,
            title: String::from("AnimationFrame"),
            autoplay: false,
            startup_delay_ms: 500,
            poll_interval_ms: 15,
            step_delay_ms: 80,
            asset_dir: PathBuf::from("."),
            record_dir: None,
        }
    }
}

impl FrameConfig {
    /// Parses a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<FrameConfig> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<FrameConfig> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FrameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        FrameConfig::from_toml_str(&text)
    }

    /// A config for tests and batch rendering: autoplay with no delays
    pub fn immediate() -> FrameConfig {
        FrameConfig {
            autoplay: true,
            startup_delay_ms: 0,
            poll_interval_ms: 0,
            step_delay_ms: 0,
            ..FrameConfig::default()
        }
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}
