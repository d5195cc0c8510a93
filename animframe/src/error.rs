use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while driving an animation frame
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),

    #[error("failed to load image '{name}': {source}")]
    Image {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("the window was closed")]
    Closed,
}

pub type Result<T, E = FrameError> = std::result::Result<T, E>;
