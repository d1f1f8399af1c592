use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StripError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Input directory not found: {}", .0.display())]
    MissingInputDir(PathBuf),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Failed to decode frame {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to write strip {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write manifest {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No frames to composite")]
    Empty,
    #[error("Strip too large: {frames} frames of {cell_w}x{cell_h}")]
    TooLarge { frames: usize, cell_w: u32, cell_h: u32 },
}

pub type Result<T> = std::result::Result<T, StripError>;
