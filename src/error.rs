use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconsetError {
    #[error("failed to open source image {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write manifest {}: {source}", path.display())]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}
