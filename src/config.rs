use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "tomato.png";
pub const DEFAULT_OUTPUT_DIR: &str = "AppIcon.appiconset";

/// Parameters of a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source raster image (anything the png/jpeg decoders accept).
    pub source: PathBuf,
    /// Icon set directory, created if missing.
    pub output_dir: PathBuf,
}

impl Config {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_OUTPUT_DIR)
    }
}
