//! Generates a macOS `AppIcon.appiconset` (twelve PNGs plus `Contents.json`)
//! from a single source image.

pub mod config;
pub mod error;
pub mod iconset;
pub mod logger;
pub mod manifest;
pub mod models;

pub use config::Config;
pub use error::IconsetError;
pub use iconset::generate;
pub use manifest::Manifest;
pub use models::{GeneratedAsset, IconSpec, ICON_SPECS};
