use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::IconsetError;
use crate::models::IconSpec;

pub const MANIFEST_FILENAME: &str = "Contents.json";

/// `Contents.json` of an asset catalog icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub size: String,
    pub idiom: String,
    pub scale: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".to_string(),
        }
    }
}

impl From<&IconSpec> for ManifestImage {
    fn from(spec: &IconSpec) -> Self {
        Self {
            size: spec.size_label(),
            idiom: spec.idiom.to_string(),
            scale: spec.scale_label(),
            filename: spec.filename(),
        }
    }
}

impl Manifest {
    pub fn from_specs(specs: &[IconSpec]) -> Self {
        Self {
            images: specs.iter().map(ManifestImage::from).collect(),
            info: ManifestInfo::default(),
        }
    }

    /// Pretty JSON with two-space indentation and no trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Writes `Contents.json` into `out_dir`, replacing any existing file.
    pub fn write_to(&self, out_dir: &Path) -> Result<PathBuf, IconsetError> {
        let path = out_dir.join(MANIFEST_FILENAME);
        let json = self.to_json()?;
        fs::write(&path, json).map_err(|source| IconsetError::WriteManifest {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ICON_SPECS;

    #[test]
    fn test_manifest_entries_follow_spec_order() {
        let manifest = Manifest::from_specs(&ICON_SPECS);
        assert_eq!(manifest.images.len(), 12);
        for (image, spec) in manifest.images.iter().zip(ICON_SPECS.iter()) {
            assert_eq!(image.filename, spec.filename());
            assert_eq!(image.idiom, "macOS");
        }
        assert_eq!(manifest.images[1].size, "16x16");
        assert_eq!(manifest.images[1].scale, "2x");
        let expected_info = ManifestInfo {
            version: 1,
            author: "xcode".into(),
        };
        assert_eq!(manifest.info, expected_info);
    }

    #[test]
    fn test_json_layout() {
        let manifest = Manifest::from_specs(&ICON_SPECS[..1]);
        let expected = r#"{
  "images": [
    {
      "size": "16x16",
      "idiom": "macOS",
      "scale": "1x",
      "filename": "icon_16x16@1x.png"
    }
  ],
  "info": {
    "version": 1,
    "author": "xcode"
  }
}"#;
        assert_eq!(manifest.to_json().unwrap(), expected);
    }

    #[test]
    fn test_write_to_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "stale").unwrap();
        let manifest = Manifest::from_specs(&ICON_SPECS);
        let path = manifest.write_to(dir.path()).unwrap();
        let parsed: Manifest = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Manifest::from_specs(&ICON_SPECS).write_to(&missing).unwrap_err();
        assert!(matches!(err, IconsetError::WriteManifest { .. }));
    }
}
