/// Idiom tag written into every manifest entry.
pub const MACOS_IDIOM: &str = "macOS";

/// One required output image: a nominal point size rendered at a scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub base_size: u32,
    pub scale: u32,
    pub idiom: &'static str,
}

impl IconSpec {
    pub const fn new(base_size: u32, scale: u32) -> Self {
        Self {
            base_size,
            scale,
            idiom: MACOS_IDIOM,
        }
    }

    /// Edge length in pixels of the rendered square.
    pub fn pixel_size(&self) -> u32 {
        self.base_size * self.scale
    }

    /// Naming convention: icon_[size]x[size]@[scale]x.png
    pub fn filename(&self) -> String {
        format!("icon_{0}x{0}@{1}x.png", self.base_size, self.scale)
    }

    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.base_size)
    }

    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}

// Order matters: the manifest lists entries exactly in this order.
pub const ICON_SPECS: [IconSpec; 12] = [
    IconSpec::new(16, 1),
    IconSpec::new(16, 2),
    IconSpec::new(32, 1),
    IconSpec::new(32, 2),
    IconSpec::new(128, 1),
    IconSpec::new(128, 2),
    IconSpec::new(256, 1),
    IconSpec::new(256, 2),
    IconSpec::new(512, 1),
    IconSpec::new(512, 2),
    IconSpec::new(1024, 1),
    IconSpec::new(1024, 2),
];

/// A file written by the generator for one [`IconSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub spec: IconSpec,
    pub filename: String,
    pub path: std::path::PathBuf,
}
