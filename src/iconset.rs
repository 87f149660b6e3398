use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView, ImageError, ImageFormat};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::IconsetError;
use crate::manifest::Manifest;
use crate::models::{GeneratedAsset, IconSpec, ICON_SPECS};

/// Resizes to an exact `px` x `px` square with Lanczos3; aspect ratio is not kept.
pub fn resize_square(img: &DynamicImage, px: u32) -> DynamicImage {
    img.resize_exact(px, px, FilterType::Lanczos3)
}

/// Renders `spec` from `img` and writes it as PNG into `out_dir`.
pub fn save_icon(
    img: &DynamicImage,
    spec: &IconSpec,
    out_dir: &Path,
) -> Result<GeneratedAsset, IconsetError> {
    let px = spec.pixel_size();
    let resized = resize_square(img, px);
    let filename = spec.filename();
    let path = out_dir.join(&filename);
    resized
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| IconsetError::Save {
            path: path.clone(),
            source,
        })?;
    info!("Saved: {}", path.display());
    Ok(GeneratedAsset {
        spec: *spec,
        filename,
        path,
    })
}

/// Decodes `path`, picking the decoder from the file contents rather than the extension.
pub fn load_source(path: &Path) -> Result<DynamicImage, IconsetError> {
    let decode = || -> Result<DynamicImage, ImageError> {
        ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(ImageError::IoError)?
            .decode()
    };
    decode().map_err(|source| IconsetError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs the whole icon set generation for `config`.
///
/// The source is decoded before anything is written, so a bad source leaves the
/// output directory untouched. A failing save aborts the run; files written up to
/// that point stay on disk.
pub fn generate(config: &Config) -> Result<Vec<GeneratedAsset>, IconsetError> {
    // 1) Decode the source by its contents; the file handle is closed on return
    let img = load_source(&config.source)?;
    let (w, h) = img.dimensions();
    debug!("decoded {} ({}x{})", config.source.display(), w, h);

    let out_dir = config.output_dir.as_path();
    fs::create_dir_all(out_dir).map_err(|source| IconsetError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    // 2) One PNG per spec, in table order
    let mut assets = Vec::with_capacity(ICON_SPECS.len());
    for spec in ICON_SPECS.iter() {
        debug!("resizing to {}px for {}", spec.pixel_size(), spec.filename());
        assets.push(save_icon(&img, spec, out_dir)?);
    }

    // 3) Contents.json
    let manifest = Manifest::from_specs(&ICON_SPECS);
    let manifest_path = manifest.write_to(out_dir)?;
    debug!("manifest written to {}", manifest_path.display());
    info!("Contents.json created successfully.");

    Ok(assets)
}
