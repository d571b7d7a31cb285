//! PNG output and the generation manifest.

use std::fs;
use std::path::Path;

use image::buffer::ConvertBuffer;
use image::{RgbImage, RgbaImage};
use serde::Serialize;

use crate::error::{OgError, Result};

/// Write a composed image to a PNG file.
///
/// The pipeline works in RGBA but every finished page is opaque, so the
/// alpha channel is dropped on the way out.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let rgb: RgbImage = img.convert();
    rgb.save(path).map_err(|e| OgError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;
    Ok(())
}

/// One generated image in the manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub name: String,
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// Write `manifest.json` describing the generated images.
pub fn write_manifest(entries: &[ManifestEntry], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(|e| OgError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to encode manifest: {}", e),
    })?;

    fs::write(path, json).map_err(|e| OgError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    Ok(())
}
