//! I/O helpers for RGB sources, binary masks and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned `ImageRgbF32`.
//! - `save_mask_png`: write a boolean mask to a 0/255 grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageRgbF32;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to an owned f32 RGB raster.
pub fn load_rgb_image(path: &Path) -> Result<ImageRgbF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .pixels()
        .map(|p| [p.0[0] as f32, p.0[1] as f32, p.0[2] as f32])
        .collect();
    Ok(ImageRgbF32::from_raw(width, height, data))
}

/// Save a boolean foreground mask to a grayscale PNG (foreground = 255).
pub fn save_mask_png(w: usize, h: usize, mask: &[bool], path: &Path) -> Result<(), String> {
    if mask.len() != w * h {
        return Err(format!(
            "Mask size {} does not match {}x{}",
            mask.len(),
            w,
            h
        ));
    }
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(w as u32, h as u32);
    for y in 0..h {
        for x in 0..w {
            let v = if mask[y * w + x] { 255u8 } else { 0u8 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
