//! I/O helpers for grayscale frames and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit [`Frame`].
//! - `save_frame`: write a [`Frame`] to a grayscale PNG.
//! - `save_overlay`: paint nonzero pixels of a line frame red over the input.
//! - `list_frame_files`: ordered image files of a directory, used as a frame stream.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{Frame, ImageView};
use crate::error::{Error, Result};
use image::{GrayImage, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const FRAME_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "pgm"];

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<Frame> {
    let img = image::open(path)?.into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Frame::from_raw(width, height, img.into_raw())
}

/// Save a frame to a grayscale PNG.
pub fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(frame.w as u32, frame.h as u32, frame.pixels().to_vec())
        .ok_or(Error::BufferSizeMismatch {
            expected: frame.w * frame.h,
            actual: frame.pixels().len(),
        })?;
    image.save(path)?;
    Ok(())
}

/// Save `gray` as RGB with every nonzero pixel of `lines` painted red.
pub fn save_overlay(gray: &Frame, lines: &Frame, path: &Path) -> Result<()> {
    if gray.w != lines.w || gray.h != lines.h {
        return Err(Error::BufferSizeMismatch {
            expected: gray.w * gray.h,
            actual: lines.w * lines.h,
        });
    }
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(gray.w as u32, gray.h as u32);
    for y in 0..gray.h {
        let src = gray.row(y);
        let mask = lines.row(y);
        for (x, (&g, &m)) in src.iter().zip(mask).enumerate() {
            let px = if m > 0 { Rgb([255, g, g]) } else { Rgb([g, g, g]) };
            out.put_pixel(x as u32, y as u32, px);
        }
    }
    out.save(path)?;
    Ok(())
}

/// Image files directly inside `dir`, sorted by file name.
pub fn list_frame_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_frame = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| FRAME_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if path.is_file() && is_frame {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
