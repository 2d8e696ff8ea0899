//! I/O helpers for source images, grayscale buffers and JSON.
//!
//! - `load_source_image`: read a PNG/JPEG/etc. into an owned RGB8 buffer.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageU8, SourceImage};
use crate::error::DecodeError;
use image::{DynamicImage, ImageBuffer, ImageError, ImageReader, Luma};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    ///
    /// Panics if `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height, "gray buffer size mismatch");
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Build by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Row-major samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert it to interleaved 8-bit RGB.
pub fn load_source_image(path: &Path) -> Result<SourceImage, DecodeError> {
    let decode_err = |e| DecodeError::from_image_error(path, e);
    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;
    debug!(
        "load_source_image path={} w={} h={} color={:?}",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(SourceImage::from_rgb_image(img.into_rgb8()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = buffer.data.clone();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.width as u32, buffer.height as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
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

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.png");
        let err = load_source_image(&path).expect_err("missing file must fail");
        assert!(matches!(err, DecodeError::NotFound { .. }), "got {err:?}");
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn garbage_bytes_are_a_format_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("junk.png");
        fs::write(&path, b"definitely not a png").expect("write junk");
        let err = load_source_image(&path).expect_err("junk must fail");
        assert!(matches!(err, DecodeError::Format { .. }), "got {err:?}");
    }

    #[test]
    fn format_is_sniffed_from_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let png = dir.path().join("icon.png");
        let gray = GrayImageU8::from_fn(2, 2, |x, _| if x == 0 { 0 } else { 255 });
        save_grayscale_u8(&gray, &png).expect("save gray");
        let renamed = dir.path().join("icon.bin");
        fs::rename(&png, &renamed).expect("rename");

        let src = load_source_image(&renamed).expect("load by content");
        assert_eq!(src.rgb(1, 1), [255, 255, 255]);
    }

    #[test]
    fn alpha_is_dropped_on_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rgba.png");
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 255]));
        img.save(&path).expect("save png");

        let src = load_source_image(&path).expect("load png");
        assert_eq!((src.width(), src.height()), (2, 1));
        assert_eq!(src.rgb(0, 0), [10, 20, 30]);
        assert_eq!(src.rgb(1, 0), [200, 100, 50]);
    }

    #[test]
    fn grayscale_png_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/gray.png");
        let gray = GrayImageU8::from_fn(3, 2, |x, y| (x * 40 + y * 100) as u8);
        save_grayscale_u8(&gray, &path).expect("save gray");

        let src = load_source_image(&path).expect("load gray");
        assert_eq!(src.rgb(2, 1), [180, 180, 180]);
    }
}
