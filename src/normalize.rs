//! Source image → fixed-resolution grayscale grid.
//!
//! Luma uses the ITU-R 601-2 weights in 16.16 fixed point, so gray inputs
//! pass through unchanged. Resampling defaults to bicubic; swapping the
//! filter changes the resulting bitmap and must be an explicit choice.
use crate::image::{GrayImageU8, SourceImage};
use crate::resample::{resize, ResampleFilter, TargetSize, BICUBIC};

/// `W × H` grid of 8-bit intensities.
pub type GrayscaleGrid = GrayImageU8;

/// Perceptual luma of one RGB pixel.
#[inline]
pub fn luma(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(u32::from);
    ((r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16) as u8
}

/// Convert to single-channel luma at the source resolution.
pub fn to_luma(src: &SourceImage) -> GrayImageU8 {
    let data = src.pixels().map(luma).collect();
    GrayImageU8::new(src.width(), src.height(), data)
}

/// Luma conversion followed by bicubic resampling to `size`.
pub fn normalize(src: &SourceImage, size: TargetSize) -> GrayscaleGrid {
    normalize_with(src, size, &BICUBIC)
}

/// As [`normalize`] with an explicit resampling filter.
pub fn normalize_with(
    src: &SourceImage,
    size: TargetSize,
    filter: &dyn ResampleFilter,
) -> GrayscaleGrid {
    let gray = to_luma(src);
    resize(gray.as_view(), size, filter)
}
