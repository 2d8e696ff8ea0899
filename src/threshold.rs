//! Grayscale → 1-bit quantisation.
//!
//! `bit = sample < T`: darker pixels become `1` (ink), samples equal to the
//! threshold become `0`.
use crate::image::{GrayImageU8, ImageU8, ImageView};
use serde::Deserialize;

/// Intensity cutoff in `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Threshold(pub u8);

impl Default for Threshold {
    fn default() -> Self {
        Self(150)
    }
}

impl Threshold {
    #[inline]
    pub fn is_ink(self, sample: u8) -> bool {
        sample < self.0
    }
}

/// Row-major `W × H` grid of bits; `true` is ink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl BitGrid {
    /// Build from row-major bits; `None` if the length is not `width * height`.
    pub fn from_bits(width: usize, height: usize, bits: Vec<bool>) -> Option<Self> {
        (bits.len() == width * height).then_some(Self {
            width,
            height,
            bits,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.bits[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.bits.chunks_exact(self.width.max(1)).take(self.height)
    }

    /// Number of `1` bits.
    pub fn ink_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Render as a gray image: ink black, background white.
    pub fn to_preview(&self) -> GrayImageU8 {
        GrayImageU8::from_fn(self.width, self.height, |x, y| {
            if self.get(x, y) {
                0
            } else {
                255
            }
        })
    }
}

/// Quantise every sample of `gray` against `t`.
pub fn threshold(gray: ImageU8<'_>, t: Threshold) -> BitGrid {
    let bits = gray
        .rows()
        .flat_map(|row| row.iter().map(move |&s| t.is_ink(s)))
        .collect();
    BitGrid {
        width: gray.w,
        height: gray.h,
        bits,
    }
}
