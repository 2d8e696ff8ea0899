//! Decoded input image prior to any normalisation.
//!
//! Whatever the on-disk colour type, the loader hands back interleaved 8-bit
//! RGB. Alpha is discarded, gray and palette images are expanded, and 16-bit
//! samples are reduced by the decoder.

/// Owned interleaved RGB8 buffer with its intrinsic dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl SourceImage {
    /// Wrap `width × height × 3` interleaved RGB bytes.
    pub fn from_rgb(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == width * height * 3).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Build from single-channel samples by replicating each into R, G and B.
    pub fn from_gray(width: usize, height: usize, gray: &[u8]) -> Option<Self> {
        if gray.len() != width * height {
            return None;
        }
        let data = gray.iter().flat_map(|&v| [v, v, v]).collect();
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub(crate) fn from_rgb_image(img: image::RgbImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// RGB triple at (x, y).
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Interleaved pixels, one `[r, g, b]` chunk per pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }
}
