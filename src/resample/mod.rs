//! Separable convolution resampling of 8-bit grayscale images.
//!
//! Design
//! - Each axis gets a table of source windows and fixed-point weights
//!   ([`AxisCoeffs`]); output sample `i` is centred at `(i + 0.5) · in/out`.
//! - On downscale the kernel support grows with the scale factor, so the
//!   filter also acts as an anti-aliasing low-pass.
//! - Horizontal pass first, then vertical; 8-bit clamped intermediate.
//! - Weights carry 22 fractional bits and are normalised per output sample,
//!   which keeps flat regions exactly flat.
pub mod coeffs;
pub mod filters;
pub mod options;
pub mod resize;

pub use self::coeffs::AxisCoeffs;
pub use self::filters::{Bicubic, Bilinear, BoxFilter, FilterKind, ResampleFilter, BICUBIC};
pub use self::options::TargetSize;
pub use self::resize::resize;
