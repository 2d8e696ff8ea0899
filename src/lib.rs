#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod image;
pub mod normalize;
pub mod pipeline;
pub mod resample;
pub mod threshold;

// --- High-level re-exports -------------------------------------------------

pub use crate::emit::{BitOrder, Declaration, DeclarationOptions};
pub use crate::error::DecodeError;
pub use crate::pipeline::{BitmapConverter, Conversion, ConversionParams};
pub use crate::resample::TargetSize;
pub use crate::threshold::{BitGrid, Threshold};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use hdl_bitmap::prelude::*;
///
/// let src = SourceImage::from_gray(2, 2, &[0, 255, 255, 0]).unwrap();
/// let converter = BitmapConverter::new(ConversionParams {
///     size: TargetSize::new(2, 2).unwrap(),
///     ..Default::default()
/// });
/// let out = converter.convert_image(&src);
/// assert_eq!(out.declaration.lines()[2], "  \"10\",");
/// ```
pub mod prelude {
    pub use crate::image::SourceImage;
    pub use crate::{BitmapConverter, ConversionParams, Declaration, TargetSize, Threshold};
}
