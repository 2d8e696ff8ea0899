//! End-to-end conversion: decode → luma + resize → threshold → declaration.
//!
//! ```no_run
//! use hdl_bitmap::{BitmapConverter, ConversionParams};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), hdl_bitmap::DecodeError> {
//! let converter = BitmapConverter::new(ConversionParams::default());
//! let conversion = converter.convert_path(Path::new("vader.png"))?;
//! print!("{}", conversion.declaration);
//! # Ok(())
//! # }
//! ```
use crate::diagnostics::{ConversionReport, ImageDescriptor, TimingBreakdown};
use crate::emit::{Declaration, DeclarationOptions};
use crate::error::DecodeError;
use crate::image::io::load_source_image;
use crate::image::{ImageView, SourceImage};
use crate::normalize::{normalize_with, GrayscaleGrid};
use crate::resample::{FilterKind, TargetSize};
use crate::threshold::{threshold, BitGrid, Threshold};
use log::{debug, info};
use std::path::Path;

/// Knobs of a conversion; defaults give a 64×64 bitmap at threshold 150.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionParams {
    pub size: TargetSize,
    pub threshold: Threshold,
    pub filter: FilterKind,
    pub declaration: DeclarationOptions,
}

/// Output of one conversion.
#[derive(Clone, Debug)]
pub struct Conversion {
    pub grid: BitGrid,
    pub declaration: Declaration,
    pub report: ConversionReport,
}

/// Runs the conversion stages in order with fixed parameters.
pub struct BitmapConverter {
    params: ConversionParams,
}

impl BitmapConverter {
    pub fn new(params: ConversionParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ConversionParams {
        &self.params
    }

    /// Decode the image at `path` and convert it.
    pub fn convert_path(&self, path: &Path) -> Result<Conversion, DecodeError> {
        let mut timings = TimingBreakdown::default();
        let source = timings.measure("load", || load_source_image(path))?;
        Ok(self.convert_timed(&source, timings))
    }

    /// Convert an already decoded image.
    pub fn convert_image(&self, source: &SourceImage) -> Conversion {
        self.convert_timed(source, TimingBreakdown::default())
    }

    fn convert_timed(&self, source: &SourceImage, mut timings: TimingBreakdown) -> Conversion {
        let p = &self.params;
        debug!(
            "BitmapConverter start src={}x{} target={} threshold={} filter={:?}",
            source.width(),
            source.height(),
            p.size,
            p.threshold.0,
            p.filter
        );

        let gray = timings.measure("normalize", || {
            normalize_with(source, p.size, p.filter.as_filter())
        });
        let grid = timings.measure("threshold", || threshold(gray.as_view(), p.threshold));
        let declaration = timings.measure("emit", || Declaration::new(&grid, &p.declaration));

        let report = ConversionReport {
            source: ImageDescriptor {
                width: source.width(),
                height: source.height(),
            },
            target: ImageDescriptor {
                width: grid.width(),
                height: grid.height(),
            },
            threshold: p.threshold.0,
            ink_pixels: grid.ink_count(),
            mean_intensity: mean_intensity(&gray),
            timings,
        };
        info!(
            "converted {}x{} -> {}x{}, {} ink pixels ({:.1}%)",
            report.source.width,
            report.source.height,
            report.target.width,
            report.target.height,
            report.ink_pixels,
            report.ink_ratio() * 100.0
        );

        Conversion {
            grid,
            declaration,
            report,
        }
    }
}

fn mean_intensity(gray: &GrayscaleGrid) -> f32 {
    let view = gray.as_view();
    let sum: u64 = match view.as_slice() {
        Some(slice) => slice.iter().map(|&v| u64::from(v)).sum(),
        None => view
            .rows()
            .map(|r| r.iter().map(|&v| u64::from(v)).sum::<u64>())
            .sum(),
    };
    let denom = (view.w * view.h).max(1) as f32;
    sum as f32 / denom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_conversion_matches_scenario() {
        let src = SourceImage::from_gray(2, 2, &[0, 255, 255, 0]).unwrap();
        let converter = BitmapConverter::new(ConversionParams {
            size: TargetSize::new(2, 2).unwrap(),
            ..Default::default()
        });
        let out = converter.convert_image(&src);
        assert_eq!(out.declaration.lines()[2], "  \"10\",");
        assert_eq!(out.declaration.lines()[3], "  \"01\"");
        assert_eq!(out.report.ink_pixels, 2);
        assert!((out.report.mean_intensity - 127.5).abs() < 1e-3);
        let labels: Vec<&str> = out
            .report
            .timings
            .stages
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, ["normalize", "threshold", "emit"]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let gray: Vec<u8> = (0..37 * 23).map(|i| ((i * 7919) % 256) as u8).collect();
        let src = SourceImage::from_gray(37, 23, &gray).unwrap();
        let converter = BitmapConverter::new(ConversionParams::default());
        let a = converter.convert_image(&src);
        let b = converter.convert_image(&src);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.declaration.to_string(), b.declaration.to_string());
    }

    #[test]
    fn default_params_emit_64_rows() {
        let src = SourceImage::from_gray(3, 3, &[255; 9]).unwrap();
        let out = BitmapConverter::new(ConversionParams::default()).convert_image(&src);
        assert_eq!(out.declaration.lines().len(), 64 + 3);
        assert_eq!(out.report.ink_pixels, 0);
    }
}
