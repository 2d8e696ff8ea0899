use super::timing::TimingBreakdown;
use serde::Serialize;

/// Dimensions of an image at some point in the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Summary of a conversion, suitable for the optional JSON report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub source: ImageDescriptor,
    pub target: ImageDescriptor,
    pub threshold: u8,
    pub ink_pixels: usize,
    /// Mean of the normalised grayscale grid.
    pub mean_intensity: f32,
    pub timings: TimingBreakdown,
}

impl ConversionReport {
    pub fn ink_ratio(&self) -> f32 {
        let total = (self.target.width * self.target.height).max(1);
        self.ink_pixels as f32 / total as f32
    }
}
