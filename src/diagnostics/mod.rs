//! Stage timings and the serialisable conversion summary.
pub mod report;
pub mod timing;

pub use self::report::{ConversionReport, ImageDescriptor};
pub use self::timing::{StageTiming, TimingBreakdown};
