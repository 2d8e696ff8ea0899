use serde::Deserialize;

/// Continuous 1D reconstruction kernel used by the separable resampler.
///
/// `weight` is evaluated in source-pixel units at scale 1; the resampler
/// stretches it by the downscale factor itself.
pub trait ResampleFilter {
    /// Half-width of the kernel's non-zero region.
    fn support(&self) -> f64;
    fn weight(&self, x: f64) -> f64;
}

/// Keys cubic convolution kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bicubic {
    pub a: f64,
}

impl Default for Bicubic {
    fn default() -> Self {
        BICUBIC
    }
}

impl ResampleFilter for Bicubic {
    #[inline]
    fn support(&self) -> f64 {
        2.0
    }

    #[inline]
    fn weight(&self, x: f64) -> f64 {
        let a = self.a;
        let x = x.abs();
        if x < 1.0 {
            ((a + 2.0) * x - (a + 3.0)) * x * x + 1.0
        } else if x < 2.0 {
            (((x - 5.0) * x + 8.0) * x - 4.0) * a
        } else {
            0.0
        }
    }
}

/// Catmull-Rom flavoured cubic (`a = -0.5`).
pub const BICUBIC: Bicubic = Bicubic { a: -0.5 };

/// Triangle kernel (linear interpolation).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bilinear;

impl ResampleFilter for Bilinear {
    #[inline]
    fn support(&self) -> f64 {
        1.0
    }

    #[inline]
    fn weight(&self, x: f64) -> f64 {
        let x = x.abs();
        if x < 1.0 {
            1.0 - x
        } else {
            0.0
        }
    }
}

/// Box kernel; behaves like nearest neighbour when upscaling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxFilter;

impl ResampleFilter for BoxFilter {
    #[inline]
    fn support(&self) -> f64 {
        0.5
    }

    #[inline]
    fn weight(&self, x: f64) -> f64 {
        if x > -0.5 && x <= 0.5 {
            1.0
        } else {
            0.0
        }
    }
}

/// Serializable filter selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    #[default]
    Bicubic,
    Bilinear,
    Box,
}

impl FilterKind {
    pub fn as_filter(self) -> &'static dyn ResampleFilter {
        match self {
            Self::Bicubic => &BICUBIC,
            Self::Bilinear => &Bilinear,
            Self::Box => &BoxFilter,
        }
    }
}
