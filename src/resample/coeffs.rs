//! Per-axis convolution weights in fixed point.
use super::filters::ResampleFilter;

/// Fractional bits of the fixed-point weights.
pub const PRECISION_BITS: u32 = 32 - 8 - 2;

/// Precomputed source windows and quantised weights for one axis.
#[derive(Clone, Debug)]
pub struct AxisCoeffs {
    /// Max taps per output sample; `weights` is laid out with this stride.
    pub ksize: usize,
    /// `(first source index, tap count)` per output sample.
    pub bounds: Vec<(usize, usize)>,
    pub weights: Vec<i32>,
}

impl AxisCoeffs {
    /// Weights for mapping `in_size` samples onto `out_size`.
    ///
    /// Output sample `i` is centred on `(i + 0.5) * in/out` in source space.
    /// On downscale the kernel is widened by the scale factor so every source
    /// sample contributes.
    pub fn compute(in_size: usize, out_size: usize, filter: &dyn ResampleFilter) -> Self {
        let scale = in_size as f64 / out_size as f64;
        let filterscale = scale.max(1.0);
        let support = filter.support() * filterscale;
        let ksize = (support.ceil() as usize) * 2 + 1;
        let inv = 1.0 / filterscale;

        let mut bounds = Vec::with_capacity(out_size);
        let mut weights = vec![0i32; out_size * ksize];
        let mut taps = vec![0.0f64; ksize];
        for i in 0..out_size {
            let center = (i as f64 + 0.5) * scale;
            let xmin = ((center - support + 0.5).floor().max(0.0)) as usize;
            let xmax = ((center + support + 0.5).floor() as usize).min(in_size);
            let count = xmax.saturating_sub(xmin).min(ksize);

            let mut total = 0.0;
            for (j, tap) in taps.iter_mut().enumerate().take(count) {
                let w = filter.weight(((xmin + j) as f64 - center + 0.5) * inv);
                *tap = w;
                total += w;
            }
            let row = &mut weights[i * ksize..i * ksize + count];
            for (dst, &w) in row.iter_mut().zip(&taps[..count]) {
                let w = if total != 0.0 { w / total } else { w };
                *dst = quantize(w);
            }
            bounds.push((xmin, count));
        }
        Self {
            ksize,
            bounds,
            weights,
        }
    }

    #[inline]
    pub fn taps(&self, i: usize) -> (usize, &[i32]) {
        let (start, count) = self.bounds[i];
        (start, &self.weights[i * self.ksize..i * self.ksize + count])
    }
}

#[inline]
fn quantize(w: f64) -> i32 {
    (w * f64::from(1u32 << PRECISION_BITS)).round() as i32
}

/// Accumulate `taps · samples` and return a clamped 8-bit value.
#[inline]
pub fn convolve(samples: impl Iterator<Item = u8>, taps: &[i32]) -> u8 {
    let mut acc: i64 = 1 << (PRECISION_BITS - 1);
    for (s, &k) in samples.zip(taps) {
        acc += i64::from(s) * i64::from(k);
    }
    clip8(acc)
}

#[inline]
fn clip8(acc: i64) -> u8 {
    if acc >= (1i64 << PRECISION_BITS) << 8 {
        255
    } else if acc <= 0 {
        0
    } else {
        (acc >> PRECISION_BITS) as u8
    }
}
