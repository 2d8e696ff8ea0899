use super::coeffs::{convolve, AxisCoeffs};
use super::filters::ResampleFilter;
use super::options::TargetSize;
use crate::image::{GrayImageU8, ImageU8, ImageView};
use log::debug;

/// Resample `src` to `size` with a separable convolution filter.
///
/// Runs a horizontal pass then a vertical pass, each skipped when that axis
/// already has the requested length. The intermediate image is 8-bit.
/// An empty source yields a mid-gray image, as there is nothing to sample.
pub fn resize(src: ImageU8<'_>, size: TargetSize, filter: &dyn ResampleFilter) -> GrayImageU8 {
    let (out_w, out_h) = (size.width(), size.height());
    if src.w == 0 || src.h == 0 {
        debug!("resize: empty source, filling {size}");
        return GrayImageU8::new(out_w, out_h, vec![128; out_w * out_h]);
    }
    debug!("resize {}x{} -> {size}", src.w, src.h);

    let horizontal = if src.w != out_w {
        Some(resize_horizontal(src, out_w, filter))
    } else {
        None
    };
    let stage = horizontal.as_ref().map_or(src, GrayImageU8::as_view);

    if stage.h != out_h {
        resize_vertical(stage, out_h, filter)
    } else {
        copy_packed(stage)
    }
}

fn resize_horizontal(src: ImageU8<'_>, out_w: usize, filter: &dyn ResampleFilter) -> GrayImageU8 {
    let coeffs = AxisCoeffs::compute(src.w, out_w, filter);
    let mut data = Vec::with_capacity(out_w * src.h);
    for row in src.rows() {
        for x in 0..out_w {
            let (start, taps) = coeffs.taps(x);
            data.push(convolve(row[start..].iter().copied(), taps));
        }
    }
    GrayImageU8::new(out_w, src.h, data)
}

fn resize_vertical(src: ImageU8<'_>, out_h: usize, filter: &dyn ResampleFilter) -> GrayImageU8 {
    let coeffs = AxisCoeffs::compute(src.h, out_h, filter);
    let mut data = Vec::with_capacity(src.w * out_h);
    for y in 0..out_h {
        let (start, taps) = coeffs.taps(y);
        for x in 0..src.w {
            let column = (start..start + taps.len()).map(|sy| src.get(x, sy));
            data.push(convolve(column, taps));
        }
    }
    GrayImageU8::new(src.w, out_h, data)
}

fn copy_packed(src: ImageU8<'_>) -> GrayImageU8 {
    let data = src.rows().flatten().copied().collect();
    GrayImageU8::new(src.w, src.h, data)
}
