//! Separable Gaussian smoothing with replicated borders.
//!
//! Horizontal pass into a scratch frame, then vertical pass into the output.
//! Sample indices are clamped to the frame (edge replication). Each pass
//! stores its result truncated to 8 bits.
//!
//! With a region of interest only rows `start_row..h` of the output are
//! produced; the horizontal pass additionally covers the `radius` rows above
//! so the vertical taps read fresh data.
use super::kernel::{GaussianKernel, FIXED_SHIFT};
use crate::image::{Frame, ImageU8, ImageView, ImageViewMut};

/// Smooth `src` into `out` for rows `start_row..h`, using `scratch` and `acc` as work space.
///
/// `scratch` and `out` must already match the size of `src`.
pub fn gaussian_smooth_into(
    src: &ImageU8<'_>,
    kernel: &GaussianKernel,
    start_row: usize,
    scratch: &mut Frame,
    out: &mut Frame,
    acc: &mut Vec<u32>,
) {
    let w = src.w;
    let h = src.h;
    if w == 0 || h == 0 || start_row >= h {
        return;
    }
    let taps = kernel.fixed_taps();
    let r = kernel.radius();

    for y in start_row.saturating_sub(r)..h {
        let src_row = src.row(y);
        let dst = scratch.row_mut(y);
        for (x, out_px) in dst.iter_mut().enumerate() {
            let mut sum = 0u32;
            for (k, &tap) in taps.iter().enumerate() {
                let xi = (x + k).saturating_sub(r).min(w - 1);
                sum += tap * u32::from(src_row[xi]);
            }
            *out_px = (sum >> FIXED_SHIFT) as u8;
        }
    }

    acc.clear();
    acc.resize(w, 0);
    for y in start_row..h {
        acc.fill(0);
        for (k, &tap) in taps.iter().enumerate() {
            let yy = (y + k).saturating_sub(r).min(h - 1);
            for (a, &px) in acc.iter_mut().zip(scratch.row(yy)) {
                *a += tap * u32::from(px);
            }
        }
        for (out_px, &a) in out.row_mut(y).iter_mut().zip(acc.iter()) {
            *out_px = (a >> FIXED_SHIFT) as u8;
        }
    }
}
