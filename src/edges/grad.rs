//! Sobel gradients stored as an 8-bit magnitude and an 8-bit direction code.
//!
//! - Convolves the fixed 3×3 Sobel pair on interior pixels (the one-pixel
//!   border stays 0). The Y kernel points up, so a 45° direction means
//!   "towards the upper right" in image coordinates.
//! - Magnitude `sqrt(gx² + gy²)` is clamped to [0, 255] and truncated.
//! - Direction `atan2(gy, gx)` is folded into [0°, 180°] and linearly
//!   rescaled into a byte, see [`encode_direction`].
//!
//! Complexity: O(W·H) with integer accumulation; one `sqrt` and one `atan2`
//! per pixel.
use crate::image::{Frame, ImageView, ImageViewMut};

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Map an angle in degrees within [0, 180] onto a byte.
#[inline]
pub fn encode_direction(angle_deg: f32) -> u8 {
    (angle_deg / 180.0 * 255.0) as u8
}

/// Inverse of [`encode_direction`] (up to quantization).
#[inline]
pub fn decode_direction(code: u8) -> f32 {
    f32::from(code) / 255.0 * 180.0
}

/// Gradient angle of `(gx, gy)` folded into [0°, 180°].
#[inline]
pub fn gradient_angle_deg(gx: i32, gy: i32) -> f32 {
    let mut deg = (gy as f32).atan2(gx as f32).to_degrees();
    if deg < 0.0 {
        deg += 180.0;
    }
    deg
}

/// Compute Sobel magnitude/direction of `src` into `mag`/`dir` for rows
/// `max(start_row, 1)..h-1`. Rows above that are zeroed.
pub fn sobel_into(src: &Frame, start_row: usize, mag: &mut Frame, dir: &mut Frame) {
    let w = src.w;
    let h = src.h;
    let y0 = start_row.max(1);
    mag.clear_rows_above(y0);
    dir.clear_rows_above(y0);
    if w < 3 || h < 3 {
        return;
    }

    for y in y0..h - 1 {
        let rows = [src.row(y - 1), src.row(y), src.row(y + 1)];
        let mag_row = mag.row_mut(y);
        for x in 1..w - 1 {
            let mut gx = 0i32;
            let mut gy = 0i32;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                for k in 0..3 {
                    let sample = i32::from(row[x + k - 1]);
                    gx += sample * kx_row[k];
                    gy += sample * ky_row[k];
                }
            }
            let magnitude = ((gx * gx + gy * gy) as f32).sqrt().clamp(0.0, 255.0);
            mag_row[x] = magnitude as u8;
            dir.set(x, y, encode_direction(gradient_angle_deg(gx, gy)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sobel(src: &Frame) -> (Frame, Frame) {
        let mut mag = Frame::new(src.w, src.h);
        let mut dir = Frame::new(src.w, src.h);
        sobel_into(src, 0, &mut mag, &mut dir);
        (mag, dir)
    }

    #[test]
    fn uniform_frame_has_zero_gradient() {
        let src = Frame::from_raw(16, 12, vec![143; 16 * 12]).unwrap();
        let (mag, _) = sobel(&src);
        assert_eq!(mag.count_nonzero(), 0);
    }

    #[test]
    fn vertical_step_points_horizontally() {
        let mut src = Frame::new(10, 10);
        for y in 0..10 {
            for x in 5..10 {
                src.set(x, y, 40);
            }
        }
        let (mag, dir) = sobel(&src);
        // gx = 4 * 40 on both columns touching the step
        assert_eq!(mag.get(4, 5), 160);
        assert_eq!(mag.get(5, 5), 160);
        assert_eq!(mag.get(2, 5), 0);
        assert_eq!(dir.get(4, 5), 0);
    }

    #[test]
    fn magnitude_saturates() {
        let mut src = Frame::new(6, 6);
        for y in 0..6 {
            for x in 3..6 {
                src.set(x, y, 255);
            }
        }
        let (mag, _) = sobel(&src);
        assert_eq!(mag.get(2, 3), 255);
    }

    #[test]
    fn direction_code_round_trips_sector_centres() {
        for &deg in &[0.0f32, 45.0, 90.0, 135.0] {
            let decoded = decode_direction(encode_direction(deg));
            assert!((decoded - deg).abs() < 1.0, "deg={deg} decoded={decoded}");
        }
        assert!((gradient_angle_deg(1, -1) - 135.0).abs() < 1e-4);
        assert!((gradient_angle_deg(0, 5) - 90.0).abs() < 1e-4);
    }
}
