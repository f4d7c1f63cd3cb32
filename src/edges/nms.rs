//! Non‑maximum suppression with double-threshold classification.
//!
//! Each interior pixel decodes its direction byte into one of four sectors
//! (0°, 45°, 90°, 135°) via `((angle + 22.5) / 45) mod 4` and is compared with
//! its two neighbors along that direction. The pixel keeps its magnitude only
//! if it is `>=` both neighbors. Independently of that outcome, magnitudes at
//! or above the high threshold are kept and magnitudes below the low
//! threshold are dropped. Pixels in between keep the suppression result;
//! there is no connectivity-based promotion of weak pixels.
//!
//! The output only ever holds 0 or the input magnitude of the same pixel.
use super::grad::decode_direction;
use crate::image::{Frame, ImageView, ImageViewMut};

/// Direction sector in `0..4` for an encoded gradient direction.
#[inline]
pub fn direction_sector(code: u8) -> usize {
    ((decode_direction(code) + 22.5) / 45.0) as usize % 4
}

/// Offsets `(dx, dy)` of the two neighbors compared in `sector`.
#[inline]
fn sector_neighbors(sector: usize) -> [(isize, isize); 2] {
    match sector {
        0 => [(1, 0), (-1, 0)],
        1 => [(1, -1), (-1, 1)],
        2 => [(0, -1), (0, 1)],
        _ => [(-1, -1), (1, 1)],
    }
}

/// Classify a single magnitude against its neighbors and thresholds.
#[inline]
pub fn classify(mag: u8, neighbor1: u8, neighbor2: u8, high: f32, low: f32) -> u8 {
    let suppressed = if mag >= neighbor1 && mag >= neighbor2 {
        mag
    } else {
        0
    };
    let m = f32::from(mag);
    if m >= high {
        mag
    } else if m < low {
        0
    } else {
        suppressed
    }
}

/// Thin `mag` along `dir` and apply the double threshold, writing rows
/// `max(start_row, 1)..h-1` of `out`. Rows above are zeroed.
pub fn suppress_into(
    mag: &Frame,
    dir: &Frame,
    high: f32,
    low: f32,
    start_row: usize,
    out: &mut Frame,
) {
    let w = mag.w;
    let h = mag.h;
    let y0 = start_row.max(1);
    out.clear_rows_above(y0);
    if w < 3 || h < 3 {
        return;
    }

    for y in y0..h - 1 {
        let dir_row = dir.row(y);
        let mag_row = mag.row(y);
        let out_row = out.row_mut(y);
        for x in 1..w - 1 {
            let m = mag_row[x];
            let [(dx1, dy1), (dx2, dy2)] = sector_neighbors(direction_sector(dir_row[x]));
            let n1 = mag.get(x.wrapping_add_signed(dx1), y.wrapping_add_signed(dy1));
            let n2 = mag.get(x.wrapping_add_signed(dx2), y.wrapping_add_signed(dy2));
            out_row[x] = classify(m, n1, n2, high, low);
        }
    }
}
