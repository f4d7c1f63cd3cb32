//! Line rasterization: polar line → long segment → clipped segment → pixels.
//!
//! Clipping is Liang–Barsky in floating point against `[0, w-1] × [0, h-1]`;
//! the clipped endpoints are rounded and stepped with integer Bresenham.
use crate::image::Frame;

/// Intensity written for line pixels.
pub const LINE_VALUE: u8 = 255;

/// Clip the segment `p0 → p1` to the frame. Returns rounded integer endpoints,
/// or `None` if the segment misses the frame.
pub fn clip_segment(
    p0: (f64, f64),
    p1: (f64, f64),
    width: usize,
    height: usize,
) -> Option<((i64, i64), (i64, i64))> {
    if width == 0 || height == 0 {
        return None;
    }
    let x_max = (width - 1) as f64;
    let y_max = (height - 1) as f64;
    let dx = p1.0 - p0.0;
    let dy = p1.1 - p0.1;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-dx, p0.0),
        (dx, x_max - p0.0),
        (-dy, p0.1),
        (dy, y_max - p0.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let snap = |t: f64| -> (i64, i64) {
        let x = (p0.0 + t * dx).round().clamp(0.0, x_max);
        let y = (p0.1 + t * dy).round().clamp(0.0, y_max);
        (x as i64, y as i64)
    };
    Some((snap(t0), snap(t1)))
}

/// Bresenham from `a` to `b` (both inside the frame), skipping rows above `floor_row`.
pub fn draw_segment(frame: &mut Frame, a: (i64, i64), b: (i64, i64), floor_row: usize) {
    let (mut x0, mut y0) = a;
    let (x1, y1) = b;
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let floor = floor_row as i64;

    loop {
        if y0 >= floor && x0 >= 0 && y0 >= 0 && (x0 as usize) < frame.w && (y0 as usize) < frame.h {
            frame.set(x0 as usize, y0 as usize, LINE_VALUE);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw the line `x·cos θ + y·sin θ = ρ` across the frame.
///
/// The foot point `(ρ cos θ, ρ sin θ)` is extended by `w + h` in both
/// directions, which always spans the frame. Returns `false` when the line
/// misses the frame.
pub fn draw_polar_line(frame: &mut Frame, rho: f64, theta: f64, floor_row: usize) -> bool {
    let (a, b) = (theta.cos(), theta.sin());
    let (x0, y0) = (a * rho, b * rho);
    let len = (frame.w + frame.h) as f64;
    let p1 = (x0 - len * b, y0 + len * a);
    let p2 = (x0 + len * b, y0 - len * a);
    match clip_segment(p1, p2, frame.w, frame.h) {
        Some((s, e)) => {
            draw_segment(frame, s, e, floor_row);
            true
        }
        None => false,
    }
}
