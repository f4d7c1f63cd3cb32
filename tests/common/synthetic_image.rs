#![allow(dead_code)]

use line_detector::Frame;

/// Frame filled with a single intensity.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> Frame {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    Frame::from_raw(width, height, vec![value; width * height]).expect("valid geometry")
}

/// Black frame with a 1-pixel-wide white line on every `(x, y)` where `x + y == sum`.
pub fn anti_diagonal_u8(width: usize, height: usize, sum: usize) -> Frame {
    let mut frame = uniform_u8(width, height, 0);
    for x in 0..width.min(sum + 1) {
        let y = sum - x;
        if y < height {
            frame.set(x, y, 255);
        }
    }
    frame
}

/// Black frame with a 1-pixel-wide white column at `x`.
pub fn vertical_line_u8(width: usize, height: usize, x: usize) -> Frame {
    let mut frame = uniform_u8(width, height, 0);
    for y in 0..height {
        frame.set(x, y, 255);
    }
    frame
}

/// Distance from `(x, y)` to the line `x + y == sum`.
pub fn distance_to_anti_diagonal(x: usize, y: usize, sum: usize) -> f64 {
    ((x + y) as f64 - sum as f64).abs() / std::f64::consts::SQRT_2
}
