use serde::{Deserialize, Serialize};

/// Restricts processing to the rows at and below a start row.
///
/// Serialized as `"full"`, `"lowerHalf"` or `{"startRow": n}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionOfInterest {
    /// Whole frame.
    #[default]
    Full,
    /// Rows `n..height`.
    StartRow(usize),
    /// Rows from `height / 2 - 1` down, for cameras whose upper half is sky.
    LowerHalf,
}

impl RegionOfInterest {
    /// First processed row for a frame of the given height (never above `height`).
    pub fn start_row(&self, height: usize) -> usize {
        match *self {
            Self::Full => 0,
            Self::StartRow(row) => row.min(height),
            Self::LowerHalf => (height / 2).saturating_sub(1),
        }
    }
}

/// A detected line in normal form `x·cos θ + y·sin θ = ρ`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoughLine {
    /// Accumulator votes; `0` marks an empty slot.
    pub votes: u32,
    /// Signed distance from the origin in pixels.
    pub rho: f64,
    /// Normal angle in radians.
    pub theta: f64,
}

impl HoughLine {
    pub fn is_empty(&self) -> bool {
        self.votes == 0
    }

    pub fn theta_deg(&self) -> f64 {
        self.theta.to_degrees()
    }
}
