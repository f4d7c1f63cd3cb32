#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage modules – public for tools and tests that drive a single stage.
pub mod config;
pub mod edges;
pub mod hough;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{LineDetector, LineDetectorParams};
pub use crate::error::{Error, Result};
pub use crate::image::{Frame, ImageU8};
pub use crate::types::{HoughLine, RegionOfInterest};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{CacheStats, DetectionReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use line_detector::prelude::*;
///
/// # fn main() -> line_detector::Result<()> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8::new(w, h, w, &gray)?;
///
/// let mut det = LineDetector::new(LineDetectorParams {
///     region_of_interest: RegionOfInterest::LowerHalf,
///     ..Default::default()
/// })?;
///
/// let lines = det.run(img)?;
/// println!("line pixels={}", lines.count_nonzero());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::edges::EdgeParams;
    pub use crate::hough::HoughParams;
    pub use crate::image::{Frame, ImageU8};
    pub use crate::{HoughLine, LineDetector, LineDetectorParams, RegionOfInterest};
}
