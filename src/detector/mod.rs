//! Line detector orchestrating edge extraction and the Hough transform.
//!
//! Overview
//! - Smooths the frame with a cached Gaussian kernel, computes Sobel
//!   gradients and thins them with non-maximum suppression plus a double
//!   threshold.
//! - Every edge pixel votes into a `(rho, theta)` accumulator whose shape
//!   depends only on the frame size and angle configuration.
//! - Strict local maxima above the vote threshold feed a bounded list of the
//!   strongest lines, which are rasterized into a 0/255 line frame.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and the demo.
//! - `pipeline` – the [`LineDetector`] implementation.
//!
//! Key Ideas
//! - Every cache (kernel, trig tables, rho axis, accumulator, frame buffers)
//!   compares its inputs against the last-used ones and rebuilds only on a
//!   change, so a fixed-resolution stream allocates once.
//! - An optional region of interest skips every row above a start row in all
//!   stages.

pub mod params;
mod pipeline;

pub use params::LineDetectorParams;
pub use pipeline::LineDetector;
