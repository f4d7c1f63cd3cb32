//! Edge extraction: Gaussian smoothing, Sobel gradients, non‑maximum suppression.
//!
//! This module turns a grayscale frame into a thinned edge map of the same
//! size whose pixels are either 0 or the (clamped) gradient magnitude:
//!
//! - [`smooth`]: separable Gaussian blur with replicated borders, kernel
//!   cached by [`kernel::KernelCache`].
//! - [`grad`]: 3×3 Sobel magnitude plus an 8-bit direction code.
//! - [`nms`]: 4-sector suppression followed by the double threshold.
//!
//! Design goals
//! - No per-frame allocation once the geometry is known; all buffers live in
//!   [`workspace::EdgeBuffers`].
//! - Row-oriented loops over contiguous buffers.
//! - An optional [`RegionOfInterest`] skips every row above its start row.

pub mod grad;
pub mod kernel;
pub mod nms;
pub mod options;
pub mod smooth;
pub mod workspace;

pub use grad::{decode_direction, encode_direction, sobel_into};
pub use kernel::{kernel_size, GaussianKernel, KernelCache};
pub use nms::{direction_sector, suppress_into};
pub use options::EdgeParams;
pub use smooth::gaussian_smooth_into;

use crate::diagnostics::timing::{record_stage, Stage, TimingBreakdown};
use crate::error::Result;
use crate::image::{Frame, ImageU8};
use crate::types::RegionOfInterest;
use std::time::Instant;
use workspace::EdgeBuffers;

/// Canny-style edge detector owning its kernel cache and frame buffers.
///
/// Not meant to be shared between threads while running; use one instance
/// per stream.
#[derive(Debug)]
pub struct EdgeDetector {
    params: EdgeParams,
    roi: RegionOfInterest,
    kernel: KernelCache,
    buffers: EdgeBuffers,
}

impl EdgeDetector {
    /// Create a detector after validating `params`.
    pub fn new(params: EdgeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            roi: RegionOfInterest::Full,
            kernel: KernelCache::default(),
            buffers: EdgeBuffers::default(),
        })
    }

    pub fn with_region_of_interest(mut self, roi: RegionOfInterest) -> Self {
        self.roi = roi;
        self
    }

    pub fn params(&self) -> &EdgeParams {
        &self.params
    }

    /// Replace the parameters between frames; the kernel is rebuilt lazily if sigma changed.
    pub fn set_params(&mut self, params: EdgeParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn region_of_interest(&self) -> RegionOfInterest {
        self.roi
    }

    pub fn set_region_of_interest(&mut self, roi: RegionOfInterest) {
        self.roi = roi;
    }

    /// Validate `frame` and compute its edge map.
    pub fn detect(&mut self, frame: ImageU8<'_>) -> Result<&Frame> {
        frame.validate()?;
        Ok(self.detect_validated(&frame, None))
    }

    /// Run smoothing → gradient → suppression on an already validated frame.
    pub(crate) fn detect_validated(
        &mut self,
        frame: &ImageU8<'_>,
        mut timings: Option<&mut TimingBreakdown>,
    ) -> &Frame {
        let (w, h) = (frame.w, frame.h);
        self.buffers.ensure(w, h);
        let start_row = self.roi.start_row(h);
        let kernel = self.kernel.ensure(self.params.sigma);
        let buffers = &mut self.buffers;

        let start = Instant::now();
        // one extra row above the region feeds the gradient halo
        gaussian_smooth_into(
            frame,
            kernel,
            start_row.saturating_sub(1),
            &mut buffers.scratch,
            &mut buffers.smoothed,
            &mut buffers.row_acc,
        );
        record_stage(&mut timings, Stage::Smooth, start);

        let start = Instant::now();
        sobel_into(
            &buffers.smoothed,
            start_row,
            &mut buffers.magnitude,
            &mut buffers.direction,
        );
        record_stage(&mut timings, Stage::Gradient, start);

        let start = Instant::now();
        suppress_into(
            &buffers.magnitude,
            &buffers.direction,
            self.params.high_threshold,
            self.params.low_threshold,
            start_row,
            &mut buffers.edges,
        );
        record_stage(&mut timings, Stage::Nms, start);

        &buffers.edges
    }

    /// Edge map of the last processed frame.
    pub fn edges(&self) -> &Frame {
        &self.buffers.edges
    }

    /// Smoothed frame of the last call (rows above the region are stale).
    pub fn smoothed(&self) -> &Frame {
        &self.buffers.smoothed
    }

    pub fn magnitude(&self) -> &Frame {
        &self.buffers.magnitude
    }

    pub fn direction(&self) -> &Frame {
        &self.buffers.direction
    }

    /// Kernel currently in use, if a frame has been processed.
    pub fn kernel(&self) -> Option<&GaussianKernel> {
        self.kernel.current()
    }

    pub fn kernel_builds(&self) -> usize {
        self.kernel.builds()
    }

    pub fn buffer_allocations(&self) -> usize {
        self.buffers.allocations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    fn vertical_bar(w: usize, h: usize, x0: usize, x1: usize) -> Frame {
        let mut frame = Frame::new(w, h);
        for y in 0..h {
            for x in x0..x1 {
                frame.set(x, y, 200);
            }
        }
        frame
    }

    #[test]
    fn uniform_frame_yields_no_edges() {
        let frame = Frame::from_raw(32, 24, vec![180; 32 * 24]).unwrap();
        let mut det = EdgeDetector::new(EdgeParams::default()).unwrap();
        let edges = det.detect(frame.as_view()).unwrap();
        assert_eq!(edges.count_nonzero(), 0);
        assert!(det.smoothed().pixels().iter().all(|&v| v == 180));
        assert_eq!(det.magnitude().count_nonzero(), 0);
    }

    #[test]
    fn step_edge_is_detected_as_thin_column() {
        let frame = vertical_bar(40, 30, 20, 40);
        let params = EdgeParams {
            sigma: 1.0,
            ..Default::default()
        };
        let mut det = EdgeDetector::new(params).unwrap();
        let edges = det.detect(frame.as_view()).unwrap();
        let row = edges.row(15);
        let marked: Vec<usize> = (0..40).filter(|&x| row[x] > 0).collect();
        assert!(!marked.is_empty(), "step edge should survive");
        assert!(
            marked.iter().all(|&x| (18..=21).contains(&x)),
            "edge pixels {marked:?} should hug the step at x=20"
        );
    }

    #[test]
    fn region_of_interest_blanks_upper_rows() {
        let frame = vertical_bar(40, 30, 20, 40);
        let mut det = EdgeDetector::new(EdgeParams {
            sigma: 1.0,
            ..Default::default()
        })
        .unwrap()
        .with_region_of_interest(RegionOfInterest::StartRow(12));
        let edges = det.detect(frame.as_view()).unwrap();
        for y in 0..12 {
            assert!(edges.row(y).iter().all(|&v| v == 0), "row {y}");
        }
        assert!(edges.row(12).iter().any(|&v| v > 0));
    }

    #[test]
    fn buffers_are_reused_for_same_geometry() {
        let frame = vertical_bar(16, 16, 8, 16);
        let mut det = EdgeDetector::new(EdgeParams::default()).unwrap();
        det.detect(frame.as_view()).unwrap();
        det.detect(frame.as_view()).unwrap();
        assert_eq!(det.buffer_allocations(), 1);
        assert_eq!(det.kernel_builds(), 1);
        let other = vertical_bar(20, 16, 8, 20);
        det.detect(other.as_view()).unwrap();
        assert_eq!(det.buffer_allocations(), 2);
        assert_eq!(det.kernel_builds(), 1);
    }

    #[test]
    fn rejects_invalid_sigma() {
        let params = EdgeParams {
            sigma: 0.0,
            ..Default::default()
        };
        assert!(EdgeDetector::new(params).is_err());
    }
}
