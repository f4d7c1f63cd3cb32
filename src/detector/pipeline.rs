//! Detector pipeline running edge extraction and Hough line detection per frame.
//!
//! Typical usage:
//! ```no_run
//! use line_detector::{LineDetector, LineDetectorParams};
//! use line_detector::image::ImageU8;
//!
//! # fn example(gray: ImageU8) -> line_detector::Result<()> {
//! let mut detector = LineDetector::new(LineDetectorParams::default())?;
//! let report = detector.process(gray)?;
//! for line in &report.lines {
//!     println!("votes={} rho={:.1} theta={:.1}°", line.votes, line.rho, line.theta_deg);
//! }
//! # Ok(())
//! # }
//! ```

// Stages
// - Edges: smooth → gradient → suppression into the edge buffers.
// - Hough: vote → peaks → raster into the line frame.
// - Reporting: cache counters, timings and the detected lines.

use super::params::LineDetectorParams;
use crate::diagnostics::{
    CacheStats, DetectionReport, InputDescriptor, LineReport, TimingBreakdown,
};
use crate::edges::{EdgeDetector, EdgeParams};
use crate::error::Result;
use crate::hough::{Accumulator, HoughParams, HoughTransform};
use crate::image::{Frame, ImageU8};
use crate::types::{HoughLine, RegionOfInterest};
use log::debug;
use std::time::Instant;

/// Frame-synchronous line detector.
///
/// Owns every buffer and cache of the pipeline. One instance serves one
/// stream; it is not meant to be invoked concurrently.
#[derive(Debug)]
pub struct LineDetector {
    params: LineDetectorParams,
    edges: EdgeDetector,
    hough: HoughTransform,
    frames: u64,
}

impl LineDetector {
    /// Validate `params` and create a detector with empty caches.
    pub fn new(params: LineDetectorParams) -> Result<Self> {
        params.validate()?;
        let roi = params.region_of_interest;
        let edges = EdgeDetector::new(params.edge.clone())?.with_region_of_interest(roi);
        let hough = HoughTransform::new(params.hough.clone())?.with_region_of_interest(roi);
        Ok(Self {
            params,
            edges,
            hough,
            frames: 0,
        })
    }

    pub fn params(&self) -> &LineDetectorParams {
        &self.params
    }

    /// Process one frame and return the line frame (0 background, 255 on lines).
    pub fn run(&mut self, frame: ImageU8<'_>) -> Result<&Frame> {
        self.check_frame(&frame)?;
        self.run_validated(&frame, None);
        Ok(self.hough.overlay())
    }

    /// Process one frame and return a report with lines, counters and stage timings.
    pub fn process(&mut self, frame: ImageU8<'_>) -> Result<DetectionReport> {
        self.check_frame(&frame)?;
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        self.run_validated(&frame, Some(&mut timings));
        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        Ok(DetectionReport {
            input: InputDescriptor {
                width: frame.w,
                height: frame.h,
                roi_start_row: self.params.region_of_interest.start_row(frame.h),
            },
            edge_pixels: self.edges.edges().count_nonzero(),
            lines: self.hough.lines().iter().map(LineReport::from).collect(),
            cache: self.cache_stats(),
            timings,
        })
    }

    /// Reject malformed views and frame sizes whose accumulator would be too large.
    fn check_frame(&self, frame: &ImageU8<'_>) -> Result<()> {
        frame.validate()?;
        self.params.hough.validate_for_frame(frame.w, frame.h)
    }

    fn run_validated(&mut self, frame: &ImageU8<'_>, mut timings: Option<&mut TimingBreakdown>) {
        let start = Instant::now();
        let edges = self.edges.detect_validated(frame, timings.as_deref_mut());
        self.hough.run_timed(edges, timings);
        self.frames += 1;
        debug!(
            "LineDetector::process frame={} w={} h={} voters={} lines={} elapsed_ms={:.3}",
            self.frames,
            frame.w,
            frame.h,
            self.hough.voters(),
            self.hough.lines().len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    /// Swap edge parameters between frames.
    pub fn set_edge_params(&mut self, params: EdgeParams) -> Result<()> {
        self.edges.set_params(params.clone())?;
        self.params.edge = params;
        Ok(())
    }

    /// Swap Hough parameters between frames.
    pub fn set_hough_params(&mut self, params: HoughParams) -> Result<()> {
        self.hough.set_params(params.clone())?;
        self.params.hough = params;
        Ok(())
    }

    pub fn set_region_of_interest(&mut self, roi: RegionOfInterest) {
        self.params.region_of_interest = roi;
        self.edges.set_region_of_interest(roi);
        self.hough.set_region_of_interest(roi);
    }

    /// Edge map of the last frame.
    pub fn edges(&self) -> &Frame {
        self.edges.edges()
    }

    /// Line frame of the last frame.
    pub fn overlay(&self) -> &Frame {
        self.hough.overlay()
    }

    /// Lines detected in the last frame, strongest first.
    pub fn lines(&self) -> &[HoughLine] {
        self.hough.lines()
    }

    pub fn accumulator(&self) -> &Accumulator {
        self.hough.accumulator()
    }

    pub fn edge_detector(&self) -> &EdgeDetector {
        &self.edges
    }

    pub fn hough(&self) -> &HoughTransform {
        &self.hough
    }

    /// Frames processed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            kernel_builds: self.edges.kernel_builds(),
            trig_builds: self.hough.trig_tables().builds(),
            rho_axis_builds: self.hough.rho_axis().builds(),
            accumulator_allocations: self.hough.accumulator().allocations(),
            buffer_allocations: self.edges.buffer_allocations() + self.hough.overlay_allocations(),
        }
    }
}
