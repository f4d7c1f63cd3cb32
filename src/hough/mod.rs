//! Hough line transform: voting, peak extraction and line rasterization.
//!
//! - [`tables`]: cached trig tables and rho axis.
//! - [`accumulator`]: the `(rho, theta)` vote matrix.
//! - [`peaks`]: strict local maxima and the bounded top-N list.
//! - [`raster`]: polar line → clipped segment → pixels.
//!
//! [`HoughTransform`] owns all of the above and reuses them across frames of
//! the same geometry.

pub mod accumulator;
pub mod options;
pub mod peaks;
pub mod raster;
pub mod tables;

pub use accumulator::{accumulate, Accumulator};
pub use options::{HoughParams, MAX_ACCUMULATOR_CELLS, MAX_NUMBER_OF_LINES, MIN_RHO_STEP};
pub use peaks::{collect_peaks, is_local_maximum, TopLines, PEAK_WINDOW};
pub use raster::{clip_segment, draw_polar_line, draw_segment, LINE_VALUE};
pub use tables::{rho_bin_count, theta_bin_count, RhoAxis, TrigTables};

use crate::diagnostics::timing::{record_stage, Stage, TimingBreakdown};
use crate::error::Result;
use crate::image::Frame;
use crate::types::{HoughLine, RegionOfInterest};
use std::time::Instant;

#[derive(Debug)]
pub struct HoughTransform {
    params: HoughParams,
    roi: RegionOfInterest,
    trig: TrigTables,
    rho_axis: RhoAxis,
    acc: Accumulator,
    top: TopLines,
    overlay: Frame,
    overlay_allocations: usize,
    start_row: usize,
    voters: usize,
}

impl HoughTransform {
    pub fn new(params: HoughParams) -> Result<Self> {
        params.validate()?;
        let top = TopLines::new(params.number_of_lines);
        Ok(Self {
            params,
            roi: RegionOfInterest::Full,
            trig: TrigTables::default(),
            rho_axis: RhoAxis::default(),
            acc: Accumulator::default(),
            top,
            overlay: Frame::default(),
            overlay_allocations: 0,
            start_row: 0,
            voters: 0,
        })
    }

    pub fn with_region_of_interest(mut self, roi: RegionOfInterest) -> Self {
        self.roi = roi;
        self
    }

    pub fn params(&self) -> &HoughParams {
        &self.params
    }

    /// Swap parameters between frames. Tables are rebuilt on the next vote
    /// only if the angle range or steps actually changed.
    pub fn set_params(&mut self, params: HoughParams) -> Result<()> {
        params.validate()?;
        if params.number_of_lines != self.top.capacity() {
            self.top.reset(params.number_of_lines);
        }
        self.params = params;
        Ok(())
    }

    pub fn region_of_interest(&self) -> RegionOfInterest {
        self.roi
    }

    pub fn set_region_of_interest(&mut self, roi: RegionOfInterest) {
        self.roi = roi;
    }

    /// Fill the accumulator from `edges`. Rows above the region of interest do not vote.
    ///
    /// Fails with [`crate::Error::InvalidConfig`] when the accumulator for this frame
    /// size would exceed [`MAX_ACCUMULATOR_CELLS`].
    pub fn vote(&mut self, edges: &Frame) -> Result<&Accumulator> {
        self.params.validate_for_frame(edges.w, edges.h)?;
        self.vote_timed(edges, None);
        Ok(&self.acc)
    }

    fn vote_timed(&mut self, edges: &Frame, mut timings: Option<&mut TimingBreakdown>) {
        let start = Instant::now();
        self.trig.ensure(&self.params);
        self.rho_axis.ensure(edges.w, edges.h, self.params.rho_step);
        self.acc.reset(self.rho_axis.bins(), self.trig.len());
        self.start_row = self.roi.start_row(edges.h);
        if self.overlay.ensure_size(edges.w, edges.h) {
            self.overlay_allocations += 1;
        }
        self.voters = accumulate(
            &mut self.acc,
            edges,
            self.start_row,
            &self.trig,
            &self.rho_axis,
        );
        record_stage(&mut timings, Stage::Vote, start);
    }

    /// Pick the strongest peaks of the last vote and draw them into the line frame.
    pub fn extract_lines(&mut self) -> (&[HoughLine], &Frame) {
        self.extract_timed(None);
        (self.top.detected(), &self.overlay)
    }

    fn extract_timed(&mut self, mut timings: Option<&mut TimingBreakdown>) {
        let start = Instant::now();
        self.top.reset(self.params.number_of_lines);
        collect_peaks(
            &self.acc,
            self.params.line_vote_threshold,
            &self.trig,
            &self.rho_axis,
            &mut self.top,
        );
        record_stage(&mut timings, Stage::Peaks, start);

        let start = Instant::now();
        self.overlay.clear();
        for line in self.top.detected() {
            draw_polar_line(&mut self.overlay, line.rho, line.theta, self.start_row);
        }
        record_stage(&mut timings, Stage::Raster, start);
    }

    /// Vote, extract and rasterize in one pass; returns the line frame.
    pub fn run(&mut self, edges: &Frame) -> Result<&Frame> {
        self.params.validate_for_frame(edges.w, edges.h)?;
        self.run_timed(edges, None);
        Ok(&self.overlay)
    }

    /// Caller has checked [`HoughParams::validate_for_frame`].
    pub(crate) fn run_timed(&mut self, edges: &Frame, mut timings: Option<&mut TimingBreakdown>) {
        self.vote_timed(edges, timings.as_deref_mut());
        self.extract_timed(timings);
    }

    /// Lines found by the last extraction, strongest first.
    pub fn lines(&self) -> &[HoughLine] {
        self.top.detected()
    }

    pub fn top_lines(&self) -> &TopLines {
        &self.top
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.acc
    }

    /// Line frame of the last extraction (0 or [`LINE_VALUE`]).
    pub fn overlay(&self) -> &Frame {
        &self.overlay
    }

    pub fn trig_tables(&self) -> &TrigTables {
        &self.trig
    }

    pub fn rho_axis(&self) -> &RhoAxis {
        &self.rho_axis
    }

    /// Nonzero edge pixels that voted in the last frame.
    pub fn voters(&self) -> usize {
        self.voters
    }

    pub fn overlay_allocations(&self) -> usize {
        self.overlay_allocations
    }
}
