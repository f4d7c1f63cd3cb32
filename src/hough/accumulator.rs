//! Vote matrix indexed by (rho bin, theta bin).
//!
//! The shape depends only on the frame size and angle configuration. A frame
//! with the same shape as the previous one clears the matrix in place.
use super::tables::{RhoAxis, TrigTables};
use crate::image::{Frame, ImageView};
use log::debug;
use nalgebra::DMatrix;

#[derive(Debug)]
pub struct Accumulator {
    votes: DMatrix<u32>,
    allocations: usize,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            votes: DMatrix::zeros(0, 0),
            allocations: 0,
        }
    }
}

impl Accumulator {
    /// Zero the matrix, reallocating only if the shape differs.
    /// Returns `true` when a new matrix was allocated.
    pub fn reset(&mut self, rho_bins: usize, theta_bins: usize) -> bool {
        if self.votes.shape() == (rho_bins, theta_bins) {
            self.votes.fill(0);
            return false;
        }
        self.votes = DMatrix::zeros(rho_bins, theta_bins);
        self.allocations += 1;
        debug!("Accumulator: allocated {rho_bins}x{theta_bins} cells");
        true
    }

    #[inline]
    pub fn rho_bins(&self) -> usize {
        self.votes.nrows()
    }

    #[inline]
    pub fn theta_bins(&self) -> usize {
        self.votes.ncols()
    }

    #[inline]
    pub fn get(&self, rho_idx: usize, theta_idx: usize) -> u32 {
        self.votes[(rho_idx, theta_idx)]
    }

    #[inline]
    pub fn increment(&mut self, rho_idx: usize, theta_idx: usize) {
        self.votes[(rho_idx, theta_idx)] += 1;
    }

    pub fn total_votes(&self) -> u64 {
        self.votes.iter().map(|&v| u64::from(v)).sum()
    }

    /// Strongest cell as `(rho_idx, theta_idx, votes)`; first one in scan order on ties.
    pub fn argmax(&self) -> Option<(usize, usize, u32)> {
        let mut best: Option<(usize, usize, u32)> = None;
        for r in 0..self.rho_bins() {
            for t in 0..self.theta_bins() {
                let v = self.get(r, t);
                if best.map_or(true, |(_, _, b)| v > b) {
                    best = Some((r, t, v));
                }
            }
        }
        best
    }

    pub fn allocations(&self) -> usize {
        self.allocations
    }
}

/// Cast one vote per theta bin for every nonzero pixel of `edges` in rows
/// `start_row..h`. Votes whose rho falls outside the axis are dropped.
/// Returns the number of voting pixels.
pub fn accumulate(
    acc: &mut Accumulator,
    edges: &Frame,
    start_row: usize,
    trig: &TrigTables,
    rho_axis: &RhoAxis,
) -> usize {
    let mut voters = 0usize;
    for y in start_row..edges.h {
        let yf = y as f64;
        for (x, &v) in edges.row(y).iter().enumerate() {
            if v == 0 {
                continue;
            }
            voters += 1;
            let xf = x as f64;
            for (t, (&c, &s)) in trig.cos().iter().zip(trig.sin()).enumerate() {
                if let Some(r) = rho_axis.index(xf * c + yf * s) {
                    acc.increment(r, t);
                }
            }
        }
    }
    voters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hough::options::HoughParams;

    fn setup(w: usize, h: usize) -> (Accumulator, TrigTables, RhoAxis) {
        let mut trig = TrigTables::default();
        trig.ensure(&HoughParams::default());
        let mut axis = RhoAxis::default();
        axis.ensure(w, h, 1.0);
        let mut acc = Accumulator::default();
        acc.reset(axis.bins(), trig.len());
        (acc, trig, axis)
    }

    #[test]
    fn single_pixel_votes_once_per_theta() {
        let (mut acc, trig, axis) = setup(10, 10);
        let mut edges = Frame::new(10, 10);
        edges.set(3, 7, 255);
        let voters = accumulate(&mut acc, &edges, 0, &trig, &axis);
        assert_eq!(voters, 1);
        assert_eq!(acc.total_votes(), trig.len() as u64);
    }

    #[test]
    fn vertical_line_peaks_at_theta_zero() {
        let (mut acc, trig, axis) = setup(32, 32);
        let mut edges = Frame::new(32, 32);
        for y in 0..32 {
            edges.set(12, y, 1);
        }
        accumulate(&mut acc, &edges, 0, &trig, &axis);
        let (r, t, votes) = acc.argmax().unwrap();
        assert_eq!(votes, 32);
        assert_eq!(t, 90, "theta bin of 0°");
        assert!((axis.rho(r) - 12.0).abs() <= 0.5);
    }

    #[test]
    fn rows_above_start_do_not_vote() {
        let (mut acc, trig, axis) = setup(8, 8);
        let mut edges = Frame::new(8, 8);
        edges.set(1, 1, 9);
        edges.set(2, 6, 9);
        let voters = accumulate(&mut acc, &edges, 4, &trig, &axis);
        assert_eq!(voters, 1);
    }

    #[test]
    fn reset_reuses_matching_shape() {
        let mut acc = Accumulator::default();
        assert!(acc.reset(5, 7));
        acc.increment(2, 3);
        assert!(!acc.reset(5, 7));
        assert_eq!(acc.get(2, 3), 0);
        assert!(acc.reset(6, 7));
        assert_eq!(acc.allocations(), 2);
    }
}
