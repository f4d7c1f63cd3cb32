//! Peak search over the accumulator and the bounded strongest-lines list.
use super::accumulator::Accumulator;
use super::tables::{RhoAxis, TrigTables};
use crate::types::HoughLine;

/// Half size of the local-maximum window, in bins along both axes.
pub const PEAK_WINDOW: usize = 3;

/// `true` if no other cell within ±[`PEAK_WINDOW`] bins has as many votes or more.
///
/// Plateaus are rejected entirely: two equal neighbors disqualify each other.
pub fn is_local_maximum(acc: &Accumulator, rho_idx: usize, theta_idx: usize) -> bool {
    let current = acc.get(rho_idx, theta_idx);
    let r_end = (rho_idx + PEAK_WINDOW).min(acc.rho_bins().saturating_sub(1));
    let t_end = (theta_idx + PEAK_WINDOW).min(acc.theta_bins().saturating_sub(1));
    for r in rho_idx.saturating_sub(PEAK_WINDOW)..=r_end {
        for t in theta_idx.saturating_sub(PEAK_WINDOW)..=t_end {
            if (r, t) != (rho_idx, theta_idx) && acc.get(r, t) >= current {
                return false;
            }
        }
    }
    true
}

/// Fixed-capacity list of the strongest lines, sorted by descending votes.
///
/// Unused slots hold an empty line (`votes == 0`).
#[derive(Clone, Debug, Default)]
pub struct TopLines {
    slots: Vec<HoughLine>,
}

impl TopLines {
    pub fn new(capacity: usize) -> Self {
        let mut top = Self::default();
        top.reset(capacity);
        top
    }

    /// Empty every slot and set the capacity.
    pub fn reset(&mut self, capacity: usize) {
        self.slots.clear();
        self.slots.resize(capacity, HoughLine::default());
    }

    /// Replace the weakest entry if `line` has strictly more votes, then re-sort.
    pub fn offer(&mut self, line: HoughLine) -> bool {
        let Some(weakest) = self.slots.last_mut() else {
            return false;
        };
        if line.votes <= weakest.votes {
            return false;
        }
        *weakest = line;
        self.slots.sort_by(|a, b| b.votes.cmp(&a.votes));
        true
    }

    /// Non-empty entries, strongest first.
    pub fn detected(&self) -> &[HoughLine] {
        let n = self.slots.iter().take_while(|l| !l.is_empty()).count();
        &self.slots[..n]
    }

    /// All slots including empty ones.
    pub fn slots(&self) -> &[HoughLine] {
        &self.slots
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Scan every cell (rho-major order) and offer qualifying local maxima to `top`.
pub fn collect_peaks(
    acc: &Accumulator,
    vote_threshold: u32,
    trig: &TrigTables,
    rho_axis: &RhoAxis,
    top: &mut TopLines,
) {
    let thetas = trig.thetas();
    for r in 0..acc.rho_bins() {
        for (t, &theta) in thetas.iter().enumerate().take(acc.theta_bins()) {
            let votes = acc.get(r, t);
            if votes == 0 || votes < vote_threshold || !is_local_maximum(acc, r, t) {
                continue;
            }
            top.offer(HoughLine {
                votes,
                rho: rho_axis.rho(r),
                theta,
            });
        }
    }
}
