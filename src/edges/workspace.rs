//! Frame buffers owned by the edge detector, one per purpose.
//!
//! Buffers are reallocated only when the frame geometry changes, so a
//! fixed-resolution stream allocates once.
use crate::image::Frame;
use log::debug;

#[derive(Debug, Default)]
pub struct EdgeBuffers {
    /// Horizontal smoothing pass.
    pub scratch: Frame,
    /// Fully smoothed frame.
    pub smoothed: Frame,
    /// Clamped gradient magnitude.
    pub magnitude: Frame,
    /// Encoded gradient direction.
    pub direction: Frame,
    /// Suppressed, thresholded edge map.
    pub edges: Frame,
    /// Row accumulator for the vertical smoothing pass.
    pub row_acc: Vec<u32>,
    allocations: usize,
}

impl EdgeBuffers {
    /// Make every buffer `w × h`. Returns `true` when they were reallocated.
    pub fn ensure(&mut self, w: usize, h: usize) -> bool {
        if self.edges.w == w && self.edges.h == h && !self.edges.pixels().is_empty() {
            return false;
        }
        for frame in [
            &mut self.scratch,
            &mut self.smoothed,
            &mut self.magnitude,
            &mut self.direction,
            &mut self.edges,
        ] {
            frame.ensure_size(w, h);
        }
        self.row_acc = Vec::with_capacity(w);
        self.allocations += 1;
        debug!("EdgeBuffers: allocated {w}x{h} frame buffers");
        true
    }

    /// Number of geometry-driven reallocations so far.
    pub fn allocations(&self) -> usize {
        self.allocations
    }
}
