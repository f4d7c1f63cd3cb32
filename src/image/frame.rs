//! Owned single-channel 8-bit frame in row-major layout (stride == width).
//!
//! Every intermediate buffer of the pipeline is a `Frame`. Buffers are
//! reused across calls and only reallocated through [`Frame::ensure_size`]
//! when the incoming geometry changes.
use crate::error::{Error, Result};
use crate::image::ImageU8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// Frame width in pixels
    pub w: usize,
    /// Frame height in pixels
    pub h: usize,
    /// Backing storage, `data.len() == w * h`
    data: Vec<u8>,
}

impl Frame {
    /// Construct a zero-initialized frame of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Take ownership of `data`, checking that it matches the geometry.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        if data.len() != w * h {
            return Err(Error::BufferSizeMismatch {
                expected: w * h,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    /// Reallocate (zeroed) only when the size differs. Returns `true` on reallocation.
    pub fn ensure_size(&mut self, w: usize, h: usize) -> bool {
        if self.w == w && self.h == h && self.data.len() == w * h {
            return false;
        }
        *self = Self::new(w, h);
        true
    }

    /// Borrow as a read-only `ImageU8` view.
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// Zero every pixel without touching the allocation.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Zero rows `0..end` (clamped to the height).
    pub fn clear_rows_above(&mut self, end: usize) {
        let end = end.min(self.h);
        self.data[..end * self.w].fill(0);
    }

    /// Number of nonzero pixels.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl crate::image::traits::ImageView for Frame {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for Frame {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;

    #[test]
    fn ensure_size_reuses_matching_buffer() {
        let mut frame = Frame::new(8, 4);
        frame.set(3, 2, 7);
        assert!(!frame.ensure_size(8, 4));
        assert_eq!(frame.get(3, 2), 7, "same geometry keeps contents");
        assert!(frame.ensure_size(4, 8));
        assert_eq!(frame.pixels().len(), 32);
        assert_eq!(frame.count_nonzero(), 0);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(Frame::from_raw(3, 3, vec![0; 9]).is_ok());
        assert!(Frame::from_raw(3, 3, vec![0; 8]).is_err());
        assert!(Frame::from_raw(0, 3, Vec::new()).is_err());
    }
}
