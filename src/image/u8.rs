use crate::error::{Error, Result};

/// Borrowed 8-bit grayscale view, possibly strided.
///
/// This is the read-only input type of the pipeline. Construct it with
/// [`ImageU8::new`] to get the geometry checked up front; the fields stay
/// public for callers that already hold a validated buffer.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Wrap `data` after checking dimensions, stride and buffer length.
    pub fn new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self> {
        let view = Self { w, h, stride, data };
        view.validate()?;
        Ok(view)
    }

    /// Check the geometry invariants the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(Error::InvalidDimensions {
                width: self.w,
                height: self.h,
            });
        }
        if self.stride < self.w {
            return Err(Error::InvalidStride {
                stride: self.stride,
                width: self.w,
            });
        }
        let expected = (self.h - 1) * self.stride + self.w;
        if self.data.len() < expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
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
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
