//! 1D Gaussian kernel and its per-detector cache.
//!
//! Weights follow `exp(-i² / 2σ²)` over `i ∈ [-r, r]`, normalized to sum 1.
//! The convolution consumes a Q16 fixed-point copy of the same weights whose
//! taps sum to exactly `1 << 16`, so constant regions survive the truncating
//! 8-bit store unchanged.
use log::debug;

/// Largest supported kernel length.
pub const MAX_KERNEL_SIZE: usize = 15;
/// Fractional bits of the fixed-point taps.
pub const FIXED_SHIFT: u32 = 16;
const FIXED_ONE: u32 = 1 << FIXED_SHIFT;

/// Kernel length for `sigma`: `odd(clamp(ceil(3σ), 1, 15))`.
pub fn kernel_size(sigma: f64) -> usize {
    let size = (3.0 * sigma).ceil().clamp(1.0, MAX_KERNEL_SIZE as f64) as usize;
    if size % 2 == 0 {
        size + 1
    } else {
        size
    }
}

/// Normalized, symmetric 1D Gaussian of odd length.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    sigma: f64,
    weights: Vec<f32>,
    fixed: Vec<u32>,
}

impl GaussianKernel {
    pub fn new(sigma: f64) -> Self {
        let size = kernel_size(sigma);
        let half = (size / 2) as i64;
        let denom = 2.0 * sigma * sigma;
        let raw: Vec<f64> = (-half..=half)
            .map(|i| (-((i * i) as f64) / denom).exp())
            .collect();
        let sum: f64 = raw.iter().sum();
        let weights: Vec<f32> = raw.iter().map(|&v| (v / sum) as f32).collect();

        let mut fixed: Vec<u32> = raw
            .iter()
            .map(|&v| (v / sum * f64::from(FIXED_ONE)).round() as u32)
            .collect();
        let total: i64 = fixed.iter().map(|&t| i64::from(t)).sum();
        let centre = size / 2;
        // centre tap is the largest one, it absorbs the rounding residue
        fixed[centre] = (i64::from(fixed[centre]) + i64::from(FIXED_ONE) - total) as u32;

        Self {
            sigma,
            weights,
            fixed,
        }
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Half width `r`, the kernel covers `[-r, r]`.
    pub fn radius(&self) -> usize {
        self.weights.len() / 2
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn fixed_taps(&self) -> &[u32] {
        &self.fixed
    }
}

/// Holds the kernel for the last sigma seen; rebuilt only when sigma changes.
#[derive(Debug, Default)]
pub struct KernelCache {
    kernel: Option<GaussianKernel>,
    builds: usize,
}

impl KernelCache {
    pub fn ensure(&mut self, sigma: f64) -> &GaussianKernel {
        if self.kernel.as_ref().is_some_and(|k| k.sigma != sigma) {
            self.kernel = None;
        }
        let builds = &mut self.builds;
        self.kernel.get_or_insert_with(|| {
            *builds += 1;
            let kernel = GaussianKernel::new(sigma);
            debug!(
                "KernelCache: built gaussian kernel sigma={sigma} taps={}",
                kernel.len()
            );
            kernel
        })
    }

    pub fn current(&self) -> Option<&GaussianKernel> {
        self.kernel.as_ref()
    }

    /// Number of kernel constructions so far.
    pub fn builds(&self) -> usize {
        self.builds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_odd_and_clamped() {
        assert_eq!(kernel_size(2.0), 7);
        assert_eq!(kernel_size(1.0), 3);
        assert_eq!(kernel_size(0.1), 1);
        assert_eq!(kernel_size(4.5), 15);
        assert_eq!(kernel_size(40.0), 15);
        for i in 1..100 {
            let k = kernel_size(i as f64 * 0.07);
            assert_eq!(k % 2, 1);
            assert!((1..=MAX_KERNEL_SIZE).contains(&k));
        }
    }

    #[test]
    fn kernel_is_symmetric_and_normalized() {
        for &sigma in &[0.3, 0.8, 1.0, 2.0, 3.3, 6.0] {
            let kernel = GaussianKernel::new(sigma);
            let w = kernel.weights();
            assert_eq!(w.len() % 2, 1);
            for i in 0..w.len() / 2 {
                assert!((w[i] - w[w.len() - 1 - i]).abs() < 1e-6);
            }
            let sum: f32 = w.iter().sum();
            assert!((sum - 1.0).abs() < 1e-3, "sigma={sigma} sum={sum}");
            let fixed_sum: u32 = kernel.fixed_taps().iter().sum();
            assert_eq!(fixed_sum, FIXED_ONE);
        }
    }

    #[test]
    fn cache_rebuilds_only_on_sigma_change() {
        let mut cache = KernelCache::default();
        assert_eq!(cache.ensure(2.0).len(), 7);
        cache.ensure(2.0);
        assert_eq!(cache.builds(), 1);
        cache.ensure(1.0);
        assert_eq!(cache.builds(), 2);
        assert_eq!(cache.current().map(GaussianKernel::len), Some(3));
    }
}
