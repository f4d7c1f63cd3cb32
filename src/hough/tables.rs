//! Lookup tables for Hough voting, rebuilt only when their inputs change.
//!
//! - [`TrigTables`]: theta (radians), cos and sin per theta bin. Depends on
//!   the angle range and step only.
//! - [`RhoAxis`]: rho bins spanning `[-diag, diag]`. Depends on the frame
//!   size and the rho step only.
use super::options::HoughParams;
use log::debug;

/// Number of theta bins `min + i·step` with `i = 0..=floor((max - min) / step)`.
///
/// Saturates instead of overflowing; validated parameters stay far below that.
pub fn theta_bin_count(min_theta: f64, max_theta: f64, angle_step: f64) -> usize {
    let span = ((max_theta - min_theta) / angle_step + 1e-9).floor();
    (span as usize).saturating_add(1)
}

/// Number of rho bins spanning `[-diag, diag]`, as f64 so callers can bound it
/// before allocating.
pub fn rho_bin_count(width: usize, height: usize, rho_step: f64) -> f64 {
    let diag = ((width * width + height * height) as f64).sqrt();
    (2.0 * diag / rho_step + 1e-9).floor() + 1.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct AngleRange {
    min_theta: f64,
    max_theta: f64,
    angle_step: f64,
}

/// Per-theta-bin angle, cosine and sine.
#[derive(Debug, Default)]
pub struct TrigTables {
    range: Option<AngleRange>,
    thetas: Vec<f64>,
    cos: Vec<f64>,
    sin: Vec<f64>,
    builds: usize,
}

impl TrigTables {
    /// Rebuild if the angle range or step differ from the cached ones.
    /// Returns `true` when the tables were rebuilt.
    pub fn ensure(&mut self, params: &HoughParams) -> bool {
        let range = AngleRange {
            min_theta: params.min_theta,
            max_theta: params.max_theta,
            angle_step: params.angle_step,
        };
        if self.range == Some(range) {
            return false;
        }
        let bins = theta_bin_count(range.min_theta, range.max_theta, range.angle_step);
        self.thetas.clear();
        self.cos.clear();
        self.sin.clear();
        for i in 0..bins {
            let rad = (range.min_theta + i as f64 * range.angle_step).to_radians();
            self.thetas.push(rad);
            self.cos.push(rad.cos());
            self.sin.push(rad.sin());
        }
        self.range = Some(range);
        self.builds += 1;
        debug!(
            "TrigTables: rebuilt {} theta bins over [{}, {}] step {}",
            bins, range.min_theta, range.max_theta, range.angle_step
        );
        true
    }

    pub fn len(&self) -> usize {
        self.thetas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thetas.is_empty()
    }

    pub fn thetas(&self) -> &[f64] {
        &self.thetas
    }

    pub fn cos(&self) -> &[f64] {
        &self.cos
    }

    pub fn sin(&self) -> &[f64] {
        &self.sin
    }

    pub fn builds(&self) -> usize {
        self.builds
    }
}

/// Discretized rho axis for a given frame size.
#[derive(Debug, Default)]
pub struct RhoAxis {
    key: Option<(usize, usize, f64)>,
    rho_min: f64,
    step: f64,
    bins: usize,
    builds: usize,
}

impl RhoAxis {
    /// Rebuild if the frame size or rho step changed. Returns `true` on rebuild.
    pub fn ensure(&mut self, width: usize, height: usize, rho_step: f64) -> bool {
        let key = (width, height, rho_step);
        if self.key == Some(key) {
            return false;
        }
        let diag = ((width * width + height * height) as f64).sqrt();
        self.rho_min = -diag;
        self.step = rho_step;
        self.bins = rho_bin_count(width, height, rho_step) as usize;
        self.key = Some(key);
        self.builds += 1;
        debug!(
            "RhoAxis: {} bins over [-{diag:.2}, {diag:.2}] step {rho_step} for {width}x{height}",
            self.bins
        );
        true
    }

    /// Bin of `rho`, i.e. `round((rho - rho_min) / step)`, or `None` when out of range.
    #[inline]
    pub fn index(&self, rho: f64) -> Option<usize> {
        let idx = ((rho - self.rho_min) / self.step).round();
        if idx < 0.0 || idx >= self.bins as f64 {
            None
        } else {
            Some(idx as usize)
        }
    }

    /// Rho value at the centre of bin `idx`.
    #[inline]
    pub fn rho(&self, idx: usize) -> f64 {
        self.rho_min + idx as f64 * self.step
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn rho_min(&self) -> f64 {
        self.rho_min
    }

    pub fn builds(&self) -> usize {
        self.builds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_includes_both_ends() {
        let mut tables = TrigTables::default();
        assert!(tables.ensure(&HoughParams::default()));
        assert_eq!(tables.len(), 181);
        assert!((tables.thetas()[0] + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((tables.thetas()[180] - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((tables.cos()[90] - 1.0).abs() < 1e-12);
        assert!(!tables.ensure(&HoughParams::default()));
        assert_eq!(tables.builds(), 1);
    }

    #[test]
    fn trig_rebuilds_on_step_change() {
        let mut tables = TrigTables::default();
        tables.ensure(&HoughParams::default());
        let coarse = HoughParams {
            angle_step: 2.0,
            ..Default::default()
        };
        assert!(tables.ensure(&coarse));
        assert_eq!(tables.len(), 91);
        assert_eq!(tables.builds(), 2);
    }

    #[test]
    fn rho_axis_spans_diagonal() {
        let mut axis = RhoAxis::default();
        assert!(axis.ensure(3, 4, 1.0));
        assert_eq!(axis.bins(), 11);
        assert_eq!(axis.index(-5.0), Some(0));
        assert_eq!(axis.index(0.0), Some(5));
        assert_eq!(axis.index(5.0), Some(10));
        assert_eq!(axis.index(5.6), None);
        assert_eq!(axis.index(-5.6), None);
        assert!((axis.rho(5)).abs() < 1e-12);
        assert!(!axis.ensure(3, 4, 1.0));
        assert!(axis.ensure(4, 3, 1.0));
        assert_eq!(axis.builds(), 2);
    }
}
