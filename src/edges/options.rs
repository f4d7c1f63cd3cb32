use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters of the edge extraction stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeParams {
    /// Gaussian smoothing width; the kernel spans `odd(clamp(ceil(3σ), 1, 15))` taps.
    pub sigma: f64,
    /// Magnitudes at or above this value are kept even when not a local maximum.
    pub high_threshold: f32,
    /// Magnitudes below this value are always discarded.
    pub low_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            sigma: 2.0,
            high_threshold: 150.0,
            low_threshold: 100.0,
        }
    }
}

impl EdgeParams {
    pub fn validate(&self) -> Result<()> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "sigma must be positive and finite, got {}",
                self.sigma
            )));
        }
        if !self.low_threshold.is_finite() || !self.high_threshold.is_finite() {
            return Err(Error::InvalidConfig(
                "edge thresholds must be finite".to_string(),
            ));
        }
        if self.low_threshold > self.high_threshold {
            return Err(Error::InvalidConfig(format!(
                "lowThreshold ({}) exceeds highThreshold ({})",
                self.low_threshold, self.high_threshold
            )));
        }
        Ok(())
    }
}
