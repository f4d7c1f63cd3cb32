use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on theta bins.
pub const MAX_THETA_BINS: usize = 100_000;
/// Smallest accepted rho step, in pixels.
pub const MIN_RHO_STEP: f64 = 0.01;
/// Upper bound on the retained strongest-lines list.
pub const MAX_NUMBER_OF_LINES: usize = 1024;
/// Upper bound on `rho bins × theta bins` for a given frame size.
pub const MAX_ACCUMULATOR_CELLS: usize = 1 << 26;

/// Parameters of the Hough voting and peak extraction stages.
///
/// Angles are in degrees; `rho_step` is in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoughParams {
    pub min_theta: f64,
    pub max_theta: f64,
    pub angle_step: f64,
    pub rho_step: f64,
    /// Minimum votes for an accumulator cell to qualify as a line.
    pub line_vote_threshold: u32,
    /// Capacity of the retained strongest-lines list.
    pub number_of_lines: usize,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            min_theta: -90.0,
            max_theta: 90.0,
            angle_step: 1.0,
            rho_step: 1.0,
            line_vote_threshold: 50,
            number_of_lines: 5,
        }
    }
}

impl HoughParams {
    pub fn validate(&self) -> Result<()> {
        if !self.angle_step.is_finite() || self.angle_step <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "angleStep must be positive, got {}",
                self.angle_step
            )));
        }
        if !self.rho_step.is_finite() || self.rho_step < MIN_RHO_STEP {
            return Err(Error::InvalidConfig(format!(
                "rhoStep must be at least {MIN_RHO_STEP}, got {}",
                self.rho_step
            )));
        }
        if !self.min_theta.is_finite()
            || !self.max_theta.is_finite()
            || self.max_theta < self.min_theta
        {
            return Err(Error::InvalidConfig(format!(
                "theta range [{}, {}] is empty or not finite",
                self.min_theta, self.max_theta
            )));
        }
        // counted in f64 so a huge span cannot overflow the cast
        let span = ((self.max_theta - self.min_theta) / self.angle_step + 1e-9).floor();
        if !span.is_finite() || span >= MAX_THETA_BINS as f64 {
            return Err(Error::InvalidConfig(format!(
                "theta range [{}, {}] step {} exceeds {MAX_THETA_BINS} bins",
                self.min_theta, self.max_theta, self.angle_step
            )));
        }
        if self.number_of_lines == 0 || self.number_of_lines > MAX_NUMBER_OF_LINES {
            return Err(Error::InvalidConfig(format!(
                "numberOfLines must be in 1..={MAX_NUMBER_OF_LINES}, got {}",
                self.number_of_lines
            )));
        }
        Ok(())
    }

    /// Check that the accumulator for a `width × height` frame stays within
    /// [`MAX_ACCUMULATOR_CELLS`].
    pub fn validate_for_frame(&self, width: usize, height: usize) -> Result<()> {
        let theta_bins =
            super::tables::theta_bin_count(self.min_theta, self.max_theta, self.angle_step);
        let rho_bins = super::tables::rho_bin_count(width, height, self.rho_step);
        let cells = rho_bins * theta_bins as f64;
        if !cells.is_finite() || cells > MAX_ACCUMULATOR_CELLS as f64 {
            return Err(Error::InvalidConfig(format!(
                "accumulator of {rho_bins} rho × {theta_bins} theta bins for {width}x{height} \
                 exceeds {MAX_ACCUMULATOR_CELLS} cells; raise rhoStep or angleStep"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{HoughParams, MAX_NUMBER_OF_LINES};
    use crate::error::Error;

    #[test]
    fn defaults_are_valid() {
        assert!(HoughParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_ranges() {
        let bad = [
            HoughParams {
                angle_step: 0.0,
                ..Default::default()
            },
            HoughParams {
                rho_step: -1.0,
                ..Default::default()
            },
            HoughParams {
                min_theta: 10.0,
                max_theta: -10.0,
                ..Default::default()
            },
            HoughParams {
                number_of_lines: 0,
                ..Default::default()
            },
            HoughParams {
                angle_step: 1e-6,
                ..Default::default()
            },
            HoughParams {
                rho_step: 1e-12,
                ..Default::default()
            },
            HoughParams {
                number_of_lines: MAX_NUMBER_OF_LINES + 1,
                ..Default::default()
            },
        ];
        for params in bad {
            assert!(params.validate().is_err(), "{params:?}");
        }
    }

    #[test]
    fn astronomical_theta_range_is_an_error_not_a_panic() {
        let params = HoughParams {
            min_theta: -1e308,
            max_theta: 1e308,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(Error::InvalidConfig(_))));

        let params = HoughParams {
            min_theta: -1e300,
            max_theta: 1e300,
            angle_step: 1e-300,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn accumulator_size_depends_on_frame() {
        let params = HoughParams {
            rho_step: 0.01,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        assert!(params.validate_for_frame(64, 64).is_ok());
        assert!(matches!(
            params.validate_for_frame(4000, 3000),
            Err(Error::InvalidConfig(_))
        ));
        assert!(HoughParams::default().validate_for_frame(3840, 2160).is_ok());
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let params: HoughParams =
            serde_json::from_str(r#"{"angleStep": 0.5, "numberOfLines": 3}"#).unwrap();
        assert_eq!(params.angle_step, 0.5);
        assert_eq!(params.number_of_lines, 3);
        assert_eq!(params.line_vote_threshold, 50);
        assert_eq!(params.min_theta, -90.0);
    }
}
