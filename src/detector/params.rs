//! Parameter types configuring the detector stages.
//!
//! All keys deserialize in camelCase, and every field has a default, so a
//! JSON config only needs to mention the knobs it changes:
//!
//! ```json
//! { "edge": { "sigma": 1.5 }, "hough": { "numberOfLines": 3 }, "regionOfInterest": "lowerHalf" }
//! ```

use crate::edges::EdgeParams;
use crate::error::Result;
use crate::hough::HoughParams;
use crate::types::RegionOfInterest;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters for the edge → Hough pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineDetectorParams {
    /// Smoothing and double-threshold settings.
    pub edge: EdgeParams,
    /// Angle/rho discretization and peak selection.
    pub hough: HoughParams,
    /// Rows excluded from every stage.
    pub region_of_interest: RegionOfInterest,
}

impl LineDetectorParams {
    pub fn validate(&self) -> Result<()> {
        self.edge.validate()?;
        self.hough.validate()
    }
}
