use crate::diagnostics::TimingBreakdown;
use crate::types::HoughLine;
use serde::Serialize;

/// Result produced by [`LineDetector::process`](crate::LineDetector::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub input: InputDescriptor,
    /// Nonzero pixels of the edge map.
    pub edge_pixels: usize,
    /// Lines found in this frame, strongest first.
    pub lines: Vec<LineReport>,
    pub cache: CacheStats,
    pub timings: TimingBreakdown,
}

impl DetectionReport {
    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        let best = self
            .lines
            .first()
            .map(|l| format!("{} votes @ rho={:.1} theta={:.1}°", l.votes, l.rho, l.theta_deg))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{}x{} roi@{} edges={} lines={} best={} total={:.2}ms (edges {:.2}ms, hough {:.2}ms)",
            self.input.width,
            self.input.height,
            self.input.roi_start_row,
            self.edge_pixels,
            self.lines.len(),
            best,
            self.timings.total_ms,
            self.timings.edge_ms(),
            self.timings.hough_ms()
        )
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    /// First processed row after resolving the region of interest.
    pub roi_start_row: usize,
}

/// Serialized form of a detected line with the angle in both units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReport {
    pub votes: u32,
    pub rho: f64,
    pub theta: f64,
    pub theta_deg: f64,
}

impl From<&HoughLine> for LineReport {
    fn from(line: &HoughLine) -> Self {
        Self {
            votes: line.votes,
            rho: line.rho,
            theta: line.theta,
            theta_deg: line.theta_deg(),
        }
    }
}

/// Cumulative rebuild/allocation counters of every cache in the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub kernel_builds: usize,
    pub trig_builds: usize,
    pub rho_axis_builds: usize,
    pub accumulator_allocations: usize,
    /// Edge buffers plus the line frame.
    pub buffer_allocations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_camel_case() {
        let report = DetectionReport {
            input: InputDescriptor {
                width: 64,
                height: 48,
                roi_start_row: 23,
            },
            edge_pixels: 12,
            lines: vec![LineReport::from(&HoughLine {
                votes: 60,
                rho: 10.0,
                theta: std::f64::consts::FRAC_PI_4,
            })],
            cache: CacheStats::default(),
            timings: TimingBreakdown {
                total_ms: 1.5,
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["input"]["roiStartRow"], 23);
        assert_eq!(json["edgePixels"], 12);
        assert_eq!(json["lines"][0]["votes"], 60);
        assert!((json["lines"][0]["thetaDeg"].as_f64().unwrap() - 45.0).abs() < 1e-9);
        assert_eq!(json["cache"]["kernelBuilds"], 0);
        assert_eq!(json["timings"]["totalMs"], 1.5);
        assert!(report.summary().contains("lines=1"));
    }
}
