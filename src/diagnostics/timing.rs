use serde::Serialize;
use std::time::Instant;

/// Timed step of the line pipeline, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Smooth,
    Gradient,
    Nms,
    Vote,
    Peaks,
    Raster,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Smooth,
        Stage::Gradient,
        Stage::Nms,
        Stage::Vote,
        Stage::Peaks,
        Stage::Raster,
    ];

    /// Stages run by the edge detector; the rest belong to the Hough transform.
    pub fn is_edge_stage(self) -> bool {
        matches!(self, Stage::Smooth | Stage::Gradient | Stage::Nms)
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: Stage,
    pub elapsed_ms: f64,
}

/// Wall time of one frame: the total plus one entry per executed stage.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn stage_ms(&self, stage: Stage) -> Option<f64> {
        self.stages
            .iter()
            .find(|t| t.stage == stage)
            .map(|t| t.elapsed_ms)
    }

    /// Time spent in smoothing, gradient and suppression.
    pub fn edge_ms(&self) -> f64 {
        self.sum_where(Stage::is_edge_stage)
    }

    /// Time spent in voting, peak extraction and rasterization.
    pub fn hough_ms(&self) -> f64 {
        self.sum_where(|s| !s.is_edge_stage())
    }

    fn sum_where(&self, keep: impl Fn(Stage) -> bool) -> f64 {
        self.stages
            .iter()
            .filter(|t| keep(t.stage))
            .map(|t| t.elapsed_ms)
            .sum()
    }
}

pub(crate) fn record_stage(
    timings: &mut Option<&mut TimingBreakdown>,
    stage: Stage,
    start: Instant,
) {
    if let Some(t) = timings.as_deref_mut() {
        t.stages.push(StageTiming {
            stage,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(ms: [f64; 6]) -> TimingBreakdown {
        TimingBreakdown {
            total_ms: ms.iter().sum(),
            stages: Stage::ALL
                .iter()
                .zip(ms)
                .map(|(&stage, elapsed_ms)| StageTiming { stage, elapsed_ms })
                .collect(),
        }
    }

    #[test]
    fn splits_edge_and_hough_time() {
        let t = breakdown([1.0, 2.0, 0.5, 4.0, 0.25, 0.25]);
        assert_eq!(t.edge_ms(), 3.5);
        assert_eq!(t.hough_ms(), 4.5);
        assert_eq!(t.stage_ms(Stage::Vote), Some(4.0));
        assert_eq!(TimingBreakdown::default().stage_ms(Stage::Nms), None);
    }

    #[test]
    fn stage_names_serialize_lowercase() {
        let json = serde_json::to_value(breakdown([0.0; 6])).unwrap();
        let names: Vec<&str> = json["stages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["stage"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["smooth", "gradient", "nms", "vote", "peaks", "raster"]);
        assert!(json["stages"][0]["elapsedMs"].is_number());
    }
}
