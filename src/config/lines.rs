use crate::detector::LineDetectorParams;
use crate::error::Result;
use crate::image::io::list_frame_files;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `line_demo` tool.
///
/// ```json
/// {
///   "input": "frames/",
///   "detector": { "edge": { "sigma": 2.0 }, "regionOfInterest": "lowerHalf" },
///   "output": { "dir": "out/", "saveOverlay": true, "reportJson": "out/report.json" }
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineToolConfig {
    /// A single image or a directory whose images form the frame stream.
    pub input: PathBuf,
    #[serde(default)]
    pub detector: LineDetectorParams,
    pub output: LineOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineOutputConfig {
    pub dir: PathBuf,
    #[serde(default)]
    pub save_edges: bool,
    #[serde(default)]
    pub save_lines: bool,
    #[serde(default = "default_true")]
    pub save_overlay: bool,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl LineToolConfig {
    /// Input frames in processing order.
    pub fn frame_paths(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_dir() {
            list_frame_files(&self.input)
        } else {
            Ok(vec![self.input.clone()])
        }
    }
}

/// Read and validate a tool configuration.
pub fn load_config(path: &Path) -> Result<LineToolConfig> {
    let data = fs::read_to_string(path)?;
    let config: LineToolConfig = serde_json::from_str(&data)?;
    config.detector.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegionOfInterest;

    #[test]
    fn parses_minimal_config() {
        let json = r#"{ "input": "frame.png", "output": { "dir": "out" } }"#;
        let config: LineToolConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.input, PathBuf::from("frame.png"));
        assert!(config.output.save_overlay);
        assert!(!config.output.save_edges);
        assert!(config.output.report_json.is_none());
        assert_eq!(config.detector, LineDetectorParams::default());
        assert_eq!(config.frame_paths().unwrap(), vec![PathBuf::from("frame.png")]);
    }

    #[test]
    fn load_rejects_invalid_detector_params() {
        let dir = std::env::temp_dir().join(format!("line_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        fs::write(
            &path,
            r#"{ "input": "a.png", "detector": { "hough": { "angleStep": 0 } }, "output": { "dir": "o" } }"#,
        )
        .unwrap();
        assert!(load_config(&path).is_err());

        fs::write(
            &path,
            r#"{ "input": "a.png", "detector": { "regionOfInterest": "lowerHalf" }, "output": { "dir": "o" } }"#,
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.detector.region_of_interest, RegionOfInterest::LowerHalf);
        fs::remove_dir_all(&dir).ok();
    }
}
