//! Diagnostics data model returned by the detector and written by the demo.
//!
//! `DetectionReport` is the main entry point: input geometry, edge and line
//! results, cache counters and a per-stage `TimingBreakdown`.

pub mod pipeline;
pub mod timing;

pub use pipeline::{CacheStats, DetectionReport, InputDescriptor, LineReport};
pub use timing::{Stage, StageTiming, TimingBreakdown};
