//! Run-report export
//!
//! Serializes the current run's data to the JSON shape
//! `{algorithm, arraySize, comparisons, swaps, steps, array, timestamp}`.

use crate::controller::RunController;
use crate::engine::Algorithm;
use chrono::Utc;
use serde::Serialize;

/// Snapshot of one run's outcome, ready for JSON export
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub algorithm: Option<&'static str>,
    pub array_size: usize,
    pub comparisons: u64,
    pub swaps: u64,
    pub steps: u64,
    pub array: Vec<u32>,
    /// RFC 3339 capture time
    pub timestamp: String,
}

impl RunReport {
    /// Capture the controller's current sequence and statistics
    pub fn capture(controller: &RunController) -> Self {
        let frame = controller.frame();
        RunReport {
            algorithm: controller.selected().map(Algorithm::key),
            array_size: frame.values.len(),
            comparisons: frame.stats.comparisons,
            swaps: frame.stats.swaps,
            steps: frame.stats.steps,
            array: frame.values,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// File name in the `sort-data-<algorithm>-<millis>.json` convention
    pub fn suggested_filename(&self) -> String {
        format!(
            "sort-data-{}-{}.json",
            self.algorithm.unwrap_or("none"),
            Utc::now().timestamp_millis()
        )
    }
}
