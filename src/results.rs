use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct BrowsertimeResult {
    #[serde(rename = "visualMetrics", default)]
    pub visual_metrics: Vec<VisualMetricsCycle>,
}

#[derive(Debug, Deserialize)]
pub struct VisualMetricsCycle {
    #[serde(rename = "KeyColorFrames", default)]
    pub key_color_frames: IndexMap<String, Vec<KeyColorFrame>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyColorFrame {
    pub start_timestamp: f64,
    pub end_timestamp: f64,
}

// Browsertime writes an array of per-URL results; some harnesses hand a
// single result object through instead. Accept both.
pub fn parse_results(raw: &str) -> Result<Vec<BrowsertimeResult>> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("parsing browsertime output")?;

    let results = if value.is_array() {
        serde_json::from_value(value).context("parsing browsertime result array")?
    } else {
        vec![serde_json::from_value(value).context("parsing browsertime result")?]
    };

    Ok(results)
}

#[derive(Debug, Default)]
pub struct TestResult {
    pub measurements: IndexMap<String, Vec<f64>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtest {
    pub name: String,
    pub lower_is_better: bool,
    pub alert_threshold: f64,
    pub unit: String,
    pub replicates: Vec<f64>,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct Suite {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtests: Vec<Subtest>,
}

impl Suite {
    pub fn new(name: &str) -> Self {
        Suite {
            name: name.to_string(),
            kind: String::new(),
            subtests: Vec::new(),
        }
    }
}
