use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestOptions {
    pub unit: Option<String>,
    pub subtest_unit: Option<String>,
    pub lower_is_better: Option<bool>,
    pub alert_threshold: Option<f64>,
    pub fps: Option<f64>,
    pub playback_duration_ms: Option<f64>,
}

impl TestOptions {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading test config {}", path.display()))?;
        let options = serde_json::from_str(&raw)
            .with_context(|| format!("parsing test config {}", path.display()))?;
        Ok(options)
    }

    pub fn subtest_unit(&self) -> &str {
        self.subtest_unit
            .as_deref()
            .or(self.unit.as_deref())
            .unwrap_or("ms")
    }

    pub fn lower_is_better(&self) -> bool {
        self.lower_is_better.unwrap_or(true)
    }

    pub fn alert_threshold(&self) -> f64 {
        self.alert_threshold.unwrap_or(2.0)
    }

    pub fn fps(&self) -> f64 {
        self.fps.unwrap_or(30.0)
    }

    pub fn fps_override(&self) -> Option<f64> {
        self.fps
    }

    pub fn playback_duration_ms(&self) -> f64 {
        self.playback_duration_ms.unwrap_or(1000.0)
    }
}

// Expected milestone timestamps under ideal playback. The poster is visible
// from the start and has no offset, so it never yields a latency estimate.
pub struct Offsets {
    frame_duration_ms: f64,
    total_duration_ms: f64,
}

impl Offsets {
    pub fn from_options(test: &TestOptions) -> Self {
        Offsets {
            frame_duration_ms: 1000.0 / test.fps(),
            total_duration_ms: test.playback_duration_ms(),
        }
    }

    pub fn for_label(&self, label: &str) -> Option<f64> {
        match label {
            "firstFrame" | "posterEnd" => Some(0.0),
            "secondFrame" => Some(self.frame_duration_ms * 2.0),
            "lastFrame" => Some(self.total_duration_ms - self.frame_duration_ms),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_harness_conventions() {
        let test = TestOptions::default();
        assert_eq!(test.subtest_unit(), "ms");
        assert!(test.lower_is_better());
        assert_eq!(test.alert_threshold(), 2.0);
        assert_eq!(test.fps(), 30.0);
        assert_eq!(test.playback_duration_ms(), 1000.0);
        assert!(test.fps_override().is_none());
    }

    #[test]
    fn subtest_unit_wins_over_test_unit() {
        let test: TestOptions =
            serde_json::from_str(r#"{"unit": "score", "subtest_unit": "frames"}"#).unwrap();
        assert_eq!(test.subtest_unit(), "frames");

        let test: TestOptions = serde_json::from_str(r#"{"unit": "score"}"#).unwrap();
        assert_eq!(test.subtest_unit(), "score");
    }

    #[test]
    fn offsets_derive_from_frame_rate_and_duration() {
        let offsets = Offsets::from_options(&TestOptions::default());
        assert_eq!(offsets.for_label("firstFrame"), Some(0.0));
        assert_eq!(offsets.for_label("posterEnd"), Some(0.0));
        let second = offsets.for_label("secondFrame").unwrap();
        assert!((second - 66.66666666666667).abs() < 1e-9);
        let last = offsets.for_label("lastFrame").unwrap();
        assert!((last - 966.6666666666666).abs() < 1e-9);
    }

    #[test]
    fn poster_has_no_offset() {
        let offsets = Offsets::from_options(&TestOptions::default());
        assert_eq!(offsets.for_label("poster"), None);
        assert_eq!(offsets.for_label("unknown"), None);
    }
}
