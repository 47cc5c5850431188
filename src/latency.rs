use indexmap::IndexMap;

use crate::config::{Offsets, TestOptions};
use crate::keycolors::{
    ESTIMATED_ANY_FRAME_LATENCY, ESTIMATED_FIRST_FRAME_LATENCY, FIRST_FRAME_PRIORITY,
    TRACKED_METRICS,
};
use crate::report;
use crate::results::{BrowsertimeResult, Subtest, Suite, TestResult};
use crate::stats;

pub fn handle_result(
    aggregate: &mut TestResult,
    raw: &BrowsertimeResult,
    test: &TestOptions,
    is_last: bool,
) {
    let offsets = Offsets::from_options(test);

    for cycle in &raw.visual_metrics {
        // Key frame start times for this cycle; only the earliest detection
        // per label counts. The poster's disappearance is its own milestone.
        let mut measurement: IndexMap<&str, f64> = IndexMap::new();
        for (label, frames) in &cycle.key_color_frames {
            if !TRACKED_METRICS.contains(&label.as_str()) || frames.is_empty() {
                continue;
            }
            measurement.insert(label.as_str(), frames[0].start_timestamp);
            if label == "poster" {
                measurement.insert("posterEnd", frames[0].end_timestamp);
            }
        }

        // First milestone with a positive latency wins; a milestone that fired
        // at or before its expected time does not end the scan.
        for label in FIRST_FRAME_PRIORITY {
            if let Some(value) = measurement.get(label) {
                let normalized = *value - offsets.for_label(label).unwrap_or(0.0);
                if normalized > 0.0 {
                    aggregate
                        .measurements
                        .entry(ESTIMATED_FIRST_FRAME_LATENCY.to_string())
                        .or_default()
                        .push(normalized);
                    break;
                }
            }
        }

        for (label, value) in &measurement {
            aggregate
                .measurements
                .entry((*label).to_string())
                .or_default()
                .push(*value);

            if let Some(offset) = offsets.for_label(label) {
                let normalized = *value - offset;
                if normalized > 0.0 {
                    aggregate
                        .measurements
                        .entry(ESTIMATED_ANY_FRAME_LATENCY.to_string())
                        .or_default()
                        .push(normalized);
                }
            }
        }
    }

    if is_last {
        report::log_replicate_counts(aggregate);
    }
}

pub fn build_subtest(name: &str, replicates: &[f64], test: &TestOptions) -> Subtest {
    Subtest {
        name: name.to_string(),
        lower_is_better: test.lower_is_better(),
        alert_threshold: test.alert_threshold(),
        unit: test.subtest_unit().to_string(),
        replicates: replicates.to_vec(),
        value: stats::round3(stats::geometric_mean(replicates)),
    }
}

pub fn summarize_test(test_result: &TestResult, test: &TestOptions, suite: &mut Suite) {
    suite.kind = "pageload".to_string();

    for (name, replicates) in &test_result.measurements {
        if replicates.is_empty() {
            continue;
        }
        suite.subtests.push(build_subtest(name, replicates, test));
    }

    suite.subtests.sort_by(|a, b| a.name.cmp(&b.name));
}
