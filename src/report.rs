use colored::*;

use crate::results::{Subtest, TestResult};
use crate::stats;

pub struct ReplicateSummary {
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
    pub low: f64,
    pub high: f64,
}

pub fn summarize_replicates(replicates: &[f64]) -> ReplicateSummary {
    let len = replicates.len();
    let mean = stats::average(replicates);
    let p95 = stats::quartile(&mut replicates.to_vec(), 0.95);

    let mut sorted = replicates.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let median = sorted[len / 2];
    let low = sorted[0];
    let high = *sorted.last().unwrap();

    ReplicateSummary {
        mean,
        median,
        p95,
        low,
        high,
    }
}

pub fn log_info(label: &str, message: &str) {
    println!("{:>28}: {}", label.bold(), message);
}

pub fn log_subtest(subtest: &Subtest) {
    let spread = summarize_replicates(&subtest.replicates);
    println!(
        "{:>28}: {} {} (replicates: {}, mean: {}, median: {}, p95: {}, low: {}, high: {})",
        subtest.name.bold(),
        format!("{:.3}", subtest.value).magenta(),
        subtest.unit,
        subtest.replicates.len(),
        format!("{:.2}", spread.mean).magenta(),
        format!("{:.2}", spread.median).magenta(),
        format!("{:.2}", spread.p95).magenta(),
        format!("{:.2}", spread.low).magenta(),
        format!("{:.2}", spread.high).magenta(),
    );
}

pub fn log_replicate_counts(aggregate: &TestResult) {
    let counts = aggregate
        .measurements
        .iter()
        .map(|(name, replicates)| format!("{} x{}", name, replicates.len()))
        .collect::<Vec<_>>()
        .join(", ");
    log_info("Replicates", &counts);
}
