mod config;
mod keycolors;
mod latency;
mod report;
mod results;
mod stats;

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use config::TestOptions;
use report::log_info;
use results::{Suite, TestResult};

struct Args {
    inputs: Vec<PathBuf>,
    test_config: Option<PathBuf>,
    output: Option<PathBuf>,
    name: String,
    print_browsertime_args: bool,
}

fn usage() -> ! {
    eprintln!(
        "Usage: vidlat [--test-config <path>] [--output <path>] [--name <suite>] [--print-browsertime-args] <browsertime-result.json>..."
    );
    process::exit(1);
}

fn parse_args(args: &[String]) -> Args {
    let mut parsed = Args {
        inputs: Vec::new(),
        test_config: None,
        output: None,
        name: "video-playback-latency".to_string(),
        print_browsertime_args: false,
    };

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--test-config" => {
                if let Some(value) = args.get(index + 1) {
                    parsed.test_config = Some(PathBuf::from(value));
                    index += 2;
                    continue;
                }
                eprintln!("Missing value for --test-config");
                process::exit(1);
            }
            "--output" => {
                if let Some(value) = args.get(index + 1) {
                    parsed.output = Some(PathBuf::from(value));
                    index += 2;
                    continue;
                }
                eprintln!("Missing value for --output");
                process::exit(1);
            }
            "--name" => {
                if let Some(value) = args.get(index + 1) {
                    parsed.name = value.clone();
                    index += 2;
                    continue;
                }
                eprintln!("Missing value for --name");
                process::exit(1);
            }
            "--print-browsertime-args" => {
                parsed.print_browsertime_args = true;
                index += 1;
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
            _ => {
                parsed.inputs.push(PathBuf::from(&args[index]));
                index += 1;
            }
        }
    }

    parsed
}

fn main() -> Result<()> {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    if raw_args.is_empty() {
        usage();
    }
    let args = parse_args(&raw_args);

    let test = match &args.test_config {
        Some(path) => TestOptions::from_file(path)?,
        None => TestOptions::default(),
    };

    if args.print_browsertime_args {
        let mut cmd = Vec::new();
        keycolors::modify_command(&mut cmd, &test);
        for token in cmd {
            println!("{}", token);
        }
        return Ok(());
    }

    if args.inputs.is_empty() {
        usage();
    }

    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{msg} {spinner:.green}").unwrap());

    let mut batches = Vec::new();
    for path in &args.inputs {
        bar.set_message(format!("{:>28}: {}", "Reading".bold(), path.display()));
        bar.tick();

        let raw =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        batches.extend(
            results::parse_results(&raw).with_context(|| format!("parsing {}", path.display()))?,
        );
    }
    bar.finish_and_clear();

    let mut aggregate = TestResult::default();
    let last = batches.len().saturating_sub(1);
    for (index, batch) in batches.iter().enumerate() {
        latency::handle_result(&mut aggregate, batch, &test, index == last);
    }

    let mut suite = Suite::new(&args.name);
    latency::summarize_test(&aggregate, &test, &mut suite);

    log_info("Suite", &format!("{} ({})", suite.name, suite.kind));
    for subtest in &suite.subtests {
        report::log_subtest(subtest);
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&suite)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log_info("Report", &path.display().to_string());
    }

    Ok(())
}
