use log::{debug, info, warn};

use polling_stats::schema::HeaderPolicy;
use polling_stats::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::polls::config_reader::*;
use crate::polls::io_lines::*;
use crate::polls::report::*;

pub mod config_reader;
pub mod io_lines;
pub mod report;

/// The file read when no input is given.
pub const DEFAULT_INPUT_FILE: &str = "polling_data.csv";

#[derive(Debug, Snafu)]
pub enum PollError {
    #[snafu(display("Error reading poll file {path}: {source}"))]
    FileAccess {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error analyzing polls from {path}: {source}"))]
    Analysis {
        source: PollingErrors,
        path: String,
    },
    #[snafu(display("Error opening file {path}: {source}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON file {path}: {source}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error serializing the summary: {source}"))]
    SerializingJson { source: serde_json::Error },
    #[snafu(display("Error writing summary {path}: {source}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("The configuration file {path} has no parent directory"))]
    MissingParentDir { path: String },
    #[snafu(display("Difference detected between the computed summary and the reference {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type PollResult<T> = Result<T, PollError>;

/// Everything needed for one run, once the command line and the configuration are merged.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RunSettings {
    pub input: PathBuf,
    pub header_policy: HeaderPolicy,
    pub rules: AnalysisRules,
    pub title: Option<String>,
    pub out: Option<String>,
    pub reference: Option<String>,
}

/// Merges the command line with the optional configuration file.
///
/// Command line options take precedence. Paths in the configuration file are
/// relative to the directory of the configuration file.
pub fn build_settings(args: &Args) -> PollResult<RunSettings> {
    let (config, config_dir) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let dir = Path::new(config_path.as_str())
                .parent()
                .context(MissingParentDirSnafu {
                    path: config_path.clone(),
                })?
                .to_path_buf();
            (Some(config), dir)
        }
        None => (None, PathBuf::from(".")),
    };

    let input = match (&args.input, &config) {
        (Some(p), _) => PathBuf::from(p),
        (None, Some(c)) => resolve_path(&config_dir, &c.input_file),
        (None, None) => PathBuf::from(DEFAULT_INPUT_FILE),
    };

    let config_rules = config.as_ref().map(|c| c.rules.clone()).unwrap_or_default();
    let rules = PollRules {
        likely_voter_code: args
            .likely_voter_code
            .clone()
            .or(config_rules.likely_voter_code),
        history_window: args.history_window.or(config_rules.history_window),
    }
    .analysis_rules()?;

    let strict_header =
        args.strict_header || config.as_ref().and_then(|c| c.strict_header).unwrap_or(false);
    let header_policy = if strict_header {
        HeaderPolicy::Verify
    } else {
        HeaderPolicy::Skip
    };

    let out = match (&args.out, &config) {
        (Some(o), _) => Some(o.clone()),
        (None, Some(c)) => c
            .output_settings
            .output_file
            .as_ref()
            .map(|o| resolve_path(&config_dir, o).display().to_string()),
        (None, None) => None,
    };

    Ok(RunSettings {
        input,
        header_policy,
        rules,
        title: config.and_then(|c| c.output_settings.title),
        out,
        reference: args.reference.clone(),
    })
}

/// Reads the polls and computes the statistics, without printing anything.
pub fn analyze_file(
    input: &Path,
    policy: HeaderPolicy,
    rules: &AnalysisRules,
) -> PollResult<PollingSummary> {
    let path = input.display().to_string();
    let lines = read_lines(input)?;
    let dataset = parse_with_policy(&lines, policy).context(AnalysisSnafu { path: path.clone() })?;
    run_polling_stats(&dataset, rules).context(AnalysisSnafu { path })
}

fn write_summary(out: &str, pretty_js: &str) -> PollResult<()> {
    if out == "stdout" {
        println!("{}", pretty_js);
    } else {
        info!("Writing summary to {:?}", out);
        fs::write(out, pretty_js).context(WritingOutputSnafu { path: out })?;
    }
    Ok(())
}

fn check_reference(reference: &str, pretty_js: &str) -> PollResult<()> {
    let summary_ref = read_summary(reference)?;
    let pretty_js_ref = serde_json::to_string_pretty(&summary_ref).context(SerializingJsonSnafu {})?;
    if pretty_js_ref != pretty_js {
        warn!("Found differences with the reference summary {}", reference);
        print_diff(pretty_js_ref.as_str(), pretty_js, "\n");
        return ReferenceMismatchSnafu { path: reference }.fail();
    }
    info!("The summary matches the reference {}", reference);
    Ok(())
}

/// Runs a full analysis: reads the polls, prints the report, and writes or
/// checks the JSON summary.
///
/// Nothing is printed if any of the statistics fails.
pub fn run_analysis(settings: &RunSettings) -> PollResult<()> {
    info!("settings: {:?}", settings);
    let summary = analyze_file(&settings.input, settings.header_policy, &settings.rules)?;
    debug!("summary: {:?}", summary);

    println!("{}", build_report(&summary));

    let result_js = build_summary_js(settings.title.as_deref(), &summary);
    let pretty_js = serde_json::to_string_pretty(&result_js).context(SerializingJsonSnafu {})?;

    if let Some(out) = &settings.out {
        write_summary(out, &pretty_js)?;
    }

    if let Some(reference) = &settings.reference {
        check_reference(reference, &pretty_js)?;
    }

    Ok(())
}
