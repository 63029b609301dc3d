/*!
Parsing and descriptive statistics for election polling records.

A polling file is parsed once into an immutable [Dataset]; the statistics are
pure functions over it:

```
use polling_stats::*;

let lines = vec![
    "month,date,sample,harris_result,trump_result",
    "Oct,15,1000 LV,0.5700,0.4500",
    "Oct,16,800 RV,0.4700,0.4900",
];
let dataset = parse(&lines)?;
let highest = highest_polling_candidate(&dataset)?;
assert_eq!(highest.leader.label(), "Harris");
assert_eq!(highest.value, 0.57);

let lv = likely_voter_polling_average(&dataset)?;
assert_eq!(lv.harris, 0.57);
# Ok::<(), PollingErrors>(())
```

See the [manual] for the input format.
*/

mod config;
use log::{debug, info};

pub mod builder;
pub mod manual;
pub mod parser;
pub mod schema;

pub use crate::config::*;
pub use crate::parser::{parse, parse_with_policy};

/// The polls of one input file, in file order.
///
/// Order matters: the history change compares the first and the last polls
/// by position, not by date.
#[derive(PartialEq, Debug, Clone)]
pub struct Dataset {
    pub(crate) records: Vec<PollRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PollRecord] {
        &self.records
    }

    /// The results of one candidate, in file order.
    pub fn results(&self, candidate: Candidate) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |r| r.result(candidate))
    }

    /// The number of polls of each sample type, in order of first appearance.
    pub fn sample_type_counts(&self) -> Vec<(SampleType, usize)> {
        let mut counts: Vec<(SampleType, usize)> = Vec::new();
        for r in self.records.iter() {
            match counts.iter_mut().find(|(st, _)| *st == r.sample_type) {
                Some((_, n)) => *n += 1,
                None => counts.push((r.sample_type.clone(), 1)),
            }
        }
        counts
    }

    fn check_not_empty(&self) -> Result<(), PollingErrors> {
        if self.records.is_empty() {
            Err(PollingErrors::EmptyDataset)
        } else {
            Ok(())
        }
    }
}

/// Finds the candidate with the single highest result.
///
/// The maximum of each candidate is computed independently: the two maxima
/// usually come from different polls.
pub fn highest_polling_candidate(dataset: &Dataset) -> Result<HighestPoll, PollingErrors> {
    dataset.check_not_empty()?;
    let max_harris = max_result(dataset, Candidate::Harris);
    let max_trump = max_result(dataset, Candidate::Trump);
    debug!(
        "highest_polling_candidate: max_harris: {:?} max_trump: {:?}",
        max_harris, max_trump
    );
    let res = if max_harris > max_trump {
        HighestPoll {
            leader: Leader::Candidate(Candidate::Harris),
            value: max_harris,
        }
    } else if max_trump > max_harris {
        HighestPoll {
            leader: Leader::Candidate(Candidate::Trump),
            value: max_trump,
        }
    } else {
        HighestPoll {
            leader: Leader::Even,
            value: max_harris,
        }
    };
    info!("highest_polling_candidate: {:?}", res);
    Ok(res)
}

fn max_result(dataset: &Dataset, candidate: Candidate) -> f64 {
    // The builder refuses NaN results.
    dataset
        .results(candidate)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Averages the results over the likely voter (`LV`) polls.
pub fn likely_voter_polling_average(dataset: &Dataset) -> Result<CandidateAverages, PollingErrors> {
    sample_type_average(dataset, SampleType::LIKELY_VOTERS_CODE).map(|(avg, _)| avg)
}

/// Averages the results over the polls with the given sample type code.
///
/// Returns the averages and the number of polls they were computed over.
pub fn sample_type_average(
    dataset: &Dataset,
    code: &str,
) -> Result<(CandidateAverages, usize), PollingErrors> {
    dataset.check_not_empty()?;
    let sample_type = SampleType::from_code(code);
    let selected: Vec<&PollRecord> = dataset
        .records
        .iter()
        .filter(|r| r.sample_type == sample_type)
        .collect();
    if selected.is_empty() {
        return Err(PollingErrors::NoMatchingSamples {
            sample_type: code.to_string(),
        });
    }
    let avg = CandidateAverages {
        harris: mean(selected.iter().map(|r| r.harris_result)),
        trump: mean(selected.iter().map(|r| r.trump_result)),
    };
    info!(
        "sample_type_average: {} polls of type {}: {:?}",
        selected.len(),
        code,
        avg
    );
    Ok((avg, selected.len()))
}

/// The change of the average result between the first 30 and the last 30 polls.
///
/// A positive value means the candidate gained over the period.
pub fn polling_history_change(dataset: &Dataset) -> Result<CandidateAverages, PollingErrors> {
    polling_history_change_window(dataset, AnalysisRules::DEFAULT_HISTORY_WINDOW)
}

/// The change of the average result between the first `window` and the last `window` polls.
///
/// With fewer than `2 * window` polls, the two windows overlap. With fewer
/// than `window` polls, each window is the whole dataset.
pub fn polling_history_change_window(
    dataset: &Dataset,
    window: usize,
) -> Result<CandidateAverages, PollingErrors> {
    if window == 0 {
        return Err(PollingErrors::InvalidWindow { window });
    }
    dataset.check_not_empty()?;
    let len = dataset.records.len();
    let size = window.min(len);
    if len < window.saturating_mul(2) {
        debug!(
            "polling_history_change: {} polls, the windows of {} polls overlap",
            len, window
        );
    }
    let early = &dataset.records[..size];
    let late = &dataset.records[len - size..];
    let delta = |c: Candidate| {
        mean(late.iter().map(|r| r.result(c))) - mean(early.iter().map(|r| r.result(c)))
    };
    let res = CandidateAverages {
        harris: delta(Candidate::Harris),
        trump: delta(Candidate::Trump),
    };
    info!("polling_history_change: window: {} change: {:?}", size, res);
    Ok(res)
}

// Only called on non-empty inputs.
fn mean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), x| (s + x, n + 1));
    sum / (count as f64)
}

/// Runs all the statistics with the given rules.
///
/// Arguments:
/// * `dataset` the polls to summarize
/// * `rules` the sample type to average and the size of the history window
pub fn run_polling_stats(
    dataset: &Dataset,
    rules: &AnalysisRules,
) -> Result<PollingSummary, PollingErrors> {
    info!(
        "Processing {:?} polls, sample types: {:?}, rules: {:?}",
        dataset.len(),
        dataset.sample_type_counts(),
        rules
    );
    let highest = highest_polling_candidate(dataset)?;
    let (lv_average, lv_rows) = sample_type_average(dataset, rules.likely_voter_code.as_str())?;
    let history_change = polling_history_change_window(dataset, rules.history_window)?;
    Ok(PollingSummary {
        num_rows: dataset.len(),
        highest,
        sample_type: SampleType::from_code(rules.likely_voter_code.as_str()),
        sample_type_rows: lv_rows,
        sample_type_average: lv_average,
        history_window: rules.history_window.min(dataset.len()),
        history_change,
    })
}
