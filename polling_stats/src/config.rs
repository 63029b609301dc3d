// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The candidates that a poll reports on.
///
/// Polls only ever report two candidates, in this order in the input file.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Candidate {
    Harris,
    Trump,
}

impl Candidate {
    pub const ALL: [Candidate; 2] = [Candidate::Harris, Candidate::Trump];

    pub fn name(&self) -> &'static str {
        match self {
            Candidate::Harris => "Harris",
            Candidate::Trump => "Trump",
        }
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The population a poll was sampled from.
///
/// The code is kept verbatim: an unknown code is still a valid record, it is
/// only excluded from the statistics that look for a specific population.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum SampleType {
    /// `LV`: respondents screened as likely to vote.
    LikelyVoters,
    /// `RV`: all registered voters.
    RegisteredVoters,
    Other(String),
}

impl SampleType {
    pub const LIKELY_VOTERS_CODE: &'static str = "LV";
    pub const REGISTERED_VOTERS_CODE: &'static str = "RV";

    /// Case-sensitive: `lv` is not a likely voter sample.
    pub fn from_code(code: &str) -> SampleType {
        match code {
            SampleType::LIKELY_VOTERS_CODE => SampleType::LikelyVoters,
            SampleType::REGISTERED_VOTERS_CODE => SampleType::RegisteredVoters,
            x => SampleType::Other(x.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            SampleType::LikelyVoters => SampleType::LIKELY_VOTERS_CODE,
            SampleType::RegisteredVoters => SampleType::REGISTERED_VOTERS_CODE,
            SampleType::Other(s) => s.as_str(),
        }
    }
}

/// One row of the polling file.
///
/// Results are stored as fractions in [0, 1] (0.57 and not 57.0).
#[derive(PartialEq, Debug, Clone)]
pub struct PollRecord {
    pub month: String,
    pub date: u32,
    pub sample_size: u32,
    pub sample_type: SampleType,
    pub harris_result: f64,
    pub trump_result: f64,
}

impl PollRecord {
    pub fn result(&self, candidate: Candidate) -> f64 {
        match candidate {
            Candidate::Harris => self.harris_result,
            Candidate::Trump => self.trump_result,
        }
    }
}

// ******** Output data structures *********

/// The outcome of comparing the best result of each candidate.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Leader {
    Candidate(Candidate),
    /// Both candidates reached exactly the same maximum.
    Even,
}

impl Leader {
    pub fn label(&self) -> &'static str {
        match self {
            Leader::Candidate(c) => c.name(),
            Leader::Even => "EVEN",
        }
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct HighestPoll {
    pub leader: Leader,
    /// The maximum of the leader, as a fraction.
    pub value: f64,
}

/// A pair of per-candidate values: averages or differences of averages.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct CandidateAverages {
    pub harris: f64,
    pub trump: f64,
}

impl CandidateAverages {
    pub fn get(&self, candidate: Candidate) -> f64 {
        match candidate {
            Candidate::Harris => self.harris,
            Candidate::Trump => self.trump,
        }
    }
}

/// All the statistics for one dataset, computed with the same rules.
#[derive(PartialEq, Debug, Clone)]
pub struct PollingSummary {
    pub num_rows: usize,
    pub highest: HighestPoll,
    /// The sample type that was averaged, and how many rows matched it.
    pub sample_type: SampleType,
    pub sample_type_rows: usize,
    pub sample_type_average: CandidateAverages,
    pub history_window: usize,
    pub history_change: CandidateAverages,
}

/// Why a data row could not be converted.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum RowIssue {
    FieldCount { found: usize },
    SampleTokens { found: usize },
    InvalidInteger { column: &'static str, content: String },
    InvalidFraction { column: &'static str, content: String },
    /// A number that parses but is not a fraction, usually a percentage such as `57.0`.
    FractionOutOfRange { column: &'static str, content: String },
    EmptySample,
    /// The line could not be read as comma-separated values.
    Unreadable { message: String },
}

impl Display for RowIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowIssue::FieldCount { found } => {
                write!(f, "expected 5 comma-separated fields, found {}", found)
            }
            RowIssue::SampleTokens { found } => write!(
                f,
                "expected the sample as '<size> <type>', found {} tokens",
                found
            ),
            RowIssue::InvalidInteger { column, content } => {
                write!(f, "column {}: '{}' is not an integer", column, content)
            }
            RowIssue::InvalidFraction { column, content } => {
                write!(f, "column {}: '{}' is not a number", column, content)
            }
            RowIssue::FractionOutOfRange { column, content } => write!(
                f,
                "column {}: '{}' is not a fraction between 0 and 1",
                column, content
            ),
            RowIssue::EmptySample => write!(f, "column sample: the sample size is zero"),
            RowIssue::Unreadable { message } => write!(f, "unreadable line: {}", message),
        }
    }
}

/// Errors that prevent the parsing or the statistics from completing successfully.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum PollingErrors {
    /// A data row does not follow the schema. `lineno` is 1-based and counts the header.
    MalformedRow { lineno: usize, issue: RowIssue },
    /// Only reported when the header is verified.
    MalformedHeader {
        found: Vec<String>,
        expected: Vec<String>,
    },
    EmptyDataset,
    /// The dataset has rows, but none of the requested sample type.
    NoMatchingSamples { sample_type: String },
    InvalidWindow { window: usize },
}

impl Error for PollingErrors {}

impl Display for PollingErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollingErrors::MalformedRow { lineno, issue } => {
                write!(f, "Malformed row at line {}: {}", lineno, issue)
            }
            PollingErrors::MalformedHeader { found, expected } => write!(
                f,
                "Malformed header: found {:?}, expected {:?}",
                found, expected
            ),
            PollingErrors::EmptyDataset => write!(f, "The polling dataset has no rows"),
            PollingErrors::NoMatchingSamples { sample_type } => {
                write!(f, "No poll with sample type {:?}", sample_type)
            }
            PollingErrors::InvalidWindow { window } => {
                write!(f, "The history window must be at least 1, got {}", window)
            }
        }
    }
}

// ********* Configuration **********

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct AnalysisRules {
    /// The sample type averaged by the likely voter statistic.
    pub likely_voter_code: String,
    /// The number of polls at each end of the dataset compared by the history change.
    pub history_window: usize,
}

impl AnalysisRules {
    pub const DEFAULT_HISTORY_WINDOW: usize = 30;

    pub fn default_rules() -> AnalysisRules {
        AnalysisRules {
            likely_voter_code: SampleType::LIKELY_VOTERS_CODE.to_string(),
            history_window: AnalysisRules::DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl Default for AnalysisRules {
    fn default() -> Self {
        AnalysisRules::default_rules()
    }
}
