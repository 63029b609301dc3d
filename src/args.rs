use clap::Parser;

/// This program reports descriptive statistics over a file of election polls.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The file containing the polls, in CSV format.
    /// Setting this option overrides the input file that may be specified with the --config option.
    /// If neither is provided, the file polling_data.csv in the current directory is read.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (file path, optional) A JSON file describing the analysis to run. The paths it contains
    /// are relative to the directory of this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the statistics will be written
    /// in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing a summary in JSON format. If provided, the
    /// program will check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// If passed as an argument, the header line must name the expected columns in order.
    #[clap(long, takes_value = false)]
    pub strict_header: bool,

    /// (default LV) The sample type averaged by the likely voter statistic.
    #[clap(long, value_parser)]
    pub likely_voter_code: Option<String>,

    /// (default 30) The number of polls at each end of the file compared by the history change.
    #[clap(long, value_parser)]
    pub history_window: Option<usize>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
