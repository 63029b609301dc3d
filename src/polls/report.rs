// Text and JSON renderings of a polling summary.

use serde_json::json;

use crate::polls::*;

/// Formats a fraction as a percentage: `0.57` -> `57.0%` with one decimal.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Same as [format_percent], with a sign in front of positive values: `+1.53%`.
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    format!("{:+.*}%", decimals, value * 100.0)
}

pub fn format_highest(highest: &HighestPoll) -> String {
    format!(
        "{} {}",
        highest.leader.label(),
        format_percent(highest.value, 1)
    )
}

/// The report printed at the end of a run.
pub fn build_report(summary: &PollingSummary) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "Highest Polling Candidate: {}",
        format_highest(&summary.highest)
    ));
    let title = match summary.sample_type {
        SampleType::LikelyVoters => "Likely Voter Polling Average:".to_string(),
        ref st => format!("{} Polling Average:", st.code()),
    };
    lines.push(title);
    for c in Candidate::ALL {
        lines.push(format!(
            "  {}: {}",
            c,
            format_percent(summary.sample_type_average.get(c), 2)
        ));
    }
    lines.push("Polling History Change:".to_string());
    for c in Candidate::ALL {
        lines.push(format!(
            "  {}: {}",
            c,
            format_signed_percent(summary.history_change.get(c), 2)
        ));
    }
    lines.join("\n")
}

/// The JSON summary. Numbers are rendered as in the text report so that
/// summaries can be compared as text.
pub fn build_summary_js(title: Option<&str>, summary: &PollingSummary) -> JSValue {
    json!({
        "title": title,
        "rows": summary.num_rows,
        "highestPollingCandidate": {
            "candidate": summary.highest.leader.label(),
            "value": format_percent(summary.highest.value, 1),
        },
        "likelyVoterAverage": {
            "sampleType": summary.sample_type.code(),
            "rows": summary.sample_type_rows,
            "harris": format_percent(summary.sample_type_average.harris, 2),
            "trump": format_percent(summary.sample_type_average.trump, 2),
        },
        "pollingHistoryChange": {
            "window": summary.history_window,
            "harris": format_signed_percent(summary.history_change.harris, 2),
            "trump": format_signed_percent(summary.history_change.trump, 2),
        },
    })
}
