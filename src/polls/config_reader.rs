use crate::polls::*;

use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputSettings {
    pub title: Option<String>,
    #[serde(rename = "outputFile")]
    pub output_file: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct PollRules {
    #[serde(rename = "likelyVoterCode")]
    pub likely_voter_code: Option<String>,
    #[serde(rename = "historyWindow")]
    pub history_window: Option<usize>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    #[serde(rename = "inputFile")]
    pub input_file: String,
    #[serde(rename = "strictHeader")]
    pub strict_header: Option<bool>,
    #[serde(default)]
    pub rules: PollRules,
}

impl PollRules {
    /// The rules of the analysis. Unspecified rules take their default value.
    pub fn analysis_rules(&self) -> PollResult<AnalysisRules> {
        let defaults = AnalysisRules::default_rules();
        let history_window = self.history_window.unwrap_or(defaults.history_window);
        if history_window == 0 {
            whatever!("historyWindow must be at least 1");
        }
        let likely_voter_code = match self.likely_voter_code.clone() {
            Some(x) if x.trim().is_empty() => {
                whatever!("likelyVoterCode cannot be empty")
            }
            Some(x) => x,
            None => defaults.likely_voter_code,
        };
        Ok(AnalysisRules {
            likely_voter_code,
            history_window,
        })
    }
}

pub fn read_config(path: &str) -> PollResult<PollConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: PollConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    debug!("read_config: {:?}", config);
    Ok(config)
}

pub fn read_summary(path: &str) -> PollResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    debug!("read_summary: {:?}", js);
    Ok(js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config() {
        let config: PollConfig = serde_json::from_str(r#"{"inputFile": "polls.csv"}"#).unwrap();
        assert_eq!(config.input_file, "polls.csv");
        assert_eq!(config.strict_header, None);
        assert_eq!(config.output_settings, OutputSettings::default());
        assert_eq!(
            config.rules.analysis_rules().unwrap(),
            AnalysisRules::default_rules()
        );
    }

    #[test]
    fn full_config() {
        let config: PollConfig = serde_json::from_str(
            r#"{
                "outputSettings": {"title": "Polls", "outputFile": "out.json"},
                "inputFile": "polls.csv",
                "strictHeader": true,
                "rules": {"likelyVoterCode": "RV", "historyWindow": 10}
            }"#,
        )
        .unwrap();
        assert_eq!(config.output_settings.title, Some("Polls".to_string()));
        assert_eq!(config.output_settings.output_file, Some("out.json".to_string()));
        assert_eq!(config.strict_header, Some(true));
        let rules = config.rules.analysis_rules().unwrap();
        assert_eq!(rules.likely_voter_code, "RV");
        assert_eq!(rules.history_window, 10);
    }

    #[test]
    fn invalid_rules() {
        let rules = PollRules {
            likely_voter_code: None,
            history_window: Some(0),
        };
        assert!(rules.analysis_rules().is_err());
        let rules = PollRules {
            likely_voter_code: Some(" ".to_string()),
            history_window: None,
        };
        assert!(rules.analysis_rules().is_err());
    }

    #[test]
    fn missing_input_file() {
        let res: Result<PollConfig, _> = serde_json::from_str(r#"{"rules": {}}"#);
        assert!(res.is_err());
    }
}
