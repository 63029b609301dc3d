use log::{debug, info};

use crate::builder::DatasetBuilder;
use crate::config::*;
use crate::schema::*;
use crate::Dataset;

/// Parses the lines of a polling file, header included.
///
/// The first line is dropped without being looked at. Every other line must
/// be a valid row: the first invalid row fails the whole parse.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Dataset, PollingErrors> {
    parse_with_policy(lines, HeaderPolicy::Skip)
}

/// Same as [parse], with a choice of checking the header line or not.
pub fn parse_with_policy<S: AsRef<str>>(
    lines: &[S],
    policy: HeaderPolicy,
) -> Result<Dataset, PollingErrors> {
    let mut iter = lines.iter();
    match (iter.next(), policy) {
        (Some(header), HeaderPolicy::Verify) => verify_header(header.as_ref())?,
        (header, _) => {
            debug!("parse: skipping header {:?}", header.map(|h| h.as_ref()));
        }
    }

    let mut builder = DatasetBuilder::with_capacity(lines.len().saturating_sub(1));
    for (idx, line) in iter.enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        let record =
            parse_row(line.as_ref()).map_err(|issue| PollingErrors::MalformedRow { lineno, issue })?;
        debug!("parse: lineno: {:?} record: {:?}", lineno, record);
        builder
            .add_record(record)
            .map_err(|issue| PollingErrors::MalformedRow { lineno, issue })?;
    }
    info!("parse: read {} polls", builder.len());
    Ok(builder.build())
}

/// Parses one data row.
pub fn parse_row(line: &str) -> Result<PollRecord, RowIssue> {
    let fields = split_line(line)?;
    let [month, date, sample, harris, trump] = fields.as_slice() else {
        return Err(RowIssue::FieldCount {
            found: fields.len(),
        });
    };
    let (sample_size, sample_type) = parse_sample(&SAMPLE, sample)?;
    Ok(PollRecord {
        month: month.to_string(),
        date: parse_integer(&DATE, date)?,
        sample_size,
        sample_type,
        harris_result: parse_fraction(&HARRIS_RESULT, harris)?,
        trump_result: parse_fraction(&TRUMP_RESULT, trump)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "month,date,sample,harris_result,trump_result";

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn parse_typed_rows() {
        init();
        let lines = vec![
            HEADER,
            "Oct,15,1000 LV,0.5700,0.4500\n",
            "  Oct,16,812 RV,0.4810,0.4700  ",
            "Nov,1,640 A,0.4,0.41",
        ];
        let dataset = parse(&lines).unwrap();
        assert_eq!(dataset.len(), lines.len() - 1);

        let first = &dataset.records()[0];
        assert_eq!(first.month, "Oct");
        assert_eq!(first.date, 15);
        assert_eq!(first.sample_size, 1000);
        assert_eq!(first.sample_type, SampleType::LikelyVoters);
        assert_eq!(first.harris_result, 0.57);
        assert_eq!(first.trump_result, 0.45);

        assert_eq!(dataset.records()[1].sample_type, SampleType::RegisteredVoters);
        assert_eq!(dataset.records()[2].sample_type.code(), "A");
    }

    #[test]
    fn parse_keeps_file_order() {
        let lines = vec![
            HEADER,
            "Oct,20,1000 LV,0.50,0.40",
            "Oct,1,1000 LV,0.51,0.41",
            "Oct,20,1000 LV,0.50,0.40",
        ];
        let dataset = parse(&lines).unwrap();
        let dates: Vec<u32> = dataset.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![20, 1, 20]);
    }

    #[test]
    fn header_only_gives_empty_dataset() {
        let dataset = parse(&[HEADER]).unwrap();
        assert!(dataset.is_empty());
        let lines: Vec<String> = vec![];
        assert!(parse(&lines).unwrap().is_empty());
    }

    #[test]
    fn header_is_not_checked_by_default() {
        let lines = vec!["whatever", "Oct,15,1000 LV,0.5700,0.4500"];
        assert_eq!(parse(&lines).unwrap().len(), 1);
        let res = parse_with_policy(&lines, HeaderPolicy::Verify);
        assert!(matches!(res, Err(PollingErrors::MalformedHeader { .. })));
    }

    #[test]
    fn malformed_rows_report_their_line() {
        init();
        let cases = vec![
            ("Oct,15,1000 LV,0.57", RowIssue::FieldCount { found: 4 }),
            ("Oct,15,1000 LV,0.57,0.45,0.01", RowIssue::FieldCount { found: 6 }),
            ("", RowIssue::FieldCount { found: 0 }),
            ("   ", RowIssue::FieldCount { found: 1 }),
            (
                "\"Oct,15\",1000 LV,0.57,0.45",
                RowIssue::InvalidInteger {
                    column: "date",
                    content: "15\"".to_string(),
                },
            ),
            ("Oct,15,1000,0.57,0.45", RowIssue::SampleTokens { found: 1 }),
            (
                "Oct,fifteen,1000 LV,0.57,0.45",
                RowIssue::InvalidInteger {
                    column: "date",
                    content: "fifteen".to_string(),
                },
            ),
            (
                "Oct,15,1000 LV,abc,0.45",
                RowIssue::InvalidFraction {
                    column: "harris_result",
                    content: "abc".to_string(),
                },
            ),
            (
                "Oct,15,1000 LV,0.57,45.0",
                RowIssue::FractionOutOfRange {
                    column: "trump_result",
                    content: "45.0".to_string(),
                },
            ),
        ];
        for (row, issue) in cases {
            let lines = vec![HEADER, "Oct,14,900 LV,0.5,0.5", row];
            let res = parse(&lines);
            assert_eq!(
                res,
                Err(PollingErrors::MalformedRow { lineno: 3, issue }),
                "row {:?}",
                row
            );
        }
    }
}
