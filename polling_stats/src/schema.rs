//! The column layout of a polling file.
//!
//! Columns are positional. The header line is not needed to read the rows,
//! but it can be checked against the names below with [HeaderPolicy::Verify].

use csv::{ReaderBuilder, StringRecord, Terminator, Trim};

use crate::config::*;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ColumnKind {
    /// Free text, kept as is.
    Text,
    /// A decimal integer.
    Integer,
    /// `<integer> <code>`, separated by whitespace.
    Sample,
    /// A decimal number between 0 and 1.
    Fraction,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

pub const MONTH: Column = Column {
    name: "month",
    kind: ColumnKind::Text,
};
pub const DATE: Column = Column {
    name: "date",
    kind: ColumnKind::Integer,
};
pub const SAMPLE: Column = Column {
    name: "sample",
    kind: ColumnKind::Sample,
};
pub const HARRIS_RESULT: Column = Column {
    name: "harris_result",
    kind: ColumnKind::Fraction,
};
pub const TRUMP_RESULT: Column = Column {
    name: "trump_result",
    kind: ColumnKind::Fraction,
};

/// The columns in file order.
pub const POLL_COLUMNS: [Column; 5] = [MONTH, DATE, SAMPLE, HARRIS_RESULT, TRUMP_RESULT];

pub const DELIMITER: u8 = b',';

/// What to do with the first line of the input.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum HeaderPolicy {
    /// Drop it without looking at it.
    #[default]
    Skip,
    /// Drop it, after checking that it names the columns in the expected order.
    Verify,
}

pub fn column_names() -> Vec<String> {
    POLL_COLUMNS.iter().map(|c| c.name.to_string()).collect()
}

/// Splits one line into trimmed fields. Quotes have no special meaning.
///
/// An empty line has no fields.
pub fn split_line(line: &str) -> Result<Vec<String>, RowIssue> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .trim(Trim::All)
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    let found = rdr
        .read_record(&mut record)
        .map_err(|e| RowIssue::Unreadable {
            message: e.to_string(),
        })?;
    if !found {
        return Ok(Vec::new());
    }
    Ok(record.iter().map(|f| f.to_string()).collect())
}

/// Checks a header line. Names are compared case-insensitively, after trimming.
pub fn verify_header(line: &str) -> Result<(), PollingErrors> {
    let found: Vec<String> = split_line(line).unwrap_or_default();
    let matches = found.len() == POLL_COLUMNS.len()
        && found
            .iter()
            .zip(POLL_COLUMNS.iter())
            .all(|(f, c)| f.eq_ignore_ascii_case(c.name));
    if matches {
        Ok(())
    } else {
        Err(PollingErrors::MalformedHeader {
            found,
            expected: column_names(),
        })
    }
}

pub(crate) fn parse_integer(column: &Column, content: &str) -> Result<u32, RowIssue> {
    content
        .parse::<u32>()
        .map_err(|_| RowIssue::InvalidInteger {
            column: column.name,
            content: content.to_string(),
        })
}

pub(crate) fn parse_fraction(column: &Column, content: &str) -> Result<f64, RowIssue> {
    let x = content
        .parse::<f64>()
        .map_err(|_| RowIssue::InvalidFraction {
            column: column.name,
            content: content.to_string(),
        })?;
    if is_fraction(x) {
        Ok(x)
    } else {
        Err(RowIssue::FractionOutOfRange {
            column: column.name,
            content: content.to_string(),
        })
    }
}

fn is_fraction(x: f64) -> bool {
    x.is_finite() && (0.0..=1.0).contains(&x)
}

pub(crate) fn check_fraction(column: &Column, x: f64) -> Result<(), RowIssue> {
    if is_fraction(x) {
        Ok(())
    } else {
        Err(RowIssue::FractionOutOfRange {
            column: column.name,
            content: x.to_string(),
        })
    }
}

pub(crate) fn parse_sample(column: &Column, content: &str) -> Result<(u32, SampleType), RowIssue> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    match tokens.as_slice() {
        [size, code] => {
            let size = parse_integer(column, size)?;
            if size == 0 {
                return Err(RowIssue::EmptySample);
            }
            Ok((size, SampleType::from_code(code)))
        }
        x => Err(RowIssue::SampleTokens { found: x.len() }),
    }
}
