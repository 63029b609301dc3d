use crate::config::{PollRecord, RowIssue};
use crate::schema::*;
use crate::Dataset;

/// A builder for assembling a dataset one record at a time.
///
/// This is the only way to grow a [Dataset]: once built, a dataset does not change.
/// Records are checked when added, so every dataset holds positive sample
/// sizes and results between 0 and 1.
///
/// ```
/// use polling_stats::builder::DatasetBuilder;
/// use polling_stats::{PollRecord, SampleType};
///
/// let mut builder = DatasetBuilder::new();
/// let record = PollRecord {
///     month: "Oct".to_string(),
///     date: 15,
///     sample_size: 1000,
///     sample_type: SampleType::LikelyVoters,
///     harris_result: 0.57,
///     trump_result: 0.45,
/// };
/// builder.add_record(record.clone())?;
///
/// // A percentage is not a fraction.
/// let percent = PollRecord { harris_result: 57.0, ..record };
/// assert!(builder.add_record(percent).is_err());
///
/// let dataset = builder.build();
/// assert_eq!(dataset.len(), 1);
/// # Ok::<(), polling_stats::RowIssue>(())
/// ```
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    _records: Vec<PollRecord>,
}

impl DatasetBuilder {
    pub fn new() -> DatasetBuilder {
        DatasetBuilder {
            _records: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> DatasetBuilder {
        DatasetBuilder {
            _records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record. Records keep the order in which they are added.
    ///
    /// A record with a zero sample size or a result that is not a fraction is refused.
    pub fn add_record(&mut self, record: PollRecord) -> Result<(), RowIssue> {
        if record.sample_size == 0 {
            return Err(RowIssue::EmptySample);
        }
        check_fraction(&HARRIS_RESULT, record.harris_result)?;
        check_fraction(&TRUMP_RESULT, record.trump_result)?;
        self._records.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self._records.len()
    }

    pub fn is_empty(&self) -> bool {
        self._records.is_empty()
    }

    pub fn build(self) -> Dataset {
        Dataset {
            records: self._records,
        }
    }
}
