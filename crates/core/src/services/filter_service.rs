use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::entry::Entry;

/// Restricts the full dataset to an inclusive date interval.
///
/// The filter never mutates the full dataset — it produces a fresh
/// working set, and both failure modes are non-destructive: the
/// caller keeps whatever working set it had before.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Produce the working set for `[start, end]` (inclusive on both ends).
    ///
    /// `start > end` is an [`CoreError::InvalidRange`] — the interval
    /// itself is malformed. A well-formed interval that matches no
    /// entries is [`CoreError::EmptyRange`].
    pub fn apply(
        &self,
        dataset: &[Entry],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Entry>, CoreError> {
        if start > end {
            return Err(CoreError::InvalidRange(format!(
                "start date ({start}) is after end date ({end})"
            )));
        }

        let working_set: Vec<Entry> = dataset
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect();

        if working_set.is_empty() {
            return Err(CoreError::EmptyRange);
        }
        Ok(working_set)
    }

    /// The default interval: minimum to maximum date present in the
    /// full dataset. `None` when the dataset is empty.
    ///
    /// Assumes a sequenced (date-ascending) dataset.
    #[must_use]
    pub fn default_bounds(&self, dataset: &[Entry]) -> Option<(NaiveDate, NaiveDate)> {
        let first = dataset.first()?.date;
        let last = dataset.last()?.date;
        Some((first, last))
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
