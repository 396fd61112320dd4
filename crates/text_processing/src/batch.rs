//! Batch cleaning over record collections
//!
//! Removes null texts, cleans the rest, then drops records whose cleaned
//! text is empty or repeats an earlier kept record. Surviving records keep
//! their input order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use bangla_cleaner_core::TextRecord;

use crate::normalizer::TextNormalizer;

/// Applies a normalizer to one text column of a record collection
#[derive(Debug, Clone)]
pub struct BatchCleaner {
    normalizer: Arc<TextNormalizer>,
    text_column: String,
}

impl BatchCleaner {
    pub fn new(normalizer: Arc<TextNormalizer>, text_column: impl Into<String>) -> Self {
        Self {
            normalizer,
            text_column: text_column.into(),
        }
    }

    pub fn text_column(&self) -> &str {
        &self.text_column
    }

    /// Clean every record and filter the collection
    pub fn clean<R: TextRecord>(&self, records: Vec<R>) -> CleanedBatch<R> {
        let column = self.text_column.as_str();
        let initial_count = records.len();

        let mut records: Vec<R> = records
            .into_iter()
            .filter(|r| r.text(column).is_some())
            .collect();
        let na_removed = initial_count - records.len();
        record_removed("na", na_removed);
        tracing::info!(removed = na_removed, column, "Removed null texts");

        for record in records.iter_mut() {
            let cleaned = record
                .text(column)
                .map(|text| self.normalizer.clean(&text))
                .unwrap_or_default();
            record.set_text(column, cleaned);
        }
        tracing::debug!(count = records.len(), "Applied text cleaning");

        let before_empty = records.len();
        records.retain(|r| r.text(column).map_or(false, |t| !t.is_empty()));
        let empty_removed = before_empty - records.len();
        record_removed("empty", empty_removed);
        tracing::info!(removed = empty_removed, "Removed empty texts after cleaning");

        let before_dedup = records.len();
        let mut seen = HashSet::with_capacity(before_dedup);
        records.retain(|r| {
            r.text(column)
                .map_or(false, |t| seen.insert(t.into_owned()))
        });
        let duplicates_removed = before_dedup - records.len();
        record_removed("duplicate", duplicates_removed);
        tracing::info!(removed = duplicates_removed, "Removed duplicate texts");

        let report = CleaningReport {
            initial_count,
            na_removed,
            empty_removed,
            duplicates_removed,
            final_count: records.len(),
        };
        tracing::info!(
            initial = report.initial_count,
            kept = report.final_count,
            "Batch cleaning complete"
        );

        CleanedBatch { records, report }
    }
}

fn record_removed(stage: &'static str, count: usize) {
    metrics::counter!("cleaner_records_removed_total", "stage" => stage).increment(count as u64);
}

/// Output of a batch clean
#[derive(Debug, Clone)]
pub struct CleanedBatch<R> {
    /// Surviving records in input order, text column cleaned
    pub records: Vec<R>,
    pub report: CleaningReport,
}

/// Record counts at each removal stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub initial_count: usize,
    pub na_removed: usize,
    pub empty_removed: usize,
    pub duplicates_removed: usize,
    pub final_count: usize,
}

impl CleaningReport {
    pub fn total_removed(&self) -> usize {
        self.na_removed + self.empty_removed + self.duplicates_removed
    }
}
