//! Dataset analysis
//!
//! Numeric summaries of a record collection: quality (nulls, empties,
//! duplicates), class distribution and text length statistics. Rendering
//! is left to the caller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use bangla_cleaner_core::TextRecord;

/// Number of repeated texts listed in a quality report
pub const TOP_DUPLICATES: usize = 10;

/// Missing values, empty strings and duplicates in one text column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_records: usize,
    pub na_count: usize,
    pub empty_count: usize,
    /// Non-null records whose text repeats an earlier record
    pub duplicate_count: usize,
    /// Most frequent repeated texts with their occurrence counts
    pub top_duplicates: Vec<(String, usize)>,
}

impl QualityReport {
    pub fn analyze<R: TextRecord>(records: &[R], text_column: &str) -> Self {
        let mut report = Self {
            total_records: records.len(),
            ..Default::default()
        };

        // (count, first index) so ties keep first-seen order
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            match record.text(text_column) {
                None => report.na_count += 1,
                Some(text) => {
                    if text.is_empty() {
                        report.empty_count += 1;
                    }
                    let entry = counts.entry(text.into_owned()).or_insert((0, idx));
                    if entry.0 > 0 {
                        report.duplicate_count += 1;
                    }
                    entry.0 += 1;
                },
            }
        }

        let mut repeated: Vec<_> = counts
            .into_iter()
            .filter(|(_, (count, _))| *count > 1)
            .collect();
        repeated.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
        report.top_duplicates = repeated
            .into_iter()
            .take(TOP_DUPLICATES)
            .map(|(text, (count, _))| (text, count))
            .collect();

        tracing::debug!(
            total = report.total_records,
            na = report.na_count,
            empty = report.empty_count,
            duplicates = report.duplicate_count,
            "Analyzed dataset quality"
        );
        report
    }

    fn percent(&self, count: usize) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            count as f64 / self.total_records as f64 * 100.0
        }
    }

    pub fn na_percent(&self) -> f64 {
        self.percent(self.na_count)
    }

    pub fn empty_percent(&self) -> f64 {
        self.percent(self.empty_count)
    }

    pub fn duplicate_percent(&self) -> f64 {
        self.percent(self.duplicate_count)
    }
}

/// Records per class label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCount {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

/// Count labels, most frequent first. Records without a label are skipped.
pub fn class_distribution<R: TextRecord>(records: &[R], label_column: &str) -> Vec<ClassCount> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        if let Some(label) = record.field(label_column) {
            let label = label.into_owned();
            let count = counts.entry(label.clone()).or_insert(0);
            if *count == 0 {
                order.push(label);
            }
            *count += 1;
        }
    }

    let total: usize = counts.values().sum();
    let mut classes: Vec<ClassCount> = order
        .into_iter()
        .map(|label| {
            let count = counts[&label];
            ClassCount {
                percentage: count as f64 / total as f64 * 100.0,
                label,
                count,
            }
        })
        .collect();
    // stable sort keeps first-seen order among equal counts
    classes.sort_by(|a, b| b.count.cmp(&a.count));
    classes
}

/// Summary statistics over text lengths in characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LengthStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1)
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

impl LengthStats {
    /// `None` when there are no lengths
    pub fn from_lengths(lengths: &[usize]) -> Option<Self> {
        if lengths.is_empty() {
            return None;
        }

        let mut sorted: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let var = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            p25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            p75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Length statistics of the non-null texts in a column
pub fn text_length_stats<R: TextRecord>(records: &[R], text_column: &str) -> Option<LengthStats> {
    let lengths: Vec<usize> = records
        .iter()
        .filter_map(|r| r.text(text_column).map(|t| char_len(&t)))
        .collect();
    LengthStats::from_lengths(&lengths)
}

/// Average text length per label, longest first
pub fn average_length_by_class<R: TextRecord>(
    records: &[R],
    text_column: &str,
    label_column: &str,
) -> Vec<(String, f64)> {
    let mut sums: HashMap<String, (usize, usize)> = HashMap::new();
    for record in records {
        if let (Some(text), Some(label)) = (record.text(text_column), record.field(label_column)) {
            let entry = sums.entry(label.into_owned()).or_insert((0, 0));
            entry.0 += char_len(&text);
            entry.1 += 1;
        }
    }

    let mut averages: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(label, (total, n))| (label, total as f64 / n as f64))
        .collect();
    averages.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    averages
}

#[cfg(test)]
mod tests {
    use super::*;
    use bangla_cleaner_core::Row;
    use serde_json::json;

    fn rows(values: Vec<serde_json::Value>) -> Vec<Row> {
        values
            .into_iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_quality_report() {
        let records = vec![
            Some("ক".to_string()),
            None,
            Some(String::new()),
            Some("ক".to_string()),
            Some("খ".to_string()),
            Some("ক".to_string()),
            Some("খ".to_string()),
        ];
        let report = QualityReport::analyze(&records, "text");
        assert_eq!(report.total_records, 7);
        assert_eq!(report.na_count, 1);
        assert_eq!(report.empty_count, 1);
        assert_eq!(report.duplicate_count, 3);
        assert_eq!(
            report.top_duplicates,
            vec![("ক".to_string(), 3), ("খ".to_string(), 2)]
        );
        assert!((report.na_percent() - 100.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_quality_report_empty() {
        let report = QualityReport::analyze(&Vec::<Option<String>>::new(), "text");
        assert_eq!(report, QualityReport::default());
        assert_eq!(report.duplicate_percent(), 0.0);
    }

    #[test]
    fn test_class_distribution() {
        let records = rows(vec![
            json!({"label": "troll"}),
            json!({"label": "not bully"}),
            json!({"label": "not bully"}),
            json!({"label": null}),
            json!({"label": "sexual"}),
        ]);
        let classes = class_distribution(&records, "label");
        assert_eq!(classes.len(), 3);
        assert_eq!(classes[0].label, "not bully");
        assert_eq!(classes[0].count, 2);
        assert!((classes[0].percentage - 50.0).abs() < 1e-9);
        assert_eq!(classes[1].label, "troll");
        assert_eq!(classes[2].label, "sexual");
    }

    #[test]
    fn test_length_stats() {
        let stats = LengthStats::from_lengths(&[1, 2, 3, 4]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.p25, 1.75);
        assert_eq!(stats.p75, 3.25);
        assert!((stats.std - 1.290_994_448_735_805_6).abs() < 1e-9);
        assert!(LengthStats::from_lengths(&[]).is_none());
    }

    #[test]
    fn test_text_lengths_count_chars() {
        let records = rows(vec![
            json!({"text": "ভালো", "label": "a"}),
            json!({"text": "ab", "label": "b"}),
            json!({"text": null, "label": "b"}),
        ]);
        let stats = text_length_stats(&records, "text").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.max, 4.0);

        let averages = average_length_by_class(&records, "text", "label");
        assert_eq!(averages, vec![("a".to_string(), 4.0), ("b".to_string(), 2.0)]);
    }
}
