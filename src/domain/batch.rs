//! Batch outcome records and aggregate statistics.

use crate::domain::decision::Prediction;
use std::fmt;

/// Per-image outcome category in a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// Prediction succeeded with the positive class.
    DrDetected,
    /// Prediction succeeded with the negative class.
    NoDr,
    /// Preprocessing or inference failed for this image.
    Failed,
}

impl BatchStatus {
    /// Returns the status string used in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::DrDetected => "DR Detected",
            BatchStatus::NoDr => "No DR",
            BatchStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a batch run, ready for tabular export.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    /// Original filename of the image.
    pub filename: String,
    /// Label string, or "Error" for failed items.
    pub prediction: String,
    /// Confidence as "xx.xx%", or "N/A" for failed items.
    pub confidence: String,
    /// Outcome category.
    pub status: BatchStatus,
}

impl BatchRecord {
    /// Record for a successful prediction.
    pub fn success(filename: impl Into<String>, prediction: &Prediction) -> Self {
        let status = if prediction.label.is_positive() {
            BatchStatus::DrDetected
        } else {
            BatchStatus::NoDr
        };
        Self {
            filename: filename.into(),
            prediction: prediction.label.as_str().to_string(),
            confidence: prediction.confidence_percent(),
            status,
        }
    }

    /// Record for an image whose processing failed.
    pub fn failure(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            prediction: "Error".to_string(),
            confidence: "N/A".to_string(),
            status: BatchStatus::Failed,
        }
    }
}

/// Aggregate counts over a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Number of records in the batch.
    pub total: usize,
    /// Records with status "DR Detected".
    pub dr_detected: usize,
    /// Records with status "No DR".
    pub no_dr: usize,
    /// Records with status "Failed".
    pub failed: usize,
}

impl BatchSummary {
    /// Pure fold over the records; `dr_detected + no_dr + failed == total`.
    pub fn from_records(records: &[BatchRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.status {
                BatchStatus::DrDetected => summary.dr_detected += 1,
                BatchStatus::NoDr => summary.no_dr += 1,
                BatchStatus::Failed => summary.failed += 1,
            }
        }
        summary
    }

    /// Share of the batch flagged positive, as a percentage (0.0 to 100.0).
    pub fn detection_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.dr_detected as f64 / self.total as f64) * 100.0
        }
    }

    /// Share of the batch cleared, as a percentage (0.0 to 100.0).
    pub fn clear_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.no_dr as f64 / self.total as f64) * 100.0
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Batch summary:")?;
        writeln!(f, "  Total images: {}", self.total)?;
        writeln!(
            f,
            "  DR detected: {} ({:.0}%)",
            self.dr_detected,
            self.detection_rate()
        )?;
        writeln!(f, "  No DR: {} ({:.0}%)", self.no_dr, self.clear_rate())?;
        writeln!(f, "  Failed: {}", self.failed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::decide;

    fn sample_records() -> Vec<BatchRecord> {
        vec![
            BatchRecord::success("a.jpg", &decide(0.9)),
            BatchRecord::success("b.jpg", &decide(0.2)),
            BatchRecord::failure("c.jpg"),
        ]
    }

    #[test]
    fn records_carry_display_fields() {
        let records = sample_records();
        assert_eq!(records[0].prediction, "No_Diabetic_Retinopathy");
        assert_eq!(records[0].confidence, "90.00%");
        assert_eq!(records[0].status, BatchStatus::NoDr);

        assert_eq!(records[1].prediction, "Diabetic_Retinopathy");
        assert_eq!(records[1].confidence, "80.00%");
        assert_eq!(records[1].status, BatchStatus::DrDetected);

        assert_eq!(records[2].prediction, "Error");
        assert_eq!(records[2].confidence, "N/A");
        assert_eq!(records[2].status, BatchStatus::Failed);
    }

    #[test]
    fn summary_counts_partition_the_batch() {
        let records = sample_records();
        let summary = BatchSummary::from_records(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.dr_detected, 1);
        assert_eq!(summary.no_dr, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            summary.dr_detected + summary.no_dr + summary.failed,
            summary.total
        );
    }

    #[test]
    fn empty_batch_has_zero_rates() {
        let summary = BatchSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.detection_rate(), 0.0);
        assert_eq!(summary.clear_rate(), 0.0);
    }

    #[test]
    fn summary_display_lists_counts() {
        let summary = BatchSummary::from_records(&sample_records());
        let rendered = summary.to_string();
        assert!(rendered.contains("Total images: 3"));
        assert!(rendered.contains("DR detected: 1"));
        assert!(rendered.contains("Failed: 1"));
    }
}
