//! Report rendering: the plain-text screening report and the batch CSV.

use crate::core::errors::{DrError, DrResult, SimpleError};
use crate::core::metadata::ModelMetadata;
use crate::domain::batch::BatchRecord;
use crate::domain::decision::Prediction;
use std::path::Path;

/// Suggested filename for the batch CSV artifact.
pub const BATCH_EXPORT_FILENAME: &str = "batch_dr_analysis.csv";

/// Renders the downloadable plain-text report for a single screening.
pub fn render_report(prediction: &Prediction, metadata: &ModelMetadata) -> String {
    let recommendation = if prediction.label.is_positive() {
        "Please schedule an appointment with an ophthalmologist\n\
         for comprehensive evaluation and treatment options."
    } else {
        "Continue regular eye check-ups as advised by your doctor.\n\
         Maintain healthy blood sugar levels."
    };

    format!(
        "DIABETIC RETINOPATHY DETECTION REPORT\n\
         =====================================\n\
         \n\
         ANALYSIS RESULTS\n\
         Prediction:     {label}\n\
         Confidence:     {confidence}\n\
         AI Model:       {architecture}\n\
         Model Accuracy: {accuracy}\n\
         \n\
         RECOMMENDATION\n\
         {recommendation}\n\
         \n\
         DISCLAIMER\n\
         This report is generated by an AI screening tool for educational\n\
         purposes only. It should NOT be used as a substitute for\n\
         professional medical diagnosis. Always consult qualified\n\
         healthcare professionals for medical advice.\n\
         \n\
         Generated by DR Detection System\n",
        label = prediction.label.as_str(),
        confidence = prediction.confidence_percent(),
        architecture = metadata.architecture,
        accuracy = metadata.accuracy_percent(),
    )
}

/// Suggested report filename for an uploaded image,
/// `DR_Report_<original-basename>.txt`.
pub fn report_filename(original_name: &str) -> String {
    let stem = Path::new(original_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(original_name);
    format!("DR_Report_{stem}.txt")
}

/// Renders batch records as CSV, one row per image in input order.
pub fn render_batch_csv(records: &[BatchRecord]) -> DrResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Filename", "Prediction", "Confidence", "Status"])
        .map_err(|e| DrError::report_formatting("failed to write CSV header", e))?;
    for record in records {
        writer
            .write_record([
                record.filename.as_str(),
                record.prediction.as_str(),
                record.confidence.as_str(),
                record.status.as_str(),
            ])
            .map_err(|e| DrError::report_formatting("failed to write CSV row", e))?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        DrError::report_formatting("failed to flush CSV buffer", SimpleError::new(e.to_string()))
    })?;
    String::from_utf8(bytes)
        .map_err(|e| DrError::report_formatting("CSV output was not valid UTF-8", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::decide;

    #[test]
    fn report_contains_prediction_and_formatted_figures() {
        let metadata = ModelMetadata::default();
        let report = render_report(&decide(0.8), &metadata);
        assert!(report.contains("Prediction:     No_Diabetic_Retinopathy"));
        assert!(report.contains("80.00%"));
        assert!(report.contains("EfficientNetB3"));
        assert!(report.contains("96.0%"));
        assert!(report.contains("Continue regular eye check-ups"));
    }

    #[test]
    fn recommendation_differs_by_class() {
        let metadata = ModelMetadata::default();
        let positive = render_report(&decide(0.1), &metadata);
        let negative = render_report(&decide(0.9), &metadata);
        assert!(positive.contains("schedule an appointment with an ophthalmologist"));
        assert!(negative.contains("Continue regular eye check-ups"));
        assert_ne!(positive, negative);
    }

    #[test]
    fn report_filename_uses_the_original_stem() {
        assert_eq!(report_filename("fundus_01.jpg"), "DR_Report_fundus_01.txt");
        assert_eq!(report_filename("scan.png"), "DR_Report_scan.txt");
        assert_eq!(report_filename("noext"), "DR_Report_noext.txt");
    }

    #[test]
    fn csv_export_has_header_and_one_row_per_record() {
        let records = vec![
            BatchRecord::success("a.jpg", &decide(0.9)),
            BatchRecord::failure("b.jpg"),
        ];
        let csv = render_batch_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Filename,Prediction,Confidence,Status");
        assert_eq!(lines[1], "a.jpg,No_Diabetic_Retinopathy,90.00%,No DR");
        assert_eq!(lines[2], "b.jpg,Error,N/A,Failed");
        assert_eq!(lines.len(), 3);
    }
}
