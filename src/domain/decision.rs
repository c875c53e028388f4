//! The fixed decision rule applied to the model's probability output.

use serde::{Deserialize, Serialize};

/// Predicted class for a screened fundus photograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrLabel {
    /// Signs of diabetic retinopathy detected (the positive class).
    DiabeticRetinopathy,
    /// No signs of diabetic retinopathy.
    NoDiabeticRetinopathy,
}

impl DrLabel {
    /// Returns the canonical label string used in reports and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrLabel::DiabeticRetinopathy => "Diabetic_Retinopathy",
            DrLabel::NoDiabeticRetinopathy => "No_Diabetic_Retinopathy",
        }
    }

    /// True for the positive (DR) class.
    pub fn is_positive(&self) -> bool {
        matches!(self, DrLabel::DiabeticRetinopathy)
    }
}

impl std::fmt::Display for DrLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a single screening inference.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The predicted class.
    pub label: DrLabel,
    /// The model's estimated probability of its chosen label, in [0, 1].
    pub confidence: f32,
}

impl Prediction {
    /// Confidence formatted for display, e.g. "80.00%".
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

/// Applies the fixed 0.5 threshold to the model's P(No_DR) output.
///
/// `p > 0.5` yields No_DR with confidence `p`; everything else, including
/// exactly 0.5, yields DR with confidence `1 - p`. The boundary behavior at
/// 0.5 is part of the contract and must not drift.
pub fn decide(probability: f32) -> Prediction {
    if probability > 0.5 {
        Prediction {
            label: DrLabel::NoDiabeticRetinopathy,
            confidence: probability,
        }
    } else {
        Prediction {
            label: DrLabel::DiabeticRetinopathy,
            confidence: 1.0 - probability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_probability_is_no_dr_with_confidence_p() {
        for p in [0.500001f32, 0.6, 0.8, 0.99, 1.0] {
            let prediction = decide(p);
            assert_eq!(prediction.label, DrLabel::NoDiabeticRetinopathy);
            assert_eq!(prediction.confidence, p);
        }
    }

    #[test]
    fn low_probability_is_dr_with_complement_confidence() {
        for p in [0.0f32, 0.1, 0.25, 0.499999] {
            let prediction = decide(p);
            assert_eq!(prediction.label, DrLabel::DiabeticRetinopathy);
            assert_eq!(prediction.confidence, 1.0 - p);
        }
    }

    #[test]
    fn exact_boundary_classifies_as_dr() {
        let prediction = decide(0.5);
        assert_eq!(prediction.label, DrLabel::DiabeticRetinopathy);
        assert_eq!(prediction.confidence, 0.5);
    }

    #[test]
    fn confidence_formats_with_two_decimals() {
        assert_eq!(decide(0.8).confidence_percent(), "80.00%");
        assert_eq!(decide(0.2).confidence_percent(), "80.00%");
        assert_eq!(decide(1.0).confidence_percent(), "100.00%");
    }

    #[test]
    fn label_strings_are_canonical() {
        assert_eq!(
            DrLabel::DiabeticRetinopathy.as_str(),
            "Diabetic_Retinopathy"
        );
        assert_eq!(
            DrLabel::NoDiabeticRetinopathy.as_str(),
            "No_Diabetic_Retinopathy"
        );
        assert!(DrLabel::DiabeticRetinopathy.is_positive());
        assert!(!DrLabel::NoDiabeticRetinopathy.is_positive());
    }
}
