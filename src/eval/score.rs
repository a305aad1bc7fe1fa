//! Scoring held-out rows with a fitted model

use crate::data::Dataset;
use crate::glm::FittedModel;
use crate::resample::{Split, SplitId};
use serde::{Deserialize, Serialize};

/// Probability above which a record is classified as admitted.
/// Ties go to the negative class.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// One assessment row scored by one model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub split: SplitId,
    pub model: String,
    /// Row index into the original dataset
    pub row: usize,
    /// Observed outcome
    pub admit: u8,
    /// Predicted probability of admission
    pub fitted: f64,
    /// Thresholded decision
    pub prediction: u8,
    pub correct: bool,
}

/// Classify a probability with the strict `> 0.5` rule
pub fn classify(fitted: f64) -> u8 {
    u8::from(fitted > DECISION_THRESHOLD)
}

/// Score every assessment row of `split` with `model`
pub fn score_split(model: &FittedModel, dataset: &Dataset, split: &Split) -> Vec<PredictionRecord> {
    split
        .assessment
        .iter()
        .map(|&row| {
            let record = dataset.get(row);
            let fitted = model.predict_proba(record);
            let prediction = classify(fitted);
            PredictionRecord {
                split: split.id,
                model: model.spec().name.clone(),
                row,
                admit: record.admit,
                fitted,
                prediction,
                correct: prediction == record.admit,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_goes_negative() {
        assert_eq!(classify(0.5), 0);
        assert_eq!(classify(0.500_000_1), 1);
        assert_eq!(classify(0.0), 0);
        assert_eq!(classify(1.0), 1);
    }
}
