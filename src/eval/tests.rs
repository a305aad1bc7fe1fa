//! Tests for summaries, scoring and the leaderboard

use super::*;
use crate::data::{AdmissionRecord, Dataset, Gender};
use crate::glm::{LogisticRegression, ModelSpec};
use crate::resample::{Split, SplitId};
use approx::assert_abs_diff_eq;

fn metrics(model: &str, fold: usize, accuracy: f64, log_loss: f64) -> SplitMetrics {
    SplitMetrics {
        split: SplitId::new(0, fold),
        model: model.into(),
        n: 10,
        accuracy,
        log_loss,
        clamped: 0,
    }
}

#[test]
fn test_percentile_linear_interpolation() {
    let sorted = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(percentile(&sorted, 0.0), Some(1.0));
    assert_eq!(percentile(&sorted, 1.0), Some(4.0));
    assert_abs_diff_eq!(percentile(&sorted, 0.5).unwrap(), 2.5);
    // h = 3 * 0.1 = 0.3
    assert_abs_diff_eq!(percentile(&sorted, 0.1).unwrap(), 1.3, epsilon = 1e-12);
    assert_eq!(percentile(&[], 0.5), None);
    assert_eq!(percentile(&[7.0], 0.99), Some(7.0));
}

#[test]
fn test_band_quantiles() {
    let (lo, hi) = Band::quantiles(0.95);
    assert_abs_diff_eq!(lo, 0.025, epsilon = 1e-12);
    assert_abs_diff_eq!(hi, 0.975, epsilon = 1e-12);
    let (lo, hi) = Band::quantiles(0.80);
    assert_abs_diff_eq!(lo, 0.10, epsilon = 1e-12);
    assert_abs_diff_eq!(hi, 0.90, epsilon = 1e-12);
}

#[test]
fn test_metric_summary_bands_nest() {
    let values: Vec<f64> = (0..100).map(|i| f64::from(i) * 0.01 + 0.4).collect();
    let s = MetricSummary::from_values(&values, &DEFAULT_CONFIDENCE_LEVELS).unwrap();
    let b80 = s.band(0.80).unwrap();
    let b95 = s.band(0.95).unwrap();
    let b99 = s.band(0.99).unwrap();
    assert!(b80.lower <= s.median && s.median <= b80.upper);
    assert!(b95.contains(b80));
    assert!(b99.contains(b95));
    // h = 99 * 0.1 = 9.9 -> 0.4 + 0.099
    assert_abs_diff_eq!(b80.lower, 0.499, epsilon = 1e-12);
}

#[test]
fn test_metric_summary_order_independent() {
    let a = MetricSummary::from_values(&[0.3, 0.1, 0.2, 0.5], &[0.9]).unwrap();
    let b = MetricSummary::from_values(&[0.5, 0.2, 0.1, 0.3], &[0.9]).unwrap();
    assert_eq!(a, b);
    assert_abs_diff_eq!(a.median, 0.25);
}

#[test]
fn test_summarize_groups_by_model_in_requested_order() {
    let split_metrics = vec![
        metrics("full", 0, 0.7, 0.55),
        metrics("empty", 0, 0.6, 0.69),
        metrics("full", 1, 0.8, 0.50),
        metrics("empty", 1, 0.6, 0.68),
    ];
    let order = vec!["empty".to_string(), "full".to_string(), "missing".to_string()];
    let summaries = summarize(&split_metrics, &order, &[0.8]);

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].model, "empty");
    assert_eq!(summaries[0].n_splits, 2);
    assert_abs_diff_eq!(summaries[0].log_loss.median, 0.685, epsilon = 1e-12);
    assert_abs_diff_eq!(summaries[1].accuracy.median, 0.75, epsilon = 1e-12);
}

#[test]
fn test_leaderboard_ranks_by_median_log_loss() {
    let split_metrics = vec![
        metrics("empty", 0, 0.6, 0.69),
        metrics("academics", 0, 0.7, 0.58),
        metrics("full", 0, 0.7, 0.60),
    ];
    let order: Vec<String> = ["empty", "academics", "full"].iter().map(|s| s.to_string()).collect();
    let board = Leaderboard::from_summaries(&summarize(&split_metrics, &order, &DEFAULT_CONFIDENCE_LEVELS));

    let ranked: Vec<&str> = board.results.iter().map(|r| r.model.as_str()).collect();
    assert_eq!(ranked, vec!["academics", "full", "empty"]);
    assert_eq!(board.best().unwrap().model, "academics");

    let md = board.to_markdown();
    assert!(md.contains("| academics | 1 | 0.5800 |"));
    assert!(md.contains("95% band"));

    let text = board.to_string();
    assert!(text.contains("academics"));
    assert!(text.contains("LogLoss"));
}

#[test]
fn test_leaderboard_sort_by_accuracy() {
    let split_metrics = vec![metrics("a", 0, 0.9, 0.7), metrics("b", 0, 0.6, 0.5)];
    let order = vec!["a".to_string(), "b".to_string()];
    let mut board = Leaderboard::from_summaries(&summarize(&split_metrics, &order, &[]));
    assert_eq!(board.best().unwrap().model, "b");
    board.sort_by(Metric::Accuracy);
    assert_eq!(board.best().unwrap().model, "a");
}

#[test]
fn test_empty_leaderboard_display() {
    let board = Leaderboard::new(Metric::LogLoss);
    assert_eq!(board.to_string(), "Leaderboard: (empty)\n");
    assert!(board.best().is_none());
}

#[test]
fn test_score_split_tags_and_thresholds() {
    let ds: Dataset = (0..6)
        .map(|i| AdmissionRecord {
            admit: u8::from(i < 3),
            gre_v: 150,
            gre_q: 150,
            gre_w: 4.0,
            gpa: 3.0,
            gender: Gender::Female,
        })
        .collect();
    let split = Split {
        id: SplitId::new(1, 2),
        analysis: vec![0, 1, 3, 4],
        assessment: vec![2, 5],
    };

    // Analysis set is balanced, so every fitted probability is exactly 0.5
    let model = LogisticRegression::new(ModelSpec::empty())
        .fit(&ds, &split.analysis)
        .unwrap();
    let preds = score_split(&model, &ds, &split);

    assert_eq!(preds.len(), 2);
    for p in &preds {
        assert_eq!(p.split, SplitId::new(1, 2));
        assert_eq!(p.model, "empty");
        assert_eq!(p.fitted, 0.5);
        assert_eq!(p.prediction, 0);
    }
    assert!(!preds[0].correct); // row 2 admitted
    assert!(preds[1].correct); // row 5 rejected
}
