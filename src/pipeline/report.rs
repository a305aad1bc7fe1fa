//! Cross-validation report and its JSON/CSV outputs

use crate::error::Result;
use crate::eval::{Leaderboard, ModelSummary, PredictionRecord, SplitMetrics};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File names written by [`CvReport::write_to_dir`]
pub const REPORT_FILE: &str = "report.json";
pub const SPLIT_METRICS_FILE: &str = "split_metrics.csv";
pub const SUMMARIES_FILE: &str = "model_summaries.csv";

/// Everything produced by one cross-validation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CvReport {
    pub folds: usize,
    pub repeats: usize,
    pub seed: u64,
    pub stratify: bool,
    /// Size of the evaluated dataset
    pub n_records: usize,
    /// Model names in configuration order
    pub models: Vec<String>,
    /// One entry per (split, model), ordered by (repeat, fold, model)
    pub split_metrics: Vec<SplitMetrics>,
    /// One entry per model, in configuration order
    pub summaries: Vec<ModelSummary>,
    /// Every scored assessment record, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<PredictionRecord>>,
}

impl CvReport {
    /// Models ranked by median log loss
    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::from_summaries(&self.summaries)
    }

    pub fn summary(&self, model: &str) -> Option<&ModelSummary> {
        self.summaries.iter().find(|s| s.model == model)
    }

    /// Split metrics of a single model, in split order
    pub fn metrics_for<'a>(&'a self, model: &'a str) -> impl Iterator<Item = &'a SplitMetrics> + 'a {
        self.split_metrics.iter().filter(move |m| m.model == model)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Flat per-split table: `repeat,fold,model,n,accuracy,log_loss,clamped`
    pub fn write_split_metrics_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["repeat", "fold", "model", "n", "accuracy", "log_loss", "clamped"])?;
        for m in &self.split_metrics {
            wtr.write_record([
                m.split.repeat_label(),
                m.split.fold_label(),
                m.model.clone(),
                m.n.to_string(),
                m.accuracy.to_string(),
                m.log_loss.to_string(),
                m.clamped.to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Long-format summary table: one row per (model, metric, level)
    ///
    /// Columns: `model,metric,n_splits,median,level,lower,upper`. A metric
    /// without bands still gets one row, with the band columns left empty.
    pub fn write_summaries_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["model", "metric", "n_splits", "median", "level", "lower", "upper"])?;
        for summary in &self.summaries {
            for (metric, stats) in [("log_loss", &summary.log_loss), ("accuracy", &summary.accuracy)] {
                if stats.bands.is_empty() {
                    wtr.write_record([
                        summary.model.clone(),
                        metric.to_string(),
                        summary.n_splits.to_string(),
                        stats.median.to_string(),
                        String::new(),
                        String::new(),
                        String::new(),
                    ])?;
                }
                for band in &stats.bands {
                    wtr.write_record([
                        summary.model.clone(),
                        metric.to_string(),
                        summary.n_splits.to_string(),
                        stats.median.to_string(),
                        band.level.to_string(),
                        band.lower.to_string(),
                        band.upper.to_string(),
                    ])?;
                }
            }
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the JSON report and both CSV tables into `dir`, creating it if needed
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let report_path = dir.join(REPORT_FILE);
        fs::write(&report_path, self.to_json()?)?;

        let metrics_path = dir.join(SPLIT_METRICS_FILE);
        self.write_split_metrics_csv(fs::File::create(&metrics_path)?)?;

        let summaries_path = dir.join(SUMMARIES_FILE);
        self.write_summaries_csv(fs::File::create(&summaries_path)?)?;

        tracing::info!(dir = %dir.display(), "report written");
        Ok(vec![report_path, metrics_path, summaries_path])
    }
}
