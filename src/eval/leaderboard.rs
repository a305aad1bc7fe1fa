//! Leaderboard for comparing candidate models

use super::metrics::Metric;
use super::summary::ModelSummary;
use std::fmt;

/// Model summaries ranked by the median of a primary metric
#[derive(Clone, Debug)]
pub struct Leaderboard {
    /// Summaries, best first
    pub results: Vec<ModelSummary>,
    /// Primary metric for ranking
    pub primary_metric: Metric,
}

impl Leaderboard {
    /// Create a new leaderboard
    pub fn new(primary_metric: Metric) -> Self {
        Self {
            results: Vec::new(),
            primary_metric,
        }
    }

    /// Build from summaries, ranked by median log loss
    pub fn from_summaries(summaries: &[ModelSummary]) -> Self {
        let mut board = Self::new(Metric::LogLoss);
        for summary in summaries {
            board.add(summary.clone());
        }
        board
    }

    /// Add a model summary
    pub fn add(&mut self, result: ModelSummary) {
        self.results.push(result);
        self.sort();
    }

    /// Sort by primary metric
    pub fn sort(&mut self) {
        self.sort_by(self.primary_metric);
    }

    /// Sort by the median of a specific metric (stable for ties)
    pub fn sort_by(&mut self, metric: Metric) {
        self.primary_metric = metric;
        let higher_is_better = metric.higher_is_better();
        self.results.sort_by(|a, b| {
            let score_a = a.metric(metric).median;
            let score_b = b.metric(metric).median;
            if higher_is_better {
                score_b.total_cmp(&score_a)
            } else {
                score_a.total_cmp(&score_b)
            }
        });
    }

    /// Get best model by primary metric
    pub fn best(&self) -> Option<&ModelSummary> {
        self.results.first()
    }

    fn levels(&self) -> Vec<f64> {
        self.results
            .first()
            .map(|r| r.log_loss.bands.iter().map(|b| b.level).collect())
            .unwrap_or_default()
    }

    /// Export as markdown table
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let levels = self.levels();

        md.push_str("| Model | Splits | Median log loss |");
        for level in &levels {
            md.push_str(&format!(" {:.0}% band |", level * 100.0));
        }
        md.push_str(" Median accuracy |\n");

        md.push_str("|-------|--------|-----------------|");
        for _ in &levels {
            md.push_str("---------|");
        }
        md.push_str("-----------------|\n");

        for result in &self.results {
            md.push_str(&format!(
                "| {} | {} | {:.4} |",
                result.model, result.n_splits, result.log_loss.median
            ));
            for band in &result.log_loss.bands {
                md.push_str(&format!(" {:.4} - {:.4} |", band.lower, band.upper));
            }
            md.push_str(&format!(" {:.4} |\n", result.accuracy.median));
        }

        md
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.results.is_empty() {
            return writeln!(f, "Leaderboard: (empty)");
        }

        let levels = self.levels();
        let model_width = self
            .results
            .iter()
            .map(|r| r.model.len())
            .max()
            .unwrap_or(5)
            .max(5);

        // Header
        write!(f, "┌{:─<width$}┬{:─<10}┬", "", "", width = model_width + 2)?;
        for _ in &levels {
            write!(f, "{:─<21}┬", "")?;
        }
        writeln!(f, "{:─<10}┐", "")?;

        write!(f, "│ {:width$} │ {:>8} │", "Model", "LogLoss", width = model_width)?;
        for level in &levels {
            write!(f, " {:>19} │", format!("{:.0}% band", level * 100.0))?;
        }
        writeln!(f, " {:>8} │", "Accuracy")?;

        // Separator
        write!(f, "├{:─<width$}┼{:─<10}┼", "", "", width = model_width + 2)?;
        for _ in &levels {
            write!(f, "{:─<21}┼", "")?;
        }
        writeln!(f, "{:─<10}┤", "")?;

        // Rows
        for result in &self.results {
            write!(
                f,
                "│ {:width$} │ {:>8.4} │",
                result.model,
                result.log_loss.median,
                width = model_width
            )?;
            for band in &result.log_loss.bands {
                write!(f, " {:>8.4} - {:>8.4} │", band.lower, band.upper)?;
            }
            writeln!(f, " {:>8.4} │", result.accuracy.median)?;
        }

        // Footer
        write!(f, "└{:─<width$}┴{:─<10}┴", "", "", width = model_width + 2)?;
        for _ in &levels {
            write!(f, "{:─<21}┴", "")?;
        }
        writeln!(f, "{:─<10}┘", "")?;

        Ok(())
    }
}
