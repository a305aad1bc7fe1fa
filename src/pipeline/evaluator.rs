//! Cross-validated comparison of logistic model specifications

use super::report::CvReport;
use crate::config::{validate_config, EvalSpec};
use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::eval::{score_split, summarize, PredictionRecord, SplitMetrics};
use crate::glm::{FitError, LogisticRegression};
use crate::resample::{RepeatedKFold, Split, SplitId};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;

/// Result of fitting and scoring one model on one split
type TaskOutcome = std::result::Result<Vec<PredictionRecord>, FitError>;

/// Runs resampling, fitting, scoring and aggregation for an [`EvalSpec`]
#[derive(Clone, Debug)]
pub struct CvEvaluator {
    spec: EvalSpec,
}

impl CvEvaluator {
    /// Create an evaluator, rejecting invalid configuration before any work
    pub fn new(spec: EvalSpec) -> Result<Self> {
        validate_config(&spec).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &EvalSpec {
        &self.spec
    }

    /// Resampler configured from the spec
    pub fn resampler(&self) -> RepeatedKFold {
        let resampling = &self.spec.resampling;
        RepeatedKFold::new(resampling.folds, resampling.repeats, resampling.seed)
            .stratified(resampling.stratify)
    }

    /// Splits this evaluator would use for `dataset`
    pub fn splits(&self, dataset: &Dataset) -> Result<Vec<Split>> {
        self.resampler().split(&dataset.outcomes())
    }

    /// Evaluate every model on every split and summarise the scores
    pub fn evaluate(&self, dataset: &Dataset) -> Result<CvReport> {
        let start = Instant::now();
        let resampling = &self.spec.resampling;
        let model_names = self.spec.model_names();
        dataset.check_outcomes()?;

        let resampler = self.resampler();
        tracing::info!(
            records = dataset.len(),
            folds = resampler.n_splits(),
            repeats = resampler.n_repeats(),
            seed = resampling.seed,
            stratify = resampling.stratify,
            models = model_names.len(),
            "starting cross-validation"
        );

        let splits = resampler.split(&dataset.outcomes())?;
        let estimators: Vec<LogisticRegression> = self
            .spec
            .models
            .iter()
            .map(|m| LogisticRegression::new(m.clone()).with_config(self.spec.fit.clone()))
            .collect();

        let tasks: Vec<(&Split, usize)> = splits
            .iter()
            .flat_map(|split| (0..estimators.len()).map(move |model| (split, model)))
            .collect();

        let run = |&(split, model): &(&Split, usize)| {
            ((split.id, model), run_task(&estimators[model], dataset, split))
        };
        let outcomes: BTreeMap<(SplitId, usize), TaskOutcome> = if self.spec.parallel {
            tasks.par_iter().map(run).collect()
        } else {
            tasks.iter().map(run).collect()
        };

        let mut first_failure = None;
        for (&(split, model), outcome) in &outcomes {
            if let Err(source) = outcome {
                tracing::error!(%split, model = %model_names[model], error = %source, "fit failed");
                first_failure.get_or_insert_with(|| Error::Fit {
                    split,
                    model: model_names[model].clone(),
                    source: source.clone(),
                });
            }
        }
        if let Some(err) = first_failure {
            return Err(err);
        }

        let mut split_metrics = Vec::with_capacity(outcomes.len());
        let mut predictions = Vec::new();
        for ((split, model), outcome) in outcomes {
            let Ok(records) = outcome else { continue };
            if let Some(metrics) = SplitMetrics::from_predictions(split, &model_names[model], &records) {
                if metrics.clamped > 0 {
                    tracing::debug!(
                        %split,
                        model = %metrics.model,
                        clamped = metrics.clamped,
                        "clamped fitted probabilities for log loss"
                    );
                }
                split_metrics.push(metrics);
            }
            if self.spec.keep_predictions {
                predictions.extend(records);
            }
        }

        let summaries = summarize(&split_metrics, &model_names, &self.spec.confidence_levels);

        tracing::info!(
            splits = splits.len(),
            fits = split_metrics.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "cross-validation finished"
        );

        Ok(CvReport {
            folds: resampling.folds,
            repeats: resampling.repeats,
            seed: resampling.seed,
            stratify: resampling.stratify,
            n_records: dataset.len(),
            models: model_names,
            split_metrics,
            summaries,
            predictions: self.spec.keep_predictions.then_some(predictions),
        })
    }
}

/// Fit one model on a split's analysis rows and score its assessment rows
fn run_task(estimator: &LogisticRegression, dataset: &Dataset, split: &Split) -> TaskOutcome {
    let fitted = estimator.fit(dataset, &split.analysis)?;
    tracing::debug!(
        split = %split.id,
        model = %fitted.spec().name,
        iterations = fitted.iterations,
        deviance = fitted.deviance,
        "model fitted"
    );
    Ok(score_split(&fitted, dataset, split))
}
