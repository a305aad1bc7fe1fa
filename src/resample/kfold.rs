//! K-Fold and repeated K-Fold cross-validation splitters

use super::split::{Split, SplitId};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Derive an independent, reproducible seed for one repeat
///
/// SplitMix64 finalizer over the run seed offset by the repeat index, so
/// neighbouring repeats get uncorrelated streams.
pub fn repeat_seed(seed: u64, repeat: usize) -> u64 {
    let mut z = seed.wrapping_add((repeat as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Validate fold and repeat counts against a dataset size
pub fn check_fold_params(n_splits: usize, n_repeats: usize, n_samples: usize) -> Result<()> {
    if n_splits < 2 {
        return Err(Error::InvalidConfig(format!(
            "fold count must be at least 2, got {n_splits}"
        )));
    }
    if n_splits > n_samples {
        return Err(Error::InvalidConfig(format!(
            "fold count {n_splits} exceeds dataset size {n_samples}"
        )));
    }
    if n_repeats < 1 {
        return Err(Error::InvalidConfig(
            "repeat count must be at least 1".into(),
        ));
    }
    Ok(())
}

/// K-Fold cross-validation splitter
#[derive(Clone, Debug)]
pub struct KFold {
    n_splits: usize,
    shuffle: bool,
    stratify: bool,
    seed: u64,
}

impl KFold {
    /// Create a new KFold splitter
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle: true,
            stratify: false,
            seed: 42,
        }
    }

    /// Set random seed for shuffling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Disable shuffling
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Balance outcome classes across folds
    pub fn stratified(mut self, stratify: bool) -> Self {
        self.stratify = stratify;
        self
    }

    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Fold number for every row, drawn from `rng`
    ///
    /// Without stratification the shuffled order is cut into contiguous
    /// chunks, the first `n % k` chunks one row longer. With stratification
    /// rows are shuffled within each outcome class (zero or nonzero label), the classes are laid end
    /// to end and position `i` goes to fold `i % k`. Either way fold sizes
    /// differ by at most one.
    fn assign(&self, labels: &[u8], rng: &mut StdRng) -> Vec<usize> {
        let n_samples = labels.len();
        let k = self.n_splits;
        let mut assignment = vec![0; n_samples];

        if self.stratify {
            let mut order = Vec::with_capacity(n_samples);
            for positive in [false, true] {
                let mut members: Vec<usize> =
                    (0..n_samples).filter(|&i| (labels[i] != 0) == positive).collect();
                if self.shuffle {
                    members.shuffle(rng);
                }
                order.extend(members);
            }
            for (pos, &row) in order.iter().enumerate() {
                assignment[row] = pos % k;
            }
            return assignment;
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if self.shuffle {
            indices.shuffle(rng);
        }

        let fold_size = n_samples / k;
        let remainder = n_samples % k;
        let mut start = 0;
        for fold in 0..k {
            let end = start + fold_size + usize::from(fold < remainder);
            for &row in &indices[start..end] {
                assignment[row] = fold;
            }
            start = end;
        }
        assignment
    }

    /// Splits for one repeat over rows with the given outcome labels
    pub fn split_labels(&self, labels: &[u8], repeat: usize) -> Result<Vec<Split>> {
        check_fold_params(self.n_splits, 1, labels.len())?;

        let mut rng = StdRng::seed_from_u64(repeat_seed(self.seed, repeat));
        let assignment = self.assign(labels, &mut rng);

        Ok((0..self.n_splits)
            .map(|fold| Split::from_assignment(SplitId::new(repeat, fold), &assignment))
            .collect())
    }

    /// Generate train/test indices for each fold
    pub fn split(&self, n_samples: usize) -> Result<Vec<(Vec<usize>, Vec<usize>)>> {
        let labels = vec![0; n_samples];
        Ok(self
            .split_labels(&labels, 0)?
            .into_iter()
            .map(|s| (s.analysis, s.assessment))
            .collect())
    }
}

/// Repeated K-Fold splitter: `repeats` independent K-Fold partitions
#[derive(Clone, Debug)]
pub struct RepeatedKFold {
    kfold: KFold,
    n_repeats: usize,
}

impl RepeatedKFold {
    pub fn new(n_splits: usize, n_repeats: usize, seed: u64) -> Self {
        Self {
            kfold: KFold::new(n_splits).with_seed(seed),
            n_repeats,
        }
    }

    /// Balance outcome classes across folds
    pub fn stratified(mut self, stratify: bool) -> Self {
        self.kfold = self.kfold.stratified(stratify);
        self
    }

    pub fn n_splits(&self) -> usize {
        self.kfold.n_splits
    }

    pub fn n_repeats(&self) -> usize {
        self.n_repeats
    }

    /// All `repeats x folds` splits ordered by (repeat, fold)
    pub fn split(&self, labels: &[u8]) -> Result<Vec<Split>> {
        check_fold_params(self.kfold.n_splits, self.n_repeats, labels.len())?;

        let mut splits = Vec::with_capacity(self.n_repeats * self.kfold.n_splits);
        for repeat in 0..self.n_repeats {
            splits.extend(self.kfold.split_labels(labels, repeat)?);
        }
        Ok(splits)
    }
}
