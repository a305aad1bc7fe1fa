//! Resampling: repeated k-fold splits of a dataset's row indices

mod kfold;
mod split;


pub use kfold::{check_fold_params, repeat_seed, KFold, RepeatedKFold};
pub use split::{Split, SplitId};
