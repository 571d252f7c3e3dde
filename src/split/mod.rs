//! Deterministic train/val/test splitting.

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::fmt;

use crate::error::YolosetError;

/// One of the three dataset partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subset {
    Train,
    Val,
    Test,
}

impl Subset {
    /// All subsets in output order.
    pub const ALL: [Subset; 3] = [Subset::Train, Subset::Val, Subset::Test];

    /// Directory name of the subset under the output root.
    pub fn as_str(self) -> &'static str {
        match self {
            Subset::Train => "train",
            Subset::Val => "val",
            Subset::Test => "test",
        }
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target proportions for the train and val subsets; test takes the rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitRatios {
    pub train: f64,
    pub val: f64,
}

impl SplitRatios {
    pub fn new(train: f64, val: f64) -> Self {
        Self { train, val }
    }

    pub fn validate(&self) -> Result<(), YolosetError> {
        for (name, value) in [("train", self.train), ("val", self.val)] {
            if !(value.is_finite() && (0.0..=1.0).contains(&value)) {
                return Err(YolosetError::InvalidConfig {
                    message: format!("{name} ratio must be in [0.0, 1.0], got {value}"),
                });
            }
        }

        if self.train + self.val > 1.0 {
            return Err(YolosetError::InvalidConfig {
                message: format!(
                    "train + val ratios must not exceed 1.0, got {}",
                    self.train + self.val
                ),
            });
        }

        Ok(())
    }

    /// Subset sizes for `total` records: `(train, val, test)`.
    ///
    /// Train and val are rounded down; test absorbs the remainder.
    pub fn sizes(&self, total: usize) -> (usize, usize, usize) {
        let train = ((total as f64 * self.train).floor() as usize).min(total);
        let val = ((total as f64 * self.val).floor() as usize).min(total - train);
        (train, val, total - train - val)
    }
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self::new(0.8, 0.1)
    }
}

/// The three disjoint partitions of a record list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetSplit<T> {
    pub train: Vec<T>,
    pub val: Vec<T>,
    pub test: Vec<T>,
}

impl<T> DatasetSplit<T> {
    pub fn get(&self, subset: Subset) -> &[T] {
        match subset {
            Subset::Train => &self.train,
            Subset::Val => &self.val,
            Subset::Test => &self.test,
        }
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subsets with their members, in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Subset, &[T])> {
        Subset::ALL.into_iter().map(move |subset| (subset, self.get(subset)))
    }
}

/// Shuffle `items` with a seeded generator and cut it into train, val and test.
///
/// The same input order and seed always produce the same split. Callers that
/// want a split that depends only on the input *set* should sort first.
pub fn split_records<T: Clone>(items: &[T], ratios: &SplitRatios, seed: u64) -> DatasetSplit<T> {
    let mut shuffled = items.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let (n_train, n_val, _) = ratios.sizes(shuffled.len());
    let test = shuffled.split_off(n_train + n_val);
    let val = shuffled.split_off(n_train);

    DatasetSplit {
        train: shuffled,
        val,
        test,
    }
}
