//! CART decision tree grown with Gini impurity.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{DoshaError, Result};

/// Split condition for a decision node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitCondition {
    /// Feature index to split on
    pub feature_index: u32,
    /// Threshold value (go left if feature <= threshold)
    pub threshold: f64,
}

impl SplitCondition {
    pub fn new(feature_index: u32, threshold: f64) -> Self {
        Self {
            feature_index,
            threshold,
        }
    }

    #[inline]
    pub fn go_left(&self, feature_value: f64) -> bool {
        feature_value <= self.threshold
    }
}

/// A node in a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Internal split node
    Split {
        condition: SplitCondition,
        left: u32,
        right: u32,
    },
    /// Class distribution of the training samples that reached this leaf.
    Leaf(Vec<f64>),
}

impl TreeNode {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

/// Growth parameters for a single tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeParams {
    /// Non-constant features examined per split.
    pub max_features: usize,
    /// Nodes with fewer samples become leaves.
    pub min_samples_split: usize,
}

/// A fully grown classification tree stored as a node arena. Node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    n_classes: usize,
}

impl DecisionTree {
    /// Grow a tree over the rows listed in `samples`.
    ///
    /// `samples` may contain repeated rows (bootstrap draws); each repetition
    /// counts as one sample. `targets` holds class indices below `n_classes`.
    pub fn fit<R: Rng>(
        features: &[Vec<f64>],
        targets: &[usize],
        samples: &[usize],
        n_classes: usize,
        params: &TreeParams,
        rng: &mut R,
    ) -> Result<Self> {
        if samples.is_empty() {
            return Err(DoshaError::model("cannot grow a tree without samples"));
        }
        if features.len() != targets.len() {
            return Err(DoshaError::model(format!(
                "{} feature rows but {} targets",
                features.len(),
                targets.len()
            )));
        }

        let mut builder = TreeBuilder {
            features,
            targets,
            n_classes,
            n_features: features.first().map_or(0, Vec::len),
            params,
            nodes: Vec::new(),
        };
        builder.grow(samples.to_vec(), rng);

        Ok(Self {
            nodes: builder.nodes,
            n_classes,
        })
    }

    /// Class distribution of the leaf `x` falls into.
    pub fn predict_proba(&self, x: &[f64]) -> &[f64] {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                TreeNode::Split {
                    condition,
                    left,
                    right,
                } => {
                    let value = x
                        .get(condition.feature_index as usize)
                        .copied()
                        .unwrap_or(0.0);
                    idx = if condition.go_left(value) { *left } else { *right } as usize;
                }
                TreeNode::Leaf(distribution) => return distribution,
            }
        }
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }
}

struct TreeBuilder<'a> {
    features: &'a [Vec<f64>],
    targets: &'a [usize],
    n_classes: usize,
    n_features: usize,
    params: &'a TreeParams,
    nodes: Vec<TreeNode>,
}

impl TreeBuilder<'_> {
    fn grow<R: Rng>(&mut self, samples: Vec<usize>, rng: &mut R) -> u32 {
        let node_id = self.nodes.len() as u32;
        let counts = self.class_counts(&samples);

        let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let split = if pure || samples.len() < self.params.min_samples_split {
            None
        } else {
            self.best_split(&samples, &counts, rng)
        };

        let Some(condition) = split else {
            self.nodes.push(TreeNode::Leaf(distribution(&counts)));
            return node_id;
        };

        // Placeholder until both children exist.
        self.nodes.push(TreeNode::Leaf(Vec::new()));

        let features = self.features;
        let feature = condition.feature_index as usize;
        let (left, right): (Vec<usize>, Vec<usize>) = samples
            .into_iter()
            .partition(|&s| condition.go_left(features[s][feature]));

        let left = self.grow(left, rng);
        let right = self.grow(right, rng);
        self.nodes[node_id as usize] = TreeNode::Split {
            condition,
            left,
            right,
        };
        node_id
    }

    /// Lowest weighted Gini split over randomly drawn features.
    ///
    /// Constant features are skipped without counting toward `max_features`,
    /// so drawing continues until enough informative features were examined.
    fn best_split<R: Rng>(
        &self,
        samples: &[usize],
        counts: &[usize],
        rng: &mut R,
    ) -> Option<SplitCondition> {
        let n = samples.len() as f64;
        let mut candidates: Vec<usize> = (0..self.n_features).collect();
        candidates.shuffle(rng);

        let mut best: Option<(f64, SplitCondition)> = None;
        let mut visited = 0;
        let mut column: Vec<(f64, usize)> = Vec::with_capacity(samples.len());
        let mut left_counts = vec![0usize; self.n_classes];

        for feature in candidates {
            if visited >= self.params.max_features {
                break;
            }

            column.clear();
            column.extend(
                samples
                    .iter()
                    .map(|&s| (self.features[s][feature], self.targets[s])),
            );
            column.sort_by(|a, b| a.0.total_cmp(&b.0));

            let (first, last) = (column[0].0, column[column.len() - 1].0);
            if first >= last {
                continue;
            }
            visited += 1;

            left_counts.iter_mut().for_each(|c| *c = 0);
            for i in 0..column.len() - 1 {
                left_counts[column[i].1] += 1;

                let (value, next) = (column[i].0, column[i + 1].0);
                if value >= next {
                    continue;
                }

                let n_left = (i + 1) as f64;
                let n_right = n - n_left;
                let impurity = (n_left * gini(&left_counts, n_left)
                    + n_right * gini_of_rest(counts, &left_counts, n_right))
                    / n;

                if best.is_none_or(|(lowest, _)| impurity < lowest) {
                    let mut threshold = (value + next) / 2.0;
                    if threshold >= next {
                        threshold = value;
                    }
                    best = Some((impurity, SplitCondition::new(feature as u32, threshold)));
                }
            }
        }

        best.map(|(_, condition)| condition)
    }

    fn class_counts(&self, samples: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes];
        for &s in samples {
            counts[self.targets[s]] += 1;
        }
        counts
    }
}

fn distribution(counts: &[usize]) -> Vec<f64> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts.iter().map(|&c| c as f64 / total as f64).collect()
}

fn gini(counts: &[usize], total: f64) -> f64 {
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

fn gini_of_rest(counts: &[usize], left_counts: &[usize], total: f64) -> f64 {
    1.0 - counts
        .iter()
        .zip(left_counts)
        .map(|(&all, &left)| {
            let p = (all - left) as f64 / total;
            p * p
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(max_features: usize) -> TreeParams {
        TreeParams {
            max_features,
            min_samples_split: 2,
        }
    }

    #[test]
    fn split_condition_threshold_goes_left() {
        let cond = SplitCondition::new(0, 0.5);
        assert!(cond.go_left(0.3));
        assert!(cond.go_left(0.5));
        assert!(!cond.go_left(0.7));
    }

    #[test]
    fn gini_of_pure_and_even_nodes() {
        assert_eq!(gini(&[4, 0], 4.0), 0.0);
        assert!((gini(&[2, 2], 4.0) - 0.5).abs() < 1e-12);
        assert!((gini_of_rest(&[3, 3], &[1, 1], 4.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn fits_separable_data_exactly() {
        let features = vec![
            vec![0.0, 1.0],
            vec![0.1, 1.0],
            vec![0.9, 1.0],
            vec![1.0, 1.0],
        ];
        let targets = vec![0, 0, 1, 1];
        let samples: Vec<usize> = (0..4).collect();
        let mut rng = StdRng::seed_from_u64(0);

        let tree = DecisionTree::fit(&features, &targets, &samples, 2, &params(1), &mut rng).unwrap();

        // The constant second column is never chosen.
        assert_eq!(tree.nodes().len(), 3);
        assert_eq!(tree.predict_proba(&[0.05, 1.0]), &[1.0, 0.0]);
        assert_eq!(tree.predict_proba(&[0.95, 1.0]), &[0.0, 1.0]);
    }

    #[test]
    fn pure_samples_make_a_single_leaf() {
        let features = vec![vec![0.0], vec![1.0]];
        let targets = vec![1, 1];
        let mut rng = StdRng::seed_from_u64(0);

        let tree = DecisionTree::fit(&features, &targets, &[0, 1], 3, &params(1), &mut rng).unwrap();
        assert_eq!(tree.n_leaves(), 1);
        assert_eq!(tree.predict_proba(&[0.5]), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn inseparable_duplicates_keep_a_mixed_leaf() {
        let features = vec![vec![0.5], vec![0.5], vec![0.5]];
        let targets = vec![0, 1, 1];
        let mut rng = StdRng::seed_from_u64(0);

        let tree = DecisionTree::fit(&features, &targets, &[0, 1, 2], 2, &params(1), &mut rng).unwrap();
        let proba = tree.predict_proba(&[0.5]);
        assert!((proba[0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((proba[1] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn repeated_rows_are_weighted() {
        let features = vec![vec![0.0], vec![1.0]];
        let targets = vec![0, 1];
        let mut rng = StdRng::seed_from_u64(0);

        let tree = DecisionTree::fit(&features, &targets, &[0, 0, 0, 1], 2, &params(1), &mut rng).unwrap();
        assert_eq!(tree.predict_proba(&[0.0]), &[1.0, 0.0]);
        assert_eq!(tree.predict_proba(&[1.0]), &[0.0, 1.0]);
    }

    #[test]
    fn empty_samples_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(DecisionTree::fit(&[vec![0.0]], &[0], &[], 1, &params(1), &mut rng).is_err());
    }
}
