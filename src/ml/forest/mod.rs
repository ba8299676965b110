//! Random forest classifier.
//!
//! Trees are grown independently on bootstrap samples and stored as flat
//! node arenas; the forest averages their leaf class distributions.

mod random_forest;
mod tree;

pub(crate) use random_forest::argmax;
pub use random_forest::{ClassifierState, ForestParams, RandomForest};
pub use tree::{DecisionTree, SplitCondition, TreeNode, TreeParams};
