//! Flat clustering operations over concept-formation trees.
//!
//! Three operations share one mechanism. [`split_seq`] holds the
//! split-sequence driver: it deepens a private copy of the tree split by
//! split and yields the induced instance partition at each step.
//! [`bounded`] consumes that sequence to find the finest partition within a
//! cluster-count bound, and [`depth`] reads the fitted hierarchy level by
//! level without splitting anything.

pub mod bounded;
pub mod depth;
pub mod split_seq;

use crate::tree::{ConceptTree, NodeId};

/// Controls how instances enter the tree before labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsertMode {
    /// Insert with `ifit`, incorporating each instance into the tree's
    /// statistics.
    Fit,
    /// Look up the best-fit leaf with `categorize`, leaving the tree's
    /// statistics untouched.
    Categorize,
}

/// Runs every instance through the tree per `mode` and returns the leaf
/// each one settled into, in input order.
pub(crate) fn insert_instances<T: ConceptTree>(
    tree: &mut T,
    instances: &[T::Instance],
    mode: InsertMode,
) -> Vec<NodeId> {
    match mode {
        InsertMode::Fit => instances.iter().map(|instance| tree.ifit(instance)).collect(),
        InsertMode::Categorize => instances
            .iter()
            .map(|instance| tree.categorize(instance))
            .collect(),
    }
}
