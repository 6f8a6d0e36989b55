//! Split-sequence driver: successive flat clusterings from repeated splits.
//!
//! The driver deep-copies the input tree, runs every instance through it,
//! then repeatedly splits the least cohesive child of the root — the one
//! whose hypothetical split gains the most category utility — yielding the
//! induced instance partition after each split in the requested range.

use num_traits::AsPrimitive;
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use super::{InsertMode, insert_instances};
use crate::common_types::{Clustering, concept_label};
use crate::error::{ClusterError, ClusterResult};
use crate::tree::{ConceptTree, NodeId};

/// Iterator over the clusterings produced by successive splits.
///
/// The sequence is lazy (each clustering is computed when requested) and
/// single-use: restarting requires calling [`cluster_iter`] again, which
/// re-copies the tree and re-inserts the instances. Abandoning the iterator
/// early is safe and needs no cleanup.
#[derive(Debug)]
pub struct SplitSequence<T: ConceptTree> {
    /// Private copy of the caller's tree; every split lands here.
    tree: T,
    /// Leaf each instance settled into, in input order.
    leaves: Vec<NodeId>,
    next_split: usize,
    minsplit: usize,
    maxsplit: usize,
    exhausted: bool,
}

impl<T: ConceptTree> SplitSequence<T> {
    /// Default minimum number of splits before the first clustering.
    pub const DEFAULT_MINSPLIT: usize = 1;
    /// Default cap on the number of splits.
    pub const DEFAULT_MAXSPLIT: usize = 100_000;

    /// Labels every instance by its ancestor directly under the root.
    ///
    /// Nodes deeper than depth 1 collapse to their depth-1 ancestor; a leaf
    /// that is itself the root keeps the root's label.
    fn current_labels(&self) -> Clustering {
        self.leaves
            .iter()
            .map(|&leaf| {
                let mut node = leaf;
                while let Some(parent) = self.tree.parent(node) {
                    if self.tree.parent(parent).is_none() {
                        break;
                    }
                    node = parent;
                }
                concept_label(&self.tree.concept_id(node))
            })
            .collect()
    }

    /// Picks the root child whose split gains the most category utility.
    ///
    /// Only children that themselves have children are candidates. The
    /// selection key is `(gain, child index)`, so equal gains resolve to
    /// the later-indexed child.
    fn select_split(&self) -> Option<NodeId> {
        let root = self.tree.root();
        let base = self.tree.category_utility();
        self.tree
            .children(root)
            .iter()
            .enumerate()
            .filter(|&(_, &child)| !self.tree.children(child).is_empty())
            .max_by_key(|&(index, &child)| {
                let gain: f64 = (self.tree.cu_for_split(child) - base).as_();
                (OrderedFloat(gain), index)
            })
            .map(|(_, &child)| child)
    }
}

impl<T: ConceptTree> Iterator for SplitSequence<T> {
    type Item = Clustering;

    fn next(&mut self) -> Option<Clustering> {
        while !self.exhausted && self.next_split <= self.maxsplit {
            let nth_split = self.next_split;
            // The labeling for split n reflects the tree after n-1 splits.
            let labels = (nth_split >= self.minsplit).then(|| self.current_labels());

            match self.select_split() {
                Some(child) => {
                    trace!(nth_split, child = child.0, "splitting least cohesive cluster");
                    self.tree.split(child);
                }
                None => {
                    // Every instance sits in its own leaf-adjacent cluster;
                    // the sequence ends here, silently.
                    debug!(nth_split, "no splittable children remain");
                    self.exhausted = true;
                }
            }
            self.next_split += 1;

            if let Some(labels) = labels {
                return Some(labels);
            }
        }
        None
    }
}

/// Categorizes `instances` into a copy of `tree` and returns an iterator
/// over cluster labelings generated from successive splits.
///
/// The first clustering is produced after `minsplit` splits and the last
/// after at most `maxsplit`; the sequence ends early once no cluster can be
/// split further. `minsplit` and `maxsplit` default to
/// [`SplitSequence::DEFAULT_MINSPLIT`] and
/// [`SplitSequence::DEFAULT_MAXSPLIT`]. Because splitting is a modifying
/// operation, the tree is deep-copied before anything else happens; the
/// caller's tree is never mutated, in either [`InsertMode`].
///
/// Fails with [`ClusterError::InvalidArgument`] if `minsplit < 1` or
/// `maxsplit < minsplit`.
pub fn cluster_iter<T: ConceptTree>(
    tree: &T,
    instances: &[T::Instance],
    minsplit: Option<usize>,
    maxsplit: Option<usize>,
    mode: InsertMode,
) -> ClusterResult<SplitSequence<T>> {
    let minsplit = minsplit.unwrap_or(SplitSequence::<T>::DEFAULT_MINSPLIT);
    let maxsplit = maxsplit.unwrap_or(SplitSequence::<T>::DEFAULT_MAXSPLIT);

    if minsplit < 1 {
        return Err(ClusterError::invalid_argument("minsplit must be >= 1"));
    }
    if maxsplit < minsplit {
        return Err(ClusterError::invalid_argument(
            "maxsplit must be >= minsplit",
        ));
    }

    let mut tree = tree.clone();
    let leaves = insert_instances(&mut tree, instances, mode);
    debug!(
        instances = leaves.len(),
        minsplit, maxsplit, "starting split sequence"
    );

    Ok(SplitSequence {
        tree,
        leaves,
        next_split: 1,
        minsplit,
        maxsplit,
        exhausted: false,
    })
}

/// Eager form of [`cluster_iter`]: collects the clusterings into a list.
///
/// Unlike the iterator form, `maxsplit` defaults to 1, so by default this
/// returns exactly the first clustering of the sequence.
pub fn cluster<T: ConceptTree>(
    tree: &T,
    instances: &[T::Instance],
    minsplit: Option<usize>,
    maxsplit: Option<usize>,
    mode: InsertMode,
) -> ClusterResult<Vec<Clustering>> {
    Ok(cluster_iter(tree, instances, minsplit, maxsplit.or(Some(1)), mode)?.collect())
}
