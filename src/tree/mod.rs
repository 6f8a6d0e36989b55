//! This module contains the concept tree contract required by the clustering
//! operations.
//!
//! A concept tree is an incrementally trained hierarchy of concept nodes:
//! leaves are most specific, the root is most general, and every internal
//! node summarizes the instances beneath it. Building and scoring such a
//! tree is the collaborator's job; the clustering operations only need the
//! handful of operations captured by [`ConceptTree`].

use num_traits::{AsPrimitive, Float};

/// Handle to a node within a concept tree.
///
/// Trees are expected to hold their nodes in an indexed table, so a handle
/// is just the node's index. Handles for nodes that remain in the tree stay
/// valid across [`ConceptTree::split`] calls; in particular the leaf a fit
/// instance settled into can be walked upward after any number of splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

/// The contract a Cobweb-style concept tree must satisfy for clustering.
///
/// `Clone` must produce a fully independent deep copy: the split-sequence
/// driver clones the caller's tree once up front and performs every mutation
/// on the copy, so the input tree is never observably changed by a
/// clustering run.
///
/// Structural invariant supplied by the tree: every internal node has at
/// least two children.
pub trait ConceptTree: Clone {
    /// Instance representation accepted by `ifit` and `categorize`.
    type Instance;

    /// Category utility score type. Trees scoring in `f32` or `f64` both
    /// satisfy the bound.
    type Utility: Float + AsPrimitive<f64>;

    /// The root node. The root is the only node without a parent.
    fn root(&self) -> NodeId;

    /// Stable identifier of `node`, unique within the tree. Cluster labels
    /// are derived from it.
    fn concept_id(&self, node: NodeId) -> String;

    /// Parent of `node`, or `None` exactly at the root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Children of `node` in tree order; empty for leaves.
    fn children(&self, node: NodeId) -> &[NodeId];

    /// Inserts `instance`, incorporating it into the tree's statistics, and
    /// returns the leaf it settled into.
    fn ifit(&mut self, instance: &Self::Instance) -> NodeId;

    /// Locates the best-fit leaf for `instance` without altering any tree
    /// statistics.
    fn categorize(&self, instance: &Self::Instance) -> NodeId;

    /// Current category utility of the root's partition.
    fn category_utility(&self) -> Self::Utility;

    /// Hypothetical category utility of the root's partition if `child`
    /// were split.
    fn cu_for_split(&self, child: NodeId) -> Self::Utility;

    /// Splits `child`, a child of the root: `child` is detached and its
    /// children are promoted into the root's child list.
    fn split(&mut self, child: NodeId);
}
