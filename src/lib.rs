//! Flat, multi-resolution clustering over concept-formation trees.
//!
//! A concept tree (a Cobweb-style incremental hierarchy) already encodes a
//! clustering at every level of generality. This crate derives flat
//! labelings from it: [`cluster_iter`] repeatedly splits the least cohesive
//! cluster under the root — as measured by the tree's own category-utility
//! scores — and yields the induced instance partition after each split;
//! [`k_cluster`] searches that sequence for the finest partition within a
//! cluster-count bound; [`depth_labels`] reads every depth-aligned cut of
//! the fitted hierarchy in one pass, without splitting anything.
//!
//! The tree itself is an external collaborator supplied through the
//! [`ConceptTree`] trait; anything that can insert an instance, report its
//! ancestor chain, and score a hypothetical split can be clustered.

pub mod cluster;
pub mod common_types;
pub mod error;
pub mod tree;

pub use cluster::InsertMode;
pub use cluster::bounded::{DEFAULT_K, k_cluster};
pub use cluster::depth::depth_labels;
pub use cluster::split_seq::{SplitSequence, cluster, cluster_iter};
pub use common_types::Clustering;
pub use error::{ClusterError, ClusterResult};
pub use tree::{ConceptTree, NodeId};
