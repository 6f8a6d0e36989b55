//! Bounded-k selection over the split sequence.

use std::collections::HashSet;

use tracing::debug;

use super::{InsertMode, split_seq::cluster_iter};
use crate::common_types::{Clustering, concept_label};
use crate::error::{ClusterError, ClusterResult};
use crate::tree::ConceptTree;

/// Default cluster-count bound for [`k_cluster`].
pub const DEFAULT_K: usize = 3;

/// Categorizes `instances` into a copy of `tree` and returns the finest
/// clustering whose distinct-label count does not exceed `k`.
///
/// The tree is split successively until a split produces more than `k`
/// clusters, at which point the clustering just before that split is
/// returned. The result may have strictly fewer than `k` clusters; if the
/// hierarchy is exhausted without ever exceeding the bound, the last
/// clustering produced wins. `k` defaults to [`DEFAULT_K`].
///
/// Fails with [`ClusterError::InvalidArgument`] if `k < 2` — every internal
/// concept node has at least two children, so no split can satisfy a
/// smaller bound.
pub fn k_cluster<T: ConceptTree>(
    tree: &T,
    instances: &[T::Instance],
    k: Option<usize>,
    mode: InsertMode,
) -> ClusterResult<Clustering> {
    let k = k.unwrap_or(DEFAULT_K);
    if k < 2 {
        return Err(ClusterError::invalid_argument(
            "k must be >= 2; every internal concept node has at least 2 children",
        ));
    }

    // Before any split, every instance shares the root's cluster.
    let root_label = concept_label(&tree.concept_id(tree.root()));
    let mut clustering: Clustering = vec![root_label; instances.len()];

    for candidate in cluster_iter(tree, instances, None, None, mode)? {
        let count = candidate
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len();
        if count > k {
            debug!(count, k, "bound exceeded; keeping previous clustering");
            break;
        }
        clustering = candidate;
    }

    Ok(clustering)
}
