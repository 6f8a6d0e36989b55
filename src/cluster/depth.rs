//! Depth-aligned labeling across every level of the hierarchy.

use tracing::trace;

use super::{InsertMode, insert_instances};
use crate::common_types::{Clustering, concept_label};
use crate::tree::ConceptTree;

/// Categorizes `instances` into `tree` and returns one clustering per tree
/// depth, ordered general to specific: index 0 labels every instance with
/// the root, the final index with its deepest concept.
///
/// No splitting takes place, so the tree is used in place rather than
/// copied; it is only mutated when `mode` is [`InsertMode::Fit`], through
/// the tree's own insertion semantics. Instances whose ancestor chain is
/// shorter than the deepest one repeat their deepest label for the
/// remaining depths, so every instance reports a label at every level.
///
/// The result holds `max_depth` clusterings of `instances.len()` labels
/// each.
pub fn depth_labels<T: ConceptTree>(
    tree: &mut T,
    instances: &[T::Instance],
    mode: InsertMode,
) -> Vec<Clustering> {
    let leaves = insert_instances(tree, instances, mode);

    // Walk each instance leaf-to-root, then flip the chains so index 0 is
    // the root.
    let mut chains: Vec<Vec<String>> = Vec::with_capacity(leaves.len());
    let mut max_depth = 0;
    for &leaf in &leaves {
        let mut labels = Vec::new();
        let mut node = leaf;
        while let Some(parent) = tree.parent(node) {
            labels.push(concept_label(&tree.concept_id(node)));
            node = parent;
        }
        labels.push(concept_label(&tree.concept_id(node)));
        max_depth = max_depth.max(labels.len());
        chains.push(labels);
    }
    trace!(instances = chains.len(), max_depth, "aligning ancestor chains");

    for chain in &mut chains {
        chain.reverse();
        // Shallower chains hold their deepest label for the remaining
        // depths.
        if let Some(deepest) = chain.last().cloned() {
            while chain.len() < max_depth {
                chain.push(deepest.clone());
            }
        }
    }

    (0..max_depth)
        .map(|depth| chains.iter().map(|chain| chain[depth].clone()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::fixture::ScriptedTree;

    /// Uneven hierarchy: instance 0 sits one level deeper than the rest.
    fn uneven_tree() -> (ScriptedTree, Vec<u32>) {
        let mut tree = ScriptedTree::new("0");
        let root = tree.root();
        let a = tree.add_child(root, "A", 0.0);
        let b = tree.add_child(root, "B", 0.0);
        let a1 = tree.add_child(a, "a1", 0.0);
        let a2 = tree.add_child(a, "a2", 0.0);
        let x1 = tree.add_child(a1, "x1", 0.0);
        tree.add_child(a1, "x2", 0.0);
        let b1 = tree.add_child(b, "b1", 0.0);
        tree.add_child(b, "b2", 0.0);
        tree.assign(x1, 0);
        tree.assign(a2, 1);
        tree.assign(b1, 2);
        (tree, vec![0, 1, 2])
    }

    #[test]
    fn test_depth_labels_shape_and_root_row() {
        let (mut tree, instances) = uneven_tree();
        let labels = depth_labels(&mut tree, &instances, InsertMode::Fit);

        // Deepest chain is x1 -> a1 -> A -> root.
        assert_eq!(labels.len(), 4);
        for row in &labels {
            assert_eq!(row.len(), instances.len());
        }
        assert_eq!(
            labels[0],
            vec!["Concept0", "Concept0", "Concept0"],
            "the shallowest cut is the root for every instance"
        );
    }

    #[test]
    fn test_depth_labels_pads_shallow_chains_with_deepest_label() {
        let (mut tree, instances) = uneven_tree();
        let labels = depth_labels(&mut tree, &instances, InsertMode::Fit);

        assert_eq!(labels[1], vec!["ConceptA", "ConceptA", "ConceptB"]);
        assert_eq!(labels[2], vec!["Concepta1", "Concepta2", "Conceptb1"]);
        // Instances 1 and 2 bottom out a level early and repeat their
        // deepest real label.
        assert_eq!(labels[3], vec!["Conceptx1", "Concepta2", "Conceptb1"]);
    }

    #[test]
    fn test_depth_labels_columns_stay_on_one_ancestor_chain() {
        let (mut tree, instances) = uneven_tree();
        let labels = depth_labels(&mut tree, &instances, InsertMode::Fit);

        // Instance 0's column reads root-to-leaf along its own chain.
        let column: Vec<_> = labels.iter().map(|row| row[0].as_str()).collect();
        assert_eq!(column, vec!["Concept0", "ConceptA", "Concepta1", "Conceptx1"]);
    }

    #[test]
    fn test_depth_labels_fit_mode_mutates_and_categorize_does_not() {
        let (mut tree, instances) = uneven_tree();

        depth_labels(&mut tree, &instances, InsertMode::Categorize);
        assert_eq!(tree.fit_count, 0, "categorize must leave the tree untouched");

        depth_labels(&mut tree, &instances, InsertMode::Fit);
        assert_eq!(tree.fit_count, instances.len());
    }

    #[test]
    fn test_depth_labels_empty_instances() {
        let (mut tree, _) = uneven_tree();
        let labels = depth_labels(&mut tree, &[], InsertMode::Fit);
        assert!(labels.is_empty());
    }

    #[test]
    fn test_depth_labels_matches_across_modes_on_scripted_tree() {
        // The scripted tree categorizes identically in both modes, so the
        // label matrix must agree; only the fit counter differs.
        let (mut fit_tree, instances) = uneven_tree();
        let (mut cat_tree, _) = uneven_tree();

        let fitted = depth_labels(&mut fit_tree, &instances, InsertMode::Fit);
        let categorized = depth_labels(&mut cat_tree, &instances, InsertMode::Categorize);
        assert_eq!(fitted, categorized);
    }
}
