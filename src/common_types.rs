//! This module contains common types shared across the clustering operations.

/// A flat cluster labeling: one label per input instance, in input order.
///
/// Each label names the concept node an instance collapsed into for a given
/// cut of the hierarchy.
pub type Clustering = Vec<String>;

/// Builds the human-readable cluster label for a concept node.
pub(crate) fn concept_label(concept_id: &str) -> String {
    format!("Concept{}", concept_id)
}
