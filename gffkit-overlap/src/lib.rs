//! Same-strand CDS overlap detection.
//!
//! Groups the CDS features of a document by scaffold and flags any pair
//! whose closed `[start, end]` intervals intersect on the same strand. The
//! scan is a deliberate quadratic pairwise check: this is a correctness
//! check over one annotation file, not an interval index for genome-scale
//! query workloads.

use indexmap::IndexMap;

use gffkit_core::models::{Feature, GffDocument};

/// Feature type subject to the overlap check.
pub const CDS_TYPE: &str = "CDS";

///
/// Closed-interval overlap on matching strands. Symmetric in its arguments.
///
pub fn features_overlap(a: &Feature, b: &Feature) -> bool {
    a.strand == b.strand && a.start <= b.end && b.start <= a.end
}

/// True if any pair in the group overlaps.
pub fn any_overlap(features: &[&Feature]) -> bool {
    for (index, a) in features.iter().enumerate() {
        for b in &features[index + 1..] {
            if features_overlap(a, b) {
                return true;
            }
        }
    }
    false
}

///
/// Per-scaffold overlap flags for the document's CDS features, scaffolds in
/// first-seen order.
///
pub fn cds_overlaps(document: &GffDocument) -> Vec<(String, bool)> {
    let mut by_scaffold: IndexMap<&str, Vec<&Feature>> = IndexMap::new();
    for feature in document.features_of_type(CDS_TYPE) {
        by_scaffold
            .entry(feature.seq_id.as_str())
            .or_default()
            .push(feature);
    }

    by_scaffold
        .into_iter()
        .map(|(name, group)| (name.to_string(), any_overlap(&group)))
        .collect()
}

///
/// The textual overlap report: one `<scaffold>\t<True|False>` line per
/// scaffold that carries CDS features.
///
pub fn overlap_report(document: &GffDocument) -> String {
    let mut report = String::new();
    for (name, has_overlap) in cds_overlaps(document) {
        report.push_str(&name);
        report.push('\t');
        report.push_str(if has_overlap { "True" } else { "False" });
        report.push('\n');
    }
    report
}
