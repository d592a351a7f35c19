//! The `gffkit stats` report: gene/CDS headline metrics followed by one
//! block per feature type.

use fxhash::FxHashMap as HashMap;

use gffkit_core::errors::GffError;
use gffkit_core::models::GffDocument;

use crate::composition::BaseComposition;
use crate::format::{fmt_count, fmt_real};
use crate::summary::LengthSummary;

const GENE_TYPE: &str = "gene";
const CDS_TYPE: &str = "CDS";

pub fn gene_count(document: &GffDocument) -> u64 {
    document.features_of_type(GENE_TYPE).count() as u64
}

/// CDS feature count over gene count. `NaN` when the document has no genes.
pub fn avg_cds_per_gene(document: &GffDocument) -> f64 {
    let cds = document.features_of_type(CDS_TYPE).count() as f64;
    let genes = document.features_of_type(GENE_TYPE).count() as f64;
    cds / genes
}

///
/// Summed length of each joined CDS: CDS features sharing an `ID` attribute
/// are segments of one coding sequence and their lengths add up. Features
/// without an `ID` have no grouping key and are dropped from every group.
///
pub fn joined_cds_lengths(document: &GffDocument) -> Vec<u64> {
    let mut groups: HashMap<&str, u64> = HashMap::default();
    for feature in document.features_of_type(CDS_TYPE) {
        let id = feature.id();
        if id.is_empty() {
            continue;
        }
        *groups.entry(id).or_default() += feature.length();
    }
    groups.into_values().collect()
}

/// Mean summed length across joined CDS groups. `NaN` without any group.
pub fn avg_joined_cds_length(document: &GffDocument) -> f64 {
    let lengths = joined_cds_lengths(document);
    let total: u64 = lengths.iter().sum();
    total as f64 / lengths.len() as f64
}

/// 100 × total CDS length / total scaffold sequence length.
pub fn coding_percentage(document: &GffDocument) -> f64 {
    let coding: u64 = document
        .features_of_type(CDS_TYPE)
        .map(|feature| feature.length())
        .sum();
    100.0 * coding as f64 / document.total_sequence_length() as f64
}

///
/// Render the full stats report. Extracting per-type subsequences requires
/// every referenced scaffold to be present; a dangling `seq_id` aborts with
/// [`GffError::MissingScaffold`].
///
pub fn stats_report(document: &GffDocument) -> Result<String, GffError> {
    let mut report = String::new();

    let joined = avg_joined_cds_length(document);
    report.push_str(&format!("number of genes: {}\n", fmt_count(gene_count(document))));
    report.push_str(&format!(
        "average CDS per gene: {}\n",
        fmt_real(avg_cds_per_gene(document))
    ));
    report.push_str(&format!(
        "average joined CDS length: {} nt ({} aa)\n",
        fmt_real(joined),
        fmt_real(joined / 3.0)
    ));
    report.push_str(&format!(
        "coding percentage: {}\n",
        fmt_real(coding_percentage(document))
    ));
    report.push('\n');

    for feature_type in document.feature_types() {
        let lengths: Vec<u64> = document
            .features_of_type(feature_type)
            .map(|feature| feature.length())
            .collect();
        let summary = LengthSummary::from_lengths(&lengths);

        let mut composition = BaseComposition::default();
        for feature in document.features_of_type(feature_type) {
            let sequence = document.subsequence(&feature.seq_id, feature.start, feature.end)?;
            composition.update(sequence);
        }

        report.push_str(&format!("{}\n", feature_type));
        report.push_str(&format!("  {}\n", summary));
        report.push_str(&format!("  {}\n", composition));
    }

    Ok(report)
}
