//! Descriptive statistics over GFF documents.
//!
//! This crate computes the derived numbers the `gffkit stats` report is
//! built from:
//!
//! - Length summaries (count, average, min, max, N50) per feature type
//! - Base composition (length, N count, GC%) of the sequence each feature
//!   type covers
//! - Gene/CDS headline metrics: CDS per gene, joined CDS length, coding
//!   percentage
//!
//! Degenerate denominators (no genes, no CDS groups, no sequence) produce
//! `NaN` rather than an error; the formatter renders that literally, so a
//! report over a degenerate document still prints.

pub mod composition;
pub mod format;
pub mod report;
pub mod summary;

// re-exports
pub use composition::BaseComposition;
pub use format::{fmt_count, fmt_real, group_thousands};
pub use report::stats_report;
pub use summary::{LengthSummary, n50};
