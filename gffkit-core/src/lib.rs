//! Core library for gffkit: tools for inspecting and rewriting GFF3 genome
//! annotation files.
//!
//! This crate holds the GFF data model ([`models::Feature`],
//! [`models::Scaffold`], [`models::GffDocument`]), a tolerant line-oriented
//! [`parser`], and a [`writer`] that supports inline-DNA and FASTA-tail
//! sequence placement. Document transforms (ID renumbering, contig removal)
//! live on [`models::GffDocument`] itself.
//!
//! Parsing is deliberately lenient: unknown `##` directives are skipped and
//! no `##gff-version` check is performed. Feature lines and attribute pairs,
//! on the other hand, are parsed strictly and malformed input aborts the run
//! (see [`errors::GffError`]).

pub mod errors;
pub mod models;
pub mod parser;
pub mod utils;
pub mod writer;

pub use errors::GffError;
pub use models::{Feature, GffDocument, Scaffold};
