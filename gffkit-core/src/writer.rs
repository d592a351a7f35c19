//! GFF3 serialization.
//!
//! Output always starts with `##gff-version 3` and ends with one line per
//! feature in document order. Scaffold sequences are placed according to
//! [`SequencePlacement`]: either inline `##DNA` blocks ahead of the
//! features, or `##Type DNA` directives up front with the sequences in a
//! `##FASTA` tail. Sequences wrap at 40 columns in both modes and
//! round-trip byte-for-byte through [`crate::parser::parse_str`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::models::{GffDocument, Scaffold};

/// Sequence lines wrap at this many bases.
pub const WRAP_WIDTH: usize = 40;

/// Where scaffold sequences land in the serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencePlacement {
    /// `##DNA <name>` / `##<chunk>` / `##end-DNA` blocks before the features.
    #[default]
    Inline,
    /// `##Type DNA <name>` directives before the features, sequences after
    /// them behind a `##FASTA` marker.
    FastaTail,
}

///
/// Serialize a document to any writer.
///
pub fn write_document<W: Write>(
    document: &GffDocument,
    placement: SequencePlacement,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "##gff-version 3")?;

    match placement {
        SequencePlacement::Inline => {
            for scaffold in &document.scaffolds {
                write_inline_block(scaffold, writer)?;
            }
        }
        SequencePlacement::FastaTail => {
            for scaffold in &document.scaffolds {
                writeln!(writer, "##Type DNA {}", scaffold.name)?;
            }
        }
    }

    for feature in &document.features {
        writeln!(writer, "{}", feature)?;
    }

    if placement == SequencePlacement::FastaTail && !document.scaffolds.is_empty() {
        writeln!(writer, "##FASTA")?;
        for scaffold in &document.scaffolds {
            writeln!(writer, ">{}", scaffold.name)?;
            for chunk in scaffold.sequence.chunks(WRAP_WIDTH) {
                writer.write_all(chunk)?;
                writeln!(writer)?;
            }
        }
    }

    Ok(())
}

fn write_inline_block<W: Write>(scaffold: &Scaffold, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "##DNA {}", scaffold.name)?;
    for chunk in scaffold.sequence.chunks(WRAP_WIDTH) {
        writer.write_all(b"##")?;
        writer.write_all(chunk)?;
        writeln!(writer)?;
    }
    writeln!(writer, "##end-DNA")
}

/// Serialize a document to an owned string.
pub fn document_to_string(
    document: &GffDocument,
    placement: SequencePlacement,
) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_document(document, placement, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Serialize a document to a file on disk.
pub fn write_to_path(
    document: &GffDocument,
    placement: SequencePlacement,
    path: &Path,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_document(document, placement, &mut writer)?;
    writer.flush()
}
