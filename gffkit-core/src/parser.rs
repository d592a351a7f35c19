//! Tolerant line-oriented GFF3 parsing.
//!
//! One forward scan with a small state machine. `##DNA <name>` opens an
//! inline scaffold block that runs until `##end-DNA`; `##FASTA` hands the
//! rest of the input over to a FASTA reader; every other `##` directive is
//! skipped without inspection; anything else that is non-empty must be a
//! feature line.

use crate::errors::GffError;
use crate::models::{Feature, GffDocument, Scaffold};

enum State {
    // plain feature/directive lines
    Records,
    // inside a ##DNA block, collecting sequence for the named scaffold
    InlineDna { name: String, sequence: Vec<u8> },
    // past a ##FASTA marker; current record if a header was seen
    FastaTail { current: Option<(String, Vec<u8>)> },
}

///
/// Parse an ordered sequence of lines into a [`GffDocument`]. Feature order
/// follows file order, scaffold order follows block-encounter order.
///
pub fn parse_lines<I, S>(lines: I) -> Result<GffDocument, GffError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scaffolds: Vec<Scaffold> = Vec::new();
    let mut features: Vec<Feature> = Vec::new();
    let mut state = State::Records;

    for line in lines {
        let line = line.as_ref();

        state = match state {
            State::InlineDna { name, mut sequence } => {
                if line.starts_with("##end-DNA") {
                    scaffolds.push(Scaffold::new(name, sequence));
                    State::Records
                } else {
                    // sequence lines carry a 2-character prefix, usually ##
                    sequence.extend_from_slice(line.as_bytes().get(2..).unwrap_or(b""));
                    State::InlineDna { name, sequence }
                }
            }

            State::FastaTail { mut current } => {
                if let Some(header) = line.strip_prefix('>') {
                    if let Some((name, sequence)) = current.take() {
                        scaffolds.push(Scaffold::new(name, sequence));
                    }
                    let name = header.split_whitespace().next().unwrap_or("").to_string();
                    State::FastaTail {
                        current: Some((name, Vec::new())),
                    }
                } else {
                    if let Some((_, sequence)) = current.as_mut() {
                        sequence.extend_from_slice(line.trim_end().as_bytes());
                    }
                    State::FastaTail { current }
                }
            }

            State::Records => {
                if let Some(name) = line.strip_prefix("##DNA ") {
                    State::InlineDna {
                        name: name.to_string(),
                        sequence: Vec::new(),
                    }
                } else if line.starts_with("##FASTA") {
                    State::FastaTail { current: None }
                } else if line.starts_with("##") || line.is_empty() {
                    // directives and blanks are skipped, no ##gff-version check
                    State::Records
                } else {
                    features.push(line.parse()?);
                    State::Records
                }
            }
        };
    }

    // flush whatever an unterminated block or trailing FASTA record collected
    match state {
        State::InlineDna { name, sequence } => scaffolds.push(Scaffold::new(name, sequence)),
        State::FastaTail {
            current: Some((name, sequence)),
        } => scaffolds.push(Scaffold::new(name, sequence)),
        _ => {}
    }

    Ok(GffDocument::new(scaffolds, features))
}

/// Parse a whole GFF text, splitting on newlines.
pub fn parse_str(text: &str) -> Result<GffDocument, GffError> {
    parse_lines(text.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parse_feature_lines_in_order() {
        let text = "##gff-version 3\n\
                    chr1\ttest\tgene\t1\t100\t.\t+\t.\tID=g1\n\
                    chr1\ttest\tmRNA\t1\t100\t.\t+\t.\tID=m1;Parent=g1\n";

        let document = parse_str(text).unwrap();
        assert_eq!(document.scaffolds.len(), 0);
        assert_eq!(document.features.len(), 2);
        assert_eq!(document.features[0].feature_type, "gene");
        assert_eq!(document.features[1].feature_type, "mRNA");
    }

    #[rstest]
    fn test_parse_inline_dna_block() {
        let text = "##gff-version 3\n\
                    ##DNA chr1\n\
                    ##ACGTACGTAC\n\
                    ##GGGG\n\
                    ##end-DNA\n\
                    chr1\ttest\tgene\t1\t10\t.\t+\t.\tID=g1\n";

        let document = parse_str(text).unwrap();
        assert_eq!(document.scaffolds.len(), 1);
        assert_eq!(document.scaffolds[0].name, "chr1");
        assert_eq!(document.scaffolds[0].sequence, b"ACGTACGTACGGGG");
        assert_eq!(document.features.len(), 1);
    }

    #[rstest]
    fn test_scaffold_name_is_remainder_after_first_space() {
        let text = "##DNA chr1 extra tokens\n##ACGT\n##end-DNA\n";
        let document = parse_str(text).unwrap();
        assert_eq!(document.scaffolds[0].name, "chr1 extra tokens");
    }

    #[rstest]
    fn test_unknown_directives_and_blanks_are_skipped() {
        let text = "##sequence-region chr1 1 100\n\
                    \n\
                    ##end-DNA\n\
                    chr1\ttest\tgene\t1\t100\t.\t+\t.\tID=g1\n";

        let document = parse_str(text).unwrap();
        assert_eq!(document.scaffolds.len(), 0);
        assert_eq!(document.features.len(), 1);
    }

    #[rstest]
    fn test_unterminated_dna_block_is_flushed() {
        let document = parse_str("##DNA chr1\n##ACGT\n").unwrap();
        assert_eq!(document.scaffolds[0].sequence, b"ACGT");
    }

    #[rstest]
    fn test_parse_fasta_tail() {
        let text = "chr1\ttest\tgene\t1\t8\t.\t+\t.\tID=g1\n\
                    ##FASTA\n\
                    >chr1 assembled\n\
                    ACGTACGT\n\
                    >chr2\n\
                    GGGG\n\
                    CCCC\n";

        let document = parse_str(text).unwrap();
        assert_eq!(document.features.len(), 1);
        assert_eq!(document.scaffolds.len(), 2);
        assert_eq!(document.scaffolds[0].name, "chr1");
        assert_eq!(document.scaffolds[0].sequence, b"ACGTACGT");
        assert_eq!(document.scaffolds[1].name, "chr2");
        assert_eq!(document.scaffolds[1].sequence, b"GGGGCCCC");
    }

    #[rstest]
    fn test_malformed_feature_line_aborts() {
        let result = parse_str("chr1\tonly\tfive\tcolumns\there\n");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_scaffold_blocks_keep_encounter_order() {
        let text = "##DNA chrB\n##AA\n##end-DNA\n\
                    ##DNA chrA\n##CC\n##end-DNA\n";
        let document = parse_str(text).unwrap();
        let names: Vec<&str> = document
            .scaffolds
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["chrB", "chrA"]);
    }
}
