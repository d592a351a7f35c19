use std::fmt::{self, Display};
use std::str::FromStr;

use indexmap::IndexMap;

use crate::errors::GffError;

///
/// Feature struct, one annotated region from a GFF3 feature line.
///
/// Coordinates are 1-based and inclusive with `start <= end`. `score`,
/// `strand` and `phase` are kept as the raw column text; this parser is
/// tolerant and does not validate them beyond the tab layout.
///
/// Attributes preserve multiplicity: a key repeated across several
/// `key=value` pairs collects its values in one list, keys ordered
/// first-seen. The source format concatenates repeated values for one key
/// with no delimiter at all, which is ambiguous on re-read; on write we
/// emit each value as its own `key=value` pair joined by `;` instead.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Feature {
    pub seq_id: String,
    pub source: String,
    pub feature_type: String,
    pub start: u64,
    pub end: u64,
    pub score: String,
    pub strand: String,
    pub phase: String,
    pub attributes: IndexMap<String, Vec<String>>,
}

impl Feature {
    /// Length of the feature: `end - start`.
    pub fn length(&self) -> u64 {
        self.end - self.start
    }

    /// First value stored for `key`, or `""` when the key is absent.
    pub fn attribute(&self, key: &str) -> &str {
        self.attributes
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace all values stored for `key` with the single given value.
    /// Note this collapses a multi-valued key down to one value.
    pub fn set_attribute<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.insert(key.into(), vec![value.into()]);
    }

    /// The `ID` attribute, or `""` when the feature has none.
    pub fn id(&self) -> &str {
        self.attribute("ID")
    }

    /// The first `Parent` attribute value, or `""` when the feature has none.
    pub fn parent(&self) -> &str {
        self.attribute("Parent")
    }

    ///
    /// Render the feature as its 9-column tab-separated GFF3 line.
    ///
    pub fn as_line(&self) -> String {
        let attributes = self
            .attributes
            .iter()
            .flat_map(|(key, values)| {
                values.iter().map(move |value| format!("{}={}", key, value))
            })
            .collect::<Vec<String>>()
            .join(";");

        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.seq_id,
            self.source,
            self.feature_type,
            self.start,
            self.end,
            self.score,
            self.strand,
            self.phase,
            attributes,
        )
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_line())
    }
}

impl FromStr for Feature {
    type Err = GffError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != 9 {
            return Err(GffError::MalformedFeatureLine(line.to_string()));
        }

        let start = parse_coordinate(columns[3], line)?;
        let end = parse_coordinate(columns[4], line)?;
        if start > end {
            return Err(GffError::ReversedCoordinates {
                start,
                end,
                line: line.to_string(),
            });
        }
        let attributes = parse_attributes(columns[8])?;

        Ok(Feature {
            seq_id: columns[0].to_string(),
            source: columns[1].to_string(),
            feature_type: columns[2].to_string(),
            start,
            end,
            score: columns[5].to_string(),
            strand: columns[6].to_string(),
            phase: columns[7].to_string(),
            attributes,
        })
    }
}

fn parse_coordinate(column: &str, line: &str) -> Result<u64, GffError> {
    column
        .parse::<u64>()
        .map_err(|_| GffError::InvalidCoordinate {
            coordinate: column.to_string(),
            line: line.to_string(),
        })
}

///
/// Parse the 9th GFF column into an ordered multimap. Empty segments (from a
/// trailing `;`) are dropped; a non-empty segment must contain exactly one
/// `=` or the whole parse aborts.
///
fn parse_attributes(column: &str) -> Result<IndexMap<String, Vec<String>>, GffError> {
    let mut attributes: IndexMap<String, Vec<String>> = IndexMap::new();

    for pair in column.split(';') {
        if pair.is_empty() {
            continue;
        }

        let malformed = || GffError::MalformedAttribute {
            pair: pair.to_string(),
            attributes: column.to_string(),
        };

        let (key, value) = pair.split_once('=').ok_or_else(malformed)?;
        if value.contains('=') {
            return Err(malformed());
        }

        attributes
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const GENE_LINE: &str = "chr1\ttest\tgene\t1000\t2000\t.\t+\t.\tID=gene1;Name=foo";

    #[rstest]
    fn test_parse_feature_line() {
        let feature: Feature = GENE_LINE.parse().unwrap();

        assert_eq!(feature.seq_id, "chr1");
        assert_eq!(feature.source, "test");
        assert_eq!(feature.feature_type, "gene");
        assert_eq!(feature.start, 1000);
        assert_eq!(feature.end, 2000);
        assert_eq!(feature.score, ".");
        assert_eq!(feature.strand, "+");
        assert_eq!(feature.phase, ".");
        assert_eq!(feature.attribute("ID"), "gene1");
        assert_eq!(feature.attribute("Name"), "foo");
        assert_eq!(feature.attribute("Missing"), "");
    }

    #[rstest]
    fn test_length_is_end_minus_start() {
        let feature: Feature = GENE_LINE.parse().unwrap();
        assert_eq!(feature.length(), 1000);
    }

    #[rstest]
    fn test_trailing_semicolon_is_dropped() {
        let with: Feature = "chr1\ttest\tgene\t1\t2\t.\t+\t.\tID=gene1;Name=foo;"
            .parse()
            .unwrap();
        let without: Feature = "chr1\ttest\tgene\t1\t2\t.\t+\t.\tID=gene1;Name=foo"
            .parse()
            .unwrap();
        assert_eq!(with, without);
    }

    #[rstest]
    fn test_repeated_key_preserves_multiplicity() {
        let feature: Feature = "chr1\ttest\tmRNA\t1\t2\t.\t+\t.\tParent=a;ID=x;Parent=b"
            .parse()
            .unwrap();
        assert_eq!(feature.attributes["Parent"], vec!["a", "b"]);
        // first value wins for the scalar accessor
        assert_eq!(feature.parent(), "a");
    }

    #[rstest]
    #[case("Name")]
    #[case("Name=foo=bar")]
    fn test_malformed_attribute_pair_is_fatal(#[case] pair: &str) {
        let line = format!("chr1\ttest\tgene\t1\t2\t.\t+\t.\tID=gene1;{}", pair);
        let result = line.parse::<Feature>();
        assert!(matches!(
            result,
            Err(GffError::MalformedAttribute { .. })
        ));
    }

    #[rstest]
    fn test_wrong_column_count_is_fatal() {
        let result = "chr1\ttest\tgene\t1\t2".parse::<Feature>();
        assert!(matches!(result, Err(GffError::MalformedFeatureLine(_))));
    }

    #[rstest]
    fn test_bad_coordinate_is_fatal() {
        let result = "chr1\ttest\tgene\tone\t2\t.\t+\t.\tID=g".parse::<Feature>();
        assert!(matches!(result, Err(GffError::InvalidCoordinate { .. })));
    }

    #[rstest]
    fn test_reversed_coordinates_are_fatal() {
        let result = "chr1\ttest\tgene\t20\t10\t.\t+\t.\tID=g1".parse::<Feature>();
        assert!(matches!(
            result,
            Err(GffError::ReversedCoordinates { start: 20, end: 10, .. })
        ));
    }

    #[rstest]
    fn test_zero_length_feature_is_accepted() {
        let feature: Feature = "chr1\ttest\tgene\t10\t10\t.\t+\t.\tID=g1".parse().unwrap();
        assert_eq!(feature.length(), 0);
    }

    #[rstest]
    fn test_line_round_trip() {
        let feature: Feature = GENE_LINE.parse().unwrap();
        assert_eq!(feature.as_line(), GENE_LINE);

        let reparsed: Feature = feature.as_line().parse().unwrap();
        assert_eq!(reparsed, feature);
    }

    #[rstest]
    fn test_multi_valued_key_renders_as_repeated_pairs() {
        let feature: Feature = "chr1\ttest\tCDS\t1\t2\t.\t+\t0\tParent=a;Parent=b"
            .parse()
            .unwrap();
        assert_eq!(
            feature.as_line(),
            "chr1\ttest\tCDS\t1\t2\t.\t+\t0\tParent=a;Parent=b"
        );
    }

    #[rstest]
    fn test_set_attribute_collapses_values() {
        let mut feature: Feature = "chr1\ttest\tCDS\t1\t2\t.\t+\t0\tParent=a;Parent=b"
            .parse()
            .unwrap();
        feature.set_attribute("Parent", "c");
        assert_eq!(feature.attributes["Parent"], vec!["c"]);
    }
}
