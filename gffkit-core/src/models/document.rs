use fxhash::FxHashMap as HashMap;
use fxhash::FxHashSet as HashSet;

use crate::errors::GffError;
use crate::models::{Feature, Scaffold};

///
/// GffDocument struct, the in-memory representation of one parsed GFF file:
/// the scaffold sequences (if the file embedded any) plus every feature
/// record in file order.
///
/// Transforms (`remove_contigs`, `renumber_ids`) return new document values
/// and never mutate their input.
///
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GffDocument {
    pub scaffolds: Vec<Scaffold>,
    pub features: Vec<Feature>,
}

///
/// Renumbering context threaded through one `renumber_ids` pass: the fresh-ID
/// counter plus the original-to-fresh mapping built in stage 1.
///
struct IdRemap {
    prefix: String,
    counter: u64,
    mapping: HashMap<String, String>,
}

impl IdRemap {
    fn new(prefix: &str) -> IdRemap {
        IdRemap {
            prefix: prefix.to_string(),
            counter: 1,
            mapping: HashMap::default(),
        }
    }

    /// Fresh ID for `original`, generating and recording one on first sight.
    /// IDs are `<prefix><zero-padded counter><0>`, e.g. `FID_000010`.
    fn assign(&mut self, original: &str) -> String {
        if let Some(mapped) = self.mapping.get(original) {
            return mapped.clone();
        }
        let fresh = format!("{}{:05}0", self.prefix, self.counter);
        self.counter += 1;
        self.mapping.insert(original.to_string(), fresh.clone());
        fresh
    }

    fn lookup(&self, original: &str) -> Option<&str> {
        self.mapping.get(original).map(String::as_str)
    }
}

impl GffDocument {
    pub fn new(scaffolds: Vec<Scaffold>, features: Vec<Feature>) -> GffDocument {
        GffDocument {
            scaffolds,
            features,
        }
    }

    pub fn scaffold(&self, name: &str) -> Option<&Scaffold> {
        self.scaffolds.iter().find(|scaffold| scaffold.name == name)
    }

    ///
    /// Extract the subsequence a feature covers from its scaffold, 1-based
    /// inclusive. Fails when no scaffold matches `seq_id`.
    ///
    pub fn subsequence(&self, seq_id: &str, start: u64, end: u64) -> Result<&[u8], GffError> {
        let scaffold = self
            .scaffold(seq_id)
            .ok_or_else(|| GffError::MissingScaffold(seq_id.to_string()))?;
        Ok(scaffold.subsequence(start, end))
    }

    /// Total embedded sequence length across all scaffolds.
    pub fn total_sequence_length(&self) -> u64 {
        self.scaffolds
            .iter()
            .map(|scaffold| scaffold.len() as u64)
            .sum()
    }

    /// Distinct feature type names, first-seen order.
    pub fn feature_types(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::default();
        let mut types = Vec::new();
        for feature in &self.features {
            if seen.insert(feature.feature_type.as_str()) {
                types.push(feature.feature_type.as_str());
            }
        }
        types
    }

    pub fn features_of_type<'a>(
        &'a self,
        feature_type: &'a str,
    ) -> impl Iterator<Item = &'a Feature> {
        self.features
            .iter()
            .filter(move |feature| feature.feature_type == feature_type)
    }

    ///
    /// Drop every scaffold whose name is in `contigs` and every feature whose
    /// `seq_id` is in `contigs`. Remaining order is preserved.
    ///
    pub fn remove_contigs(&self, contigs: &HashSet<String>) -> GffDocument {
        let scaffolds = self
            .scaffolds
            .iter()
            .filter(|scaffold| !contigs.contains(&scaffold.name))
            .cloned()
            .collect();
        let features = self
            .features
            .iter()
            .filter(|feature| !contigs.contains(&feature.seq_id))
            .cloned()
            .collect();
        GffDocument::new(scaffolds, features)
    }

    ///
    /// Assign canonical fresh IDs to every `ID`-bearing feature and rewrite
    /// `Parent` references to match.
    ///
    /// Stage 1 walks the features in document order, generating a fresh
    /// `<prefix>NNNNN0` ID per distinct original ID. Stage 2 rewrites each
    /// non-empty `Parent` through the stage-1 mapping only; a `Parent` value
    /// that never occurred as a feature's own `ID` is fatal.
    ///
    pub fn renumber_ids(&self, prefix: &str) -> Result<GffDocument, GffError> {
        let mut remap = IdRemap::new(prefix);

        let mut features: Vec<Feature> = Vec::with_capacity(self.features.len());
        for feature in &self.features {
            let mut feature = feature.clone();
            let id = feature.id().to_string();
            if !id.is_empty() {
                let fresh = remap.assign(&id);
                feature.set_attribute("ID", fresh);
            }
            features.push(feature);
        }

        for feature in &mut features {
            let parent = feature.parent().to_string();
            if parent.is_empty() {
                continue;
            }
            let mapped = remap
                .lookup(&parent)
                .ok_or_else(|| GffError::UnresolvedParentReference(parent.clone()))?
                .to_string();
            feature.set_attribute("Parent", mapped);
        }

        Ok(GffDocument::new(self.scaffolds.clone(), features))
    }
}
