use std::fmt::{self, Display};

///
/// Scaffold struct, one named contig sequence from an annotation file.
///
/// Sequence positions are 1-based and inclusive throughout, matching the
/// coordinate convention of the feature records that point into it.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Scaffold {
    pub name: String,
    pub sequence: Vec<u8>,
}

impl Scaffold {
    pub fn new<S: Into<String>>(name: S, sequence: Vec<u8>) -> Scaffold {
        Scaffold {
            name: name.into(),
            sequence,
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    ///
    /// Extract the subsequence covering the 1-based inclusive range
    /// `[start, end]`. Ranges reaching past the stored sequence are clamped,
    /// so an out-of-range request yields a truncated (possibly empty) slice
    /// rather than a panic.
    ///
    pub fn subsequence(&self, start: u64, end: u64) -> &[u8] {
        let lo = (start.saturating_sub(1) as usize).min(self.sequence.len());
        let hi = (end as usize).min(self.sequence.len());
        if lo >= hi { &[] } else { &self.sequence[lo..hi] }
    }
}

impl Display for Scaffold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bp)", self.name, self.sequence.len())
    }
}
