use std::fmt::{self, Display};

use crate::format::{fmt_count, fmt_real};

///
/// Summary of one set of feature lengths.
///
/// An empty set is not an error: count is 0, min/max/N50 are 0 and the mean
/// is `NaN`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthSummary {
    pub count: u64,
    pub total: u64,
    pub min: u64,
    pub max: u64,
    pub n50: u64,
}

impl LengthSummary {
    pub fn from_lengths(lengths: &[u64]) -> LengthSummary {
        LengthSummary {
            count: lengths.len() as u64,
            total: lengths.iter().sum(),
            min: lengths.iter().copied().min().unwrap_or(0),
            max: lengths.iter().copied().max().unwrap_or(0),
            n50: n50(lengths),
        }
    }

    pub fn mean(&self) -> f64 {
        self.total as f64 / self.count as f64
    }
}

impl Display for LengthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count: {}  average length: {}  min: {}  max: {}  N50: {}",
            fmt_count(self.count),
            fmt_real(self.mean()),
            fmt_count(self.min),
            fmt_count(self.max),
            fmt_count(self.n50),
        )
    }
}

///
/// N50 of a set of lengths: sort ascending, walk the cumulative sum, and
/// return the first length whose inclusion reaches half the total. 0 for an
/// empty set.
///
pub fn n50(lengths: &[u64]) -> u64 {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();

    let total: u64 = sorted.iter().sum();
    let half = total as f64 / 2.0;

    let mut cumulative = 0u64;
    for length in sorted {
        cumulative += length;
        if cumulative as f64 >= half {
            return length;
        }
    }
    0
}
