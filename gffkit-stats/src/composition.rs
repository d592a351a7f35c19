use std::fmt::{self, Display};

use crate::format::{fmt_count, fmt_real};

///
/// Per-base tallies over a (possibly concatenated) sequence.
///
/// Tallies are byte-exact with no case normalization: a lowercase `g` is
/// not counted as `G`. GC% is computed over the A/T/G/C tally only, so
/// `N` runs and other ambiguity codes do not dilute it.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseComposition {
    pub length: u64,
    pub a: u64,
    pub c: u64,
    pub g: u64,
    pub t: u64,
    pub n: u64,
}

impl BaseComposition {
    pub fn from_sequence(sequence: &[u8]) -> BaseComposition {
        let mut composition = BaseComposition::default();
        composition.update(sequence);
        composition
    }

    /// Fold another chunk of sequence into the tallies.
    pub fn update(&mut self, sequence: &[u8]) {
        self.length += sequence.len() as u64;
        for base in sequence {
            match base {
                b'A' => self.a += 1,
                b'C' => self.c += 1,
                b'G' => self.g += 1,
                b'T' => self.t += 1,
                b'N' => self.n += 1,
                _ => {}
            }
        }
    }

    /// GC% = 100 × (G+C) / (A+T+G+C). `NaN` over an empty tally.
    pub fn gc_percent(&self) -> f64 {
        let gc = (self.g + self.c) as f64;
        let atgc = (self.a + self.t + self.g + self.c) as f64;
        100.0 * gc / atgc
    }
}

impl Display for BaseComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length: {}  Ns: {}  GC%: {}",
            fmt_count(self.length),
            fmt_count(self.n),
            fmt_real(self.gc_percent()),
        )
    }
}
