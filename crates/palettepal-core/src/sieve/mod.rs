// crates/palettepal-core/src/sieve/mod.rs
//
// The sieve (filter): the set of accepted compound codes.
// Backed by a 65536-bit bitset so `contains` is a shift and a mask.

pub mod load;
pub mod rank;

pub use load::{parse_row, LoadStats};
pub use rank::{RankScheme, DEFAULT_RANK_LABEL};

use std::io::BufRead;

use crate::digest::{blake3_16, hex_lower};
use crate::error::Result;
use crate::vps::CompoundCode;

/// Codes present in every sieve unless the caller clears them.
pub const DEFAULT_SEED_CODES: [CompoundCode; 2] = [0x0921, 0x0A05];

/// How a filter source becomes a sieve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SieveConfig {
    pub scheme: RankScheme,
    /// Rows ranked at or below this label are admitted. Must be known to `scheme`.
    pub threshold_label: String,
    /// Inserted before any row is read.
    pub seed_codes: Vec<CompoundCode>,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            scheme: RankScheme::default(),
            threshold_label: DEFAULT_RANK_LABEL.to_string(),
            seed_codes: DEFAULT_SEED_CODES.to_vec(),
        }
    }
}

const WORDS: usize = (u16::MAX as usize + 1) / 64;

#[derive(Clone)]
pub struct Sieve {
    bits: Box<[u64; WORDS]>,
    len: usize,
}

impl Default for Sieve {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sieve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sieve").field("len", &self.len).finish()
    }
}

impl Sieve {
    /// Seeds plus every admitted row of `reader`.
    /// An unknown threshold label fails before anything is read.
    pub fn load<R: BufRead>(cfg: &SieveConfig, reader: R) -> Result<(Sieve, LoadStats)> {
        let threshold = cfg.scheme.threshold(&cfg.threshold_label)?;
        let mut sieve = Sieve::with_seeds(&cfg.seed_codes);
        let stats = sieve.load_rows(reader, &cfg.scheme, threshold)?;
        Ok((sieve, stats))
    }

    pub fn new() -> Self {
        Self {
            bits: Box::new([0u64; WORDS]),
            len: 0,
        }
    }

    pub fn with_seeds(seeds: &[CompoundCode]) -> Self {
        let mut s = Self::new();
        for &c in seeds {
            s.insert(c);
        }
        s
    }

    /// Returns true if the code was newly added.
    pub fn insert(&mut self, code: CompoundCode) -> bool {
        let (w, m) = slot(code);
        let fresh = self.bits[w] & m == 0;
        if fresh {
            self.bits[w] |= m;
            self.len += 1;
        }
        fresh
    }

    #[inline]
    pub fn contains(&self, code: CompoundCode) -> bool {
        let (w, m) = slot(code);
        self.bits[w] & m != 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Ascending order.
    pub fn iter(&self) -> impl Iterator<Item = CompoundCode> + '_ {
        (0..=u16::MAX).filter(move |&c| self.contains(c))
    }

    /// BLAKE3-16 over the ascending big-endian code list, lowercase hex.
    pub fn digest(&self) -> String {
        let mut bytes = Vec::with_capacity(self.len * 2);
        for c in self.iter() {
            bytes.extend_from_slice(&c.to_be_bytes());
        }
        hex_lower(&blake3_16(&bytes))
    }
}

impl FromIterator<CompoundCode> for Sieve {
    fn from_iter<I: IntoIterator<Item = CompoundCode>>(iter: I) -> Self {
        let mut s = Sieve::new();
        for c in iter {
            s.insert(c);
        }
        s
    }
}

#[inline]
fn slot(code: CompoundCode) -> (usize, u64) {
    ((code as usize) >> 6, 1u64 << (code & 63))
}
