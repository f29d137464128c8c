// crates/palettepal-core/src/sieve/rank.rs
//
// Rank labels gate which filter rows are admitted:
//   admit iff weight(row_label) <= threshold_weight
// Unknown row labels weigh 0 and are always admitted.

use crate::error::{PalError, Result};

pub const DEFAULT_RANK_LABEL: &str = "yellow";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankScheme {
    weights: Vec<(String, u8)>,
}

impl Default for RankScheme {
    fn default() -> Self {
        Self {
            weights: vec![("green".to_string(), 0x04), ("yellow".to_string(), 0x06)],
        }
    }
}

impl RankScheme {
    /// Add or replace a label. Labels are stored lowercase.
    pub fn with_rank(mut self, label: &str, weight: u8) -> Self {
        let key = label.trim().to_ascii_lowercase();
        match self.weights.iter_mut().find(|(l, _)| *l == key) {
            Some(slot) => slot.1 = weight,
            None => self.weights.push((key, weight)),
        }
        self
    }

    fn lookup(&self, label: &str) -> Option<u8> {
        let key = label.trim().to_ascii_lowercase();
        self.weights.iter().find(|(l, _)| *l == key).map(|(_, w)| *w)
    }

    /// Case-insensitive; unknown labels weigh 0.
    pub fn weight(&self, label: &str) -> u8 {
        self.lookup(label).unwrap_or(0)
    }

    /// Threshold labels must be known.
    pub fn threshold(&self, label: &str) -> Result<u8> {
        self.lookup(label).ok_or_else(|| {
            let known: Vec<&str> = self.labels().map(|(l, _)| l).collect();
            PalError::Validation(format!(
                "unknown rank label '{label}' (known: {})",
                known.join(", ")
            ))
        })
    }

    #[inline]
    pub fn admits(&self, row_label: &str, threshold_weight: u8) -> bool {
        self.weight(row_label) <= threshold_weight
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, u8)> {
        self.weights.iter().map(|(l, w)| (l.as_str(), *w))
    }
}
