// crates/palettepal-core/src/adjudicate/mod.rs

use crate::appraise::Score;

/// Reference selectivity: worthy iff color_count > 22.
pub const DEFAULT_THRESHOLD: u32 = 22;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adjudicator {
    pub threshold: u32,
}

impl Default for Adjudicator {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Adjudicator {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Strictly greater than the threshold.
    #[inline]
    pub fn is_worthy(&self, score: &Score) -> bool {
        score.color_count > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(n: u32) -> Score {
        Score {
            color_count: n,
            ..Score::default()
        }
    }

    #[test]
    fn boundary_is_exclusive() {
        let adj = Adjudicator::default();
        assert!(!adj.is_worthy(&score(22)));
        assert!(adj.is_worthy(&score(23)));
        assert!(!adj.is_worthy(&score(0)));
    }

    #[test]
    fn custom_threshold() {
        let adj = Adjudicator::new(0);
        assert!(adj.is_worthy(&score(1)));
        assert!(!adj.is_worthy(&score(0)));
    }
}
