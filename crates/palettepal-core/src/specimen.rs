// crates/palettepal-core/src/specimen.rs

use crate::appraise::{appraise, Score, ScoringMode};
use crate::error::Result;
use crate::phase::array::{ensemble_id, parse_ensemble, PhaseArray};
use crate::sieve::Sieve;

/// A candidate phase pair, its identifier and its score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Specimen {
    pub phase_a: PhaseArray,
    pub phase_b: PhaseArray,
    pub ensemble: String,
    pub score: Score,
}

impl Specimen {
    pub fn new(phase_a: PhaseArray, phase_b: PhaseArray) -> Self {
        let ensemble = ensemble_id(&phase_a, &phase_b);
        Self {
            phase_a,
            phase_b,
            ensemble,
            score: Score::default(),
        }
    }

    /// Rebuild an unscored specimen from its identifier.
    pub fn from_ensemble(hex: &str, palette_size: usize) -> Result<Self> {
        let (a, b) = parse_ensemble(hex, palette_size)?;
        Ok(Self::new(a, b))
    }

    /// Recomputes the score from scratch.
    pub fn appraise(&mut self, sieve: &Sieve, mode: ScoringMode) -> &Score {
        self.score = appraise(&self.phase_a, &self.phase_b, sieve, mode);
        &self.score
    }
}
