// crates/palettepal-core/src/search/sink.rs

use serde::Serialize;

use crate::appraise::Score;
use crate::error::Result;
use crate::phase::array::PhaseArray;
use crate::search::config::RunMeta;
use crate::specimen::Specimen;

/// One worthy specimen as handed to a sink.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Accepted<'a> {
    pub round: u64,
    pub ensemble: &'a str,
    pub phase_a: &'a PhaseArray,
    pub phase_b: &'a PhaseArray,
    pub score: &'a Score,
    pub meta: &'a RunMeta,
}

impl<'a> Accepted<'a> {
    pub fn new(round: u64, specimen: &'a Specimen, meta: &'a RunMeta) -> Self {
        Self {
            round,
            ensemble: &specimen.ensemble,
            phase_a: &specimen.phase_a,
            phase_b: &specimen.phase_b,
            score: &specimen.score,
            meta,
        }
    }
}

/// Receives each worthy specimen exactly once, in round order, from a single thread.
pub trait SpecimenSink {
    fn submit(&mut self, accepted: &Accepted<'_>) -> Result<()>;

    /// Called once after the last round.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Keeps accepted specimens in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub specimens: Vec<(u64, Specimen)>,
}

impl SpecimenSink for CollectSink {
    fn submit(&mut self, accepted: &Accepted<'_>) -> Result<()> {
        let specimen = Specimen {
            phase_a: *accepted.phase_a,
            phase_b: *accepted.phase_b,
            ensemble: accepted.ensemble.to_string(),
            score: *accepted.score,
        };
        self.specimens.push((accepted.round, specimen));
        Ok(())
    }
}
