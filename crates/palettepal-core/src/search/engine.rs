// crates/palettepal-core/src/search/engine.rs
//
// Search orchestrator: Idle -> Running -> Terminated.
//
// Each round: sample (own ChaCha8 stream) -> expand -> score -> adjudicate.
// Rounds run in batches, optionally on a rayon pool; worthy specimens of a
// batch are then forwarded to the sink in round order from this thread.
// There is no early exit: every configured round is sampled.

use std::collections::BTreeMap;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::adjudicate::Adjudicator;
use crate::appraise::{appraise, Score};
use crate::color::BlendMatrix;
use crate::digest::{blake3_16, hex_lower};
use crate::error::{PalError, Result};
use crate::phase::array::PhaseArray;
use crate::phase::sampler::{round_rng, PhaseSampler};
use crate::search::config::{Provenance, RunMeta, SearchConfig, SinkFailurePolicy};
use crate::search::sink::{Accepted, SpecimenSink};
use crate::sieve::Sieve;
use crate::specimen::Specimen;
use crate::validate::validate_search_config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Running { next_round: u64 },
    Terminated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub rounds: u64,
    pub accepted: u64,
    pub sink_failures: u64,
    pub best_color_count: u32,
    /// color_count -> rounds with that score (non-zero buckets only).
    pub histogram: BTreeMap<u32, u64>,
}

impl RunReport {
    fn observe(&mut self, score: &Score) {
        self.best_color_count = self.best_color_count.max(score.color_count);
        *self.histogram.entry(score.color_count).or_insert(0) += 1;
    }
}

struct RoundOutcome {
    round: u64,
    phase_a: PhaseArray,
    phase_b: PhaseArray,
    score: Score,
}

pub struct Search<'a> {
    cfg: SearchConfig,
    sampler: PhaseSampler,
    adjudicator: Adjudicator,
    sieve: &'a Sieve,
    blend: Option<&'a BlendMatrix>,
    meta: RunMeta,
    state: SearchState,
}

fn run_id(cfg: &SearchConfig, filter_digest: &str) -> String {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&cfg.seed.to_le_bytes());
    bytes.extend_from_slice(&cfg.rounds.to_le_bytes());
    bytes.extend_from_slice(cfg.sampling.name().as_bytes());
    for &p in &cfg.anchors {
        bytes.push(p as u8);
    }
    bytes.extend_from_slice(cfg.scoring.name().as_bytes());
    bytes.extend_from_slice(&cfg.threshold.to_le_bytes());
    bytes.extend_from_slice(filter_digest.as_bytes());
    hex_lower(&blake3_16(&bytes))
}

impl<'a> Search<'a> {
    pub fn new(
        cfg: SearchConfig,
        palette_size: usize,
        sieve: &'a Sieve,
        provenance: Provenance,
    ) -> Result<Self> {
        validate_search_config(&cfg)?;
        let sampler = PhaseSampler::new(cfg.sampling, &cfg.anchors, palette_size)?;

        let filter_digest = sieve.digest();
        let meta = RunMeta {
            run_id: run_id(&cfg, &filter_digest),
            seed: cfg.seed,
            filter_digest,
            filter_desc: provenance.filter_desc,
            target_desc: provenance.target_desc,
            rank_label: provenance.rank_label,
            sampling: cfg.sampling.name(),
            scoring: cfg.scoring.name(),
            threshold: cfg.threshold,
        };

        Ok(Self {
            adjudicator: Adjudicator::new(cfg.threshold),
            cfg,
            sampler,
            sieve,
            blend: None,
            meta,
            state: SearchState::Idle,
        })
    }

    /// Attach a blend matrix for inspection by callers. Scoring never reads it.
    pub fn with_blend(mut self, blend: &'a BlendMatrix) -> Self {
        self.blend = Some(blend);
        self
    }

    pub fn blend(&self) -> Option<&'a BlendMatrix> {
        self.blend
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn meta(&self) -> &RunMeta {
        &self.meta
    }

    fn evaluate(&self, round: u64) -> RoundOutcome {
        let mut rng = round_rng(self.cfg.seed, round);
        let (phase_a, phase_b) = self.sampler.sample_pair(&mut rng);
        let score = appraise(&phase_a, &phase_b, self.sieve, self.cfg.scoring);
        RoundOutcome {
            round,
            phase_a,
            phase_b,
            score,
        }
    }

    /// Sample and score one round without adjudicating or forwarding it.
    pub fn specimen_for_round(&self, round: u64) -> Specimen {
        let o = self.evaluate(round);
        let mut s = Specimen::new(o.phase_a, o.phase_b);
        s.score = o.score;
        s
    }

    fn evaluate_batch(&self, pool: Option<&ThreadPool>, start: u64, len: usize) -> Vec<RoundOutcome> {
        match pool {
            Some(pool) => pool.install(|| {
                (0..len)
                    .into_par_iter()
                    .map(|k| self.evaluate(start + k as u64))
                    .collect()
            }),
            None => (0..len).map(|k| self.evaluate(start + k as u64)).collect(),
        }
    }

    /// Run every configured round, forwarding worthy specimens to `sink`.
    /// A search runs once; calling this again is a state error.
    pub fn run<S: SpecimenSink + ?Sized>(&mut self, sink: &mut S) -> Result<RunReport> {
        if self.state != SearchState::Idle {
            return Err(PalError::State(format!(
                "run requires Idle, search is {:?}",
                self.state
            )));
        }

        let pool = if self.cfg.workers > 1 {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.cfg.workers)
                .build()
                .map_err(|e| PalError::State(format!("worker pool: {e}")))?;
            Some(pool)
        } else {
            None
        };

        if self.sieve.is_empty() {
            warn!("sieve is empty; no specimen can score above 0");
        }

        self.state = SearchState::Running { next_round: 0 };
        info!(
            run_id = %self.meta.run_id,
            seed = self.cfg.seed,
            rounds = self.cfg.rounds,
            workers = self.cfg.workers,
            sampling = self.meta.sampling,
            scoring = self.meta.scoring,
            threshold = self.cfg.threshold,
            sieve_len = self.sieve.len(),
            blend_matrix = self.blend.is_some(),
            "search running"
        );

        let mut report = RunReport::default();
        let mut start = 0u64;

        while start < self.cfg.rounds {
            let len = (self.cfg.rounds - start).min(self.cfg.batch as u64) as usize;
            let outcomes = self.evaluate_batch(pool.as_ref(), start, len);

            for o in outcomes {
                report.observe(&o.score);
                if !self.adjudicator.is_worthy(&o.score) {
                    continue;
                }

                let mut specimen = Specimen::new(o.phase_a, o.phase_b);
                specimen.score = o.score;
                report.accepted += 1;
                debug!(
                    round = o.round,
                    ensemble = %specimen.ensemble,
                    color_count = specimen.score.color_count,
                    "worthy specimen"
                );

                let submitted = sink.submit(&Accepted::new(o.round, &specimen, &self.meta));
                if let Err(e) = submitted {
                    match self.cfg.on_sink_error {
                        SinkFailurePolicy::Continue => {
                            report.sink_failures += 1;
                            warn!(round = o.round, ensemble = %specimen.ensemble, error = %e, "sink rejected specimen");
                        }
                        SinkFailurePolicy::Abort => {
                            self.state = SearchState::Terminated;
                            return Err(PalError::Sink(format!("round {}: {e}", o.round)));
                        }
                    }
                }
            }

            start += len as u64;
            report.rounds = start;
            self.state = SearchState::Running { next_round: start };
        }

        let finished = sink.finish();
        self.state = SearchState::Terminated;
        finished.map_err(|e| PalError::Sink(format!("finish: {e}")))?;

        info!(
            run_id = %self.meta.run_id,
            rounds = report.rounds,
            accepted = report.accepted,
            sink_failures = report.sink_failures,
            best_color_count = report.best_color_count,
            "search terminated"
        );
        Ok(report)
    }
}
