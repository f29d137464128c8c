use palettepal_core::search::{
    default_search_config, Accepted, CollectSink, Provenance, SearchConfig, SinkFailurePolicy,
    SpecimenSink,
};
use palettepal_core::error::{PalError, Result};
use palettepal_core::color::MASTER_SIZE;
use palettepal_core::phase::DEFAULT_ANCHORS;
use palettepal_core::{SamplingMode, Search, Sieve};

/// Every code whose A index is below 32.
fn half_sieve() -> Sieve {
    (0u16..32)
        .flat_map(|a| (0u16..64).map(move |b| (a << 8) | b))
        .collect()
}

fn cfg(seed: u64, workers: usize) -> SearchConfig {
    let mut c = default_search_config();
    c.seed = seed;
    c.rounds = 300;
    c.workers = workers;
    c.threshold = 60;
    c.batch = 64;
    c
}

fn accepted(c: SearchConfig, sieve: &Sieve) -> Vec<(u64, String, u32)> {
    let mut search = Search::new(c, MASTER_SIZE, sieve, Provenance::default()).unwrap();
    let mut sink = CollectSink::default();
    let report = search.run(&mut sink).unwrap();
    assert_eq!(report.accepted as usize, sink.specimens.len());
    sink.specimens
        .into_iter()
        .map(|(r, s)| (r, s.ensemble, s.score.color_count))
        .collect()
}

#[test]
fn same_seed_same_outcomes() {
    let sieve = half_sieve();
    let a = accepted(cfg(42, 1), &sieve);
    let b = accepted(cfg(42, 1), &sieve);
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn worker_count_does_not_change_outcomes() {
    let sieve = half_sieve();
    let seq = accepted(cfg(7, 1), &sieve);
    let par = accepted(cfg(7, 4), &sieve);
    assert_eq!(seq, par);
    // round order is preserved
    assert!(par.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn different_seed_different_outcomes() {
    let sieve = half_sieve();
    assert_ne!(accepted(cfg(1, 1), &sieve), accepted(cfg(2, 1), &sieve));
}

#[test]
fn anchored_run_respects_anchors() {
    let sieve = half_sieve();
    let mut c = cfg(5, 2);
    c.sampling = SamplingMode::Anchored;
    let mut search = Search::new(c, MASTER_SIZE, &sieve, Provenance::default()).unwrap();
    let mut sink = CollectSink::default();
    search.run(&mut sink).unwrap();
    assert!(!sink.specimens.is_empty());
    for (_, s) in &sink.specimens {
        for arr in [s.phase_a, s.phase_b] {
            for &p in &DEFAULT_ANCHORS {
                assert_eq!(arr.get(p), arr.get(0));
            }
        }
    }
}

#[test]
fn report_histogram_covers_every_round() {
    let sieve = half_sieve();
    let mut search = Search::new(cfg(9, 3), MASTER_SIZE, &sieve, Provenance::default()).unwrap();
    let report = search.run(&mut CollectSink::default()).unwrap();
    assert_eq!(report.rounds, 300);
    assert_eq!(report.histogram.values().sum::<u64>(), 300);
    assert_eq!(report.histogram.keys().max().copied(), Some(report.best_color_count));
}

struct FailEvery {
    seen: usize,
}

impl SpecimenSink for FailEvery {
    fn submit(&mut self, _accepted: &Accepted<'_>) -> Result<()> {
        self.seen += 1;
        Err(PalError::Sink("disk full".into()))
    }
}

#[test]
fn sink_failure_continue_runs_all_rounds() {
    let sieve = half_sieve();
    let mut search = Search::new(cfg(3, 1), MASTER_SIZE, &sieve, Provenance::default()).unwrap();
    let mut sink = FailEvery { seen: 0 };
    let report = search.run(&mut sink).unwrap();
    assert_eq!(report.rounds, 300);
    assert!(report.accepted > 0);
    assert_eq!(report.sink_failures, report.accepted);
    assert_eq!(sink.seen as u64, report.accepted);
}

#[test]
fn sink_failure_abort_stops_run() {
    let sieve = half_sieve();
    let mut c = cfg(3, 1);
    c.on_sink_error = SinkFailurePolicy::Abort;
    let mut search = Search::new(c, MASTER_SIZE, &sieve, Provenance::default()).unwrap();
    let mut sink = FailEvery { seen: 0 };
    let err = search.run(&mut sink).unwrap_err();
    assert!(matches!(err, PalError::Sink(_)));
    assert_eq!(sink.seen, 1);
}

#[test]
fn accepted_record_serializes_with_metadata() {
    let sieve = half_sieve();
    let prov = Provenance {
        filter_desc: "half".into(),
        target_desc: "bg".into(),
        rank_label: "yellow".into(),
    };
    let search = Search::new(cfg(4, 1), MASTER_SIZE, &sieve, prov).unwrap();
    let s = search.specimen_for_round(0);
    let v = serde_json::to_value(Accepted::new(0, &s, search.meta())).unwrap();
    assert_eq!(v["ensemble"], s.ensemble.as_str());
    assert_eq!(v["phase_a"].as_array().unwrap().len(), 16);
    assert_eq!(v["score"]["max_vp_size"], 0);
    assert_eq!(v["meta"]["filter_desc"], "half");
    assert_eq!(v["meta"]["sampling"], "independent");
    assert_eq!(v["meta"]["filter_digest"], sieve.digest().as_str());
}
