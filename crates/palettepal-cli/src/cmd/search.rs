// crates/palettepal-cli/src/cmd/search.rs

use std::time::Instant;

use anyhow::Context;
use clap::Args;
use palettepal_core::color::{build_blend_matrix, master_palette, BlendMatrix, MASTER_SIZE};
use palettepal_core::error::{PalError, Result as CoreResult};
use palettepal_core::phase::entropy_seed;
use palettepal_core::search::{
    default_search_config, Accepted, Provenance, RunReport, Search, SinkFailurePolicy,
    SpecimenSink, DEFAULT_BATCH, DEFAULT_ROUNDS,
};
use palettepal_core::adjudicate::DEFAULT_THRESHOLD;
use palettepal_core::{SamplingMode, ScoringMode};
use tracing::info;

use crate::cmd::filter_args::FilterArgs;
use crate::io::jsonl::JsonlSink;
use crate::io::print::PrintSink;

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Number of rounds (phase pairs) to sample
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: u64,

    /// Worker threads (rounds are independent; results do not depend on this)
    #[arg(long, default_value_t = 1)]
    pub workers: usize,

    /// Run seed. If omitted, a seed is drawn from OS entropy and logged.
    #[arg(long, value_parser = parse_u64_any)]
    pub seed: Option<u64>,

    /// Sampling mode: independent | anchored
    #[arg(long, default_value = "independent")]
    pub mode: String,

    /// Scoring mode: distinct | occurrences
    #[arg(long, default_value = "distinct")]
    pub scoring: String,

    /// Worthy iff color_count > threshold
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u32,

    /// Rounds per parallel batch
    #[arg(long, default_value_t = DEFAULT_BATCH)]
    pub batch: usize,

    /// Write accepted specimens as JSONL to this path
    #[arg(long)]
    pub out: Option<String>,

    /// Append to --out instead of truncating it
    #[arg(long, default_value_t = false)]
    pub append: bool,

    /// Print each accepted phase pair to stdout
    #[arg(long, default_value_t = false)]
    pub print: bool,

    /// With --print, also show the blended color of each A[k]/B[k] position
    #[arg(long, default_value_t = false)]
    pub show_blend: bool,

    /// Free-text description of the filter (provenance only)
    #[arg(long, default_value = "")]
    pub filter_desc: String,

    /// Free-text description of the search target (provenance only)
    #[arg(long, default_value = "")]
    pub target_desc: String,

    /// Stop the run on the first sink failure instead of logging and continuing
    #[arg(long, default_value_t = false)]
    pub abort_on_sink_error: bool,

    /// Write the run report (JSON) to this path
    #[arg(long)]
    pub report: Option<String>,
}

/// Fans each accepted specimen out to the configured outputs.
/// Every output sees every specimen; the first error is reported after all have run.
struct CliSink<'a> {
    jsonl: Option<JsonlSink>,
    print: Option<PrintSink<'a>>,
}

fn keep_first(first: &mut Option<PalError>, r: CoreResult<()>) {
    if let Err(e) = r {
        first.get_or_insert(e);
    }
}

impl SpecimenSink for CliSink<'_> {
    fn submit(&mut self, accepted: &Accepted<'_>) -> CoreResult<()> {
        let mut first = None;
        if let Some(j) = self.jsonl.as_mut() {
            keep_first(&mut first, j.submit(accepted));
        }
        if let Some(p) = self.print.as_mut() {
            keep_first(&mut first, p.submit(accepted));
        }
        first.map_or(Ok(()), Err)
    }

    fn finish(&mut self) -> CoreResult<()> {
        let mut first = None;
        if let Some(j) = self.jsonl.as_mut() {
            keep_first(&mut first, j.finish());
        }
        if let Some(p) = self.print.as_mut() {
            keep_first(&mut first, p.finish());
        }
        first.map_or(Ok(()), Err)
    }
}

pub fn run(args: SearchArgs) -> anyhow::Result<()> {
    let sampling = SamplingMode::parse(&args.mode)?;
    let scoring = ScoringMode::parse(&args.scoring)?;

    let (sieve, stats) = args.filter.load()?;
    info!(
        path = %args.filter.filter,
        rank = %args.filter.rank,
        rows = stats.rows,
        admitted = stats.admitted,
        rejected_rank = stats.rejected_rank,
        malformed = stats.malformed,
        sieve_len = sieve.len(),
        "filter loaded"
    );

    let seed = match args.seed {
        Some(s) => s,
        None => {
            let s = entropy_seed();
            info!(seed = s, "no --seed given; drew one from entropy");
            s
        }
    };

    let mut cfg = default_search_config();
    cfg.rounds = args.rounds;
    cfg.workers = args.workers;
    cfg.seed = seed;
    cfg.sampling = sampling;
    cfg.scoring = scoring;
    cfg.threshold = args.threshold;
    cfg.batch = args.batch;
    cfg.on_sink_error = if args.abort_on_sink_error {
        SinkFailurePolicy::Abort
    } else {
        SinkFailurePolicy::Continue
    };

    let provenance = Provenance {
        filter_desc: args.filter_desc.clone(),
        target_desc: args.target_desc.clone(),
        rank_label: args.filter.rank.to_ascii_lowercase(),
    };

    let blend: Option<BlendMatrix> = if args.show_blend {
        Some(build_blend_matrix(master_palette()))
    } else {
        None
    };

    let mut search = Search::new(cfg, MASTER_SIZE, &sieve, provenance)?;
    if let Some(m) = blend.as_ref() {
        search = search.with_blend(m);
    }
    let run_id = search.meta().run_id.clone();

    let jsonl = match args.out.as_deref() {
        Some(path) => Some(JsonlSink::create(path, args.append)?),
        None => None,
    };
    let print = if args.print {
        Some(PrintSink::new(search.blend()))
    } else {
        None
    };
    let mut sink = CliSink { jsonl, print };

    let t0 = Instant::now();
    let report = search.run(&mut sink)?;
    let secs = t0.elapsed().as_secs_f64();

    print_summary(&run_id, seed, &report, secs);
    if let Some(j) = sink.jsonl.as_ref() {
        eprintln!("jsonl_written   = {}", j.written());
    }

    if let Some(path) = args.report.as_deref() {
        let body = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, body).with_context(|| format!("write run report {path}"))?;
    }

    Ok(())
}

fn print_summary(run_id: &str, seed: u64, r: &RunReport, secs: f64) {
    let rate = if secs > 0.0 { (r.rounds as f64) / secs } else { 0.0 };
    eprintln!("--- search ---");
    eprintln!("run_id          = {}", run_id);
    eprintln!("seed            = 0x{:016X}", seed);
    eprintln!("rounds          = {}", r.rounds);
    eprintln!("accepted        = {}", r.accepted);
    eprintln!("sink_failures   = {}", r.sink_failures);
    eprintln!("best_color_count= {}", r.best_color_count);
    eprintln!("elapsed_s       = {:.3} ({:.0} rounds/s)", secs, rate);
}

fn parse_u64_any(s: &str) -> Result<u64, String> {
    let t = s.trim();
    let r = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        t.parse::<u64>()
    };
    r.map_err(|e| format!("invalid u64 '{s}': {e}"))
}
