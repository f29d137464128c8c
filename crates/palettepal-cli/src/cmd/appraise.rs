// crates/palettepal-cli/src/cmd/appraise.rs

use clap::Args;
use palettepal_core::adjudicate::{Adjudicator, DEFAULT_THRESHOLD};
use palettepal_core::color::MASTER_SIZE;
use palettepal_core::phase::render_phase_pair;
use palettepal_core::vps::{expand, render_vps};
use palettepal_core::{ScoringMode, Specimen};

use crate::cmd::filter_args::FilterArgs;

#[derive(Args, Debug)]
pub struct AppraiseArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Specimen id: 64 hex chars, phase A then phase B
    #[arg(long)]
    pub ensemble: String,

    /// Scoring mode: distinct | occurrences
    #[arg(long, default_value = "distinct")]
    pub scoring: String,

    /// Worthy iff color_count > threshold
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u32,

    /// Also print the 16x16 virtual palette set
    #[arg(long, default_value_t = false)]
    pub vps: bool,
}

pub fn run(args: AppraiseArgs) -> anyhow::Result<()> {
    let scoring = ScoringMode::parse(&args.scoring)?;
    let (sieve, _stats) = args.filter.load()?;

    let mut specimen = Specimen::from_ensemble(&args.ensemble, MASTER_SIZE)?;
    specimen.appraise(&sieve, scoring);
    let worthy = Adjudicator::new(args.threshold).is_worthy(&specimen.score);

    print!("{}", render_phase_pair(&specimen.phase_a, &specimen.phase_b));
    if args.vps {
        println!();
        print!("{}", render_vps(&expand(&specimen.phase_a, &specimen.phase_b)));
    }
    println!();
    println!("ensemble        = {}", specimen.ensemble);
    for (name, v) in specimen.score.entries() {
        println!("{:<16}= {}", name, v);
    }
    println!("worthy          = {} (threshold {})", worthy, args.threshold);
    Ok(())
}
