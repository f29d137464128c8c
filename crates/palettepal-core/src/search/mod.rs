// crates/palettepal-core/src/search/mod.rs

pub mod config;
pub mod defaults;
pub mod engine;
pub mod sink;

pub use config::{Provenance, RunMeta, SearchConfig, SinkFailurePolicy};
pub use defaults::{default_search_config, DEFAULT_BATCH, DEFAULT_ROUNDS, DEFAULT_SEED};
pub use engine::{RunReport, Search, SearchState};
pub use sink::{Accepted, CollectSink, SpecimenSink};
