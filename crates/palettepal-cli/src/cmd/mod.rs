// crates/palettepal-cli/src/cmd/mod.rs

pub mod appraise;
pub mod blend;
pub mod filter_args;
pub mod master;
pub mod search;
