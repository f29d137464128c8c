// crates/palettepal-cli/src/io/mod.rs

pub mod filter_file;
pub mod jsonl;
pub mod print;
