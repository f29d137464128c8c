// crates/palettepal-core/src/color/mod.rs

pub mod blend;
pub mod master;
pub mod rgb;

pub use blend::{blend, build_blend_matrix, BlendMatrix};
pub use master::{master_palette, render_palette, MASTER_PALETTE, MASTER_SIZE};
pub use rgb::Rgb;
