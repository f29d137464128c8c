// crates/palettepal-cli/src/cmd/blend.rs

use clap::Args;
use palettepal_core::color::{blend, build_blend_matrix, master_palette, MASTER_SIZE};

#[derive(Args, Debug)]
pub struct BlendArgs {
    /// First master index (0..64). With --j prints a single blend.
    #[arg(long)]
    pub i: Option<usize>,

    /// Second master index (0..64)
    #[arg(long)]
    pub j: Option<usize>,
}

pub fn run(args: BlendArgs) -> anyhow::Result<()> {
    let pal = master_palette();

    match (args.i, args.j) {
        (Some(i), Some(j)) => {
            if i >= MASTER_SIZE || j >= MASTER_SIZE {
                anyhow::bail!("indices must be < {MASTER_SIZE} (got i={i} j={j})");
            }
            let c = blend(pal[i], pal[j]);
            println!("{:02x} {} + {:02x} {} = {} {}", i, pal[i], j, pal[j], c, c.to_hex());
        }
        (None, None) => {
            let m = build_blend_matrix(pal);
            for i in 0..m.size() {
                let row: Vec<String> = m.row(i).iter().map(|c| c.to_hex()).collect();
                println!("{}", row.join(" "));
            }
        }
        _ => anyhow::bail!("--i and --j must be given together"),
    }
    Ok(())
}
