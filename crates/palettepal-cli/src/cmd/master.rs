// crates/palettepal-cli/src/cmd/master.rs

use clap::Args;
use palettepal_core::color::{master_palette, render_palette};

#[derive(Args, Debug)]
pub struct MasterArgs {
    /// One "index #RRGGBB" line per entry instead of the 4x16 grid
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

pub fn run(args: MasterArgs) -> anyhow::Result<()> {
    let pal = master_palette();
    if args.list {
        for (i, c) in pal.iter().enumerate() {
            println!("{:02x} {}", i, c.to_hex());
        }
    } else {
        print!("{}", render_palette(pal));
    }
    Ok(())
}
