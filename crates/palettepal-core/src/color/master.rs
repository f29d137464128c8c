// crates/palettepal-core/src/color/master.rs
//
// The 64-entry master palette (unsaturated v6). Index is identity: phase arrays
// carry indices into this table, never colors.
//
// Layout is four luminance rows of 16; columns 0x0D..0x0F are mostly black fill.

use crate::color::rgb::Rgb;

pub const MASTER_SIZE: usize = 64;

pub const MASTER_PALETTE: [Rgb; MASTER_SIZE] = [
    Rgb::new(107, 107, 107), Rgb::new(135,  30,   0), Rgb::new(150,  11,  31), Rgb::new(135,  12,  59),
    Rgb::new( 97,  13,  89), Rgb::new( 40,   5,  94), Rgb::new(  0,  17,  85), Rgb::new(  0,  27,  70),
    Rgb::new(  0,  50,  48), Rgb::new(  0,  72,  10), Rgb::new(  0,  78,   0), Rgb::new( 25,  70,   0),
    Rgb::new( 88,  58,   0), Rgb::new(  0,   0,   0), Rgb::new(  0,   0,   0), Rgb::new(  0,   0,   0),

    Rgb::new(178, 178, 178), Rgb::new(209,  83,  26), Rgb::new(238,  53,  72), Rgb::new(236,  35, 113),
    Rgb::new(183,  30, 154), Rgb::new( 98,  30, 165), Rgb::new( 25,  45, 165), Rgb::new(  0,  75, 135),
    Rgb::new(  0, 105, 103), Rgb::new(  0, 132,  41), Rgb::new(  0, 139,   3), Rgb::new( 64, 130,   0),
    Rgb::new(145, 120,   0), Rgb::new(  0,   0,   0), Rgb::new(  0,   0,   0), Rgb::new(  0,   0,   0),

    Rgb::new(255, 255, 255), Rgb::new(253, 173,  99), Rgb::new(254, 138, 144), Rgb::new(252, 119, 185),
    Rgb::new(254, 113, 231), Rgb::new(201, 111, 247), Rgb::new(106, 131, 245), Rgb::new( 41, 156, 221),
    Rgb::new(  7, 184, 189), Rgb::new(  7, 209, 132), Rgb::new( 59, 220,  91), Rgb::new(125, 215,  72),
    Rgb::new(206, 204,  72), Rgb::new( 85,  85,  85), Rgb::new(  0,   0,   0), Rgb::new(  0,   0,   0),

    Rgb::new(255, 255, 255), Rgb::new(254, 227, 196), Rgb::new(254, 213, 215), Rgb::new(254, 205, 230),
    Rgb::new(254, 202, 249), Rgb::new(240, 201, 254), Rgb::new(199, 209, 254), Rgb::new(172, 220, 247),
    Rgb::new(156, 232, 232), Rgb::new(157, 242, 209), Rgb::new(177, 244, 191), Rgb::new(205, 245, 183),
    Rgb::new(238, 240, 183), Rgb::new(190, 190, 190), Rgb::new(  0,   0,   0), Rgb::new(  0,   0,   0),
];

#[inline]
pub fn master_palette() -> &'static [Rgb] {
    &MASTER_PALETTE
}

/// Four rows of 16 colors, one row per line.
pub fn render_palette(palette: &[Rgb]) -> String {
    let mut s = String::new();
    for row in palette.chunks(16) {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        s.push_str(&line.join(" "));
        s.push('\n');
    }
    s
}
