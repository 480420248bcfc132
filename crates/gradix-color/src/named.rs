// SPDX-License-Identifier: MIT
//
// The named color table — the sixteen classic chat colors users can spell
// out instead of typing hex, plus the British-spelling aliases.

use crate::rgb::Rgb;

/// The named colors, in palette order.
pub const NAMED: [(&str, Rgb); 16] = [
    ("black", Rgb::from_u32(0x00_00_00)),
    ("dark_blue", Rgb::from_u32(0x00_00_aa)),
    ("dark_green", Rgb::from_u32(0x00_aa_00)),
    ("dark_aqua", Rgb::from_u32(0x00_aa_aa)),
    ("dark_red", Rgb::from_u32(0xaa_00_00)),
    ("dark_purple", Rgb::from_u32(0xaa_00_aa)),
    ("gold", Rgb::from_u32(0xff_aa_00)),
    ("gray", Rgb::from_u32(0xaa_aa_aa)),
    ("dark_gray", Rgb::from_u32(0x55_55_55)),
    ("blue", Rgb::from_u32(0x55_55_ff)),
    ("green", Rgb::from_u32(0x55_ff_55)),
    ("aqua", Rgb::from_u32(0x55_ff_ff)),
    ("red", Rgb::from_u32(0xff_55_55)),
    ("light_purple", Rgb::from_u32(0xff_55_ff)),
    ("yellow", Rgb::from_u32(0xff_ff_55)),
    ("white", Rgb::from_u32(0xff_ff_ff)),
];

/// Alternate spellings accepted alongside the canonical names.
const ALIASES: [(&str, &str); 2] = [("grey", "gray"), ("dark_grey", "dark_gray")];

/// Look up a color by name (canonical or alias).
#[must_use]
pub fn lookup(name: &str) -> Option<Rgb> {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| *canonical);
    NAMED
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}

/// Parse a user-supplied color: a `#`-prefixed hex string or a name.
#[must_use]
pub fn parse(input: &str) -> Option<Rgb> {
    if input.starts_with('#') {
        Rgb::hex(input)
    } else {
        lookup(input)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
