//! Built-in palettes.
//!
//! Each visual family owns a disjoint table of named palettes. A palette is
//! an ordered list of entries; synthesis rules refer to entries by position,
//! so the order below is part of the output contract.

use serde::Serialize;

use crate::error::{ForgeError, Result};

use super::{Colour, VisualFamily};

/// One block colour with its three shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub base: Colour,
    pub light: Colour,
    pub dark: Colour,
}

impl PaletteEntry {
    const fn new(name: &'static str, base: u32, light: u32, dark: u32) -> Self {
        Self {
            name,
            base: Colour::hex(base),
            light: Colour::hex(light),
            dark: Colour::hex(dark),
        }
    }
}

/// A named, ordered set of palette entries.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub family: VisualFamily,
    pub entries: &'static [PaletteEntry],
}

impl Palette {
    /// Get an entry by position.
    pub fn get(&self, index: usize) -> Option<&'static PaletteEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static TERRAIN: &[Palette] = &[
    Palette {
        name: "classic",
        family: VisualFamily::Terrain,
        entries: &[
            PaletteEntry::new("grass", 0x5F7C3B, 0x7A9B4D, 0x4A6129),
            PaletteEntry::new("dirt", 0x8B5A2B, 0xA67033, 0x6B441F),
            PaletteEntry::new("stone", 0x7F7F7F, 0x999999, 0x5F5F5F),
            PaletteEntry::new("wood", 0x9C7853, 0xB8906B, 0x7A5A3F),
            PaletteEntry::new("leaves", 0x4F7942, 0x639154, 0x3D5C32),
            PaletteEntry::new("cobblestone", 0x6B6B6B, 0x808080, 0x505050),
            PaletteEntry::new("water", 0x4F76E1, 0x6B8EF5, 0x3B5AAB),
            PaletteEntry::new("sand", 0xDBD3A0, 0xF0E9B8, 0xC4BD89),
        ],
    },
    Palette {
        name: "nether",
        family: VisualFamily::Terrain,
        entries: &[
            PaletteEntry::new("netherrack", 0x723A3A, 0x8B4848, 0x5A2B2B),
            PaletteEntry::new("lava", 0xFF6B00, 0xFF8533, 0xCC5500),
            PaletteEntry::new("soul_sand", 0x4B3A28, 0x5F4A35, 0x382C1E),
            PaletteEntry::new("obsidian", 0x1A0A1A, 0x2B1A2B, 0x0F050F),
            PaletteEntry::new("nether_brick", 0x2D1B1B, 0x3D2626, 0x1F1212),
        ],
    },
    Palette {
        name: "end",
        family: VisualFamily::Terrain,
        entries: &[
            PaletteEntry::new("end_stone", 0xE0E09C, 0xF0F0B8, 0xC4C489),
            PaletteEntry::new("purpur", 0xA96F9C, 0xC285B8, 0x8B5A80),
            PaletteEntry::new("void", 0x000000, 0x1A1A1A, 0x000000),
            PaletteEntry::new("chorus", 0x6B3F6B, 0x804F80, 0x4F2F4F),
        ],
    },
];

static CREATURE: &[Palette] = &[
    Palette {
        name: "fire",
        family: VisualFamily::Creature,
        entries: &[
            PaletteEntry::new("flame_red", 0xFF4500, 0xFF6B33, 0xCC3500),
            PaletteEntry::new("ember_orange", 0xFF8C00, 0xFFB333, 0xCC7000),
            PaletteEntry::new("coal_black", 0x2F2F2F, 0x4A4A4A, 0x1A1A1A),
            PaletteEntry::new("magma_yellow", 0xFFD700, 0xFFE433, 0xCCAC00),
            PaletteEntry::new("ash_gray", 0x696969, 0x808080, 0x4F4F4F),
        ],
    },
    Palette {
        name: "water",
        family: VisualFamily::Creature,
        entries: &[
            PaletteEntry::new("ocean_blue", 0x0066CC, 0x3385E6, 0x004499),
            PaletteEntry::new("aqua_cyan", 0x00CCFF, 0x33D9FF, 0x0099CC),
            PaletteEntry::new("pearl_white", 0xF0F8FF, 0xFFFFFF, 0xD4E6FF),
            PaletteEntry::new("deep_navy", 0x191970, 0x4169E1, 0x0F0F47),
            PaletteEntry::new("foam_green", 0x98FB98, 0xB8FFB8, 0x7AE67A),
        ],
    },
    Palette {
        name: "grass",
        family: VisualFamily::Creature,
        entries: &[
            PaletteEntry::new("leaf_green", 0x228B22, 0x32CD32, 0x006400),
            PaletteEntry::new("forest_dark", 0x013220, 0x228B22, 0x001F14),
            PaletteEntry::new("vine_lime", 0x9ACD32, 0xADFF2F, 0x7BA428),
            PaletteEntry::new("bark_brown", 0x8B4513, 0xD2691E, 0x654321),
            PaletteEntry::new("flower_pink", 0xFFB6C1, 0xFFCCCB, 0xFF91A4),
        ],
    },
    Palette {
        name: "electric",
        family: VisualFamily::Creature,
        entries: &[
            PaletteEntry::new("lightning_yellow", 0xFFFF00, 0xFFFF66, 0xCCCC00),
            PaletteEntry::new("spark_gold", 0xFFD700, 0xFFE55C, 0xE6C200),
            PaletteEntry::new("thunder_blue", 0x1E90FF, 0x87CEEB, 0x0000CD),
            PaletteEntry::new("metal_silver", 0xC0C0C0, 0xE6E6FA, 0xA9A9A9),
            PaletteEntry::new("energy_purple", 0x9370DB, 0xBA55D3, 0x663399),
        ],
    },
    Palette {
        name: "psychic",
        family: VisualFamily::Creature,
        entries: &[
            PaletteEntry::new("mystic_pink", 0xFF1493, 0xFF69B4, 0xC71585),
            PaletteEntry::new("mind_purple", 0x8A2BE2, 0x9932CC, 0x4B0082),
            PaletteEntry::new("aura_blue", 0x4169E1, 0x6495ED, 0x0000CD),
            PaletteEntry::new("cosmic_indigo", 0x4B0082, 0x663399, 0x2F004F),
            PaletteEntry::new("ethereal_white", 0xF8F8FF, 0xFFFFFF, 0xE6E6FA),
        ],
    },
];

/// All palettes registered under a family, in listing order.
pub fn palettes(family: VisualFamily) -> &'static [Palette] {
    match family {
        VisualFamily::Terrain => TERRAIN,
        VisualFamily::Creature => CREATURE,
    }
}

/// Look up a palette by name within one family.
///
/// There is no fallback across families: `fire` is not a terrain palette.
pub fn resolve(family: VisualFamily, name: &str) -> Result<&'static Palette> {
    let table = palettes(family);

    table.iter().find(|p| p.name == name).ok_or_else(|| {
        let known: Vec<&str> = table.iter().map(|p| p.name).collect();
        ForgeError::InvalidConfig {
            message: format!("Unknown {} palette: {}", family, name),
            help: Some(format!("Available {} palettes: {}", family, known.join(", "))),
        }
    })
}
