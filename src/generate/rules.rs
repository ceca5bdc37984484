//! Per-family synthesis rule tables.
//!
//! Both visual families share one flat and one isometric routine; what
//! differs between them is captured here as data: grid sizes, band and ring
//! thresholds, palette positions, framing divisors and background colour.

use crate::types::{Colour, Projection, VisualFamily};

/// Rule set for one family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyRules {
    pub family: VisualFamily,

    /// Colour the surface is cleared to before drawing.
    pub background: Colour,

    pub flat: FlatRule,

    pub isometric: IsoRule,
}

impl FamilyRules {
    /// The rule table for a family.
    pub fn for_family(family: VisualFamily) -> &'static FamilyRules {
        match family {
            VisualFamily::Terrain => &TERRAIN_RULES,
            VisualFamily::Creature => &CREATURE_RULES,
        }
    }

    /// Logical grid dimension for a projection.
    pub fn grid_size(&self, projection: Projection) -> u32 {
        match projection {
            Projection::Flat => self.flat.grid,
            Projection::Isometric => self.isometric.grid,
        }
    }

    /// Pixel size of one cell at a given output size.
    pub fn cell_pixels(&self, projection: Projection, output_size: u32) -> u32 {
        let divisor = match projection {
            Projection::Flat => self.flat.grid,
            Projection::Isometric => self.isometric.cell_divisor,
        };
        output_size / divisor
    }

    /// Highest palette position any rule of this family can emit.
    pub fn max_palette_index(&self) -> usize {
        self.flat.max_palette_index().max(self.isometric.max_palette_index())
    }
}

/// Flat (top-down) rule: a square grid filled in column-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRule {
    pub grid: u32,
    pub layout: FlatLayout,
}

impl FlatRule {
    fn max_palette_index(&self) -> usize {
        match self.layout {
            FlatLayout::Bands(bands) => bands
                .iter()
                .filter_map(|b| b.fill.max_palette_index())
                .max()
                .unwrap_or(0),
            FlatLayout::Rings { rings, .. } => rings.iter().map(|r| r.entry).max().unwrap_or(0),
        }
    }
}

/// How a flat grid decides each cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlatLayout {
    /// Horizontal bands keyed on the row.
    Bands(&'static [Band]),
    /// Concentric rings keyed on distance from `center`.
    Rings {
        center: (f64, f64),
        rings: &'static [Ring],
    },
}

/// Rows `rows.0..rows.1` share one fill rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub rows: (u32, u32),
    pub fill: BandFill,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandFill {
    /// Background when the cell's draw exceeds `threshold`; otherwise falls
    /// through to another fill.
    SkipAbove {
        threshold: f64,
        otherwise: &'static BandFill,
    },
    /// Always the same entry.
    Fixed(usize),
    /// One extra draw: `above` if it exceeds `threshold`, else `otherwise`.
    Pick {
        threshold: f64,
        above: usize,
        otherwise: usize,
    },
}

impl BandFill {
    fn max_palette_index(&self) -> Option<usize> {
        match *self {
            BandFill::SkipAbove { otherwise, .. } => otherwise.max_palette_index(),
            BandFill::Fixed(entry) => Some(entry),
            BandFill::Pick {
                above, otherwise, ..
            } => Some(above.max(otherwise)),
        }
    }
}

/// Cells closer than `radius` take `entry` when the cell's draw beats `gate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub gate: f64,
    pub entry: usize,
}

/// Isometric rule: columns over a square footprint, iterated z-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoRule {
    /// Footprint is `grid` x `grid` columns.
    pub grid: u32,

    /// Cell pixel size is `output_size / cell_divisor`.
    pub cell_divisor: u32,

    /// Vertical framing offset is `output_size / vertical_divisor`.
    pub vertical_divisor: f64,

    pub heights: ColumnHeights,

    /// Entry for the topmost layer of every column.
    pub top: usize,
}

impl IsoRule {
    fn max_palette_index(&self) -> usize {
        let body = match self.heights {
            ColumnHeights::Random { body, .. } => body,
            // Distances are strictly below the radius.
            ColumnHeights::Dome { radius, .. } => (radius.ceil() as usize).saturating_sub(1),
        };
        self.top.max(body)
    }
}

/// How tall each isometric column is and what its lower layers are made of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnHeights {
    /// One draw per column: height in `1..=max_height`; lower layers use `body`.
    Random { max_height: u32, body: usize },
    /// Columns within `radius` of `center`; taller towards the middle.
    /// Lower layers use the floored distance as their palette position.
    Dome {
        center: (f64, f64),
        radius: f64,
        peak: u32,
    },
}

const BLOCK_GRID: u32 = 16;

// Grass with scattered leaves.
const SURFACE_FILL: BandFill = BandFill::Pick {
    threshold: 0.7,
    above: 4,
    otherwise: 0,
};

static TERRAIN_BANDS: [Band; 4] = [
    // Sky, with the odd stray surface block.
    Band {
        rows: (0, 4),
        fill: BandFill::SkipAbove {
            threshold: 0.3,
            otherwise: &SURFACE_FILL,
        },
    },
    Band {
        rows: (4, 8),
        fill: SURFACE_FILL,
    },
    // Dirt.
    Band {
        rows: (8, 12),
        fill: BandFill::Fixed(1),
    },
    // Dirt and stone.
    Band {
        rows: (12, BLOCK_GRID),
        fill: BandFill::Pick {
            threshold: 0.5,
            above: 1,
            otherwise: 2,
        },
    },
];

static CREATURE_RINGS: [Ring; 4] = [
    Ring {
        radius: 3.0,
        gate: 0.2,
        entry: 0,
    },
    Ring {
        radius: 5.0,
        gate: 0.4,
        entry: 1,
    },
    Ring {
        radius: 7.0,
        gate: 0.6,
        entry: 2,
    },
    // Accent spots anywhere on the grid.
    Ring {
        radius: f64::INFINITY,
        gate: 0.8,
        entry: 3,
    },
];

static TERRAIN_RULES: FamilyRules = FamilyRules {
    family: VisualFamily::Terrain,
    background: Colour::hex(0x87CEEB),
    flat: FlatRule {
        grid: BLOCK_GRID,
        layout: FlatLayout::Bands(&TERRAIN_BANDS),
    },
    isometric: IsoRule {
        grid: 8,
        cell_divisor: 20,
        vertical_divisor: 4.0,
        heights: ColumnHeights::Random {
            max_height: 4,
            body: 1,
        },
        top: 0,
    },
};

static CREATURE_RULES: FamilyRules = FamilyRules {
    family: VisualFamily::Creature,
    background: Colour::hex(0xE6F3FF),
    flat: FlatRule {
        grid: BLOCK_GRID,
        layout: FlatLayout::Rings {
            center: (8.0, 8.0),
            rings: &CREATURE_RINGS,
        },
    },
    isometric: IsoRule {
        grid: 6,
        cell_divisor: 16,
        vertical_divisor: 3.0,
        heights: ColumnHeights::Dome {
            center: (3.0, 3.0),
            radius: 3.0,
            peak: 4,
        },
        top: 0,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{palette, ALLOWED_SIZES};

    #[test]
    fn test_grid_sizes() {
        let terrain = FamilyRules::for_family(VisualFamily::Terrain);
        let creature = FamilyRules::for_family(VisualFamily::Creature);

        assert_eq!(terrain.grid_size(Projection::Flat), 16);
        assert_eq!(terrain.grid_size(Projection::Isometric), 8);
        assert_eq!(creature.grid_size(Projection::Flat), 16);
        assert_eq!(creature.grid_size(Projection::Isometric), 6);
    }

    #[test]
    fn test_cell_pixels_positive_for_allowed_sizes() {
        for family in VisualFamily::ALL {
            let rules = FamilyRules::for_family(family);
            for projection in [Projection::Flat, Projection::Isometric] {
                for size in ALLOWED_SIZES {
                    assert!(rules.cell_pixels(projection, size) >= 1);
                }
            }
        }
    }

    #[test]
    fn test_cell_pixels_floor() {
        let terrain = FamilyRules::for_family(VisualFamily::Terrain);
        assert_eq!(terrain.cell_pixels(Projection::Flat, 256), 16);
        assert_eq!(terrain.cell_pixels(Projection::Isometric, 256), 12);
        assert_eq!(terrain.cell_pixels(Projection::Flat, 100), 6);
    }

    #[test]
    fn test_vertical_divisors_differ() {
        let terrain = FamilyRules::for_family(VisualFamily::Terrain);
        let creature = FamilyRules::for_family(VisualFamily::Creature);
        assert_eq!(terrain.isometric.vertical_divisor, 4.0);
        assert_eq!(creature.isometric.vertical_divisor, 3.0);
    }

    #[test]
    fn test_bands_cover_grid() {
        let FlatLayout::Bands(bands) = TERRAIN_RULES.flat.layout else {
            panic!("terrain uses bands");
        };
        let mut next_row = 0;
        for band in bands {
            assert_eq!(band.rows.0, next_row);
            next_row = band.rows.1;
        }
        assert_eq!(next_row, TERRAIN_RULES.flat.grid);
    }

    #[test]
    fn test_creature_indices_within_palettes() {
        let rules = FamilyRules::for_family(VisualFamily::Creature);
        for p in palette::palettes(VisualFamily::Creature) {
            assert!(rules.max_palette_index() < p.len(), "{}", p.name);
        }
    }

    #[test]
    fn test_sky_falls_through_to_surface() {
        let FlatLayout::Bands(bands) = TERRAIN_RULES.flat.layout else {
            panic!("terrain uses bands");
        };
        assert_eq!(
            bands[0].fill,
            BandFill::SkipAbove {
                threshold: 0.3,
                otherwise: &SURFACE_FILL,
            }
        );
        assert_eq!(bands[0].fill.max_palette_index(), Some(4));
    }

    #[test]
    fn test_terrain_max_index() {
        assert_eq!(TERRAIN_RULES.max_palette_index(), 4);
    }
}
