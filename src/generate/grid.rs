//! Grid synthesis.
//!
//! Walks a family's logical grid and decides which palette entry, if any,
//! each cell (flat) or column layer (isometric) gets. The result depends only
//! on the rule table, the palette length and the seed; output size plays no
//! part, so the same seed gives the same layout at every resolution.

use crate::types::{Palette, Projection};

use super::rng::SeededRandom;
use super::rules::{BandFill, ColumnHeights, FamilyRules, FlatLayout, FlatRule, IsoRule};

/// The logical result of one synthesis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Flat(CellGrid),
    Isometric(Vec<BlockPlacement>),
}

impl Layout {
    /// Every palette position the layout refers to.
    pub fn palette_indices(&self) -> Vec<usize> {
        match self {
            Layout::Flat(grid) => grid.cells.iter().flatten().copied().collect(),
            Layout::Isometric(blocks) => blocks.iter().map(|b| b.entry).collect(),
        }
    }
}

/// Square grid of optional palette positions (row-major: `cells[y * size + x]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    size: u32,
    cells: Vec<Option<usize>>,
}

impl CellGrid {
    fn new(size: u32) -> Self {
        Self {
            size,
            cells: vec![None; (size * size) as usize],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Palette position at a cell; `None` for background or out of range.
    pub fn get(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[(y * self.size + x) as usize]
    }

    fn set(&mut self, x: u32, y: u32, entry: Option<usize>) {
        self.cells[(y * self.size + x) as usize] = entry;
    }

    /// Painted cells as `(x, y, entry)`, in row-major order.
    pub fn painted(&self) -> impl Iterator<Item = (u32, u32, usize)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let i = i as u32;
            cell.map(|entry| (i % self.size, i / self.size, entry))
        })
    }
}

/// One cube in an isometric scene, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPlacement {
    pub x: u32,
    pub z: u32,
    /// Layer within the column, 0 at the bottom.
    pub layer: u32,
    pub entry: usize,
}

/// Run a family's rule set for one projection.
///
/// Positions the palette does not have are left as background, though the
/// random draws that produced them are still consumed.
pub fn synthesize(
    rules: &FamilyRules,
    projection: Projection,
    palette: &Palette,
    seed: i64,
) -> Layout {
    let mut rng = SeededRandom::new(seed);

    match projection {
        Projection::Flat => Layout::Flat(synthesize_flat(&rules.flat, palette.len(), &mut rng)),
        Projection::Isometric => Layout::Isometric(synthesize_isometric(
            &rules.isometric,
            palette.len(),
            &mut rng,
        )),
    }
}

fn synthesize_flat(rule: &FlatRule, palette_len: usize, rng: &mut SeededRandom) -> CellGrid {
    let mut grid = CellGrid::new(rule.grid);

    // Column-major: draw order is part of the seed contract.
    for x in 0..rule.grid {
        for y in 0..rule.grid {
            let noise = rng.next_f64();

            let entry = match rule.layout {
                FlatLayout::Bands(bands) => bands
                    .iter()
                    .find(|b| (b.rows.0..b.rows.1).contains(&y))
                    .and_then(|b| fill_band(&b.fill, noise, rng)),
                FlatLayout::Rings { center, rings } => {
                    let distance = (x as f64 - center.0).hypot(y as f64 - center.1);
                    rings
                        .iter()
                        .find(|r| distance < r.radius && noise > r.gate)
                        .map(|r| r.entry)
                }
            };

            grid.set(x, y, entry.filter(|&e| e < palette_len));
        }
    }

    grid
}

/// Decide one banded cell. `Pick` takes its own draw after the cell's noise.
fn fill_band(fill: &BandFill, noise: f64, rng: &mut SeededRandom) -> Option<usize> {
    match *fill {
        BandFill::SkipAbove {
            threshold,
            otherwise,
        } => {
            if noise > threshold {
                None
            } else {
                fill_band(otherwise, noise, rng)
            }
        }
        BandFill::Fixed(entry) => Some(entry),
        BandFill::Pick {
            threshold,
            above,
            otherwise,
        } => Some(if rng.next_f64() > threshold {
            above
        } else {
            otherwise
        }),
    }
}

fn synthesize_isometric(
    rule: &IsoRule,
    palette_len: usize,
    rng: &mut SeededRandom,
) -> Vec<BlockPlacement> {
    let mut blocks = Vec::new();

    for z in 0..rule.grid {
        for x in 0..rule.grid {
            let (height, body) = match rule.heights {
                ColumnHeights::Random { max_height, body } => {
                    let height = (rng.next_f64() * max_height as f64).floor() as u32 + 1;
                    (height, body)
                }
                ColumnHeights::Dome {
                    center,
                    radius,
                    peak,
                } => {
                    let distance = (x as f64 - center.0).hypot(z as f64 - center.1);
                    if distance >= radius {
                        continue;
                    }
                    let ring = distance.floor() as u32;
                    let body = (ring as usize).min(palette_len.saturating_sub(1));
                    (peak.saturating_sub(ring).max(1), body)
                }
            };

            for layer in 0..height {
                let entry = if layer == height - 1 { rule.top } else { body };
                if entry < palette_len {
                    blocks.push(BlockPlacement { x, z, layer, entry });
                }
            }
        }
    }

    blocks
}
