//! Flat block rasterization.

use crate::generate::CellGrid;
use crate::types::{Palette, PaletteEntry};

use super::Surface;

/// Width of the bevel strips, in pixels.
const BEVEL: i64 = 2;

/// Draw every painted cell of a flat grid.
pub fn draw_flat(surface: &mut Surface, grid: &CellGrid, palette: &Palette, cell: u32) {
    for (x, y, index) in grid.painted() {
        if let Some(entry) = palette.get(index) {
            let cell = i64::from(cell);
            draw_block(surface, i64::from(x) * cell, i64::from(y) * cell, cell, entry);
        }
    }
}

/// Draw one bevelled square: base fill, light top/left strips, dark
/// bottom/right strips.
///
/// Below four pixels per side the strips overlap and cover the base colour.
/// That is accepted at small sizes.
pub fn draw_block(surface: &mut Surface, x: i64, y: i64, size: i64, entry: &PaletteEntry) {
    surface.fill_rect(x, y, size, size, entry.base);

    surface.fill_rect(x, y, size, BEVEL, entry.light);
    surface.fill_rect(x, y, BEVEL, size, entry.light);

    surface.fill_rect(x, y + size - BEVEL, size, BEVEL, entry.dark);
    surface.fill_rect(x + size - BEVEL, y, BEVEL, size, entry.dark);
}
