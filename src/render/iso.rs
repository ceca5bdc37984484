//! Isometric block rasterization.
//!
//! Each block is three convex faces around an anchor point: a light top
//! rhombus, a base-coloured left face and a dark right face. Offsets are in
//! half-cell steps, which gives the usual 2:1 isometric slope.

use crate::generate::BlockPlacement;
use crate::types::{Palette, PaletteEntry};

use super::Surface;

/// Screen anchor for a block.
///
/// `vertical_divisor` frames the scene vertically and differs per family.
pub fn screen_position(
    block: &BlockPlacement,
    cell: u32,
    output_size: u32,
    vertical_divisor: f64,
) -> (f64, f64) {
    let cell = f64::from(cell);
    let size = f64::from(output_size);
    let (x, z, layer) = (f64::from(block.x), f64::from(block.z), f64::from(block.layer));

    let screen_x = (x - z) * cell + size / 2.0;
    let screen_y = (x + z) * cell / 2.0 + layer * cell / 2.0 + size / vertical_divisor;
    (screen_x, screen_y)
}

/// Draw blocks in the order given; later blocks cover earlier ones.
pub fn draw_isometric(
    surface: &mut Surface,
    blocks: &[BlockPlacement],
    palette: &Palette,
    cell: u32,
    vertical_divisor: f64,
) {
    let output_size = surface.width();
    for block in blocks {
        if let Some(entry) = palette.get(block.entry) {
            let (x, y) = screen_position(block, cell, output_size, vertical_divisor);
            draw_iso_block(surface, x, y, f64::from(cell), entry);
        }
    }
}

/// Draw one isometric cube anchored at `(x, y)`.
pub fn draw_iso_block(surface: &mut Surface, x: f64, y: f64, size: f64, entry: &PaletteEntry) {
    let half = size / 2.0;

    let top = [
        (x, y - half),
        (x + half, y - size),
        (x + size, y - half),
        (x + half, y),
    ];
    let left = [(x, y - half), (x + half, y), (x + half, y + half), (x, y)];
    let right = [
        (x + half, y),
        (x + size, y - half),
        (x + size, y),
        (x + half, y + half),
    ];

    surface.fill_polygon(&top, entry.light);
    surface.fill_polygon(&left, entry.base);
    surface.fill_polygon(&right, entry.dark);
}
