//! Procedural layout generation.
//!
//! A seeded random stream drives a per-family rule table over a fixed logical
//! grid. The output is a `Layout`: palette positions per cell or per stacked
//! isometric block, with no notion of pixels yet.

mod grid;
mod rng;
mod rules;

pub use grid::{synthesize, BlockPlacement, CellGrid, Layout};
pub use rng::SeededRandom;
pub use rules::{Band, BandFill, ColumnHeights, FamilyRules, FlatLayout, FlatRule, IsoRule, Ring};
