//! blockforge - Procedural block-art image generator
//!
//! A library for turning a small configuration (size, visual family,
//! palette, projection, seed) into a deterministic pixel-art PNG, plus the
//! metadata and filenames downstream upload and minting tools need.

pub mod cli;
pub mod error;
pub mod generate;
pub mod generator;
pub mod output;
pub mod render;
pub mod types;

pub use error::{ForgeError, Result};
pub use generate::{synthesize, BlockPlacement, CellGrid, FamilyRules, Layout, SeededRandom};
pub use generator::{layout, render_surface, Artwork, Generator};
pub use render::{write_png, Png, Surface, SurfaceEncoder};
pub use types::{
    download_filename, upload_filename, Attribute, AttributeValue, Colour, GeneratorConfig,
    NftMetadata, Palette, PaletteEntry, Projection, VisualFamily, ALLOWED_SIZES,
};
