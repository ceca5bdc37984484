//! Core domain types for blockforge.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Palette` - Static, per-family colour tables with light/base/dark shades
//! - `GeneratorConfig` - What to draw
//! - `NftMetadata` - Downstream description of a generated image

mod colour;
mod config;
mod metadata;
pub mod palette;

pub use colour::Colour;
pub use config::{GeneratorConfig, Projection, VisualFamily, ALLOWED_SIZES};
pub use metadata::{
    download_filename, slug, upload_filename, Attribute, AttributeValue, NftMetadata,
    GENERATOR_NAME,
};
pub use palette::{Palette, PaletteEntry};
