//! Token metadata and filenames for downstream collaborators.
//!
//! The generator itself only produces PNG bytes. Uploaders and minting tools
//! need a JSON document describing the artwork and stable filenames; both are
//! derived from the resolved config here so nothing is lost in between.

use serde::Serialize;

use super::{GeneratorConfig, VisualFamily};

/// Value recorded by the `Generator` attribute.
pub const GENERATOR_NAME: &str = "Block Forge";

/// A single `{trait_type, value}` attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: AttributeValue,
}

/// Attribute values are either text or numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(i64),
}

impl Attribute {
    pub fn text(trait_type: &str, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Text(value.into()),
        }
    }

    pub fn number(trait_type: &str, value: i64) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Number(value),
        }
    }
}

/// ERC-721 style token metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<Attribute>,
}

impl NftMetadata {
    /// Build metadata for an artwork.
    ///
    /// An empty `description` is replaced by one generated from the config.
    pub fn from_config(
        config: &GeneratorConfig,
        name: &str,
        description: &str,
        image_url: &str,
    ) -> Self {
        let description = if description.trim().is_empty() {
            default_description(config)
        } else {
            description.to_string()
        };

        let mut attributes = vec![
            Attribute::text("Subject", config.subject.clone()),
            Attribute::text("Family", config.family.name()),
            Attribute::text("Palette", config.palette_name()),
            Attribute::text("Style", config.projection.name()),
            Attribute::number("Size", i64::from(config.size)),
        ];
        if let Some(seed) = config.seed {
            attributes.push(Attribute::number("Seed", seed));
        }
        attributes.push(Attribute::text("Generator", GENERATOR_NAME));

        Self {
            name: name.to_string(),
            description,
            image: image_url.to_string(),
            attributes,
        }
    }

    /// Pretty-printed JSON, as stored next to the image.
    pub fn to_json(&self) -> String {
        // Serializing plain strings and integers cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn default_description(config: &GeneratorConfig) -> String {
    let flavour = match config.family {
        VisualFamily::Terrain => "terrain",
        VisualFamily::Creature => "creature",
    };
    format!(
        "A {}-style {} generated with {} palette in {} style.",
        flavour,
        config.subject,
        config.palette_name(),
        config.projection
    )
}

/// Lowercase a label and join its words with `-`.
///
/// Surrounding whitespace is dropped rather than becoming a leading or
/// trailing `-`.
pub fn slug(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Filename offered when downloading a freshly generated image.
///
/// The subject is slugged so the name never contains spaces.
pub fn download_filename(config: &GeneratorConfig, timestamp_ms: u128) -> String {
    format!("{}-{}-{}.png", config.family, slug(&config.subject), timestamp_ms)
}

/// Filename used when uploading an image under its token name.
pub fn upload_filename(name: &str) -> String {
    format!("{}.png", slug(name))
}
