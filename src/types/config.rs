//! Generator configuration.
//!
//! A `GeneratorConfig` describes one image: output size, visual family,
//! palette, projection, a descriptive subject and an optional seed. Configs
//! can be built in code, parsed from YAML or JSON, or assembled from CLI flags.

use std::fmt;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};

use super::palette::{self, Palette};

/// Output sizes accepted by [`GeneratorConfig::validate`].
pub const ALLOWED_SIZES: [u32; 3] = [256, 512, 1024];

/// High-level aesthetic ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VisualFamily {
    /// Block/voxel landscape.
    #[serde(alias = "minecraft")]
    #[value(alias = "minecraft")]
    Terrain,
    /// Organic, radially arranged "type colour" creature.
    #[serde(alias = "pokemon")]
    #[value(alias = "pokemon")]
    Creature,
}

impl VisualFamily {
    pub const ALL: [VisualFamily; 2] = [VisualFamily::Terrain, VisualFamily::Creature];

    pub fn name(self) -> &'static str {
        match self {
            VisualFamily::Terrain => "terrain",
            VisualFamily::Creature => "creature",
        }
    }

    /// Palette used when a config names none.
    pub fn default_palette(self) -> &'static str {
        match self {
            VisualFamily::Terrain => "classic",
            VisualFamily::Creature => "fire",
        }
    }
}

impl fmt::Display for VisualFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Orthogonal top-down grid.
    Flat,
    /// Pseudo-3D stacked cubes.
    Isometric,
}

impl Projection {
    pub fn name(self) -> &'static str {
        match self {
            Projection::Flat => "flat",
            Projection::Isometric => "isometric",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Width and height of the square output, in pixels.
    pub size: u32,

    pub family: VisualFamily,

    /// Palette name; must belong to `family`. Empty means the family default.
    pub palette: String,

    pub projection: Projection,

    /// Descriptive label. Carried into filenames and metadata only.
    pub subject: String,

    /// Explicit seed. `None` means a clock-derived seed at generation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 512,
            family: VisualFamily::Terrain,
            palette: String::new(),
            projection: Projection::Flat,
            subject: "castle".to_string(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a config for a family, using its default palette.
    pub fn new(family: VisualFamily, projection: Projection) -> Self {
        Self {
            family,
            projection,
            palette: family.default_palette().to_string(),
            ..Self::default()
        }
    }

    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = palette.into();
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a config from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ForgeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::parse_json(&content),
            _ => Self::parse_yaml(&content),
        }
    }

    /// Parse a config from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ForgeError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check the YAML syntax and field names".to_string()),
        })
    }

    /// Parse a config from a JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ForgeError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check the JSON syntax and field names".to_string()),
        })
    }

    /// The palette name with the family default filled in.
    pub fn palette_name(&self) -> &str {
        if self.palette.is_empty() {
            self.family.default_palette()
        } else {
            &self.palette
        }
    }

    /// Resolve the palette for this config's family.
    pub fn resolve_palette(&self) -> Result<&'static Palette> {
        palette::resolve(self.family, self.palette_name())
    }

    /// Check the config before any drawing happens.
    pub fn validate(&self) -> Result<&'static Palette> {
        if !ALLOWED_SIZES.contains(&self.size) {
            return Err(ForgeError::InvalidConfig {
                message: format!("Unsupported output size: {}", self.size),
                help: Some(format!(
                    "Use one of: {}",
                    ALLOWED_SIZES.map(|s| s.to_string()).join(", ")
                )),
            });
        }

        self.resolve_palette()
    }

    /// The explicit seed, or one derived from the system clock.
    pub fn resolve_seed(&self) -> i64 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// A copy of this config whose seed and palette are always filled in.
    pub fn with_resolved_seed(&self) -> Self {
        Self {
            palette: self.palette_name().to_string(),
            seed: Some(self.resolve_seed()),
            ..self.clone()
        }
    }
}

fn clock_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
