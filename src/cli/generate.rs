//! Generate command implementation.
//!
//! Builds a config from an optional file plus flags, renders it and writes
//! the PNG (and optionally token metadata) to the output directory.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Args;

use crate::error::{ForgeError, Result};
use crate::generator::Generator;
use crate::output::{display_path, format_bytes, Printer};
use crate::render::write_png;
use crate::types::{download_filename, GeneratorConfig, NftMetadata, Projection, VisualFamily};

/// Generate a block-art PNG
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Config file (YAML or JSON) to start from; flags override its values
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Visual family
    #[arg(long, value_enum)]
    pub family: Option<VisualFamily>,

    /// Palette name (must belong to the family)
    #[arg(long)]
    pub palette: Option<String>,

    /// Projection
    #[arg(long, value_enum)]
    pub projection: Option<Projection>,

    /// Output width and height in pixels (256, 512 or 1024)
    #[arg(long)]
    pub size: Option<u32>,

    /// Subject label used in filenames and metadata
    #[arg(long)]
    pub subject: Option<String>,

    /// Seed for reproducible output (default: derived from the clock)
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Also write token metadata JSON next to the image
    #[arg(long)]
    pub metadata: bool,

    /// Token name for metadata (default: the subject)
    #[arg(long)]
    pub name: Option<String>,

    /// Token description for metadata (default: generated from the config)
    #[arg(long, default_value = "")]
    pub description: String,

    /// Image URL recorded in metadata (default: the image filename)
    #[arg(long)]
    pub image_url: Option<String>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = build_config(&args)?;

    printer.status(
        "Generating",
        &format!(
            "{}/{} {} {}x{}",
            config.family,
            config.palette_name(),
            config.projection,
            config.size,
            config.size
        ),
    );

    let artwork = Generator::new().generate(&config)?;

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| ForgeError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let filename = download_filename(&artwork.config, now_millis());
    let image_path = args.output.join(&filename);
    write_png(&artwork.png, &image_path)?;

    let seed = artwork.config.seed.unwrap_or_default();
    printer.status(
        "Wrote",
        &format!(
            "{} {}",
            display_path(&image_path),
            printer.dim(&format!("({}, seed {})", format_bytes(artwork.png.len()), seed))
        ),
    );

    if args.metadata {
        let name = args.name.as_deref().unwrap_or(&artwork.config.subject);
        let image_url = args.image_url.as_deref().unwrap_or(&filename);
        let metadata =
            NftMetadata::from_config(&artwork.config, name, &args.description, image_url);

        let metadata_path = image_path.with_extension("json");
        fs::write(&metadata_path, metadata.to_json()).map_err(|e| ForgeError::Io {
            path: metadata_path.clone(),
            message: format!("Failed to write metadata: {}", e),
        })?;
        printer.status("Wrote", &display_path(&metadata_path));
    }

    Ok(())
}

/// Merge the optional config file with command-line overrides.
pub fn build_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(family) = args.family {
        // A palette from the file belongs to the old family.
        if family != config.family && args.palette.is_none() {
            config.palette.clear();
        }
        config.family = family;
    }
    if let Some(palette) = &args.palette {
        config.palette = palette.clone();
    }
    if let Some(projection) = args.projection {
        config.projection = projection;
    }
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(subject) = &args.subject {
        config.subject = subject.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    Ok(config)
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(&GenerateArgs::default()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_build_config_flags_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("art.yaml");
        fs::write(&path, "size: 256\npalette: nether\nsubject: fortress\nseed: 5\n").unwrap();

        let args = GenerateArgs {
            config: Some(path),
            projection: Some(Projection::Isometric),
            seed: Some(-9),
            ..GenerateArgs::default()
        };
        let config = build_config(&args).unwrap();

        assert_eq!(config.size, 256);
        assert_eq!(config.palette, "nether");
        assert_eq!(config.subject, "fortress");
        assert_eq!(config.projection, Projection::Isometric);
        assert_eq!(config.seed, Some(-9));
    }

    #[test]
    fn test_switching_family_resets_palette() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("art.json");
        fs::write(&path, r#"{"family": "terrain", "palette": "end"}"#).unwrap();

        let args = GenerateArgs {
            config: Some(path),
            family: Some(VisualFamily::Creature),
            ..GenerateArgs::default()
        };
        let config = build_config(&args).unwrap();

        assert_eq!(config.family, VisualFamily::Creature);
        assert_eq!(config.palette_name(), "fire");
    }

    #[test]
    fn test_build_config_missing_file() {
        let args = GenerateArgs {
            config: Some(PathBuf::from("/nonexistent/blockforge.yaml")),
            ..GenerateArgs::default()
        };
        assert!(matches!(build_config(&args), Err(ForgeError::Io { .. })));
    }

    #[test]
    fn test_run_writes_image_and_metadata() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");
        let args = GenerateArgs {
            family: Some(VisualFamily::Creature),
            palette: Some("grass".to_string()),
            size: Some(256),
            subject: Some("Leaf Lizard".to_string()),
            seed: Some(11),
            output: output.clone(),
            metadata: true,
            ..GenerateArgs::default()
        };

        run(args, &Printer::new()).unwrap();

        let files: Vec<PathBuf> = fs::read_dir(&output)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        let png = files
            .iter()
            .find(|p| p.extension().is_some_and(|e| e == "png"))
            .unwrap();
        let json = png.with_extension("json");

        let name = png.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("creature-leaf-lizard-"));

        let img = image::open(png).unwrap();
        assert_eq!(img.width(), 256);

        let metadata: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(metadata["name"], "Leaf Lizard");
        assert_eq!(metadata["image"], name.as_str());
    }

    #[test]
    fn test_run_rejects_bad_palette_before_writing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");
        let args = GenerateArgs {
            palette: Some("water".to_string()),
            output: output.clone(),
            ..GenerateArgs::default()
        };

        assert!(matches!(
            run(args, &Printer::new()),
            Err(ForgeError::InvalidConfig { .. })
        ));
        assert!(!output.exists());
    }
}
