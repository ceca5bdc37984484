use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::types::GeneratorConfig;

/// Validate config files without rendering
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Config files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Stops at the first invalid file.
pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    for file in &args.files {
        let summary = check_file(file)?;
        printer.status("Checked", &format!("{} {}", display_path(file), printer.dim(&summary)));
    }
    Ok(())
}

/// Load and validate one config, returning a one-line summary.
pub fn check_file(path: &Path) -> Result<String> {
    let config = GeneratorConfig::load(path)?;
    let palette = config.validate()?;

    let seed = match config.seed {
        Some(seed) => format!("seed {}", seed),
        None => "clock seed".to_string(),
    };

    Ok(format!(
        "({}/{} {} {}x{}, {} entries, {})",
        config.family,
        palette.name,
        config.projection,
        config.size,
        config.size,
        palette.len(),
        seed
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForgeError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_check_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ok.yaml");
        fs::write(&path, "family: creature\npalette: psychic\nsize: 1024\nseed: 3\n").unwrap();

        let summary = check_file(&path).unwrap();
        assert_eq!(summary, "(creature/psychic flat 1024x1024, 5 entries, seed 3)");
    }

    #[test]
    fn test_check_default_palette() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ok.yaml");
        fs::write(&path, "projection: isometric\n").unwrap();

        let summary = check_file(&path).unwrap();
        assert_eq!(summary, "(terrain/classic isometric 512x512, 8 entries, clock seed)");
    }

    #[test]
    fn test_check_cross_family_palette() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "family: terrain\npalette: electric\n").unwrap();

        assert!(matches!(
            check_file(&path),
            Err(ForgeError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_check_syntax_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ size: ").unwrap();

        assert!(matches!(check_file(&path), Err(ForgeError::Parse { .. })));
    }
}
