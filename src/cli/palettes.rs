use clap::Args;

use crate::error::{ForgeError, Result};
use crate::output::Printer;
use crate::types::{palette, Palette, VisualFamily};

/// List built-in palettes
#[derive(Args, Debug)]
pub struct PalettesArgs {
    /// Only list palettes of this family
    #[arg(long, value_enum)]
    pub family: Option<VisualFamily>,

    /// Print entries with their shades as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PalettesArgs, printer: &Printer) -> Result<()> {
    let selected = selected_palettes(args.family);

    if args.json {
        let json = serde_json::to_string_pretty(&selected).map_err(|e| ForgeError::Parse {
            message: format!("Failed to serialize palettes: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for p in selected {
        let entries: Vec<String> = p
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}:{} {}", i, e.name, printer.dim(&e.base.to_string())))
            .collect();
        printer.info(&format!("{}/{}", p.family, p.name), &entries.join(", "));
    }

    Ok(())
}

fn selected_palettes(family: Option<VisualFamily>) -> Vec<&'static Palette> {
    let families: &[VisualFamily] = match &family {
        Some(f) => std::slice::from_ref(f),
        None => &VisualFamily::ALL,
    };

    families
        .iter()
        .flat_map(|&f| palette::palettes(f).iter())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_palettes_listed() {
        let names: Vec<&str> = selected_palettes(None).iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["classic", "nether", "end", "fire", "water", "grass", "electric", "psychic"]
        );
    }

    #[test]
    fn test_family_filter() {
        let names: Vec<&str> = selected_palettes(Some(VisualFamily::Terrain))
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["classic", "nether", "end"]);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(selected_palettes(Some(VisualFamily::Creature))).unwrap();
        assert_eq!(json[0]["name"], "fire");
        assert_eq!(json[0]["family"], "creature");
        assert_eq!(json[0]["entries"][0]["name"], "flame_red");
        assert_eq!(json[0]["entries"][0]["base"], "#FF4500");
        assert_eq!(json[0]["entries"][0]["light"], "#FF6B33");
    }
}
