pub mod check;
pub mod completions;
pub mod generate;
pub mod palettes;

use clap::{Parser, Subcommand};

/// blockforge - Procedural block-art image generator
#[derive(Parser, Debug)]
#[command(name = "blockforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a block-art PNG (and optionally its token metadata)
    Generate(generate::GenerateArgs),

    /// List built-in palettes
    Palettes(palettes::PalettesArgs),

    /// Validate config files without rendering
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
