use blockforge::cli::{Cli, Commands};
use blockforge::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => blockforge::cli::generate::run(args, &printer)?,
        Commands::Palettes(args) => blockforge::cli::palettes::run(args, &printer)?,
        Commands::Check(args) => blockforge::cli::check::run(args, &printer)?,
        Commands::Completions(args) => blockforge::cli::completions::run(args)?,
    }

    Ok(())
}
