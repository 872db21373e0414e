use clap::Parser;
use miette::Result;
use tilegen::cli::{Cli, Commands};
use tilegen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => tilegen::cli::build::run(args, &printer)?,
        Commands::Clean(args) => tilegen::cli::clean::run(args, &printer)?,
        Commands::Init(args) => tilegen::cli::init::run(args, &printer)?,
        Commands::Shell(args) => tilegen::cli::shell::run(args, &printer)?,
        Commands::Completions(args) => tilegen::cli::completions::run(args)?,
    }

    Ok(())
}
