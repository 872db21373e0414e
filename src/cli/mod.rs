pub mod build;
pub mod clean;
pub mod completions;
pub mod init;
pub mod shell;

use clap::{Parser, Subcommand};

/// tilegen - Pixel-art tile pattern generator
#[derive(Parser, Debug)]
#[command(name = "tilegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render and save every canvas in a project file
    Build(build::BuildArgs),

    /// Delete the images a project file produces
    Clean(clean::CleanArgs),

    /// Create a starter tilegen.yaml
    Init(init::InitArgs),

    /// Create, edit and save canvases interactively
    Shell(shell::ShellArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
