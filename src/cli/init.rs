//! Init command implementation.
//!
//! Writes a starter `tilegen.yaml`.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, TileError};
use crate::output::{display_path, Printer};
use crate::project::{PROJECT_FILENAME, PROJECT_TEMPLATE};

/// Create a starter tilegen.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the project in (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing tilegen.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let project_path = args.path.join(PROJECT_FILENAME);

    if project_path.exists() && !args.force {
        return Err(TileError::Build {
            message: format!("{} already exists", PROJECT_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| TileError::Io {
            path: args.path.clone(),
            message: format!("Failed to create project directory: {}", e),
        })?;
    }

    fs::write(&project_path, PROJECT_TEMPLATE).map_err(|e| TileError::Io {
        path: project_path.clone(),
        message: format!("Failed to write project: {}", e),
    })?;

    printer.status("Created", &display_path(&project_path));
    Ok(())
}
