//! Clean command implementation.
//!
//! Deletes the images a project writes, or whole output directories with
//! `--all`. Shapes are never drawn, so a project that fails to build can
//! still be cleaned.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, TileError};
use crate::output::{display_path, plural, Printer};
use crate::project::{BuildOptions, Project, PROJECT_FILENAME};
use crate::store;

use super::build::project_root;

/// Delete the images a project file produces
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Project file
    #[arg(default_value = PROJECT_FILENAME)]
    pub project: PathBuf,

    /// Remove each canvas's output directory and everything in it
    #[arg(long)]
    pub all: bool,
}

pub fn run(args: CleanArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.project)?;
    let prepared = project.prepare(&BuildOptions::new(project_root(&args.project)))?;
    let mut removed = 0;

    for output in prepared.outputs() {
        let canvas = prepared.studio.canvas(&output.canvas)?;
        let directory = display_path(canvas.output().directory());

        if args.all {
            if store::delete_directory(canvas)? {
                printer.status("Removed", &directory);
                removed += 1;
            } else {
                printer.warning("Skipped", &format!("{} does not exist", directory));
            }
            continue;
        }

        match output.copies {
            Some(copies) => {
                for path in store::delete_copies(canvas, copies)? {
                    printer.status("Removed", &display_path(&path));
                    removed += 1;
                }
            }
            None => match store::delete_image(canvas) {
                Ok(path) => {
                    printer.status("Removed", &display_path(&path));
                    removed += 1;
                }
                Err(TileError::NotFound { path }) => {
                    printer.warning("Skipped", &format!("{} does not exist", display_path(&path)));
                }
                Err(e) => return Err(e),
            },
        }
    }

    let noun = if args.all {
        plural(removed, "directory", "directories")
    } else {
        plural(removed, "image", "images")
    };
    printer.status("Finished", &format!("removed {}", noun));
    Ok(())
}
