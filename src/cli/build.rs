//! Build command implementation.
//!
//! Renders every canvas of a project file and writes the images.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::project::{BuildOptions, Project, PROJECT_FILENAME};
use crate::render::preview;

/// Render and save every canvas in a project file
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project file
    #[arg(default_value = PROJECT_FILENAME)]
    pub project: PathBuf,

    /// Output directory (overrides the project's `output`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Print a text preview of each canvas to stdout
    #[arg(long)]
    pub preview: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.project)?;
    let options = BuildOptions {
        root: project_root(&args.project),
        output: args.output.clone(),
        scale: args.scale,
    };

    printer.status("Rendering", &display_path(&args.project));
    let rendered = project.render(&options)?;

    for (name, canvas) in rendered.studio.canvases() {
        let (width, height) = canvas.size();
        let size = printer.dim(&format!("({}x{})", width, height));
        printer.info("Rendered", &format!("{} {}", name, size));
        if args.preview {
            println!("{}\n{}\n", name, preview(canvas));
        }
    }

    let written = rendered.save()?;
    for path in &written {
        printer.status("Saved", &printer.cyan(&display_path(path)));
    }

    printer.status(
        "Finished",
        &format!(
            "{} from {}",
            plural(written.len(), "image", "images"),
            plural(rendered.outputs().len(), "canvas", "canvases")
        ),
    );

    Ok(())
}

/// Directory the project's relative paths resolve against.
pub(crate) fn project_root(project: &Path) -> PathBuf {
    match project.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::PROJECT_TEMPLATE;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_build_template_project() {
        let dir = tempdir().unwrap();
        let project = dir.path().join(PROJECT_FILENAME);
        fs::write(&project, PROJECT_TEMPLATE).unwrap();

        let args = BuildArgs {
            project,
            output: None,
            scale: Some(2),
            preview: false,
        };
        run(args, &Printer::plain()).unwrap();

        let img = image::open(dir.path().join("dist").join("meadow.png")).unwrap();
        assert_eq!((img.width(), img.height()), (32, 32));
    }

    #[test]
    fn test_build_missing_project() {
        let dir = tempdir().unwrap();
        let args = BuildArgs {
            project: dir.path().join("missing.yaml"),
            output: None,
            scale: None,
            preview: false,
        };
        assert!(run(args, &Printer::plain()).is_err());
    }

    #[test]
    fn test_project_root() {
        assert_eq!(project_root(Path::new("tilegen.yaml")), PathBuf::from("."));
        assert_eq!(project_root(Path::new("art/tilegen.yaml")), PathBuf::from("art"));
    }
}
