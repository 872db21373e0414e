//! Project files: canvases and shapes described in YAML.
//!
//! # Example
//!
//! ```ignore
//! use tilegen::project::{BuildOptions, Project};
//!
//! let project = Project::load(Path::new("tilegen.yaml"))?;
//! let rendered = project.render(&BuildOptions::new("."))?;
//! for path in rendered.save()? {
//!     println!("{}", path.display());
//! }
//! ```

mod manifest;

use std::path::{Path, PathBuf};

use crate::error::{Result, TileError};
use crate::store;
use crate::studio::Studio;
use crate::types::Canvas;

pub use manifest::{CanvasSpec, ColourValue, Project, RepeatSpec, ShapeSpec};

/// The name of the project file.
pub const PROJECT_FILENAME: &str = "tilegen.yaml";

/// Starter project written by `tilegen init`.
pub const PROJECT_TEMPLATE: &str = r#"# tilegen project
output: dist

canvases:
  - name: meadow
    width: 16
    height: 16
    background: [34, 139, 34]
    output_file: meadow.png
    shapes:
      - name: flowers
        coords: [[1, 1], [2, 2]]
        colour: [255, 255, 0]
        repeat:
          count_x: 4
          count_y: 4
          spacing: [4, 4]
"#;

/// Where and how a project is rendered.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory relative paths in the project resolve against.
    pub root: PathBuf,

    /// Overrides the project's `output`.
    pub output: Option<PathBuf>,

    /// Overrides every scale in the project.
    pub scale: Option<u32>,
}

impl BuildOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: None,
            scale: None,
        }
    }
}

/// How one rendered canvas is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasOutput {
    pub canvas: String,
    pub copies: Option<u32>,
    pub scale: u32,
}

/// Canvases built from a project, with how each one is saved.
#[derive(Debug)]
pub struct RenderedProject {
    pub studio: Studio,
    outputs: Vec<CanvasOutput>,
}

impl Project {
    /// Build every canvas with its background and output target, without
    /// drawing any shapes.
    pub fn prepare(&self, options: &BuildOptions) -> Result<RenderedProject> {
        let mut studio = Studio::new();
        let mut outputs = Vec::with_capacity(self.canvases.len());
        let default_dir = options.output.clone().unwrap_or_else(|| self.effective_output());

        for spec in &self.canvases {
            let directory = resolve(
                &options.root,
                spec.output_directory.as_deref().unwrap_or(&default_dir),
            );
            let canvas = Canvas::new(spec.width, spec.height)
                .map_err(|e| in_canvas(&spec.name, e))?
                .with_background(spec.background.as_ref())
                .with_line_colour(spec.line.as_ref())
                .with_output(&spec.effective_output_file(), directory);
            studio.add_canvas(spec.name.clone(), canvas);

            outputs.push(CanvasOutput {
                canvas: spec.name.clone(),
                copies: spec.copies,
                scale: options
                    .scale
                    .or(spec.scale)
                    .unwrap_or_else(|| self.effective_scale()),
            });
        }

        Ok(RenderedProject { studio, outputs })
    }

    /// Build every canvas and draw its shapes in order.
    ///
    /// Shapes are registered as `<canvas>/<shape>`. A shape with a `repeat`
    /// section is tiled first and its staged points drawn afterwards.
    pub fn render(&self, options: &BuildOptions) -> Result<RenderedProject> {
        let mut rendered = self.prepare(options)?;

        for spec in &self.canvases {
            for (index, shape) in spec.shapes.iter().enumerate() {
                let name = format!("{}/{}", spec.name, shape.effective_name(index));
                render_shape(&mut rendered.studio, &spec.name, &name, shape)
                    .map_err(|e| in_canvas(&name, e))?;
            }
        }

        Ok(rendered)
    }
}

fn render_shape(studio: &mut Studio, canvas: &str, name: &str, spec: &ShapeSpec) -> Result<()> {
    studio
        .add_shape(name, canvas, spec.coords.clone(), spec.colour.as_ref())?
        .set_rounded_edges(spec.rounded_edges);

    if let Some(repeat) = &spec.repeat {
        studio.repeat_shape(name, &repeat.options(), &mut repeat.rng())?;
    }
    studio.draw_shape(name, spec.radius)
}

impl RenderedProject {
    pub fn outputs(&self) -> &[CanvasOutput] {
        &self.outputs
    }

    /// Save every canvas. Returns the written paths in project order.
    pub fn save(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for output in &self.outputs {
            let canvas = self.studio.canvas(&output.canvas)?;
            written.extend(store::save(canvas, output.copies, output.scale)?);
        }
        Ok(written)
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn in_canvas(name: &str, error: TileError) -> TileError {
    TileError::Build {
        message: format!("{}: {}", name, error),
        help: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::preview;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_template_renders() {
        let project = Project::parse(PROJECT_TEMPLATE).unwrap();
        let rendered = project.render(&BuildOptions::new("/project")).unwrap();

        let canvas = rendered.studio.canvas("meadow").unwrap();
        assert_eq!(canvas.output().directory(), Path::new("/project/dist"));
        insta::assert_snapshot!(preview(canvas), @r"
        ................
        .#...#...#...#..
        ..#...#...#...#.
        ................
        ................
        .#...#...#...#..
        ..#...#...#...#.
        ................
        ................
        .#...#...#...#..
        ..#...#...#...#.
        ................
        ................
        .#...#...#...#..
        ..#...#...#...#.
        ................
        ");
    }

    #[test]
    fn test_render_layers_shapes_in_order() {
        let yaml = r#"
canvases:
  - name: a
    width: 4
    height: 1
    shapes:
      - coords: [[0, 0], [1, 0]]
        colour: [255, 0, 0]
      - coords: [[1, 0]]
        colour: [0, 0, 255]
"#;
        let project = Project::parse(yaml).unwrap();
        let rendered = project.render(&BuildOptions::new(".")).unwrap();
        let canvas = rendered.studio.canvas("a").unwrap();

        assert_eq!(canvas.get(0, 0), Some(Colour::rgb(255, 0, 0)));
        assert_eq!(canvas.get(1, 0), Some(Colour::rgb(0, 0, 255)));
        assert_eq!(
            rendered.studio.shape_names().collect::<Vec<_>>(),
            vec!["a/shape-1", "a/shape-2"]
        );
    }

    #[test]
    fn test_render_reports_failing_shape() {
        let yaml = r#"
canvases:
  - name: a
    width: 2
    height: 2
    shapes:
      - name: stray
        coords: [[5, 5]]
        colour: [255, 0, 0]
"#;
        let project = Project::parse(yaml).unwrap();
        let err = project.render(&BuildOptions::new(".")).unwrap_err();

        assert!(err.to_string().contains("a/stray"));
    }

    #[test]
    fn test_render_huge_radius() {
        let yaml = r#"
canvases:
  - name: a
    width: 3
    height: 3
    shapes:
      - coords: [[1, 1]]
        colour: [255, 0, 0]
        rounded_edges: true
        radius: 4000000000
"#;
        let project = Project::parse(yaml).unwrap();
        let rendered = project.render(&BuildOptions::new(".")).unwrap();

        assert_eq!(preview(rendered.studio.canvas("a").unwrap()), "###\n###\n###");
    }

    #[test]
    fn test_prepare_skips_shapes() {
        let yaml = r#"
canvases:
  - name: a
    width: 2
    height: 2
    background: [0, 0, 255]
    shapes:
      - name: stray
        coords: [[5, 5]]
        colour: [255, 0, 0]
"#;
        let project = Project::parse(yaml).unwrap();
        let prepared = project.prepare(&BuildOptions::new("/root")).unwrap();

        let canvas = prepared.studio.canvas("a").unwrap();
        assert_eq!(canvas.output().path(), Path::new("/root/dist/a.png"));
        assert_eq!(canvas.get(0, 0), Some(Colour::rgb(0, 0, 255)));
        assert_eq!(prepared.studio.shape_names().count(), 0);
    }

    #[test]
    fn test_scale_and_output_overrides() {
        let yaml = r#"
output: out
scale: 2
canvases:
  - { name: a, width: 1, height: 1 }
  - { name: b, width: 1, height: 1, scale: 3, output_directory: /abs/b }
"#;
        let project = Project::parse(yaml).unwrap();

        let rendered = project.render(&BuildOptions::new("/root")).unwrap();
        let scales: Vec<u32> = rendered.outputs().iter().map(|o| o.scale).collect();
        assert_eq!(scales, vec![2, 3]);
        assert_eq!(
            rendered.studio.canvas("a").unwrap().output().directory(),
            Path::new("/root/out")
        );
        assert_eq!(
            rendered.studio.canvas("b").unwrap().output().directory(),
            Path::new("/abs/b")
        );

        let options = BuildOptions {
            output: Some(PathBuf::from("elsewhere")),
            scale: Some(5),
            ..BuildOptions::new("/root")
        };
        let rendered = project.render(&options).unwrap();
        assert!(rendered.outputs().iter().all(|o| o.scale == 5));
        assert_eq!(
            rendered.studio.canvas("a").unwrap().output().directory(),
            Path::new("/root/elsewhere")
        );
    }

    #[test]
    fn test_save_writes_copies() {
        let dir = tempdir().unwrap();
        let yaml = r#"
canvases:
  - name: tile
    width: 2
    height: 2
    copies: 2
    output_file: tile.gif
"#;
        let project = Project::parse(yaml).unwrap();
        let rendered = project.render(&BuildOptions::new(dir.path())).unwrap();

        let written = rendered.save().unwrap();

        let dist = dir.path().join("dist");
        assert_eq!(written, vec![dist.join("1_tile.gif"), dist.join("2_tile.gif")]);
        assert!(written.iter().all(|p| p.exists()));
    }
}
