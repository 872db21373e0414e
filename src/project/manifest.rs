//! Project file (tilegen.yaml) parsing.
//!
//! A project lists canvases, each with the shapes drawn onto it and an
//! optional tiling pass per shape.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TileError};
use crate::types::{Colour, IntoColour, RepeatOptions, DEFAULT_RADIUS};

/// Project loaded from tilegen.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Output directory for canvases that do not name their own.
    pub output: Option<PathBuf>,

    /// Default scale factor for saved images.
    pub scale: Option<u32>,

    pub canvases: Vec<CanvasSpec>,
}

/// A canvas and the shapes drawn onto it, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub name: String,

    pub width: u32,

    pub height: u32,

    #[serde(default)]
    pub background: Option<ColourValue>,

    #[serde(default)]
    pub line: Option<ColourValue>,

    /// Defaults to `<name>.png`.
    #[serde(default)]
    pub output_file: Option<String>,

    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Number of numbered copies to save. Unset saves a single file.
    #[serde(default)]
    pub copies: Option<u32>,

    #[serde(default)]
    pub scale: Option<u32>,

    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeSpec {
    /// Defaults to `shape-<index>`.
    #[serde(default)]
    pub name: Option<String>,

    pub coords: Vec<(i64, i64)>,

    #[serde(default)]
    pub colour: Option<ColourValue>,

    #[serde(default)]
    pub rounded_edges: bool,

    #[serde(default = "default_radius")]
    pub radius: i64,

    #[serde(default)]
    pub repeat: Option<RepeatSpec>,
}

/// Tiling pass parameters, with a seed for reproducible random cuts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatSpec {
    pub count_x: u32,
    pub count_y: u32,
    pub spacing: (i64, i64),
    pub start: (i64, i64),
    pub randomize: bool,
    pub cut_chance: f64,
    pub cut_colour: Option<ColourValue>,
    pub seed: Option<u64>,
}

impl Default for RepeatSpec {
    fn default() -> Self {
        let options = RepeatOptions::default();
        Self {
            count_x: options.count_x,
            count_y: options.count_y,
            spacing: options.spacing,
            start: options.start,
            randomize: options.randomize,
            cut_chance: options.cut_chance,
            cut_colour: None,
            seed: None,
        }
    }
}

impl RepeatSpec {
    pub fn options(&self) -> RepeatOptions {
        RepeatOptions {
            count_x: self.count_x,
            count_y: self.count_y,
            spacing: self.spacing,
            start: self.start,
            randomize: self.randomize,
            cut_chance: self.cut_chance,
            cut_colour: self.cut_colour.as_ref().into_colour(),
        }
    }

    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

/// A colour as written in YAML: `[r, g, b]`, `[r, g, b, a]` or `"#RRGGBB"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColourValue {
    Channels(Vec<i64>),
    Hex(String),
}

impl IntoColour for &ColourValue {
    fn into_colour(self) -> Option<Colour> {
        match self {
            ColourValue::Channels(channels) => Colour::from_channels(channels),
            ColourValue::Hex(hex) => Colour::from_hex(hex).ok(),
        }
    }
}

impl IntoColour for Option<&ColourValue> {
    fn into_colour(self) -> Option<Colour> {
        self.and_then(|value| value.into_colour())
    }
}

fn default_radius() -> i64 {
    DEFAULT_RADIUS
}

impl Project {
    /// Load a project from a tilegen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TileError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read project: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a project from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let project: Self = serde_yaml::from_str(content).map_err(|e| TileError::Parse {
            message: format!("Invalid project: {}", e),
            help: Some("Check tilegen.yaml syntax".to_string()),
        })?;
        project.check()?;
        Ok(project)
    }

    /// Output directory, defaulting to `dist`.
    pub fn effective_output(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from("dist"))
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1)
    }

    fn check(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for canvas in &self.canvases {
            if !seen.insert(canvas.name.as_str()) {
                return Err(TileError::Build {
                    message: format!("Canvas '{}' is defined twice", canvas.name),
                    help: Some("Give every canvas a unique name".to_string()),
                });
            }
        }
        Ok(())
    }
}

impl CanvasSpec {
    pub fn effective_output_file(&self) -> String {
        self.output_file
            .clone()
            .unwrap_or_else(|| format!("{}.png", self.name))
    }
}

impl ShapeSpec {
    pub fn effective_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("shape-{}", index + 1))
    }
}
