//! tilegen - Pixel-art tile pattern generator
//!
//! A library for drawing point and disk shapes onto RGBA canvases, tiling
//! them across the canvas, and saving the result as an image.

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod project;
pub mod render;
pub mod store;
pub mod studio;
pub mod types;

pub use error::{Result, TileError};
pub use project::{BuildOptions, Project, RenderedProject};
pub use render::{disk_cells, preview, to_rgb_image, to_rgba_image};
pub use store::ImageFormatKind;
pub use studio::Studio;
pub use types::{
    is_valid_colour, Canvas, CanvasId, Colour, IntoColour, OutputTarget, RepeatOptions, Shape,
    DEFAULT_OUTPUT_DIRECTORY, DEFAULT_OUTPUT_FILE, DEFAULT_RADIUS,
};
