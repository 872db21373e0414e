//! Core domain types for tilegen.
//!
//! This module contains the raster/shape engine:
//! - `Colour` - RGBA colour values and validation
//! - `Canvas` - the pixel buffer shapes draw onto
//! - `Shape` - ordered coordinates with single-pixel or disk rasterization
//! - `RepeatOptions` - parameters of the tiling pass (`Shape::repeat`)

mod canvas;
mod colour;
mod repeat;
mod shape;

pub use canvas::{Canvas, CanvasId, OutputTarget, DEFAULT_OUTPUT_DIRECTORY, DEFAULT_OUTPUT_FILE};
pub use colour::{is_valid_colour, Colour, IntoColour};
pub use repeat::RepeatOptions;
pub use shape::{Shape, DEFAULT_RADIUS};
