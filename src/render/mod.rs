//! Rendering helpers shared by shapes, the store and the CLI.
//!
//! - `disk` enumerates the cells of a filled disk
//! - `raster` turns a canvas into an `image` buffer
//! - `preview` turns a canvas into text

mod disk;
mod preview;
mod raster;

pub use disk::disk_cells;
pub use preview::preview;
pub use raster::{to_rgb_image, to_rgba_image};
