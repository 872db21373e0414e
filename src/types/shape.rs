//! Shape - an ordered list of coordinates painted onto a canvas.
//!
//! A shape remembers its canvas by [`CanvasId`] and is rendered by passing
//! that canvas back in. Coordinates are painted in list order, so a later
//! coordinate overwrites an earlier one on the same cell.
//!
//! # Example
//!
//! ```
//! use tilegen::{Canvas, Colour, Shape};
//!
//! let mut canvas = Canvas::new(4, 4)?;
//! let shape = Shape::new(&canvas, vec![(0, 0), (1, 1)], [255, 0, 0, 255]);
//! shape.draw(&mut canvas, tilegen::DEFAULT_RADIUS)?;
//!
//! assert_eq!(canvas.get(1, 1), Some(Colour::rgb(255, 0, 0)));
//! # Ok::<(), tilegen::TileError>(())
//! ```

use crate::error::{Result, TileError};
use crate::render::disk_cells;

use super::canvas::{Canvas, CanvasId};
use super::colour::{Colour, IntoColour};

/// Disk radius used for rounded shapes when the caller has no preference.
pub const DEFAULT_RADIUS: i64 = 2;

/// A pixel pattern bound to one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    canvas: CanvasId,

    /// Paint order; duplicates allowed.
    coords: Vec<(i64, i64)>,

    colour: Option<Colour>,

    /// Draw each coordinate as a filled disk instead of a single pixel.
    rounded_edges: bool,
}

impl Shape {
    /// Create a shape for `canvas`. Invalid colours are stored as unset.
    pub fn new(canvas: &Canvas, coords: Vec<(i64, i64)>, colour: impl IntoColour) -> Self {
        Self {
            canvas: canvas.id(),
            coords,
            colour: colour.into_colour(),
            rounded_edges: false,
        }
    }

    /// Choose disk rasterization.
    pub fn with_rounded_edges(mut self, rounded_edges: bool) -> Self {
        self.rounded_edges = rounded_edges;
        self
    }

    /// Handle of the canvas this shape renders onto.
    pub fn canvas(&self) -> CanvasId {
        self.canvas
    }

    pub fn coords(&self) -> &[(i64, i64)] {
        &self.coords
    }

    pub fn colour(&self) -> Option<Colour> {
        self.colour
    }

    pub fn rounded_edges(&self) -> bool {
        self.rounded_edges
    }

    /// Retarget the shape at another canvas.
    pub fn attach(&mut self, canvas: &Canvas) {
        self.canvas = canvas.id();
    }

    pub fn set_coords(&mut self, coords: Vec<(i64, i64)>) {
        self.coords = coords;
    }

    pub fn set_colour(&mut self, colour: impl IntoColour) {
        self.colour = colour.into_colour();
    }

    pub fn set_rounded_edges(&mut self, rounded_edges: bool) {
        self.rounded_edges = rounded_edges;
    }

    /// Paint every coordinate onto the canvas.
    ///
    /// Single pixels outside the canvas fail with `OutOfRange`. Disks are
    /// clipped to the canvas instead, so a rounded shape may hang over the
    /// edge.
    pub fn draw(&self, canvas: &mut Canvas, radius: i64) -> Result<()> {
        self.check_canvas(canvas)?;

        if !self.rounded_edges {
            for &(x, y) in &self.coords {
                canvas.write(x, y, self.colour)?;
            }
            return Ok(());
        }

        if radius < 0 {
            return Err(TileError::invalid(format!(
                "Disk radius must not be negative, got {}",
                radius
            )));
        }
        for &(x, y) in &self.coords {
            for (cx, cy) in disk_cells(x, y, radius, canvas.width(), canvas.height()) {
                canvas.write(cx, cy, self.colour)?;
            }
        }
        Ok(())
    }

    /// Fail unless `canvas` is the one this shape was created for.
    pub(crate) fn check_canvas(&self, canvas: &Canvas) -> Result<()> {
        if canvas.id() != self.canvas {
            return Err(TileError::CanvasMismatch {
                expected: self.canvas,
                found: canvas.id(),
            });
        }
        Ok(())
    }

    /// Replace the coordinate list after a tiling pass.
    pub(crate) fn replace_coords(&mut self, coords: Vec<(i64, i64)>) {
        self.coords = coords;
    }
}
