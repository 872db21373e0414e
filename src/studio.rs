//! Named canvases and shapes for the command layer.
//!
//! The core types know nothing about names. The shell and the project
//! builder keep their canvases and shapes here and address them by name;
//! a shape reaches its canvas through the canvas id it was created with, so
//! removing a canvas leaves its shapes in place but unusable until they are
//! re-attached.

use std::collections::BTreeMap;

use crate::error::{Result, TileError};
use crate::types::{Canvas, IntoColour, RepeatOptions, Shape};

/// Registry of named canvases and shapes.
#[derive(Debug, Default)]
pub struct Studio {
    canvases: BTreeMap<String, Canvas>,
    shapes: BTreeMap<String, Shape>,
}

impl Studio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canvas, replacing (and returning) any canvas with the same name.
    pub fn add_canvas(&mut self, name: impl Into<String>, canvas: Canvas) -> Option<Canvas> {
        self.canvases.insert(name.into(), canvas)
    }

    /// Remove a canvas. Shapes drawn on it stay registered.
    pub fn remove_canvas(&mut self, name: &str) -> Result<Canvas> {
        self.canvases.remove(name).ok_or_else(|| unknown_canvas(name))
    }

    pub fn canvas(&self, name: &str) -> Result<&Canvas> {
        self.canvases.get(name).ok_or_else(|| unknown_canvas(name))
    }

    pub fn canvas_mut(&mut self, name: &str) -> Result<&mut Canvas> {
        self.canvases.get_mut(name).ok_or_else(|| unknown_canvas(name))
    }

    /// Create a shape on the named canvas and register it.
    pub fn add_shape(
        &mut self,
        name: impl Into<String>,
        canvas: &str,
        coords: Vec<(i64, i64)>,
        colour: impl IntoColour,
    ) -> Result<&mut Shape> {
        let shape = Shape::new(self.canvas(canvas)?, coords, colour);
        let name = name.into();
        self.shapes.insert(name.clone(), shape);
        self.shape_mut(&name)
    }

    pub fn shape(&self, name: &str) -> Result<&Shape> {
        self.shapes.get(name).ok_or_else(|| unknown_shape(name))
    }

    pub fn shape_mut(&mut self, name: &str) -> Result<&mut Shape> {
        self.shapes.get_mut(name).ok_or_else(|| unknown_shape(name))
    }

    /// Name of the canvas a shape renders onto.
    pub fn canvas_name_of(&self, shape: &str) -> Result<&str> {
        let id = self.shape(shape)?.canvas();
        self.canvases
            .iter()
            .find(|(_, canvas)| canvas.id() == id)
            .map(|(name, _)| name.as_str())
            .ok_or_else(|| unknown_canvas(&id.to_string()))
    }

    /// Draw a shape onto its canvas.
    pub fn draw_shape(&mut self, name: &str, radius: i64) -> Result<()> {
        let (shape, canvas) = self.shape_and_canvas(name)?;
        shape.draw(canvas, radius)
    }

    /// Repaint the shape's canvas with its background, then draw the shape.
    ///
    /// On a canvas without a background earlier drawing stays in place.
    pub fn redraw_shape(&mut self, name: &str, radius: i64) -> Result<()> {
        let (shape, canvas) = self.shape_and_canvas(name)?;
        canvas.clear();
        shape.draw(canvas, radius)
    }

    /// Tile a shape across its canvas.
    pub fn repeat_shape(
        &mut self,
        name: &str,
        options: &RepeatOptions,
        rng: &mut fastrand::Rng,
    ) -> Result<()> {
        let (shape, canvas) = self.shape_and_canvas(name)?;
        shape.repeat(canvas, options, rng)
    }

    /// Canvas names in sorted order.
    pub fn canvas_names(&self) -> impl Iterator<Item = &str> {
        self.canvases.keys().map(|s| s.as_str())
    }

    /// Shape names in sorted order.
    pub fn shape_names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(|s| s.as_str())
    }

    /// All canvases with their names.
    pub fn canvases(&self) -> impl Iterator<Item = (&str, &Canvas)> {
        self.canvases.iter().map(|(name, canvas)| (name.as_str(), canvas))
    }

    fn shape_and_canvas(&mut self, name: &str) -> Result<(&mut Shape, &mut Canvas)> {
        let shape = self.shapes.get_mut(name).ok_or_else(|| unknown_shape(name))?;
        let id = shape.canvas();
        let canvas = self
            .canvases
            .values_mut()
            .find(|canvas| canvas.id() == id)
            .ok_or_else(|| unknown_canvas(&id.to_string()))?;
        Ok((shape, canvas))
    }
}

fn unknown_canvas(name: &str) -> TileError {
    TileError::UnknownCanvas {
        name: name.to_string(),
    }
}

fn unknown_shape(name: &str) -> TileError {
    TileError::UnknownShape {
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    fn studio() -> Studio {
        let mut studio = Studio::new();
        studio.add_canvas("grass", Canvas::new(8, 8).unwrap());
        studio.add_canvas("stone", Canvas::new(4, 4).unwrap());
        studio
    }

    #[test]
    fn test_names_are_sorted() {
        let mut studio = studio();
        studio.add_shape("b", "grass", vec![], Colour::WHITE).unwrap();
        studio.add_shape("a", "stone", vec![], Colour::WHITE).unwrap();

        assert_eq!(studio.canvas_names().collect::<Vec<_>>(), vec!["grass", "stone"]);
        assert_eq!(studio.shape_names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_add_shape_to_unknown_canvas() {
        let mut studio = studio();
        let err = studio.add_shape("s", "sand", vec![], Colour::WHITE).unwrap_err();
        assert!(matches!(err, TileError::UnknownCanvas { .. }));
    }

    #[test]
    fn test_draw_shape_on_its_canvas() {
        let mut studio = studio();
        studio.add_shape("dot", "stone", vec![(3, 3)], Colour::WHITE).unwrap();

        studio.draw_shape("dot", 2).unwrap();

        assert_eq!(studio.canvas("stone").unwrap().get(3, 3), Some(Colour::WHITE));
        assert_eq!(studio.canvas("grass").unwrap().get(3, 3), Some(Colour::TRANSPARENT));
        assert_eq!(studio.canvas_name_of("dot").unwrap(), "stone");
    }

    #[test]
    fn test_redraw_repaints_background() {
        let mut studio = studio();
        studio.canvas_mut("stone").unwrap().set_background(Colour::BLACK);
        studio.add_shape("dot", "stone", vec![(0, 0)], Colour::WHITE).unwrap();
        studio.draw_shape("dot", 2).unwrap();

        studio.shape_mut("dot").unwrap().set_coords(vec![(1, 1)]);
        studio.redraw_shape("dot", 2).unwrap();

        let canvas = studio.canvas("stone").unwrap();
        assert_eq!(canvas.get(0, 0), Some(Colour::BLACK));
        assert_eq!(canvas.get(1, 1), Some(Colour::WHITE));
    }

    #[test]
    fn test_redraw_without_background_keeps_other_shapes() {
        let mut studio = studio();
        studio.add_shape("a", "stone", vec![(0, 0)], Colour::WHITE).unwrap();
        studio.add_shape("b", "stone", vec![(3, 3)], Colour::BLACK).unwrap();
        studio.draw_shape("a", 2).unwrap();
        studio.draw_shape("b", 2).unwrap();

        studio.shape_mut("b").unwrap().set_coords(vec![(2, 2)]);
        studio.redraw_shape("b", 2).unwrap();

        let canvas = studio.canvas("stone").unwrap();
        assert_eq!(canvas.get(0, 0), Some(Colour::WHITE));
        assert_eq!(canvas.get(2, 2), Some(Colour::BLACK));
        assert_eq!(canvas.get(3, 3), Some(Colour::BLACK));
    }

    #[test]
    fn test_repeat_shape() {
        let mut studio = studio();
        studio.add_shape("dot", "grass", vec![(0, 0)], Colour::WHITE).unwrap();
        let options = RepeatOptions::new().counts(2, 1).spacing(4, 4);

        studio
            .repeat_shape("dot", &options, &mut fastrand::Rng::with_seed(1))
            .unwrap();

        assert_eq!(studio.shape("dot").unwrap().coords(), &[(0, 0), (4, 0)]);
    }

    #[test]
    fn test_removed_canvas_makes_shape_unusable() {
        let mut studio = studio();
        studio.add_shape("dot", "stone", vec![(0, 0)], Colour::WHITE).unwrap();

        studio.remove_canvas("stone").unwrap();

        assert!(studio.shape("dot").is_ok());
        assert!(matches!(
            studio.draw_shape("dot", 2),
            Err(TileError::UnknownCanvas { .. })
        ));
        assert!(studio.canvas_name_of("dot").is_err());
    }

    #[test]
    fn test_replacing_canvas_orphans_old_shapes() {
        let mut studio = studio();
        studio.add_shape("dot", "stone", vec![(0, 0)], Colour::WHITE).unwrap();

        let old = studio.add_canvas("stone", Canvas::new(4, 4).unwrap());
        assert!(old.is_some());
        assert!(studio.draw_shape("dot", 2).is_err());
    }

    #[test]
    fn test_unknown_shape() {
        let mut studio = studio();
        assert!(matches!(
            studio.draw_shape("ghost", 2),
            Err(TileError::UnknownShape { .. })
        ));
    }
}
