//! Canvas - the RGBA pixel buffer shapes draw onto.
//!
//! A canvas owns its buffer outright. Shapes never borrow it; they remember
//! the canvas by [`CanvasId`] and receive `&mut Canvas` for each rendering
//! call, which is checked against the remembered id.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, TileError};
use crate::store::ImageFormatKind;

use super::colour::{Colour, IntoColour};

/// File name used when none (or one with an unknown extension) is given.
pub const DEFAULT_OUTPUT_FILE: &str = "temp_output.png";

/// Directory used when none is given.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "temp_assets";

static NEXT_CANVAS_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique handle naming a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanvasId(u64);

impl CanvasId {
    fn next() -> Self {
        Self(NEXT_CANVAS_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for CanvasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a canvas is written when saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    file_name: String,
    directory: PathBuf,
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_OUTPUT_FILE.to_string(),
            directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
        }
    }
}

impl OutputTarget {
    /// Output file name, always with a recognised image extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path of the single-copy output file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Encoding chosen by the file extension.
    pub fn format(&self) -> ImageFormatKind {
        ImageFormatKind::from_file_name(&self.file_name).unwrap_or(ImageFormatKind::Png)
    }
}

/// A fixed-size RGBA raster.
///
/// Not `Clone`: two canvases never share an id.
#[derive(Debug)]
pub struct Canvas {
    id: CanvasId,

    width: u32,

    height: u32,

    /// Fill colour for every cell on construction, resize and background change.
    background: Option<Colour>,

    /// Stored for callers; no drawing operation reads it.
    line_colour: Option<Colour>,

    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,

    output: OutputTarget,
}

impl Canvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            id: CanvasId::next(),
            width,
            height,
            background: None,
            line_colour: None,
            pixels: vec![vec![Colour::TRANSPARENT; width as usize]; height as usize],
            output: OutputTarget::default(),
        })
    }

    /// Set the background colour, filling every cell when it is valid.
    pub fn with_background(mut self, colour: impl IntoColour) -> Self {
        self.set_background(colour);
        self
    }

    /// Set the line colour.
    pub fn with_line_colour(mut self, colour: impl IntoColour) -> Self {
        self.set_line_colour(colour);
        self
    }

    /// Set the output file name and directory.
    pub fn with_output(mut self, file_name: &str, directory: impl Into<PathBuf>) -> Self {
        self.set_output_file(file_name);
        self.set_output_directory(directory);
        self
    }

    pub fn id(&self) -> CanvasId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The larger of width and height.
    pub fn size_metric(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn background(&self) -> Option<Colour> {
        self.background
    }

    pub fn line_colour(&self) -> Option<Colour> {
        self.line_colour
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Read-only view of the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Whether `(x, y)` addresses a cell of this canvas.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y)
    }

    /// Write a single cell. `None` writes an unset (transparent) cell.
    pub fn write(&mut self, x: i64, y: i64, colour: Option<Colour>) -> Result<()> {
        if !self.contains(x, y) {
            return Err(TileError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.pixels[y as usize][x as usize] = colour.unwrap_or(Colour::TRANSPARENT);
        Ok(())
    }

    /// Replace the background colour and repaint every cell with it.
    ///
    /// Invalid colours unset the background; the buffer is then left as is.
    pub fn set_background(&mut self, colour: impl IntoColour) {
        self.background = colour.into_colour();
        self.apply_background();
    }

    pub fn set_line_colour(&mut self, colour: impl IntoColour) {
        self.line_colour = colour.into_colour();
    }

    /// Repaint every cell with the background, discarding drawn content.
    ///
    /// Without a background the buffer is left as is.
    pub fn clear(&mut self) {
        self.apply_background();
    }

    /// Reallocate the buffer at a new size. All drawn pixels are lost.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        let fill = self.background.unwrap_or(Colour::TRANSPARENT);
        self.pixels = vec![vec![fill; width as usize]; height as usize];
        Ok(())
    }

    /// Set the output file name.
    ///
    /// Names without a recognised image extension fall back to
    /// [`DEFAULT_OUTPUT_FILE`].
    pub fn set_output_file(&mut self, file_name: &str) {
        self.output.file_name = if ImageFormatKind::from_file_name(file_name).is_some() {
            file_name.to_string()
        } else {
            DEFAULT_OUTPUT_FILE.to_string()
        };
    }

    pub fn set_output_directory(&mut self, directory: impl Into<PathBuf>) {
        self.output.directory = directory.into();
    }

    fn apply_background(&mut self) {
        if let Some(colour) = self.background {
            self.fill(colour);
        }
    }

    fn fill(&mut self, colour: Colour) {
        for row in &mut self.pixels {
            row.fill(colour);
        }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(TileError::InvalidArgument {
            message: format!("Canvas dimensions must be positive, got {}x{}", width, height),
            help: Some("Use a width and height of at least 1".to_string()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_cells(canvas: &Canvas) -> impl Iterator<Item = Colour> + '_ {
        canvas.pixels().iter().flat_map(|row| row.iter().copied())
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(4, 3).unwrap();
        assert_eq!(canvas.size(), (4, 3));
        assert_eq!(canvas.pixels().len(), 3);
        assert_eq!(canvas.pixels()[0].len(), 4);
        assert!(all_cells(&canvas).all(|c| c == Colour::TRANSPARENT));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Canvas::new(0, 4),
            Err(TileError::InvalidArgument { .. })
        ));
        let mut canvas = Canvas::new(2, 2).unwrap();
        assert!(canvas.resize(2, 0).is_err());
        assert_eq!(canvas.size(), (2, 2));
    }

    #[test]
    fn test_background_fills_every_cell() {
        let canvas = Canvas::new(5, 5).unwrap().with_background([10, 20, 30, 255]);
        assert_eq!(canvas.background(), Some(Colour::new(10, 20, 30, 255)));
        assert!(all_cells(&canvas).all(|c| c == Colour::new(10, 20, 30, 255)));
    }

    #[test]
    fn test_invalid_background_is_unset() {
        let canvas = Canvas::new(2, 2).unwrap().with_background([10, 20, 300]);
        assert_eq!(canvas.background(), None);
        assert!(all_cells(&canvas).all(|c| c == Colour::TRANSPARENT));
    }

    #[test]
    fn test_write_in_bounds() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.write(3, 2, Some(Colour::WHITE)).unwrap();
        assert_eq!(canvas.get(3, 2), Some(Colour::WHITE));
    }

    #[test]
    fn test_write_out_of_range() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        for (x, y) in [(4, 0), (0, 4), (-1, 0), (0, -1)] {
            let err = canvas.write(x, y, Some(Colour::WHITE)).unwrap_err();
            assert!(matches!(
                err,
                TileError::OutOfRange { width: 4, height: 4, .. }
            ));
        }
    }

    #[test]
    fn test_write_none_unsets_cell() {
        let mut canvas = Canvas::new(2, 2).unwrap().with_background(Colour::BLACK);
        canvas.write(0, 0, None).unwrap();
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_set_background_destroys_drawing() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.write(1, 1, Some(Colour::WHITE)).unwrap();
        canvas.set_background([0, 0, 255]);
        assert_eq!(canvas.get(1, 1), Some(Colour::rgb(0, 0, 255)));
    }

    #[test]
    fn test_unset_background_keeps_drawing() {
        let mut canvas = Canvas::new(3, 3).unwrap().with_background(Colour::BLACK);
        canvas.write(1, 1, Some(Colour::WHITE)).unwrap();
        canvas.set_background(vec![1, 2]);
        assert_eq!(canvas.background(), None);
        assert_eq!(canvas.get(1, 1), Some(Colour::WHITE));
        assert_eq!(canvas.get(0, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_resize_is_destructive() {
        let mut canvas = Canvas::new(4, 4).unwrap().with_background([10, 20, 30, 255]);
        let id = canvas.id();
        canvas.write(0, 0, Some(Colour::WHITE)).unwrap();
        canvas.resize(6, 2).unwrap();

        assert_eq!(canvas.size(), (6, 2));
        assert_eq!(canvas.pixels().len(), 2);
        assert!(canvas.pixels().iter().all(|row| row.len() == 6));
        assert!(all_cells(&canvas).all(|c| c == Colour::new(10, 20, 30, 255)));
        assert_eq!(canvas.id(), id);
    }

    #[test]
    fn test_clear_repaints_background() {
        let mut canvas = Canvas::new(2, 2).unwrap().with_background(Colour::BLACK);
        canvas.write(0, 1, Some(Colour::WHITE)).unwrap();
        canvas.clear();
        assert!(all_cells(&canvas).all(|c| c == Colour::BLACK));
    }

    #[test]
    fn test_clear_without_background_keeps_drawing() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.write(0, 1, Some(Colour::WHITE)).unwrap();
        canvas.clear();
        assert_eq!(canvas.get(0, 1), Some(Colour::WHITE));
    }

    #[test]
    fn test_size_metric() {
        assert_eq!(Canvas::new(7, 3).unwrap().size_metric(), 7);
        assert_eq!(Canvas::new(2, 9).unwrap().size_metric(), 9);
    }

    #[test]
    fn test_line_colour_is_stored_only() {
        let canvas = Canvas::new(2, 2).unwrap().with_line_colour([1, 2, 3]);
        assert_eq!(canvas.line_colour(), Some(Colour::rgb(1, 2, 3)));
        assert!(all_cells(&canvas).all(|c| c == Colour::TRANSPARENT));
    }

    #[test]
    fn test_output_defaults_and_validation() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        assert_eq!(canvas.output().file_name(), DEFAULT_OUTPUT_FILE);
        assert_eq!(canvas.output().directory(), Path::new(DEFAULT_OUTPUT_DIRECTORY));

        canvas.set_output_file("grass.jpg");
        assert_eq!(canvas.output().file_name(), "grass.jpg");
        assert_eq!(canvas.output().format(), ImageFormatKind::Jpeg);

        canvas.set_output_file("grass.tiff");
        assert_eq!(canvas.output().file_name(), DEFAULT_OUTPUT_FILE);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Canvas::new(1, 1).unwrap();
        let b = Canvas::new(1, 1).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
