//! Tiling a shape across its canvas.
//!
//! `repeat` walks `i in 0..count_x`, then `j in 0..count_y`, then every base
//! coordinate, offsetting each by `(i * spacing.0, j * spacing.1)`. That
//! order decides which write wins when tiles overlap.
//!
//! Points that fall off the canvas, or whose offset leaves the `i64` range,
//! are dropped. With `randomize` on, points that sit on the lattice anchored
//! at `start` are painted immediately, each keeping the shape colour with
//! probability `cut_chance` and taking `cut_colour` otherwise. Every other
//! point is staged: it replaces the shape's coordinate list and reaches the
//! canvas on the next `draw`.

use crate::error::{Result, TileError};

use super::canvas::Canvas;
use super::colour::{Colour, IntoColour};
use super::shape::Shape;

/// Parameters of a tiling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatOptions {
    /// Horizontal repetitions.
    pub count_x: u32,

    /// Vertical repetitions.
    pub count_y: u32,

    /// Offset between repetitions (x, y).
    pub spacing: (i64, i64),

    /// Anchor of the lattice used when randomizing.
    pub start: (i64, i64),

    /// Paint lattice points immediately with a random cut.
    pub randomize: bool,

    /// Probability that a lattice point keeps the shape colour.
    pub cut_chance: f64,

    /// Colour of cut points. Unset means the canvas background.
    pub cut_colour: Option<Colour>,
}

impl Default for RepeatOptions {
    fn default() -> Self {
        Self {
            count_x: 5,
            count_y: 5,
            spacing: (4, 4),
            start: (0, 0),
            randomize: false,
            cut_chance: 0.5,
            cut_colour: None,
        }
    }
}

impl RepeatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(mut self, count_x: u32, count_y: u32) -> Self {
        self.count_x = count_x;
        self.count_y = count_y;
        self
    }

    pub fn spacing(mut self, x: i64, y: i64) -> Self {
        self.spacing = (x, y);
        self
    }

    pub fn start(mut self, x: i64, y: i64) -> Self {
        self.start = (x, y);
        self
    }

    /// Enable random cutting on lattice points.
    pub fn randomized(mut self, cut_chance: f64, cut_colour: impl IntoColour) -> Self {
        self.randomize = true;
        self.cut_chance = cut_chance;
        self.cut_colour = cut_colour.into_colour();
        self
    }

    /// Reject parameters the lattice test cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.randomize {
            return Ok(());
        }
        if self.spacing.0 == 0 || self.spacing.1 == 0 {
            return Err(TileError::InvalidArgument {
                message: format!(
                    "Spacing ({}, {}) has a zero axis",
                    self.spacing.0, self.spacing.1
                ),
                help: Some("Randomized repeats need non-zero spacing on both axes".to_string()),
            });
        }
        if !(0.0..=1.0).contains(&self.cut_chance) {
            return Err(TileError::InvalidArgument {
                message: format!("Cut chance {} is not a probability", self.cut_chance),
                help: Some("Use a value between 0 and 1".to_string()),
            });
        }
        Ok(())
    }

    fn on_lattice(&self, x: i64, y: i64) -> bool {
        let aligned = |value: i64, start: i64, spacing: i64| {
            (value as i128 - start as i128) % spacing as i128 == 0
        };
        aligned(x, self.start.0, self.spacing.0) && aligned(y, self.start.1, self.spacing.1)
    }
}

/// `base + step * spacing`, or `None` when it leaves the `i64` range.
fn offset(base: i64, step: i64, spacing: i64) -> Option<i64> {
    step.checked_mul(spacing)?.checked_add(base)
}

impl Shape {
    /// Tile this shape across `canvas`.
    ///
    /// Random cuts draw from `rng`, so a seeded generator gives a
    /// reproducible pattern.
    pub fn repeat(
        &mut self,
        canvas: &mut Canvas,
        options: &RepeatOptions,
        rng: &mut fastrand::Rng,
    ) -> Result<()> {
        self.check_canvas(canvas)?;
        options.validate()?;

        let (sx, sy) = options.spacing;
        let cut_colour = options.cut_colour.or(canvas.background());
        let mut staged = Vec::new();

        for i in 0..options.count_x as i64 {
            for j in 0..options.count_y as i64 {
                for &(bx, by) in self.coords() {
                    let Some((nx, ny)) = offset(bx, i, sx).zip(offset(by, j, sy)) else {
                        continue;
                    };
                    if !canvas.contains(nx, ny) {
                        continue;
                    }

                    if options.randomize && options.on_lattice(nx, ny) {
                        let colour = if rng.f64() > options.cut_chance {
                            cut_colour
                        } else {
                            self.colour()
                        };
                        canvas.write(nx, ny, colour)?;
                    } else {
                        staged.push((nx, ny));
                    }
                }
            }
        }

        self.replace_coords(staged);
        Ok(())
    }

    /// Tile with a generator seeded from system entropy.
    pub fn repeat_with_entropy(&mut self, canvas: &mut Canvas, options: &RepeatOptions) -> Result<()> {
        self.repeat(canvas, options, &mut fastrand::Rng::new())
    }
}
