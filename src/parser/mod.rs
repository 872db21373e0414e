//! Parsers for user-typed values.
//!
//! The shell and the CLI accept coordinates and colours as plain text:
//!
//! - coordinates: `(1, 0), (1, 1), (1, 2)`
//! - colours: `r, g, b` or `r, g, b, a`
//! - pairs such as spacing or start: `4, 4`
//! - dimensions: `32x16`
//!
//! Malformed text is rejected here with a `Parse` error. Channel ranges are
//! not checked: the colour setters downgrade out-of-range channels to unset.

mod colour;
mod coords;

pub use colour::{parse_channels, parse_colour};
pub use coords::{parse_coords, parse_dimensions, parse_pair};

use crate::error::TileError;

fn parse_error(message: String, help: &str) -> TileError {
    TileError::Parse {
        message,
        help: Some(help.to_string()),
    }
}
