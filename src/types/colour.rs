//! Colour type, validation and coercion.
//!
//! Colours arrive as 3 or 4 integer channels. Anything that is not a legal
//! RGB/RGBA value is treated as "unset" (`None`) instead of being rejected,
//! so every colour setter in the crate goes through [`IntoColour`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TileError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Check whether a channel list is a legal RGB or RGBA colour.
///
/// True iff there are 3 or 4 channels and each lies in `0..=255`.
pub fn is_valid_colour(channels: &[i64]) -> bool {
    matches!(channels.len(), 3 | 4) && channels.iter().all(|c| (0..=255).contains(c))
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour. Also the value of an unset cell.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Build a colour from integer channels.
    ///
    /// Three channels give an opaque colour. Returns `None` for anything
    /// [`is_valid_colour`] rejects.
    pub fn from_channels(channels: &[i64]) -> Option<Self> {
        if !is_valid_colour(channels) {
            return None;
        }
        let a = channels.get(3).copied().unwrap_or(255);
        Some(Self::new(
            channels[0] as u8,
            channels[1] as u8,
            channels[2] as u8,
            a as u8,
        ))
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                let mut digits = [0u8; 4];
                digits[3] = 0xF;
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    *slot = parse_hex_digit(c)?;
                }
                let [r, g, b, a] = digits.map(|d| d << 4 | d);
                Ok(Self::new(r, g, b, a))
            }
            6 | 8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    parse_hex_byte(&hex[6..8])?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to an RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Anything a colour setter accepts.
///
/// Conversion never fails: illegal input becomes `None` (unset).
pub trait IntoColour {
    fn into_colour(self) -> Option<Colour>;
}

impl IntoColour for Colour {
    fn into_colour(self) -> Option<Colour> {
        Some(self)
    }
}

impl IntoColour for Option<Colour> {
    fn into_colour(self) -> Option<Colour> {
        self
    }
}

impl IntoColour for &[i64] {
    fn into_colour(self) -> Option<Colour> {
        Colour::from_channels(self)
    }
}

impl<const N: usize> IntoColour for [i64; N] {
    fn into_colour(self) -> Option<Colour> {
        Colour::from_channels(&self)
    }
}

impl IntoColour for Vec<i64> {
    fn into_colour(self) -> Option<Colour> {
        Colour::from_channels(&self)
    }
}

impl IntoColour for &Vec<i64> {
    fn into_colour(self) -> Option<Colour> {
        Colour::from_channels(self)
    }
}

impl IntoColour for Option<&[i64]> {
    fn into_colour(self) -> Option<Colour> {
        self.and_then(Colour::from_channels)
    }
}

impl IntoColour for Option<Vec<i64>> {
    fn into_colour(self) -> Option<Colour> {
        self.and_then(|c| Colour::from_channels(&c))
    }
}

fn invalid_hex(s: &str) -> TileError {
    TileError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| TileError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| TileError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
