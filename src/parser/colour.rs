//! Colour channel lists.

use crate::error::Result;
use crate::types::{Colour, IntoColour};

use super::parse_error;

const CHANNELS_HELP: &str = "Write a colour as r, g, b or r, g, b, a";

/// Parse `r, g, b` or `r, g, b, a` into integer channels.
///
/// Arity is checked; channel range is left to the colour validator.
pub fn parse_channels(input: &str) -> Result<Vec<i64>> {
    let channels = input
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .map_err(|_| parse_error(format!("Not an integer channel: {}", part), CHANNELS_HELP))
        })
        .collect::<Result<Vec<i64>>>()?;

    if !matches!(channels.len(), 3 | 4) {
        return Err(parse_error(
            format!("Expected 3 or 4 channels, got {}", channels.len()),
            CHANNELS_HELP,
        ));
    }
    Ok(channels)
}

/// Parse channels and coerce them to a colour (unset when out of range).
///
/// Hex colours (`#RRGGBB`) are accepted too.
pub fn parse_colour(input: &str) -> Result<Option<Colour>> {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        return Ok(Some(Colour::from_hex(trimmed)?));
    }
    Ok(parse_channels(trimmed)?.into_colour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channels() {
        assert_eq!(parse_channels("10, 20, 30").unwrap(), vec![10, 20, 30]);
        assert_eq!(parse_channels("0,0,0,0").unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_channels_keeps_out_of_range_values() {
        assert_eq!(parse_channels("300, -1, 0").unwrap(), vec![300, -1, 0]);
    }

    #[test]
    fn test_parse_channels_invalid() {
        assert!(parse_channels("").is_err());
        assert!(parse_channels("1, 2").is_err());
        assert!(parse_channels("1, 2, 3, 4, 5").is_err());
        assert!(parse_channels("1.5, 2, 3").is_err());
        assert!(parse_channels("red, 2, 3").is_err());
    }

    #[test]
    fn test_parse_colour() {
        assert_eq!(parse_colour("255, 0, 0").unwrap(), Some(Colour::rgb(255, 0, 0)));
        assert_eq!(parse_colour("#00FF00").unwrap(), Some(Colour::rgb(0, 255, 0)));
        assert_eq!(parse_colour("255, 0, 300").unwrap(), None);
        assert!(parse_colour("#XYZ").is_err());
    }
}
