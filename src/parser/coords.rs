//! Coordinate lists, pairs and dimensions.

use crate::error::Result;

use super::parse_error;

const COORDS_HELP: &str = "Write coordinates as (x, y), (x, y), ...";

/// Parse a coordinate list such as `(1, 0), (1, 1)`.
///
/// Order and duplicates are preserved. An empty string is an empty list.
pub fn parse_coords(input: &str) -> Result<Vec<(i64, i64)>> {
    let mut coords = Vec::new();
    let mut rest = input.trim();

    while !rest.is_empty() {
        let inner = rest
            .strip_prefix('(')
            .ok_or_else(|| parse_error(format!("Expected '(' at: {}", rest), COORDS_HELP))?;
        let close = inner
            .find(')')
            .ok_or_else(|| parse_error(format!("Unclosed coordinate: ({}", inner), COORDS_HELP))?;

        coords.push(parse_pair(&inner[..close]).map_err(|_| {
            parse_error(
                format!("Invalid coordinate: ({})", &inner[..close]),
                COORDS_HELP,
            )
        })?);

        rest = inner[close + 1..].trim_start();
        if let Some(after_comma) = rest.strip_prefix(',') {
            rest = after_comma.trim_start();
            if rest.is_empty() {
                return Err(parse_error("Trailing comma after coordinates".to_string(), COORDS_HELP));
            }
        } else if !rest.is_empty() {
            return Err(parse_error(format!("Expected ',' at: {}", rest), COORDS_HELP));
        }
    }

    Ok(coords)
}

/// Parse two comma-separated integers such as `4, 4`.
pub fn parse_pair(input: &str) -> Result<(i64, i64)> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let [a, b] = parts.as_slice() else {
        return Err(parse_error(
            format!("Expected two values, got: {}", input.trim()),
            "Write a pair as a, b",
        ));
    };

    let parse = |s: &str| {
        s.parse::<i64>().map_err(|_| {
            parse_error(format!("Not an integer: {}", s), "Write a pair as a, b")
        })
    };
    Ok((parse(*a)?, parse(*b)?))
}

/// Parse canvas dimensions such as `32x16` (`32X16` and `32, 16` also work).
pub fn parse_dimensions(input: &str) -> Result<(u32, u32)> {
    let help = "Write dimensions as WIDTHxHEIGHT, e.g. 32x32";
    let trimmed = input.trim();
    let (w, h) = trimmed
        .split_once(['x', 'X', ','])
        .ok_or_else(|| parse_error(format!("Invalid dimensions: {}", trimmed), help))?;

    let parse = |s: &str| {
        s.trim()
            .parse::<u32>()
            .ok()
            .filter(|&v| v > 0)
            .ok_or_else(|| parse_error(format!("Invalid dimension: {}", s.trim()), help))
    };
    Ok((parse(w)?, parse(h)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_coords() {
        assert_eq!(
            parse_coords("(1, 0), (1, 1), (1, 2)").unwrap(),
            vec![(1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn test_parse_coords_spacing_and_negatives() {
        assert_eq!(
            parse_coords("  (-1,0),(3 ,  -4)  ").unwrap(),
            vec![(-1, 0), (3, -4)]
        );
    }

    #[test]
    fn test_parse_coords_keeps_duplicates() {
        assert_eq!(
            parse_coords("(2, 2), (2, 2)").unwrap(),
            vec![(2, 2), (2, 2)]
        );
    }

    #[test]
    fn test_parse_coords_empty() {
        assert_eq!(parse_coords("").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_coords_invalid() {
        assert!(parse_coords("(1, 2").is_err());
        assert!(parse_coords("1, 2").is_err());
        assert!(parse_coords("(1, 2, 3)").is_err());
        assert!(parse_coords("(a, 2)").is_err());
        assert!(parse_coords("(1, 2),").is_err());
        assert!(parse_coords("(1, 2) (3, 4)").is_err());
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("4, 4").unwrap(), (4, 4));
        assert_eq!(parse_pair(" 0,-2 ").unwrap(), (0, -2));
        assert!(parse_pair("4").is_err());
        assert!(parse_pair("4, 4, 4").is_err());
        assert!(parse_pair("4.5, 1").is_err());
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("32x16").unwrap(), (32, 16));
        assert_eq!(parse_dimensions("8X8").unwrap(), (8, 8));
        assert_eq!(parse_dimensions("12, 4").unwrap(), (12, 4));
        assert!(parse_dimensions("0x4").is_err());
        assert!(parse_dimensions("32").is_err());
        assert!(parse_dimensions("-1x4").is_err());
    }
}
