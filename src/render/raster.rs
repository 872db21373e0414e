//! Canvas to `image` buffer conversion with optional integer scaling.

use image::{ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};

use crate::types::Canvas;

/// Convert a canvas to an RGBA image.
///
/// # Arguments
///
/// * `canvas` - The canvas to convert
/// * `scale` - Integer scale factor (1 = no scaling, 0 is treated as 1)
pub fn to_rgba_image(canvas: &Canvas, scale: u32) -> RgbaImage {
    let scale = scale.max(1);

    let width = canvas.width() * scale;
    let height = canvas.height() * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in canvas.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x as u32 * scale + sx, y as u32 * scale + sy, rgba);
                }
            }
        }
    }

    img
}

/// Convert a canvas to an RGB image, dropping alpha.
pub fn to_rgb_image(canvas: &Canvas, scale: u32) -> RgbImage {
    let rgba = to_rgba_image(canvas, scale);
    ImageBuffer::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, _] = rgba.get_pixel(x, y).0;
        Rgb([r, g, b])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn checker() -> Canvas {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.write(0, 0, Some(Colour::BLACK)).unwrap();
        canvas.write(1, 0, Some(Colour::WHITE)).unwrap();
        canvas.write(0, 1, Some(Colour::WHITE)).unwrap();
        canvas.write(1, 1, Some(Colour::new(255, 0, 0, 128))).unwrap();
        canvas
    }

    #[test]
    fn test_to_rgba_image() {
        let img = to_rgba_image(&checker(), 1);
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_to_rgba_image_scaled() {
        let img = to_rgba_image(&checker(), 3);
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(img.get_pixel(2, 2).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(3, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_scale_zero_treated_as_one() {
        assert_eq!(to_rgba_image(&checker(), 0).dimensions(), (2, 2));
    }

    #[test]
    fn test_to_rgb_image_drops_alpha() {
        let img = to_rgb_image(&checker(), 1);
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0]);
    }
}
