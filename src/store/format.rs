//! Recognised output formats, keyed by file extension.

use std::path::Path;

use image::ImageFormat;

/// Image encodings a canvas can be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormatKind {
    Png,
    Jpeg,
    Bmp,
    Gif,
}

/// Extension table: (extension, format).
const EXTENSIONS: &[(&str, ImageFormatKind)] = &[
    ("png", ImageFormatKind::Png),
    ("jpg", ImageFormatKind::Jpeg),
    ("jpeg", ImageFormatKind::Jpeg),
    ("bmp", ImageFormatKind::Bmp),
    ("gif", ImageFormatKind::Gif),
];

impl ImageFormatKind {
    /// Look up the format for a file name by its extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        EXTENSIONS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|&(_, kind)| kind)
    }

    /// All recognised extensions, without the leading dot.
    pub fn extensions() -> impl Iterator<Item = &'static str> {
        EXTENSIONS.iter().map(|(ext, _)| *ext)
    }

    /// Whether the encoding stores an alpha channel.
    pub fn keeps_alpha(self) -> bool {
        matches!(self, ImageFormatKind::Png | ImageFormatKind::Gif)
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            ImageFormatKind::Png => ImageFormat::Png,
            ImageFormatKind::Jpeg => ImageFormat::Jpeg,
            ImageFormatKind::Bmp => ImageFormat::Bmp,
            ImageFormatKind::Gif => ImageFormat::Gif,
        }
    }
}
