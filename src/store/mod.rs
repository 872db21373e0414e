//! Saving and deleting rendered canvases.
//!
//! The canvas only carries its output metadata (file name and directory);
//! everything that touches the file system lives here.

mod format;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TileError};
use crate::render::{to_rgb_image, to_rgba_image};
use crate::types::Canvas;

pub use format::ImageFormatKind;

/// Save a canvas to its output directory, creating the directory if needed.
///
/// With `copies` unset a single `<dir>/<file>` is written. `Some(n)` writes
/// `n` numbered copies `<dir>/<i>_<file>` for `i` in `1..=n`. Returns the
/// written paths.
pub fn save(canvas: &Canvas, copies: Option<u32>, scale: u32) -> Result<Vec<PathBuf>> {
    if copies == Some(0) {
        return Err(TileError::InvalidArgument {
            message: "Copy count must be at least 1".to_string(),
            help: Some("Leave the copy count out to save a single file".to_string()),
        });
    }

    let output = canvas.output();
    ensure_directory(output.directory())?;

    let paths = match copies {
        None => vec![output.path()],
        Some(n) => copy_paths(canvas, n),
    };

    let format = output.format();
    for path in &paths {
        encode(canvas, path, format, scale)?;
    }

    Ok(paths)
}

/// Delete the canvas's single-copy output file.
pub fn delete_image(canvas: &Canvas) -> Result<PathBuf> {
    let path = canvas.output().path();
    match fs::remove_file(&path) {
        Ok(()) => Ok(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(TileError::NotFound { path }),
        Err(e) => Err(TileError::Io {
            path,
            message: format!("Failed to delete image: {}", e),
        }),
    }
}

/// Delete numbered copies written by `save`, skipping any that are missing.
///
/// Returns the paths that were removed.
pub fn delete_copies(canvas: &Canvas, copies: u32) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for path in copy_paths(canvas, copies) {
        match fs::remove_file(&path) {
            Ok(()) => removed.push(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(TileError::Io {
                    path,
                    message: format!("Failed to delete image: {}", e),
                })
            }
        }
    }
    Ok(removed)
}

/// Paths of numbered copies: `<dir>/<i>_<file>` for `i` in `1..=copies`.
pub fn copy_paths(canvas: &Canvas, copies: u32) -> Vec<PathBuf> {
    let output = canvas.output();
    (1..=copies)
        .map(|i| output.directory().join(format!("{}_{}", i, output.file_name())))
        .collect()
}

/// Recursively delete the canvas's output directory.
///
/// Returns `false` when there was nothing to delete.
pub fn delete_directory(canvas: &Canvas) -> Result<bool> {
    let dir = canvas.output().directory();
    if !dir.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(dir).map_err(|e| TileError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to delete directory: {}", e),
    })?;
    Ok(true)
}

fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| TileError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}

fn encode(canvas: &Canvas, path: &Path, format: ImageFormatKind, scale: u32) -> Result<()> {
    let result = if format.keeps_alpha() {
        to_rgba_image(canvas, scale).save_with_format(path, format.image_format())
    } else {
        to_rgb_image(canvas, scale).save_with_format(path, format.image_format())
    };

    result.map_err(|e| TileError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })
}
