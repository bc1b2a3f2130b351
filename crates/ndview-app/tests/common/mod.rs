//! Shared fixtures for app integration tests.

use std::path::PathBuf;

use ndview_core::Image;
use tempfile::TempDir;

/// Single-channel 16-bit tile filled with `value`.
#[allow(dead_code)]
pub fn constant_tile(width: usize, height: usize, value: u16) -> Image<'static> {
    Image::from_vec(&[width, height], vec![value; width * height]).expect("tile should build")
}

/// Writes `contents` to `name` inside a fresh temporary directory.
///
/// Keep the returned [`TempDir`] alive while the path is in use; dropping it
/// removes the file.
#[allow(dead_code)]
pub fn write_options_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("options file should be writable");
    (dir, path)
}
