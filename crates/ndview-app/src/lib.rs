#![warn(missing_docs)]
//! # ndview-app
//!
//! ## Purpose
//! Wires mosaic composition, rendering and encoding into the calls a
//! notebook or the `ndview` binary makes.
//!
//! ## Responsibilities
//! - Load and validate [`RenderOptions`] from JSON.
//! - Render a single image or a mosaic of images with those options.
//! - Produce the inline HTML `<img>` fragment for a mosaic.
//! - Expose the build-time version.
//!
//! ## Data flow
//! options JSON -> [`RenderOptions`] -> [`compose_mosaic`] ->
//! [`display_with`] -> [`html_img`].
//!
//! ## Ownership and lifetimes
//! Input images are borrowed for the duration of one call. The composed
//! mosaic is owned by the call and dropped once its raster exists.
//!
//! ## Error model
//! Subsystem failures are wrapped in [`AppError`]; [`AppError::kind`]
//! forwards the subsystem classification.

mod options;

use std::path::PathBuf;

use log::info;
use ndview_core::{CoreError, ErrorKind, Image};
use ndview_encode::{EncodeError, html_img};
use ndview_mosaic::{MosaicError, compose_mosaic};
use ndview_render::{Raster, RenderError, display_with};
use thiserror::Error;

pub use options::{RenderOptions, load_render_options};

/// Build-time version loaded from the root `VERSION` file.
pub const APP_VERSION: &str = env!("NDVIEW_VERSION");

/// Returns the version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Renders one image with `options`; `grid_layout` is ignored.
///
/// # Errors
/// Returns [`AppError::InvalidOptions`] for inconsistent options and
/// [`AppError::Render`] when rasterization fails.
pub fn render_image(image: &Image<'_>, options: &RenderOptions) -> Result<Raster, AppError> {
    let settings = options.display_settings(image)?;
    Ok(display_with(image, &settings)?)
}

/// Composes `images` on `options.grid_layout` and renders the mosaic.
///
/// # Errors
/// Returns [`AppError::Mosaic`] when composition fails, otherwise see
/// [`render_image`].
pub fn render_mosaic(images: &[Image<'_>], options: &RenderOptions) -> Result<Raster, AppError> {
    options.validate()?;
    let mosaic = compose_mosaic(&options.grid_layout, images)?;
    info!(
        "composed {} image(s) on grid {:?} into {:?} {}",
        images.len(),
        options.grid_layout,
        mosaic.shape().dims(),
        mosaic.sample_type()
    );
    render_image(&mosaic, options)
}

/// Renders the mosaic of `images` as an inline HTML `<img>` element.
///
/// # Errors
/// See [`render_mosaic`]; PNG failures are returned as
/// [`AppError::Encode`].
pub fn render_html(images: &[Image<'_>], options: &RenderOptions) -> Result<String, AppError> {
    let raster = render_mosaic(images, options)?;
    Ok(html_img(&raster, options.title.as_deref())?)
}

/// Synthetic three-channel 16-bit tiles for demos and smoke tests.
///
/// Tile `n` carries a horizontal ramp in red, a vertical ramp in green and a
/// constant `n`-dependent level in blue, so the tiles are distinguishable
/// once composed.
///
/// # Errors
/// Returns [`AppError::Core`] when `width * height * 3` overflows.
pub fn demo_images(count: usize, width: usize, height: usize) -> Result<Vec<Image<'static>>, AppError> {
    (0..count)
        .map(|tile| -> Result<Image<'static>, AppError> {
            let plane = width.checked_mul(height).ok_or(CoreError::Overflow)?;
            let mut data = vec![0_u16; plane.checked_mul(3).ok_or(CoreError::Overflow)?];
            for y in 0..height {
                for x in 0..width {
                    let index = y * width + x;
                    data[index] = (x * 4096 / width.max(1)) as u16;
                    data[plane + index] = (y * 4096 / height.max(1)) as u16;
                    data[2 * plane + index] = ((tile + 1) * 4096 / (count + 1)) as u16;
                }
            }
            Ok(Image::from_vec(&[width, height, 3], data)?)
        })
        .collect()
}

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Options are syntactically valid JSON but semantically inconsistent.
    #[error("invalid render options: {0}")]
    InvalidOptions(String),
    /// Options file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Options file is not valid JSON for [`RenderOptions`].
    #[error("failed to parse render options: {0}")]
    Json(#[from] serde_json::Error),
    /// Image model error.
    #[error("image model error: {0}")]
    Core(#[from] CoreError),
    /// Mosaic composition error.
    #[error("mosaic error: {0}")]
    Mosaic(#[from] MosaicError),
    /// Rendering error.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    /// Encoding error.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

impl AppError {
    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOptions(_) | Self::Io { .. } | Self::Json(_) => ErrorKind::InvalidArgument,
            Self::Core(error) => error.kind(),
            Self::Mosaic(error) => error.kind(),
            Self::Render(error) => error.kind(),
            Self::Encode(error) => error.kind(),
        }
    }
}
