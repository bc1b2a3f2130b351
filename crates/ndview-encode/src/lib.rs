#![warn(missing_docs)]
//! # ndview-encode
//!
//! ## Purpose
//! Serializes rendered rasters for notebooks and web pages.
//!
//! ## Responsibilities
//! - Encode a [`Raster`] as PNG and decode it back.
//! - Wrap the PNG as base64 inside an inline `<img>` element.
//! - Compute a stable content fingerprint for a raster.
//!
//! ## Data flow
//! [`Raster`] -> [`encode_png`] -> [`base64_png`] -> [`html_img`].
//!
//! ## Ownership and lifetimes
//! Rasters are borrowed; every call returns freshly owned bytes or strings.
//!
//! ## Error model
//! Rasters whose buffer disagrees with their geometry, or that have no
//! pixels, fail with [`EncodeError`] before the codec runs. Codec failures
//! are wrapped unchanged.

use std::io::Cursor;

use base64::Engine as _;
use image::{ImageFormat, RgbaImage};
use log::debug;
use maud::html;
use ndview_core::ErrorKind;
use ndview_render::Raster;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Prefix of the data URI embedded by [`html_img`].
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;charset=utf-8;base64,";

/// Error type for raster encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel buffer length does not match `width * height * 4`.
    #[error("raster {width}x{height} needs {expected} bytes, got {actual}")]
    InvalidRaster {
        /// Raster width.
        width: u32,
        /// Raster height.
        height: u32,
        /// Required buffer length.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// PNG cannot represent a raster without pixels.
    #[error("cannot encode an empty {width}x{height} raster")]
    EmptyRaster {
        /// Raster width.
        width: u32,
        /// Raster height.
        height: u32,
    },
    /// PNG codec failure.
    #[error("png codec failed: {0}")]
    Codec(#[from] image::ImageError),
}

impl EncodeError {
    /// Returns the error classification.
    ///
    /// Every variant maps to [`ErrorKind::InvalidArgument`]. Geometry
    /// variants describe a malformed raster. [`EncodeError::Codec`] keeps its
    /// own variant for callers that need the codec detail; its only inputs
    /// are the caller's raster or PNG bytes, so it is classified with them.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRaster { .. } | Self::EmptyRaster { .. } | Self::Codec(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

fn to_rgba_image(raster: &Raster) -> Result<RgbaImage, EncodeError> {
    if raster.width == 0 || raster.height == 0 {
        return Err(EncodeError::EmptyRaster {
            width: raster.width,
            height: raster.height,
        });
    }
    let expected = (raster.width as usize)
        .checked_mul(raster.height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .unwrap_or(usize::MAX);
    let invalid = || EncodeError::InvalidRaster {
        width: raster.width,
        height: raster.height,
        expected,
        actual: raster.rgba.len(),
    };
    if raster.rgba.len() != expected {
        return Err(invalid());
    }
    RgbaImage::from_raw(raster.width, raster.height, raster.rgba.clone()).ok_or_else(invalid)
}

/// Encodes `raster` as an RGBA PNG.
///
/// # Errors
/// Returns [`EncodeError`] for inconsistent or empty rasters and codec
/// failures.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, EncodeError> {
    let image = to_rgba_image(raster)?;
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    debug!(
        "encoded {}x{} raster as {} png bytes",
        raster.width,
        raster.height,
        bytes.len()
    );
    Ok(bytes)
}

/// Decodes PNG bytes into an RGBA raster.
///
/// # Errors
/// Returns [`EncodeError::Codec`] when `bytes` is not a readable PNG.
pub fn decode_png(bytes: &[u8]) -> Result<Raster, EncodeError> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
    Ok(Raster {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

/// PNG-encodes `raster` and returns it as standard base64.
///
/// # Errors
/// See [`encode_png`].
pub fn base64_png(raster: &Raster) -> Result<String, EncodeError> {
    let png = encode_png(raster)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(png))
}

/// Inline HTML `<img>` element showing `raster`.
///
/// `title` becomes both the `alt` and `title` attributes, escaped by the
/// template. Without a title neither attribute is written.
///
/// # Errors
/// See [`encode_png`].
pub fn html_img(raster: &Raster, title: Option<&str>) -> Result<String, EncodeError> {
    let data_uri = format!("{PNG_DATA_URI_PREFIX}{}", base64_png(raster)?);
    let markup = html! {
        img src=(data_uri) alt=[title] title=[title];
    };
    Ok(markup.into_string())
}

/// Lowercase hex SHA-256 over the raster geometry and pixels.
///
/// Identical rasters always share a fingerprint; rasters with the same bytes
/// but a different shape do not.
pub fn fingerprint(raster: &Raster) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raster.width.to_le_bytes());
    hasher.update(raster.height.to_le_bytes());
    hasher.update(&raster.rgba);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Raster {
        Raster {
            width: 2,
            height: 1,
            rgba: vec![255, 0, 0, 255, 0, 0, 255, 255],
        }
    }

    #[test]
    fn html_img_escapes_title_markup() {
        let html = html_img(&checker(), Some(r#"a<b> & "c""#)).expect("html should render");
        assert!(html.starts_with(&format!("<img src=\"{PNG_DATA_URI_PREFIX}")));
        assert!(html.contains(r#"alt="a&lt;b&gt; &amp; &quot;c&quot;""#));
        assert!(html.contains(r#"title="a&lt;b&gt; &amp; &quot;c&quot;""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn mismatched_buffer_is_rejected() {
        let raster = Raster {
            width: 2,
            height: 2,
            rgba: vec![0; 4],
        };
        let error = encode_png(&raster).expect_err("short buffer should fail");
        assert!(matches!(error, EncodeError::InvalidRaster { expected: 16, actual: 4, .. }));
    }

    #[test]
    fn empty_raster_is_rejected() {
        let raster = Raster {
            width: 0,
            height: 3,
            rgba: Vec::new(),
        };
        assert!(matches!(encode_png(&raster), Err(EncodeError::EmptyRaster { .. })));
    }

    #[test]
    fn fingerprint_depends_on_geometry() {
        let wide = checker();
        let tall = Raster {
            width: 1,
            height: 2,
            rgba: wide.rgba.clone(),
        };
        assert_eq!(fingerprint(&wide), fingerprint(&checker()));
        assert_ne!(fingerprint(&wide), fingerprint(&tall));
        assert_eq!(fingerprint(&wide).len(), 64);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let error = decode_png(b"not a png").expect_err("garbage should fail");
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }
}
