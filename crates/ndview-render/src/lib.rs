#![warn(missing_docs)]
//! # ndview-render
//!
//! ## Purpose
//! Turns a window of N-dimensional numeric samples into an 8-bit RGBA raster.
//!
//! ## Responsibilities
//! - Resolve per-channel display bounds from a [`ValueScaling`] policy or
//!   from caller-supplied bounds ([`scaling`]).
//! - Build one [`ColorTable`] per channel: grayscale for a single channel,
//!   distinct hues otherwise ([`color`]).
//! - Project the X/Y(/channel) axes of an image at a fixed position on every
//!   other axis and blend channels additively ([`raster`]).
//! - Pick sensible axes for images that carry no axis metadata ([`display`]).
//!
//! ## Data flow
//! [`Image`](ndview_core::Image) -> [`resolve_channel_bounds`] ->
//! [`rasterize`] -> [`Raster`], or all of it at once through [`display`].
//!
//! ## Ownership and lifetimes
//! Images are borrowed read-only; every call allocates a fresh [`Raster`].
//! Nothing is cached between calls.
//!
//! ## Error model
//! Bad axis selections, positions and bounds arrays fail with
//! [`RenderError`] before the raster is allocated. Element types that are
//! neither real nor packed colour fail with [`RenderError::UnsupportedType`].

pub mod color;
pub mod display;
pub mod raster;
pub mod scaling;

use ndview_core::{CoreError, ErrorKind, SampleType};
use thiserror::Error;

pub use color::{ColorTable, channel_color};
pub use display::{BoundsRequest, DisplaySettings, default_axes, detect_channel_axis, display, display_with};
pub use raster::{AxisSelection, Raster, rasterize};
pub use scaling::{ChannelBounds, ValueScaling, data_range, full_range, resolve_channel_bounds, resolve_scaling};

/// Error type for scaling resolution and rasterization.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Axis, position or bounds argument is invalid.
    #[error("invalid render argument: {0}")]
    InvalidArgument(String),
    /// Element type is neither real-valued nor packed colour.
    #[error("unsupported image type: {0}")]
    UnsupportedType(SampleType),
    /// A bounds array is shorter than the channel count.
    #[error("expected {expected} channel bounds, got {actual}")]
    DimensionMismatch {
        /// Required entries.
        expected: usize,
        /// Supplied entries.
        actual: usize,
    },
    /// Image model error.
    #[error("image model error: {0}")]
    Core(#[from] CoreError),
}

impl RenderError {
    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::UnsupportedType(_) => ErrorKind::UnsupportedType,
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::Core(error) => error.kind(),
        }
    }
}
