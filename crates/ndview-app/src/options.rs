//! JSON render options and their translation into display settings.

use std::fs;
use std::path::Path;

use ndview_core::Image;
use ndview_render::{
    AxisSelection, BoundsRequest, ChannelBounds, DisplaySettings, ValueScaling, default_axes,
};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Caller-facing rendering options, loaded from JSON.
///
/// Every field is optional in the file. Axis fields use `-1` for "unused"
/// and fall back to the default axes when absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Mosaic grid; empty places only the first image.
    pub grid_layout: Vec<i64>,
    /// Axis rendered horizontally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<i32>,
    /// Axis rendered vertically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<i32>,
    /// Axis composited as colour channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_axis: Option<i32>,
    /// Scaling policy used when no explicit bounds are given.
    pub scaling: ValueScaling,
    /// Explicit lower bound per channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_channel_min: Option<Vec<f64>>,
    /// Explicit upper bound per channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_channel_max: Option<Vec<f64>>,
    /// Lower bound applied to every channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniform_min: Option<f64>,
    /// Upper bound applied to every channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniform_max: Option<f64>,
    /// Zero-based position on the non-displayed axes.
    pub position: Vec<i64>,
    /// Text for the `alt` and `title` attributes of the HTML output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RenderOptions {
    /// Parses and validates options from a JSON document.
    ///
    /// # Errors
    /// Returns [`AppError::Json`] for malformed JSON or unknown fields and
    /// [`AppError::InvalidOptions`] when [`RenderOptions::validate`] fails.
    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let options: Self = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks field combinations that the JSON shape alone cannot express.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidOptions`] when a grid entry is not
    /// positive, an axis is below `-1`, a bounds pair is half-specified, the
    /// per-channel arrays differ in length, or both bounds forms are given.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some((axis, value)) = self
            .grid_layout
            .iter()
            .enumerate()
            .find(|(_, value)| **value <= 0)
        {
            return Err(invalid(format!(
                "grid_layout[{axis}] must be positive, got {value}"
            )));
        }

        for (name, axis) in [("x_axis", self.x_axis), ("y_axis", self.y_axis), ("c_axis", self.c_axis)] {
            if let Some(value) = axis.filter(|value| *value < -1) {
                return Err(invalid(format!("{name} must be -1 or an axis index, got {value}")));
            }
        }

        let per_channel = match (&self.per_channel_min, &self.per_channel_max) {
            (Some(min), Some(max)) if min.len() != max.len() => {
                return Err(invalid(format!(
                    "per_channel_min has {} entries but per_channel_max has {}",
                    min.len(),
                    max.len()
                )));
            }
            (Some(_), Some(_)) => true,
            (None, None) => false,
            _ => {
                return Err(invalid(
                    "per_channel_min and per_channel_max must be given together",
                ));
            }
        };

        let uniform = match (self.uniform_min, self.uniform_max) {
            (Some(_), Some(_)) => true,
            (None, None) => false,
            _ => return Err(invalid("uniform_min and uniform_max must be given together")),
        };

        if per_channel && uniform {
            return Err(invalid("per-channel and uniform bounds are mutually exclusive"));
        }
        Ok(())
    }

    /// Bounds source selected by these options.
    pub fn bounds_request(&self) -> BoundsRequest {
        match (
            &self.per_channel_min,
            &self.per_channel_max,
            self.uniform_min,
            self.uniform_max,
        ) {
            (Some(min), Some(max), _, _) => BoundsRequest::PerChannel {
                min: min.clone(),
                max: max.clone(),
            },
            (_, _, Some(min), Some(max)) => BoundsRequest::Uniform(ChannelBounds::new(min, max)),
            _ => BoundsRequest::Scaling(self.scaling),
        }
    }

    /// Display settings for `image`, filling unset axes from
    /// [`default_axes`].
    ///
    /// # Errors
    /// Returns [`AppError::InvalidOptions`] when validation fails.
    pub fn display_settings(&self, image: &Image<'_>) -> Result<DisplaySettings, AppError> {
        self.validate()?;
        let defaults = default_axes(image);
        let axes = AxisSelection {
            x: override_axis(self.x_axis, defaults.x),
            y: override_axis(self.y_axis, defaults.y),
            channel: override_axis(self.c_axis, defaults.channel),
        };
        Ok(DisplaySettings {
            axes: Some(axes),
            bounds: self.bounds_request(),
            position: self.position.clone(),
        })
    }
}

fn override_axis(value: Option<i32>, default: Option<usize>) -> Option<usize> {
    match value {
        None => default,
        Some(value) => usize::try_from(value).ok(),
    }
}

fn invalid(message: impl Into<String>) -> AppError {
    AppError::InvalidOptions(message.into())
}

/// Reads render options from a JSON file.
///
/// # Errors
/// Returns [`AppError::Io`] when the file cannot be read, otherwise see
/// [`RenderOptions::from_json_str`].
pub fn load_render_options(path: &Path) -> Result<RenderOptions, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    RenderOptions::from_json_str(&raw)
}
