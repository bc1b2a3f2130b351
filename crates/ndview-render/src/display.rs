//! Default display path for images without axis metadata.

use ndview_core::{Image, RealAccess, SampleClass};

use crate::RenderError;
use crate::raster::{AxisSelection, Raster, rasterize};
use crate::scaling::{ChannelBounds, ValueScaling, explicit_bounds, resolve_channel_bounds};

/// Largest third-axis extent still treated as colour channels.
pub const MAX_HEURISTIC_CHANNELS: usize = 3;

/// Guesses the channel axis from raw extents.
///
/// An image with more than two axes whose third axis has at most three
/// positions is assumed to store channels there. Larger third axes are more
/// likely Z or time. This is a best-effort guess; callers that know their
/// axes should pass an explicit [`AxisSelection`].
pub fn detect_channel_axis(dims: &[usize]) -> Option<usize> {
    (dims.len() > 2 && dims[2] <= MAX_HEURISTIC_CHANNELS).then_some(2)
}

/// X on axis 0 and Y on axis 1 where present, plus the guessed channel axis
/// for real images.
pub fn default_axes(image: &Image<'_>) -> AxisSelection {
    let num_dims = image.num_dimensions();
    let channel = match image.sample_type().class() {
        SampleClass::Real => detect_channel_axis(image.shape().dims()),
        _ => None,
    };
    AxisSelection {
        x: (num_dims > 0).then_some(0),
        y: (num_dims > 1).then_some(1),
        channel,
    }
}

/// Where per-channel display bounds come from.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsRequest {
    /// Resolve one pair from a scaling policy and replicate it.
    Scaling(ValueScaling),
    /// Use the same caller-supplied pair for every channel.
    Uniform(ChannelBounds),
    /// Use one caller-supplied pair per channel.
    PerChannel {
        /// Lower bound per channel.
        min: Vec<f64>,
        /// Upper bound per channel.
        max: Vec<f64>,
    },
}

impl Default for BoundsRequest {
    fn default() -> Self {
        Self::Scaling(ValueScaling::Auto)
    }
}

/// Full set of rendering parameters for [`display_with`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplaySettings {
    /// Axis selection; `None` uses [`default_axes`].
    pub axes: Option<AxisSelection>,
    /// Bounds source.
    pub bounds: BoundsRequest,
    /// Fixed zero-based position on the remaining axes.
    pub position: Vec<i64>,
}

/// Renders `image` with default axes and `AUTO` scaling.
///
/// # Errors
/// See [`display_with`].
pub fn display(image: &Image<'_>) -> Result<Raster, RenderError> {
    display_with(image, &DisplaySettings::default())
}

/// Renders `image`, dispatching once on its sample class.
///
/// Packed colour images always render at their stored colours; bounds
/// settings do not apply to them.
///
/// # Errors
/// Returns [`RenderError::UnsupportedType`] for complex images, before any
/// sample is read. Other errors follow [`rasterize`] and
/// [`resolve_channel_bounds`].
pub fn display_with(image: &Image<'_>, settings: &DisplaySettings) -> Result<Raster, RenderError> {
    let axes = settings.axes.unwrap_or_else(|| default_axes(image));

    match image.sample_type().class() {
        SampleClass::Complex => Err(RenderError::UnsupportedType(image.sample_type())),
        SampleClass::PackedColor => rasterize(image, axes, &[], &settings.position),
        SampleClass::Real => {
            let channels = axes.channel.map_or(1, |axis| image.dimension(axis));
            let bounds = match &settings.bounds {
                BoundsRequest::Scaling(policy) => {
                    resolve_channel_bounds(image, channels, *policy, None)?
                }
                BoundsRequest::Uniform(pair) => vec![*pair; channels],
                BoundsRequest::PerChannel { min, max } => explicit_bounds(min, max, channels)?,
            };
            rasterize(image, axes, &bounds, &settings.position)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_axis_of_three_or_fewer_is_channels() {
        assert_eq!(detect_channel_axis(&[10, 10, 3]), Some(2));
        assert_eq!(detect_channel_axis(&[10, 10, 1, 40]), Some(2));
        assert_eq!(detect_channel_axis(&[10, 10, 4]), None);
        assert_eq!(detect_channel_axis(&[10, 10]), None);
    }

    #[test]
    fn default_axes_follow_dimensionality() {
        let data = [0_u8; 4];
        let line = Image::from_slice(&[4], &data).expect("image should build");
        assert_eq!(
            default_axes(&line),
            AxisSelection {
                x: Some(0),
                y: None,
                channel: None
            }
        );

        let pixels = [0_u32; 4];
        let packed = Image::from_argb(&[2, 2, 1], &pixels).expect("image should build");
        assert_eq!(default_axes(&packed).channel, None);
    }
}
