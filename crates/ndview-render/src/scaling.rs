//! Display-range resolution.
//!
//! A [`ChannelBounds`] pair maps sample values linearly onto the 0..=255
//! display range of one output channel. Bounds come either from the element
//! type (`FULL`), from the samples themselves (`DATA`), or from `AUTO`, which
//! picks `FULL` for types of at most 8 bits and `DATA` for everything wider.

use log::debug;
use ndview_core::{Image, SampleClass, SampleType, Samples};
use serde::{Deserialize, Serialize};

use crate::RenderError;

/// Strategy for scaling sample intensities onto the display range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueScaling {
    /// `FULL` for narrow (<= 8 bit) types, `DATA` otherwise.
    #[default]
    Auto,
    /// Bounds of the element type, e.g. 0..=255 for `u8`.
    Full,
    /// Observed minimum and maximum of the samples.
    Data,
}

/// Linear mapping bounds for one output channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelBounds {
    /// Sample value shown at zero intensity.
    pub min: f64,
    /// Sample value shown at full intensity.
    pub max: f64,
}

impl ChannelBounds {
    /// Creates a bounds pair.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds of already-encoded 8-bit colour bytes.
    pub fn byte_range() -> Self {
        Self::new(0.0, 255.0)
    }

    /// Maps `value` to a display byte, clamping outside the bounds.
    ///
    /// With `max <= min` the mapping degenerates to a step: values above
    /// `min` are full intensity, everything else is zero. NaN maps to zero.
    pub fn map_to_byte(&self, value: f64) -> u8 {
        if value.is_nan() {
            return 0;
        }
        // Halved so the full f64 range does not overflow to infinity.
        let span = self.max / 2.0 - self.min / 2.0;
        if !(span > 0.0) {
            return if value > self.min { 255 } else { 0 };
        }
        // Endpoints first: infinite bounds or values make the quotient NaN.
        if value <= self.min {
            return 0;
        }
        if value >= self.max {
            return 255;
        }
        let scaled = ((value / 2.0 - self.min / 2.0) / span).clamp(0.0, 1.0);
        (scaled * 255.0).round() as u8
    }
}

/// Representable range of a real element type.
///
/// # Errors
/// Returns [`RenderError::UnsupportedType`] for non-real types.
pub fn full_range(sample_type: SampleType) -> Result<ChannelBounds, RenderError> {
    match (sample_type.min_value(), sample_type.max_value()) {
        (Some(min), Some(max)) => Ok(ChannelBounds::new(min, max)),
        _ => Err(RenderError::UnsupportedType(sample_type)),
    }
}

/// Observed minimum and maximum over all finite samples.
///
/// NaN and infinities are skipped. Returns `None` for storage without a
/// finite sample and for non-real storage.
pub fn data_range(samples: &Samples<'_>) -> Option<ChannelBounds> {
    let mut bounds: Option<ChannelBounds> = None;
    for index in 0..samples.len() {
        let value = samples.real(index)?;
        if !value.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            None => ChannelBounds::new(value, value),
            Some(current) => ChannelBounds::new(current.min.min(value), current.max.max(value)),
        });
    }
    bounds
}

/// Resolves one bounds pair for `image` under `policy`.
///
/// `DATA` on an image without any finite sample falls back to the full type
/// range.
///
/// # Errors
/// Returns [`RenderError::UnsupportedType`] when the image is not real-valued.
pub fn resolve_scaling(image: &Image<'_>, policy: ValueScaling) -> Result<ChannelBounds, RenderError> {
    let sample_type = image.sample_type();
    if sample_type.class() != SampleClass::Real {
        return Err(RenderError::UnsupportedType(sample_type));
    }

    let use_full = match policy {
        ValueScaling::Full => true,
        ValueScaling::Data => false,
        ValueScaling::Auto => sample_type.is_narrow(),
    };

    let bounds = if use_full {
        full_range(sample_type)?
    } else {
        match data_range(image.samples()) {
            Some(bounds) => bounds,
            None => full_range(sample_type)?,
        }
    };

    debug!(
        "resolved {policy:?} scaling for {sample_type}: min={} max={}",
        bounds.min, bounds.max
    );
    Ok(bounds)
}

/// Produces one bounds pair per channel.
///
/// Explicit `min`/`max` arrays are used verbatim and bypass scaling entirely;
/// otherwise `policy` is resolved once and replicated.
///
/// # Errors
/// Returns [`RenderError::InvalidArgument`] when the two arrays differ in
/// length or are longer than `channels`.
/// Returns [`RenderError::DimensionMismatch`] when they are shorter.
pub fn resolve_channel_bounds(
    image: &Image<'_>,
    channels: usize,
    policy: ValueScaling,
    explicit: Option<(&[f64], &[f64])>,
) -> Result<Vec<ChannelBounds>, RenderError> {
    match explicit {
        Some((min, max)) => explicit_bounds(min, max, channels),
        None => Ok(vec![resolve_scaling(image, policy)?; channels]),
    }
}

pub(crate) fn explicit_bounds(
    min: &[f64],
    max: &[f64],
    channels: usize,
) -> Result<Vec<ChannelBounds>, RenderError> {
    if min.len() != max.len() {
        return Err(RenderError::InvalidArgument(format!(
            "min has {} entries but max has {}",
            min.len(),
            max.len()
        )));
    }
    check_bounds_len(min.len(), channels)?;
    Ok(min
        .iter()
        .zip(max)
        .map(|(&min, &max)| ChannelBounds::new(min, max))
        .collect())
}

pub(crate) fn check_bounds_len(actual: usize, channels: usize) -> Result<(), RenderError> {
    if actual < channels {
        return Err(RenderError::DimensionMismatch {
            expected: channels,
            actual,
        });
    }
    if actual > channels {
        return Err(RenderError::InvalidArgument(format!(
            "clamping arrays must have one entry per channel: expected {channels}, got {actual}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Unit tests for bounds resolution.

    use ndview_core::ErrorKind;

    use super::*;

    #[test]
    fn auto_matches_full_for_narrow_types() {
        let data = [10_u8, 20, 30];
        let image = Image::from_slice(&[3], &data).expect("image should build");

        let auto = resolve_scaling(&image, ValueScaling::Auto).expect("auto should resolve");
        let full = resolve_scaling(&image, ValueScaling::Full).expect("full should resolve");
        assert_eq!(auto, full);
        assert_eq!(auto, ChannelBounds::new(0.0, 255.0));
    }

    #[test]
    fn auto_matches_data_for_wide_types() {
        let data = [139_u16, 3156, 700];
        let image = Image::from_slice(&[3], &data).expect("image should build");

        let auto = resolve_scaling(&image, ValueScaling::Auto).expect("auto should resolve");
        let observed = resolve_scaling(&image, ValueScaling::Data).expect("data should resolve");
        assert_eq!(auto, observed);
        assert_eq!(auto, ChannelBounds::new(139.0, 3156.0));
    }

    #[test]
    fn data_range_skips_nan() {
        let data = [f32::NAN, -2.5, 4.0];
        let image = Image::from_slice(&[3], &data).expect("image should build");
        assert_eq!(data_range(image.samples()), Some(ChannelBounds::new(-2.5, 4.0)));
    }

    #[test]
    fn data_on_empty_image_falls_back_to_full_range() {
        let data: [i8; 0] = [];
        let image = Image::from_slice(&[0, 4], &data).expect("image should build");
        let bounds = resolve_scaling(&image, ValueScaling::Data).expect("should resolve");
        assert_eq!(bounds, ChannelBounds::new(-128.0, 127.0));
    }

    #[test]
    fn map_to_byte_is_linear_and_clamped() {
        let bounds = ChannelBounds::new(10.0, 200.0);
        assert_eq!(bounds.map_to_byte(10.0), 0);
        assert_eq!(bounds.map_to_byte(200.0), 255);
        assert_eq!(bounds.map_to_byte(105.0), 128);
        assert_eq!(bounds.map_to_byte(-50.0), 0);
        assert_eq!(bounds.map_to_byte(1e9), 255);
        assert_eq!(bounds.map_to_byte(f64::NAN), 0);
    }

    #[test]
    fn data_range_skips_infinities() {
        let data = [f32::INFINITY, 3.0, f32::NEG_INFINITY, 9.0];
        let image = Image::from_slice(&[4], &data).expect("image should build");
        assert_eq!(data_range(image.samples()), Some(ChannelBounds::new(3.0, 9.0)));

        let only_infinite = [f64::INFINITY; 2];
        let image = Image::from_slice(&[2], &only_infinite).expect("image should build");
        assert_eq!(data_range(image.samples()), None);
    }

    #[test]
    fn endpoints_map_to_extremes_for_huge_or_infinite_bounds() {
        let huge = ChannelBounds::new(1.0, f64::from(f32::MAX));
        assert_eq!(huge.map_to_byte(f64::from(f32::MAX)), 255);
        assert_eq!(huge.map_to_byte(1.0), 0);

        let open = ChannelBounds::new(0.0, f64::INFINITY);
        assert_eq!(open.map_to_byte(f64::INFINITY), 255);
        assert_eq!(open.map_to_byte(f64::NEG_INFINITY), 0);
        assert_eq!(open.map_to_byte(5.0), 0);
    }

    #[test]
    fn degenerate_bounds_map_to_a_step() {
        let bounds = ChannelBounds::new(7.0, 7.0);
        assert_eq!(bounds.map_to_byte(7.0), 0);
        assert_eq!(bounds.map_to_byte(7.5), 255);
    }

    #[test]
    fn explicit_bounds_length_is_checked() {
        let data = [0_u8; 3];
        let image = Image::from_slice(&[3], &data).expect("image should build");

        let short = resolve_channel_bounds(&image, 3, ValueScaling::Auto, Some((&[0.0][..], &[1.0][..])))
            .expect_err("short arrays should fail");
        assert_eq!(short.kind(), ErrorKind::DimensionMismatch);

        let long = resolve_channel_bounds(
            &image,
            1,
            ValueScaling::Auto,
            Some((&[0.0, 0.0][..], &[1.0, 1.0][..])),
        )
        .expect_err("long arrays should fail");
        assert_eq!(long.kind(), ErrorKind::InvalidArgument);

        let uneven = resolve_channel_bounds(&image, 1, ValueScaling::Auto, Some((&[0.0][..], &[][..])))
            .expect_err("uneven arrays should fail");
        assert_eq!(uneven.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn explicit_bounds_bypass_scaling() {
        let data = [[1.0_f32, 2.0]; 2];
        let image = ndview_core::Image::new(
            ndview_core::Shape::new(vec![2]),
            Samples::ComplexF32(std::borrow::Cow::Borrowed(&data[..])),
        )
        .expect("image should build");

        let bounds = resolve_channel_bounds(&image, 1, ValueScaling::Data, Some((&[5.0][..], &[9.0][..])))
            .expect("explicit bounds never inspect the samples");
        assert_eq!(bounds, vec![ChannelBounds::new(5.0, 9.0)]);
    }
}
