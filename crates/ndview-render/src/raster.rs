//! Composite XY projection of an N-dimensional image onto an RGBA raster.

use log::debug;
use ndview_core::{ArgbChannels, Image, RealAccess, SampleClass};

use crate::RenderError;
use crate::color::ColorTable;
use crate::scaling::{ChannelBounds, check_bounds_len};

/// Rendered 8-bit RGBA image in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA bytes, `width * height * 4` long. Alpha is always opaque.
    pub rgba: Vec<u8>,
}

impl Raster {
    /// Returns the RGBA quadruple at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Which image axes feed the raster's X, Y and channel directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisSelection {
    /// Axis mapped to raster columns; `None` renders one column.
    pub x: Option<usize>,
    /// Axis mapped to raster rows; `None` renders one row.
    pub y: Option<usize>,
    /// Axis whose positions are composited as colour channels.
    pub channel: Option<usize>,
}

impl AxisSelection {
    /// X on axis 0, Y on axis 1, no channel compositing.
    pub fn planar() -> Self {
        Self {
            x: Some(0),
            y: Some(1),
            channel: None,
        }
    }

    /// Builds a selection from signed indices where `-1` means unused.
    ///
    /// # Errors
    /// Returns [`RenderError::InvalidArgument`] for values below `-1`.
    pub fn from_signed(x: i32, y: i32, channel: i32) -> Result<Self, RenderError> {
        Ok(Self {
            x: signed_axis("x", x)?,
            y: signed_axis("y", y)?,
            channel: signed_axis("channel", channel)?,
        })
    }

    /// Returns a copy with the channel axis replaced.
    pub fn with_channel(self, channel: Option<usize>) -> Self {
        Self { channel, ..self }
    }

    fn validate(&self, num_dims: usize) -> Result<(), RenderError> {
        let named = [("x", self.x), ("y", self.y), ("channel", self.channel)];
        for (i, (name, axis)) in named.iter().enumerate() {
            let Some(axis) = axis else { continue };
            if *axis >= num_dims {
                return Err(RenderError::InvalidArgument(format!(
                    "{name} axis {axis} is out of range for a {num_dims}-dimensional image"
                )));
            }
            if named[..i].iter().any(|(_, other)| *other == Some(*axis)) {
                return Err(RenderError::InvalidArgument(format!(
                    "axis {axis} is selected more than once"
                )));
            }
        }
        Ok(())
    }
}

fn signed_axis(name: &str, value: i32) -> Result<Option<usize>, RenderError> {
    match value {
        -1 => Ok(None),
        v if v >= 0 => Ok(Some(v as usize)),
        v => Err(RenderError::InvalidArgument(format!(
            "{name} axis must be -1 or a non-negative index, got {v}"
        ))),
    }
}

/// Renders `image` into a composite RGBA raster.
///
/// # Parameters
/// - `axes`: image axes for X, Y and channels.
/// - `bounds`: one pair per channel (exactly one without a channel axis).
/// - `position`: zero-based coordinate (relative to the image minimum) for
///   every axis not in `axes`; missing entries default to 0 and entries for
///   the selected axes are ignored.
///
/// Real images map each channel through its bounds and [`ColorTable`] and
/// sum the channel colours per pixel, saturating at 255. Packed ARGB images
/// are split into red, green and blue byte channels on a synthetic trailing
/// axis; `bounds` is then ignored and `axes.channel` must be `None`.
///
/// # Errors
/// Returns [`RenderError::UnsupportedType`] for complex images.
/// Returns [`RenderError::InvalidArgument`] for out-of-range or repeated
/// axes, out-of-range positions and too many bounds.
/// Returns [`RenderError::DimensionMismatch`] for too few bounds.
pub fn rasterize(
    image: &Image<'_>,
    axes: AxisSelection,
    bounds: &[ChannelBounds],
    position: &[i64],
) -> Result<Raster, RenderError> {
    match image.sample_type().class() {
        SampleClass::Real => project(image, axes, bounds, position),
        SampleClass::PackedColor => {
            if axes.channel.is_some() {
                return Err(RenderError::InvalidArgument(
                    "packed colour images provide their own channel axis".to_string(),
                ));
            }
            let channels = ArgbChannels::new(image)?;
            let axes = axes.with_channel(Some(channels.channel_axis()));
            project(&channels, axes, &[ChannelBounds::byte_range(); 3], position)
        }
        SampleClass::Complex => Err(RenderError::UnsupportedType(image.sample_type())),
    }
}

fn project<A: RealAccess>(
    source: &A,
    axes: AxisSelection,
    bounds: &[ChannelBounds],
    position: &[i64],
) -> Result<Raster, RenderError> {
    let num_dims = source.num_dimensions();
    axes.validate(num_dims)?;

    let extent = |axis: Option<usize>| axis.map_or(1, |axis| source.dimension(axis));
    let channel_count = extent(axes.channel);
    check_bounds_len(bounds.len(), channel_count)?;

    if position.len() > num_dims {
        return Err(RenderError::InvalidArgument(format!(
            "position has {} coordinates but image has {num_dims} dimensions",
            position.len()
        )));
    }
    let mut coord = vec![0_usize; num_dims];
    for (axis, &p) in position.iter().enumerate() {
        if [axes.x, axes.y, axes.channel].contains(&Some(axis)) {
            continue;
        }
        let dim = source.dimension(axis);
        coord[axis] = usize::try_from(p)
            .ok()
            .filter(|&c| c < dim)
            .ok_or_else(|| {
                RenderError::InvalidArgument(format!(
                    "position {p} on axis {axis} is outside 0..{dim}"
                ))
            })?;
    }

    let width = extent(axes.x);
    let height = extent(axes.y);
    let too_large = || RenderError::InvalidArgument(format!("raster {width}x{height} is too large"));
    let raster_width = u32::try_from(width).map_err(|_| too_large())?;
    let raster_height = u32::try_from(height).map_err(|_| too_large())?;
    let len = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(too_large)?;

    debug!(
        "rasterizing {width}x{height} with {channel_count} channel(s), axes={axes:?}, position={coord:?}"
    );

    let tables: Vec<ColorTable> = (0..channel_count)
        .map(|channel| ColorTable::for_channel(channel, channel_count))
        .collect();

    let mut rgba = Vec::with_capacity(len);
    for y in 0..height {
        if let Some(axis) = axes.y {
            coord[axis] = y;
        }
        for x in 0..width {
            if let Some(axis) = axes.x {
                coord[axis] = x;
            }
            let mut sum = [0_u16; 3];
            for (channel, (table, channel_bounds)) in tables.iter().zip(bounds).enumerate() {
                if let Some(axis) = axes.channel {
                    coord[axis] = channel;
                }
                let Some(value) = source.real_at(&coord) else {
                    continue;
                };
                let rgb = table.lookup(channel_bounds.map_to_byte(value));
                for (total, component) in sum.iter_mut().zip(rgb) {
                    *total += u16::from(component);
                }
            }
            rgba.extend(sum.map(|total| total.min(255) as u8));
            rgba.push(u8::MAX);
        }
    }

    Ok(Raster {
        width: raster_width,
        height: raster_height,
        rgba,
    })
}
