//! Per-channel colour lookup tables.

/// 256-entry lookup from a display byte to an RGB triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<[u8; 3]>,
}

impl ColorTable {
    /// Linear ramp from black to `color`.
    pub fn ramp(color: [u8; 3]) -> Self {
        let entries = (0..=255_u16)
            .map(|level| color.map(|c| ((u16::from(c) * level + 127) / 255) as u8))
            .collect();
        Self { entries }
    }

    /// Black-to-white ramp.
    pub fn grays() -> Self {
        Self::ramp([255, 255, 255])
    }

    /// Table for `channel` out of `channel_count` composited channels.
    pub fn for_channel(channel: usize, channel_count: usize) -> Self {
        Self::ramp(channel_color(channel, channel_count))
    }

    /// Colour for display byte `level`.
    pub fn lookup(&self, level: u8) -> [u8; 3] {
        self.entries[usize::from(level)]
    }

    /// Colour for an intensity in `[0, 1]`; values outside are clamped.
    pub fn lookup_unit(&self, intensity: f64) -> [u8; 3] {
        let level = (intensity.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.lookup(level)
    }
}

/// Full-intensity colour of one channel.
///
/// A single channel is white (grayscale). Three channels are red, green and
/// blue. Any other count spreads hues evenly from red (0 degrees) to blue
/// (240 degrees), which agrees with the three-channel palette.
pub fn channel_color(channel: usize, channel_count: usize) -> [u8; 3] {
    match channel_count {
        0 | 1 => [255, 255, 255],
        3 => match channel {
            0 => [255, 0, 0],
            1 => [0, 255, 0],
            _ => [0, 0, 255],
        },
        count => {
            let position = channel.min(count - 1) as f64 / (count - 1) as f64;
            hue_to_rgb(240.0 * position)
        }
    }
}

/// Fully saturated, full-value colour at `hue` degrees.
fn hue_to_rgb(hue: f64) -> [u8; 3] {
    let sector = (hue / 60.0).rem_euclid(6.0);
    let rising = 1.0 - ((sector % 2.0) - 1.0).abs();
    let (r, g, b) = match sector as u32 {
        0 => (1.0, rising, 0.0),
        1 => (rising, 1.0, 0.0),
        2 => (0.0, 1.0, rising),
        3 => (0.0, rising, 1.0),
        4 => (rising, 0.0, 1.0),
        _ => (1.0, 0.0, rising),
    };
    [r, g, b].map(|c: f64| (c * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grays_is_identity_on_every_component() {
        let table = ColorTable::grays();
        for level in 0..=255_u8 {
            assert_eq!(table.lookup(level), [level; 3]);
        }
    }

    #[test]
    fn three_channels_use_primaries() {
        assert_eq!(channel_color(0, 3), [255, 0, 0]);
        assert_eq!(channel_color(1, 3), [0, 255, 0]);
        assert_eq!(channel_color(2, 3), [0, 0, 255]);
    }

    #[test]
    fn other_counts_interpolate_hue_from_red_to_blue() {
        assert_eq!(channel_color(0, 2), [255, 0, 0]);
        assert_eq!(channel_color(1, 2), [0, 0, 255]);
        assert_eq!(channel_color(2, 5), [0, 255, 0]);
        assert_eq!(channel_color(1, 5), [255, 255, 0]);
        assert_eq!(channel_color(3, 5), [0, 255, 255]);
    }

    #[test]
    fn ramp_scales_towards_color() {
        let table = ColorTable::ramp([255, 0, 128]);
        assert_eq!(table.lookup(0), [0, 0, 0]);
        assert_eq!(table.lookup(255), [255, 0, 128]);
        assert_eq!(table.lookup_unit(0.5), [128, 0, 64]);
    }
}
