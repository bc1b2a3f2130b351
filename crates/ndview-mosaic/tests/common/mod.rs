//! Shared fixtures for mosaic integration tests.

use ndview_core::Image;

/// Creates a 2D `u8` image filled with one value.
#[allow(dead_code)]
pub fn constant_u8(width: usize, height: usize, value: u8) -> Image<'static> {
    Image::from_vec(&[width, height], vec![value; width * height])
        .expect("constant fixture should be valid")
}

/// Creates an image of any shape whose samples count up from `start`.
#[allow(dead_code)]
pub fn ramp_i32(dims: &[usize], start: i32) -> Image<'static> {
    let len: usize = dims.iter().product();
    let data = (0..len).map(|index| start + index as i32).collect();
    Image::from_vec(dims, data).expect("ramp fixture should be valid")
}
