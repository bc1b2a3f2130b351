#![warn(missing_docs)]
//! # ndview-core
//!
//! ## Purpose
//! Defines the N-dimensional image data model shared across the `ndview`
//! workspace.
//!
//! ## Responsibilities
//! - Describe sample element types and their representable ranges.
//! - Hold typed sample storage that either borrows caller buffers or owns a
//!   freshly allocated buffer.
//! - Address samples by multi-dimensional coordinate (axis 0 varies fastest).
//! - Present packed ARGB pixels as three real-valued byte channels.
//!
//! ## Data flow
//! Callers wrap their buffers in [`Image`] values. Mosaic composition reads
//! them and allocates an owned output [`Image`]; rendering reads any
//! [`RealAccess`] implementor and emits an RGBA raster.
//!
//! ## Ownership and lifetimes
//! [`Samples`] stores each variant as a `Cow` slice. Input images borrow the
//! caller's storage (`Image<'a>`) and are never mutated; composition outputs
//! are `Image<'static>` and own their buffer.
//!
//! ## Error model
//! Shape and origin mismatches, overflowing geometry and element types that a
//! given operation cannot read are reported as [`CoreError`] values. Every
//! error in the workspace classifies itself with an [`ErrorKind`].
//!
//! ## Example
//! ```rust
//! use ndview_core::{Image, RealAccess, SampleType};
//!
//! let data: Vec<u8> = (0..6).collect();
//! let image = Image::from_slice(&[3, 2], &data).unwrap();
//! assert_eq!(image.sample_type(), SampleType::U8);
//! assert_eq!(image.real_at(&[2, 1]), Some(5.0));
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Element type of the samples held by an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleType {
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Packed `0xAARRGGBB` colour.
    Argb,
    /// Complex value with 32-bit float components.
    ComplexF32,
    /// Complex value with 64-bit float components.
    ComplexF64,
}

/// Coarse classification used to dispatch rendering once per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleClass {
    /// Scalar real-valued numeric samples.
    Real,
    /// Packed integer colour samples.
    PackedColor,
    /// Complex samples (not directly displayable).
    Complex,
}

impl SampleType {
    /// Bits per sample.
    pub fn bits(self) -> u32 {
        match self {
            Self::U8 | Self::I8 => 8,
            Self::U16 | Self::I16 => 16,
            Self::U32 | Self::I32 | Self::F32 | Self::Argb => 32,
            Self::I64 | Self::F64 | Self::ComplexF32 => 64,
            Self::ComplexF64 => 128,
        }
    }

    /// Returns the sample class of this type.
    pub fn class(self) -> SampleClass {
        match self {
            Self::Argb => SampleClass::PackedColor,
            Self::ComplexF32 | Self::ComplexF64 => SampleClass::Complex,
            _ => SampleClass::Real,
        }
    }

    /// Returns `true` for types with at most 256 representable values.
    pub fn is_narrow(self) -> bool {
        self.bits() <= 8
    }

    /// Smallest representable value, or `None` for non-real types.
    pub fn min_value(self) -> Option<f64> {
        let value = match self {
            Self::U8 | Self::U16 | Self::U32 => 0.0,
            Self::I8 => i8::MIN as f64,
            Self::I16 => i16::MIN as f64,
            Self::I32 => i32::MIN as f64,
            Self::I64 => i64::MIN as f64,
            Self::F32 => f32::MIN as f64,
            Self::F64 => f64::MIN,
            Self::Argb | Self::ComplexF32 | Self::ComplexF64 => return None,
        };
        Some(value)
    }

    /// Largest representable value, or `None` for non-real types.
    pub fn max_value(self) -> Option<f64> {
        let value = match self {
            Self::U8 => u8::MAX as f64,
            Self::I8 => i8::MAX as f64,
            Self::U16 => u16::MAX as f64,
            Self::I16 => i16::MAX as f64,
            Self::U32 => u32::MAX as f64,
            Self::I32 => i32::MAX as f64,
            Self::I64 => i64::MAX as f64,
            Self::F32 => f32::MAX as f64,
            Self::F64 => f64::MAX,
            Self::Argb | Self::ComplexF32 | Self::ComplexF64 => return None,
        };
        Some(value)
    }

    /// Short lowercase type name.
    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Argb => "argb",
            Self::ComplexF32 => "complex_f32",
            Self::ComplexF64 => "complex_f64",
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar element type that can be stored in [`Samples`] and read as `f64`.
pub trait RealSample: Copy + Default + PartialOrd + fmt::Debug + 'static {
    /// Tag of the matching [`Samples`] variant.
    const SAMPLE_TYPE: SampleType;

    /// Widens the sample to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows an `f64`, saturating at the type bounds (NaN becomes zero for
    /// integer types).
    fn from_f64(value: f64) -> Self;

    /// Pixel-wise addition used by mosaic accumulation. Integer types wrap.
    fn accumulate(self, other: Self) -> Self;

    /// Wraps a slice into the matching [`Samples`] variant.
    fn wrap(data: Cow<'_, [Self]>) -> Samples<'_>;

    /// Borrows the slice if `samples` holds this element type.
    fn slice<'s>(samples: &'s Samples<'_>) -> Option<&'s [Self]>;

    /// Mutably borrows the slice if `samples` holds this element type.
    ///
    /// Borrowed storage is copied into an owned buffer first.
    fn slice_mut<'s>(samples: &'s mut Samples<'_>) -> Option<&'s mut [Self]>;
}

macro_rules! real_sample {
    ($ty:ty, $variant:ident, |$a:ident, $b:ident| $add:expr) => {
        impl RealSample for $ty {
            const SAMPLE_TYPE: SampleType = SampleType::$variant;

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(value: f64) -> Self {
                // Float targets would otherwise overflow to infinity.
                value.clamp(<$ty>::MIN as f64, <$ty>::MAX as f64) as $ty
            }

            fn accumulate(self, other: Self) -> Self {
                let ($a, $b) = (self, other);
                $add
            }

            fn wrap(data: Cow<'_, [Self]>) -> Samples<'_> {
                Samples::$variant(data)
            }

            fn slice<'s>(samples: &'s Samples<'_>) -> Option<&'s [Self]> {
                match samples {
                    Samples::$variant(data) => Some(data.as_ref()),
                    _ => None,
                }
            }

            fn slice_mut<'s>(samples: &'s mut Samples<'_>) -> Option<&'s mut [Self]> {
                match samples {
                    Samples::$variant(data) => Some(data.to_mut().as_mut_slice()),
                    _ => None,
                }
            }
        }
    };
}

real_sample!(u8, U8, |a, b| a.wrapping_add(b));
real_sample!(i8, I8, |a, b| a.wrapping_add(b));
real_sample!(u16, U16, |a, b| a.wrapping_add(b));
real_sample!(i16, I16, |a, b| a.wrapping_add(b));
real_sample!(u32, U32, |a, b| a.wrapping_add(b));
real_sample!(i32, I32, |a, b| a.wrapping_add(b));
real_sample!(i64, I64, |a, b| a.wrapping_add(b));
real_sample!(f32, F32, |a, b| a + b);
real_sample!(f64, F64, |a, b| a + b);

/// Typed sample storage, borrowed from the caller or owned.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples<'a> {
    /// `u8` samples.
    U8(Cow<'a, [u8]>),
    /// `i8` samples.
    I8(Cow<'a, [i8]>),
    /// `u16` samples.
    U16(Cow<'a, [u16]>),
    /// `i16` samples.
    I16(Cow<'a, [i16]>),
    /// `u32` samples.
    U32(Cow<'a, [u32]>),
    /// `i32` samples.
    I32(Cow<'a, [i32]>),
    /// `i64` samples.
    I64(Cow<'a, [i64]>),
    /// `f32` samples.
    F32(Cow<'a, [f32]>),
    /// `f64` samples.
    F64(Cow<'a, [f64]>),
    /// Packed `0xAARRGGBB` pixels.
    Argb(Cow<'a, [u32]>),
    /// `(re, im)` pairs with `f32` components.
    ComplexF32(Cow<'a, [[f32; 2]]>),
    /// `(re, im)` pairs with `f64` components.
    ComplexF64(Cow<'a, [[f64; 2]]>),
}

macro_rules! each_variant {
    ($samples:expr, $data:ident => $body:expr) => {
        match $samples {
            Samples::U8($data) => $body,
            Samples::I8($data) => $body,
            Samples::U16($data) => $body,
            Samples::I16($data) => $body,
            Samples::U32($data) => $body,
            Samples::I32($data) => $body,
            Samples::I64($data) => $body,
            Samples::F32($data) => $body,
            Samples::F64($data) => $body,
            Samples::Argb($data) => $body,
            Samples::ComplexF32($data) => $body,
            Samples::ComplexF64($data) => $body,
        }
    };
}

impl<'a> Samples<'a> {
    /// Allocates `len` zero-valued samples of the given type.
    pub fn zeros(sample_type: SampleType, len: usize) -> Samples<'static> {
        match sample_type {
            SampleType::U8 => Samples::U8(Cow::Owned(vec![0; len])),
            SampleType::I8 => Samples::I8(Cow::Owned(vec![0; len])),
            SampleType::U16 => Samples::U16(Cow::Owned(vec![0; len])),
            SampleType::I16 => Samples::I16(Cow::Owned(vec![0; len])),
            SampleType::U32 => Samples::U32(Cow::Owned(vec![0; len])),
            SampleType::I32 => Samples::I32(Cow::Owned(vec![0; len])),
            SampleType::I64 => Samples::I64(Cow::Owned(vec![0; len])),
            SampleType::F32 => Samples::F32(Cow::Owned(vec![0.0; len])),
            SampleType::F64 => Samples::F64(Cow::Owned(vec![0.0; len])),
            SampleType::Argb => Samples::Argb(Cow::Owned(vec![0; len])),
            SampleType::ComplexF32 => Samples::ComplexF32(Cow::Owned(vec![[0.0; 2]; len])),
            SampleType::ComplexF64 => Samples::ComplexF64(Cow::Owned(vec![[0.0; 2]; len])),
        }
    }

    /// Element type tag.
    pub fn sample_type(&self) -> SampleType {
        match self {
            Samples::U8(_) => SampleType::U8,
            Samples::I8(_) => SampleType::I8,
            Samples::U16(_) => SampleType::U16,
            Samples::I16(_) => SampleType::I16,
            Samples::U32(_) => SampleType::U32,
            Samples::I32(_) => SampleType::I32,
            Samples::I64(_) => SampleType::I64,
            Samples::F32(_) => SampleType::F32,
            Samples::F64(_) => SampleType::F64,
            Samples::Argb(_) => SampleType::Argb,
            Samples::ComplexF32(_) => SampleType::ComplexF32,
            Samples::ComplexF64(_) => SampleType::ComplexF64,
        }
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        each_variant!(self, data => data.len())
    }

    /// Returns `true` when no samples are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the sample at `index` as `f64`.
    ///
    /// Returns `None` when out of range or when the element type is not real.
    pub fn real(&self, index: usize) -> Option<f64> {
        match self {
            Samples::U8(data) => data.get(index).map(|v| v.to_f64()),
            Samples::I8(data) => data.get(index).map(|v| v.to_f64()),
            Samples::U16(data) => data.get(index).map(|v| v.to_f64()),
            Samples::I16(data) => data.get(index).map(|v| v.to_f64()),
            Samples::U32(data) => data.get(index).map(|v| v.to_f64()),
            Samples::I32(data) => data.get(index).map(|v| v.to_f64()),
            Samples::I64(data) => data.get(index).map(|v| v.to_f64()),
            Samples::F32(data) => data.get(index).map(|v| v.to_f64()),
            Samples::F64(data) => data.get(index).copied(),
            Samples::Argb(_) | Samples::ComplexF32(_) | Samples::ComplexF64(_) => None,
        }
    }

    /// Reads the packed pixel at `index` when the storage is [`Samples::Argb`].
    pub fn argb(&self, index: usize) -> Option<u32> {
        match self {
            Samples::Argb(data) => data.get(index).copied(),
            _ => None,
        }
    }

    /// Views the samples as element type `T`.
    ///
    /// Borrows when the storage already holds `T`; otherwise converts every
    /// sample through `f64` with saturation. Returns `None` for non-real
    /// storage.
    pub fn cast<T: RealSample>(&self) -> Option<Cow<'_, [T]>> {
        if let Some(slice) = T::slice(self) {
            return Some(Cow::Borrowed(slice));
        }
        if self.sample_type().class() != SampleClass::Real {
            return None;
        }
        let converted = (0..self.len())
            .map(|index| T::from_f64(self.real(index).unwrap_or_default()))
            .collect();
        Some(Cow::Owned(converted))
    }

    /// Detaches the storage from any borrowed buffer.
    pub fn into_owned(self) -> Samples<'static> {
        match self {
            Samples::U8(data) => Samples::U8(Cow::Owned(data.into_owned())),
            Samples::I8(data) => Samples::I8(Cow::Owned(data.into_owned())),
            Samples::U16(data) => Samples::U16(Cow::Owned(data.into_owned())),
            Samples::I16(data) => Samples::I16(Cow::Owned(data.into_owned())),
            Samples::U32(data) => Samples::U32(Cow::Owned(data.into_owned())),
            Samples::I32(data) => Samples::I32(Cow::Owned(data.into_owned())),
            Samples::I64(data) => Samples::I64(Cow::Owned(data.into_owned())),
            Samples::F32(data) => Samples::F32(Cow::Owned(data.into_owned())),
            Samples::F64(data) => Samples::F64(Cow::Owned(data.into_owned())),
            Samples::Argb(data) => Samples::Argb(Cow::Owned(data.into_owned())),
            Samples::ComplexF32(data) => Samples::ComplexF32(Cow::Owned(data.into_owned())),
            Samples::ComplexF64(data) => Samples::ComplexF64(Cow::Owned(data.into_owned())),
        }
    }
}

/// Per-axis extents and origin of an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
    min: Vec<i64>,
}

impl Shape {
    /// Creates a zero-origin shape.
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        let dims = dims.into();
        let min = vec![0; dims.len()];
        Self { dims, min }
    }

    /// Creates a shape with an explicit origin.
    ///
    /// # Errors
    /// Returns [`CoreError::OriginMismatch`] when `min` and `dims` differ in
    /// length.
    pub fn with_min(dims: impl Into<Vec<usize>>, min: impl Into<Vec<i64>>) -> Result<Self, CoreError> {
        let dims = dims.into();
        let min = min.into();
        if dims.len() != min.len() {
            return Err(CoreError::OriginMismatch {
                dims: dims.len(),
                min: min.len(),
            });
        }
        Ok(Self { dims, min })
    }

    /// Number of axes.
    pub fn num_dimensions(&self) -> usize {
        self.dims.len()
    }

    /// Extent along `axis`; axes beyond the dimensionality have extent 1.
    pub fn dimension(&self, axis: usize) -> usize {
        self.dims.get(axis).copied().unwrap_or(1)
    }

    /// Minimum coordinate along `axis`; 0 beyond the dimensionality.
    pub fn min(&self, axis: usize) -> i64 {
        self.min.get(axis).copied().unwrap_or(0)
    }

    /// All axis extents.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// All axis minimums.
    pub fn mins(&self) -> &[i64] {
        &self.min
    }

    /// Total sample count.
    ///
    /// # Errors
    /// Returns [`CoreError::Overflow`] when the product overflows `usize`.
    pub fn element_count(&self) -> Result<usize, CoreError> {
        self.dims
            .iter()
            .try_fold(1_usize, |acc, &dim| acc.checked_mul(dim))
            .ok_or(CoreError::Overflow)
    }

    /// Flat index of a zero-based coordinate, axis 0 varying fastest.
    ///
    /// Missing trailing coordinates are taken as 0; extra coordinates must be
    /// 0. Returns `None` when any coordinate is out of bounds.
    pub fn linear_index(&self, coord: &[usize]) -> Option<usize> {
        if coord.iter().skip(self.dims.len()).any(|&c| c != 0) {
            return None;
        }
        let mut index = 0_usize;
        let mut stride = 1_usize;
        for (axis, &dim) in self.dims.iter().enumerate() {
            let c = coord.get(axis).copied().unwrap_or(0);
            if c >= dim {
                return None;
            }
            index += c * stride;
            stride *= dim;
        }
        Some(index)
    }
}

/// Read access to real-valued samples by zero-based coordinate.
pub trait RealAccess {
    /// Number of axes.
    fn num_dimensions(&self) -> usize;

    /// Extent along `axis` (1 beyond the dimensionality).
    fn dimension(&self, axis: usize) -> usize;

    /// Sample value at a zero-based coordinate, or `None` when out of bounds
    /// or not readable as a real value.
    fn real_at(&self, coord: &[usize]) -> Option<f64>;
}

/// N-dimensional image: a [`Shape`] plus typed [`Samples`].
#[derive(Debug, Clone, PartialEq)]
pub struct Image<'a> {
    shape: Shape,
    samples: Samples<'a>,
}

impl<'a> Image<'a> {
    /// Creates an image after validating the sample count.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidShape`] when `samples.len()` differs from
    /// the product of the extents.
    pub fn new(shape: Shape, samples: Samples<'a>) -> Result<Self, CoreError> {
        let expected = shape.element_count()?;
        if samples.len() != expected {
            return Err(CoreError::InvalidShape {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self { shape, samples })
    }

    /// Wraps a borrowed real-valued buffer with a zero origin.
    pub fn from_slice<T: RealSample>(dims: &[usize], data: &'a [T]) -> Result<Self, CoreError> {
        Self::new(Shape::new(dims), T::wrap(Cow::Borrowed(data)))
    }

    /// Wraps an owned real-valued buffer with a zero origin.
    pub fn from_vec<T: RealSample>(dims: &[usize], data: Vec<T>) -> Result<Image<'static>, CoreError> {
        Image::new(Shape::new(dims), T::wrap(Cow::Owned(data)))
    }

    /// Wraps a borrowed packed ARGB buffer with a zero origin.
    pub fn from_argb(dims: &[usize], data: &'a [u32]) -> Result<Self, CoreError> {
        Self::new(Shape::new(dims), Samples::Argb(Cow::Borrowed(data)))
    }

    /// Allocates a zero-filled image.
    pub fn zeros(sample_type: SampleType, shape: Shape) -> Result<Image<'static>, CoreError> {
        let len = shape.element_count()?;
        Ok(Image {
            shape,
            samples: Samples::zeros(sample_type, len),
        })
    }

    /// Replaces the origin, keeping extents and samples.
    ///
    /// # Errors
    /// Returns [`CoreError::OriginMismatch`] when `min` has the wrong length.
    pub fn with_min(self, min: impl Into<Vec<i64>>) -> Result<Self, CoreError> {
        let shape = Shape::with_min(self.shape.dims, min)?;
        Ok(Self {
            shape,
            samples: self.samples,
        })
    }

    /// Image geometry.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Underlying sample storage.
    pub fn samples(&self) -> &Samples<'a> {
        &self.samples
    }

    /// Mutable sample storage; borrowed buffers are copied on first write.
    pub fn samples_mut(&mut self) -> &mut Samples<'a> {
        &mut self.samples
    }

    /// Element type.
    pub fn sample_type(&self) -> SampleType {
        self.samples.sample_type()
    }

    /// Minimum coordinate along `axis`.
    pub fn min(&self, axis: usize) -> i64 {
        self.shape.min(axis)
    }

    /// Reads a real sample by absolute coordinate, honouring the origin.
    pub fn get_real(&self, position: &[i64]) -> Option<f64> {
        let mut coord = Vec::with_capacity(position.len());
        for (axis, &p) in position.iter().enumerate() {
            let offset = p.checked_sub(self.shape.min(axis))?;
            coord.push(usize::try_from(offset).ok()?);
        }
        self.real_at(&coord)
    }

    /// Detaches the image from borrowed storage.
    pub fn into_owned(self) -> Image<'static> {
        Image {
            shape: self.shape,
            samples: self.samples.into_owned(),
        }
    }
}

impl RealAccess for Image<'_> {
    fn num_dimensions(&self) -> usize {
        self.shape.num_dimensions()
    }

    fn dimension(&self, axis: usize) -> usize {
        self.shape.dimension(axis)
    }

    fn real_at(&self, coord: &[usize]) -> Option<f64> {
        self.shape
            .linear_index(coord)
            .and_then(|index| self.samples.real(index))
    }
}

/// Number of colour channels exposed by [`ArgbChannels`].
pub const ARGB_CHANNEL_COUNT: usize = 3;

/// Presents a packed ARGB image as 8-bit samples with an extra trailing
/// channel axis of size 3 (red, green, blue). Alpha is ignored.
#[derive(Debug, Clone, Copy)]
pub struct ArgbChannels<'i, 'a> {
    image: &'i Image<'a>,
}

impl<'i, 'a> ArgbChannels<'i, 'a> {
    /// Wraps a packed-colour image.
    ///
    /// # Errors
    /// Returns [`CoreError::UnsupportedType`] when the image is not
    /// [`SampleType::Argb`].
    pub fn new(image: &'i Image<'a>) -> Result<Self, CoreError> {
        if image.sample_type() != SampleType::Argb {
            return Err(CoreError::UnsupportedType(image.sample_type()));
        }
        Ok(Self { image })
    }

    /// Index of the synthetic channel axis.
    pub fn channel_axis(&self) -> usize {
        self.image.num_dimensions()
    }
}

impl RealAccess for ArgbChannels<'_, '_> {
    fn num_dimensions(&self) -> usize {
        self.image.num_dimensions() + 1
    }

    fn dimension(&self, axis: usize) -> usize {
        if axis == self.channel_axis() {
            ARGB_CHANNEL_COUNT
        } else {
            self.image.shape().dimension(axis)
        }
    }

    fn real_at(&self, coord: &[usize]) -> Option<f64> {
        let channel_axis = self.channel_axis();
        let channel = coord.get(channel_axis).copied().unwrap_or(0);
        if channel >= ARGB_CHANNEL_COUNT || coord.len() > channel_axis + 1 {
            return None;
        }
        let spatial = &coord[..coord.len().min(channel_axis)];
        let index = self.image.shape().linear_index(spatial)?;
        let pixel = self.image.samples().argb(index)?;
        let shift = 16 - 8 * channel as u32;
        Some(f64::from((pixel >> shift) & 0xff))
    }
}

/// Error classification shared by every crate in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Caller supplied an invalid argument.
    InvalidArgument,
    /// Sample element type cannot be handled by the operation.
    UnsupportedType,
    /// An array is shorter than the channel or dimension count it describes.
    DimensionMismatch,
}

/// Error type for image model validation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Sample count does not match declared geometry.
    #[error("invalid image shape: expected {expected} samples, got {actual}")]
    InvalidShape {
        /// Product of the declared extents.
        expected: usize,
        /// Actual sample count.
        actual: usize,
    },
    /// Origin vector length differs from dimensionality.
    #[error("origin has {min} coordinates but image has {dims} dimensions")]
    OriginMismatch {
        /// Number of extents.
        dims: usize,
        /// Number of origin coordinates.
        min: usize,
    },
    /// Geometry overflowed `usize`.
    #[error("image geometry overflow")]
    Overflow,
    /// Operation cannot read this element type.
    #[error("unsupported sample type: {0}")]
    UnsupportedType(SampleType),
}

impl CoreError {
    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidShape { .. } | Self::Overflow => ErrorKind::InvalidArgument,
            Self::OriginMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::UnsupportedType(_) => ErrorKind::UnsupportedType,
        }
    }
}
