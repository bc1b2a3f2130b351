#![warn(missing_docs)]
//! # ndview-mosaic
//!
//! ## Purpose
//! Tiles a list of differently sized N-dimensional images onto a regular
//! (hyper-)rectangular grid and sums them into one mosaic image.
//!
//! ## Responsibilities
//! - Pad a requested grid layout to the dimensionality of the inputs.
//! - Assign every input image a cell by mixed-radix decomposition of its
//!   position in the input list (axis 0 varies fastest).
//! - Size every grid line to the largest image placed on it and derive
//!   per-line offsets.
//! - Accumulate each placed, zero-padded image into a fresh output buffer.
//!
//! ## Data flow
//! `grid_layout` + images -> [`plan_mosaic`] -> [`MosaicPlan`] ->
//! [`compose_mosaic`] -> owned [`Image`] handed to the renderer.
//!
//! ## Ownership and lifetimes
//! Input images are borrowed read-only. The mosaic owns its buffer, so it
//! outlives the input list.
//!
//! ## Error model
//! An empty image list, a non-positive grid entry or a non-real element type
//! fail with [`MosaicError`]. Images that do not fit on the grid are not an
//! error; they are dropped.
//!
//! ## Accumulation notes
//! Placement sums samples instead of overwriting them. Integer types wrap on
//! overflow. Images whose element type differs from the first image are cast
//! into the first image's type, saturating at its bounds.

use log::debug;
use ndview_core::{CoreError, ErrorKind, Image, RealSample, SampleClass, SampleType, Shape};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Requested number of cells per mosaic axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    cells: Vec<usize>,
}

impl GridLayout {
    /// Creates a validated grid layout.
    ///
    /// # Errors
    /// Returns [`MosaicError::InvalidGridAxis`] when any entry is not
    /// strictly positive.
    pub fn new(layout: &[i64]) -> Result<Self, MosaicError> {
        let mut cells = Vec::with_capacity(layout.len());
        for (axis, &value) in layout.iter().enumerate() {
            if value <= 0 {
                return Err(MosaicError::InvalidGridAxis { axis, value });
            }
            let count = usize::try_from(value).map_err(|_| MosaicError::Overflow)?;
            cells.push(count);
        }
        Ok(Self { cells })
    }

    /// Declared cell counts.
    pub fn axes(&self) -> &[usize] {
        &self.cells
    }

    /// Effective grid for `num_dims` axes; undeclared axes get one cell.
    pub fn padded(&self, num_dims: usize) -> Vec<usize> {
        (0..num_dims)
            .map(|axis| self.cells.get(axis).copied().unwrap_or(1))
            .collect()
    }
}

/// Mixed-radix decomposition of `index` against `grid`.
///
/// Component `d` is `index mod grid[d]` with the quotient carried to the next
/// axis. The last component absorbs whatever remains, so indices past the end
/// of the grid produce an out-of-range last component rather than wrapping.
pub fn cell_index(index: usize, grid: &[usize]) -> Vec<usize> {
    let mut remainder = index;
    let mut cell = Vec::with_capacity(grid.len());
    for (axis, &count) in grid.iter().enumerate() {
        if axis + 1 == grid.len() {
            cell.push(remainder);
        } else {
            cell.push(remainder % count);
            remainder /= count;
        }
    }
    cell
}

/// Returns the cell of image `index`, or `None` when it falls off the grid.
fn locate(index: usize, grid: &[usize]) -> Option<Vec<usize>> {
    if grid.is_empty() {
        return (index == 0).then(Vec::new);
    }
    let cell = cell_index(index, grid);
    let within = cell.iter().zip(grid).all(|(&c, &count)| c < count);
    within.then_some(cell)
}

/// Placement of every input image plus the mosaic geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicPlan {
    /// Effective grid, one cell count per mosaic axis.
    pub grid: Vec<usize>,
    /// Cell of each input image in input order; `None` for dropped images.
    pub cells: Vec<Option<Vec<usize>>>,
    /// `extents[d][g]`: largest extent along axis `d` among images on line `g`.
    pub extents: Vec<Vec<usize>>,
    /// `offsets[d][g]`: prefix sums of `extents[d]`, `grid[d] + 1` entries.
    pub offsets: Vec<Vec<usize>>,
    /// Total mosaic extent per axis.
    pub mosaic_dims: Vec<usize>,
}

impl MosaicPlan {
    /// Number of images that received a cell.
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of images dropped because the grid has no room for them.
    pub fn dropped_count(&self) -> usize {
        self.cells.len() - self.placed_count()
    }

    /// Origin of image `index` inside the mosaic, or `None` if dropped.
    pub fn placement_offset(&self, index: usize) -> Option<Vec<usize>> {
        let cell = self.cells.get(index)?.as_ref()?;
        Some(
            cell.iter()
                .enumerate()
                .map(|(axis, &line)| self.offsets[axis][line])
                .collect(),
        )
    }
}

/// Computes cell assignments, line extents, offsets and the mosaic box.
///
/// The mosaic has `max(layout axes, largest image dimensionality)` axes.
/// Images with fewer axes count as extent 1 along the missing ones.
///
/// # Errors
/// Returns [`MosaicError::EmptyImageList`] when `shapes` is empty.
pub fn plan_mosaic(layout: &GridLayout, shapes: &[&Shape]) -> Result<MosaicPlan, MosaicError> {
    if shapes.is_empty() {
        return Err(MosaicError::EmptyImageList);
    }

    let image_dims = shapes
        .iter()
        .map(|shape| shape.num_dimensions())
        .max()
        .unwrap_or(0);
    let num_dims = image_dims.max(layout.axes().len());
    let grid = layout.padded(num_dims);

    // Assignment is positional; it must run in input order.
    let cells: Vec<Option<Vec<usize>>> = (0..shapes.len())
        .map(|index| locate(index, &grid))
        .collect();

    let mut extents: Vec<Vec<usize>> = grid.iter().map(|&count| vec![0; count]).collect();
    for (shape, cell) in shapes.iter().zip(&cells) {
        let Some(cell) = cell else { continue };
        for (axis, &line) in cell.iter().enumerate() {
            let extent = &mut extents[axis][line];
            *extent = (*extent).max(shape.dimension(axis));
        }
    }

    let mut offsets = Vec::with_capacity(num_dims);
    for axis_extents in &extents {
        let mut axis_offsets = Vec::with_capacity(axis_extents.len() + 1);
        let mut total = 0_usize;
        axis_offsets.push(total);
        for &extent in axis_extents {
            total = total.checked_add(extent).ok_or(MosaicError::Overflow)?;
            axis_offsets.push(total);
        }
        offsets.push(axis_offsets);
    }

    let mosaic_dims = offsets
        .iter()
        .map(|axis_offsets| axis_offsets.last().copied().unwrap_or(0))
        .collect();

    Ok(MosaicPlan {
        grid,
        cells,
        extents,
        offsets,
        mosaic_dims,
    })
}

/// Composes `images` into one mosaic laid out by `grid_layout`.
///
/// # Parameters
/// - `grid_layout`: cells per axis; missing trailing axes default to 1.
/// - `images`: inputs in placement order. Images past the last grid cell are
///   dropped without being read.
///
/// The output element type is that of the first image and every sample not
/// covered by a placed image is zero.
///
/// # Errors
/// Returns [`MosaicError::EmptyImageList`] when `images` is empty.
/// Returns [`MosaicError::InvalidGridAxis`] for non-positive layout entries.
/// Returns [`MosaicError::UnsupportedType`] when the first image or any
/// placed image is not real-valued.
pub fn compose_mosaic(grid_layout: &[i64], images: &[Image<'_>]) -> Result<Image<'static>, MosaicError> {
    let layout = GridLayout::new(grid_layout)?;
    let shapes: Vec<&Shape> = images.iter().map(Image::shape).collect();
    let plan = plan_mosaic(&layout, &shapes)?;

    let sample_type = images[0].sample_type();
    if sample_type.class() != SampleClass::Real {
        return Err(MosaicError::UnsupportedType(sample_type));
    }
    for (image, cell) in images.iter().zip(&plan.cells) {
        if cell.is_some() && image.sample_type().class() != SampleClass::Real {
            return Err(MosaicError::UnsupportedType(image.sample_type()));
        }
    }

    debug!(
        "mosaic grid={:?} box={:?} placed={} dropped={} type={}",
        plan.grid,
        plan.mosaic_dims,
        plan.placed_count(),
        plan.dropped_count(),
        sample_type
    );

    let mut mosaic = Image::zeros(sample_type, Shape::new(plan.mosaic_dims.clone()))?;
    match sample_type {
        SampleType::U8 => accumulate_all::<u8>(&mut mosaic, images, &plan)?,
        SampleType::I8 => accumulate_all::<i8>(&mut mosaic, images, &plan)?,
        SampleType::U16 => accumulate_all::<u16>(&mut mosaic, images, &plan)?,
        SampleType::I16 => accumulate_all::<i16>(&mut mosaic, images, &plan)?,
        SampleType::U32 => accumulate_all::<u32>(&mut mosaic, images, &plan)?,
        SampleType::I32 => accumulate_all::<i32>(&mut mosaic, images, &plan)?,
        SampleType::I64 => accumulate_all::<i64>(&mut mosaic, images, &plan)?,
        SampleType::F32 => accumulate_all::<f32>(&mut mosaic, images, &plan)?,
        SampleType::F64 => accumulate_all::<f64>(&mut mosaic, images, &plan)?,
        other => return Err(MosaicError::UnsupportedType(other)),
    }

    Ok(mosaic)
}

fn accumulate_all<T: RealSample>(
    mosaic: &mut Image<'static>,
    images: &[Image<'_>],
    plan: &MosaicPlan,
) -> Result<(), MosaicError> {
    let mosaic_dims = plan.mosaic_dims.clone();
    let target =
        T::slice_mut(mosaic.samples_mut()).ok_or(MosaicError::UnsupportedType(T::SAMPLE_TYPE))?;

    for (index, image) in images.iter().enumerate() {
        let Some(offset) = plan.placement_offset(index) else {
            debug!("mosaic dropped image {index}: no grid cell left");
            continue;
        };
        let source = image
            .samples()
            .cast::<T>()
            .ok_or(MosaicError::UnsupportedType(image.sample_type()))?;
        accumulate_translated(target, &mosaic_dims, &source, image.shape().dims(), &offset);
    }
    Ok(())
}

/// Adds `source` into `target` with its zero-min origin moved to `offset`.
///
/// Samples that land outside `target_dims` are cropped.
fn accumulate_translated<T: RealSample>(
    target: &mut [T],
    target_dims: &[usize],
    source: &[T],
    source_dims: &[usize],
    offset: &[usize],
) {
    let mut coord = vec![0_usize; source_dims.len()];
    for &value in source {
        let mut index = 0_usize;
        let mut stride = 1_usize;
        let mut inside = true;
        for (axis, &dim) in target_dims.iter().enumerate() {
            let position = offset[axis] + coord.get(axis).copied().unwrap_or(0);
            if position >= dim {
                inside = false;
                break;
            }
            index += position * stride;
            stride *= dim;
        }
        if inside {
            target[index] = target[index].accumulate(value);
        }
        advance(&mut coord, source_dims);
    }
}

/// Steps `coord` to the next position in flat order (axis 0 fastest).
fn advance(coord: &mut [usize], dims: &[usize]) {
    for (c, &dim) in coord.iter_mut().zip(dims) {
        *c += 1;
        if *c < dim {
            return;
        }
        *c = 0;
    }
}

/// Error type for mosaic composition.
#[derive(Debug, Error)]
pub enum MosaicError {
    /// No images were supplied.
    #[error("mosaic requires at least one image")]
    EmptyImageList,
    /// A grid layout entry is zero or negative.
    #[error("grid axis {axis} must be positive, got {value}")]
    InvalidGridAxis {
        /// Offending axis.
        axis: usize,
        /// Offending cell count.
        value: i64,
    },
    /// Element type cannot be accumulated.
    #[error("cannot compose images of sample type {0}")]
    UnsupportedType(SampleType),
    /// Mosaic geometry overflowed `usize`.
    #[error("mosaic dimension overflow")]
    Overflow,
    /// Image model error while allocating the mosaic.
    #[error("image model error: {0}")]
    Core(#[from] CoreError),
}

impl MosaicError {
    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyImageList | Self::InvalidGridAxis { .. } | Self::Overflow => {
                ErrorKind::InvalidArgument
            }
            Self::UnsupportedType(_) => ErrorKind::UnsupportedType,
            Self::Core(error) => error.kind(),
        }
    }
}
