//! Tests cell assignment order and mosaic box geometry.

use ndview_core::Shape;
use ndview_mosaic::{GridLayout, cell_index, plan_mosaic};

#[test]
fn grid_placement_tests_assigns_cells_fastest_axis_first() {
    let grid = [2, 3, 2];
    let expected = [
        [0, 0, 0],
        [1, 0, 0],
        [0, 1, 0],
        [1, 1, 0],
        [0, 2, 0],
        [1, 2, 0],
        [0, 0, 1],
        [1, 0, 1],
        [0, 1, 1],
        [1, 1, 1],
        [0, 2, 1],
        [1, 2, 1],
    ];

    for (index, cell) in expected.iter().enumerate() {
        assert_eq!(cell_index(index, &grid), cell.to_vec(), "image {index}");
    }
}

#[test]
fn grid_placement_tests_plans_twelve_images_on_three_axes() {
    let shapes: Vec<Shape> = (0..12).map(|_| Shape::new(vec![1, 1, 1])).collect();
    let refs: Vec<&Shape> = shapes.iter().collect();
    let layout = GridLayout::new(&[2, 3, 2]).expect("layout should be valid");

    let plan = plan_mosaic(&layout, &refs).expect("plan should build");
    assert_eq!(plan.placed_count(), 12);
    assert_eq!(plan.cells[5], Some(vec![1, 2, 0]));
    assert_eq!(plan.cells[6], Some(vec![0, 0, 1]));
    assert_eq!(plan.mosaic_dims, vec![2, 3, 2]);
}

#[test]
fn grid_placement_tests_pads_layout_to_image_dimensionality() {
    let volume = Shape::new(vec![4, 3, 5]);
    let plane = Shape::new(vec![2, 6]);
    let layout = GridLayout::new(&[2]).expect("layout should be valid");

    let plan = plan_mosaic(&layout, &[&volume, &plane]).expect("plan should build");
    assert_eq!(plan.grid, vec![2, 1, 1]);
    assert_eq!(plan.mosaic_dims, vec![6, 6, 5]);
}

#[test]
fn grid_placement_tests_uses_declared_axes_beyond_image_dimensionality() {
    let a = Shape::new(vec![3]);
    let b = Shape::new(vec![3]);
    let layout = GridLayout::new(&[1, 2]).expect("layout should be valid");

    let plan = plan_mosaic(&layout, &[&a, &b]).expect("plan should build");
    assert_eq!(plan.grid, vec![1, 2]);
    assert_eq!(plan.mosaic_dims, vec![3, 2]);
    assert_eq!(plan.placement_offset(1), Some(vec![0, 1]));
}

#[test]
fn grid_placement_tests_excess_images_do_not_widen_lines() {
    let small = Shape::new(vec![2, 2]);
    let huge = Shape::new(vec![50, 50]);
    let layout = GridLayout::new(&[1]).expect("layout should be valid");

    let plan = plan_mosaic(&layout, &[&small, &huge]).expect("plan should build");
    assert_eq!(plan.cells[1], None);
    assert_eq!(plan.dropped_count(), 1);
    assert_eq!(plan.mosaic_dims, vec![2, 2]);
}

#[test]
fn grid_placement_tests_leaves_unfilled_lines_empty() {
    let only = Shape::new(vec![3, 3]);
    let layout = GridLayout::new(&[3, 2]).expect("layout should be valid");

    let plan = plan_mosaic(&layout, &[&only]).expect("plan should build");
    assert_eq!(plan.extents, vec![vec![3, 0, 0], vec![3, 0]]);
    assert_eq!(plan.mosaic_dims, vec![3, 3]);
}
