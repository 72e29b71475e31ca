//! Tests for geometry resolution

use crate::split::errors::{Axis, ParameterError};
use crate::split::geometry::GeometryRequest;
use crate::split::resolver::{ParameterResolver, MAX_CELL_INDEX};

#[test]
fn test_fully_specified_request() {
    let request = GeometryRequest::new()
        .with_rows(2)
        .with_columns(2)
        .with_cell_width(50)
        .with_cell_height(25);

    let geometry = ParameterResolver::new(100, 50).resolve(&request).unwrap();
    assert_eq!(geometry.rows(), 2);
    assert_eq!(geometry.columns(), 2);
    assert_eq!(geometry.cell_width(), 50);
    assert_eq!(geometry.cell_height(), 25);
    assert_eq!(geometry.start_x(), 0);
    assert_eq!(geometry.start_y(), 0);
}

#[test]
fn test_counts_derived_from_cell_size() {
    let request = GeometryRequest::new().with_start(10, 5).with_cell_width(30).with_cell_height(20);

    let geometry = ParameterResolver::new(100, 50).resolve(&request).unwrap();
    // (100 - 10) / 30 and (50 - 5) / 20
    assert_eq!(geometry.columns(), 3);
    assert_eq!(geometry.rows(), 2);
}

#[test]
fn test_cell_size_derived_from_counts() {
    let request = GeometryRequest::new().with_rows(3).with_columns(4);

    let geometry = ParameterResolver::new(100, 50).resolve(&request).unwrap();
    assert_eq!(geometry.cell_width(), 25);
    assert_eq!(geometry.cell_height(), 16);
}

#[test]
fn test_mixed_derivation() {
    let request = GeometryRequest::new().with_rows(5).with_cell_width(40);

    let geometry = ParameterResolver::new(100, 50).resolve(&request).unwrap();
    assert_eq!(geometry.columns(), 2);
    assert_eq!(geometry.cell_height(), 10);
}

#[test]
fn test_explicit_values_are_not_overwritten() {
    // Rows given explicitly stay as given even though a cell height is present
    let request = GeometryRequest::new().with_rows(1).with_cell_height(10).with_columns(1);

    let geometry = ParameterResolver::new(100, 50).resolve(&request).unwrap();
    assert_eq!(geometry.rows(), 1);
    assert_eq!(geometry.cell_height(), 10);
    assert_eq!(geometry.cell_width(), 100);
}

#[test]
fn test_derivation_round_trip_when_exact() {
    let resolver = ParameterResolver::new(120, 90);
    for cell_height in [1u32, 3, 5, 9, 15, 30, 45, 90] {
        let first = resolver
            .resolve(&GeometryRequest::new().with_columns(1).with_cell_height(cell_height))
            .unwrap();
        let second = resolver
            .resolve(&GeometryRequest::new().with_columns(1).with_rows(first.rows()))
            .unwrap();
        assert_eq!(second.cell_height(), cell_height);
    }
}

#[test]
fn test_start_x_outside_image() {
    let request = GeometryRequest::new().with_start(100, 0).with_rows(1).with_columns(1);
    let result = ParameterResolver::new(100, 50).resolve(&request);
    assert_eq!(
        result,
        Err(ParameterError::StartOutOfBounds { axis: Axis::X, start: 100, extent: 100 })
    );
}

#[test]
fn test_start_y_outside_image() {
    let request = GeometryRequest::new().with_start(0, 60).with_rows(1).with_columns(1);
    let result = ParameterResolver::new(100, 50).resolve(&request);
    assert_eq!(
        result,
        Err(ParameterError::StartOutOfBounds { axis: Axis::Y, start: 60, extent: 50 })
    );
}

#[test]
fn test_start_checked_before_missing_values() {
    let request = GeometryRequest::new().with_start(200, 0);
    let result = ParameterResolver::new(100, 50).resolve(&request);
    assert!(matches!(result, Err(ParameterError::StartOutOfBounds { .. })));
}

#[test]
fn test_grid_past_right_edge() {
    let request = GeometryRequest::new()
        .with_start(90, 0)
        .with_rows(2)
        .with_columns(2)
        .with_cell_width(50)
        .with_cell_height(25);

    let result = ParameterResolver::new(100, 50).resolve(&request);
    assert_eq!(
        result,
        Err(ParameterError::ExceedsImage { axis: Axis::X, required: 190, extent: 100 })
    );
}

#[test]
fn test_grid_past_bottom_edge() {
    let request = GeometryRequest::new().with_rows(3).with_columns(1).with_cell_height(20);
    let result = ParameterResolver::new(100, 50).resolve(&request);
    assert_eq!(
        result,
        Err(ParameterError::ExceedsImage { axis: Axis::Y, required: 60, extent: 50 })
    );
}

#[test]
fn test_missing_columns() {
    let request = GeometryRequest::new().with_rows(3).with_columns(0);
    let result = ParameterResolver::new(100, 50).resolve(&request);
    assert_eq!(result, Err(ParameterError::Unspecified("Columns")));
}

#[test]
fn test_missing_rows_reported_first() {
    let result = ParameterResolver::new(100, 50).resolve(&GeometryRequest::new());
    assert_eq!(result, Err(ParameterError::Unspecified("Rows")));
}

#[test]
fn test_cell_larger_than_image_resolves_to_zero() {
    let request = GeometryRequest::new().with_cell_height(80).with_columns(1);
    let result = ParameterResolver::new(100, 50).resolve(&request);
    assert_eq!(result, Err(ParameterError::NonPositive("Rows")));
}

#[test]
fn test_too_many_rows_derived_to_zero_height() {
    let request = GeometryRequest::new().with_rows(60).with_columns(1);
    let result = ParameterResolver::new(100, 50).resolve(&request);
    assert_eq!(result, Err(ParameterError::NonPositive("Height")));
}

#[test]
fn test_cell_count_overflow_rejected() {
    let request = GeometryRequest::new()
        .with_rows(MAX_CELL_INDEX / 2 + 1)
        .with_columns(2)
        .with_cell_width(1)
        .with_cell_height(1);

    let result = ParameterResolver::new(100, 50).resolve(&request);
    assert!(matches!(result, Err(ParameterError::TooManyCells { .. })));
}

#[test]
fn test_overflow_checked_before_extent() {
    let request = GeometryRequest::new()
        .with_rows(MAX_CELL_INDEX)
        .with_columns(MAX_CELL_INDEX)
        .with_cell_width(1000)
        .with_cell_height(1000);

    let result = ParameterResolver::new(u32::MAX, u32::MAX).resolve(&request);
    assert!(matches!(result, Err(ParameterError::TooManyCells { .. })));
}

#[test]
fn test_resolved_geometry_always_fits() {
    let resolver = ParameterResolver::new(97, 61);
    for start_x in [0u32, 7, 50, 96] {
        for start_y in [0u32, 3, 60] {
            for size in 1u32..20 {
                let request = GeometryRequest::new()
                    .with_start(start_x, start_y)
                    .with_cell_width(size)
                    .with_rows(size);
                if let Ok(g) = resolver.resolve(&request) {
                    assert!(g.start_x() as u64 + g.columns() as u64 * g.cell_width() as u64 <= 97);
                    assert!(g.start_y() as u64 + g.rows() as u64 * g.cell_height() as u64 <= 61);
                }
            }
        }
    }
}
