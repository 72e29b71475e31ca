//! Tests for cell naming

use std::collections::HashSet;

use crate::split::naming::{digit_width, CellId, IndexMode, NamingScheme};

#[test]
fn test_digit_width() {
    assert_eq!(digit_width(0), 1);
    assert_eq!(digit_width(9), 1);
    assert_eq!(digit_width(10), 2);
    assert_eq!(digit_width(99), 2);
    assert_eq!(digit_width(100), 3);
    assert_eq!(digit_width(u64::MAX), 20);
}

#[test]
fn test_grid_names_for_two_by_two() {
    let scheme = NamingScheme::new(IndexMode::Grid, 2, 2);
    let names: Vec<String> = [(0, 0), (0, 1), (1, 0), (1, 1)]
        .iter()
        .map(|&(r, c)| scheme.identifier(r, c).to_string())
        .collect();
    assert_eq!(names, vec!["0_0", "0_1", "1_0", "1_1"]);
}

#[test]
fn test_grid_padding_uses_larger_count() {
    let scheme = NamingScheme::new(IndexMode::Grid, 3, 11);
    assert_eq!(scheme.width(), 2);
    assert_eq!(scheme.file_name("tiles", 2, 10), "tiles_02_10.png");
}

#[test]
fn test_grid_padding_at_power_of_ten() {
    // Ten rows means indices 0..=9, one digit is enough
    let scheme = NamingScheme::new(IndexMode::Grid, 10, 10);
    assert_eq!(scheme.width(), 1);
    assert_eq!(scheme.identifier(9, 9).to_string(), "9_9");
}

#[test]
fn test_linear_index_uses_column_count() {
    let scheme = NamingScheme::new(IndexMode::Linear, 4, 3);
    assert_eq!(scheme.identifier(2, 1), CellId::Linear { index: 7, width: 2 });
    assert_eq!(scheme.file_name("img", 0, 0), "img_00.png");
    assert_eq!(scheme.file_name("img", 3, 2), "img_11.png");
}

#[test]
fn test_linear_ids_increase_without_duplicates() {
    let (rows, columns) = (7u32, 13u32);
    let scheme = NamingScheme::new(IndexMode::Linear, rows, columns);

    let mut previous: Option<String> = None;
    let mut seen = HashSet::new();
    for row in 0..rows {
        for column in 0..columns {
            let id = scheme.identifier(row, column).to_string();
            if let Some(prev) = &previous {
                assert!(id > *prev, "{} should sort after {}", id, prev);
            }
            assert!(seen.insert(id.clone()));
            previous = Some(id);
        }
    }
    assert_eq!(seen.len(), (rows * columns) as usize);
}

#[test]
fn test_single_cell() {
    let linear = NamingScheme::new(IndexMode::Linear, 1, 1);
    let grid = NamingScheme::new(IndexMode::Grid, 1, 1);
    assert_eq!(linear.file_name("a", 0, 0), "a_0.png");
    assert_eq!(grid.file_name("a", 0, 0), "a_0_0.png");
}

#[test]
fn test_mode_from_str() {
    assert_eq!("linear".parse::<IndexMode>(), Ok(IndexMode::Linear));
    assert_eq!("Grid".parse::<IndexMode>(), Ok(IndexMode::Grid));
    assert!("diagonal".parse::<IndexMode>().is_err());
}
