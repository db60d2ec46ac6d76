use super::*;

fn cell(x: u32, y: u32, level: u8) -> Cell {
    Cell {
        x,
        y,
        level,
        count: u32::from(level) * 2,
        date: None,
    }
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        Grid::new(0, 7, vec![]),
        Err(ZombieError::InvalidGrid(_))
    ));
    assert!(matches!(
        Grid::new(53, 0, vec![]),
        Err(ZombieError::InvalidGrid(_))
    ));
}

#[test]
fn out_of_bounds_cell_is_rejected() {
    let err = Grid::new(3, 7, vec![cell(3, 0, 1)]);
    assert!(matches!(err, Err(ZombieError::InvalidGrid(_))));
    let err = Grid::new(3, 7, vec![cell(0, 7, 1)]);
    assert!(matches!(err, Err(ZombieError::InvalidGrid(_))));
}

#[test]
fn duplicate_coordinates_are_rejected() {
    let err = Grid::new(3, 7, vec![cell(1, 2, 1), cell(1, 2, 3)]);
    assert!(matches!(err, Err(ZombieError::InvalidGrid(_))));
}

#[test]
fn level_above_four_is_rejected() {
    let err = Grid::new(3, 7, vec![cell(0, 0, 5)]);
    assert!(matches!(err, Err(ZombieError::InvalidGrid(_))));
}

#[test]
fn active_cells_filters_by_level() {
    let grid = Grid::new(3, 7, vec![cell(0, 0, 0), cell(0, 1, 2), cell(2, 6, 4)]).unwrap();
    let active: Vec<_> = grid.active_cells().map(|c| (c.x, c.y)).collect();
    assert_eq!(active, vec![(0, 1), (2, 6)]);
}

#[test]
fn total_count_sums_raw_counts() {
    let grid = Grid::new(2, 2, vec![cell(0, 0, 1), cell(1, 1, 4)]).unwrap();
    assert_eq!(grid.total_count(), 10);
}

#[test]
fn quantize_level_thresholds() {
    assert_eq!(quantize_level(0), 0);
    assert_eq!(quantize_level(1), 1);
    assert_eq!(quantize_level(4), 1);
    assert_eq!(quantize_level(5), 2);
    assert_eq!(quantize_level(9), 2);
    assert_eq!(quantize_level(10), 3);
    assert_eq!(quantize_level(14), 3);
    assert_eq!(quantize_level(15), 4);
    assert_eq!(quantize_level(1000), 4);
}

#[test]
fn grid_json_round_trip_revalidates() {
    let grid = Grid::new(2, 3, vec![cell(0, 1, 2)]).unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    let back: Grid = serde_json::from_str(&json).unwrap();
    assert_eq!(back.width(), 2);
    assert_eq!(back.height(), 3);
    assert_eq!(back.cells(), grid.cells());

    let bad = r#"{"width":0,"height":3,"cells":[]}"#;
    assert!(serde_json::from_str::<Grid>(bad).is_err());
}
