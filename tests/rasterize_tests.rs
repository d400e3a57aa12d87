use maze_arrow::maze::generate_seeded;
use maze_arrow::walls::{border_segments, rasterize, side_segment};
use maze_arrow::{Direction, Grid, Rect};

const CELL: f32 = 40.0;
const THICK: f32 = 4.0;

fn walled_side_count(grid: &Grid) -> usize {
    grid.cells()
        .map(|cell| Direction::ALL.iter().filter(|&&dir| cell.has_wall(dir)).count())
        .sum()
}

#[test]
fn test_every_flagged_wall_has_a_segment() {
    let grid = generate_seeded(6, 6, Some(8)).unwrap();
    let segments = rasterize(&grid, CELL, THICK);

    assert_eq!(segments.len(), walled_side_count(&grid) + 4);

    for cell in grid.cells() {
        for dir in Direction::ALL {
            let expected = side_segment(cell.col, cell.row, dir, CELL, THICK);
            let present = segments.contains(&expected);
            if cell.has_wall(dir) {
                assert!(present, "missing {:?} wall of ({}, {})", dir, cell.col, cell.row);
            } else {
                assert!(!present, "unexpected {:?} wall of ({}, {})", dir, cell.col, cell.row);
            }
        }
    }
}

#[test]
fn test_segment_geometry() {
    assert_eq!(side_segment(2, 1, Direction::Up, CELL, THICK), Rect::new(80.0, 38.0, 40.0, 4.0));
    assert_eq!(side_segment(2, 1, Direction::Down, CELL, THICK), Rect::new(80.0, 78.0, 40.0, 4.0));
    assert_eq!(side_segment(2, 1, Direction::Left, CELL, THICK), Rect::new(78.0, 40.0, 4.0, 40.0));
    assert_eq!(side_segment(2, 1, Direction::Right, CELL, THICK), Rect::new(118.0, 40.0, 4.0, 40.0));
}

#[test]
fn test_border_present_for_any_grid() {
    for (cols, rows, seed) in [(1, 1, 1), (4, 9, 2), (20, 20, 3)] {
        let grid = generate_seeded(cols, rows, Some(seed)).unwrap();
        let segments = rasterize(&grid, CELL, THICK);
        for border in border_segments(&grid, CELL, THICK) {
            assert!(segments.contains(&border));
        }
    }
}

#[test]
fn test_border_seals_open_grid() {
    // Even with every interior wall removed the border keeps the field closed
    let mut grid = Grid::new(3, 3).unwrap();
    for row in 0..3 {
        for col in 0..3 {
            grid.open_wall(col, row, Direction::Right);
            grid.open_wall(col, row, Direction::Down);
        }
    }
    let segments = rasterize(&grid, CELL, THICK);
    let outside = [
        Rect::new(-10.0, 50.0, 11.0, 5.0),
        Rect::new(50.0, -10.0, 5.0, 11.0),
        Rect::new(119.0, 50.0, 10.0, 5.0),
        Rect::new(50.0, 119.0, 5.0, 10.0),
    ];
    for probe in outside {
        assert!(segments.iter().any(|s| s.overlaps(&probe)), "border gap at {:?}", probe);
    }
}
