use crate::grid::{Direction, Grid};
use crate::rect::Rect;

/// Segment for one side of the cell at (col, row), centred on the side's grid line
pub fn side_segment(col: i32, row: i32, dir: Direction, cell_size: f32, thickness: f32) -> Rect {
    let x0 = col as f32 * cell_size;
    let y0 = row as f32 * cell_size;
    let half = thickness / 2.0;

    match dir {
        Direction::Up => Rect::new(x0, y0 - half, cell_size, thickness),
        Direction::Down => Rect::new(x0, y0 + cell_size - half, cell_size, thickness),
        Direction::Left => Rect::new(x0 - half, y0, thickness, cell_size),
        Direction::Right => Rect::new(x0 + cell_size - half, y0, thickness, cell_size),
    }
}

/// Four segments sealing the outside of the play area, lying just inside it
pub fn border_segments(grid: &Grid, cell_size: f32, thickness: f32) -> [Rect; 4] {
    let width = grid.cols as f32 * cell_size;
    let height = grid.rows as f32 * cell_size;

    [
        Rect::new(0.0, 0.0, width, thickness),
        Rect::new(0.0, height - thickness, width, thickness),
        Rect::new(0.0, 0.0, thickness, height),
        Rect::new(width - thickness, 0.0, thickness, height),
    ]
}

/// Convert the grid's wall flags into pixel-space wall segments.
///
/// Every walled side of every cell yields one segment (a wall shared by two
/// cells is emitted from both). The outer border is always appended. Callers
/// must not depend on the order of the result.
pub fn rasterize(grid: &Grid, cell_size: f32, thickness: f32) -> Vec<Rect> {
    let mut segments = Vec::new();

    for cell in grid.cells() {
        for dir in Direction::ALL {
            if cell.has_wall(dir) {
                segments.push(side_segment(cell.col, cell.row, dir, cell_size, thickness));
            }
        }
    }

    segments.extend(border_segments(grid, cell_size, thickness));
    segments
}
