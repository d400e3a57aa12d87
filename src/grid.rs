use crate::MazeError;

/// Cardinal direction from a cell towards one of its neighbours
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Fixed enumeration order used by the generator
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// (dx, dy) step in grid coordinates; rows grow downwards
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// A single maze cell and the walls on each of its sides
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Cell {
    fn new(col: i32, row: i32) -> Self {
        Cell {
            col,
            row,
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    /// Whether the side facing `dir` is walled
    pub fn has_wall(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
        }
    }

    fn clear_wall(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.top = false,
            Direction::Right => self.right = false,
            Direction::Down => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }
}

/// Grid of maze cells stored row-major.
/// Walls between adjacent cells are recorded on both cells and always kept in sync.
#[derive(Clone, Debug)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every wall of every cell set
    pub fn new(cols: i32, rows: i32) -> Result<Self, MazeError> {
        let count = match cols.checked_mul(rows) {
            Some(count) if cols >= 1 && rows >= 1 => count,
            _ => return Err(MazeError::InvalidDimensions { cols, rows }),
        };

        let mut cells = Vec::with_capacity(count as usize);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(col, row));
            }
        }

        Ok(Grid { cols, rows, cells })
    }

    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols && row >= 0 && row < self.rows
    }

    /// Convert (col, row) coordinates to cell ID
    pub fn get_id(&self, col: i32, row: i32) -> i32 {
        col + row * self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell at (col, row), or None when outside the grid
    pub fn cell(&self, col: i32, row: i32) -> Option<&Cell> {
        if !self.in_bounds(col, row) {
            return None;
        }
        self.cells.get(self.get_id(col, row) as usize)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Check whether the side of (col, row) facing `dir` is walled.
    /// Out of bounds counts as walled.
    pub fn has_wall(&self, col: i32, row: i32, dir: Direction) -> bool {
        self.cell(col, row).map_or(true, |cell| cell.has_wall(dir))
    }

    /// Coordinates of the neighbour in `dir`, if it lies inside the grid
    pub fn neighbor(&self, col: i32, row: i32, dir: Direction) -> Option<(i32, i32)> {
        let (dx, dy) = dir.offset();
        let (ncol, nrow) = (col + dx, row + dy);
        if self.in_bounds(col, row) && self.in_bounds(ncol, nrow) {
            Some((ncol, nrow))
        } else {
            None
        }
    }

    /// Remove the wall between (col, row) and its neighbour in `dir`.
    /// Clears the flag on both cells. Returns false if there is no such neighbour.
    pub fn open_wall(&mut self, col: i32, row: i32, dir: Direction) -> bool {
        let Some((ncol, nrow)) = self.neighbor(col, row, dir) else {
            return false;
        };

        let id = self.get_id(col, row) as usize;
        let nid = self.get_id(ncol, nrow) as usize;
        self.cells[id].clear_wall(dir);
        self.cells[nid].clear_wall(dir.opposite());
        true
    }

    /// Neighbours reachable from (col, row) without crossing a wall
    pub fn open_neighbors(&self, col: i32, row: i32) -> Vec<(i32, i32)> {
        Direction::ALL
            .iter()
            .filter(|&&dir| !self.has_wall(col, row, dir))
            .filter_map(|&dir| self.neighbor(col, row, dir))
            .collect()
    }

    /// Number of open passages between adjacent cells (each counted once)
    pub fn open_edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                let right_open = cell.col + 1 < self.cols && !cell.right;
                let down_open = cell.row + 1 < self.rows && !cell.bottom;
                right_open as usize + down_open as usize
            })
            .sum()
    }

    /// Render the wall layout as text, one `+--+` row per grid line
    pub fn to_ascii(&self) -> String {
        let mut result = String::new();

        for row in 0..self.rows {
            for col in 0..self.cols {
                result.push('+');
                result.push_str(if self.has_wall(col, row, Direction::Up) { "--" } else { "  " });
            }
            result.push_str("+\n");

            for col in 0..self.cols {
                result.push(if self.has_wall(col, row, Direction::Left) { '|' } else { ' ' });
                result.push_str("  ");
            }
            result.push(if self.has_wall(self.cols - 1, row, Direction::Right) { '|' } else { ' ' });
            result.push('\n');
        }

        for col in 0..self.cols {
            result.push('+');
            result.push_str(if self.has_wall(col, self.rows - 1, Direction::Down) { "--" } else { "  " });
        }
        result.push_str("+\n");

        result
    }
}
