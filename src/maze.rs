//! Perfect-maze generation with a randomized recursive backtracker.
//!
//! Starting at (0, 0), the generator walks to a random unvisited neighbour,
//! knocking down the wall between them, and backtracks along an explicit
//! stack whenever the current cell has no unvisited neighbours left. Every
//! cell is visited exactly once, so the open passages form a spanning tree.

use crate::grid::{Direction, Grid};
use crate::MazeError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a perfect maze of `cols` x `rows` cells using the supplied RNG
pub fn generate<R: Rng>(cols: i32, rows: i32, rng: &mut R) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(cols, rows)?;
    let mut visited = vec![false; grid.cell_count()];

    let start = (0, 0);
    visited[grid.get_id(start.0, start.1) as usize] = true;
    let mut stack = vec![start];

    while let Some(&(col, row)) = stack.last() {
        let candidates: Vec<(Direction, (i32, i32))> = Direction::ALL
            .iter()
            .filter_map(|&dir| grid.neighbor(col, row, dir).map(|pos| (dir, pos)))
            .filter(|&(_, (ncol, nrow))| !visited[grid.get_id(ncol, nrow) as usize])
            .collect();

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let (dir, next) = candidates[rng.gen_range(0..candidates.len())];
        grid.open_wall(col, row, dir);
        visited[grid.get_id(next.0, next.1) as usize] = true;
        stack.push(next);
    }

    Ok(grid)
}

/// Generate a maze from a fixed seed, or from OS entropy when `seed` is None.
/// The same seed and dimensions always produce the same layout.
pub fn generate_seeded(cols: i32, rows: i32, seed: Option<u64>) -> Result<Grid, MazeError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate(cols, rows, &mut rng)
}
