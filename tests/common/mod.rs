use maze_arrow::{Direction, Grid};

/// Disjoint-set over cell IDs, used to check that open passages form a tree
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind { parent: (0..size).collect() }
    }

    pub fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = id;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`; false if they were already joined
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

/// Summary of the passage graph of a grid
#[derive(Debug, PartialEq)]
pub struct TreeCheck {
    pub edges: usize,
    pub components: usize,
    pub has_cycle: bool,
}

impl TreeCheck {
    pub fn is_spanning_tree(&self, cell_count: usize) -> bool {
        !self.has_cycle && self.components == 1 && self.edges == cell_count - 1
    }
}

/// Walk every open right/down passage once and union the cells it joins
pub fn check_tree(grid: &Grid) -> TreeCheck {
    let mut uf = UnionFind::new(grid.cell_count());
    let mut edges = 0;
    let mut has_cycle = false;

    for cell in grid.cells() {
        for dir in [Direction::Right, Direction::Down] {
            if cell.has_wall(dir) {
                continue;
            }
            if let Some((ncol, nrow)) = grid.neighbor(cell.col, cell.row, dir) {
                edges += 1;
                let a = grid.get_id(cell.col, cell.row) as usize;
                let b = grid.get_id(ncol, nrow) as usize;
                if !uf.union(a, b) {
                    has_cycle = true;
                }
            }
        }
    }

    let mut roots: Vec<usize> = (0..grid.cell_count()).map(|id| uf.find(id)).collect();
    roots.sort_unstable();
    roots.dedup();

    TreeCheck {
        edges,
        components: roots.len(),
        has_cycle,
    }
}

/// Cells reachable from (0, 0) through open passages
pub fn flood_fill_count(grid: &Grid) -> usize {
    let mut seen = vec![false; grid.cell_count()];
    let mut queue = vec![(0, 0)];
    seen[0] = true;
    let mut count = 0;

    while let Some((col, row)) = queue.pop() {
        count += 1;
        for (ncol, nrow) in grid.open_neighbors(col, row) {
            let id = grid.get_id(ncol, nrow) as usize;
            if !seen[id] {
                seen[id] = true;
                queue.push((ncol, nrow));
            }
        }
    }

    count
}
