// grid.rs - Grid storage for the blinkenlights board

/// Side length of the full-size board.
pub const DEFAULT_GRID_SIZE: usize = 50;
/// Side length of the compact board.
pub const COMPACT_GRID_SIZE: usize = 10;
/// Largest side length a board may be configured with.
pub const MAX_GRID_SIZE: usize = 50;

/// One addressable grid position holding a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col, value: 0 }
    }

    /// True if this cell shares a row or a column with `(row, col)`.
    pub fn in_cross(&self, row: usize, col: usize) -> bool {
        self.row == row || self.col == col
    }
}

/// Square grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a `size` x `size` grid with every value at zero.
    pub fn new(size: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(row, col));
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Linear index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.size && col < self.size {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    pub fn value(&self, row: usize, col: usize) -> Option<u32> {
        self.cell(row, col).map(|c| c.value)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Linear indices of every cell in row `row` or column `col`.
    /// The crossing cell appears once.
    pub fn cross_indices(&self, row: usize, col: usize) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.in_cross(row, col))
            .map(|(i, _)| i)
            .collect()
    }

    /// Up, down, left and right neighbours of the cell at `index`.
    /// Edges do not wrap.
    pub fn neighbours(&self, index: usize) -> Vec<usize> {
        let (row, col) = (index / self.size, index % self.size);
        let mut out = Vec::with_capacity(4);
        if row > 0 {
            out.push(index - self.size);
        }
        if row + 1 < self.size {
            out.push(index + self.size);
        }
        if col > 0 {
            out.push(index - 1);
        }
        if col + 1 < self.size {
            out.push(index + 1);
        }
        out
    }

    /// Number of cells currently holding `value`.
    pub fn count_value(&self, value: u32) -> usize {
        self.cells.iter().filter(|c| c.value == value).count()
    }

    /// Rows of values, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let values: Vec<String> = row.iter().map(|c| c.value.to_string()).collect();
            writeln!(f, "[{}]", values.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_zeroed() {
        let grid = Grid::new(4);
        assert_eq!(grid.len(), 16);
        assert!(grid.cells().iter().all(|c| c.value == 0));
        assert_eq!(grid.cell(2, 3), Some(&Cell { row: 2, col: 3, value: 0 }));
    }

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(5);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(1, 0), 5);
        assert_eq!(grid.index(4, 4), 24);
        let c = grid.cells()[grid.index(3, 2)];
        assert_eq!((c.row, c.col), (3, 2));
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let grid = Grid::new(3);
        assert!(grid.cell(3, 0).is_none());
        assert!(grid.cell(0, 3).is_none());
    }

    #[test]
    fn cross_contains_intersection_once() {
        let grid = Grid::new(3);
        let cross = grid.cross_indices(1, 1);
        assert_eq!(cross.len(), 5);
        assert_eq!(cross.iter().filter(|&&i| i == grid.index(1, 1)).count(), 1);
    }

    #[test]
    fn neighbours_do_not_wrap() {
        let grid = Grid::new(3);
        // Right edge of row 0 must not reach the start of row 1
        let mut n = grid.neighbours(grid.index(0, 2));
        n.sort();
        assert_eq!(n, vec![grid.index(0, 1), grid.index(1, 2)]);

        let mut centre = grid.neighbours(grid.index(1, 1));
        centre.sort();
        assert_eq!(centre, vec![1, 3, 5, 7]);
    }

    #[test]
    fn display_prints_rows() {
        let mut grid = Grid::new(2);
        grid.cells_mut()[1].value = 3;
        assert_eq!(grid.to_string(), "[0, 3]\n[0, 0]\n");
    }
}
