//! Grid representation
//!
//! Clean, minimal type for a parsed 9x9 grid of symbols.
//! No parsing or validation logic - pure data representation.

/// Side length of the grid, in cells.
pub const GRID_SIZE: usize = 9;

/// Side length of one sub-region, in cells.
pub const REGION_SIZE: usize = 3;

/// A fully parsed 9x9 grid.
///
/// Symbols are opaque comparable tokens; the grid does not care whether
/// they are the digits '1'-'9' or some other alphabet. Once constructed,
/// exactly 9 rows of exactly 9 symbols are guaranteed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub(crate) fn new(cells: [[char; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// The symbol at `(row, col)`, both zero-based.
    pub fn symbol(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    /// The 9 symbols of one row, left to right.
    pub fn row(&self, row: usize) -> [char; GRID_SIZE] {
        self.cells[row]
    }

    /// The 9 symbols of one column, top to bottom.
    pub fn column(&self, col: usize) -> [char; GRID_SIZE] {
        let mut out = [' '; GRID_SIZE];
        for (row, cell) in out.iter_mut().enumerate() {
            *cell = self.cells[row][col];
        }
        out
    }

    /// The 9 symbols of one 3x3 region, flattened row by row.
    ///
    /// Region `(block_row, block_col)` with both in `0..3` covers absolute
    /// rows `[3 * block_row, 3 * block_row + 3)` and the analogous columns.
    pub fn region(&self, block_row: usize, block_col: usize) -> [char; GRID_SIZE] {
        let mut out = [' '; GRID_SIZE];
        let mut i = 0;
        for row in block_row * REGION_SIZE..(block_row + 1) * REGION_SIZE {
            for col in block_col * REGION_SIZE..(block_col + 1) * REGION_SIZE {
                out[i] = self.cells[row][col];
                i += 1;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_grid() -> Grid {
        // Cell (r, c) holds the char for (r * 9 + c) % 10, so every
        // coordinate maps to a predictable symbol.
        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = char::from_digit(((r * GRID_SIZE + c) % 10) as u32, 10).unwrap();
            }
        }
        Grid::new(cells)
    }

    #[test]
    fn test_symbol_lookup() {
        let grid = sequential_grid();
        assert_eq!(grid.symbol(0, 0), '0');
        assert_eq!(grid.symbol(0, 8), '8');
        assert_eq!(grid.symbol(1, 0), '9');
        assert_eq!(grid.symbol(8, 8), '0');
    }

    #[test]
    fn test_row_view() {
        let grid = sequential_grid();
        assert_eq!(grid.row(0), ['0', '1', '2', '3', '4', '5', '6', '7', '8']);
    }

    #[test]
    fn test_column_view() {
        let grid = sequential_grid();
        // Column 0 steps by 9 per row, so digits cycle 0, 9, 8, 7, ...
        assert_eq!(
            grid.column(0),
            ['0', '9', '8', '7', '6', '5', '4', '3', '2']
        );
    }

    #[test]
    fn test_region_view_top_left() {
        let grid = sequential_grid();
        assert_eq!(
            grid.region(0, 0),
            ['0', '1', '2', '9', '0', '1', '8', '9', '0']
        );
    }

    #[test]
    fn test_region_view_bottom_right() {
        let grid = sequential_grid();
        let expected: Vec<char> = (6..9)
            .flat_map(|r| (6..9).map(move |c| (r, c)))
            .map(|(r, c)| char::from_digit(((r * GRID_SIZE + c) % 10) as u32, 10).unwrap())
            .collect();
        assert_eq!(grid.region(2, 2).to_vec(), expected);
    }
}
