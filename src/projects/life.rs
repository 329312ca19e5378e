use std::fmt;

use log::debug;
use randomize::PCG32;

use crate::auxiliary::randomizer::{chance, entropy_rng};
use crate::auxiliary::settings::INITIAL_FILL;
use crate::error::BoardError;
use crate::traits_and_structs::{Cell, CellAutomata};

/// Conway's Game of Life on a fixed-size torus.
///
/// Cells live in one row-major `Vec`; the cell at `(row, column)` sits at
/// `row * width + column`. Edges wrap, so the row above row 0 is
/// `height - 1` and the column left of column 0 is `width - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    generation: u64,
}

impl Board {
    /// A randomly filled board seeded from the OS.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::new_random(width, height, &mut entropy_rng())
    }

    /// A board where every cell is alive with probability one half.
    pub fn new_random(width: usize, height: usize, rng: &mut PCG32) -> Result<Self, BoardError> {
        Self::with_fill(width, height, INITIAL_FILL, rng)
    }

    pub fn with_fill(
        width: usize,
        height: usize,
        fill: f32,
        rng: &mut PCG32,
    ) -> Result<Self, BoardError> {
        if !(0.0..=1.0).contains(&fill) {
            return Err(BoardError::InvalidFill(fill));
        }
        let mut result = Self::new_empty(width, height)?;
        result.fill(fill, rng);
        Ok(result)
    }

    pub fn new_empty(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimension { width, height });
        }
        let size = width
            .checked_mul(height)
            .ok_or(BoardError::TooLarge { width, height })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| BoardError::TooLarge { width, height })?;
        cells.extend((0..size).map(|i| Cell::new(i / width, i % width, false)));
        Ok(Self {
            cells,
            width,
            height,
            generation: 0,
        })
    }

    /// Parse a board from text rows, `#` or `O` for live cells and `.` for
    /// dead ones. Every row must be the same length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut result = Self::new_empty(width, height)?;

        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let found = text.chars().count();
            if found != width {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, ch) in text.chars().enumerate() {
                let alive = match ch {
                    '#' | 'O' => true,
                    '.' => false,
                    found => return Err(BoardError::InvalidCell { row, column, found }),
                };
                result.cells[row * width + column].set_alive(alive);
            }
        }
        Ok(result)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Completed steps since the board was built or last cleared.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// # Panics
    ///
    /// If `(row, column)` is outside the board.
    pub fn is_alive(&self, row: usize, column: usize) -> bool {
        assert!(
            row < self.height && column < self.width,
            "({}, {}) is outside a {}x{} board",
            row,
            column,
            self.width,
            self.height
        );
        self.cells[row * self.width + column].is_alive()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        self.cell(row, column).map(Cell::is_alive)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.grid_idx(row, column).map(|i| &self.cells[i])
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Live cells among the eight around `(row, column)`, wrapping at the
    /// edges. On boards one cell wide or tall the wrapped neighbours include
    /// the cell itself and repeats, and each is counted.
    ///
    /// # Panics
    ///
    /// If `(row, column)` is outside the board.
    pub fn count_live_neighbors(&self, row: usize, column: usize) -> u8 {
        let (up, down) = wrap(row, self.height);
        let (left, right) = wrap(column, self.width);

        [
            (up, left),
            (up, column),
            (up, right),
            (row, left),
            (row, right),
            (down, left),
            (down, column),
            (down, right),
        ]
        .iter()
        .filter(|&&(r, c)| self.is_alive(r, c))
        .count() as u8
    }

    /// Advance one generation.
    ///
    /// Every cell stages its next state from the current generation before
    /// any cell commits, so no count ever sees a cell updated this step.
    pub fn step(&mut self) {
        for idx in 0..self.cells.len() {
            let n = self.count_live_neighbors(idx / self.width, idx % self.width);
            self.cells[idx].cycle(n);
        }
        for c in self.cells.iter_mut() {
            c.commit();
        }
        self.generation += 1;
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
        debug!("stepped {} generations, now at {}", n, self.generation);
    }

    /// Set one cell; out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, column: usize, alive: bool) {
        if let Some(i) = self.grid_idx(row, column) {
            self.cells[i].set_alive(alive);
        }
    }

    /// Flip a cell and return its new state, or `false` if the coordinates
    /// fall off the board.
    pub fn toggle(&mut self, row: isize, column: isize) -> bool {
        if let Some(i) = self.grid_idx(row, column) {
            self.cells[i].toggle();
            debug!("toggled ({}, {})", row, column);
            self.cells[i].is_alive()
        } else {
            false
        }
    }

    /// Set every cell on the line from `(r0, c0)` to `(r1, c1)`.
    pub fn set_line(&mut self, r0: isize, c0: isize, r1: isize, c1: isize, alive: bool) {
        // The start is clamped onto the board; drawing stops at the first
        // point that leaves it.
        let c0 = c0.max(0).min(self.width as isize - 1);
        let r0 = r0.max(0).min(self.height as isize - 1);
        debug!("line ({}, {}) => ({}, {}) alive={}", r0, c0, r1, c1, alive);
        for (column, row) in line_drawing::Bresenham::new((c0, r0), (c1, r1)) {
            if let Some(i) = self.grid_idx(row, column) {
                self.cells[i].set_alive(alive);
            } else {
                break;
            }
        }
    }

    fn fill(&mut self, fill: f32, rng: &mut PCG32) {
        for c in self.cells.iter_mut() {
            c.set_alive(chance(rng, fill));
        }
    }

    fn grid_idx<I: std::convert::TryInto<usize>>(&self, row: I, column: I) -> Option<usize> {
        if let (Ok(row), Ok(column)) = (row.try_into(), column.try_into()) {
            if row < self.height && column < self.width {
                Some(column + row * self.width)
            } else {
                None
            }
        } else {
            None
        }
    }
}

/// The indices before and after `i` on a ring of length `len`.
fn wrap(i: usize, len: usize) -> (usize, usize) {
    let before = if i == 0 { len - 1 } else { i - 1 };
    let after = if i + 1 == len { 0 } else { i + 1 };
    (before, after)
}

impl CellAutomata for Board {
    fn step(&mut self) {
        Board::step(self)
    }

    fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::new(c.row(), c.column(), false);
        }
        self.generation = 0;
    }

    fn randomize(&mut self, rng: &mut PCG32) {
        self.fill(INITIAL_FILL, rng);
        self.generation = 0;
    }

    fn describe() -> String {
        "Conway's Game of Life (B3/S23) on a torus: a live cell with two or three live \
         neighbours survives, a dead cell with exactly three is born, every other cell \
         dies or stays dead."
            .to_owned()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.width {
            f.write_str("--")?;
        }
        for row in self.cells.chunks_exact(self.width) {
            f.write_str("\n")?;
            for c in row {
                f.write_str(if c.is_alive() { "{}" } else { "  " })?;
            }
            f.write_str("|")?;
        }
        Ok(())
    }
}
