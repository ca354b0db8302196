mod display;
mod rule;

pub use self::rule::NeighbourTally;
use crate::{Cell, CellState, GridError, GridResult};
use rand::{Rng, RngCore};
use tracing::{debug, trace};

/// Offsets of the eight neighbours, top row first.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size toroidal grid of two-color cells.
///
/// Cells live in a single row-major buffer. Every coordinate, including
/// negative and out-of-range ones, wraps around onto a valid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    columns: i32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: i32, columns: i32) -> GridResult<Self> {
        if rows <= 0 || columns <= 0 {
            return Err(GridError::InvalidDimension { rows, columns });
        }

        let len = rows as usize * columns as usize;
        debug!(rows, columns, "created grid");
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::default(); len],
        })
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }
    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    #[inline]
    fn index(&self, row: i32, column: i32) -> usize {
        let row = row.rem_euclid(self.rows) as usize;
        let column = column.rem_euclid(self.columns) as usize;
        row * self.columns as usize + column
    }

    #[inline]
    pub fn cell(&self, row: i32, column: i32) -> &Cell {
        &self.cells[self.index(row, column)]
    }
    #[inline]
    pub fn cell_mut(&mut self, row: i32, column: i32) -> &mut Cell {
        let index = self.index(row, column);
        &mut self.cells[index]
    }

    /// Cells in row-major order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Rows of cells, top to bottom.
    #[inline]
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns as usize)
    }

    /// The eight cells surrounding `(row, column)`.
    ///
    /// Grids narrower than three cells in either direction yield the same
    /// physical cell more than once.
    pub fn neighbours(&self, row: i32, column: i32) -> [&Cell; 8] {
        // wrap first so adding an offset cannot overflow
        let row = row.rem_euclid(self.rows);
        let column = column.rem_euclid(self.columns);
        NEIGHBOUR_OFFSETS.map(|(dr, dc)| self.cell(row + dr, column + dc))
    }

    /// State of `(row, column)` in the next generation, read from the current one.
    pub fn next_state(&self, row: i32, column: i32) -> CellState {
        let tally = NeighbourTally::from_cells(self.neighbours(row, column));
        rule::next_state(self.cell(row, column).state(), tally)
    }

    pub fn advance_generation(&mut self) {
        // every read happens before the first write
        let mut next = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows {
            for column in 0..self.columns {
                next.push(self.next_state(row, column));
            }
        }
        debug_assert_eq!(next.len(), self.cells.len());

        for (cell, state) in self.cells.iter_mut().zip(next) {
            cell.set_state(state);
        }
        trace!(population = ?self.population(), "advanced generation");
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set_state(CellState::Dead);
        }
        debug!("cleared grid");
    }

    /// Seeds every cell from `rng`: one fair draw for dead or alive, then a
    /// second for the color of live cells.
    ///
    /// Fails with [`GridError::NullSource`] without touching the grid when no
    /// source is given.
    pub fn randomize(&mut self, rng: Option<&mut dyn RngCore>) -> GridResult<()> {
        let rng = rng.ok_or(GridError::NullSource)?;
        for cell in &mut self.cells {
            let state = if !rng.random_bool(0.5) {
                CellState::Dead
            } else if rng.random_bool(0.5) {
                CellState::ColorB
            } else {
                CellState::ColorA
            };
            cell.set_state(state);
        }
        debug!(population = ?self.population(), "randomized grid");
        Ok(())
    }

    pub fn population(&self) -> Population {
        let mut population = Population::default();
        for cell in &self.cells {
            match cell.state() {
                CellState::Dead => population.dead += 1,
                CellState::ColorA => population.color_a += 1,
                CellState::ColorB => population.color_b += 1,
            }
        }
        population
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Number of cells in each state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Population {
    pub dead: usize,
    pub color_a: usize,
    pub color_b: usize,
}
impl Population {
    #[inline]
    pub fn alive(&self) -> usize {
        self.color_a + self.color_b
    }
}
