//! Two-color Game of Life on a toroidal grid.

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::{Cell, CellState};
pub use error::{GridError, GridResult};
pub use grid::{Grid, NeighbourTally, Population};
