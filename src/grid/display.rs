use super::Grid;
use std::fmt;

/// One line per row, `.` for dead cells, `a`/`b` for the two colors.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_slices().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.state().symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{CellState, Grid};

    #[test]
    fn renders_rows_top_to_bottom() {
        let mut grid = Grid::new(2, 4).unwrap();
        grid.cell_mut(0, 0).set_state(CellState::ColorA);
        grid.cell_mut(1, 3).set_state(CellState::ColorB);

        assert_eq!(grid.to_string(), "a...\n...b");
    }

    #[test]
    fn renders_single_cell() {
        let grid = Grid::new(1, 1).unwrap();

        assert_eq!(grid.to_string(), ".");
    }
}
