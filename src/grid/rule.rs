use crate::{Cell, CellState};

/// Summary of a cell's neighbourhood, gathered in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighbourTally {
    /// Number of neighbour positions enumerated, alive or not.
    pub examined: usize,
    pub color_a: usize,
    pub color_b: usize,
}
impl NeighbourTally {
    pub fn from_cells<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let mut tally = Self::default();
        for cell in cells {
            tally.examined += 1;
            match cell.state() {
                CellState::ColorA => tally.color_a += 1,
                CellState::ColorB => tally.color_b += 1,
                CellState::Dead => {}
            }
        }
        tally
    }

    /// Live neighbours of either color.
    #[inline]
    pub fn alive(&self) -> usize {
        self.color_a + self.color_b
    }
}

/// Returns the state a cell in `current` moves to given its neighbourhood.
///
/// Live cells survive with 2 or 3 live neighbours and keep their color.
/// Dead cells go through [`birth_state`].
pub(super) fn next_state(current: CellState, tally: NeighbourTally) -> CellState {
    match current {
        CellState::Dead => birth_state(tally),
        alive => match tally.alive() {
            2 | 3 => alive,
            _ => CellState::Dead,
        },
    }
}

/// Color arbitration for a dead cell. Ties go to `ColorB`.
///
/// Eligibility is checked against the number of *examined* positions rather
/// than the live count, so a full 8-cell neighbourhood never gives birth.
fn birth_state(tally: NeighbourTally) -> CellState {
    let NeighbourTally {
        examined,
        color_a,
        color_b,
    } = tally;
    if color_b >= color_a && examined == 3 {
        CellState::ColorB
    } else if color_a >= color_b && examined == 3 {
        CellState::ColorA
    } else {
        CellState::Dead
    }
}
