/// State of a single cell. Live cells carry one of two colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    ColorA,
    ColorB,
}
impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        match self {
            Self::Dead => false,
            Self::ColorA | Self::ColorB => true,
        }
    }

    /// Single character used by the text rendering of a grid.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Self::Dead => '.',
            Self::ColorA => 'a',
            Self::ColorB => 'b',
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    state: CellState,
}
impl Cell {
    #[inline]
    pub fn new(state: CellState) -> Self {
        Self { state }
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }
    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_colored_states_are_alive() {
        assert!(!CellState::Dead.is_alive());
        assert!(CellState::ColorA.is_alive());
        assert!(CellState::ColorB.is_alive());
    }

    #[test]
    fn new_cell_is_dead() {
        let cell = Cell::default();

        assert_eq!(cell.state(), CellState::Dead);
        assert!(!cell.is_alive());
    }

    #[test]
    fn set_state_overwrites() {
        let mut cell = Cell::default();
        cell.set_state(CellState::ColorB);
        assert_eq!(cell.state(), CellState::ColorB);
        assert!(cell.is_alive());

        cell.set_state(CellState::Dead);
        assert!(!cell.is_alive());
    }
}
