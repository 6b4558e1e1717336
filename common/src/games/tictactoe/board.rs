use super::error::TicTacToeError;
use super::types::{CELL_COUNT, Mark, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn marks(&self) -> impl Iterator<Item = (usize, Mark)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    /// Empty cells in ascending index order.
    pub fn available_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.marks()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(index, _)| index)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn place(&mut self, index: usize, side: Side) -> Result<(), TicTacToeError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(TicTacToeError::OutOfBounds { index })?;

        if !cell.is_empty() {
            return Err(TicTacToeError::IllegalPlacement { index });
        }

        *cell = side.mark();
        Ok(())
    }

    /// Unchecked write used by the search for mark/undo.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}
