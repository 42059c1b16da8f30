use crate::GameError;
use super::types::Mark;

pub const BOARD_SIZE: usize = 9;

/// The 3x3 grid, indexed 0..9 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Result<Mark, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::OutOfRange { index })
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if mark == Mark::Empty {
            return Err(GameError::InvalidMove {
                index,
                reason: "cannot place an empty mark",
            });
        }
        if self.get(index)? != Mark::Empty {
            return Err(GameError::InvalidMove {
                index,
                reason: "cell is already marked",
            });
        }
        self.cells[index] = mark;
        Ok(())
    }

    pub fn clear(&mut self, index: usize) -> Result<(), GameError> {
        self.get(index)?;
        self.cells[index] = Mark::Empty;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; BOARD_SIZE];
    }

    // Search-only accessor; callers pass indices taken from `empty_cells`.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }
}
