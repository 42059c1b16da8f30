use super::board::Board;
use super::types::Mark;

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn is_line_complete(board: &Board, mark: Mark) -> bool {
    find_winning_line(board, mark).is_some()
}

/// First line (in `WINNING_LINES` order) fully held by `mark`.
pub fn find_winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    if mark == Mark::Empty {
        return None;
    }
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&index| cells[index] == mark))
        .copied()
}
