use crate::trace;
use super::board::Board;
use super::types::Mark;
use super::win_detector::is_line_complete;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Skips branches that cannot change the result. The chosen move is the same either way.
    pub alpha_beta_pruning: bool,
    pub trace_candidates: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            alpha_beta_pruning: true,
            trace_candidates: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Turn {
    spot: usize,
    score: i32,
}

/// Picks the cell `maximizer` should take, assuming the other mark replies
/// optimally. Scores are not depth-weighted; ties go to the lowest index.
/// Returns `None` for a decided or full board, or when `maximizer` is `Empty`.
pub fn calculate_minimax_move(board: &Board, maximizer: Mark, options: SearchOptions) -> Option<usize> {
    let minimizer = maximizer.opponent()?;

    if is_line_complete(board, minimizer) || is_line_complete(board, maximizer) {
        return None;
    }

    let mut working = *board;
    let mut best: Option<Turn> = None;

    for spot in board.empty_cells() {
        working.set(spot, maximizer);
        let score = minimax(
            &mut working,
            minimizer,
            maximizer,
            i32::MIN,
            i32::MAX,
            options.alpha_beta_pruning,
        );
        working.set(spot, Mark::Empty);

        if options.trace_candidates {
            trace!("Candidate cell {} scores {}", spot, score);
        }

        if best.is_none_or(|turn| score > turn.score) {
            best = Some(Turn { spot, score });
        }
    }

    best.map(|turn| turn.spot)
}

/// Minimax value of `board` from `maximizer`'s point of view with `to_move` next.
pub fn evaluate_position(board: &Board, to_move: Mark, maximizer: Mark) -> Option<i32> {
    maximizer.opponent()?;
    if to_move == Mark::Empty {
        return None;
    }
    let mut working = *board;
    Some(minimax(&mut working, to_move, maximizer, i32::MIN, i32::MAX, true))
}

fn minimax(
    board: &mut Board,
    to_move: Mark,
    maximizer: Mark,
    mut alpha: i32,
    mut beta: i32,
    pruning: bool,
) -> i32 {
    let Some(minimizer) = maximizer.opponent() else {
        return DRAW_SCORE;
    };

    if is_line_complete(board, minimizer) {
        return LOSS_SCORE;
    }
    if is_line_complete(board, maximizer) {
        return WIN_SCORE;
    }

    let moves = board.empty_cells();
    if moves.is_empty() {
        return DRAW_SCORE;
    }

    let next = if to_move == maximizer { minimizer } else { maximizer };

    if to_move == maximizer {
        let mut max_eval = i32::MIN;
        for spot in moves {
            board.set(spot, to_move);
            let eval = minimax(board, next, maximizer, alpha, beta, pruning);
            board.set(spot, Mark::Empty);

            max_eval = max_eval.max(eval);
            if pruning {
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for spot in moves {
            board.set(spot, to_move);
            let eval = minimax(board, next, maximizer, alpha, beta, pruning);
            board.set(spot, Mark::Empty);

            min_eval = min_eval.min(eval);
            if pruning {
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
        }
        min_eval
    }
}
