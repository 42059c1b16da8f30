use tictactoe_engine::tictactoe::{BOARD_SIZE, Board, Mark, SideAssignment};

/// Reads nine cells written with `X`, `O` and `.`, `_` or `-` for empty.
/// Whitespace and `|` separators are ignored.
pub fn parse_board(text: &str, sides: SideAssignment) -> Result<Board, String> {
    let mut cells = [Mark::Empty; BOARD_SIZE];
    let mut count = 0;

    for ch in text.chars().filter(|c| !c.is_whitespace() && *c != '|') {
        if count == BOARD_SIZE {
            return Err(format!("Board has more than {} cells", BOARD_SIZE));
        }
        cells[count] = match ch.to_ascii_uppercase() {
            '.' | '_' | '-' => Mark::Empty,
            symbol if symbol == sides.player.symbol() => Mark::Player,
            symbol if symbol == sides.computer.symbol() => Mark::Opponent,
            other => return Err(format!("Unexpected board character '{}'", other)),
        };
        count += 1;
    }

    if count != BOARD_SIZE {
        return Err(format!("Board needs {} cells, got {}", BOARD_SIZE, count));
    }
    Ok(Board::from_cells(cells))
}

pub fn render_board(board: &Board, sides: SideAssignment) -> String {
    board
        .cells()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|mark| match mark.role() {
                    Some(role) => sides.side_of(role).symbol(),
                    None => '.',
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n---------\n")
}
