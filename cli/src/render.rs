use std::fmt::Write;

use minefield_core::{CellView, Game, GameState};

fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '.',
        CellView::Flagged => 'F',
        CellView::Mine => '*',
        CellView::Revealed(0) => ' ',
        CellView::Revealed(count) => char::from(b'0' + count),
    }
}

pub fn status_line(game: &Game) -> String {
    match game.state() {
        GameState::Playing => format!("{}: {} mines left", game.difficulty(), game.mines_left()),
        GameState::Lost => "Game over!".to_owned(),
        GameState::Won => "You win!".to_owned(),
    }
}

/// Text grid with column numbers on top and row numbers on the left.
pub fn board(game: &Game) -> String {
    let (rows, cols) = game.size();
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..cols {
        let _ = write!(out, "{}", col % 10);
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{row:>3} ");
        out.extend(game.board().row(row).map(|cell| glyph(cell.view())));
        out.push('\n');
    }
    out
}
