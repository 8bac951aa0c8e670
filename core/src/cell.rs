use serde::{Deserialize, Serialize};

/// One square of the board, owned by its [`Board`](crate::Board).
///
/// Mine cells keep `neighbor_mines` at zero, the count is only meaningful for safe cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub neighbor_mines: u8,
}

impl Cell {
    pub const fn is_unrevealed(&self) -> bool {
        !self.is_revealed
    }

    /// Whether this cell satisfies the win condition on its own.
    pub const fn is_settled(&self) -> bool {
        self.is_mine != self.is_revealed
    }

    pub const fn view(&self) -> CellView {
        match (self.is_revealed, self.is_mine) {
            (true, true) => CellView::Mine,
            (true, false) => CellView::Revealed(self.neighbor_mines),
            (false, _) if self.is_flagged => CellView::Flagged,
            (false, _) => CellView::Hidden,
        }
    }
}

/// What the player is allowed to see of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_hides_unrevealed_mines() {
        let cell = Cell {
            is_mine: true,
            ..Default::default()
        };
        assert_eq!(cell.view(), CellView::Hidden);
        assert_eq!(cell.view(), CellView::default());

        let flagged = Cell {
            is_flagged: true,
            ..cell
        };
        assert_eq!(flagged.view(), CellView::Flagged);
    }

    #[test]
    fn view_of_revealed_cells() {
        let safe = Cell {
            is_revealed: true,
            neighbor_mines: 3,
            ..Default::default()
        };
        assert_eq!(safe.view(), CellView::Revealed(3));

        let mine = Cell {
            is_mine: true,
            is_revealed: true,
            ..Default::default()
        };
        assert_eq!(mine.view(), CellView::Mine);
    }

    #[test]
    fn settled_cells() {
        assert!(!Cell::default().is_settled());
        assert!(Cell {
            is_mine: true,
            ..Default::default()
        }
        .is_settled());
        assert!(!Cell {
            is_mine: true,
            is_revealed: true,
            ..Default::default()
        }
        .is_settled());
    }
}
