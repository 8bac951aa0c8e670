use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells with mines placed and neighbor counts precomputed.
///
/// Every board upholds two invariants from construction on: exactly [`Board::mine_count`] cells are mines, and each
/// safe cell's `neighbor_mines` equals the number of mines in its clipped Moore neighborhood.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

/// Untrusted serialized form, only turned into a [`Board`] once the layout checks out.
#[derive(Deserialize)]
struct BoardData {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl TryFrom<BoardData> for Board {
    type Error = GameError;

    /// Rebuilds the counts from the stored mines and keeps only the player-visible flags from the input.
    fn try_from(data: BoardData) -> Result<Self> {
        let (rows, cols) = data.cells.dim();
        let (Ok(rows), Ok(cols)) = (Coord::try_from(rows), Coord::try_from(cols)) else {
            return Err(GameError::InvalidBoardShape);
        };

        let mine_mask = data.cells.map(|cell| cell.is_mine);
        let mut board = Self::from_mine_mask(&mine_mask);
        BoardConfig::new((rows, cols), board.mine_count)?;
        if board.mine_count != data.mine_count {
            return Err(GameError::InconsistentBoard);
        }

        for (cell, stored) in board.cells.iter_mut().zip(data.cells.iter()) {
            if cell.neighbor_mines != stored.neighbor_mines || (stored.is_revealed && stored.is_flagged) {
                return Err(GameError::InconsistentBoard);
            }
            cell.is_revealed = stored.is_revealed;
            cell.is_flagged = stored.is_flagged;
        }
        Ok(board)
    }
}

impl Board {
    /// Builds a board from a mine mask, computing every neighbor count.
    ///
    /// The mask must come from a validated [`BoardConfig`], so both axes fit in a [`Coord`].
    pub(crate) fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let (rows, cols) = mine_mask.dim();
        let size = (rows as Coord, cols as Coord);

        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            let is_mine = mine_mask[[row, col]];
            let neighbor_mines = if is_mine {
                0
            } else {
                NeighborIter::new((row as Coord, col as Coord), size)
                    .filter(|&pos| mine_mask[pos.grid_index()])
                    .count() as u8
            };
            Cell {
                is_mine,
                neighbor_mines,
                ..Default::default()
            }
        });
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;

        Self { cells, mine_count }
    }

    /// Builds a board with mines at exactly the given coordinates, duplicates are merged.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.grid_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.grid_index()] = true;
        }

        let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        BoardConfig::new(size, mines)?;

        Ok(Self::from_mine_mask(&mine_mask))
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size())
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.contains(coords).then(|| &self.cells[coords.grid_index()])
    }

    pub(crate) fn get_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        if self.contains(coords) {
            Some(&mut self.cells[coords.grid_index()])
        } else {
            None
        }
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Counts mines around `coords` straight from the grid, ignoring the stored count.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }

    /// Row-major walk over every cell together with its position.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: Coord) -> impl Iterator<Item = &Cell> {
        self.cells.row(row.into()).into_iter()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_revealed).count() as CellCount
    }

    pub fn flagged_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged).count() as CellCount
    }

    /// Every safe cell is revealed and no mine is.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Cell::is_settled)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.grid_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_neighbors_of_fixed_layout() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(board.mine_count(), 2);
        assert_eq!(board[(1, 1)].neighbor_mines, 2);
        assert_eq!(board[(0, 1)].neighbor_mines, 1);
        assert_eq!(board[(0, 2)].neighbor_mines, 0);
        assert_eq!(board[(2, 2)].neighbor_mines, 0);
        assert!(board[(2, 2)].is_mine);
    }

    #[test]
    fn duplicate_mine_coords_are_merged() {
        let board = Board::from_mine_coords((2, 2), &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.safe_cell_count(), 3);
    }

    #[test]
    fn rejects_out_of_bounds_mine() {
        assert_eq!(
            Board::from_mine_coords((2, 3), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn rejects_fully_mined_layout() {
        assert!(matches!(
            Board::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn rebuilds_from_own_serialized_form() {
        let mut board = Board::from_mine_coords((3, 4), &[(0, 0), (2, 3)]).unwrap();
        if let Some(cell) = board.get_mut((1, 1)) {
            cell.is_revealed = true;
        }
        if let Some(cell) = board.get_mut((2, 3)) {
            cell.is_flagged = true;
        }
        let data = BoardData {
            cells: board.cells.clone(),
            mine_count: board.mine_count,
        };
        assert_eq!(Board::try_from(data), Ok(board));
    }

    #[test]
    fn rejects_wrong_mine_count() {
        let board = Board::from_mine_coords((8, 8), &[(3, 3)]).unwrap();
        let data = BoardData {
            cells: board.cells,
            mine_count: 100,
        };
        assert_eq!(Board::try_from(data), Err(GameError::InconsistentBoard));
    }

    #[test]
    fn rejects_wrong_neighbor_count() {
        let mut board = Board::from_mine_coords((3, 3), &[(0, 0)]).unwrap();
        if let Some(cell) = board.get_mut((2, 2)) {
            cell.neighbor_mines = 4;
        }
        let data = BoardData {
            cells: board.cells,
            mine_count: 1,
        };
        assert_eq!(Board::try_from(data), Err(GameError::InconsistentBoard));
    }

    #[test]
    fn rejects_fully_mined_data() {
        let mine = Cell {
            is_mine: true,
            ..Default::default()
        };
        let data = BoardData {
            cells: Array2::from_elem((2, 2), mine),
            mine_count: 4,
        };
        assert!(matches!(
            Board::try_from(data),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn get_is_bounds_checked() {
        let board = Board::from_mine_coords((16, 30), &[]).unwrap();
        assert_eq!(board.size(), (16, 30));
        assert!(board.get((15, 29)).is_some());
        assert!(board.get((16, 0)).is_none());
        assert!(board.get((0, 30)).is_none());
    }

    #[test]
    fn fresh_board_is_fully_hidden() {
        let board = Board::from_mine_coords((4, 4), &[(1, 2)]).unwrap();
        assert_eq!(board.revealed_count(), 0);
        assert_eq!(board.flagged_count(), 0);
        assert!(!board.is_cleared());
        assert_eq!(board.iter().count(), 16);
        assert_eq!(board.row(1).filter(|cell| cell.is_mine).count(), 1);
    }
}
