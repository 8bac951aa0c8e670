/// Single grid axis, used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Grid position or size as `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Converts a `(row, col)` pair into the index `ndarray` expects.
pub trait GridIndex {
    fn grid_index(self) -> [usize; 2];
}

impl GridIndex for Coord2 {
    fn grid_index(self) -> [usize; 2] {
        [usize::from(self.0), usize::from(self.1)]
    }
}

/// Whether `coords` lies inside a grid of `size`.
pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    let next_col = col.checked_add_signed(d_col)?;
    let next = (next_row, next_col);

    in_bounds(next, bounds).then_some(next)
}

/// Moore neighborhood of a cell, clipped at the grid edges.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (8, 8)).count(), 3);
        assert_eq!(NeighborIter::new((7, 7), (8, 8)).count(), 3);
    }

    #[test]
    fn edge_and_center_neighbor_counts() {
        assert_eq!(NeighborIter::new((0, 4), (8, 8)).count(), 5);
        assert_eq!(NeighborIter::new((4, 4), (8, 8)).count(), 8);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn neighbors_exclude_center() {
        assert!(NeighborIter::new((2, 3), (5, 5)).all(|pos| pos != (2, 3)));
    }

    #[test]
    fn grid_index_is_row_major() {
        assert_eq!((3u8, 7u8).grid_index(), [3, 7]);
    }
}
