use ndarray::Array2;

use super::*;

/// Purely random placement: draw a uniform cell, keep it if it has no mine yet, repeat until all mines are placed.
///
/// Rejection sampling stays cheap as long as boards are sparse, which holds for every preset.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;
        log::debug!(
            "Generating {}x{} board with {} mines, seed: {:#x}",
            config.size.0,
            config.size.1,
            config.mines,
            self.seed
        );

        let (rows, cols) = config.size;
        let mut mine_mask: Array2<bool> = Array2::default(config.size.grid_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        let mut rejected: u32 = 0;

        while mines_placed < config.mines {
            let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..cols));
            let cell = &mut mine_mask[coords.grid_index()];
            if *cell {
                rejected += 1;
                continue;
            }
            *cell = true;
            mines_placed += 1;
        }
        log::trace!("Mine placement rejected {} samples", rejected);

        let board = Board::from_mine_mask(&mine_mask);

        // double check mine count
        if board.mine_count() != config.mines {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines
            );
        }
        Ok(board)
    }
}
