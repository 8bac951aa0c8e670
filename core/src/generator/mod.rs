use crate::*;
pub use random::*;

mod random;

/// Seed used when the caller does not provide one; `no_std` has no entropy source to draw from.
pub const DEFAULT_SEED: u64 = 0x6d69_6e65_6669_656c;

pub trait BoardGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board>;
}

/// Builds a fresh `rows` x `cols` board with `mine_count` randomly placed mines.
pub fn generate(rows: Coord, cols: Coord, mine_count: CellCount, seed: Option<u64>) -> Result<Board> {
    let config = BoardConfig::new((rows, cols), mine_count)?;
    RandomBoardGenerator::new(seed.unwrap_or(DEFAULT_SEED)).generate(config)
}
