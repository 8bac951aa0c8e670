#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use difficulty::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod difficulty;
mod error;
mod game;
mod generator;
mod types;

/// Dimensions and mine count of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Accepts any non-empty grid that leaves at least one safe cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 || self.mines >= self.total_cells() {
            return Err(GameError::InvalidConfiguration {
                rows,
                cols,
                mines: self.mines,
            });
        }
        Ok(())
    }

    /// Never overflows, `Coord::MAX` squared still fits a `CellCount`.
    pub const fn total_cells(&self) -> CellCount {
        self.size.0 as CellCount * self.size.1 as CellCount
    }
}

/// Result of a flag toggle; ignored moves report `NoChange`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Result of a reveal; ignored moves report `NoChange`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Whether this move ended the game.
    pub const fn ends_game(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_degenerate_boards() {
        assert!(BoardConfig::new((0, 8), 0).is_err());
        assert!(BoardConfig::new((8, 0), 0).is_err());
        assert!(BoardConfig::new((2, 2), 4).is_err());
        assert!(BoardConfig::new((2, 2), 3).is_ok());
        assert!(BoardConfig::new((1, 1), 0).is_ok());
    }

    #[test]
    fn config_error_carries_request() {
        assert_eq!(
            BoardConfig::new((3, 3), 9),
            Err(GameError::InvalidConfiguration {
                rows: 3,
                cols: 3,
                mines: 9
            })
        );
    }

    #[test]
    fn only_no_change_skips_redraw() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::HitMine.has_update());
        assert!(!MarkOutcome::NoChange.has_update());
        assert!(MarkOutcome::Changed.has_update());
    }

    #[test]
    fn terminal_outcomes() {
        assert!(RevealOutcome::Won.ends_game());
        assert!(RevealOutcome::HitMine.ends_game());
        assert!(!RevealOutcome::Revealed.ends_game());
        assert!(!RevealOutcome::NoChange.ends_game());
    }
}
