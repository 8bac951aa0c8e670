use alloc::collections::VecDeque;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Lost,
    Won,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The single active game: current board, its difficulty, and where play stands.
///
/// Moves that make no sense in the current position are ignored rather than rejected, the returned outcome says
/// whether anything changed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "GameData")]
pub struct Game {
    board: Board,
    difficulty: Difficulty,
    state: GameState,
    triggered_mine: Option<Coord2>,
    revealed_count: CellCount,
    #[serde(skip)]
    seed_source: SmallRng,
}

/// Serialized snapshot, accepted only when its bookkeeping agrees with the board.
#[derive(Deserialize)]
struct GameData {
    board: Board,
    difficulty: Difficulty,
    state: GameState,
    triggered_mine: Option<Coord2>,
    revealed_count: CellCount,
}

impl TryFrom<GameData> for Game {
    type Error = GameError;

    fn try_from(data: GameData) -> Result<Self> {
        let game = Self::from_parts(data.difficulty, data.board, default_seed_source());
        if game.state != data.state
            || game.triggered_mine != data.triggered_mine
            || game.revealed_count != data.revealed_count
        {
            return Err(GameError::InconsistentBoard);
        }
        Ok(game)
    }
}

fn default_seed_source() -> SmallRng {
    SmallRng::seed_from_u64(DEFAULT_SEED)
}

impl Game {
    /// Starts a game on a fresh board for `difficulty`, later boards draw their seeds from `seed`.
    pub fn new(difficulty: Difficulty, seed: u64) -> Result<Self> {
        let mut seed_source = SmallRng::seed_from_u64(seed);
        let board = RandomBoardGenerator::new(seed_source.random()).generate(difficulty.config())?;
        Ok(Self::from_parts(difficulty, board, seed_source))
    }

    /// Plays on a prebuilt board, `difficulty` is only used for later restarts.
    ///
    /// The state is read off the board: a revealed mine means the game is lost, a cleared board means it is won.
    pub fn with_board(difficulty: Difficulty, board: Board) -> Self {
        Self::from_parts(difficulty, board, default_seed_source())
    }

    fn from_parts(difficulty: Difficulty, board: Board, seed_source: SmallRng) -> Self {
        let revealed_count = board
            .iter()
            .filter(|(_, cell)| cell.is_revealed && !cell.is_mine)
            .count() as CellCount;
        let triggered_mine = board
            .iter()
            .find(|(_, cell)| cell.is_revealed && cell.is_mine)
            .map(|(coords, _)| coords);

        let state = if triggered_mine.is_some() {
            GameState::Lost
        } else if revealed_count == board.safe_cell_count() {
            GameState::Won
        } else {
            GameState::Playing
        };

        Self {
            board,
            difficulty,
            state,
            triggered_mine,
            revealed_count,
            seed_source,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::Lost)
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.board.get(coords)
    }

    pub fn view_at(&self, coords: Coord2) -> Option<CellView> {
        self.board.get(coords).map(Cell::view)
    }

    /// Safe cells revealed so far. A triggered mine is not counted, unlike [`Board::revealed_count`].
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.board.flagged_count()
    }

    /// Total mines minus placed flags, negative once the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flagged_count() as isize)
    }

    /// Replaces the board with a fresh one for `difficulty` and resumes play.
    pub fn new_game(&mut self, difficulty: Difficulty) -> Result<()> {
        let seed = self.seed_source.random();
        let board = RandomBoardGenerator::new(seed).generate(difficulty.config())?;
        log::debug!("New {} game", difficulty);

        self.board = board;
        self.difficulty = difficulty;
        self.state = GameState::Playing;
        self.triggered_mine = None;
        self.revealed_count = 0;
        Ok(())
    }

    pub fn restart(&mut self) -> Result<()> {
        self.new_game(self.difficulty)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if !self.state.is_playing() {
            log::trace!("Ignoring flag at {:?}: game is {:?}", coords, self.state);
            return MarkOutcome::NoChange;
        }

        match self.board.get_mut(coords) {
            Some(cell) if cell.is_unrevealed() => {
                cell.is_flagged = !cell.is_flagged;
                MarkOutcome::Changed
            }
            Some(_) => MarkOutcome::NoChange,
            None => {
                log::trace!("Ignoring flag at {:?}: out of bounds", coords);
                MarkOutcome::NoChange
            }
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.state.is_playing() {
            log::trace!("Ignoring reveal at {:?}: game is {:?}", coords, self.state);
            return RevealOutcome::NoChange;
        }

        let Some(&cell) = self.board.get(coords) else {
            log::trace!("Ignoring reveal at {:?}: out of bounds", coords);
            return RevealOutcome::NoChange;
        };
        if cell.is_flagged || cell.is_revealed {
            return RevealOutcome::NoChange;
        }

        if cell.is_mine {
            if let Some(cell) = self.board.get_mut(coords) {
                cell.is_revealed = true;
            }
            self.triggered_mine = Some(coords);
            self.state = GameState::Lost;
            log::debug!("Mine hit at {:?}", coords);
            return RevealOutcome::HitMine;
        }

        let opened = self.flood_reveal(coords);
        log::trace!("Reveal at {:?} opened {} cells", coords, opened);

        if self.revealed_count == self.board.safe_cell_count() {
            debug_assert!(self.board.is_cleared());
            self.state = GameState::Won;
            log::debug!("Board cleared");
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Opens `start` and cascades through zero-count cells, returns how many cells were opened.
    ///
    /// `start` must be a hidden safe cell. Zero-count cells have no mine neighbors, so the cascade never reaches a
    /// mine. Safe cells flagged by mistake are opened too and lose their flag.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let Some(cell) = self.board.get_mut(visit_coords) else {
                continue;
            };
            if cell.is_revealed || cell.is_mine {
                continue;
            }

            cell.is_revealed = true;
            cell.is_flagged = false;
            opened += 1;

            if cell.neighbor_mines == 0 {
                to_visit.extend(
                    self.board
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| !self.board[pos].is_revealed),
                );
            }
        }

        self.revealed_count += opened;
        opened
    }
}
