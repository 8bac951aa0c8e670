use core::str::FromStr;
use minefield_core::{Coord, Coord2, Difficulty, GameError};
use thiserror::Error;

pub const USAGE: &str = "commands: r ROW COL | f ROW COL | n [easy|medium|hard] | json | q";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame(Option<Difficulty>),
    Json,
    Redraw,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("expected ROW COL after `{0}`")]
    MissingCoords(String),
    #[error("invalid coordinate `{0}`")]
    InvalidCoord(String),
    #[error("unexpected argument `{0}`")]
    TrailingInput(String),
    #[error(transparent)]
    Difficulty(#[from] GameError),
}

fn parse_coords<'a>(verb: &str, args: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, CommandError> {
    let mut next_coord = || -> Result<Coord, CommandError> {
        let arg = args
            .next()
            .ok_or_else(|| CommandError::MissingCoords(verb.to_owned()))?;
        arg.parse()
            .map_err(|_| CommandError::InvalidCoord(arg.to_owned()))
    };
    let row = next_coord()?;
    let col = next_coord()?;
    Ok((row, col))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut args = line.split_whitespace();
        let Some(verb) = args.next() else {
            return Ok(Self::Redraw);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(verb, &mut args)?),
            "f" | "flag" => Self::Flag(parse_coords(verb, &mut args)?),
            "n" | "new" => Self::NewGame(args.next().map(str::parse::<Difficulty>).transpose()?),
            "json" => Self::Json,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(verb.to_owned())),
        };

        match args.next() {
            Some(extra) => Err(CommandError::TrailingInput(extra.to_owned())),
            None => Ok(command),
        }
    }
}
