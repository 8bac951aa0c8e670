use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use minefield_core::{Difficulty, Game};
use tracing_subscriber::filter::LevelFilter;

mod command;
mod render;

use command::{Command, USAGE};

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset to start with
    #[arg(short, long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_logging(filter: log::LevelFilter) {
    let level = match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn draw(out: &mut impl Write, game: &Game) -> io::Result<()> {
    write!(out, "{}", render::board(game))?;
    writeln!(out, "{}", render::status_line(game))?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut game = Game::new(args.difficulty, seed).context("Could not create game")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{USAGE}")?;
    draw(&mut out, &game)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}\n{USAGE}")?;
                continue;
            }
        };
        log::trace!("command: {:?}", command);

        match command {
            Command::Reveal(coords) => {
                let outcome = game.reveal(coords);
                log::debug!("reveal {:?}: {:?}", coords, outcome);
                if outcome.ends_game() {
                    log::info!("{} game finished: {:?}", game.difficulty(), game.state());
                }
            }
            Command::Flag(coords) => {
                let outcome = game.toggle_flag(coords);
                log::debug!("flag {:?}: {:?}", coords, outcome);
            }
            Command::NewGame(difficulty) => {
                let difficulty = difficulty.unwrap_or(game.difficulty());
                game.new_game(difficulty).context("Could not start new game")?;
            }
            Command::Json => {
                serde_json::to_writer_pretty(&mut out, &game)?;
                writeln!(out)?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{USAGE}")?;
                continue;
            }
            Command::Redraw => {}
            Command::Quit => break,
        }

        draw(&mut out, &game)?;
    }

    Ok(())
}
