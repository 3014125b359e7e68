use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use log::{error, LevelFilter};

use plum_rules::engines::engine_random::RandomEngine;
use plum_rules::engines::engine_trait::Engine;
use plum_rules::game_state::chess_types::Color;
use plum_rules::play::chess_game::ChessGame;
use plum_rules::play::return_play::ReturnPlay;
use plum_rules::utils::render_game_state::render_game_state;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// Both sides are entered on stdin.
    None,
    /// Black replies with a random legal move.
    Random,
}

#[derive(Parser)]
#[command(name = "plum_rules")]
#[command(about = "Play chess moves in coordinate notation, e.g. `e2 e4` or `resign`")]
#[command(version = "0.1.0")]
struct Args {
    /// Log level written to stderr
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,

    /// Who plays black
    #[arg(long, value_enum, default_value_t = Opponent::None)]
    opponent: Opponent,

    /// Do not print the board after each move
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

fn report(out: &mut impl Write, game: &ChessGame, result: &ReturnPlay, quiet: bool) -> io::Result<()> {
    if let Some(message) = result.message {
        writeln!(out, "{message}")?;
    }
    if !quiet {
        write!(out, "{}", render_game_state(game.game_state()))?;
    }
    out.flush()
}

fn main() {
    let args = Args::parse();
    if let Err(e) = setup_logging(args.log_level) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let mut game = ChessGame::new();
    let mut opponent = match args.opponent {
        Opponent::None => None,
        Opponent::Random => Some(RandomEngine::new()),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {e}");
                break;
            }
        };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        let result = match command {
            "quit" => break,
            "start" | "new" => {
                game.start();
                if let Some(engine) = opponent.as_mut() {
                    engine.new_game();
                }
                game.snapshot()
            }
            _ => game.play(command),
        };
        if let Err(e) = report(&mut stdout, &game, &result, args.quiet) {
            error!("Failed to write output: {e}");
            break;
        }

        let Some(engine) = opponent.as_mut() else {
            continue;
        };
        if result.message.is_some_and(|m| m.is_game_over()) || game.side_to_move() != Color::Black {
            continue;
        }
        match engine.choose_move(game.game_state()) {
            Ok(output) => {
                let Some(reply) = output.best_move else {
                    continue;
                };
                let reply = reply.to_command();
                let result = game.play(&reply);
                let written = writeln!(stdout, "{} plays {reply}", engine.name())
                    .and_then(|_| report(&mut stdout, &game, &result, args.quiet));
                if let Err(e) = written {
                    error!("Failed to write output: {e}");
                    break;
                }
            }
            Err(e) => error!("{} failed to choose a move: {e}", engine.name()),
        }
    }
}
