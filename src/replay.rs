use anyhow::{bail, Context};
use clap::Parser;
use log::{info, warn};

use capture_chess::Game;

/// Plays a list of moves on a fresh board and prints the final game state.
#[derive(Parser, Debug)]
#[command(name = "replay", version)]
struct Args {
    /// Moves as square pairs, either `e2 e4` or `e2-e4`
    moves: Vec<String>,
    /// Stop at the first rejected move instead of skipping it
    #[arg(long)]
    fail_fast: bool,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn parse_moves(tokens: &[String]) -> anyhow::Result<Vec<(&str, &str)>> {
    let squares: Vec<&str> = tokens
        .iter()
        .flat_map(|token| token.split('-'))
        .filter(|square| !square.is_empty())
        .collect();
    if squares.len() % 2 != 0 {
        bail!("{} squares given, moves need pairs", squares.len());
    }
    Ok(squares.chunks(2).map(|pair| (pair[0], pair[1])).collect())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let moves = parse_moves(&args.moves).context("Can't read move list")?;
    let mut game = Game::new();
    for (number, (start, end)) in moves.into_iter().enumerate() {
        let number = number + 1;
        match game.try_move(start, end) {
            Ok(record) => info!("{number:>3}. {record}"),
            Err(err) if args.fail_fast => {
                return Err(anyhow::Error::new(err).context(format!("Move {number} ({start} {end})")));
            }
            Err(err) => warn!("{number:>3}. {start} {end} rejected: {err}"),
        }
    }
    if !game.status().is_finished() {
        info!("{} to move", game.current_player());
    }
    println!("{}", game.status());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_list_forms() {
        let tokens: Vec<String> = ["e2", "e4", "d7-d5", "e4-", "d5"]
            .into_iter()
            .map(String::from)
            .collect();
        let moves = parse_moves(&tokens).unwrap();
        assert_eq!(moves, [("e2", "e4"), ("d7", "d5"), ("e4", "d5")]);
        assert!(parse_moves(&tokens[..1]).is_err());
    }
}
