//! Command-line front-end: search, list moves, evaluate positions and run
//! engine games from FEN input.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use versus::chess::board::{Board, STARTING_FEN};
use versus::chess::core::{Color, PieceKind};
use versus::chess::legal::{status, Status};
use versus::evaluation::evaluate;
use versus::game::{Game, Player};
use versus::search::ordering::ordered_moves;
use versus::search::{AlphaBeta, Algorithm, Depth, Minimax, Search, SearchConfig};

/// Chess engine pitting plain minimax against alpha-beta search with
/// quiescence.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Searches the position and prints the best move.
    Best {
        /// Position in FEN notation; castling and en passant are ignored.
        #[arg(long, default_value = STARTING_FEN)]
        fen: String,
        #[arg(long, default_value_t = 3)]
        depth: Depth,
        #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
        algorithm: Algorithm,
        /// Evaluate alpha-beta leaves directly instead of resolving captures.
        #[arg(long)]
        no_quiescence: bool,
    },
    /// Prints legal moves of the side to move, captures first.
    Moves {
        #[arg(long, default_value = STARTING_FEN)]
        fen: String,
    },
    /// Prints the static evaluation of the position.
    Eval {
        #[arg(long, default_value = STARTING_FEN)]
        fen: String,
    },
    /// Plays a game between two engines.
    Play {
        #[arg(long, default_value = STARTING_FEN)]
        fen: String,
        #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
        white: Algorithm,
        #[arg(long, value_enum, default_value_t = Algorithm::Minimax)]
        black: Algorithm,
        #[arg(long, default_value_t = 3)]
        white_depth: Depth,
        #[arg(long, default_value_t = 3)]
        black_depth: Depth,
        #[arg(long, default_value_t = Game::DEFAULT_MAX_PLIES)]
        max_plies: usize,
        /// Piece pawns are promoted to: q, r, b or n.
        #[arg(long, default_value = "q", value_parser = parse_promotion)]
        promotion: PieceKind,
    },
    /// Prints the engine version and build information.
    Info,
}

fn parse_promotion(input: &str) -> anyhow::Result<PieceKind> {
    let mut chars = input.chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        anyhow::bail!("promotion should be a single letter, got {input:?}");
    };
    match PieceKind::try_from(symbol)? {
        kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            Ok(kind)
        },
        kind => anyhow::bail!("can not promote to {kind}"),
    }
}

fn parse_board(fen: &str) -> anyhow::Result<(Board, Color)> {
    Board::from_fen(fen).with_context(|| format!("parsing position {fen:?}"))
}

fn best(fen: &str, depth: Depth, algorithm: Algorithm, quiescence: bool) -> anyhow::Result<()> {
    let (board, side) = parse_board(fen)?;
    let config = SearchConfig::new(depth, side);
    let result = match algorithm {
        Algorithm::Minimax => Minimax.search(&board, config),
        Algorithm::AlphaBeta => AlphaBeta { quiescence }.search(&board, config),
    };
    match result.best_move {
        Some(best_move) => println!(
            "bestmove {best_move} score {} nodes {}",
            result.score, result.nodes
        ),
        None => match status(side, &board) {
            Status::Checkmate => println!("bestmove (none) checkmate"),
            Status::Stalemate | Status::Ongoing => println!("bestmove (none) stalemate"),
        },
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Best {
            fen,
            depth,
            algorithm,
            no_quiescence,
        } => best(&fen, depth, algorithm, !no_quiescence)?,
        Command::Moves { fen } => {
            let (board, side) = parse_board(&fen)?;
            for next_move in ordered_moves(side, &board, false) {
                println!("{next_move}");
            }
        },
        Command::Eval { fen } => {
            let (board, _) = parse_board(&fen)?;
            println!("{}", evaluate(&board));
        },
        Command::Play {
            fen,
            white,
            black,
            white_depth,
            black_depth,
            max_plies,
            promotion,
        } => {
            let (board, side) = parse_board(&fen)?;
            let mut game = Game::new(
                board,
                side,
                Player::new(white, white_depth),
                Player::new(black, black_depth),
            )
            .with_promotion(promotion)
            .with_max_plies(max_plies);
            while let Some(next_move) = game.step() {
                println!("{next_move}");
            }
            println!("{}", game.play());
        },
        Command::Info => versus::print_engine_info(),
    }
    Ok(())
}
