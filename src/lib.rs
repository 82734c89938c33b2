//! Chess engine pitting two search strategies against each other: plain
//! [Minimax] and [Alpha-Beta pruning] with captures-first move ordering and
//! quiescence search.
//!
//! The engine is a set of pure functions over [`chess::board::Board`] values:
//! callers pass a snapshot, a search depth and the side to move, and get a
//! move (or "no move") back. [`game`] is such a caller, playing complete
//! games between two engines.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax
//! [Alpha-Beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning

pub mod chess;
pub mod evaluation;
pub mod game;
pub mod search;

use shadow_rs::shadow;

shadow!(build);

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
#[must_use]
pub fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the engine version and the build type.
pub fn print_engine_info() {
    println!("versus chess engine {}", engine_version());
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
}
