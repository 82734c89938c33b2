#![no_main]
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use shakmaty::{CastlingMode, Chess, Position};
use versus::chess::board::Board;
use versus::chess::legal::legal_moves;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok((board, side)) = Board::from_fen(input) else {
        return;
    };
    // Castling and en passant are not supported: compare on positions without
    // them only.
    let fen = format!("{board} {side} - - 0 1");
    let Ok(setup) = fen.parse::<shakmaty::fen::Fen>() else {
        return;
    };
    let Ok(position) = setup.into_position::<Chess>(CastlingMode::Standard) else {
        return;
    };
    assert_eq!(
        legal_moves(side, &board)
            .iter()
            .map(|m| m.to_string())
            .sorted()
            .collect::<Vec<_>>(),
        position
            .legal_moves()
            .iter()
            .map(|m| m.to_uci(CastlingMode::Standard).to_string()[..4].to_string())
            .sorted()
            .dedup()
            .collect::<Vec<_>>()
    );
});
