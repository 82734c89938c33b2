#![no_main]
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use versus::chess::board::Board;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok((board, side)) = Board::from_fen(input) else {
        return;
    };
    // Printing the board back and parsing it again gives the same position.
    let reparsed = Board::from_fen(&format!("{board} {side}"))
        .expect("printed boards should be parsed back");
    assert_eq!(reparsed, (board, side));
});
