//! Implementation of the chess rules the engine needs: board representation,
//! move generation and legality.
//!
//! Castling, en passant and promotion are not part of the rules here: the
//! move generator does not produce those moves and promotion is resolved by
//! the caller (see [`crate::game`]).

pub mod attacks;
pub mod board;
pub mod core;
pub mod legal;
pub mod movegen;
