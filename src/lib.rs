#![cfg_attr(not(feature = "std"), no_std)]

pub mod attack;
mod bitboard;
pub mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
pub mod prelude;
mod ship;

pub use attack::{AttackOutcome, AttackResult};
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::{Board, CellMask, CellState, Coordinate, OwnView, TargetCell, TargetView};
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
pub use player::*;
pub use ship::*;
