//! Commonly used types for ease of import.

pub use crate::{
    AttackError, AttackOutcome, AttackResult, CellState, Command, Coordinate, GameEngine,
    GameState, Orientation, Phase, PlacementError, PlayerId, ShipId, TargetCell,
};

#[cfg(feature = "std")]
pub use crate::cli::{parse_coord, parse_placement, run_local};
