//! Error types shared by the board, placement, attack and game modules.

use crate::board::Coordinate;
use crate::game::{CommandKind, Phase};
use crate::player::PlayerId;
use crate::ship::ShipId;

/// Errors returned by cell-level board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell {0} is off the board")]
    OutOfBounds(Coordinate),
    #[error("cell {0} has already been attacked")]
    AlreadyAttacked(Coordinate),
}

/// A command arrived in a phase that does not accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("{command} is not accepted during the {phase} phase")]
    InvalidPhaseForCommand { phase: Phase, command: CommandKind },
}

/// Reasons a `PlaceShip` command is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// Some cell of the run anchored here falls off the board.
    #[error("ship anchored at {0} does not fit on the board")]
    OutOfBounds(Coordinate),
    /// The run crosses a cell that is not empty.
    #[error("ship would overlap another ship at {0}")]
    Overlap(Coordinate),
    #[error("no ship with index {0} in the fleet")]
    UnknownShip(u8),
    #[error("{0} has already been placed")]
    ShipAlreadyPlaced(ShipId),
    #[error("no room left on the board for {0}")]
    NoLegalPlacement(ShipId),
    #[error("it is not {0}'s turn to place ships")]
    NotYourTurn(PlayerId),
    #[error(transparent)]
    State(#[from] StateError),
}

/// Reasons an `Attack` command is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    /// Attack issued while fleets are still being placed.
    #[error("the game has not started; fleets are still being placed")]
    GameNotStarted,
    #[error("cell {0} has already been attacked")]
    AlreadyAttacked(Coordinate),
    #[error("it is not {0}'s turn to attack")]
    NotYourTurn(PlayerId),
    #[error("target {0} is off the board")]
    OutOfBounds(Coordinate),
    #[error(transparent)]
    State(#[from] StateError),
}

impl From<BoardError> for AttackError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds(coord) => AttackError::OutOfBounds(coord),
            BoardError::AlreadyAttacked(coord) => AttackError::AlreadyAttacked(coord),
        }
    }
}

/// Any rejection produced by [`GameState::apply`](crate::GameState::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Attack(#[from] AttackError),
}

/// A decoded snapshot describes a position no sequence of commands can
/// reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("{0} does not cover the run from its origin")]
    ShipLayout(ShipId),
    #[error("{0} records hits outside its own cells")]
    ShipHits(ShipId),
    #[error("fleet slot {slot} holds the {ship}")]
    FleetSlot { slot: usize, ship: ShipId },
    #[error("{0} overlaps another ship")]
    ShipOverlap(ShipId),
    /// Hit and miss marks overlap, or a miss sits on a ship cell.
    #[error("board marks contradict its ship cells")]
    BoardMarks,
    #[error("board occupancy does not match the fleet")]
    Occupancy,
    #[error("board hits do not match the damage on the fleet")]
    Damage,
    #[error("{0}'s shot count does not match the opponent's board")]
    ShotCount(PlayerId),
    #[error("winner {winner:?} is inconsistent with the {phase} phase")]
    Winner {
        phase: Phase,
        winner: Option<PlayerId>,
    },
    /// Fleets, shots or the active player cannot occur in this phase.
    #[error("snapshot cannot occur in the {0} phase")]
    Phase(Phase),
}
