//! Attack resolution against a defending player.

use crate::board::Coordinate;
use crate::common::AttackError;
use crate::player::PlayerState;
use crate::ship::ShipId;

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Shot landed in open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit(ShipId),
    /// Shot hit the last intact cell of a ship.
    Sink(ShipId),
}

impl AttackResult {
    pub fn is_hit(self) -> bool {
        !matches!(self, AttackResult::Miss)
    }

    /// The ship struck, if any.
    pub fn ship(self) -> Option<ShipId> {
        match self {
            AttackResult::Miss => None,
            AttackResult::Hit(id) | AttackResult::Sink(id) => Some(id),
        }
    }
}

/// What an accepted attack did, for the front end to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub target: Coordinate,
    pub result: AttackResult,
    /// Every ship of the defender is now sunk.
    pub game_won: bool,
}

/// Fire at `target` on `defender`'s board.
///
/// A cell can only be attacked once: a repeated target fails with
/// `AlreadyAttacked` and leaves `defender` exactly as it was.
pub fn resolve(defender: &mut PlayerState, target: Coordinate) -> Result<AttackOutcome, AttackError> {
    let cell = defender.board.cell_at(target)?;
    if cell.is_attacked() {
        return Err(AttackError::AlreadyAttacked(target));
    }

    // Placement never overlaps ships, so at most one matches.
    let result = match defender.fleet.ship_at_mut(target) {
        Some(ship) => {
            let struck = ship.register_hit(target);
            debug_assert!(struck, "ship_at_mut returned a ship not covering {}", target);
            if ship.is_sunk() {
                AttackResult::Sink(ship.id())
            } else {
                AttackResult::Hit(ship.id())
            }
        }
        None => AttackResult::Miss,
    };
    defender.board.record_attack(target, result.is_hit())?;

    Ok(AttackOutcome {
        target,
        result,
        game_won: defender.fleet.all_sunk(),
    })
}
