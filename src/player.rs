use core::fmt;

use crate::board::{Board, Coordinate};
#[cfg(feature = "std")]
use crate::board::CellMask;
#[cfg(feature = "std")]
use crate::common::SnapshotError;
use crate::config::NUM_SHIPS;
use crate::ship::{Orientation, Ship, ShipId};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Status of one fleet slot, as reported to front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipStatus {
    pub id: ShipId,
    pub position: Option<(Coordinate, Orientation)>,
    pub hits: usize,
    pub sunk: bool,
}

/// The five ship slots of a player, indexed by [`ShipId`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships[id.index()].as_ref()
    }

    pub fn is_placed(&self, id: ShipId) -> bool {
        self.ships[id.index()].is_some()
    }

    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// First ship in fleet order still waiting to be placed.
    pub fn next_unplaced(&self) -> Option<ShipId> {
        ShipId::all().find(|&id| !self.is_placed(id))
    }

    /// Placed ships in fleet order.
    pub fn placed(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// `true` once every ship is placed and sunk. An incomplete fleet is
    /// never considered sunk.
    pub fn all_sunk(&self) -> bool {
        self.all_placed() && self.placed().all(Ship::is_sunk)
    }

    /// The ship covering `coord`, if any.
    pub fn ship_at_mut(&mut self, coord: Coordinate) -> Option<&mut Ship> {
        self.ships
            .iter_mut()
            .flatten()
            .find(|ship| ship.contains(coord))
    }

    pub fn status(&self) -> [ShipStatus; NUM_SHIPS] {
        core::array::from_fn(|i| {
            let slot = self.ships[i];
            ShipStatus {
                id: ShipId(i as u8),
                position: slot.map(|s| (s.origin(), s.orientation())),
                hits: slot.map_or(0, |s| s.hit_count()),
                sunk: slot.is_some_and(|s| s.is_sunk()),
            }
        })
    }

    pub(crate) fn insert(&mut self, ship: Ship) {
        self.ships[ship.id().index()] = Some(ship);
    }
}

/// Everything one player owns: a board and the fleet placed on it.
///
/// The board's ship cells and hits are exactly those of the fleet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PlayerRecord")
)]
pub struct PlayerState {
    pub(crate) board: Board,
    pub(crate) fleet: Fleet,
    pub(crate) shots_fired: usize,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// `true` once every ship of the fleet has been placed.
    pub fn placement_complete(&self) -> bool {
        self.fleet.all_placed()
    }

    /// Attacks this player has had accepted.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct PlayerRecord {
    board: Board,
    fleet: Fleet,
    shots_fired: usize,
}

#[cfg(feature = "std")]
impl TryFrom<PlayerRecord> for PlayerState {
    type Error = SnapshotError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        let PlayerRecord {
            board,
            fleet,
            shots_fired,
        } = record;

        let mut occupied = CellMask::new();
        let mut damaged = CellMask::new();
        for (slot, ship) in fleet.ships.iter().enumerate() {
            let Some(ship) = ship else { continue };
            if ship.id().index() != slot {
                return Err(SnapshotError::FleetSlot {
                    slot,
                    ship: ship.id(),
                });
            }
            if !(occupied & ship.mask()).is_empty() {
                return Err(SnapshotError::ShipOverlap(ship.id()));
            }
            occupied |= ship.mask();
            damaged |= ship.hits();
        }
        if board.ship_map() != occupied {
            return Err(SnapshotError::Occupancy);
        }
        if board.hits() != damaged {
            return Err(SnapshotError::Damage);
        }

        Ok(PlayerState {
            board,
            fleet,
            shots_fired,
        })
    }
}
