//! Ship definitions and per-ship damage tracking on a `BitBoard` mask.

use core::fmt;

use crate::board::{CellMask, Coordinate};
use crate::common::PlacementError;
#[cfg(feature = "std")]
use crate::common::SnapshotError;
use crate::config::{FLEET, NUM_SHIPS};
use crate::placement;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The cell `k` steps from `anchor` along this orientation, or `None` if
    /// the index overflows.
    pub fn step(self, anchor: Coordinate, k: usize) -> Option<Coordinate> {
        match self {
            Orientation::Horizontal => Some(Coordinate::new(anchor.row, anchor.col.checked_add(k)?)),
            Orientation::Vertical => Some(Coordinate::new(anchor.row.checked_add(k)?, anchor.col)),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Identity of one ship of the fixed fleet. Always a valid index into
/// [`FLEET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct ShipId(pub(crate) u8);

impl ShipId {
    pub const BATTLESHIP: ShipId = ShipId(0);
    pub const CRUISER: ShipId = ShipId(1);
    pub const DESTROYER: ShipId = ShipId(2);
    pub const SUBMARINE: ShipId = ShipId(3);
    pub const PATROL_BOAT: ShipId = ShipId(4);

    /// Id for the fleet slot `index`, if there is one.
    pub fn new(index: usize) -> Option<Self> {
        (index < NUM_SHIPS).then_some(ShipId(index as u8))
    }

    /// Every ship of the fleet in placement order.
    pub fn all() -> impl Iterator<Item = ShipId> {
        (0..NUM_SHIPS as u8).map(ShipId)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn ship_type(self) -> ShipType {
        FLEET[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.ship_type().name()
    }

    pub fn length(self) -> usize {
        self.ship_type().length()
    }
}

impl TryFrom<u8> for ShipId {
    type Error = PlacementError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        ShipId::new(index as usize).ok_or(PlacementError::UnknownShip(index))
    }
}

impl From<ShipId> for u8 {
    fn from(id: ShipId) -> Self {
        id.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship placed on the board, with hits tracked per cell.
///
/// Hits live in a mask that is always a subset of the ship's own cells, so
/// the hit count can never exceed the length.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ShipRecord")
)]
pub struct Ship {
    id: ShipId,
    orientation: Orientation,
    origin: Coordinate,
    mask: CellMask,
    hits: CellMask,
}

impl Ship {
    /// Lay out ship `id` from `origin` along `orientation`. Fails with
    /// `OutOfBounds` if any cell of the run leaves the board; overlap with
    /// other ships is not checked here.
    pub fn new(
        id: ShipId,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        let mask = placement::cell_run(origin, orientation, id.length())?;
        Ok(Ship {
            id,
            orientation,
            origin,
            mask,
            hits: CellMask::new(),
        })
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn length(&self) -> usize {
        self.id.length()
    }

    /// Anchor cell the run extends from.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> CellMask {
        self.mask
    }

    /// Cells the ship occupies, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        self.mask.iter_set_bits().map(Coordinate::from)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.mask.contains(coord)
    }

    /// Cells of the ship that have been hit.
    pub fn hits(&self) -> CellMask {
        self.hits
    }

    /// Record a hit at `coord`. Returns `false` if the ship does not occupy
    /// that cell. Hitting the same cell twice counts once.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        if !self.contains(coord) {
            return false;
        }
        self.hits.mark(coord).is_ok()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_count() == self.length()
    }
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct ShipRecord {
    id: ShipId,
    orientation: Orientation,
    origin: Coordinate,
    mask: CellMask,
    hits: CellMask,
}

#[cfg(feature = "std")]
impl TryFrom<ShipRecord> for Ship {
    type Error = SnapshotError;

    fn try_from(record: ShipRecord) -> Result<Self, Self::Error> {
        let ShipRecord {
            id,
            orientation,
            origin,
            mask,
            hits,
        } = record;
        let mut ship = Ship::new(id, origin, orientation).map_err(|_| SnapshotError::ShipLayout(id))?;
        if ship.mask != mask {
            return Err(SnapshotError::ShipLayout(id));
        }
        if (hits & mask) != hits {
            return Err(SnapshotError::ShipHits(id));
        }
        ship.hits = hits;
        Ok(ship)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {}/{} }}",
            self.id.name(),
            self.origin,
            self.orientation,
            self.hit_count(),
            self.length(),
        )
    }
}
