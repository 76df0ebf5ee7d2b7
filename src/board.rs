//! Per-player 10×10 grid, stored as three `BitBoard` masks.
//!
//! A cell's state is derived from the masks: a recorded hit or miss wins over
//! occupancy, and a cell in none of them is empty.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
#[cfg(feature = "std")]
use crate::common::SnapshotError;
use crate::config::BOARD_SIZE;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Cell mask sized for the game grid.
pub type CellMask = BitBoard<u128, GRID_SIZE>;

impl CellMask {
    /// `true` iff `coord` is on the grid and marked.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Mark `coord`. An off-grid coordinate is handed back as the error.
    pub fn mark(&mut self, coord: Coordinate) -> Result<(), Coordinate> {
        self.set(coord.row, coord.col).map_err(|_| coord)
    }
}

/// The owner's view of a board: every cell with ships visible.
pub type OwnView = [[CellState; GRID_SIZE]; GRID_SIZE];

/// The attacker's view of a board: only attacked cells are revealed.
pub type TargetView = [[TargetCell; GRID_SIZE]; GRID_SIZE];

/// Zero-based `(row, col)` position. Construction does not check bounds; the
/// board does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Coordinate::new(row, col)))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of one cell on a player's own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    /// A ship is here and the cell has not been attacked.
    Occupied,
    Hit,
    Miss,
}

impl CellState {
    pub fn is_attacked(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// State of one cell as seen by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetCell {
    Unknown,
    Hit,
    Miss,
}

impl From<CellState> for TargetCell {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Hit => TargetCell::Hit,
            CellState::Miss => TargetCell::Miss,
            CellState::Empty | CellState::Occupied => TargetCell::Unknown,
        }
    }
}

/// One player's grid: ship occupancy plus the attacks received.
///
/// Hits lie on ship cells, misses on open water, and no cell is both.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoardRecord")
)]
pub struct Board {
    ship_map: CellMask,
    hits: CellMask,
    misses: CellMask,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// State of the cell at `coord`.
    pub fn cell_at(&self, coord: Coordinate) -> Result<CellState, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds(coord));
        }
        let state = if self.hits.contains(coord) {
            CellState::Hit
        } else if self.misses.contains(coord) {
            CellState::Miss
        } else if self.ship_map.contains(coord) {
            CellState::Occupied
        } else {
            CellState::Empty
        };
        Ok(state)
    }

    /// `true` iff `coord` is on the board and empty.
    pub fn is_free(&self, coord: Coordinate) -> bool {
        matches!(self.cell_at(coord), Ok(CellState::Empty))
    }

    /// Mark every cell of `cells` as occupied. Callers validate the run
    /// first; see [`placement::validate`](crate::placement::validate).
    pub fn occupy(&mut self, cells: CellMask) {
        debug_assert!(
            (self.ship_map | self.hits | self.misses) & cells == CellMask::new(),
            "occupy called on cells that are not free"
        );
        self.ship_map |= cells;
    }

    /// Record an attack at `coord`, turning an occupied cell into `Hit` or an
    /// empty one into `Miss`. An already attacked cell is left untouched.
    pub fn record_attack(&mut self, coord: Coordinate, was_hit: bool) -> Result<CellState, BoardError> {
        let current = self.cell_at(coord)?;
        if current.is_attacked() {
            return Err(BoardError::AlreadyAttacked(coord));
        }
        let (marks, state) = if was_hit {
            (&mut self.hits, CellState::Hit)
        } else {
            (&mut self.misses, CellState::Miss)
        };
        marks.mark(coord).map_err(BoardError::OutOfBounds)?;
        Ok(state)
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> CellMask {
        self.ship_map
    }

    pub fn hits(&self) -> CellMask {
        self.hits
    }

    pub fn misses(&self) -> CellMask {
        self.misses
    }

    /// Full grid as the owner sees it.
    pub fn own_view(&self) -> OwnView {
        core::array::from_fn(|row| {
            core::array::from_fn(|col| {
                self.cell_at(Coordinate::new(row, col))
                    .unwrap_or(CellState::Empty)
            })
        })
    }

    /// Full grid as the opponent sees it; unhit ships stay hidden.
    pub fn target_view(&self) -> TargetView {
        let own = self.own_view();
        core::array::from_fn(|row| core::array::from_fn(|col| TargetCell::from(own[row][col])))
    }
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct BoardRecord {
    ship_map: CellMask,
    hits: CellMask,
    misses: CellMask,
}

#[cfg(feature = "std")]
impl TryFrom<BoardRecord> for Board {
    type Error = SnapshotError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let BoardRecord {
            ship_map,
            hits,
            misses,
        } = record;
        let hits_on_ships = (hits & ship_map) == hits;
        let misses_in_water = (misses & ship_map).is_empty();
        if !hits_on_ships || !misses_in_water || !(hits & misses).is_empty() {
            return Err(SnapshotError::BoardMarks);
        }
        Ok(Board {
            ship_map,
            hits,
            misses,
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ship_map", &self.ship_map)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
