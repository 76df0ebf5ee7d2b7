//! Placement validation: computing the cell run for a ship and checking it
//! against a board before anything is written.

use rand::Rng;

use crate::board::{Board, CellMask, Coordinate};
use crate::common::PlacementError;
use crate::player::PlayerState;
use crate::ship::{Orientation, Ship, ShipId};

/// Cells a ship of `length` would cover from `anchor`. Fails with
/// `OutOfBounds` as soon as one of them is off the board.
pub fn cell_run(
    anchor: Coordinate,
    orientation: Orientation,
    length: usize,
) -> Result<CellMask, PlacementError> {
    let mut mask = CellMask::new();
    for k in 0..length {
        orientation
            .step(anchor, k)
            .and_then(|cell| mask.mark(cell).ok())
            .ok_or(PlacementError::OutOfBounds(anchor))?;
    }
    Ok(mask)
}

/// Bounds check then overlap check for a run on `board`. Returns the run's
/// mask when every cell is in bounds and empty.
pub fn validate(
    board: &Board,
    anchor: Coordinate,
    orientation: Orientation,
    length: usize,
) -> Result<CellMask, PlacementError> {
    let run = cell_run(anchor, orientation, length)?;
    ensure_free(board, run)?;
    Ok(run)
}

fn ensure_free(board: &Board, run: CellMask) -> Result<(), PlacementError> {
    match run
        .iter_set_bits()
        .map(Coordinate::from)
        .find(|&cell| !board.is_free(cell))
    {
        Some(taken) => Err(PlacementError::Overlap(taken)),
        None => Ok(()),
    }
}

/// Place `id` on `player`'s board and fleet together. On error neither is
/// touched.
pub fn place(
    player: &mut PlayerState,
    id: ShipId,
    anchor: Coordinate,
    orientation: Orientation,
) -> Result<Ship, PlacementError> {
    if player.fleet.is_placed(id) {
        return Err(PlacementError::ShipAlreadyPlaced(id));
    }
    let ship = Ship::new(id, anchor, orientation)?;
    ensure_free(&player.board, ship.mask())?;

    player.board.occupy(ship.mask());
    player.fleet.insert(ship);
    Ok(ship)
}

/// Every legal `(anchor, orientation)` for a ship of `length` on `board`,
/// horizontal placements first, each in row-major order.
pub fn legal_placements(
    board: &Board,
    length: usize,
) -> impl Iterator<Item = (Coordinate, Orientation)> + '_ {
    [Orientation::Horizontal, Orientation::Vertical]
        .into_iter()
        .flat_map(|orientation| Coordinate::all().map(move |anchor| (anchor, orientation)))
        .filter(move |&(anchor, orientation)| validate(board, anchor, orientation, length).is_ok())
}

/// Pick a legal placement uniformly at random, or `None` if the ship no
/// longer fits anywhere.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    length: usize,
    rng: &mut R,
) -> Option<(Coordinate, Orientation)> {
    let count = legal_placements(board, length).count();
    if count == 0 {
        return None;
    }
    let pick = rng.random_range(0..count);
    legal_placements(board, length).nth(pick)
}
