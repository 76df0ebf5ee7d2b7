#![cfg(feature = "std")]

//! Board and status rendering for the terminal front end.

use std::io::{self, Write};

use crate::board::{CellState, Coordinate, OwnView, TargetCell, TargetView};
use crate::config::BOARD_SIZE;
use crate::{AttackOutcome, AttackResult, GameEngine, PlayerId, ShipStatus};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Presentation name of a cell, e.g. `(4, 0)` is `A5`.
pub fn coord_to_string(coord: Coordinate) -> String {
    let col = (b'A' + coord.col as u8) as char;
    format!("{}{}", col, coord.row + 1)
}

fn write_frame<W, F>(out: &mut W, mut cell: F) -> io::Result<()>
where
    W: Write,
    F: FnMut(usize, usize) -> char,
{
    writeln!(out, "    ╔═══════════════════════╗")?;
    write!(out, "    ║  ")?;
    for c in 0..GRID_SIZE {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out, " ║")?;
    writeln!(out, "    ╠═══════════════════════╣")?;
    for r in 0..GRID_SIZE {
        write!(out, "    ║ {:2}", r + 1)?;
        for c in 0..GRID_SIZE {
            write!(out, " {}", cell(r, c))?;
        }
        writeln!(out, " ║")?;
    }
    writeln!(out, "    ╚═══════════════════════╝")
}

/// Draw a player's own board with ships visible.
pub fn write_own_board<W: Write>(out: &mut W, view: &OwnView) -> io::Result<()> {
    write_frame(out, |r, c| match view[r][c] {
        CellState::Empty => '.',
        CellState::Occupied => 'S',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
    })?;
    writeln!(out, "    Legend: S=Ship  X=Hit  o=Miss  .=Water")
}

/// Draw the opponent's board as far as it has been revealed.
pub fn write_target_board<W: Write>(out: &mut W, view: &TargetView) -> io::Result<()> {
    write_frame(out, |r, c| match view[r][c] {
        TargetCell::Unknown => '.',
        TargetCell::Hit => 'X',
        TargetCell::Miss => 'o',
    })?;
    writeln!(out, "    Legend: X=Hit  o=Miss  .=Unknown")
}

pub fn write_fleet_status<W: Write>(out: &mut W, status: &[ShipStatus]) -> io::Result<()> {
    writeln!(out, "    Ships:")?;
    for ship in status {
        let state = match (ship.position, ship.sunk) {
            (None, _) => "Not placed",
            (Some(_), true) => "SUNK",
            (Some(_), false) => "Active",
        };
        writeln!(
            out,
            "      {} ({}): {} [{} hit]",
            ship.id,
            ship.id.length(),
            state,
            ship.hits
        )?;
    }
    Ok(())
}

/// Opponent board on top, own board and fleet below.
pub fn write_player_view<W: Write>(out: &mut W, engine: &GameEngine, player: PlayerId) -> io::Result<()> {
    writeln!(out, "Opponent board:")?;
    write_target_board(out, &engine.view_opponent_board(player))?;
    writeln!(out, "\nYour board:")?;
    write_own_board(out, &engine.view_own_board(player))?;
    write_fleet_status(out, &engine.fleet_status(player))
}

/// One-line report of an attack from the attacker's side.
pub fn describe_outcome(outcome: &AttackOutcome) -> String {
    let at = coord_to_string(outcome.target);
    match outcome.result {
        AttackResult::Miss => format!("💧 Miss. Your shot at {} hit only water.", at),
        AttackResult::Hit(_) => format!("🎯 HIT! Your shot at {} struck an enemy ship!", at),
        AttackResult::Sink(ship) => format!("💥 SUNK! You destroyed the enemy's {} at {}!", ship, at),
    }
}

pub fn write_placement_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nShip placement:")?;
    writeln!(out, "  <COLUMN><ROW> <ORIENTATION>   e.g. A5 H, B3 V, J10 H")?;
    writeln!(out, "  Columns A-J, rows 1-10, H=Horizontal (default), V=Vertical")?;
    writeln!(out, "  Ships extend right (H) or down (V) from the given cell.")?;
    writeln!(out, "  ENTER   place the current ship at random")?;
    writeln!(out, "  auto    place the rest of the fleet at random")?;
    writeln!(out, "  reset   start a new game")?;
    writeln!(out, "  quit    leave the game\n")
}

pub fn write_targeting_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nTargeting:")?;
    writeln!(out, "  <COLUMN><ROW>   e.g. A5, B10, J1")?;
    writeln!(out, "  X = hit, o = miss, . = not yet targeted")?;
    writeln!(out, "  reset   start a new game")?;
    writeln!(out, "  quit    leave the game\n")
}
