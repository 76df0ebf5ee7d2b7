//! Terminal hot-seat front end.
//!
//! Two people share one terminal and take turns at the prompt. The loop only
//! talks to the engine through [`GameEngine`]'s public commands and queries,
//! and is generic over its input and output so it can be scripted.

#![cfg(feature = "std")]

pub mod input;
pub mod interface;

pub use input::*;
pub use interface::*;

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail};
use rand::Rng;

use crate::{placement, GameEngine, Phase, PlayerId};

enum Directive {
    Quit,
    Reset,
    Help,
    Line(String),
}

fn read_directive<I: BufRead>(input: &mut I) -> anyhow::Result<Directive> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        bail!("input closed before the game finished");
    }
    let line = buf.trim();
    let directive = if line.eq_ignore_ascii_case("quit") {
        Directive::Quit
    } else if line.eq_ignore_ascii_case("reset") {
        Directive::Reset
    } else if line.eq_ignore_ascii_case("help") {
        Directive::Help
    } else {
        Directive::Line(line.to_string())
    };
    Ok(directive)
}

fn banner<O: Write>(out: &mut O, title: &str) -> io::Result<()> {
    writeln!(out, "\n════════════════════════════════════════════════════════════")?;
    writeln!(out, "{:^60}", title)?;
    writeln!(out, "════════════════════════════════════════════════════════════")
}

/// Play one match to the end. Returns the winner, or `None` if the players
/// quit.
pub fn run_local<R, I, O>(
    engine: &mut GameEngine,
    rng: &mut R,
    input: &mut I,
    out: &mut O,
) -> anyhow::Result<Option<PlayerId>>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    banner(out, "BATTLESHIP")?;
    loop {
        let player = engine.active_player();
        let keep_going = match engine.current_phase() {
            Phase::Placement => placement_turn(engine, player, rng, input, out)?,
            Phase::Combat => combat_turn(engine, player, input, out)?,
            Phase::Finished => {
                banner(out, "GAME OVER")?;
                for seat in [PlayerId::Player1, PlayerId::Player2] {
                    writeln!(out, "\n{}'s board:", seat)?;
                    write_own_board(out, &engine.view_own_board(seat))?;
                }
                let winner = engine.winner();
                if let Some(winner) = winner {
                    writeln!(out, "\n🎉 {} wins! Every enemy ship has been sunk.", winner)?;
                }
                return Ok(winner);
            }
        };
        if !keep_going {
            writeln!(out, "Game abandoned.")?;
            return Ok(None);
        }
    }
}

/// One placement prompt. Returns `false` when the players quit.
fn placement_turn<R, I, O>(
    engine: &mut GameEngine,
    player: PlayerId,
    rng: &mut R,
    input: &mut I,
    out: &mut O,
) -> anyhow::Result<bool>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let state = engine.state();
    let ship = state
        .player(player)
        .fleet()
        .next_unplaced()
        .ok_or_else(|| anyhow!("{} has no ship left to place", player))?;

    writeln!(out, "\n{} - ship placement", player)?;
    write_own_board(out, &engine.view_own_board(player))?;
    write!(
        out,
        "Place your {} (length {}) [e.g. A5 H, ENTER for random, 'auto', 'help']: ",
        ship,
        ship.length()
    )?;
    out.flush()?;

    let line = match read_directive(input)? {
        Directive::Quit => return Ok(false),
        Directive::Reset => {
            engine.reset();
            writeln!(out, "Game reset.")?;
            return Ok(true);
        }
        Directive::Help => {
            write_placement_help(out)?;
            return Ok(true);
        }
        Directive::Line(line) => line,
    };

    let result = if line.is_empty() {
        match placement::random_placement(state.player(player).board(), ship.length(), rng) {
            Some((anchor, orientation)) => engine.place_ship(player, ship, anchor, orientation),
            None => Err(crate::PlacementError::NoLegalPlacement(ship)),
        }
    } else if line.eq_ignore_ascii_case("auto") {
        engine.place_fleet_randomly(player, rng)
    } else {
        match parse_placement(&line) {
            Ok((anchor, orientation)) => engine.place_ship(player, ship, anchor, orientation),
            Err(e) => {
                writeln!(out, "✗ {}", e)?;
                return Ok(true);
            }
        }
    };

    match result {
        Ok(next) => {
            writeln!(out, "✓ {} placed.", ship)?;
            if next.phase() == Phase::Combat {
                banner(out, "ALL SHIPS PLACED - BATTLE BEGINS")?;
            } else if next.active_player() != player {
                writeln!(out, "\nFleet complete. Pass the terminal to {}.", next.active_player())?;
            }
        }
        Err(e) => {
            writeln!(out, "✗ {}", e)?;
            writeln!(out, "   Hint: make sure the ship fits and doesn't overlap with others.")?;
        }
    }
    Ok(true)
}

/// One targeting prompt. Returns `false` when the players quit.
fn combat_turn<I, O>(
    engine: &mut GameEngine,
    player: PlayerId,
    input: &mut I,
    out: &mut O,
) -> anyhow::Result<bool>
where
    I: BufRead,
    O: Write,
{
    banner(out, &format!("{} - YOUR TURN", player))?;
    write_player_view(out, engine, player)?;
    write!(out, "\nEnter target coordinates (or 'help'): ")?;
    out.flush()?;

    let line = match read_directive(input)? {
        Directive::Quit => return Ok(false),
        Directive::Reset => {
            engine.reset();
            writeln!(out, "Game reset.")?;
            return Ok(true);
        }
        Directive::Help => {
            write_targeting_help(out)?;
            return Ok(true);
        }
        Directive::Line(line) => line,
    };

    let target = match parse_coord(&line) {
        Ok(target) => target,
        Err(e) => {
            writeln!(out, "✗ Invalid coordinate: {}", e)?;
            return Ok(true);
        }
    };

    match engine.attack(player, target) {
        Ok((next, outcome)) => {
            writeln!(out, "\n{}", describe_outcome(&outcome))?;
            if next.phase() == Phase::Combat {
                writeln!(out, "Pass the terminal to {}.", next.active_player())?;
            }
        }
        Err(e) => writeln!(out, "✗ {}", e)?,
    }
    Ok(true)
}
