//! Plays a full match between two random fleets with uniformly random shots
//! and prints a JSON summary. Used as an end-to-end smoke run of the engine.

use battleship::{init_logging, Coordinate, GameEngine, Phase, PlayerId, TargetCell};
use clap::Parser;
use rand::{rngs::SmallRng, seq::IndexedRandom, SeedableRng};
use serde_json::json;

/// Upper bound on shots in a match: every cell of both boards.
const MAX_SHOTS: usize = 200;

#[derive(Parser)]
#[command(about = "Simulate a random-shot match between two seeded fleets")]
struct Args {
    /// Seed for Player 1's placement and shots.
    seed1: u64,
    /// Seed for Player 2's placement and shots.
    seed2: u64,
}

fn random_unknown_cell(engine: &GameEngine, player: PlayerId, rng: &mut SmallRng) -> Option<Coordinate> {
    let view = engine.view_opponent_board(player);
    let unknown: Vec<Coordinate> = Coordinate::all()
        .filter(|c| view[c.row][c.col] == TargetCell::Unknown)
        .collect();
    unknown.choose(rng).copied()
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rngs = [
        SmallRng::seed_from_u64(args.seed1),
        SmallRng::seed_from_u64(args.seed2),
    ];
    let mut engine = GameEngine::new();

    for player in [PlayerId::Player1, PlayerId::Player2] {
        engine.place_fleet_randomly(player, &mut rngs[player.index()])?;
    }

    for _ in 0..MAX_SHOTS {
        if engine.current_phase() != Phase::Combat {
            break;
        }
        let player = engine.active_player();
        let target = random_unknown_cell(&engine, player, &mut rngs[player.index()])
            .ok_or_else(|| anyhow::anyhow!("{} has no cell left to target", player))?;
        engine.attack(player, target)?;
    }

    let state = engine.state();
    let winner = match engine.winner() {
        Some(PlayerId::Player1) => Some("player1"),
        Some(PlayerId::Player2) => Some("player2"),
        None => None,
    };
    let result = json!({
        "player1": {"shots": state.player(PlayerId::Player1).shots_fired()},
        "player2": {"shots": state.player(PlayerId::Player2).shots_fired()},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
