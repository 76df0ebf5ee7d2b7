use battleship::{
    AttackError, CellState, Coordinate, GameEngine, GameState, Orientation, Phase, PlacementError,
    PlayerId, ShipId, BOARD_SIZE, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const N: usize = BOARD_SIZE as usize;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn ship_id() -> impl Strategy<Value = ShipId> {
    (0..5usize).prop_map(|i| ShipId::new(i).unwrap())
}

fn random_combat_engine(seed: u64) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    engine.place_fleet_randomly(PlayerId::Player1, &mut rng).unwrap();
    engine.place_fleet_randomly(PlayerId::Player2, &mut rng).unwrap();
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Accepted placements occupy exactly the run from the anchor.
    #[test]
    fn placement_occupies_exact_run(
        id in ship_id(),
        row in 0..N,
        col in 0..N,
        orient in orientation(),
    ) {
        let engine = GameEngine::new();
        let len = id.length();
        let fits = match orient {
            Orientation::Horizontal => col + len <= N,
            Orientation::Vertical => row + len <= N,
        };
        let result = engine.state().place_ship(PlayerId::Player1, id, Coordinate::new(row, col), orient);

        if fits {
            let state = result.unwrap();
            let view = state.own_board_view(PlayerId::Player1);
            for r in 0..N {
                for c in 0..N {
                    let in_run = match orient {
                        Orientation::Horizontal => r == row && c >= col && c < col + len,
                        Orientation::Vertical => c == col && r >= row && r < row + len,
                    };
                    let expected = if in_run { CellState::Occupied } else { CellState::Empty };
                    prop_assert_eq!(view[r][c], expected);
                }
            }
        } else {
            prop_assert_eq!(result.unwrap_err(), PlacementError::OutOfBounds(Coordinate::new(row, col)));
        }
    }

    /// Random fleets never overlap and always cover every ship cell.
    #[test]
    fn random_fleets_cover_all_cells(seed in any::<u64>()) {
        let engine = random_combat_engine(seed);
        prop_assert_eq!(engine.current_phase(), Phase::Combat);
        for player in [PlayerId::Player1, PlayerId::Player2] {
            let board = *engine.state().player(player).board();
            prop_assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
        }
    }

    /// Every accepted attack flips the turn once; rejected ones change nothing.
    /// The game ends exactly when a fleet is fully sunk, won by the attacker.
    #[test]
    fn turns_alternate_until_fleet_sunk(seed in any::<u64>(), shots in 1..400usize) {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut engine = random_combat_engine(seed);

        for _ in 0..shots {
            if engine.current_phase() != Phase::Combat {
                break;
            }
            let before: GameState = engine.state();
            let attacker = before.active_player();
            let target = Coordinate::new(rng.random_range(0..N), rng.random_range(0..N));

            match engine.attack(attacker, target) {
                Ok((next, outcome)) => {
                    let defender = next.player(attacker.opponent());
                    prop_assert_eq!(outcome.game_won, defender.fleet().all_sunk());
                    if outcome.game_won {
                        prop_assert_eq!(next.phase(), Phase::Finished);
                        prop_assert_eq!(next.winner(), Some(attacker));
                        prop_assert_eq!(next.active_player(), attacker);
                    } else {
                        prop_assert_eq!(next.phase(), Phase::Combat);
                        prop_assert_eq!(next.active_player(), attacker.opponent());
                    }
                }
                Err(e) => {
                    prop_assert_eq!(e, AttackError::AlreadyAttacked(target));
                    prop_assert_eq!(engine.state(), before);
                }
            }

            // The opponent may never move out of turn.
            let idle = engine.active_player().opponent();
            if engine.current_phase() == Phase::Combat {
                let snapshot = engine.state();
                prop_assert_eq!(
                    engine.attack(idle, Coordinate::new(0, 0)).unwrap_err(),
                    AttackError::NotYourTurn(idle)
                );
                prop_assert_eq!(engine.state(), snapshot);
            }
        }

        for player in [PlayerId::Player1, PlayerId::Player2] {
            for ship in engine.state().player(player).fleet().placed() {
                prop_assert!(ship.hit_count() <= ship.length());
                prop_assert_eq!(ship.is_sunk(), ship.hit_count() == ship.length());
            }
        }
    }

    /// Attacking the same cell twice is rejected and leaves hits untouched.
    #[test]
    fn repeat_attack_is_idempotent(seed in any::<u64>(), row in 0..N, col in 0..N) {
        let mut engine = random_combat_engine(seed);
        let target = Coordinate::new(row, col);
        engine.attack(PlayerId::Player1, target).unwrap();
        // Player 2 misses somewhere it has not shot before.
        let p1_board = *engine.state().player(PlayerId::Player1).board();
        let spare = Coordinate::all()
            .find(|&c| p1_board.cell_at(c) == Ok(CellState::Empty))
            .unwrap();
        engine.attack(PlayerId::Player2, spare).unwrap();

        let before = engine.state();
        prop_assert_eq!(
            engine.attack(PlayerId::Player1, target).unwrap_err(),
            AttackError::AlreadyAttacked(target)
        );
        prop_assert_eq!(engine.state(), before);
    }
}
