use battleship::attack::resolve;
use battleship::placement;
use battleship::{
    AttackError, AttackResult, CellState, Coordinate, Orientation, PlayerState, ShipId,
};

/// A full fleet laid out along the left edge, one ship per row pair.
fn defender() -> PlayerState {
    let mut player = PlayerState::new();
    for (i, id) in ShipId::all().enumerate() {
        placement::place(&mut player, id, Coordinate::new(i * 2, 0), Orientation::Horizontal).unwrap();
    }
    player
}

#[test]
fn test_hit_and_miss() {
    let mut player = defender();

    let out = resolve(&mut player, Coordinate::new(0, 0)).unwrap();
    assert_eq!(out.result, AttackResult::Hit(ShipId::BATTLESHIP));
    assert!(!out.game_won);
    assert_eq!(player.fleet().get(ShipId::BATTLESHIP).unwrap().hit_count(), 1);
    assert_eq!(player.board().cell_at(Coordinate::new(0, 0)).unwrap(), CellState::Hit);

    let out = resolve(&mut player, Coordinate::new(1, 0)).unwrap();
    assert_eq!(out.result, AttackResult::Miss);
    assert_eq!(player.board().cell_at(Coordinate::new(1, 0)).unwrap(), CellState::Miss);
}

#[test]
fn test_sink_reported_on_last_cell() {
    let mut player = defender();
    let out = resolve(&mut player, Coordinate::new(4, 0)).unwrap();
    assert_eq!(out.result, AttackResult::Hit(ShipId::DESTROYER));
    let out = resolve(&mut player, Coordinate::new(4, 1)).unwrap();
    assert_eq!(out.result, AttackResult::Sink(ShipId::DESTROYER));
    assert!(player.fleet().get(ShipId::DESTROYER).unwrap().is_sunk());
    assert!(!out.game_won);
}

#[test]
fn test_repeat_attack_changes_nothing() {
    let mut player = defender();
    resolve(&mut player, Coordinate::new(2, 1)).unwrap();
    resolve(&mut player, Coordinate::new(9, 9)).unwrap();
    let before = player;

    let target = Coordinate::new(2, 1);
    assert_eq!(resolve(&mut player, target).unwrap_err(), AttackError::AlreadyAttacked(target));
    let target = Coordinate::new(9, 9);
    assert_eq!(resolve(&mut player, target).unwrap_err(), AttackError::AlreadyAttacked(target));
    assert_eq!(player, before);
    assert_eq!(player.fleet().get(ShipId::CRUISER).unwrap().hit_count(), 1);
}

#[test]
fn test_out_of_bounds_target() {
    let mut player = defender();
    let target = Coordinate::new(10, 10);
    assert_eq!(resolve(&mut player, target).unwrap_err(), AttackError::OutOfBounds(target));
    assert_eq!(player, defender());
}

#[test]
fn test_last_ship_wins_game() {
    let mut player = defender();
    let cells: Vec<Coordinate> = player.fleet().placed().flat_map(|s| s.cells()).collect();
    let (last, rest) = cells.split_last().unwrap();
    for &c in rest {
        assert!(!resolve(&mut player, c).unwrap().game_won);
    }
    let out = resolve(&mut player, *last).unwrap();
    assert!(out.game_won);
    assert_eq!(out.result, AttackResult::Sink(ShipId::PATROL_BOAT));
    assert!(player.fleet().all_sunk());
}
