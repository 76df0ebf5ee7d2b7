use battleship::{
    Coordinate, Orientation, PlacementError, Ship, ShipId, FLEET, NUM_SHIPS,
    TOTAL_SHIP_CELLS,
};

#[test]
fn test_fleet_composition() {
    let lengths: Vec<_> = FLEET.iter().map(|s| s.length()).collect();
    assert_eq!(lengths, vec![4, 3, 2, 2, 1]);
    assert_eq!(lengths.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
    assert_eq!(ShipId::all().count(), NUM_SHIPS);
}

#[test]
fn test_ship_id_bounds() {
    assert_eq!(ShipId::new(1), Some(ShipId::CRUISER));
    assert_eq!(ShipId::new(NUM_SHIPS), None);
    assert_eq!(ShipId::try_from(4u8), Ok(ShipId::PATROL_BOAT));
    assert_eq!(ShipId::try_from(5u8), Err(PlacementError::UnknownShip(5)));
    assert_eq!(ShipId::SUBMARINE.to_string(), "Submarine");
}

#[test]
fn test_cells_and_contains() -> Result<(), PlacementError> {
    let ship = Ship::new(ShipId::BATTLESHIP, Coordinate::new(0, 0), Orientation::Vertical)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0),
            Coordinate::new(3, 0)
        ]
    );
    for c in cells {
        assert!(ship.contains(c));
    }
    assert!(!ship.contains(Coordinate::new(4, 0)));
    assert_eq!(ship.origin(), Coordinate::new(0, 0));
    assert_eq!(ship.orientation(), Orientation::Vertical);
    Ok(())
}

#[test]
fn test_new_out_of_bounds() {
    let anchor = Coordinate::new(2, 8);
    assert_eq!(
        Ship::new(ShipId::CRUISER, anchor, Orientation::Horizontal).unwrap_err(),
        PlacementError::OutOfBounds(anchor)
    );
    let anchor = Coordinate::new(usize::MAX, 0);
    assert_eq!(
        Ship::new(ShipId::DESTROYER, anchor, Orientation::Vertical).unwrap_err(),
        PlacementError::OutOfBounds(anchor)
    );
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), PlacementError> {
    let mut ship = Ship::new(ShipId::DESTROYER, Coordinate::new(1, 1), Orientation::Horizontal)?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(Coordinate::new(1, 1)));
    assert_eq!(ship.hit_count(), 1);
    assert!(!ship.is_sunk());

    // same cell again does not count twice
    assert!(ship.register_hit(Coordinate::new(1, 1)));
    assert_eq!(ship.hit_count(), 1);

    assert!(ship.register_hit(Coordinate::new(1, 2)));
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_count(), ship.length());

    assert!(!ship.register_hit(Coordinate::new(0, 0)));
    assert_eq!(ship.hit_count(), 2);
    Ok(())
}
