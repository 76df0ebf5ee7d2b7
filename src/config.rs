use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// The fixed fleet every player places, in placement order.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
    ShipType::new("Submarine", 2),
    ShipType::new("Patrol Boat", 1),
];

/// Total number of ship segments in one fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 2 + 2 + 1;
