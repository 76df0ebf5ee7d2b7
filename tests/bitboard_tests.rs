use battleship::{BitBoard, BitBoardError, CellMask};

#[test]
fn test_try_new_sizes() {
    let ok = BitBoard::<u128, 10>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_combinators() {
    let a = CellMask::from_cells([(0, 0), (5, 5)]).unwrap();
    let b = CellMask::from_cells([(5, 5), (9, 9)]).unwrap();
    assert_eq!((a & b).iter_set_bits().collect::<Vec<_>>(), vec![(5, 5)]);
    assert_eq!((a | b).count_ones(), 3);

    let mut c = a;
    c |= b;
    assert_eq!(c, a | b);
}

#[test]
fn test_from_raw_masks_unused_bits() {
    let full = BitBoard::<u16, 3>::from_raw(u16::MAX);
    assert_eq!(full.count_ones(), 9);
    assert_eq!(full.into_raw(), 0b1_1111_1111);
}

#[test]
fn test_try_from_raw_rejects_unused_bits() {
    let err = BitBoard::<u16, 3>::try_from_raw(1 << 9);
    assert_eq!(err, Err(BitBoardError::BitsOutsideBoard { n: 3 }));
    let ok = BitBoard::<u16, 3>::try_from_raw(0b1_0000_0001).unwrap();
    assert_eq!(ok.count_ones(), 2);
    assert!(BitBoard::<u8, 2>::try_from_raw(0xF0).is_err());
}

#[test]
fn test_deserialize_rejects_unused_bits() {
    let bytes = bincode::serialize(&(1u128 << 100)).unwrap();
    let err = bincode::deserialize::<CellMask>(&bytes).unwrap_err();
    assert!(err.to_string().contains("past the end"));

    let bytes = bincode::serialize(&(1u128 << 99)).unwrap();
    let mask: CellMask = bincode::deserialize(&bytes).unwrap();
    assert_eq!(mask.iter_set_bits().collect::<Vec<_>>(), vec![(9, 9)]);
}
