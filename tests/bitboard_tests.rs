use seabattle::{BitBoard, BitBoardError, FiredCells};

#[test]
fn test_set_reports_fresh_cells() {
    let mut bb = FiredCells::new();
    assert!(bb.is_empty());
    assert_eq!(bb.set(2, 3), Ok(true));
    assert_eq!(bb.set(2, 3), Ok(false));
    assert!(bb.contains((2, 3)));
    assert!(!bb.contains((9, 9)));
    assert_eq!(
        bb.set(8, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 8, col: 0 })
    );
    assert_eq!(bb.get(2, 3), Ok(true));
    assert_eq!(bb.get(3, 2), Ok(false));
    assert_eq!(bb.count_ones(), 1);
    assert_eq!(bb.count_zeros(), 63);
}

#[test]
fn test_clear_cells_skip_set_ones() {
    let mut bb = BitBoard::<u16, 4>::new();
    bb.set(0, 0).unwrap();
    bb.set(0, 2).unwrap();
    assert_eq!(bb.nth_clear(0), Some((0, 1)));
    assert_eq!(bb.nth_clear(1), Some((0, 3)));
    assert_eq!(bb.nth_clear(13), Some((3, 3)));
    assert_eq!(bb.nth_clear(14), None);
    let clear: Vec<_> = bb.iter_clear().take(3).collect();
    assert_eq!(clear, vec![(0, 1), (0, 3), (1, 0)]);
}

#[test]
fn test_fill_then_clear() {
    let mut bb = BitBoard::<u16, 4>::default();
    for r in 0..4 {
        for c in 0..4 {
            bb.set(r, c).unwrap();
        }
    }
    assert!(bb.is_full());
    assert_eq!(bb.iter_clear().next(), None);
    assert_eq!(bb.nth_clear(0), None);
    bb.clear_all();
    assert!(bb.is_empty());
    assert_eq!(bb.iter_clear().count(), 16);
}
