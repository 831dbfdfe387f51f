use super::*;
use crate::error::OthelloError;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Dark.opponent(), Side::Light);
    assert_eq!(Side::Light.opponent(), Side::Dark);
    assert_eq!(Side::Dark.opponent().opponent(), Side::Dark);
}

#[test]
fn test_side_cell() {
    assert_eq!(Cell::from(Side::Dark), Cell::Dark);
    assert_eq!(Side::Light.cell(), Cell::Light);
    assert_eq!(Cell::Empty.side(), None);
    assert_eq!(Cell::Dark.side(), Some(Side::Dark));
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 28);

    let pos2 = Pos::from_index(28);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_try_new() {
    assert_eq!(Pos::try_new(7, 7).unwrap(), Pos::new(7, 7));
    assert_eq!(
        Pos::try_new(8, 0),
        Err(OthelloError::OutOfBounds { row: 8, col: 0 })
    );
    assert!(Pos::try_new(0, 8).is_err());
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_step() {
    assert_eq!(Pos::new(0, 0).step(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(0, 0).step(-1, 0), None);
    assert_eq!(Pos::new(7, 7).step(0, 1), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 7);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
}

#[test]
fn test_initial_board() {
    let board = Board::new();
    assert_eq!(board.count(Side::Dark), 2);
    assert_eq!(board.count(Side::Light), 2);
    assert_eq!(board.cell(Pos::new(3, 3)), Cell::Light);
    assert_eq!(board.cell(Pos::new(4, 4)), Cell::Light);
    assert_eq!(board.cell(Pos::new(3, 4)), Cell::Dark);
    assert_eq!(board.cell(Pos::new(4, 3)), Cell::Dark);
    assert_eq!(board.empty_cells().count(), 60);
}

#[test]
fn test_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(3, 3), Ok(Cell::Light));
    assert_eq!(
        board.get(8, 3),
        Err(OthelloError::OutOfBounds { row: 8, col: 3 })
    );
}

#[test]
fn test_set_overwrites() {
    let mut board = Board::new();
    board.set(3, 3, Side::Dark).unwrap();
    assert_eq!(board.get(3, 3), Ok(Cell::Dark));
    assert_eq!(board.count(Side::Light), 1);
    assert_eq!(board.count(Side::Dark), 3);
    assert!(board.set(0, 9, Side::Dark).is_err());
}

#[test]
fn test_clone_is_independent() {
    let board = Board::new();
    let mut copy = board.clone();
    copy.place(Pos::new(0, 0), Side::Dark);

    assert!(board.is_empty(Pos::new(0, 0)));
    assert_eq!(copy.cell(Pos::new(0, 0)), Cell::Dark);
}

#[test]
fn test_display_roundtrip() {
    let board = Board::new();
    let text = board.to_string();
    assert_eq!(text.lines().nth(3), Some("...OX..."));
    assert_eq!(text.parse::<Board>().unwrap(), board);
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(matches!(
        "XO".parse::<Board>(),
        Err(OthelloError::InvalidBoard { .. })
    ));

    let bad_char = "........\n".repeat(7) + "...Z....\n";
    assert!(bad_char.parse::<Board>().is_err());
}

#[test]
fn test_full_board() {
    let mut board = Board::empty();
    for idx in 0..TOTAL_CELLS {
        board.place(Pos::from_index(idx), Side::Light);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_bitboard_iter_row_major() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(5, 1));
    bb.set(Pos::new(0, 6));
    bb.set(Pos::new(7, 7));

    let positions: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(positions, vec![Pos::new(0, 6), Pos::new(5, 1), Pos::new(7, 7)]);
    assert_eq!(bb.count(), 3);

    bb.clear(Pos::new(0, 6));
    assert!(!bb.get(Pos::new(0, 6)));
}

#[test]
fn test_pos_accessors() {
    let pos = Pos::new(6, 1);
    assert_eq!((pos.row(), pos.col()), (6, 1));
    assert_eq!(Pos::try_new(7, 7).map(|p| (p.row(), p.col())), Ok((7, 7)));
}

#[test]
#[should_panic(expected = "off the board")]
fn test_pos_new_rejects_off_board_row() {
    let _ = Pos::new(8, 0);
}

#[test]
#[should_panic(expected = "off the board")]
fn test_pos_from_index_rejects_past_last_cell() {
    let _ = Pos::from_index(TOTAL_CELLS);
}

#[test]
fn test_disc_bitboards_match_cells() {
    let board = Board::new();
    for side in [Side::Dark, Side::Light] {
        let discs: Vec<Pos> = board.discs(side).iter_ones().collect();
        assert_eq!(discs.len(), 2);
        assert!(discs.iter().all(|&pos| board.cell(pos) == side.cell()));
    }
}
