//! Board tests through the public API

use blockfall::core::{Board, Piece, PieceState};
use blockfall::types::{Cell, Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, color: Color) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Cell::Filled(color));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 200);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(Cell::Vacant), "({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Cell::Filled(Color::Purple)));
    assert_eq!(board.get(5, 10), Some(Cell::Filled(Color::Purple)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, Cell::Vacant));
    assert_eq!(board.get(5, 10), Some(Cell::Vacant));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, Cell::Filled(Color::Red)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Cell::Filled(Color::Red)));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(19));

    for x in 0..9 {
        board.set(x, 19, Cell::Filled(Color::Blue));
    }
    assert!(!board.is_row_full(19));

    board.set(9, 19, Cell::Filled(Color::Blue));
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_board_merge_then_collide() {
    let mut board = Board::new();
    let l = PieceState::at(Piece::new(PieceKind::L), 3, 18);
    assert!(!board.collides(&l));

    board.merge(&l);
    assert_eq!(board.filled_count(), 4);
    assert_eq!(board.get(5, 18), Some(Cell::Filled(Color::Orange)));
    assert!(board.collides(&l));

    // Same piece one column left overlaps at (3..=5, 19)
    assert!(board.collides(&l.shifted(-1, 0)));
    // Directly above is free
    assert!(!board.collides(&l.shifted(0, -2)));
}

#[test]
fn test_board_clear_keeps_colors_of_shifted_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, Color::Red);
    fill_row(&mut board, 18, Color::Red);
    board.set(0, 17, Cell::Filled(Color::Green));
    board.set(9, 16, Cell::Filled(Color::Yellow));

    assert_eq!(board.clear_lines(), 2);
    assert_eq!(board.get(0, 19), Some(Cell::Filled(Color::Green)));
    assert_eq!(board.get(9, 18), Some(Cell::Filled(Color::Yellow)));
    assert_eq!(board.filled_count(), 2);
    // Top rows refilled with vacant cells
    for y in 0..2 {
        assert!(board.row(y).unwrap().iter().all(|c| c.is_vacant()));
    }
}

#[test]
fn test_board_clear_four_stacked_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, Color::Cyan);
    }
    assert_eq!(board.clear_lines(), 4);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 0, Color::Red);
    fill_row(&mut board, 10, Color::Red);
    board.clear();
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_spawn_blocked() {
    let mut board = Board::new();
    let spawn = PieceState::spawn(Piece::new(PieceKind::O));
    assert!(!board.collides(&spawn));

    board.set(4, 0, Cell::Filled(Color::Red));
    assert!(board.collides(&spawn));
}

#[test]
fn test_board_write_rows_matches_get() {
    let mut board = Board::new();
    board.set(3, 7, Cell::Filled(Color::Purple));
    let mut rows = [[Cell::Vacant; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_rows(&mut rows);

    for y in 0..BOARD_HEIGHT as usize {
        for x in 0..BOARD_WIDTH as usize {
            assert_eq!(Some(rows[y][x]), board.get(x as i8, y as i8));
        }
    }
}
