use pretty_assertions::assert_eq;
use toroidal_life::auxiliary::seeded_rng;
use toroidal_life::{Board, BoardError};

#[test]
fn neighbour_counts_in_range() {
    for seed in 0..20 {
        let board = Board::new_random(9, 6, &mut seeded_rng(seed)).unwrap();
        for r in 0..board.height() {
            for c in 0..board.width() {
                assert!(board.count_live_neighbors(r, c) <= 8);
            }
        }
    }
}

#[test]
fn full_board_counts_eight() {
    let mut board = Board::new_empty(3, 3).unwrap();
    for r in 0..3 {
        board.set_line(r as isize, 0, r as isize, 2, true);
    }
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(8, board.count_live_neighbors(r, c));
        }
    }
}

#[test]
fn corners_are_diagonal_neighbours() {
    let n = 6;
    let mut board = Board::new_empty(n, n).unwrap();
    board.set(0, 0, true);
    board.set(n - 1, n - 1, true);

    assert_eq!(1, board.count_live_neighbors(0, 0));
    assert_eq!(1, board.count_live_neighbors(n - 1, n - 1));
    assert_eq!(0, board.count_live_neighbors(2, 2));
}

#[test]
fn step_is_deterministic() {
    let start = Board::new_random(16, 12, &mut seeded_rng(42)).unwrap();
    let mut a = start.clone();
    let mut b = start;

    a.step();
    b.step();

    assert_eq!(a, b);
}

#[test]
fn same_seed_same_board() {
    let a = Board::new_random(20, 20, &mut seeded_rng(5)).unwrap();
    let b = Board::new_random(20, 20, &mut seeded_rng(5)).unwrap();
    let c = Board::new_random(20, 20, &mut seeded_rng(6)).unwrap();

    assert_eq!(a, b);
    assert!(a != c);
}

#[test]
fn random_fill_is_about_half() {
    let mut rng = seeded_rng(2024);
    let mut live = 0;
    let mut total = 0;
    for _ in 0..50 {
        let board = Board::new_random(20, 20, &mut rng).unwrap();
        for r in 0..board.height() {
            for c in 0..board.width() {
                if board.is_alive(r, c) {
                    live += 1;
                }
                total += 1;
            }
        }
    }
    let fraction = live as f64 / total as f64;
    assert!((0.4..0.6).contains(&fraction), "live fraction {}", fraction);
}

#[test]
fn entropy_board_builds() {
    let board = Board::new(30, 30).unwrap();
    assert_eq!((30, 30), (board.width(), board.height()));
    assert_eq!(900, board.cells().len());
}

#[test]
fn invalid_dimensions() {
    assert_eq!(
        Err(BoardError::InvalidDimension { width: 0, height: 0 }),
        Board::new(0, 0)
    );
    assert_eq!(
        "board dimensions must be positive, got 0x3",
        Board::new_empty(0, 3).unwrap_err().to_string()
    );
}
