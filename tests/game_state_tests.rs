use pmcts_connect_four::{utils::random_element, ConnectFourState, PmctsError, Player, COLUMNS, ROWS};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A full game that ends with every cell filled and no four in a row
const DRAW_GAME: [usize; 42] = [
    4, 3, 6, 0, 1, 4, 5, 5, 1, 1, 5, 0, 1, 6, 0, 1, 5, 5, 1, 0, 4, 6, 3, 2, 6, 6, 0, 4, 6, 5, 2,
    0, 4, 2, 4, 2, 2, 2, 3, 3, 3, 3,
];

fn std_hash(state: &ConnectFourState) -> u64 {
    let mut hasher = DefaultHasher::new();
    state.hash(&mut hasher);
    hasher.finish()
}

/// Walks a seeded random game, calling `check` on every position
fn for_each_random_position(seed: u64, mut check: impl FnMut(&ConnectFourState)) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = ConnectFourState::new();
    check(&state);
    while !state.is_over() {
        let column = random_element(&state.legal_moves(), &mut rng).unwrap();
        state = state.apply_move(column).unwrap();
        check(&state);
    }
}

#[test]
fn test_empty_board() {
    let state = ConnectFourState::new();

    assert_eq!(state.legal_moves(), (0..COLUMNS).collect::<Vec<_>>());
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.first_winner(), None);
    assert_eq!(state.last_placed_column(), None);
    assert_eq!(state.last_placed_row(), None);
    assert!(!state.is_over());
    assert!(!state.is_draw());
    assert!(!state.is_won());
}

#[test]
fn test_gravity_law() {
    let mut state = ConnectFourState::new();

    for k in 0..ROWS {
        let mover = state.current_player();
        state.play_column(2).unwrap();
        assert_eq!(state.last_placed_column(), Some(2));
        assert_eq!(state.last_placed_row(), Some(ROWS - 1 - k));
        assert_eq!(state.cell(ROWS - 1 - k, 2), Some(mover));
    }

    // Alternating discs in one column never make four
    assert!(!state.is_won());
    assert!(!state.legal_moves().contains(&2));
}

#[test]
fn test_player_flips_after_every_move() {
    let state = ConnectFourState::new().apply_move(0).unwrap();
    assert_eq!(state.current_player(), Player::O);
    let state = state.apply_move(0).unwrap();
    assert_eq!(state.current_player(), Player::X);
}

#[test]
fn test_apply_move_leaves_original_untouched() {
    let original = ConnectFourState::from_moves(&[3, 3, 4]).unwrap();
    let before = *original.cells();

    let next = original.apply_move(5).unwrap();

    assert_eq!(*original.cells(), before, "apply_move must not mutate its receiver");
    assert_eq!(original.current_player(), Player::O);
    assert_eq!(original.last_placed_column(), Some(4));
    assert_ne!(original, next);
    assert_eq!(next.cell(ROWS - 1, 5), Some(Player::O));
}

#[test]
fn test_full_column_is_illegal() {
    let mut state = ConnectFourState::from_moves(&[0, 0, 0, 0, 0, 0]).unwrap();
    let before = state;

    assert!(matches!(state.apply_move(0), Err(PmctsError::IllegalMove { column: 0 })));
    assert!(matches!(state.play_column(0), Err(PmctsError::IllegalMove { column: 0 })));
    assert_eq!(state, before, "a rejected move must not change the state");
    assert_eq!(state.current_player(), before.current_player());
    assert_eq!(state.legal_moves(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_out_of_range_column_is_rejected() {
    let state = ConnectFourState::new();
    assert!(matches!(
        state.apply_move(COLUMNS),
        Err(PmctsError::ColumnOutOfRange { column: 7 })
    ));
    assert!(!state.is_column_playable(COLUMNS));
}

#[test]
fn test_vertical_win() {
    // X: column 3 rows 5..2, O: column 4 rows 5..3
    let state = ConnectFourState::from_moves(&[3, 4, 3, 4, 3, 4, 3]).unwrap();

    assert!(state.is_won());
    assert!(state.is_over());
    assert!(!state.is_draw());
    assert_eq!(state.first_winner(), Some(Player::X));
    assert_eq!(state.last_placed_column(), Some(3));
    assert_eq!(state.last_placed_row(), Some(2));
}

#[test]
fn test_horizontal_win() {
    let before = ConnectFourState::from_moves(&[0, 0, 1, 1, 2, 2]).unwrap();
    assert!(!before.is_won());

    let state = before.apply_move(3).unwrap();
    assert_eq!(state.first_winner(), Some(Player::X));
}

#[test]
fn test_diagonal_up_right_win() {
    let moves = [0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3];
    let before = ConnectFourState::from_moves(&moves[..moves.len() - 1]).unwrap();
    assert!(!before.is_won());

    let state = ConnectFourState::from_moves(&moves).unwrap();
    assert_eq!(state.first_winner(), Some(Player::X));
    assert_eq!(state.cell(5, 0), Some(Player::X));
    assert_eq!(state.cell(2, 3), Some(Player::X));
}

#[test]
fn test_diagonal_down_right_win() {
    let moves = [6, 5, 5, 4, 4, 3, 4, 3, 3, 0, 3];
    let before = ConnectFourState::from_moves(&moves[..moves.len() - 1]).unwrap();
    assert!(!before.is_won());

    let state = ConnectFourState::from_moves(&moves).unwrap();
    assert_eq!(state.first_winner(), Some(Player::X));
}

#[test]
fn test_win_in_the_middle_of_a_line() {
    // X fills columns 0, 1 and 3 on the bottom row, then completes the line at 2
    let state = ConnectFourState::from_moves(&[0, 0, 1, 1, 3, 3, 2]).unwrap();
    assert_eq!(state.first_winner(), Some(Player::X));
}

#[test]
fn test_first_winner_is_stable() {
    let mut state = ConnectFourState::from_moves(&[3, 4, 3, 4, 3, 4, 3]).unwrap();
    assert_eq!(state.first_winner(), Some(Player::X));

    // O completes its own column afterwards; the first winner stays X
    state.play_column(4).unwrap();
    assert_eq!(state.first_winner(), Some(Player::X));
    state.play_column(0).unwrap();
    assert_eq!(state.first_winner(), Some(Player::X));
}

#[test]
fn test_full_board_without_four_is_a_draw() {
    let state = ConnectFourState::from_moves(&DRAW_GAME).unwrap();

    assert!(state.is_draw());
    assert!(!state.is_won());
    assert!(state.is_over());
    assert!(state.is_full());
    assert!(state.legal_moves().is_empty());
    assert!(state.cells().iter().all(|cell| cell.is_some()));
}

#[test]
fn test_legal_moves_and_draw_properties_hold_during_play() {
    for seed in 0..25 {
        for_each_random_position(seed, |state| {
            let expected: Vec<usize> = (0..COLUMNS)
                .filter(|&column| state.cell(0, column).is_none())
                .collect();
            assert_eq!(state.legal_moves(), expected);
            assert_eq!(state.is_draw(), state.legal_moves().is_empty() && !state.is_won());
            assert!(!(state.is_draw() && state.is_won()));
        });
    }
}

#[test]
fn test_potential_wins_for_both_players() {
    // X threatens column 3, O threatens column 4, X to move
    let state = ConnectFourState::from_moves(&[3, 4, 3, 4, 3, 4]).unwrap();

    assert_eq!(state.potential_wins(Player::X), vec![3]);
    assert_eq!(state.potential_wins(Player::O), vec![4]);
    assert!(ConnectFourState::new().potential_wins(Player::X).is_empty());
}

#[test]
fn test_potential_wins_match_applied_moves() {
    for seed in 100..120 {
        for_each_random_position(seed, |state| {
            if state.is_over() {
                return;
            }
            let mover = state.current_player();
            let expected: Vec<usize> = state
                .legal_moves()
                .into_iter()
                .filter(|&column| state.apply_move(column).unwrap().first_winner() == Some(mover))
                .collect();
            assert_eq!(state.potential_wins(mover), expected);
        });
    }
}

#[test]
fn test_equal_positions_hash_alike() {
    // Same discs, same last placement, reached in a different order
    let a = ConnectFourState::from_moves(&[0, 1, 2, 3]).unwrap();
    let b = ConnectFourState::from_moves(&[2, 1, 0, 3]).unwrap();

    assert_eq!(a, b);
    assert_eq!(std_hash(&a), std_hash(&b));
    assert_eq!(a.hash_code(), b.hash_code());
}

#[test]
fn test_last_placement_distinguishes_positions() {
    let a = ConnectFourState::from_moves(&[0, 1, 2]).unwrap();
    let b = ConnectFourState::from_moves(&[2, 1, 0]).unwrap();

    assert_eq!(a.cells(), b.cells());
    assert_ne!(a, b);
    assert_ne!(a.hash_code(), b.hash_code());
}

#[test]
fn test_display() {
    let state = ConnectFourState::from_moves(&[3, 4]).unwrap();
    let expected = "0 1 2 3 4 5 6\n\
                    - - - - - - -\n\
                    - - - - - - -\n\
                    - - - - - - -\n\
                    - - - - - - -\n\
                    - - - - - - -\n\
                    - - - X O - -";
    assert_eq!(state.to_string(), expected);
}

#[test]
fn test_player_helpers() {
    assert_eq!(Player::X.opponent(), Player::O);
    assert_eq!(Player::O.opponent(), Player::X);
    assert_eq!(Player::X.to_string(), "X");
    assert_eq!("o".parse::<Player>().unwrap(), Player::O);
    assert!(matches!("Z".parse::<Player>(), Err(PmctsError::Parse(_))));
}
